use serde::{Deserialize, Serialize};

/// Body returned alongside any non-2xx status.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct JsonError {
    pub error_message: String,
}
