mod company;
mod display_value;

pub mod result;

pub use company::{Company, SalesContact};
pub use display_value::DisplayValue;

use serde::{Deserialize, Serialize};

/// Form body of `POST /get_companies`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyQuery {
    pub input_prompt: String,
}
