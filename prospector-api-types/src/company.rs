use serde::{Deserialize, Serialize};

use crate::DisplayValue;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesContact {
    pub email: String,
    pub phone: String,
}

/// One company as returned by `/get_companies`. Every field is required, a record missing
/// one is rejected as a whole.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub linkedin: String,
    pub size: DisplayValue,
    pub funding: DisplayValue,
    pub year_founded: DisplayValue,
    pub head_office_location: String,
    pub sales_contact: SalesContact,
}
