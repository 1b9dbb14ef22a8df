pub mod company_finder;
pub mod not_found;
