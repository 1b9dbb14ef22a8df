pub mod company_row;
pub mod loading;
