use data_table::DataTable;
use prospector_api_types::Company;

use crate::components::company_row::CompanyRow;
use crate::error::{AppError, AppResult};

/// Identifies one submission of the form. Later submissions get larger tickets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The table now holds this many rows.
    Rendered(usize),
    Failed,
    /// A newer submission was made while this one was in flight.
    Stale,
}

/// What the finder view shows around the results table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FinderState {
    latest: u64,
    in_flight: usize,
    results_visible: bool,
    last_error: Option<AppError>,
}

impl FinderState {
    /// Starts a submission. Its response is only used while it is still the latest one.
    pub fn submit(&mut self) -> Ticket {
        self.latest += 1;
        self.in_flight += 1;
        Ticket(self.latest)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn last_error(&self) -> Option<&AppError> {
        self.last_error.as_ref()
    }

    /// Applies the outcome of a submission to the table.
    ///
    /// Failures leave the rows and the container visibility untouched.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        result: AppResult<Vec<Company>>,
        table: &mut DataTable<CompanyRow>,
    ) -> Resolution {
        self.in_flight = self.in_flight.saturating_sub(1);
        if !self.is_latest(ticket) {
            log::debug!(
                "dropping response to submission {} (latest is {})",
                ticket.0,
                self.latest
            );
            return Resolution::Stale;
        }
        match result {
            Ok(companies) => {
                log::debug!("Response Data: {} companies", companies.len());
                let count = companies.len();
                table.clear();
                for company in companies {
                    table.push_row(CompanyRow::from(company));
                }
                self.results_visible = true;
                self.last_error = None;
                table.draw();
                Resolution::Rendered(count)
            }
            Err(e) => {
                log::error!("Request Failed: {e:?}");
                self.last_error = Some(e);
                Resolution::Failed
            }
        }
    }
}
