use data_table::{SortKey, TableRow};
use leptos::prelude::*;
use prospector_api_types::Company;

pub const COLUMNS: [&str; 7] = [
    "Name",
    "LinkedIn",
    "Size",
    "Funding",
    "Year Founded",
    "Head Office Location",
    "Sales Contact",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    /// `href` is only set for web urls, anything else is shown as text
    Link { href: Option<String>, text: String },
    Contact { email: String, phone: String },
}

impl Cell {
    pub fn text(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Link { text, .. } => text.clone(),
            Cell::Contact { email, phone } => format!("Email: {email} Phone: {phone}"),
        }
    }
}

/// Turns what the server sent into something safe to put in an `href`.
pub(crate) fn web_link(url: &str) -> Option<String> {
    let url = url.trim();
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        Some(url.to_string())
    } else if lower.starts_with("www.") || lower.starts_with("linkedin.com/") {
        Some(format!("https://{url}"))
    } else {
        None
    }
}

/// A company as one row of the results table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompanyRow(pub Company);

impl From<Company> for CompanyRow {
    fn from(company: Company) -> Self {
        Self(company)
    }
}

impl CompanyRow {
    pub fn cells(&self) -> [Cell; 7] {
        let company = &self.0;
        [
            Cell::Text(company.name.clone()),
            Cell::Link {
                href: web_link(&company.linkedin),
                text: company.linkedin.clone(),
            },
            Cell::Text(company.size.to_string()),
            Cell::Text(company.funding.to_string()),
            Cell::Text(company.year_founded.to_string()),
            Cell::Text(company.head_office_location.clone()),
            Cell::Contact {
                email: company.sales_contact.email.clone(),
                phone: company.sales_contact.phone.clone(),
            },
        ]
    }
}

impl TableRow for CompanyRow {
    fn columns() -> &'static [&'static str] {
        &COLUMNS
    }

    fn sort_key(&self, column: usize) -> SortKey {
        self.cells()
            .get(column)
            .map(|cell| SortKey::detect(&cell.text()))
            .unwrap_or(SortKey::Text(String::new()))
    }

    fn search_text(&self) -> String {
        self.cells()
            .iter()
            .map(Cell::text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[component]
pub fn CompanyRowView(row: CompanyRow) -> impl IntoView {
    let cells = row
        .cells()
        .into_iter()
        .map(|cell| match cell {
            Cell::Text(text) => view! { <td>{text}</td> }.into_any(),
            Cell::Link {
                href: Some(href),
                text,
            } => view! {
                <td>
                    <a href=href target="_blank" rel="noopener noreferrer">
                        {text}
                    </a>
                </td>
            }
            .into_any(),
            Cell::Link { href: None, text } => view! { <td>{text}</td> }.into_any(),
            Cell::Contact { email, phone } => view! {
                <td>"Email: " {email} <br /> "Phone: " {phone}</td>
            }
            .into_any(),
        })
        .collect_view();
    view! { <tr>{cells}</tr> }
}

#[cfg(test)]
mod test {
    use super::*;
    use prospector_api_types::{DisplayValue, SalesContact};

    fn acme() -> Company {
        Company {
            name: "Acme".to_string(),
            linkedin: "https://li.example/acme".to_string(),
            size: "50".into(),
            funding: "$1M".into(),
            year_founded: "2010".into(),
            head_office_location: "NYC".to_string(),
            sales_contact: SalesContact {
                email: "a@x.com".to_string(),
                phone: "555-0100".to_string(),
            },
        }
    }

    #[test]
    fn seven_cells_in_column_order() {
        let cells = CompanyRow(acme()).cells();
        assert_eq!(cells.len(), COLUMNS.len());
        assert_eq!(cells[0], Cell::Text("Acme".to_string()));
        assert_eq!(
            cells[1],
            Cell::Link {
                href: Some("https://li.example/acme".to_string()),
                text: "https://li.example/acme".to_string(),
            }
        );
        assert_eq!(cells[2].text(), "50");
        assert_eq!(cells[3].text(), "$1M");
        assert_eq!(cells[4].text(), "2010");
        assert_eq!(cells[5].text(), "NYC");
        let contact = cells[6].text();
        assert!(contact.contains("a@x.com"));
        assert!(contact.contains("555-0100"));
    }

    #[test]
    fn numeric_fields_display_as_sent() {
        let mut company = acme();
        company.year_founded = DisplayValue::from(1998);
        let cells = CompanyRow(company).cells();
        assert_eq!(cells[4].text(), "1998");
    }

    #[test]
    fn only_web_links_get_an_href() {
        assert_eq!(
            web_link(" HTTPS://li.example/acme "),
            Some("HTTPS://li.example/acme".to_string())
        );
        assert_eq!(
            web_link("linkedin.com/company/acme"),
            Some("https://linkedin.com/company/acme".to_string())
        );
        assert_eq!(web_link("javascript:alert(1)"), None);
        assert_eq!(web_link(""), None);
        assert_eq!(web_link("N/A"), None);
    }

    #[test]
    fn sort_and_search_use_cell_text() {
        let row = CompanyRow(acme());
        assert_eq!(row.sort_key(3), SortKey::Number(1_000_000.0));
        assert_eq!(row.sort_key(5), SortKey::Text("nyc".to_string()));
        assert_eq!(row.sort_key(42), SortKey::Text(String::new()));
        assert!(row.search_text().contains("555-0100"));
        assert!(row.search_text().contains("li.example"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn row_markup() {
        let owner = Owner::new();
        owner.with(|| {
            let html = view! { <CompanyRowView row=CompanyRow(acme()) /> }.to_html();
            assert_eq!(html.matches("<td").count(), COLUMNS.len());
            assert!(html.contains(
                "<a href=\"https://li.example/acme\" target=\"_blank\" rel=\"noopener noreferrer\">"
            ));
            let order = ["Email: ", "a@x.com", "<br", "Phone: ", "555-0100"]
                .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")));
            assert!(order.windows(2).all(|pair| pair[0] < pair[1]), "{html}");
        });
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn unsafe_links_render_as_text() {
        let owner = Owner::new();
        owner.with(|| {
            let mut company = acme();
            company.linkedin = "javascript:alert(1)".to_string();
            let html = view! { <CompanyRowView row=CompanyRow(company) /> }.to_html();
            assert!(!html.contains("<a"));
            assert!(html.contains("javascript:alert(1)"));
        });
    }
}
