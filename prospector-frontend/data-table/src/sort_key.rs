use std::cmp::Ordering;

/// Value a column is ordered by. Cells that read as numbers order numerically and ahead of
/// text, everything else orders case-insensitively.
#[derive(Clone, Debug, PartialEq)]
pub enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    /// Detects the key for a displayed cell value.
    pub fn detect(value: &str) -> Self {
        match parse_number(value) {
            Some(number) => SortKey::Number(number),
            None => SortKey::Text(value.trim().to_lowercase()),
        }
    }

    pub fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
        }
    }
}

/// Reads values such as `1,200`, `$4.5M`, `~300` or `500+`.
fn parse_number(value: &str) -> Option<f64> {
    let value = value.trim();
    let value = value.strip_prefix('~').unwrap_or(value).trim_start();
    let value = value.strip_prefix('$').unwrap_or(value);
    let value = value.strip_suffix('+').unwrap_or(value);
    let (digits, multiplier) = match value.chars().last()? {
        'k' | 'K' => (&value[..value.len() - 1], 1e3),
        'm' | 'M' => (&value[..value.len() - 1], 1e6),
        'b' | 'B' => (&value[..value.len() - 1], 1e9),
        _ => (value, 1.0),
    };
    let digits: String = digits.chars().filter(|c| *c != ',' && *c != '_').collect();
    if digits.is_empty() || !digits.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    let number: f64 = digits.trim().parse().ok()?;
    number.is_finite().then_some(number * multiplier)
}
