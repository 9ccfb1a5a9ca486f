//! Currency filter policy shared by the reducer and the dropdown.

use super::model::CurrencyRow;

/// Filter value meaning "no filtering, show every row".
pub const ALL_RATES_OPTION: &str = "ALL";

/// Apply the currency filter to `rows`.
///
/// [`ALL_RATES_OPTION`] returns the rows unchanged. Any other value keeps
/// only rows whose code matches exactly, in their original order.
pub fn filter_rows(rows: &[CurrencyRow], selected_code: &str) -> Vec<CurrencyRow> {
    if selected_code == ALL_RATES_OPTION {
        return rows.to_vec();
    }
    rows.iter()
        .filter(|row| row.code == selected_code)
        .cloned()
        .collect()
}

/// Dropdown options: the all sentinel followed by the distinct codes of
/// `rows` in first-seen order.
pub fn currency_options(rows: &[CurrencyRow]) -> Vec<String> {
    let mut options = vec![ALL_RATES_OPTION.to_string()];
    for row in rows {
        if !options.iter().skip(1).any(|code| code == &row.code) {
            options.push(row.code.clone());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<CurrencyRow> {
        vec![
            CurrencyRow::new("USA", "USD", 1.0),
            CurrencyRow::new("Germany", "EUR", 0.9),
            CurrencyRow::new("France", "EUR", 0.9),
            CurrencyRow::new("Japan", "JPY", 150.0),
        ]
    }

    #[test]
    fn all_returns_input_unchanged() {
        let input = rows();
        let filtered = filter_rows(&input, ALL_RATES_OPTION);
        assert_eq!(filtered, input);
        assert_eq!(filter_rows(&filtered, ALL_RATES_OPTION), input);
    }

    #[test]
    fn code_keeps_matching_rows_in_order() {
        let filtered = filter_rows(&rows(), "EUR");
        assert_eq!(
            filtered,
            vec![
                CurrencyRow::new("Germany", "EUR", 0.9),
                CurrencyRow::new("France", "EUR", 0.9),
            ]
        );
    }

    #[test]
    fn match_is_exact() {
        assert!(filter_rows(&rows(), "eur").is_empty());
        assert!(filter_rows(&rows(), "EU").is_empty());
    }

    #[test]
    fn unknown_code_yields_empty() {
        assert!(filter_rows(&rows(), "CHF").is_empty());
        assert!(filter_rows(&[], "USD").is_empty());
    }

    #[test]
    fn options_are_distinct_with_all_first() {
        assert_eq!(currency_options(&rows()), vec!["ALL", "USD", "EUR", "JPY"]);
        assert_eq!(currency_options(&[]), vec!["ALL"]);
    }
}
