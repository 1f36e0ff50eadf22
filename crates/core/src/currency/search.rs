//! Search-as-you-type over rate table labels.

use super::exchange::ExchangeRateTable;

/// Returns the labels matching a search query, sorted alphabetically.
///
/// An empty query lists every label. Otherwise a label matches when it
/// contains the query anywhere, ignoring case.
///
/// ```
/// use fxdesk_core::currency::{ExchangeRateTable, filter_labels};
///
/// let table = ExchangeRateTable::builtin();
/// assert_eq!(filter_labels(&table, "sar"), vec!["Saudi Arabia (SAR)"]);
/// ```
#[must_use]
pub fn filter_labels<'a>(table: &'a ExchangeRateTable, query: &str) -> Vec<&'a str> {
    if query.is_empty() {
        return table.sorted_labels();
    }

    let needle = query.to_lowercase();
    let mut matches: Vec<&str> = table
        .labels()
        .filter(|label| label.to_lowercase().contains(&needle))
        .collect();
    matches.sort_unstable();
    matches
}
