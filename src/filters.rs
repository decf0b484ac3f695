use crate::schema::{DashboardFilters, DateRange, FilterOptions, SalesRecord};
use std::collections::BTreeSet;

/// Applies the user-selected constraints to a record set.
///
/// A record passes when its country matches the country selection, its
/// region matches the region selection, and its invoice date falls inside
/// the window (both bounds inclusive). An empty selection vector places no
/// restriction on that dimension.
///
/// Pure and order-preserving; the output is always a subset of the input.
pub fn filter_sales_data(records: &[SalesRecord], filters: &DashboardFilters) -> Vec<SalesRecord> {
    records
        .iter()
        .filter(|record| {
            let country_match = filters.selected_countries.is_empty()
                || filters.selected_countries.contains(&record.country);
            let region_match = filters.selected_regions.is_empty()
                || filters.selected_regions.contains(&record.region);
            let date_match = filters.date_range.contains(record.invoice_date);

            country_match && region_match && date_match
        })
        .cloned()
        .collect()
}

/// Derives the choices a filter UI can offer from the cleaned dataset:
/// sorted distinct countries and regions, and the full span of invoice
/// dates present. Empty input falls back to the default window.
pub fn available_filter_options(records: &[SalesRecord]) -> FilterOptions {
    let countries: BTreeSet<&str> = records.iter().map(|r| r.country.as_str()).collect();
    let regions: BTreeSet<&str> = records.iter().map(|r| r.region.as_str()).collect();

    let date_range = match (
        records.iter().map(|r| r.invoice_date).min(),
        records.iter().map(|r| r.invoice_date).max(),
    ) {
        (Some(start), Some(end)) => DateRange { start, end },
        _ => DateRange::default_window(),
    };

    FilterOptions {
        countries: countries.into_iter().map(String::from).collect(),
        regions: regions.into_iter().map(String::from).collect(),
        date_range,
    }
}
