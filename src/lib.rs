//! # Retail Sales Analytics
//!
//! A pure, synchronous, in-memory analytics core for a retail sales
//! dashboard: clean raw transaction records, apply country/region/date
//! filters, and derive KPIs, a monthly revenue trend, top customers,
//! best-selling products, and per-customer/per-product rollups.
//!
//! ## Core Concepts
//!
//! - **Record**: one cleaned, validated sales transaction line
//! - **Filter state**: user-chosen countries, regions and a date window;
//!   empty selections mean "no restriction"
//! - **KPI**: a headline metric with period-over-period trend semantics
//! - **Rollup**: a per-customer or per-product summary built by grouping
//!   and summing over records
//!
//! Every derivation is a pure function of its input collection. Nothing is
//! cached or mutated in place; a filter change simply recomputes everything.
//!
//! ## Example
//!
//! ```rust
//! use retail_sales_analytics::*;
//!
//! let records = generate_mock_sales_data(&MockDataConfig {
//!     record_count: 1_000,
//!     seed: Some(7),
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! let cleaned = clean_sales_data(&records);
//! let dashboard = build_dashboard(&cleaned, &DashboardFilters::default());
//!
//! assert_eq!(dashboard.kpis.len(), 4);
//! assert!(dashboard.top_customers.len() <= 10);
//! ```

pub mod aggregator;
pub mod cleaner;
pub mod error;
pub mod filters;
pub mod format;
pub mod mock;
pub mod regions;
pub mod rollups;
pub mod schema;

pub use aggregator::{best_selling_products, calculate_kpis, monthly_revenue_trend, top_customers};
pub use cleaner::clean_sales_data;
pub use error::{AnalyticsError, Result};
pub use filters::{available_filter_options, filter_sales_data};
pub use format::{format_currency, format_percentage};
pub use mock::{generate_mock_sales_data, MockDataConfig};
pub use regions::{known_countries, region_for_country, KNOWN_REGIONS};
pub use rollups::{customer_rollups, product_rollups};
pub use schema::*;

use log::{debug, info};
use serde::{Deserialize, Serialize};

/// How many entries the dashboard's ranked charts show.
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// Everything one dashboard render needs, derived from a cleaned record set
/// and a filter state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    pub kpis: Vec<KPIMetric>,
    pub monthly_revenue: Vec<ChartData>,
    pub top_customers: Vec<ChartData>,
    pub best_products: Vec<ChartData>,
    /// Number of records left after filtering.
    pub record_count: usize,
}

impl DashboardData {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub struct DashboardProcessor;

impl DashboardProcessor {
    /// Runs the full pipeline over an already cleaned record set: filter,
    /// then the four aggregations. Total over any input, including empty.
    pub fn build(records: &[SalesRecord], filters: &DashboardFilters) -> DashboardData {
        info!(
            "Building dashboard over {} records ({} countries, {} regions selected)",
            records.len(),
            filters.selected_countries.len(),
            filters.selected_regions.len()
        );

        let filtered = filter_sales_data(records, filters);
        debug!("{} records remain after filtering", filtered.len());

        DashboardData {
            kpis: calculate_kpis(&filtered, None),
            monthly_revenue: monthly_revenue_trend(&filtered),
            top_customers: top_customers(&filtered, DEFAULT_TOP_LIMIT),
            best_products: best_selling_products(&filtered, DEFAULT_TOP_LIMIT),
            record_count: filtered.len(),
        }
    }
}

/// Convenience wrapper around [`DashboardProcessor::build`].
pub fn build_dashboard(records: &[SalesRecord], filters: &DashboardFilters) -> DashboardData {
    DashboardProcessor::build(records, filters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(customer_id: &str, country: &str, amount: f64, month: u32, day: u32) -> SalesRecord {
        let region = region_for_country(country).unwrap_or("Europe");
        SalesRecord {
            id: format!("record-{}-{}-{}", customer_id, month, day),
            invoice_no: "INV000001".to_string(),
            stock_code: "SKU0001".to_string(),
            description: "ASSORTED COLOUR BIRD ORNAMENT".to_string(),
            quantity: 1,
            invoice_date: Utc.with_ymd_and_hms(2024, month, day, 10, 0, 0).unwrap(),
            unit_price: amount,
            customer_id: customer_id.to_string(),
            country: country.to_string(),
            region: region.to_string(),
            total_amount: amount,
        }
    }

    fn scenario() -> Vec<SalesRecord> {
        vec![
            record("C1", "France", 100.0, 1, 15),
            record("C1", "France", 50.0, 2, 10),
            record("C2", "Germany", 200.0, 1, 20),
        ]
    }

    #[test]
    fn test_dashboard_end_to_end() {
        let dashboard = build_dashboard(&scenario(), &DashboardFilters::default());

        assert_eq!(dashboard.record_count, 3);
        assert_eq!(dashboard.kpis[0].value, "$350.00");
        assert_eq!(dashboard.monthly_revenue.len(), 2);
        assert_eq!(dashboard.top_customers[0].name, "C2");
        assert_eq!(dashboard.best_products.len(), 1);
    }

    #[test]
    fn test_dashboard_with_country_filter() {
        let filters = DashboardFilters {
            selected_countries: vec!["France".to_string()],
            ..Default::default()
        };
        let dashboard = build_dashboard(&scenario(), &filters);

        assert_eq!(dashboard.record_count, 2);
        assert_eq!(dashboard.kpis[0].value, "$150.00");
        assert_eq!(dashboard.top_customers.len(), 1);
        assert_eq!(dashboard.top_customers[0].name, "C1");
    }

    #[test]
    fn test_dashboard_over_empty_input() {
        let dashboard = build_dashboard(&[], &DashboardFilters::default());

        assert_eq!(dashboard.record_count, 0);
        assert_eq!(dashboard.kpis.len(), 4);
        assert_eq!(dashboard.kpis[3].value, "$0.00");
        assert!(dashboard.monthly_revenue.is_empty());
        assert!(dashboard.top_customers.is_empty());
        assert!(dashboard.best_products.is_empty());
    }

    #[test]
    fn test_dashboard_serializes_to_json() {
        let dashboard = build_dashboard(&scenario(), &DashboardFilters::default());
        let json = dashboard.to_json().unwrap();
        assert!(json.contains("Total Revenue"));

        let parsed: DashboardData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.record_count, 3);
    }
}
