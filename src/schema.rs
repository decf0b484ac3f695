use crate::error::{AnalyticsError, Result};
use chrono::{DateTime, TimeZone, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SalesRecord {
    #[schemars(description = "Unique identifier of this transaction line")]
    pub id: String,

    #[schemars(description = "Invoice number shared by all lines of one checkout")]
    pub invoice_no: String,

    #[schemars(description = "Stock/SKU code of the product sold")]
    pub stock_code: String,

    #[schemars(description = "Free-text product description")]
    pub description: String,

    #[schemars(description = "Units sold. Must be positive after cleaning")]
    pub quantity: i64,

    #[schemars(description = "Timestamp of the invoice (UTC)")]
    pub invoice_date: DateTime<Utc>,

    #[schemars(description = "Price per unit in dollars. Must be positive after cleaning")]
    pub unit_price: f64,

    pub customer_id: String,

    pub country: String,

    #[schemars(description = "Sales region, derived from country via a fixed mapping")]
    pub region: String,

    #[schemars(
        description = "Line total. Recomputed as quantity * unit_price (2 decimals) at cleaning time, never trusted from input"
    )]
    pub total_amount: f64,
}

impl SalesRecord {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(SalesRecord)
    }

    pub fn schema_as_json() -> std::result::Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}

/// Inclusive date window, both bounds included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end < start {
            return Err(AnalyticsError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The dashboard's initial window: all of 2023 and 2024.
    pub fn default_window() -> Self {
        Self {
            start: Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap(),
        }
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}

impl Default for DateRange {
    fn default() -> Self {
        Self::default_window()
    }
}

/// User-selected constraints narrowing the visible record set.
///
/// An empty selection vector means "no restriction" on that dimension,
/// not "match nothing".
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DashboardFilters {
    pub selected_countries: Vec<String>,
    pub selected_regions: Vec<String>,
    pub date_range: DateRange,
}

impl Default for DashboardFilters {
    fn default() -> Self {
        Self {
            selected_countries: Vec::new(),
            selected_regions: Vec::new(),
            date_range: DateRange::default_window(),
        }
    }
}

/// The choices a filter UI can offer, derived from the cleaned dataset.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FilterOptions {
    pub countries: Vec<String>,
    pub regions: Vec<String>,
    pub date_range: DateRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// A single headline metric with period-over-period comparison.
///
/// `icon` and `color` are presentation hints for the rendering layer and
/// carry no computational meaning.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KPIMetric {
    pub title: String,
    pub value: String,
    pub change: f64,
    pub trend: Trend,
    pub icon: String,
    pub color: String,
}

/// Generic (name, value) pair used by every ranked or series output.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ChartData {
    pub name: String,
    pub value: f64,

    /// ISO month key (YYYY-MM), present on time-series entries only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Percent change vs the previous entry, absent on the first entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
}

/// Per-customer rollup.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Customer {
    pub id: String,
    pub country: String,
    pub total_spent: f64,
    pub orders_count: u64,
    pub avg_order_value: f64,
    pub last_order_date: DateTime<Utc>,
}

/// Per-product rollup, keyed by stock code.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Product {
    pub stock_code: String,
    pub description: String,
    pub total_sold: i64,
    pub revenue: f64,
    pub avg_price: f64,
    /// Distinct countries this product sold in, first-seen order, comma separated.
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_generation() {
        let schema_json = SalesRecord::schema_as_json().unwrap();
        assert!(schema_json.contains("invoice_no"));
        assert!(schema_json.contains("total_amount"));
        assert!(schema_json.contains("customer_id"));
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record = SalesRecord {
            id: "record-1".to_string(),
            invoice_no: "INV000123".to_string(),
            stock_code: "SKU0042".to_string(),
            description: "WHITE METAL LANTERN".to_string(),
            quantity: 3,
            invoice_date: Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(),
            unit_price: 4.25,
            customer_id: "CUST0007".to_string(),
            country: "France".to_string(),
            region: "Europe".to_string(),
            total_amount: 12.75,
        };

        let json = serde_json::to_string_pretty(&record).unwrap();
        assert!(json.contains("WHITE METAL LANTERN"));

        let deserialized: SalesRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.customer_id, "CUST0007");
        assert_eq!(deserialized.invoice_date, record.invoice_date);
    }

    #[test]
    fn test_date_range_rejects_inverted_bounds() {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(DateRange::new(start, end).is_err());
        assert!(DateRange::new(end, start).is_ok());
    }

    #[test]
    fn test_date_range_contains_is_inclusive() {
        let range = DateRange::default_window();
        assert!(range.contains(range.start));
        assert!(range.contains(range.end));
        assert!(!range.contains(range.end + chrono::Duration::seconds(1)));
    }

    #[test]
    fn test_trend_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Trend::Up).unwrap(), "\"up\"");
        assert_eq!(serde_json::to_string(&Trend::Stable).unwrap(), "\"stable\"");
    }

    #[test]
    fn test_chart_data_omits_absent_fields() {
        let entry = ChartData {
            name: "CUST0001".to_string(),
            value: 150.0,
            date: None,
            change: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("date"));
        assert!(!json.contains("change"));
    }
}
