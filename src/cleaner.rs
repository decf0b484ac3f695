use crate::schema::SalesRecord;

/// Rounds to 2 decimal places, the resolution of a line total.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Drops malformed records and normalizes the survivors.
///
/// A record is dropped when quantity <= 0, unit price <= 0, the customer id
/// or country is empty, or the description is blank after trimming. This is
/// deliberate policy: partial-data tolerance over strict validation, so
/// malformed input is silently excluded rather than raised as an error.
///
/// Surviving records get a trimmed description and `total_amount` recomputed
/// as quantity * unit_price; the incoming total is never trusted.
///
/// Pure and order-preserving. Running it twice is a no-op:
/// `clean(clean(x)) == clean(x)`.
pub fn clean_sales_data(records: &[SalesRecord]) -> Vec<SalesRecord> {
    records
        .iter()
        .filter(|record| is_valid(record))
        .map(|record| {
            let mut cleaned = record.clone();
            cleaned.description = record.description.trim().to_string();
            cleaned.total_amount = round2(record.quantity as f64 * record.unit_price);
            cleaned
        })
        .collect()
}

fn is_valid(record: &SalesRecord) -> bool {
    record.quantity > 0
        && record.unit_price > 0.0
        && !record.customer_id.is_empty()
        && !record.country.is_empty()
        && !record.description.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(quantity: i64, unit_price: f64, customer_id: &str, description: &str) -> SalesRecord {
        SalesRecord {
            id: "record-1".to_string(),
            invoice_no: "INV000001".to_string(),
            stock_code: "SKU0001".to_string(),
            description: description.to_string(),
            quantity,
            invoice_date: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            unit_price,
            customer_id: customer_id.to_string(),
            country: "France".to_string(),
            region: "Europe".to_string(),
            total_amount: 0.0,
        }
    }

    #[test]
    fn test_drops_invalid_records() {
        let records = vec![
            record(3, 2.5, "CUST0001", "WHITE METAL LANTERN"),
            record(0, 2.5, "CUST0001", "zero quantity"),
            record(-2, 2.5, "CUST0001", "negative quantity"),
            record(3, 0.0, "CUST0001", "free item"),
            record(3, 2.5, "", "no customer"),
            record(3, 2.5, "CUST0001", "   "),
        ];

        let cleaned = clean_sales_data(&records);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].description, "WHITE METAL LANTERN");
    }

    #[test]
    fn test_drops_records_with_empty_country() {
        let mut bad = record(1, 1.0, "CUST0001", "ok");
        bad.country = String::new();
        assert!(clean_sales_data(&[bad]).is_empty());
    }

    #[test]
    fn test_recomputes_total_amount() {
        let mut dirty = record(3, 4.999, "CUST0001", "  PINK CHERRY LIGHTS  ");
        dirty.total_amount = 9999.0; // never trusted

        let cleaned = clean_sales_data(&[dirty]);
        assert_eq!(cleaned[0].total_amount, 15.0);
        assert_eq!(cleaned[0].description, "PINK CHERRY LIGHTS");
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        let records = vec![
            record(3, 2.5, "CUST0001", "  WHITE METAL LANTERN "),
            record(0, 2.5, "CUST0002", "dropped"),
            record(7, 1.15, "CUST0003", "VINTAGE SNAP CARDS"),
        ];

        let once = clean_sales_data(&records);
        let twice = clean_sales_data(&once);

        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.description, b.description);
            assert_eq!(a.total_amount, b.total_amount);
        }
    }

    #[test]
    fn test_never_increases_record_count() {
        let records = vec![
            record(1, 1.0, "CUST0001", "a"),
            record(2, 2.0, "CUST0002", "b"),
        ];
        assert!(clean_sales_data(&records).len() <= records.len());
        assert!(clean_sales_data(&[]).is_empty());
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(12.345), 12.35);
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round2(100.0), 100.0);
    }
}
