//! Mock sales data generation for demos and tests.

use crate::cleaner::round2;
use crate::error::{AnalyticsError, Result};
use crate::regions::{known_countries, region_for_country, KNOWN_REGIONS};
use crate::schema::{DateRange, SalesRecord};
use chrono::DateTime;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

const PRODUCTS: [&str; 30] = [
    "WHITE HANGING HEART T-LIGHT HOLDER",
    "WHITE METAL LANTERN",
    "CREAM CUPID HEARTS COAT HANGER",
    "KNITTED UNION FLAG HOT WATER BOTTLE",
    "RED WOOLLY HOTTIE WHITE HEART",
    "SET 7 BABUSHKA NESTING BOXES",
    "GLASS STAR FROSTED T-LIGHT HOLDER",
    "HAND WARMER UNION JACK",
    "HAND WARMER RED POLKA DOT",
    "ASSORTED COLOUR BIRD ORNAMENT",
    "POPPY'S PLAYHOUSE KITCHEN",
    "POPPY'S PLAYHOUSE BEDROOM",
    "FELTCRAFT PRINCESS CHARLOTTE DOLL",
    "IVORY KNITTED MUG COSY",
    "BOX OF 6 ASSORTED COLOUR TEASPOONS",
    "BOX OF VINTAGE JIGSAW BLOCKS",
    "BOX OF VINTAGE ALPHABET BLOCKS",
    "HOME BUILDING BLOCK WORD",
    "LOVE BUILDING BLOCK WORD",
    "RECIPE BOX WITH METAL HEART",
    "DOORMAT NEW ENGLAND",
    "CHILDRENS CUTLERY DOLLY GIRL",
    "CHILDRENS CUTLERY CIRCUS PARADE",
    "BABUSHKA NESTING BOXES SET OF 4",
    "PINK CHERRY LIGHTS",
    "BLUE CHERRY LIGHTS",
    "LIGHT PINK BUTTERFLY T-LIGHT HOLDER",
    "WHITE CHOCOLATE LANTERN",
    "VINTAGE SNAP CARDS",
    "ROUND SNACK BOXES SET OF4 WOODLAND",
];

/// Mild multiplicative jitter on the uniform base price, so repeated sales
/// of one product do not all share identical prices.
const PRICE_JITTER_SIGMA: f64 = 0.03;

#[derive(Debug, Clone)]
pub struct MockDataConfig {
    pub record_count: usize,
    pub date_range: DateRange,
    /// Seed for reproducible generation. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for MockDataConfig {
    fn default() -> Self {
        Self {
            record_count: 50_000,
            date_range: DateRange::default_window(),
            seed: None,
        }
    }
}

/// Generates random sales records over the configured window, newest first.
///
/// Every record satisfies the cleaner's invariants, so cleaning generated
/// data is lossless. Countries are drawn from the fixed region table.
pub fn generate_mock_sales_data(config: &MockDataConfig) -> Result<Vec<SalesRecord>> {
    if config.record_count == 0 {
        return Err(AnalyticsError::EmptyMockConfig);
    }
    if config.date_range.end < config.date_range.start {
        return Err(AnalyticsError::InvalidDateRange {
            start: config.date_range.start,
            end: config.date_range.end,
        });
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let jitter = Normal::new(0.0, PRICE_JITTER_SIGMA).unwrap();

    let countries = known_countries();
    let start_ts = config.date_range.start.timestamp();
    let end_ts = config.date_range.end.timestamp();

    let mut records = Vec::with_capacity(config.record_count);
    for i in 0..config.record_count {
        let country = countries[rng.gen_range(0..countries.len())];
        // the table covers every generated country
        let region = region_for_country(country).unwrap_or(KNOWN_REGIONS[0]);
        let description = PRODUCTS[rng.gen_range(0..PRODUCTS.len())];

        let quantity: i64 = rng.gen_range(1..=10);
        let base_price = rng.gen_range(1.0..51.0);
        let unit_price = round2((base_price * (1.0 + jitter.sample(&mut rng))).max(0.01));

        let invoice_ts = rng.gen_range(start_ts..=end_ts);
        let invoice_date = DateTime::from_timestamp(invoice_ts, 0)
            .unwrap_or(config.date_range.start);

        records.push(SalesRecord {
            id: format!("record-{}", i + 1),
            invoice_no: format!("INV{:06}", rng.gen_range(0..100_000)),
            stock_code: format!("SKU{:04}", rng.gen_range(0..10_000)),
            description: description.to_string(),
            quantity,
            invoice_date,
            unit_price,
            customer_id: format!("CUST{:04}", rng.gen_range(0..5_000)),
            country: country.to_string(),
            region: region.to_string(),
            total_amount: round2(quantity as f64 * unit_price),
        });
    }

    records.sort_by(|a, b| b.invoice_date.cmp(&a.invoice_date));

    debug!(
        "Generated {} mock sales records between {} and {}",
        records.len(),
        config.date_range.start,
        config.date_range.end
    );

    Ok(records)
}
