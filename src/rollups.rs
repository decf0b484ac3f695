//! Per-entity summaries derived by grouping and summing over records.
//! Like every derivation in this crate, rollups are pure and recomputed
//! from scratch on each call.

use crate::schema::{Customer, Product, SalesRecord};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

struct CustomerAccumulator {
    country: String,
    total_spent: f64,
    orders_count: u64,
    last_order_date: DateTime<Utc>,
}

/// Groups records by customer id. The customer's country is taken from the
/// first record seen; the last order date is the max invoice date. Output
/// is sorted descending by total spent.
pub fn customer_rollups(records: &[SalesRecord]) -> Vec<Customer> {
    let mut by_customer: HashMap<&str, CustomerAccumulator> = HashMap::new();

    for record in records {
        let acc = by_customer
            .entry(record.customer_id.as_str())
            .or_insert_with(|| CustomerAccumulator {
                country: record.country.clone(),
                total_spent: 0.0,
                orders_count: 0,
                last_order_date: record.invoice_date,
            });
        acc.total_spent += record.total_amount;
        acc.orders_count += 1;
        if record.invoice_date > acc.last_order_date {
            acc.last_order_date = record.invoice_date;
        }
    }

    let mut customers: Vec<Customer> = by_customer
        .into_iter()
        .map(|(id, acc)| Customer {
            id: id.to_string(),
            country: acc.country,
            total_spent: acc.total_spent,
            avg_order_value: acc.total_spent / acc.orders_count as f64,
            orders_count: acc.orders_count,
            last_order_date: acc.last_order_date,
        })
        .collect();

    customers.sort_by(|a, b| b.total_spent.total_cmp(&a.total_spent));
    customers
}

struct ProductAccumulator {
    description: String,
    total_sold: i64,
    revenue: f64,
    prices: Vec<f64>,
    countries: Vec<String>,
}

/// Groups records by stock code. The description is taken from the first
/// record seen, the average price is the mean of unit prices, and the
/// country field lists distinct countries in first-seen order. Output is
/// sorted descending by revenue.
pub fn product_rollups(records: &[SalesRecord]) -> Vec<Product> {
    let mut by_stock_code: HashMap<&str, ProductAccumulator> = HashMap::new();

    for record in records {
        let acc = by_stock_code
            .entry(record.stock_code.as_str())
            .or_insert_with(|| ProductAccumulator {
                description: record.description.clone(),
                total_sold: 0,
                revenue: 0.0,
                prices: Vec::new(),
                countries: Vec::new(),
            });
        acc.total_sold += record.quantity;
        acc.revenue += record.total_amount;
        acc.prices.push(record.unit_price);
        if !acc.countries.contains(&record.country) {
            acc.countries.push(record.country.clone());
        }
    }

    let mut products: Vec<Product> = by_stock_code
        .into_iter()
        .map(|(stock_code, acc)| {
            let avg_price = acc.prices.iter().sum::<f64>() / acc.prices.len() as f64;
            Product {
                stock_code: stock_code.to_string(),
                description: acc.description,
                total_sold: acc.total_sold,
                revenue: acc.revenue,
                avg_price,
                country: acc.countries.join(", "),
            }
        })
        .collect();

    products.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    products
}
