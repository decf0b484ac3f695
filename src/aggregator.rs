use crate::format::format_grouped;
use crate::schema::{ChartData, KPIMetric, SalesRecord, Trend};
use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, HashMap, HashSet};

/// The four headline numbers of one period.
struct PeriodTotals {
    revenue: f64,
    orders: usize,
    customers: usize,
    avg_order: f64,
}

fn period_totals(records: &[SalesRecord]) -> PeriodTotals {
    let revenue: f64 = records.iter().map(|r| r.total_amount).sum();
    let orders = records.len();
    let customers = records
        .iter()
        .map(|r| r.customer_id.as_str())
        .collect::<HashSet<_>>()
        .len();
    let avg_order = if orders > 0 {
        revenue / orders as f64
    } else {
        0.0
    };

    PeriodTotals {
        revenue,
        orders,
        customers,
        avg_order,
    }
}

/// Percent change vs a previous value. A previous value of zero yields 0.0:
/// no signal rather than infinite growth. Keeps NaN and infinity out of
/// every downstream consumer.
fn percent_change(current: f64, previous: f64) -> f64 {
    if previous > 0.0 {
        (current - previous) / previous * 100.0
    } else {
        0.0
    }
}

fn trend_of(change: f64) -> Trend {
    if change > 0.0 {
        Trend::Up
    } else if change < 0.0 {
        Trend::Down
    } else {
        Trend::Stable
    }
}

fn metric(title: &str, value: String, change: f64, icon: &str, color: &str) -> KPIMetric {
    KPIMetric {
        title: title.to_string(),
        value,
        change,
        trend: trend_of(change),
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

/// Computes the four dashboard KPIs in fixed order: Total Revenue, Total
/// Orders, Unique Customers, Avg Order Value.
///
/// When a previous-period record set is supplied, each metric carries the
/// percent change vs that period; without one, every change is 0.0 and the
/// trend reads stable. Empty input yields zero-valued metrics, never an
/// error (avg order value is guarded against division by zero).
pub fn calculate_kpis(
    records: &[SalesRecord],
    previous: Option<&[SalesRecord]>,
) -> Vec<KPIMetric> {
    let current = period_totals(records);
    let prior = previous.map(period_totals);

    let (revenue_change, orders_change, customers_change, avg_order_change) = match &prior {
        Some(prev) => (
            percent_change(current.revenue, prev.revenue),
            percent_change(current.orders as f64, prev.orders as f64),
            percent_change(current.customers as f64, prev.customers as f64),
            percent_change(current.avg_order, prev.avg_order),
        ),
        None => (0.0, 0.0, 0.0, 0.0),
    };

    vec![
        metric(
            "Total Revenue",
            format!("${}", format_grouped(current.revenue, 2)),
            revenue_change,
            "DollarSign",
            "bg-blue-500",
        ),
        metric(
            "Total Orders",
            format_grouped(current.orders as f64, 0),
            orders_change,
            "ShoppingCart",
            "bg-emerald-500",
        ),
        metric(
            "Unique Customers",
            format_grouped(current.customers as f64, 0),
            customers_change,
            "Users",
            "bg-purple-500",
        ),
        metric(
            "Avg Order Value",
            format!("${:.2}", current.avg_order),
            avg_order_change,
            "TrendingUp",
            "bg-orange-500",
        ),
    ]
}

fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_default()
}

/// Revenue summed per calendar month (UTC year-month of the invoice date),
/// ascending by month key.
///
/// Only months present in the data appear; gaps are not interpolated.
/// Values are rounded to the nearest whole dollar for display scale. Each
/// entry after the first carries the percent change vs its predecessor's
/// rounded value (0.0 when the predecessor rounded to zero).
pub fn monthly_revenue_trend(records: &[SalesRecord]) -> Vec<ChartData> {
    let mut monthly: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for record in records {
        let key = (record.invoice_date.year(), record.invoice_date.month());
        *monthly.entry(key).or_insert(0.0) += record.total_amount;
    }

    let mut trend: Vec<ChartData> = monthly
        .into_iter()
        .map(|((year, month), revenue)| ChartData {
            name: month_label(year, month),
            value: revenue.round(),
            date: Some(format!("{:04}-{:02}", year, month)),
            change: None,
        })
        .collect();

    for i in 1..trend.len() {
        let previous = trend[i - 1].value;
        trend[i].change = Some(percent_change(trend[i].value, previous));
    }

    trend
}

/// Top customers by summed revenue, descending, at most `limit` entries.
/// Tie order is unspecified.
pub fn top_customers(records: &[SalesRecord], limit: usize) -> Vec<ChartData> {
    let mut revenue_by_customer: HashMap<&str, f64> = HashMap::new();
    for record in records {
        *revenue_by_customer
            .entry(record.customer_id.as_str())
            .or_insert(0.0) += record.total_amount;
    }

    let mut ranked: Vec<(&str, f64)> = revenue_by_customer.into_iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(customer_id, revenue)| ChartData {
            name: customer_id.to_string(),
            value: revenue.round(),
            date: None,
            change: None,
        })
        .collect()
}

struct ProductAccumulator {
    revenue: f64,
    quantity: i64,
}

/// Best-selling products by summed revenue, descending, at most `limit`
/// entries. Grouping is by description, so multiple SKUs sharing one
/// description are merged. Long names are truncated to 30 characters with a
/// trailing ellipsis.
///
/// Quantity is accumulated alongside revenue but not emitted; the
/// [`Product`](crate::schema::Product) rollup surfaces per-product unit
/// counts for consumers that need them.
pub fn best_selling_products(records: &[SalesRecord], limit: usize) -> Vec<ChartData> {
    let mut by_description: HashMap<&str, ProductAccumulator> = HashMap::new();
    for record in records {
        let acc = by_description
            .entry(record.description.as_str())
            .or_insert(ProductAccumulator {
                revenue: 0.0,
                quantity: 0,
            });
        acc.revenue += record.total_amount;
        acc.quantity += record.quantity;
    }

    let mut ranked: Vec<(&str, ProductAccumulator)> = by_description.into_iter().collect();
    ranked.sort_by(|a, b| b.1.revenue.total_cmp(&a.1.revenue));
    ranked.truncate(limit);

    ranked
        .into_iter()
        .map(|(description, acc)| ChartData {
            name: truncate_name(description, 30),
            value: acc.revenue.round(),
            date: None,
            change: None,
        })
        .collect()
}

fn truncate_name(name: &str, max_chars: usize) -> String {
    if name.chars().count() > max_chars {
        let mut truncated: String = name.chars().take(max_chars).collect();
        truncated.push_str("...");
        truncated
    } else {
        name.to_string()
    }
}
