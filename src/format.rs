//! Display formatting, fixed US-English convention. No locale negotiation.

/// Formats a value with thousands separators and a fixed number of decimal
/// places. The sign is left to the caller; the absolute value is formatted.
pub(crate) fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let digits = int_part.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Integer-rounded US-dollar string, e.g. `$1,235` or `-$1,235`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    if rounded < 0.0 {
        format!("-${}", format_grouped(rounded, 0))
    } else {
        format!("${}", format_grouped(rounded, 0))
    }
}

/// One-decimal percentage with an explicit sign. Zero counts as
/// non-negative: `+0.0%`.
pub fn format_percentage(value: f64) -> String {
    if value >= 0.0 {
        // abs() keeps negative zero from printing as "+-0.0%"
        format!("+{:.1}%", value.abs())
    } else {
        format!("{:.1}%", value)
    }
}
