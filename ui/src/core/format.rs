//! Formatting helpers for presenting metrics.

pub fn format_count(value: usize) -> String {
    group_thousands(&value.to_string())
}

pub fn format_usd(value: f64) -> String {
    let cents = (value * 100.0).round() / 100.0;
    let whole = cents.trunc().abs() as u64;
    let frac = ((cents.abs() - cents.trunc().abs()) * 100.0).round() as u64;
    let sign = if cents < 0.0 { "-" } else { "" };
    format!("{sign}${}.{frac:02}", group_thousands(&whole.to_string()))
}

/// Short form for axis and bar labels, e.g. `$152.3k`.
pub fn format_usd_compact(value: f64) -> String {
    if value.abs() >= 1_000.0 {
        format!("${:.1}k", value / 1_000.0)
    } else {
        format!("${value:.0}")
    }
}

pub fn format_percent(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_group_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn usd_renders_cents_and_groups() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(45_000.0), "$45,000.00");
        assert_eq!(format_usd(210_500.25), "$210,500.25");
    }

    #[test]
    fn compact_usd_switches_units() {
        assert_eq!(format_usd_compact(950.0), "$950");
        assert_eq!(format_usd_compact(152_300.0), "$152.3k");
    }

    #[test]
    fn percent_uses_one_decimal() {
        assert_eq!(format_percent(0.421), "42.1%");
        assert_eq!(format_percent(1.0), "100.0%");
    }
}
