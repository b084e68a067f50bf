// Display helpers for report values.
//
// Figures are shown the way Indian publications print them: lakh/crore
// digit grouping (`12,34,567`) and a unit-specific suffix or prefix.
use crate::catalog::Unit;
use crate::reports::MetricResult;
use num_format::{Locale, ToFormattedString};

/// Nearest integer, halves rounded towards positive infinity (`-2.5` -> `-2`).
fn round_half_up(n: f64) -> f64 {
    let floor = n.floor();
    if n - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// One decimal place. Values sitting exactly halfway between two tenths
/// (odd multiples of 0.25) round away from zero; `{:.1}` alone would round
/// them to even.
fn one_decimal(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        format!("{:.1}", (value * 10.0).round() / 10.0)
    } else {
        format!("{:.1}", value)
    }
}

/// Round to the nearest integer and group digits Indian style.
pub fn format_indian_number(n: f64) -> String {
    (round_half_up(n) as i64).to_formatted_string(&Locale::en_IN)
}

/// Render a metric value with its unit.
pub fn format_metric_value(value: f64, unit: Unit) -> String {
    match unit {
        Unit::Rupees if value >= 100_000.0 => format!("Rs {}", format_indian_number(value)),
        Unit::RupeesCrore if value >= 100.0 => format!("Rs {} Cr", format_indian_number(value)),
        Unit::Percent | Unit::PercentOfGsdp | Unit::PercentagePoints => {
            format!("{}{}", one_decimal(value), unit.symbol())
        }
        Unit::PerSqKm => format!("{}/sq km", format_indian_number(value)),
        Unit::PerLakh | Unit::Per10K | Unit::PerThousand => {
            format!("{} {}", one_decimal(value), unit.symbol())
        }
        _ if value >= 1_000_000.0 => format_indian_number(value),
        _ if value.fract() == 0.0 => format_indian_number(value),
        _ => one_decimal(value),
    }
}

/// `#rank/total`, or `-` when the state has no value.
pub fn format_rank(metric: &MetricResult) -> String {
    match metric.standing() {
        Some(s) => format!("#{}/{}", s.rank, s.total),
        None => "-".to_string(),
    }
}

pub fn quartile_label(metric: &MetricResult) -> &'static str {
    metric
        .standing()
        .map(|s| s.quartile.label())
        .unwrap_or("No data")
}

pub fn format_optional(value: Option<f64>, unit: Unit) -> String {
    value
        .map(|v| format_metric_value(v, unit))
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indian_grouping() {
        assert_eq!(format_indian_number(999.0), "999");
        assert_eq!(format_indian_number(1234.0), "1,234");
        assert_eq!(format_indian_number(1234567.4), "12,34,567");
        assert_eq!(format_indian_number(-350000.0), "-3,50,000");
    }

    #[test]
    fn unit_rules() {
        assert_eq!(format_metric_value(242247.0, Unit::Rupees), "Rs 2,42,247");
        assert_eq!(format_metric_value(95000.0, Unit::Rupees), "95,000");
        assert_eq!(format_metric_value(3500000.0, Unit::RupeesCrore), "Rs 35,00,000 Cr");
        assert_eq!(format_metric_value(7.26, Unit::Percent), "7.3%");
        assert_eq!(format_metric_value(3.5, Unit::PercentOfGsdp), "3.5% GSDP");
        assert_eq!(format_metric_value(12.0, Unit::PercentagePoints), "12.0pp");
        assert_eq!(format_metric_value(11320.4, Unit::PerSqKm), "11,320/sq km");
        assert_eq!(format_metric_value(6.0, Unit::PerThousand), "6.0 per 1000");
        assert_eq!(format_metric_value(12.5, Unit::RupeesCrore), "12.5");
    }

    #[test]
    fn halves_round_up() {
        assert_eq!(format_metric_value(12.25, Unit::Percent), "12.3%");
        assert_eq!(format_metric_value(0.25, Unit::PercentagePoints), "0.3pp");
        assert_eq!(format_metric_value(-0.75, Unit::PercentOfGsdp), "-0.8% GSDP");
        assert_eq!(format_metric_value(1.15, Unit::Percent), "1.1%");
        assert_eq!(format_metric_value(2.5, Unit::PerLakh), "2.5 per lakh");
        assert_eq!(format_indian_number(2.5), "3");
        assert_eq!(format_indian_number(-2.5), "-2");
        assert_eq!(format_indian_number(-2.6), "-3");
    }

    #[test]
    fn missing_values_render_as_dash() {
        assert_eq!(format_optional(None, Unit::Percent), "-");
    }
}
