// src/format.rs
//
// Turns estimator numbers into the strings and series the pages display.

use crate::domain::{PropertyAttributes, TrendPoint};

/// US dollars, no cents: 425000 -> "$425,000", -1000 -> "-$1,000".
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs() as u64))
}

/// Axis label in compact notation: "$950", "$425K", "$1.2M".
pub fn format_compact_currency(value: f64) -> String {
    const UNITS: [(f64, &str); 3] = [(1_000.0, "K"), (1_000_000.0, "M"), (1_000_000_000.0, "B")];

    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    let mut unit = UNITS.iter().rposition(|(size, _)| abs >= *size);
    loop {
        let rounded = match unit {
            Some(i) => (abs / UNITS[i].0 * 10.0).round() / 10.0,
            None => abs.round(),
        };

        // 999_950 rounds to 1000K; step up to 1M
        let next = unit.map_or(0, |i| i + 1);
        if rounded >= 1_000.0 && next < UNITS.len() {
            unit = Some(next);
            continue;
        }

        let suffix = unit.map_or("", |i| UNITS[i].1);
        return if rounded.fract() == 0.0 {
            format!("{sign}${}{suffix}", rounded as u64)
        } else {
            format!("{sign}${rounded:.1}{suffix}")
        };
    }
}

/// 1800 -> "1,800".
pub fn format_thousands(value: u64) -> String {
    group_thousands(value)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// "3BR/2BA", or "3BR/2.5BA" with a half bath.
pub fn property_type_label(attrs: &PropertyAttributes) -> String {
    format!("{}BR/{}BA", attrs.bedrooms, attrs.bathrooms)
}

pub fn property_age(attrs: &PropertyAttributes, current_year: i32) -> i32 {
    current_year - attrs.year_built
}

/// Trend data shaped for the chart component.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<i64>,
    /// Lower edge of the y axis: 10% under the smallest value.
    pub axis_min: i64,
    /// Upper edge of the y axis: 10% over the largest value.
    pub axis_max: i64,
}

impl ChartSeries {
    pub fn from_trend(trend: &[TrendPoint]) -> Self {
        let labels = trend.iter().map(|p| p.month.clone()).collect();
        let values: Vec<i64> = trend.iter().map(|p| p.price).collect();

        let min = values.iter().copied().min().unwrap_or(0);
        let max = values.iter().copied().max().unwrap_or(0);

        Self {
            labels,
            values,
            axis_min: (min as f64 * 0.9).floor() as i64,
            axis_max: (max as f64 * 1.1).ceil() as i64,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Where `value` sits between the axis edges, 0.0 at the bottom.
    pub fn fraction(&self, value: f64) -> f64 {
        let span = self.axis_max as f64 - self.axis_min as f64;
        if span <= 0.0 {
            return 0.5;
        }
        ((value - self.axis_min as f64) / span).clamp(0.0, 1.0)
    }

    /// Evenly spaced y-axis values from `axis_min` to `axis_max`, both included.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = (self.axis_min as f64, self.axis_max as f64);
        if count == 0 {
            return vec![min];
        }
        (0..=count)
            .map(|i| min + (max - min) * i as f64 / count as f64)
            .collect()
    }
}
