//! Display formatting for animated counter values.

/// Abbreviation units, largest first.
const UNITS: [(f64, &str); 3] = [(1e9, "B"), (1e6, "M"), (1e3, "k")];

/// Formats a percentage-kind counter value: the raw scaled float with
/// exactly two decimal places and a trailing `%`.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%")
}

/// Formats a count-kind counter value.
///
/// The value is floored to an integer first. Values below 10,000 keep
/// thousands separators; larger values are abbreviated with the biggest
/// fitting unit of [`UNITS`].
pub fn format_count(value: f64) -> String {
    let floored = value.floor().max(0.0);
    if floored < 10_000.0 {
        return group_thousands(floored as u64);
    }
    abbreviate(floored)
}

fn abbreviate(value: f64) -> String {
    match UNITS.iter().position(|(unit, _)| value >= *unit) {
        Some(index) => scale_to_unit(value, index),
        // Not reachable through `format_count` (sub-1k values stay
        // grouped); kept as the separator fallback of the host page.
        None => group_thousands(value as u64),
    }
}

fn scale_to_unit(value: f64, index: usize) -> String {
    let (unit, suffix) = UNITS[index];
    let scaled = value / unit;
    if scaled >= 10.0 {
        let rounded = scaled.round();
        // Rounding can carry the quotient into the next unit up, e.g.
        // 999_999_999 renders "1B" rather than "1000M".
        if rounded >= 1000.0 && index > 0 {
            return scale_to_unit(value, index - 1);
        }
        return format!("{rounded:.0}{suffix}");
    }
    let tenths = (scaled * 10.0).round() / 10.0;
    if tenths.fract() == 0.0 {
        format!("{tenths:.0}{suffix}")
    } else {
        format!("{tenths:.1}{suffix}")
    }
}

/// Inserts `,` thousands separators into a non-negative integer.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.chars().rev().collect()
}
