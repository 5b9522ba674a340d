use flourish_core::{ease_out_expo, format_count, format_percentage};

#[test]
fn counts_below_ten_thousand_keep_separators() {
    assert_eq!(format_count(0.0), "0");
    assert_eq!(format_count(999.0), "999");
    assert_eq!(format_count(1_234.0), "1,234");
    assert_eq!(format_count(9_999.0), "9,999");
    // The value is floored before formatting.
    assert_eq!(format_count(9_999.9), "9,999");
}

#[test]
fn large_counts_abbreviate_with_si_units() {
    assert_eq!(format_count(10_000.0), "10k");
    assert_eq!(format_count(12_345.0), "12k");
    assert_eq!(format_count(64_500.0), "65k");
    assert_eq!(format_count(2_500_000.0), "2.5M");
    assert_eq!(format_count(25_000_000.0), "25M");
    assert_eq!(format_count(1_500_000_000.0), "1.5B");
    assert_eq!(format_count(999_499_999.0), "999M");
}

#[test]
fn quotient_of_one_decimal_drops_a_trailing_zero() {
    assert_eq!(format_count(2_000_000.0), "2M");
    assert_eq!(format_count(9_900_000.0), "9.9M");
}

#[test]
fn integer_rounding_carries_into_the_next_unit() {
    assert_eq!(format_count(999_999_999.0), "1B");
    assert_eq!(format_count(999_950_000.0), "1B");
}

#[test]
fn percentages_always_have_two_decimals() {
    assert_eq!(format_percentage(0.0), "0.00%");
    assert_eq!(format_percentage(83.5), "83.50%");
    assert_eq!(format_percentage(12.3456), "12.35%");
    assert_eq!(format_percentage(100.0), "100.00%");
}

#[test]
fn easing_boundaries_are_exact() {
    assert_eq!(ease_out_expo(0.0), 0.0);
    assert_eq!(ease_out_expo(1.0), 1.0);
}

#[test]
fn easing_is_strictly_increasing() {
    let mut previous = 0.0;
    for step in 1..=100 {
        let x = f64::from(step) / 100.0;
        let eased = ease_out_expo(x);
        assert!(eased > previous, "easing not increasing at x={x}");
        previous = eased;
    }
}
