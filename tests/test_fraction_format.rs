use recipe_scout::format_fraction;

#[test]
fn renders_mixed_fractions() {
    assert_eq!(format_fraction(4.5), "4 1/2");
    assert_eq!(format_fraction(1.25), "1 1/4");
}

#[test]
fn renders_whole_numbers_plain() {
    assert_eq!(format_fraction(3.0), "3");
    assert_eq!(format_fraction(1.0), "1");
}

#[test]
fn renders_pure_fractions() {
    assert_eq!(format_fraction(0.5), "1/2");
    assert_eq!(format_fraction(0.75), "3/4");
}

#[test]
fn nan_renders_empty() {
    assert_eq!(format_fraction(f64::NAN), "");
}

#[test]
fn terminates_on_irrational_like_inputs() {
    // The approximation loop is bounded; these must all return
    for value in [
        0.333333,
        0.142857,
        std::f64::consts::PI - 3.0,
        0.0000001,
        123.456789,
    ] {
        let rendered = format_fraction(value);
        assert!(!rendered.is_empty(), "no result for {value}");
    }
}

#[test]
fn approximation_stays_close() {
    // 0.6666 should land on 2/3, not something exotic
    assert_eq!(format_fraction(2.0 / 3.0), "2/3");
    assert_eq!(format_fraction(5.0 + 1.0 / 3.0), "5 1/3");
}
