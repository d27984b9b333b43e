use calq::{Context, Value, evaluate, format};

fn printed(src: &str) -> String {
    evaluate(src, &mut Context::new()).map(|v| format(&v))
                                      .unwrap_or_else(|e| panic!("Script `{src}` failed: {e}"))
}

#[test]
fn integers_print_without_a_fraction() {
    assert_eq!(format(&Value::Scalar(42.0)), "42");
    assert_eq!(format(&Value::Scalar(-7.0)), "-7");
    assert_eq!(printed("2^52 + 1"), "4503599627370497");
}

#[test]
fn negative_zero_and_tiny_values_print_as_zero() {
    assert_eq!(format(&Value::Scalar(-0.0)), "0");
    assert_eq!(format(&Value::Scalar(1e-13)), "0");
    assert_eq!(format(&Value::Scalar(-1e-13)), "0");
}

#[test]
fn near_integers_snap() {
    assert_eq!(format(&Value::Scalar(3.0 - 1e-13)), "3");
    assert_eq!(format(&Value::Scalar(-2.0 + 1e-13)), "-2");
}

#[test]
fn fractions_use_at_most_fifteen_significant_digits() {
    assert_eq!(printed("1 / 3"), "0.333333333333333");
    assert_eq!(printed("2 / 3"), "0.666666666666667");
    assert_eq!(printed("10 / 4"), "2.5");
    assert_eq!(format(&Value::Scalar(123_456.789)), "123456.789");
}

#[test]
fn never_scientific_notation() {
    assert_eq!(format(&Value::Scalar(1e-7)), "0.0000001");
    assert_eq!(format(&Value::Scalar(1e20)), "100000000000000000000");
    assert_eq!(printed("2^60"), "1152921504606850000");
    assert_eq!(printed("1e-5"), "0.00001");
}

#[test]
fn special_values_are_spelled_out() {
    assert_eq!(printed("1e300 * 1e10"), "Infinity");
    assert_eq!(printed("-1e300 * 1e10"), "-Infinity");
    assert_eq!(printed("0 * (1e300 * 1e10)"), "NaN");
    assert_eq!(printed("sqrt(0) / 1"), "0");
}

#[test]
fn arrays_print_recursively() {
    assert_eq!(printed("[]"), "[]");
    assert_eq!(printed("[1, 2.5, -3]"), "[1, 2.5, -3]");
    assert_eq!(printed("[[1, 3], [2, 4]]"), "[[1, 3], [2, 4]]");
    assert_eq!(printed("[[], [[1]], 0.1 + 0.2]"), "[[], [[1]], 0.3]");
}

#[test]
fn display_matches_format() {
    let value = evaluate("[1 / 3, [2, 1e-13]]", &mut Context::new()).unwrap();
    assert_eq!(value.to_string(), format(&value));
    assert_eq!(value.to_string(), "[0.333333333333333, [2, 0]]");
}
