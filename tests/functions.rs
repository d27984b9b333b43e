use std::sync::Arc;

use calq::{Context, FunctionRegistry, Value, evaluate, evaluate_with, format};

const DELTA: f64 = 1e-9;

fn scalar(src: &str) -> f64 {
    match evaluate(src, &mut Context::new()) {
        Ok(Value::Scalar(v)) => v,
        Ok(other) => panic!("`{src}` produced an array: {other}"),
        Err(e) => panic!("Script `{src}` failed: {e}"),
    }
}

fn assert_close(src: &str, expected: f64) {
    let got = scalar(src);
    assert!((got - expected).abs() < DELTA, "`{src}` = {got}, expected {expected}");
}

fn assert_prints(src: &str, expected: &str) {
    match evaluate(src, &mut Context::new()) {
        Ok(value) => assert_eq!(format(&value), expected, "for `{src}`"),
        Err(e) => panic!("Script `{src}` failed: {e}"),
    }
}

#[test]
fn trigonometry() {
    assert_prints("sin(0)", "0");
    assert_prints("sin(PI)", "0");
    assert_prints("cos(PI)", "-1");
    assert_close("tan(PI / 4)", 1.0);
    assert_close("asin(1)", std::f64::consts::FRAC_PI_2);
    assert_close("acos(0)", std::f64::consts::FRAC_PI_2);
    assert_close("atan(1)", std::f64::consts::FRAC_PI_4);
    assert_close("atan2(1, 1)", std::f64::consts::FRAC_PI_4);
    assert_prints("sinh(0) + tanh(0)", "0");
    assert_prints("cosh(0)", "1");
    assert_prints("degrees(PI)", "180");
    assert_close("radians(180)", std::f64::consts::PI);
}

#[test]
fn powers_roots_and_logarithms() {
    assert_prints("sqrt(16)", "4");
    assert_prints("cbrt(27)", "3");
    assert_prints("pow(2, 10)", "1024");
    assert_prints("hypot(3, 4)", "5");
    assert_prints("exp(0)", "1");
    assert_prints("ln(1)", "0");
    assert_prints("log10(1000)", "3");
    assert_prints("log(100)", "2");
    assert_prints("log(2, 8)", "3");
    assert_close("log(3, 10)", 10f64.ln() / 3f64.ln());
}

#[test]
fn rounding_and_sign() {
    assert_prints("abs(-5)", "5");
    assert_prints("ceil(1.2)", "2");
    assert_prints("floor(-1.2)", "-2");
    assert_prints("round(2.5)", "3");
    assert_prints("round(-2.5)", "-2");
    assert_prints("round(2.4)", "2");
    assert_prints("round(0.49999999999999994)", "0");
    assert_prints("round(-0.5)", "0");
    assert_prints("round(4503599627370497)", "4503599627370497");
    assert_prints("signum(-3)", "-1");
    assert_prints("signum(0)", "0");
    assert_prints("sign(7)", "1");
}

#[test]
fn aggregates() {
    assert_prints("max(1, 5, 3)", "5");
    assert_prints("min(4, -2, 8)", "-2");
    assert_prints("sum(1, 2, 3)", "6");
    assert_prints("avg(1, 2, 3, 4)", "2.5");
    assert_prints("prod(2, 3, 4)", "24");
    assert_prints("count(7, 8, 9)", "3");
    assert_prints("median(3, 1, 2)", "2");
    assert_prints("median(4, 1, 3, 2)", "2.5");
    assert_prints("range(3, 9, 1)", "8");
    assert_prints("sumabs(-1, 2, -3)", "6");
    assert_prints("norm2(3, 4)", "5");
    assert_prints("rms(1, 7)", "5");
    assert_prints("geomean(1, 3, 9)", "3");
}

#[test]
fn integer_functions() {
    assert_prints("gcd(12, 18)", "6");
    assert_prints("gcd(12, 18, 8)", "2");
    assert_prints("lcm(4, 6)", "12");
    assert_prints("lcm(2, 3, 4)", "12");
    assert_prints("C(5, 2)", "10");
    assert_prints("C(10, 0)", "1");
    assert_prints("C(3, 5)", "0");
    assert_prints("P(5, 2)", "20");
    assert_prints("P(4, 4)", "24");
    assert_prints("P(3, 5)", "0");
}

#[test]
fn integer_functions_accept_integers_beyond_two_to_the_53() {
    assert_prints("gcd(1e16, 2)", "2");
    assert_prints("gcd(1e18, 6)", "2");
    assert_prints("lcm(2^60, 1)", "1152921504606850000");
}

#[test]
fn huge_combinatorics_overflow_to_infinity() {
    assert_prints("P(9e15, 9e15)", "Infinity");
    assert_prints("C(1e15, 5e14)", "Infinity");
    assert_prints("P(171, 171)", "Infinity");
    assert_prints("C(2000, 1000)", "Infinity");
    assert_prints("P(170, 170) / 170!", "1");
}

#[test]
fn variance_and_deviation() {
    assert_prints("var([1, 2, 3])", "1");
    assert_close("varp([1, 2, 3])", 2.0 / 3.0);
    assert_prints("varp(2, 4, 4, 4, 5, 5, 7, 9)", "4");
    assert_prints("stdp(2, 4, 4, 4, 5, 5, 7, 9)", "2");
    assert_close("std(2, 4, 4, 4, 5, 5, 7, 9)", (32.0f64 / 7.0).sqrt());
}

#[test]
fn percentiles() {
    assert_prints("percentile(50, 1, 2, 3, 4, 5)", "3");
    assert_prints("percentile(25, 1, 2, 3, 4, 5)", "2");
    assert_prints("percentile(0, 5, 1, 3)", "1");
    assert_prints("percentile(100, 5, 1, 3)", "5");
    assert_prints("percentile(10, 1, 2)", "1.1");
    assert_prints("percentile(40, 7)", "7");
}

#[test]
fn paired_statistics() {
    assert_prints("cov(1, 2, 3, 2, 4, 6)", "2");
    assert_close("covp(1, 2, 3, 2, 4, 6)", 4.0 / 3.0);
    assert_prints("corr(1, 2, 3, 2, 4, 6)", "1");
    assert_prints("corr(1, 2, 3, 6, 4, 2)", "-1");
    assert_prints("x = [1, 2, 3]; y = [2, 4, 6]; cov(x, y)", "2");
}

#[test]
fn vector_functions() {
    assert_prints("dot(1, 2, 3, 4, 5, 6)", "32");
    assert_prints("dot([1, 2, 3], [4, 5, 6])", "32");
    assert_prints("dist(0, 0, 3, 4)", "5");
    assert_prints("manhattan(1, 1, 4, 5)", "7");
}

#[test]
fn aliases_resolve_to_their_targets() {
    assert_prints("mean(1, 2, 3)", "2");
    assert_prints("product(2, 3)", "6");
    assert_prints("norm1(-1, 1)", "2");
    assert_prints("variance(1, 2, 3)", "1");
    assert_prints("stddevp(2, 4, 4, 4, 5, 5, 7, 9)", "2");
    assert_prints("pctl(50, 1, 2, 3)", "2");
    assert_prints("covariance(1, 2, 3, 2, 4, 6)", "2");
    assert_prints("correlation(1, 2, 3, 2, 4, 6)", "1");
    assert_prints("dotprod(1, 2, 3, 4)", "11");
    assert_prints("distance(0, 0, 3, 4)", "5");
    assert_prints("euclidean(0, 0, 3, 4)", "5");
    assert_prints("taxicab(0, 0, 3, 4)", "7");
    assert_prints("comb(10, 3)", "120");
    assert_prints("perm(5, 3)", "60");
}

#[test]
fn results_are_free_of_float_noise() {
    assert_eq!(scalar("sum(0.1, 0.2)"), 0.3);
    assert_eq!(scalar("sqrt(2)^2"), 2.0);
}

#[test]
fn registry_lists_builtins_and_aliases() {
    let registry = FunctionRegistry::standard();
    let names = registry.names();

    for name in ["sin", "percentile", "c", "p", "comb", "det", "inv", "solve", "mean", "t"] {
        assert!(names.contains(&name), "missing {name}");
    }
    assert!(names.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn aliases_share_the_target_entry() {
    let registry = FunctionRegistry::standard();

    let (Some(alias), Some(target)) = (registry.scalar("Comb"), registry.scalar("c")) else {
        panic!("comb or C is not registered");
    };
    assert!(Arc::ptr_eq(alias, target));
    assert_eq!(alias.name, "C");

    let (Some(alias), Some(target)) = (registry.matrix("t"), registry.matrix("transpose")) else {
        panic!("t or transpose is not registered");
    };
    assert!(Arc::ptr_eq(alias, target));
    assert!(registry.contains("DETERMINANT"));
    assert!(!registry.contains("frobnicate"));
}

#[test]
fn empty_registry_knows_no_functions() {
    let registry = FunctionRegistry::empty();
    let result = evaluate_with("sin(0)", &mut Context::new(), &registry);
    assert!(result.is_err());
    assert_eq!(evaluate_with("1 + 1", &mut Context::new(), &registry),
               Ok(Value::Scalar(2.0)));
}
