use std::fs::{self};

use calq::{Context, Value, evaluate, format};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = evaluate(&code, &mut Context::new()) {
                panic!("calq example {} in {:?} failed:\n{}\nError: {}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No calq examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```calq") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_success(src: &str) {
    if let Err(e) = evaluate(src, &mut Context::new()) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if evaluate(src, &mut Context::new()).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

/// Evaluates `src` in a fresh context and compares the formatted result.
fn assert_prints(src: &str, expected: &str) {
    match evaluate(src, &mut Context::new()) {
        Ok(value) => assert_eq!(format(&value), expected, "for `{src}`"),
        Err(e) => panic!("Script `{src}` failed: {e}"),
    }
}

fn scalar(src: &str) -> f64 {
    match evaluate(src, &mut Context::new()) {
        Ok(Value::Scalar(v)) => v,
        Ok(other) => panic!("`{src}` produced an array: {other}"),
        Err(e) => panic!("Script `{src}` failed: {e}"),
    }
}

#[test]
fn basic_arithmetic() {
    assert_prints("1 + 2", "3");
    assert_prints("7 * 9", "63");
    assert_prints("8 - 5", "3");
    assert_prints("10 / 4", "2.5");
    assert_prints("10 % 3", "1");
    assert_prints("-7 % 3", "-1");
    assert_prints("0.1 + 0.2", "0.3");
}

#[test]
fn operator_precedence() {
    assert_prints("2 + 3 * 4", "14");
    assert_prints("(2 + 3) * 4", "20");
    assert_prints("10 - 4 - 3", "3");
    assert_prints("100 / 10 / 5", "2");
    assert_prints("2 * 3 ^ 2", "18");
    assert_prints("2 * -3", "-6");
}

#[test]
fn power_is_right_associative() {
    assert_prints("2^3^2", "512");
    assert_prints("(2^3)^2", "64");
    assert_prints("2^(-1)", "0.5");
}

#[test]
fn signs_bind_looser_than_power() {
    assert_prints("-3^2", "-9");
    assert_prints("(-3)^2", "9");
    assert_prints("--5", "5");
    assert_prints("+-5", "-5");
    assert_prints("-2!", "-2");
}

#[test]
fn sign_after_caret_is_rejected() {
    assert_failure("2^-3");
}

#[test]
fn implicit_multiplication() {
    assert_prints("3(4+5)", "27");
    assert_prints("(1+1)(2+2)", "8");
    assert_prints("x = 4; 2x", "8");
    assert_prints("x = 3; 2x^2", "36");
    assert_prints("x = 2; y = 5; x y", "10");
    assert_eq!(scalar("2PI"), scalar("2 * PI"));
    assert_eq!(scalar("2sqrt(16)"), 8.0);
}

#[test]
fn adjacent_numbers_are_rejected() {
    assert_failure("1 2");
    assert_failure("3 (1)2");
}

#[test]
fn factorials() {
    assert_prints("0!", "1");
    assert_prints("5!", "120");
    assert_prints("3!!", "720");
    assert_prints("(2+1)!", "6");
    assert_success("170!");
    assert_failure("171!");
    assert_failure("(-1)!");
    assert_failure("2.5!");
}

#[test]
fn constants_are_case_insensitive() {
    assert_eq!(scalar("PI"), std::f64::consts::PI);
    assert_eq!(scalar("pi"), std::f64::consts::PI);
    assert_eq!(scalar("e"), std::f64::consts::E);
    assert_prints("ln(E)", "1");
}

#[test]
fn assignments_and_statement_lists() {
    assert_prints("x = 10; y = 2x; x + y", "30");
    assert_prints("x = 5", "5");
    assert_prints("a = b = 3; a + b", "6");
    assert_prints("x = 1; x = x + 1; x = x * 10; x", "20");
    assert_prints("1; 2; 3", "3");
    assert_prints("1;", "1");
}

#[test]
fn empty_statements_are_rejected() {
    assert_failure("1;;2");
    assert_failure(";");
    assert_failure("");
    assert_failure("   ");
}

#[test]
fn context_persists_between_evaluations() {
    let mut context = Context::new();
    evaluate("rate = 0.25", &mut context).unwrap();
    evaluate("base = 200", &mut context).unwrap();

    let value = evaluate("base * rate", &mut context).unwrap();
    assert_eq!(value, Value::Scalar(50.0));
    assert_eq!(context.len(), 2);
}

#[test]
fn assignments_survive_a_later_failure() {
    let mut context = Context::new();
    assert!(evaluate("a = 1; b = 2; a / 0", &mut context).is_err());
    assert_eq!(context.get("a"), Some(&Value::Scalar(1.0)));
    assert_eq!(context.get("b"), Some(&Value::Scalar(2.0)));
}

#[test]
fn variables_are_case_sensitive() {
    assert_failure("x = 1; X");
    assert_prints("x = 1; X = 2; x + X", "3");
}

#[test]
fn identifiers_accept_unicode_letters() {
    assert_prints("\u{3c0} = 2; \u{3c0}", "2");
    assert_prints("caf\u{e9} = 3; 2caf\u{e9}", "6");
    assert_prints("\u{5bbd}\u{5ea6}2 = 4; \u{5bbd}\u{5ea6}2 ^ 2", "16");
    assert_failure("\u{20ac}5");
}

#[test]
fn function_names_are_case_insensitive() {
    assert_prints("SQRT(16)", "4");
    assert_prints("Max(1, 9, 4)", "9");
    assert_prints("c(5, 2)", "10");
    assert_prints("C(5, 2)", "10");
}

#[test]
fn array_literals() {
    assert_prints("[1, 2, 3]", "[1, 2, 3]");
    assert_prints("[]", "[]");
    assert_prints("[[1, 2], [3]]", "[[1, 2], [3]]");
    assert_prints("[1 + 1, 2 * 3, x = 4]", "[2, 6, 4]");
}

#[test]
fn arrays_flatten_into_scalar_functions() {
    assert_prints("scores = [10, 20, 30]; avg(scores)", "20");
    assert_prints("scores = [10, 20, 30]; avg(scores); scores", "[10, 20, 30]");
    assert_prints("sum([1, [2, 3]], 4)", "10");
    assert_prints("max([3, 9], [[12], 4])", "12");
    assert_prints("count([1, 2, 3], 4)", "4");
}

#[test]
fn arrays_reject_arithmetic_operators() {
    assert_failure("[1, 2] + 1");
    assert_failure("1 * [1, 2]");
    assert_failure("-[1, 2]");
    assert_failure("[3]!");
}

#[test]
fn grouping_accepts_statements() {
    assert_prints("(x = 3) + x", "6");
    assert_failure("(1; 2) * 5");
}

#[test]
fn whitespace_is_ignored() {
    assert_prints(" \t1\n+\r\n2 ", "3");
}

#[test]
fn scientific_notation() {
    assert_prints("1e3", "1000");
    assert_prints("2.5E-2", "0.025");
    assert_prints(".5 + 1.", "1.5");
    assert_failure("1e");
    assert_failure("1e+");
}

#[test]
fn test_script_file() {
    let script = fs::read_to_string("tests/example.calq").expect("missing file");
    assert_success(&script);
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("x = 1 / 0");
    assert_failure("5 % 0");
}

#[test]
fn unknown_variable_is_error() {
    assert_failure("foo + 1");
}

#[test]
fn unknown_function_is_error() {
    assert_failure("frobnicate(1)");
}

#[test]
fn wrong_function_arity_is_error() {
    assert_failure("sin(1, 2)");
    assert_failure("max(1)");
    assert_failure("sum()");
}
