use calq::{
    Context, EvalError, evaluate,
    error::{ErrorCode, ErrorFamily, ParseError},
};

fn error(src: &str) -> EvalError {
    match evaluate(src, &mut Context::new()) {
        Ok(value) => panic!("`{src}` succeeded with {value}, expected an error"),
        Err(e) => e,
    }
}

fn assert_code(src: &str, code: &str) {
    assert_eq!(error(src).code().as_str(), code, "for `{src}`");
}

fn assert_message(src: &str, message: &str) {
    assert_eq!(error(src).to_string(), message, "for `{src}`");
}

fn position(src: &str) -> Option<usize> {
    match error(src) {
        EvalError::Parse(e) => e.position(),
        EvalError::Runtime(e) => panic!("`{src}` failed at runtime: {e}"),
    }
}

#[test]
fn arithmetic_errors() {
    assert_message("1 / 0", "[A001] Division by zero");
    assert_message("5 % 0", "[A002] Modulo by zero");
    assert_message("(-1)!", "[A003] Factorial requires a non-negative integer, but got -1");
    assert_message("2.5!", "[A003] Factorial requires a non-negative integer, but got 2.5");
    assert_message("171!",
                   "[A004] Factorial parameter too large (maximum supported is 170!)");
    assert_message("gcd(1.5, 2)", "[A005] gcd requires integer arguments");
    assert_message("gcd(1e19, 2)", "[A005] gcd requires integer arguments");
    assert_message("C(2.5, 1)", "[A005] C requires integer arguments");
    assert_message("ln(0)", "[A006] ln parameter must be greater than 0");
    assert_message("log10(-1)", "[A006] log10 parameter must be greater than 0");
    assert_message("sqrt(-4)", "[A008] sqrt parameter cannot be negative");
    assert_code("corr(1, 1, 2, 3)", "A009");
}

#[test]
fn syntax_errors() {
    assert_message("", "[S002] Expression cannot be empty");
    assert_code("  \n ", "S002");
    assert_message("(1 + 2",
                   "[S001] Syntax error at position 6: expected ')', but got END_OF_EXPRESSION ''");
    assert_message("2 + * 3",
                   "[S003] Syntax error at position 4: expected number, identifier, left \
                    parenthesis or left bracket, but got '*' '*'");
    assert_message("1 2", "[S004] Syntax error at position 2: extra content after expression '2'");
    assert_message("1 # 2", "[S005] Illegal character '#' at position 2");
    assert_message("x\u{e9} = 1 \u{20ac}", "[S005] Illegal character '\u{20ac}' at position 7");
    assert_message("1e+", "[S006] Invalid scientific notation format at position 3: expected digit");
    assert_code("1;;2", "S003");
    assert_code("sum(1,)", "S003");
    assert_code("[1, 2", "S001");
    assert_code("2^-3", "S003");
}

#[test]
fn syntax_errors_report_positions() {
    assert_eq!(position("1 2"), Some(2));
    assert_eq!(position("x = 1; y = ; 3"), Some(11));
    assert_eq!(position("\u{20ac} + 1"), Some(0));
    assert_eq!(position("\u{3c0} + \u{20ac}"), Some(4));
    assert_eq!(position("sum(1, 2) )"), Some(10));
    assert_eq!(position(""), None);
}

#[test]
fn type_errors() {
    assert_message("[1, 2] + 1", "[T001] Operator '+' does not support array as left operand");
    assert_message("2 ^ [1]", "[T002] Operator '^' does not support array as right operand");
    assert_message("-[1, 2]", "[T003] Unary operator '-' does not support array operands");
    assert_message("[3]!", "[T004] Factorial operator '!' does not support array operands");
    assert_message("mean([[1, 2]], [0])", "[T005] mean axis parameter must be a scalar");
    assert_message("foo + 1", "[T007] Undefined variable: foo");
}

#[test]
fn function_errors() {
    assert_message("Frobnicate(1)", "[F001] Unknown function: Frobnicate");
    assert_message("sin(1, 2)", "[F002] Function sin requires 1 argument(s), but got 2");
    assert_message("max(1)", "[F003] Function max requires at least 2 argument(s), but got 1");
    assert_message("log(1, 2, 3)", "[F004] Function log requires 1 or 2 arguments, but got 3");
    assert_code("log()", "F004");
    assert_message("percentile(101, 1, 2)", "[F005] Percentile must be between 0 and 100");
    assert_code("cov(1, 2, 3)", "F006");
    assert_message("cov(1, 2)", "[F007] Covariance calculation requires at least 2 data pairs");
    assert_code("corr(1, 2, 3)", "F008");
    assert_code("corr(1, 2)", "F009");
    assert_code("dot(1, 2, 3)", "F010");
    assert_code("dist(1, 2, 3)", "F011");
    assert_code("manhattan(1, 2, 3)", "F012");
    assert_message("var(5)", "[F014] Sample variance requires at least 2 arguments");
    assert_code("std()", "F014");
    assert_message("varp()", "[F015] Population variance requires at least 1 argument");
    assert_code("log(1, 10)", "F019");
    assert_code("log(-2, 10)", "F019");
    assert_code("log(2, 0)", "F020");
    assert_code("log(0)", "F020");
    assert_code("geomean(4, 0)", "F021");
}

#[test]
fn argument_counts_apply_after_flattening() {
    assert_code("sin([1, 2])", "F002");
    assert_code("max([1])", "F003");
    assert_code("sum([])", "F003");
}

#[test]
fn matrix_errors() {
    assert_message("det(5)", "[M001] det requires a vector or matrix as parameter");
    assert_message("det([])", "[M002] det parameter cannot be empty");
    assert_message("det([1, 2])", "[M003] det requires a matrix, not a vector");
    assert_message("det([[1, 2], 3])", "[M004] det: row 2 is not an array");
    assert_code("det([[1, 2], [3]])", "M005");
    assert_code("det([[1, 2, 3], [4, 5, 6]])", "M006");
    assert_message("trace([[1, 2]])",
                   "[M006] trace requires a square matrix (number of rows must equal number of \
                    columns)");
    assert_code("det([[1, [2]], [3, 4]])", "M007");
    assert_message("matmul([[1, 2]], [[1, 2]])",
                   "[M008] matmul: matrix dimension mismatch, left matrix column count (2) must \
                    equal right matrix row count (1)");
    assert_message("inv([[1, 2], [2, 4]])", "[M009] Matrix is not invertible (singular matrix)");
    assert_code("solve([[1, 2], [2, 4]], [[1], [2]])", "M009");
    assert_message("mean([[1, 2]], 2)", "[M010] mean axis can only be 0 or 1");
    assert_code("mean([[1, 2]], 0.5)", "M010");
    assert_code("solve([[1, 0], [0, 1]], [1, 2])", "M011");
    assert_code("solve([[1, 0], [0, 1]], [[1, 2], [3, 4]])", "M011");
    assert_message("solve([[1, 0], [0, 1]], [[1], [2], [3]])",
                   "[M012] solve: row count of right-hand side vector b (3) must equal the order \
                    of coefficient matrix A (2)");
    assert_message("C(-1, 2)", "[M014] C(n,k) parameters must be non-negative");
    assert_message("P(3, -1)", "[M015] P(n,k) parameters must be non-negative");
}

#[test]
fn mean_with_two_scalars_is_a_matrix_call() {
    assert_code("mean(4, 8)", "M001");
}

#[test]
fn codes_belong_to_their_family() {
    assert_eq!(error("1 / 0").code().family(), ErrorFamily::Arithmetic);
    assert_eq!(error("1 +").code().family(), ErrorFamily::Syntax);
    assert_eq!(error("x").code().family(), ErrorFamily::Type);
    assert_eq!(error("nope(1)").code().family(), ErrorFamily::Function);
    assert_eq!(error("det(1)").code().family(), ErrorFamily::Matrix);
    assert_eq!(ErrorCode::UnknownOperator.family(), ErrorFamily::Operator);
    assert_eq!(ErrorCode::UnknownOperator.as_str(), "O001");
}

#[test]
fn parse_errors_convert_into_eval_errors() {
    let parse = ParseError::EmptyExpression;
    let eval = EvalError::from(parse.clone());
    assert_eq!(eval, EvalError::Parse(parse));
    assert_eq!(eval.code(), ErrorCode::EmptyExpression);
}
