use calq::{Context, Value, evaluate, format};

fn eval(src: &str) -> Value {
    evaluate(src, &mut Context::new()).unwrap_or_else(|e| panic!("Script `{src}` failed: {e}"))
}

fn assert_prints(src: &str, expected: &str) {
    assert_eq!(format(&eval(src)), expected, "for `{src}`");
}

#[test]
fn transpose_matrices_and_vectors() {
    assert_prints("transpose([[1, 2], [3, 4]])", "[[1, 3], [2, 4]]");
    assert_prints("transpose([[1, 2, 3], [4, 5, 6]])", "[[1, 4], [2, 5], [3, 6]]");
    assert_prints("transpose([1, 2, 3])", "[[1], [2], [3]]");
    assert_prints("transpose([[1], [2], [3]])", "[1, 2, 3]");
    assert_prints("t([[1, 2, 3]])", "[[1], [2], [3]]");
}

#[test]
fn transpose_twice_restores_a_vector() {
    let v = eval("[4, 5, 6]");
    assert_eq!(eval("transpose(transpose([4, 5, 6]))"), v);
}

#[test]
fn determinants() {
    assert_prints("det([[1, 2], [3, 4]])", "-2");
    assert_prints("det([[7]])", "7");
    assert_prints("det([[6, 1, 1], [4, -2, 5], [2, 8, 7]])", "-306");
    assert_prints("det([[1, 0, 2, -1], [3, 0, 0, 5], [2, 1, 4, -3], [1, 0, 5, 0]])", "30");
    assert_prints("determinant([[2, 0], [0, 2]])", "4");
    assert_prints("det([[1, 2], [2, 4]])", "0");
}

#[test]
fn matrix_products() {
    assert_prints("matmul([[1, 2], [3, 4]], [[5, 6], [7, 8]])", "[[19, 22], [43, 50]]");
    assert_prints("matmul([[1, 2, 3]], [[1], [2], [3]])", "[[14]]");
    assert_prints("matmul([[1], [2]], [[3, 4]])", "[[3, 4], [6, 8]]");
}

#[test]
fn trace_and_rank() {
    assert_prints("trace([[1, 2], [3, 4]])", "5");
    assert_prints("trace([[5]])", "5");
    assert_prints("rank([[1, 0], [0, 1]])", "2");
    assert_prints("rank([[1, 2], [2, 4]])", "1");
    assert_prints("rank([[1, 2, 3], [4, 5, 6], [7, 8, 9]])", "2");
    assert_prints("rank([[0, 0], [0, 0]])", "0");
    assert_prints("rank([[1, 2, 3], [2, 4, 7]])", "2");
}

#[test]
fn mean_along_an_axis() {
    assert_prints("mean([[1, 2], [3, 4]], 0)", "[[2, 3]]");
    assert_prints("mean([[1, 2], [3, 4]], 1)", "[[1.5], [3.5]]");
}

#[test]
fn mean_with_other_argument_counts_averages() {
    assert_prints("mean(1, 2, 3)", "2");
    assert_prints("mean([[1, 2], [3, 4]])", "2.5");
}

#[test]
fn inverses() {
    assert_prints("inv([[4, 7], [2, 6]])", "[[0.6, -0.7], [-0.2, 0.4]]");
    assert_prints("inverse([[2, 0], [0, 4]])", "[[0.5, 0], [0, 0.25]]");
    assert_prints("inv([[1, 2, 3], [0, 1, 4], [5, 6, 0]])",
                  "[[-24, 18, 5], [20, -15, -4], [-5, 4, 1]]");
}

#[test]
fn inverse_times_matrix_is_identity() {
    assert_prints("A = [[4, 7], [2, 6]]; matmul(A, inv(A))", "[[1, 0], [0, 1]]");
    assert_prints("A = [[2, 1, 1], [1, 3, 2], [1, 0, 0]]; matmul(inv(A), A)",
                  "[[1, 0, 0], [0, 1, 0], [0, 0, 1]]");
}

#[test]
fn linear_systems() {
    assert_prints("solve([[2, 1], [1, 3]], [[3], [5]])", "[[0.8], [1.4]]");
    assert_prints("A = [[2, 1], [1, 3]]; b = [[3], [5]]; matmul(A, solve(A, b))", "[[3], [5]]");
    assert_prints("solve([[1, 1, 1], [0, 2, 5], [2, 5, -1]], [[6], [-4], [27]])",
                  "[[5], [3], [-2]]");
}

#[test]
fn matrix_results_flow_into_scalar_functions() {
    assert_prints("sum(transpose([[1, 2], [3, 4]]))", "10");
    assert_prints("M = inv([[2, 0], [0, 4]]); max(M)", "0.5");
}
