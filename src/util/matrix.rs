use crate::{
    error::RuntimeError,
    interpreter::{evaluator::EvalResult, value::Value},
    util::num::{count_to_f64, f64_to_i64_checked},
};

/// Pivots smaller than this in absolute value count as zero during
/// elimination.
pub const PIVOT_EPSILON: f64 = 1e-10;

/// A dense row-major matrix of scalars extracted from a nested [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Builds a matrix from row slices of equal length.
    ///
    /// # Example
    /// ```
    /// use calq::util::matrix::Matrix;
    ///
    /// let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
    /// assert_eq!(m.shape(), (2, 2));
    /// assert_eq!(m.get(1, 0), 3.0);
    /// ```
    #[must_use]
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        Self { rows: rows.len(),
               cols,
               data: rows.iter().flat_map(|r| r.iter().copied()).collect() }
    }

    fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows,
               cols,
               data: vec![0.0; rows * cols] }
    }

    /// Returns `(rows, columns)`.
    #[must_use]
    pub const fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the element at `row`, `col`.
    ///
    /// # Panics
    /// Panics if the position lies outside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for col in 0..self.cols {
            self.data.swap(a * self.cols + col, b * self.cols + col);
        }
    }

    /// Converts the matrix back into nested array values.
    #[must_use]
    pub fn into_value(self) -> Value {
        let rows = (0..self.rows).map(|r| {
                                     Value::from(self.row(r)
                                                     .iter()
                                                     .map(|&v| Value::Scalar(v))
                                                     .collect::<Vec<_>>())
                                 })
                                 .collect::<Vec<_>>();
        Value::from(rows)
    }
}

/// Requires `value` to be a non-empty array and returns its elements.
///
/// # Errors
/// - `MatrixRequired` if `value` is a scalar.
/// - `MatrixEmpty` if the array has no elements.
pub fn require_array<'v>(value: &'v Value, function: &str) -> EvalResult<&'v [Value]> {
    match value {
        Value::Scalar(_) => Err(RuntimeError::MatrixRequired { function: function.to_string() }),
        Value::Array(items) if items.is_empty() => {
            Err(RuntimeError::MatrixEmpty { function: function.to_string() })
        },
        Value::Array(items) => Ok(items),
    }
}

/// Requires non-empty `rows` to form a rectangular matrix and returns its
/// shape.
///
/// # Errors
/// - `MatrixExpected` if the first element is a scalar, i.e. the value is a
///   plain vector.
/// - `MatrixRowNotArray` if a later row is a scalar.
/// - `MatrixInconsistentCols` if row lengths differ.
pub fn require_matrix(rows: &[Value], function: &str) -> EvalResult<(usize, usize)> {
    let cols = match rows.first() {
        Some(Value::Array(first)) => first.len(),
        _ => return Err(RuntimeError::MatrixExpected { function: function.to_string() }),
    };

    for (index, row) in rows.iter().enumerate() {
        match row {
            Value::Scalar(_) => {
                return Err(RuntimeError::MatrixRowNotArray { function: function.to_string(),
                                                             row:      index + 1, });
            },
            Value::Array(items) if items.len() != cols => {
                return Err(RuntimeError::MatrixInconsistentCols { function: function.to_string() });
            },
            Value::Array(_) => {},
        }
    }

    Ok((rows.len(), cols))
}

/// Requires a square shape.
///
/// # Errors
/// `MatrixSquareRequired` if `rows != cols`.
pub fn require_square(rows: usize, cols: usize, function: &str) -> EvalResult<()> {
    if rows != cols {
        return Err(RuntimeError::MatrixSquareRequired { function: function.to_string() });
    }
    Ok(())
}

/// Copies validated matrix rows into a [`Matrix`].
///
/// # Errors
/// `MatrixElementNotScalar` if any element is itself an array.
pub fn to_matrix(rows: &[Value], shape: (usize, usize), function: &str) -> EvalResult<Matrix> {
    let (n_rows, n_cols) = shape;
    let mut matrix = Matrix::zeros(n_rows, n_cols);

    for (r, row) in rows.iter().enumerate() {
        let Value::Array(items) = row else {
            return Err(RuntimeError::MatrixRowNotArray { function: function.to_string(),
                                                         row:      r + 1, });
        };
        for (c, item) in items.iter().enumerate() {
            match item {
                Value::Scalar(v) => matrix.set(r, c, *v),
                Value::Array(_) => {
                    return Err(RuntimeError::MatrixElementNotScalar { function:
                                                                          function.to_string(), });
                },
            }
        }
    }

    Ok(matrix)
}

/// Runs the full validation chain (array, matrix shape, scalar elements).
///
/// # Example
/// ```
/// use calq::{Context, evaluate, util::matrix::parse_matrix};
///
/// let value = evaluate("[[1, 2], [3, 4]]", &mut Context::new()).unwrap();
/// let m = parse_matrix(&value, "det").unwrap();
/// assert_eq!(m.shape(), (2, 2));
/// ```
pub fn parse_matrix(value: &Value, function: &str) -> EvalResult<Matrix> {
    let rows = require_array(value, function)?;
    let shape = require_matrix(rows, function)?;
    to_matrix(rows, shape, function)
}

fn parse_square(value: &Value, function: &str) -> EvalResult<Matrix> {
    let matrix = parse_matrix(value, function)?;
    require_square(matrix.rows, matrix.cols, function)?;
    Ok(matrix)
}

/// Transposes a vector or matrix.
///
/// - A plain vector `[a, b, c]` becomes the column `[[a], [b], [c]]`.
/// - A column `[[a], [b], [c]]` becomes the plain vector `[a, b, c]`.
/// - Any other `M×N` matrix becomes `N×M`.
///
/// Elements are moved as values, so a matrix of arrays keeps its elements.
pub fn transpose(value: &Value) -> EvalResult<Value> {
    let rows = require_array(value, "transpose")?;

    if rows[0].is_scalar() {
        let column = rows.iter()
                         .map(|v| Value::from(vec![v.clone()]))
                         .collect::<Vec<_>>();
        return Ok(Value::from(column));
    }

    let (_, n_cols) = require_matrix(rows, "transpose")?;
    let grid = rows.iter()
                   .map(Value::as_array)
                   .collect::<EvalResult<Vec<_>>>()?;

    if n_cols == 1 {
        return Ok(Value::from(grid.iter().map(|row| row[0].clone()).collect::<Vec<_>>()));
    }

    let transposed = (0..n_cols).map(|c| {
                                    Value::from(grid.iter()
                                                    .map(|row| row[c].clone())
                                                    .collect::<Vec<_>>())
                                })
                                .collect::<Vec<_>>();
    Ok(Value::from(transposed))
}

/// Multiplies two matrices.
///
/// # Errors
/// `MatrixDimensionMismatch` when the column count of `a` differs from the
/// row count of `b`, plus the usual shape errors for either operand.
pub fn matmul(a: &Value, b: &Value) -> EvalResult<Value> {
    let rows_a = require_array(a, "matmul")?;
    let rows_b = require_array(b, "matmul")?;
    let shape_a = require_matrix(rows_a, "matmul")?;
    let shape_b = require_matrix(rows_b, "matmul")?;

    if shape_a.1 != shape_b.0 {
        return Err(RuntimeError::MatrixDimensionMismatch { left_cols:  shape_a.1,
                                                           right_rows: shape_b.0, });
    }

    let left = to_matrix(rows_a, shape_a, "matmul")?;
    let right = to_matrix(rows_b, shape_b, "matmul")?;
    Ok(multiply(&left, &right).into_value())
}

fn multiply(left: &Matrix, right: &Matrix) -> Matrix {
    let mut product = Matrix::zeros(left.rows, right.cols);
    for i in 0..left.rows {
        for j in 0..right.cols {
            let sum = (0..left.cols).map(|t| left.get(i, t) * right.get(t, j))
                                    .sum();
            product.set(i, j, sum);
        }
    }
    product
}

/// Sum of the main diagonal of a square matrix.
pub fn trace(value: &Value) -> EvalResult<f64> {
    let matrix = parse_square(value, "trace")?;
    Ok((0..matrix.rows).map(|i| matrix.get(i, i)).sum())
}

/// Rank by Gaussian elimination with partial pivoting.
///
/// A column whose largest remaining pivot is below [`PIVOT_EPSILON`] is
/// skipped.
#[allow(clippy::suboptimal_flops)]
pub fn rank(value: &Value) -> EvalResult<usize> {
    let mut a = parse_matrix(value, "rank")?;
    let (m, n) = a.shape();

    let mut rank = 0;
    let mut row = 0;
    for col in 0..n {
        if row >= m {
            break;
        }

        let pivot = (row..m).fold(row, |best, i| {
                                if a.get(i, col).abs() > a.get(best, col).abs() {
                                    i
                                } else {
                                    best
                                }
                            });
        if a.get(pivot, col).abs() < PIVOT_EPSILON {
            continue;
        }

        a.swap_rows(row, pivot);
        for i in row + 1..m {
            let factor = a.get(i, col) / a.get(row, col);
            for j in col..n {
                a.set(i, j, a.get(i, j) - factor * a.get(row, j));
            }
        }

        row += 1;
        rank += 1;
    }

    Ok(rank)
}

/// Column or row means of a matrix.
///
/// Axis `0` averages each column into a `1×N` matrix; axis `1` averages each
/// row into an `M×1` matrix.
///
/// # Errors
/// `MatrixInvalidAxis` for any axis other than exactly `0` or `1`.
pub fn mean(value: &Value, axis: f64) -> EvalResult<Value> {
    let matrix = parse_matrix(value, "mean")?;
    let (m, n) = matrix.shape();

    match f64_to_i64_checked(axis, RuntimeError::MatrixInvalidAxis)? {
        0 => {
            let row = (0..n).map(|c| {
                                let sum: f64 = (0..m).map(|r| matrix.get(r, c)).sum();
                                Value::Scalar(sum / count_to_f64(m))
                            })
                            .collect::<Vec<_>>();
            Ok(Value::from(vec![Value::from(row)]))
        },
        1 => {
            let column = (0..m).map(|r| {
                                   let sum: f64 = matrix.row(r).iter().sum();
                                   Value::from(vec![Value::Scalar(sum / count_to_f64(n))])
                               })
                               .collect::<Vec<_>>();
            Ok(Value::from(column))
        },
        _ => Err(RuntimeError::MatrixInvalidAxis),
    }
}

/// Determinant of a square matrix.
///
/// Orders up to 3 use closed formulas; larger matrices are expanded along the
/// first row.
pub fn determinant(value: &Value) -> EvalResult<f64> {
    let matrix = parse_square(value, "det")?;
    Ok(laplace(&matrix))
}

#[allow(clippy::suboptimal_flops)]
fn laplace(m: &Matrix) -> f64 {
    let g = |r, c| m.get(r, c);
    match m.rows {
        0 => 1.0,
        1 => g(0, 0),
        2 => g(0, 0) * g(1, 1) - g(0, 1) * g(1, 0),
        3 => {
            g(0, 0) * (g(1, 1) * g(2, 2) - g(1, 2) * g(2, 1))
            - g(0, 1) * (g(1, 0) * g(2, 2) - g(1, 2) * g(2, 0))
            + g(0, 2) * (g(1, 0) * g(2, 1) - g(1, 1) * g(2, 0))
        },
        n => (0..n).map(|col| {
                       let minor = minor(m, col);
                       let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
                       sign * g(0, col) * laplace(&minor)
                   })
                   .sum(),
    }
}

/// The submatrix left after removing row 0 and column `skip`.
fn minor(m: &Matrix, skip: usize) -> Matrix {
    let size = m.rows - 1;
    let mut sub = Matrix::zeros(size, size);
    for r in 1..m.rows {
        let mut sub_col = 0;
        for c in (0..m.cols).filter(|&c| c != skip) {
            sub.set(r - 1, sub_col, m.get(r, c));
            sub_col += 1;
        }
    }
    sub
}

/// Inverse by Gauss-Jordan elimination of `[A | I]` with partial pivoting.
///
/// # Errors
/// `MatrixSingular` when a pivot falls below [`PIVOT_EPSILON`].
pub fn inverse(value: &Value) -> EvalResult<Value> {
    let matrix = parse_square(value, "inv")?;
    Ok(invert(&matrix)?.into_value())
}

#[allow(clippy::suboptimal_flops)]
fn invert(matrix: &Matrix) -> EvalResult<Matrix> {
    let n = matrix.rows;
    let width = 2 * n;

    let mut a = Matrix::zeros(n, width);
    for i in 0..n {
        for j in 0..n {
            a.set(i, j, matrix.get(i, j));
        }
        a.set(i, i + n, 1.0);
    }

    for i in 0..n {
        let pivot_row = (i + 1..n).fold(i, |best, k| {
                                      if a.get(k, i).abs() > a.get(best, i).abs() {
                                          k
                                      } else {
                                          best
                                      }
                                  });
        a.swap_rows(i, pivot_row);

        let pivot = a.get(i, i);
        if pivot.abs() < PIVOT_EPSILON {
            return Err(RuntimeError::MatrixSingular);
        }

        for j in 0..width {
            a.set(i, j, a.get(i, j) / pivot);
        }

        for k in (0..n).filter(|&k| k != i) {
            let factor = a.get(k, i);
            for j in 0..width {
                a.set(k, j, a.get(k, j) - factor * a.get(i, j));
            }
        }
    }

    let mut result = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            result.set(i, j, a.get(i, j + n));
        }
    }
    Ok(result)
}

/// Solves `A·x = b` for a column vector `b`, computed as `inverse(A)·b`.
///
/// # Errors
/// - `SolveVectorFormat` if `b` is a plain vector or has more than one
///   column.
/// - `SolveDimensionMismatch` if `b` has a different row count than the order
///   of `A`.
/// - `MatrixSingular` if `A` has no inverse.
pub fn solve(a: &Value, b: &Value) -> EvalResult<Value> {
    let matrix = parse_square(a, "solve")?;
    let n = matrix.rows;

    let rows_b = require_array(b, "solve")?;
    if rows_b[0].is_scalar() {
        return Err(RuntimeError::SolveVectorFormat);
    }
    let shape_b = require_matrix(rows_b, "solve")?;
    if shape_b.1 != 1 {
        return Err(RuntimeError::SolveVectorFormat);
    }
    if shape_b.0 != n {
        return Err(RuntimeError::SolveDimensionMismatch { rows:  shape_b.0,
                                                          order: n, });
    }
    let rhs = to_matrix(rows_b, shape_b, "solve")?;

    let inverse = invert(&matrix)?;
    Ok(multiply(&inverse, &rhs).into_value())
}

impl From<Matrix> for Value {
    fn from(matrix: Matrix) -> Self {
        matrix.into_value()
    }
}
