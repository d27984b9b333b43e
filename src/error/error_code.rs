use std::fmt;

/// The family an [`ErrorCode`] belongs to.
///
/// The first letter of every code names its family, e.g. `A001` is an
/// arithmetic error and `M009` a matrix error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorFamily {
    /// Division or modulo by zero, factorial domain, integer-only arguments.
    Arithmetic,
    /// Anything detected by the lexer or parser.
    Syntax,
    /// Arrays where scalars are required and the other way round.
    Type,
    /// Unknown functions, argument counts and function-specific domains.
    Function,
    /// Matrix shape and value requirements.
    Matrix,
    /// Operators the evaluator does not know.
    Operator,
}

/// Declares the error code table.
///
/// Each entry provides the variant name, the stable code string and the
/// family. The macro produces the `ErrorCode` enum together with its
/// `as_str` and `family` accessors so the three can never drift apart.
macro_rules! error_codes {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => ($code:literal, $family:ident)
        ),* $(,)?
    ) => {
        /// Machine-readable identifier of an error kind.
        ///
        /// The human-readable template lives on the error variant that
        /// carries the code; see [`ParseError`](crate::error::ParseError)
        /// and [`RuntimeError`](crate::error::RuntimeError).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ErrorCode {
            $(
                $(#[$meta])*
                $variant,
            )*
        }

        impl ErrorCode {
            /// Returns the stable code, such as `"A001"`.
            ///
            /// # Example
            /// ```
            /// use calq::error::ErrorCode;
            ///
            /// assert_eq!(ErrorCode::DivisionByZero.as_str(), "A001");
            /// assert_eq!(ErrorCode::MatrixSingular.as_str(), "M009");
            /// ```
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)*
                }
            }

            /// Returns the family this code belongs to.
            ///
            /// # Example
            /// ```
            /// use calq::error::{ErrorCode, ErrorFamily};
            ///
            /// assert_eq!(ErrorCode::ExtraContent.family(), ErrorFamily::Syntax);
            /// ```
            #[must_use]
            pub const fn family(self) -> ErrorFamily {
                match self {
                    $(Self::$variant => ErrorFamily::$family,)*
                }
            }
        }
    };
}

error_codes! {
    /// `A001`
    DivisionByZero => ("A001", Arithmetic),
    /// `A002`
    ModuloByZero => ("A002", Arithmetic),
    /// `A003`
    FactorialNegative => ("A003", Arithmetic),
    /// `A004`
    FactorialTooLarge => ("A004", Arithmetic),
    /// `A005`
    IntegerRequired => ("A005", Arithmetic),
    /// `A006`
    ParamMustBePositive => ("A006", Arithmetic),
    /// `A008`
    SqrtNegative => ("A008", Arithmetic),
    /// `A009`
    StdDevZero => ("A009", Arithmetic),

    /// `S001`
    SyntaxError => ("S001", Syntax),
    /// `S002`
    EmptyExpression => ("S002", Syntax),
    /// `S003`
    UnexpectedToken => ("S003", Syntax),
    /// `S004`
    ExtraContent => ("S004", Syntax),
    /// `S005`
    IllegalCharacter => ("S005", Syntax),
    /// `S006`
    InvalidScientificNotation => ("S006", Syntax),

    /// `T001`
    ArrayNotSupportedLeft => ("T001", Type),
    /// `T002`
    ArrayNotSupportedRight => ("T002", Type),
    /// `T003`
    ArrayNotSupportedUnary => ("T003", Type),
    /// `T004`
    ArrayNotSupportedFactorial => ("T004", Type),
    /// `T005`
    ScalarRequired => ("T005", Type),
    /// `T007`
    UndefinedVariable => ("T007", Type),
    /// `T009`
    ArrayToScalar => ("T009", Type),
    /// `T010`
    ScalarToArray => ("T010", Type),

    /// `F001`
    UnknownFunction => ("F001", Function),
    /// `F002`
    InvalidArgCount => ("F002", Function),
    /// `F003`
    InvalidMinArgCount => ("F003", Function),
    /// `F004`
    LogInvalidArgs => ("F004", Function),
    /// `F005`
    PercentileRange => ("F005", Function),
    /// `F006`
    CovEvenArgs => ("F006", Function),
    /// `F007`
    CovMinPairs => ("F007", Function),
    /// `F008`
    CorrEvenArgs => ("F008", Function),
    /// `F009`
    CorrMinPairs => ("F009", Function),
    /// `F010`
    DotEvenArgs => ("F010", Function),
    /// `F011`
    DistEvenArgs => ("F011", Function),
    /// `F012`
    ManhattanEvenArgs => ("F012", Function),
    /// `F014`
    VarianceMinArgs => ("F014", Function),
    /// `F015`
    VariancePopMinArgs => ("F015", Function),
    /// `F016`
    CovarianceMinArgs => ("F016", Function),
    /// `F017`
    CovariancePopMinArgs => ("F017", Function),
    /// `F019`
    LogBaseInvalid => ("F019", Function),
    /// `F020`
    LogParamInvalid => ("F020", Function),
    /// `F021`
    GeomeanPositive => ("F021", Function),

    /// `M001`
    MatrixRequired => ("M001", Matrix),
    /// `M002`
    MatrixEmpty => ("M002", Matrix),
    /// `M003`
    MatrixExpected => ("M003", Matrix),
    /// `M004`
    MatrixRowNotArray => ("M004", Matrix),
    /// `M005`
    MatrixInconsistentCols => ("M005", Matrix),
    /// `M006`
    MatrixSquareRequired => ("M006", Matrix),
    /// `M007`
    MatrixElementNotScalar => ("M007", Matrix),
    /// `M008`
    MatrixDimensionMismatch => ("M008", Matrix),
    /// `M009`
    MatrixSingular => ("M009", Matrix),
    /// `M010`
    MatrixInvalidAxis => ("M010", Matrix),
    /// `M011`
    SolveVectorFormat => ("M011", Matrix),
    /// `M012`
    SolveDimensionMismatch => ("M012", Matrix),
    /// `M014`
    CombNonNegative => ("M014", Matrix),
    /// `M015`
    PermNonNegative => ("M015", Matrix),

    /// `O001`
    UnknownOperator => ("O001", Operator),
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
