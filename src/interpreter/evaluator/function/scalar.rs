use crate::{
    error::RuntimeError,
    interpreter::evaluator::{
        core::EvalResult,
        function::core::{Arity, FunctionRegistry, ScalarFn, ScalarFunction},
    },
    util::{
        num::count_to_f64,
        stats::{self, require_integer},
    },
};

/// Defines scalar builtins by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name (also the name shown in error messages),
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table walked at registration),
/// - `SCALAR_FUNCTIONS` (public list of builtin names, aliases excluded).
macro_rules! scalar_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  ScalarFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const SCALAR_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

scalar_functions! {
    "sin"        => { arity: Arity::Exact(1), func: |a| Ok(a[0].sin()) },
    "cos"        => { arity: Arity::Exact(1), func: |a| Ok(a[0].cos()) },
    "tan"        => { arity: Arity::Exact(1), func: |a| Ok(a[0].tan()) },
    "asin"       => { arity: Arity::Exact(1), func: |a| Ok(a[0].asin()) },
    "acos"       => { arity: Arity::Exact(1), func: |a| Ok(a[0].acos()) },
    "atan"       => { arity: Arity::Exact(1), func: |a| Ok(a[0].atan()) },
    "sinh"       => { arity: Arity::Exact(1), func: |a| Ok(a[0].sinh()) },
    "cosh"       => { arity: Arity::Exact(1), func: |a| Ok(a[0].cosh()) },
    "tanh"       => { arity: Arity::Exact(1), func: |a| Ok(a[0].tanh()) },
    "exp"        => { arity: Arity::Exact(1), func: |a| Ok(a[0].exp()) },
    "ln"         => { arity: Arity::Exact(1), func: ln },
    "log10"      => { arity: Arity::Exact(1), func: log10 },
    "sqrt"       => { arity: Arity::Exact(1), func: sqrt },
    "cbrt"       => { arity: Arity::Exact(1), func: |a| Ok(a[0].cbrt()) },
    "abs"        => { arity: Arity::Exact(1), func: |a| Ok(a[0].abs()) },
    "ceil"       => { arity: Arity::Exact(1), func: |a| Ok(a[0].ceil()) },
    "floor"      => { arity: Arity::Exact(1), func: |a| Ok(a[0].floor()) },
    "round"      => { arity: Arity::Exact(1), func: |a| Ok(round_half_up(a[0])) },
    "signum"     => { arity: Arity::Exact(1), func: |a| Ok(signum(a[0])) },
    "degrees"    => { arity: Arity::Exact(1), func: |a| Ok(a[0].to_degrees()) },
    "radians"    => { arity: Arity::Exact(1), func: |a| Ok(a[0].to_radians()) },
    "pow"        => { arity: Arity::Exact(2), func: |a| Ok(a[0].powf(a[1])) },
    "hypot"      => { arity: Arity::Exact(2), func: |a| Ok(a[0].hypot(a[1])) },
    "atan2"      => { arity: Arity::Exact(2), func: |a| Ok(a[0].atan2(a[1])) },
    "max"        => { arity: Arity::AtLeast(2), func: |a| Ok(a.iter().copied().fold(a[0], f64::max)) },
    "min"        => { arity: Arity::AtLeast(2), func: |a| Ok(a.iter().copied().fold(a[0], f64::min)) },
    "gcd"        => { arity: Arity::AtLeast(2), func: |a| fold_integers(a, "gcd", stats::gcd) },
    "lcm"        => { arity: Arity::AtLeast(2), func: |a| fold_integers(a, "lcm", stats::lcm) },
    "sum"        => { arity: Arity::AtLeast(1), func: |a| Ok(a.iter().sum()) },
    "avg"        => { arity: Arity::AtLeast(1), func: |a| Ok(a.iter().sum::<f64>() / count_to_f64(a.len())) },
    "prod"       => { arity: Arity::AtLeast(1), func: |a| Ok(a.iter().product()) },
    "count"      => { arity: Arity::AtLeast(1), func: |a| Ok(count_to_f64(a.len())) },
    "median"     => { arity: Arity::AtLeast(1), func: |a| Ok(stats::median(a)) },
    "range"      => { arity: Arity::AtLeast(1), func: range },
    "sumabs"     => { arity: Arity::AtLeast(1), func: |a| Ok(a.iter().map(|x| x.abs()).sum()) },
    "norm2"      => { arity: Arity::AtLeast(1), func: |a| Ok(sum_of_squares(a).sqrt()) },
    "rms"        => { arity: Arity::AtLeast(1), func: |a| Ok((sum_of_squares(a) / count_to_f64(a.len())).sqrt()) },
    "geomean"    => { arity: Arity::AtLeast(1), func: geomean },
    "var"        => { arity: Arity::Any, func: |a| stats::variance(a, true) },
    "std"        => { arity: Arity::Any, func: |a| stats::variance(a, true).map(f64::sqrt) },
    "varp"       => { arity: Arity::Any, func: |a| stats::variance(a, false) },
    "stdp"       => { arity: Arity::Any, func: |a| stats::variance(a, false).map(f64::sqrt) },
    "percentile" => { arity: Arity::AtLeast(2), func: |a| stats::percentile(a[0], &a[1..]) },
    "cov"        => { arity: Arity::AtLeast(2), func: cov },
    "covp"       => { arity: Arity::AtLeast(2), func: covp },
    "corr"       => { arity: Arity::AtLeast(2), func: corr },
    "dot"        => { arity: Arity::AtLeast(2), func: dot },
    "dist"       => { arity: Arity::AtLeast(2), func: dist },
    "manhattan"  => { arity: Arity::AtLeast(2), func: manhattan },
    "log"        => { arity: Arity::Any, func: log },
    "C"          => { arity: Arity::Exact(2), func: combinations },
    "P"          => { arity: Arity::Exact(2), func: permutations },
}

/// Alternative names, as `(alias, target)`.
pub const SCALAR_ALIASES: &[(&str, &str)] = &[("mean", "avg"),
                                              ("product", "prod"),
                                              ("norm1", "sumabs"),
                                              ("sign", "signum"),
                                              ("variance", "var"),
                                              ("stddev", "std"),
                                              ("variancep", "varp"),
                                              ("stddevp", "stdp"),
                                              ("pctl", "percentile"),
                                              ("covariance", "cov"),
                                              ("covariancep", "covp"),
                                              ("correlation", "corr"),
                                              ("dotprod", "dot"),
                                              ("distance", "dist"),
                                              ("euclidean", "dist"),
                                              ("taxicab", "manhattan"),
                                              ("comb", "c"),
                                              ("perm", "p")];

/// Adds every scalar builtin and alias to `registry`.
pub(crate) fn register_builtins(registry: &mut FunctionRegistry) {
    for def in BUILTIN_TABLE {
        registry.register_scalar(ScalarFunction::new(def.name, def.arity, def.func));
    }
    for (alias, target) in SCALAR_ALIASES {
        registry.alias(alias, target);
    }
}

fn ln(args: &[f64]) -> EvalResult<f64> {
    if args[0] <= 0.0 {
        return Err(RuntimeError::ParamMustBePositive { function: "ln".to_string() });
    }
    Ok(args[0].ln())
}

fn log10(args: &[f64]) -> EvalResult<f64> {
    if args[0] <= 0.0 {
        return Err(RuntimeError::ParamMustBePositive { function: "log10".to_string() });
    }
    Ok(args[0].log10())
}

fn sqrt(args: &[f64]) -> EvalResult<f64> {
    if args[0] < 0.0 {
        return Err(RuntimeError::SqrtNegative);
    }
    Ok(args[0].sqrt())
}

/// Computes a logarithm.
///
/// - `log(x)` is the base-10 logarithm.
/// - `log(base, x)` is `ln(x) / ln(base)`.
///
/// # Errors
/// - `LogParamInvalid` if `x <= 0`.
/// - `LogBaseInvalid` if `base <= 0` or `base == 1`.
/// - `LogInvalidArgs` for any other argument count.
#[allow(clippy::float_cmp)]
fn log(args: &[f64]) -> EvalResult<f64> {
    match *args {
        [x] => {
            if x <= 0.0 {
                return Err(RuntimeError::LogParamInvalid);
            }
            Ok(x.log10())
        },
        [base, x] => {
            if base <= 0.0 || base == 1.0 {
                return Err(RuntimeError::LogBaseInvalid);
            }
            if x <= 0.0 {
                return Err(RuntimeError::LogParamInvalid);
            }
            Ok(x.ln() / base.ln())
        },
        _ => Err(RuntimeError::LogInvalidArgs { got: args.len() }),
    }
}

/// Rounds to the nearest integer, halves toward positive infinity.
///
/// `round(2.5)` is `3` and `round(-2.5)` is `-2`. The fraction is compared
/// directly since `x + 0.5` can itself round up, as for
/// `0.49999999999999994`.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Sign of `x`: `-1`, `0` or `1`. Zero and `NaN` are returned unchanged.
fn signum(x: f64) -> f64 {
    if x == 0.0 || x.is_nan() { x } else { x.signum() }
}

fn range(args: &[f64]) -> EvalResult<f64> {
    let (min, max) = args.iter()
                         .fold((args[0], args[0]), |(lo, hi), &x| (lo.min(x), hi.max(x)));
    Ok(max - min)
}

fn sum_of_squares(args: &[f64]) -> f64 {
    args.iter().map(|x| x * x).sum()
}

fn geomean(args: &[f64]) -> EvalResult<f64> {
    if args.iter().any(|&x| x <= 0.0) {
        return Err(RuntimeError::GeomeanPositive);
    }
    let product: f64 = args.iter().product();
    Ok(product.powf(1.0 / count_to_f64(args.len())))
}

/// Folds `gcd` or `lcm` over integer arguments.
#[allow(clippy::cast_precision_loss)]
fn fold_integers(args: &[f64], function: &str, op: fn(i64, i64) -> i64) -> EvalResult<f64> {
    let mut acc = require_integer(args[0], function)?;
    for &x in &args[1..] {
        acc = op(acc, require_integer(x, function)?);
    }
    Ok(acc as f64)
}

/// Splits an even-length argument list into its first and second halves.
///
/// The halves are the X and Y samples of the paired statistics and vector
/// functions.
fn split_pairs(args: &[f64], odd: RuntimeError) -> EvalResult<(&[f64], &[f64])> {
    if args.len() % 2 != 0 {
        return Err(odd);
    }
    Ok(args.split_at(args.len() / 2))
}

fn cov(args: &[f64]) -> EvalResult<f64> {
    let (x, y) = split_pairs(args, RuntimeError::CovEvenArgs)?;
    if x.len() < 2 {
        return Err(RuntimeError::CovMinPairs { pairs: 2 });
    }
    stats::covariance(x, y, true)
}

fn covp(args: &[f64]) -> EvalResult<f64> {
    let (x, y) = split_pairs(args, RuntimeError::CovEvenArgs)?;
    if x.is_empty() {
        return Err(RuntimeError::CovMinPairs { pairs: 1 });
    }
    stats::covariance(x, y, false)
}

fn corr(args: &[f64]) -> EvalResult<f64> {
    let (x, y) = split_pairs(args, RuntimeError::CorrEvenArgs)?;
    stats::correlation(x, y)
}

fn dot(args: &[f64]) -> EvalResult<f64> {
    let (x, y) = split_pairs(args, RuntimeError::DotEvenArgs)?;
    Ok(x.iter().zip(y).map(|(a, b)| a * b).sum())
}

fn dist(args: &[f64]) -> EvalResult<f64> {
    let (x, y) = split_pairs(args, RuntimeError::DistEvenArgs)?;
    Ok(x.iter()
        .zip(y)
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt())
}

fn manhattan(args: &[f64]) -> EvalResult<f64> {
    let (x, y) = split_pairs(args, RuntimeError::ManhattanEvenArgs)?;
    Ok(x.iter().zip(y).map(|(a, b)| (a - b).abs()).sum())
}

/// Number of `k`-element subsets of an `n`-element set.
///
/// Uses the symmetric `k = min(k, n - k)` and a running product that stays
/// integral after every division. The product only grows, so the loop stops
/// once it overflows to infinity.
fn combinations(args: &[f64]) -> EvalResult<f64> {
    require_integer(args[0], "C")?;
    require_integer(args[1], "C")?;
    let (n, k) = (args[0], args[1]);
    if n < 0.0 || k < 0.0 {
        return Err(RuntimeError::CombNonNegative);
    }
    if k > n {
        return Ok(0.0);
    }

    let k = k.min(n - k);
    let mut result: f64 = 1.0;
    let mut i = 1.0;
    while i <= k && result.is_finite() {
        result = result * (n - k + i) / i;
        i += 1.0;
    }
    Ok(result)
}

/// Number of ordered `k`-element arrangements from `n` elements.
///
/// Stops multiplying once the product overflows to infinity.
fn permutations(args: &[f64]) -> EvalResult<f64> {
    require_integer(args[0], "P")?;
    require_integer(args[1], "P")?;
    let (n, k) = (args[0], args[1]);
    if n < 0.0 || k < 0.0 {
        return Err(RuntimeError::PermNonNegative);
    }
    if k > n {
        return Ok(0.0);
    }

    let mut result: f64 = 1.0;
    let mut i = 0.0;
    while i < k && result.is_finite() {
        result *= n - i;
        i += 1.0;
    }
    Ok(result)
}
