use crate::interpreter::{evaluator::core::EvalResult, value::core::Value};

/// Applies a one-argument `f64` method to a numeric argument.
///
/// The generated functions expect exactly one argument, already checked by
/// the registry. Non-numeric arguments produce a `Cast` error.
///
/// # Example
/// ```
/// use ascent::interpreter::{evaluator::function::builtin::sin, value::core::Value};
///
/// let x = Value::Number(std::f64::consts::PI / 2.0);
/// assert_eq!(sin(&[x]).unwrap(), Value::Number(1.0));
/// ```
macro_rules! unary_builtin {
    ($fname:ident, $method:ident) => {
        pub fn $fname(args: &[Value]) -> EvalResult<Value> {
            Ok(Value::Number(number(args, 0)?.$method()))
        }
    };
}

unary_builtin!(sin, sin);
unary_builtin!(cos, cos);
unary_builtin!(tan, tan);
unary_builtin!(sqrt, sqrt);
unary_builtin!(abs, abs);
unary_builtin!(exp, exp);
unary_builtin!(int, trunc);

/// Reads argument `index` as a number.
fn number(args: &[Value], index: usize) -> EvalResult<f64> {
    args.get(index).map_or(Ok(0.0), Value::as_number)
}

/// The fractional part `x - floor(x)`, always in `[0, 1)`.
///
/// # Example
/// ```
/// use ascent::interpreter::{evaluator::function::builtin::frac, value::core::Value};
///
/// assert_eq!(frac(&[Value::Number(-1.25)]).unwrap(), Value::Number(0.75));
/// ```
pub fn frac(args: &[Value]) -> EvalResult<Value> {
    let x = number(args, 0)?;
    Ok(Value::Number(x - x.floor()))
}

/// `-1`, `0` or `1` according to the sign of the argument.
pub fn sign(args: &[Value]) -> EvalResult<Value> {
    let x = number(args, 0)?;
    let sign = if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    };
    Ok(Value::Number(sign))
}

pub fn pow(args: &[Value]) -> EvalResult<Value> {
    Ok(Value::Number(number(args, 0)?.powf(number(args, 1)?)))
}

/// `clamp(x, min, max)`. When `min > max`, `min` wins.
pub fn clamp(args: &[Value]) -> EvalResult<Value> {
    let (x, min, max) = (number(args, 0)?, number(args, 1)?, number(args, 2)?);
    Ok(Value::Number(min.max(max.min(x))))
}

/// `lerp(a, b, t) = a + t * (b - a)`, unclamped.
pub fn lerp(args: &[Value]) -> EvalResult<Value> {
    let (a, b, t) = (number(args, 0)?, number(args, 1)?, number(args, 2)?);
    Ok(Value::Number(t.mul_add(b - a, a)))
}

/// One coordinate of a cubic Bézier curve: `bezier(p0, p1, p2, p3, t)`.
///
/// # Example
/// ```
/// use ascent::interpreter::{evaluator::function::builtin::bezier, value::core::Value};
///
/// let points = [0.0, 1.0, 1.0, 0.0, 0.5].map(Value::Number);
/// assert_eq!(bezier(&points).unwrap(), Value::Number(0.75));
/// ```
pub fn bezier(args: &[Value]) -> EvalResult<Value> {
    let t = number(args, 4)?;
    let u = 1.0 - t;
    let weights = [u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t];

    let mut sum = 0.0;
    for (index, weight) in weights.iter().enumerate() {
        sum += weight * number(args, index)?;
    }
    Ok(Value::Number(sum))
}

/// Logs `DEBUG` followed by the arguments joined by `", "` and returns `0`.
pub fn debug(args: &[Value]) -> EvalResult<Value> {
    let joined = args.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
    tracing::info!(target: "ascent::debug", "DEBUG {joined}");
    Ok(Value::Number(0.0))
}
