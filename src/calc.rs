//! A minimal extensible calculator.
//!
//! A `Calculator` maps operator tokens to binary functions and evaluates
//! three-token infix expressions like `"3 + 7"`. New operators can be
//! registered at any time; every instance owns its own registry.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A binary numeric operation, registered under an operator token.
pub type BinaryOp = fn(f64, f64) -> f64;

/// Why an expression failed to evaluate.
///
/// Evaluation never panics: every malformed input maps to one of these
/// explicit invalid results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The expression was not exactly `<number> <operator> <number>`.
    Malformed,
    /// An operand token did not parse as a number.
    BadOperand(String),
    /// The operator token has no registered operation.
    UnknownOperator(String),
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            CalcError::Malformed => {
                write!(f, "expected `<number> <operator> <number>`")
            }
            CalcError::BadOperand(token) => {
                write!(f, "operand `{}` is not a number", token)
            }
            CalcError::UnknownOperator(token) => {
                write!(f, "operator `{}` is not registered", token)
            }
        };
    }
}

impl std::error::Error for CalcError {}

/// An extensible two-operand calculator.
///
/// ```
/// use etude::calc::Calculator;
///
/// let mut calc = Calculator::new();
/// assert_eq!(calc.evaluate("3 + 7"), Ok(10.0));
///
/// calc.register("**", |a, b| a.powf(b));
/// assert_eq!(calc.evaluate("2 ** 3"), Ok(8.0));
/// ```
#[derive(Clone)]
pub struct Calculator {
    methods: FxHashMap<Box<str>, BinaryOp>,
}

impl Calculator {
    /// Create a calculator with `+` and `-` registered.
    pub fn new() -> Calculator {
        let mut calc = Calculator {
            methods: FxHashMap::default(),
        };
        calc.register("+", |a, b| a + b);
        calc.register("-", |a, b| a - b);
        return calc;
    }

    /// Register an operation under a token, overwriting any previous
    /// registration for the same token. There is no removal.
    pub fn register(&mut self, name: &str, op: BinaryOp) {
        self.methods.insert(name.into(), op);
    }

    /// Evaluate a three-token expression `"<number> <operator> <number>"`,
    /// with tokens separated by single spaces.
    ///
    /// Returns an explicit [`CalcError`] instead of panicking when the
    /// expression is malformed, an operand is not a number, or the operator
    /// is unregistered.
    pub fn evaluate(&self, expr: &str) -> Result<f64, CalcError> {
        let tokens: SmallVec<[&str; 4]> = expr.split(' ').collect();
        let &[lhs, op, rhs] = &tokens[..] else {
            return Err(CalcError::Malformed);
        };

        let a = parse_operand(lhs)?;
        let b = parse_operand(rhs)?;

        let method = self
            .methods
            .get(op)
            .ok_or_else(|| CalcError::UnknownOperator(op.to_string()))?;

        return Ok(method(a, b));
    }
}

impl Default for Calculator {
    fn default() -> Calculator {
        return Calculator::new();
    }
}

/// Parse an operand token as a number, explicitly and fallibly.
fn parse_operand(token: &str) -> Result<f64, CalcError> {
    return token
        .parse::<f64>()
        .map_err(|_| CalcError::BadOperand(token.to_string()));
}
