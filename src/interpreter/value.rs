use crate::error::RuntimeError;

/// Represents a runtime value in the interpreter.
///
/// Arithmetic only ever produces numbers. Text values come from string
/// literals and can only be printed.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point). Integer literals
    /// are widened to this type.
    Number(f64),
    /// A piece of text from a string literal.
    Text(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl Value {
    /// A short name of the value's type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "text",
        }
    }

    /// Returns the numeric value, or a type error naming `line` for text.
    ///
    /// # Example
    /// ```
    /// use deutschcode::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(2.5).as_number(1), Ok(2.5));
    /// assert!(Value::from("zwei").as_number(1).is_err());
    /// ```
    pub fn as_number(&self, line: usize) -> Result<f64, RuntimeError> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(_) => Err(RuntimeError::TypeError { details: format!("expected a number, found {}",
                                                                            self.type_name()),
                                                           line }),
        }
    }
}

/// Numbers use the shortest decimal form that round-trips, so whole numbers
/// print without a fractional part (`14`, not `14.0`).
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(t) => write!(f, "{t}"),
        }
    }
}
