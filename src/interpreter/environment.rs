use std::{collections::HashMap, rc::Rc};

use crate::interpreter::{lexer::Lexeme, value::Value};

/// Maps variable names to their current values.
///
/// Names are case-sensitive. Declaring a name that already exists overwrites
/// it; reading a missing name is the caller's error to report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a variable, returning the previous value.
    pub fn define(&mut self, name: &str, value: Value) -> Option<Value> {
        self.variables.insert(name.to_string(), value)
    }

    /// Looks up a variable by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Builds the environment a function body runs in.
    ///
    /// The result is a flat copy of `self` with every parameter bound to the
    /// argument at the same position. Changes made through the copy never
    /// reach `self`.
    ///
    /// `params` and `arguments` must have the same length; extra entries on
    /// either side are ignored.
    ///
    /// # Example
    /// ```
    /// use deutschcode::interpreter::{environment::Environment, value::Value};
    ///
    /// let mut caller = Environment::new();
    /// caller.define("a", Value::Number(1.0));
    /// caller.define("b", Value::Number(2.0));
    ///
    /// let callee = caller.bind_parameters(&["a".to_string()], vec![Value::Number(5.0)]);
    ///
    /// assert_eq!(callee.get("a"), Some(&Value::Number(5.0)));
    /// assert_eq!(callee.get("b"), Some(&Value::Number(2.0)));
    /// assert_eq!(caller.get("a"), Some(&Value::Number(1.0)));
    /// ```
    #[must_use]
    pub fn bind_parameters(&self, params: &[String], arguments: Vec<Value>) -> Self {
        let mut snapshot = self.clone();
        for (param, argument) in params.iter().zip(arguments) {
            snapshot.define(param, argument);
        }
        snapshot
    }

    /// Number of defined variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates over all variables in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.variables.iter()
    }
}

/// A user-defined function, created by a `funktion` statement.
///
/// The body is stored as tokens, not as a tree: calling the function runs
/// the interpreter over `body` again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDef {
    /// The function's name.
    pub name:   String,
    /// Parameter names in declaration order. Duplicates are not rejected.
    pub params: Vec<String>,
    /// Tokens between the parameter list and the matching `ende`, followed
    /// by a single `Eof` so the body is a complete token sequence.
    pub body:   Vec<Lexeme>,
    /// Line of the `funktion` keyword.
    pub line:   usize,
}

/// Maps function names to their definitions.
///
/// Definitions are shared behind `Rc` so a call-time snapshot of the
/// registry does not copy bodies.
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistry {
    functions: HashMap<String, Rc<FunctionDef>>,
}

impl FunctionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition under its name, replacing any earlier one.
    pub fn define(&mut self, def: FunctionDef) -> Option<Rc<FunctionDef>> {
        self.functions.insert(def.name.clone(), Rc::new(def))
    }

    /// Looks up a definition by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Rc<FunctionDef>> {
        self.functions.get(name).cloned()
    }

    /// Whether a function with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }
}
