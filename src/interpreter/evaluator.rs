/// Core evaluation logic and context management.
///
/// Contains the runtime context, the statement loop and statement dispatch.
pub mod core;

/// Statement handlers for declarations and printing.
pub mod statement;

/// Function definition and call handling.
///
/// Captures function bodies, checks arity and runs bodies in a copied
/// environment.
pub mod function;

/// Expression evaluation by precedence climbing.
pub mod expression;

/// Binary operator evaluation logic.
///
/// Applies arithmetic operators to values and enforces the arithmetic error
/// policy (division by zero, non-finite results).
pub mod binary;
