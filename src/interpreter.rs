/// The lexer module tokenizes source code for the interpreter.
///
/// The lexer reads the raw source text and produces the complete token
/// sequence, each token paired with its line, before anything runs.
///
/// # Responsibilities
/// - Recognizes keywords, identifiers, digit runs, string literals and
///   punctuation.
/// - Reports characters that start no token and unterminated strings.
pub mod lexer;
/// A forward-only read position over the token sequence.
///
/// Statement handlers and the expression evaluator consume tokens through
/// the cursor, which also produces syntax errors for missing tokens.
pub mod cursor;
/// Variable environments and the function registry.
///
/// # Responsibilities
/// - Stores variables by name and builds the copied environment a function
///   body runs in.
/// - Stores user-defined functions with their captured body tokens.
pub mod environment;
/// The evaluator module executes statements directly from tokens.
///
/// There is no syntax tree: the evaluator dispatches on the token that
/// starts each statement, evaluates expressions as it reads them and runs
/// function bodies by interpreting their stored tokens.
///
/// # Responsibilities
/// - Runs declarations, prints, function definitions and calls.
/// - Evaluates arithmetic with the usual precedence.
/// - Reports unknown names, arity mismatches and arithmetic failures.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
pub mod value;
