//! Error taxonomy shared by the evaluator, text I/O, and shell layers.

use thiserror::Error;

/// Everything that can go wrong while parsing or evaluating an expression,
/// or while converting text to and from [`crate::int::Int`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The expression failed the syntax validator, or a literal was malformed.
    #[error("Syntax error!")]
    SyntaxError,

    /// `/` or `%` with a zero right-hand operand.
    #[error("Division by zero!")]
    DivisionByZero,

    /// `!` applied to a negative operand.
    #[error("Input of factorial must not be negative!")]
    NegativeFactorial,

    /// `!` applied to an operand that does not fit in a single limb.
    /// The shell reports this identically to [`Error::SyntaxError`]; it is
    /// kept distinct here so callers that care can match on it.
    #[error("Syntax error!")]
    FactorialTooLarge,

    /// The shell could not open a requested input file.
    #[error("Invalid input file!")]
    BadInputFile,

    /// A non-expression line led with a letter and contained no operator.
    #[error("Invalid command \"{0}\"!")]
    UnknownCommand(String),

    /// Kept for interface parity with the original error taxonomy. Rust's
    /// global allocator aborts the process on exhaustion rather than handing
    /// fallible allocation back to safe code, so this variant is never
    /// actually constructed.
    #[error("Allocation failure!")]
    AllocationFailure,
}
