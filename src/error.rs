/// A `Result` specialized to expression building and evaluation.
pub type ExprResult<T> = Result<T, ExpressionError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while building or evaluating an
/// expression tree.
pub enum ExpressionError {
    /// An operator symbol has no entry in the operator table.
    ///
    /// Raised lazily: the builder and the evaluator only look a symbol up
    /// the first time they need its precedence or its arithmetic dispatch,
    /// so a malformed operator deep in the input surfaces at that point.
    InvalidOperator {
        /// The operator symbol exactly as it was scanned.
        symbol: String,
    },
    /// The expression did not reduce to a single number.
    ///
    /// Covers empty input, dangling operators with a missing operand, and
    /// empty `()` groupings. The tree is reduced as far as possible before
    /// this is reported.
    NoResult,
}

impl std::fmt::Display for ExpressionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOperator { symbol } => {
                write!(f, "There is an invalid operator in your expression: '{symbol}'.")
            },

            Self::NoResult => {
                write!(f, "The expression did not reduce to a numeric result.")
            },
        }
    }
}

impl std::error::Error for ExpressionError {}
