use crate::{
    error::{ExprResult, ExpressionError},
    interpreter::lexer::Token,
};

/// The symbol of the synthetic grouping operator.
///
/// A grouping node stands in for an already-built parenthesized sub-tree.
/// It exists only inside the tree; the lexer never produces it as an
/// operator token.
pub const GROUPING_SYMBOL: &str = "()";

/// Represents the precedence level of a tree node.
///
/// Levels are totally ordered, lowest-binding first. `Operand` is the rank
/// of numbers and of grouping nodes: it sits above every real operator so
/// that an incoming operator always splices in above an operand instead of
/// descending into it, and a resolved grouping is never torn apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Addition-level operators: `+`, `-` and their composites.
    Additive,
    /// Multiplication-level operators: `*`, `/` and their composites.
    Multiplicative,
    /// Exponentiation: `**` and its composite.
    Exponent,
    /// Numbers and grouping nodes; outranks every operator.
    Operand,
}

/// A supported operator: a symbol paired with its precedence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
    /// The operator symbol exactly as the lexer scans it.
    pub symbol:     &'static str,
    /// The precedence level used during tree insertion.
    pub precedence: Precedence,
}

/// The fixed set of supported operators, symbol-unique and immutable.
///
/// Composite symbols ending in `-` encode a negated right operand; the
/// evaluator applies the same primitive as the plain symbol but negates
/// the right-hand side first.
pub const SUPPORTED_OPERATORS: &[Operator] = &[
    Operator { symbol:     GROUPING_SYMBOL,
               precedence: Precedence::Operand, },
    Operator { symbol:     "+",
               precedence: Precedence::Additive, },
    Operator { symbol:     "-",
               precedence: Precedence::Additive, },
    Operator { symbol:     "+-",
               precedence: Precedence::Additive, },
    Operator { symbol:     "--",
               precedence: Precedence::Additive, },
    Operator { symbol:     "*",
               precedence: Precedence::Multiplicative, },
    Operator { symbol:     "/",
               precedence: Precedence::Multiplicative, },
    Operator { symbol:     "*-",
               precedence: Precedence::Multiplicative, },
    Operator { symbol:     "/-",
               precedence: Precedence::Multiplicative, },
    Operator { symbol:     "**",
               precedence: Precedence::Exponent, },
    Operator { symbol:     "**-",
               precedence: Precedence::Exponent, },
];

/// Looks an operator up by its symbol.
///
/// The table is fixed, so repeated lookups for the same symbol always
/// return the same entry.
///
/// # Parameters
/// - `symbol`: The operator symbol to find.
///
/// # Returns
/// - `Some(&Operator)`: The table entry if the symbol is supported.
/// - `None`: If the symbol is unknown.
///
/// # Example
/// ```
/// use treemath::interpreter::operator::{self, Precedence};
///
/// assert_eq!(operator::lookup("**").unwrap().precedence,
///            Precedence::Exponent);
/// assert!(operator::lookup("%").is_none());
/// ```
#[must_use]
pub fn lookup(symbol: &str) -> Option<&'static Operator> {
    SUPPORTED_OPERATORS.iter().find(|op| op.symbol == symbol)
}

/// Returns the precedence rank of a token for insertion comparisons.
///
/// Numbers rank as `Operand`. Operator tokens are looked up in the table;
/// this is the single point where a malformed operator string is detected.
///
/// # Parameters
/// - `token`: The token whose rank is needed.
///
/// # Returns
/// - `Ok(Precedence)`: The rank to compare during insertion.
/// - `Err(ExpressionError::InvalidOperator)`: If the symbol has no table
///   entry.
///
/// # Example
/// ```
/// use treemath::interpreter::{
///     lexer::Token,
///     operator::{precedence_of, Precedence},
/// };
///
/// let token = Token::Number(7.0);
/// assert_eq!(precedence_of(&token).unwrap(), Precedence::Operand);
///
/// let bad = Token::Operator("%".to_string());
/// assert!(precedence_of(&bad).is_err());
/// ```
pub fn precedence_of(token: &Token) -> ExprResult<Precedence> {
    match token {
        Token::Number(_) | Token::SubExpression(_) => Ok(Precedence::Operand),
        Token::Operator(symbol) => {
            lookup(symbol).map(|op| op.precedence)
                          .ok_or_else(|| ExpressionError::InvalidOperator { symbol: symbol.clone(), })
        },
    }
}
