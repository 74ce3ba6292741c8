use logos::Logos;

/// Represents a lexical token in an expression string.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression language.
///
/// The three patterns are total over the input: every character is either a
/// digit, a `(`, or part of an operator run, so scanning itself never
/// fails. Whitespace is not skipped; it fuses into operator runs and is
/// rejected later by the operator table.
///
/// # Example
/// ```
/// use logos::Logos;
/// use treemath::interpreter::lexer::Token;
///
/// let tokens: Vec<_> = Token::lexer("3*-2").filter_map(Result::ok).collect();
/// assert_eq!(tokens,
///            vec![Token::Number(3.0),
///                 Token::Operator("*-".to_string()),
///                 Token::Number(2.0)]);
/// ```
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens: a maximal run of decimal digits, such as
    /// `42`. Decimal points and signs are not lexical; a leading `-` is
    /// always part of the preceding operator run.
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// A parenthesized sub-expression: `(` through the first `)`
    /// inclusive. The scan is not balanced, so nested parentheses truncate
    /// at the innermost close. When no `)` follows, the token runs to the
    /// end of the string with the close silently omitted.
    #[regex(r"\([^)]*\)?", |lex| lex.slice().to_string())]
    SubExpression(String),
    /// An operator string: a maximal run of characters that are neither
    /// digits nor `(`, taken verbatim. Adjacent operator characters fuse
    /// into composites such as `+-` or `**-`; whether the run names a real
    /// operator is decided by the operator table, not here.
    #[regex(r"[^0-9(]+", |lex| lex.slice().to_string())]
    Operator(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(symbol) => write!(f, "{symbol}"),
            Self::SubExpression(raw) => write!(f, "{raw}"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
