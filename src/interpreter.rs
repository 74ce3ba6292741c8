/// The evaluator module reduces a finished tree to a number.
///
/// The evaluator walks the tree in post-order, collapsing grouping nodes
/// into their resolved child and dispatching binary operator nodes to the
/// arithmetic primitives. Reduction is destructive: the tree is consumed
/// and must be rebuilt before it can be evaluated again.
///
/// # Responsibilities
/// - Reduces operator nodes whose children hold numbers.
/// - Collapses grouping nodes into their single resolved child.
/// - Reports an error for operator symbols with no arithmetic dispatch.
pub mod evaluator;
/// The lexer module tokenizes an expression string.
///
/// The lexer reads the raw expression text and produces a lazy stream of
/// tokens: digit runs become numbers, a `(` opens a sub-expression that
/// runs through the first `)`, and every other contiguous run is an
/// operator string. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Fuses adjacent operator characters into composite operator strings.
/// - Defers operator validation to the precedence lookup.
pub mod lexer;
/// The operator module defines the fixed operator table.
///
/// Each supported operator symbol carries a precedence level. The table is
/// immutable after initialization and is consulted by both the tree
/// builder (for splice comparisons) and the evaluator (for arithmetic
/// dispatch).
///
/// # Responsibilities
/// - Declares the `Operator` type and the `Precedence` ordering.
/// - Provides symbol lookup and token precedence queries.
/// - Reports the invalid-operator error for unknown symbols.
pub mod operator;
/// The tree module builds the precedence-ordered expression tree.
///
/// Tokens are inserted one at a time into a growing binary tree. Each
/// insertion compares precedences along the right spine and either splices
/// the new node in above an existing one or descends below it, so the
/// finished shape encodes precedence and left-to-right associativity
/// without an explicit grammar.
///
/// # Responsibilities
/// - Owns the node arena and the root of the tree.
/// - Implements the splice-based insertion algorithm.
/// - Recursively builds parenthesized sub-expressions under grouping
///   nodes.
pub mod tree;
