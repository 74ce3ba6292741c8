use crate::{
    error::{ExprResult, ExpressionError},
    interpreter::{
        lexer::Token,
        operator::GROUPING_SYMBOL,
        tree::{ExprTree, NodeId},
    },
};

/// Stateless arithmetic primitives for the five supported operations.
///
/// The primitives hold no state and need no lifecycle; the evaluator
/// dispatches to them as plain functions.
///
/// # Responsibilities
/// - Implements add, subtract, multiply, divide, and exponentiate over
///   `f64` with native IEEE-754 semantics.
pub mod arith;

/// Reduces a finished tree to its single numeric value.
///
/// Evaluation is destructive: operator tokens are overwritten with number
/// tokens as sub-results collapse, so a tree cannot be solved twice
/// without rebuilding it. Malformed trees are reduced as far as possible;
/// only the final root check reports a failure.
///
/// # Parameters
/// - `tree`: The tree to reduce; mutated in place.
///
/// # Returns
/// The value the root holds after reduction.
///
/// # Errors
/// - `ExpressionError::InvalidOperator` if a node's operator symbol has no
///   arithmetic dispatch.
/// - `ExpressionError::NoResult` if the tree is empty or its root does not
///   reduce to a number.
///
/// # Example
/// ```
/// use treemath::interpreter::{evaluator, tree::ExprTree};
///
/// let mut tree = ExprTree::parse("10-3-2").unwrap();
/// assert_eq!(evaluator::solve(&mut tree).unwrap(), 5.0);
/// ```
pub fn solve(tree: &mut ExprTree) -> ExprResult<f64> {
    let Some(root) = tree.root else {
        return Err(ExpressionError::NoResult);
    };

    eval_node(tree, root)?;

    match tree.nodes[root.0].token {
        Token::Number(value) => Ok(value),
        _ => Err(ExpressionError::NoResult),
    }
}

/// Reduces the subtree under `id` in post-order.
///
/// Number nodes are already reduced. For everything else both children
/// are reduced first, then:
/// - a grouping node collapses into whichever single child exists (left
///   preferred), taking over that child's token and dropping both links;
/// - a real operator node with two number children dispatches to the
///   arithmetic primitives and becomes a number node.
///
/// A node left with fewer than two resolved children is left untouched;
/// the root check in [`solve`] decides whether that is a failure.
fn eval_node(tree: &mut ExprTree, id: NodeId) -> ExprResult<()> {
    let symbol = match &tree.nodes[id.0].token {
        Token::Number(_) | Token::SubExpression(_) => return Ok(()),
        Token::Operator(symbol) => symbol.clone(),
    };

    let left = tree.nodes[id.0].left;
    let right = tree.nodes[id.0].right;

    if let Some(child) = left {
        eval_node(tree, child)?;
    }
    if let Some(child) = right {
        eval_node(tree, child)?;
    }

    if symbol == GROUPING_SYMBOL {
        if let Some(child) = left.or(right) {
            let token = tree.nodes[child.0].token.clone();
            let node = &mut tree.nodes[id.0];
            node.token = token;
            node.left = None;
            node.right = None;
        }
        return Ok(());
    }

    if let (Some(l), Some(r)) = (left, right) {
        if let (Token::Number(a), Token::Number(b)) =
            (&tree.nodes[l.0].token, &tree.nodes[r.0].token)
        {
            let value = eval_binary(&symbol, *a, *b)?;
            tree.nodes[id.0].token = Token::Number(value);
        }
    }

    Ok(())
}

/// Dispatches one binary operation to the arithmetic primitives.
///
/// Composite symbols ending in `-` apply the plain symbol's primitive to
/// the negation of the right operand; this is how negative operands are
/// expressed in a language without a unary minus.
///
/// # Errors
/// `ExpressionError::InvalidOperator` for a symbol with no dispatch entry.
fn eval_binary(symbol: &str, left: f64, right: f64) -> ExprResult<f64> {
    match symbol {
        "+" => Ok(arith::add(left, right)),
        "-" => Ok(arith::subtract(left, right)),
        "*" => Ok(arith::multiply(left, right)),
        "/" => Ok(arith::divide(left, right)),
        "**" => Ok(arith::exponentiate(left, right)),

        "+-" => Ok(arith::add(left, -right)),
        "--" => Ok(arith::subtract(left, -right)),
        "*-" => Ok(arith::multiply(left, -right)),
        "/-" => Ok(arith::divide(left, -right)),
        "**-" => Ok(arith::exponentiate(left, -right)),

        _ => Err(ExpressionError::InvalidOperator { symbol: symbol.to_string(), }),
    }
}
