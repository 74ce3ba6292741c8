use logos::Logos;

use crate::{
    error::{ExprResult, ExpressionError},
    interpreter::{
        lexer::Token,
        operator::{precedence_of, GROUPING_SYMBOL},
    },
};

/// Identifies a node inside the tree's arena.
///
/// Nodes are stored in a flat vector and addressed by index, so parent
/// links are plain indices instead of back-pointers. Spliced-out nodes
/// stay in the arena; only the link structure changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(pub(crate) usize);

/// A single tree node: one token plus links to its neighbours.
///
/// The parent index is maintained only so that an insertion can re-link a
/// node's old parent when a new node is spliced in above it; evaluation
/// never reads it.
#[derive(Debug)]
pub(crate) struct TreeNode {
    pub(crate) token:  Token,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left:   Option<NodeId>,
    pub(crate) right:  Option<NodeId>,
}

/// Which child slot of a node an insertion targets.
#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// A binary expression tree ordered by operator precedence.
///
/// The tree is grown one token at a time: every incoming token is compared
/// against existing nodes and either spliced in above them or attached
/// below them, so the finished shape encodes precedence and left-to-right
/// associativity directly. Parenthesized sub-expressions become synthetic
/// `()` grouping nodes whose right child is the fully built inner tree.
///
/// The tree renders back to infix notation via [`std::fmt::Display`];
/// grouping nodes print their parentheses around the inner sub-tree.
///
/// # Example
/// ```
/// use treemath::interpreter::tree::ExprTree;
///
/// let tree = ExprTree::parse("(2+3)*4").unwrap();
/// assert_eq!(tree.to_string(), "(2+3)*4");
/// ```
#[derive(Debug)]
pub struct ExprTree {
    pub(crate) nodes: Vec<TreeNode>,
    pub(crate) root:  Option<NodeId>,
}

impl ExprTree {
    /// Builds the tree for an expression string.
    ///
    /// Tokens are drawn lazily from the lexer and inserted in arrival
    /// order. Operator symbols are validated lazily too: an unknown symbol
    /// fails at its first precedence comparison, not during scanning.
    ///
    /// # Parameters
    /// - `expression`: The raw expression text.
    ///
    /// # Returns
    /// The finished tree, ready for one destructive evaluation.
    ///
    /// # Errors
    /// `ExpressionError::InvalidOperator` if an operator symbol has no
    /// entry in the operator table.
    pub fn parse(expression: &str) -> ExprResult<Self> {
        let mut tree = Self { nodes: Vec::new(),
                              root:  None, };
        tree.root = tree.build_from(expression)?;
        Ok(tree)
    }

    /// Lexes `source` and inserts every token under a fresh local root.
    ///
    /// This is the recursion point for parenthesized content: the inner
    /// text of a sub-expression is built into the same arena with its own
    /// root, which the caller then hangs under a grouping node.
    fn build_from(&mut self, source: &str) -> ExprResult<Option<NodeId>> {
        let mut root = None;
        let mut lexer = Token::lexer(source);

        while let Some(scanned) = lexer.next() {
            match scanned {
                Ok(token) => self.insert(&mut root, token)?,
                Err(()) => {
                    return Err(ExpressionError::InvalidOperator { symbol: lexer.slice()
                                                                                .to_string(), });
                },
            }
        }

        Ok(root)
    }

    /// Inserts one token into the tree rooted at `root`.
    ///
    /// A `SubExpression` token is first built into its own complete
    /// sub-tree (inner text only, enclosing characters stripped) and
    /// wrapped as the right child of a synthetic grouping node; the
    /// grouping node is then inserted like any other node. All other
    /// tokens become a bare node and go through the precedence-driven
    /// insertion directly. The first node of an empty tree becomes the
    /// root without any comparison.
    fn insert(&mut self, root: &mut Option<NodeId>, token: Token) -> ExprResult<()> {
        let new = match token {
            Token::SubExpression(raw) => {
                let sub_root = self.build_from(inner_text(&raw))?;
                let head = self.alloc(Token::Operator(GROUPING_SYMBOL.to_string()));
                self.nodes[head.0].right = sub_root;
                if let Some(sub) = sub_root {
                    self.nodes[sub.0].parent = Some(head);
                }
                head
            },
            other => self.alloc(other),
        };

        match *root {
            None => {
                *root = Some(new);
                Ok(())
            },
            Some(point) => self.insert_at(root, point, new),
        }
    }

    /// Recursively finds the place for `new` relative to `point`.
    ///
    /// When the node at `point` ranks at least as high as the incoming
    /// node, the incoming operator binds more loosely and must become an
    /// ancestor: it is spliced in above `point`, adopting the existing
    /// subtree into its first free child slot. An equal rank also splices,
    /// which is what makes same-level operator chains left-associative —
    /// the earlier operator's whole subtree becomes the left operand of
    /// the later one.
    ///
    /// When the node at `point` ranks strictly lower, the incoming
    /// operator binds more tightly and descends: it fills `point`'s first
    /// free child slot, or recurses down the right spine when both are
    /// taken.
    ///
    /// # Errors
    /// `ExpressionError::InvalidOperator` from the precedence lookup of
    /// either node's token.
    fn insert_at(&mut self, root: &mut Option<NodeId>, point: NodeId, new: NodeId) -> ExprResult<()> {
        let existing = precedence_of(&self.nodes[point.0].token)?;
        let incoming = precedence_of(&self.nodes[new.0].token)?;

        if existing >= incoming {
            match (self.nodes[new.0].left, self.nodes[new.0].right, self.nodes[point.0].right) {
                (None, _, _) => self.promote(root, point, new, Side::Left),
                (_, None, _) => self.promote(root, point, new, Side::Right),
                (_, _, Some(right)) => return self.insert_at(root, right, new),
                // Incoming node already fully occupied with nowhere left
                // to descend; lexer-produced nodes never get here.
                (_, _, None) => {
                    debug_assert!(false, "fully occupied node with nowhere to descend");
                },
            }
        } else {
            match (self.nodes[point.0].left, self.nodes[point.0].right) {
                (None, _) => self.attach(point, new, Side::Left),
                (_, None) => self.attach(point, new, Side::Right),
                (_, Some(right)) => return self.insert_at(root, right, new),
            }
        }

        Ok(())
    }

    /// Splices `new` in above `point`, in `point`'s old place.
    ///
    /// `point` moves into the given child slot of `new`. Whatever used to
    /// link to `point` — its old parent's child slot, or the root handle —
    /// is re-linked to `new`, and the parent indices of both nodes are
    /// updated to match.
    fn promote(&mut self, root: &mut Option<NodeId>, point: NodeId, new: NodeId, side: Side) {
        match side {
            Side::Left => self.nodes[new.0].left = Some(point),
            Side::Right => self.nodes[new.0].right = Some(point),
        }

        match self.nodes[point.0].parent {
            Some(parent) => {
                if self.nodes[parent.0].right == Some(point) {
                    self.nodes[parent.0].right = Some(new);
                } else {
                    self.nodes[parent.0].left = Some(new);
                }
                self.nodes[new.0].parent = Some(parent);
            },
            None => {
                *root = Some(new);
                self.nodes[new.0].parent = None;
            },
        }

        self.nodes[point.0].parent = Some(new);
    }

    /// Hangs `new` off the given child slot of `point`.
    fn attach(&mut self, point: NodeId, new: NodeId, side: Side) {
        match side {
            Side::Left => self.nodes[point.0].left = Some(new),
            Side::Right => self.nodes[point.0].right = Some(new),
        }
        self.nodes[new.0].parent = Some(point);
    }

    /// Adds a fresh unlinked node to the arena.
    fn alloc(&mut self, token: Token) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode { token,
                                   parent: None,
                                   left: None,
                                   right: None, });
        id
    }

    /// In-order rendering of the subtree under `id`.
    ///
    /// Grouping nodes contribute their parentheses and nothing else; every
    /// other node prints its left subtree, its own token, then its right
    /// subtree.
    fn fmt_from(&self, id: NodeId, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let node = &self.nodes[id.0];
        let grouping = matches!(&node.token, Token::Operator(symbol) if symbol == GROUPING_SYMBOL);

        if grouping {
            write!(f, "(")?;
        }
        if let Some(left) = node.left {
            self.fmt_from(left, f)?;
        }
        if !grouping {
            write!(f, "{}", node.token)?;
        }
        if let Some(right) = node.right {
            self.fmt_from(right, f)?;
        }
        if grouping {
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::fmt::Display for ExprTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.root {
            Some(root) => self.fmt_from(root, f),
            None => Ok(()),
        }
    }
}

/// Strips the enclosing characters from a sub-expression token.
///
/// The first and last characters are dropped unconditionally, mirroring
/// the unbalanced scan that produced the token: for a well-formed `(...)`
/// that removes the parentheses, while an unterminated sub-expression
/// loses its final character along with the `(`.
fn inner_text(raw: &str) -> &str {
    let mut chars = raw.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
