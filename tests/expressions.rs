use treemath::{
    error::ExpressionError,
    interpreter::{
        evaluator,
        operator::{self, Precedence},
        tree::ExprTree,
    },
    solve_expression,
};

fn assert_solves(expression: &str, expected: f64) {
    match solve_expression(expression) {
        Ok(value) => {
            assert_eq!(value, expected,
                       "'{expression}' evaluated to {value}, expected {expected}");
        },
        Err(e) => panic!("'{expression}' failed: {e}"),
    }
}

fn assert_invalid_operator(expression: &str) {
    match solve_expression(expression) {
        Ok(value) => panic!("'{expression}' evaluated to {value} but was expected to fail"),
        Err(e) => {
            assert!(matches!(e, ExpressionError::InvalidOperator { .. }),
                    "'{expression}' failed with the wrong error: {e}");
        },
    }
}

#[test]
fn single_number() {
    assert_solves("5", 5.0);
    assert_solves("42", 42.0);
}

#[test]
fn basic_arithmetic() {
    assert_solves("1+2", 3.0);
    assert_solves("8-5", 3.0);
    assert_solves("7*9", 63.0);
    assert_solves("10/2", 5.0);
    assert_solves("2**10", 1024.0);
}

#[test]
fn operator_precedence() {
    assert_solves("3**2+6*2-12", 9.0);
    assert_solves("2+3*4", 14.0);
    assert_solves("2**3*4", 32.0);
}

#[test]
fn power_binds_tighter_than_multiplication() {
    assert_solves("2*3**2", 18.0);
}

#[test]
fn equal_precedence_is_left_associative() {
    assert_solves("10-3-2", 5.0);
    assert_solves("100/5/2", 10.0);
    assert_solves("1+2+3+4", 10.0);
    assert_solves("6/2*3", 9.0);
}

#[test]
fn grouping_collapses_before_the_outer_operator() {
    assert_solves("(2+3)*4", 20.0);
    assert_solves("2*(3+4)", 14.0);
    assert_solves("(5)", 5.0);
}

#[test]
fn composite_operators_negate_the_right_operand() {
    assert_solves("5+-3", 2.0);
    assert_solves("3*-2", -6.0);
    assert_solves("3--5", 8.0);
    assert_solves("8/-2", -4.0);
    assert_solves("2**-2", 0.25);
}

#[test]
fn unknown_operator_is_an_error() {
    assert_invalid_operator("3%2");
    assert_invalid_operator("3^2");
}

#[test]
fn whitespace_is_not_part_of_the_alphabet() {
    assert_invalid_operator("3 + 4");
}

#[test]
fn nested_parentheses_truncate_at_the_first_close() {
    // The sub-expression scan stops at the first ')', so the outer close
    // is orphaned and scanned as an operator run.
    assert_invalid_operator("((1+2)*3)");
}

#[test]
fn unterminated_parenthesis_runs_to_end_of_string() {
    // Without a ')' the sub-expression scan runs to the end of the string,
    // and the unconditional strip of the token's first and last characters
    // then eats the final character of the inner text.
    assert_solves("(2+34", 5.0);
    assert_eq!(solve_expression("(2+3"), Err(ExpressionError::NoResult));
}

#[test]
fn incomplete_expressions_yield_no_result() {
    assert_eq!(solve_expression(""), Err(ExpressionError::NoResult));
    assert_eq!(solve_expression("3+"), Err(ExpressionError::NoResult));
    assert_eq!(solve_expression("-5"), Err(ExpressionError::NoResult));
    assert_eq!(solve_expression("()"), Err(ExpressionError::NoResult));
}

#[test]
fn division_by_zero_follows_float_semantics() {
    assert!(solve_expression("5/0").unwrap().is_infinite());
    assert!(solve_expression("0/0").unwrap().is_nan());
}

#[test]
fn operator_table_is_immutable_and_unique() {
    let first = operator::lookup("**").expect("missing operator");
    let second = operator::lookup("**").expect("missing operator");
    assert_eq!(first.precedence, second.precedence);
    assert_eq!(first.precedence, Precedence::Exponent);

    for (i, a) in operator::SUPPORTED_OPERATORS.iter().enumerate() {
        for b in &operator::SUPPORTED_OPERATORS[i + 1..] {
            assert_ne!(a.symbol, b.symbol, "duplicate operator table entry");
        }
    }
}

#[test]
fn trees_render_back_to_infix() {
    let tree = ExprTree::parse("(2+3)*4").expect("parse failed");
    assert_eq!(tree.to_string(), "(2+3)*4");

    let tree = ExprTree::parse("3**2+6*2-12").expect("parse failed");
    assert_eq!(tree.to_string(), "3**2+6*2-12");
}

#[test]
fn evaluation_is_destructive() {
    let mut tree = ExprTree::parse("(2+3)").expect("parse failed");
    assert_eq!(evaluator::solve(&mut tree).unwrap(), 5.0);
    // The grouping root collapsed into the resolved number.
    assert_eq!(tree.to_string(), "5");
}
