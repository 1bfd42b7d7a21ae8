//! Tests for hand-built and parsed expression trees.

use matrica::{
    ast::{Node, NodeKind, Slot, Tree, Variable},
    config::Settings,
    error::SemanticError,
    interpreter::{evaluator::core::Context, parser::core::parse, value::core::Value},
    matrix::Matrix,
};

fn context(variables: &[Option<Matrix<f32>>]) -> Context<'_> {
    Context { variables,
              answer: None,
              settings: Settings::default() }
}

fn slot_a() -> Vec<Option<Matrix<f32>>> {
    let mut variables = vec![None; Slot::COUNT];
    variables[0] = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    variables
}

#[test]
fn dump_is_indented_pre_order() {
    let tree = parse("tr A*2+1").unwrap();
    assert_eq!(tree.to_string(), "+\n  *\n    tr\n      A\n    2\n  1\n");
}

#[test]
fn dump_of_an_empty_tree_is_empty() {
    assert_eq!(Tree::new().to_string(), "");
}

#[test]
fn hand_built_tree_evaluates() {
    let mut tree = Tree::new();
    let a = tree.push(Node::leaf(NodeKind::Variable(Variable::Slot(Slot::from_letter('A')
                                                                       .unwrap()))));
    let trace = tree.push(Node::unary(NodeKind::Trace, a));
    let two = tree.push(Node::leaf(NodeKind::Number(2.0)));
    tree.push(Node::binary(NodeKind::Multiply, trace, two));

    let variables = slot_a();
    assert_eq!(context(&variables).eval(&tree), Ok(Value::Scalar(10.0)));
    assert_eq!(tree.len(), 4);
}

#[test]
fn empty_tree_is_malformed() {
    assert_eq!(context(&[]).eval(&Tree::new()), Err(SemanticError::MalformedTree));
}

#[test]
fn operator_without_children_is_malformed() {
    let mut tree = Tree::new();
    tree.push(Node::leaf(NodeKind::Plus));
    assert_eq!(context(&[]).eval(&tree), Err(SemanticError::MalformedTree));

    let mut tree = Tree::new();
    tree.push(Node::leaf(NodeKind::Inverse));
    assert_eq!(context(&[]).eval(&tree), Err(SemanticError::MalformedTree));
}

#[test]
fn children_must_fit_the_kind() {
    let mut tree = Tree::new();
    let one = tree.push(Node::leaf(NodeKind::Number(1.0)));
    tree.push(Node::unary(NodeKind::Plus, one));
    assert_eq!(context(&[]).eval(&tree), Err(SemanticError::MalformedTree));

    let mut tree = Tree::new();
    let one = tree.push(Node::leaf(NodeKind::Number(1.0)));
    let two = tree.push(Node::leaf(NodeKind::Number(2.0)));
    tree.push(Node::binary(NodeKind::Trace, one, two));
    assert_eq!(context(&[]).eval(&tree), Err(SemanticError::MalformedTree));
}

#[test]
fn foreign_ids_are_malformed() {
    let other = parse("1+2*3").unwrap();
    let foreign = other.root().unwrap();

    let mut tree = Tree::new();
    let root = tree.push(Node::unary(NodeKind::Trace, foreign));

    assert!(tree.node(foreign).is_none());
    assert!(tree.children(root).is_none());
    assert_eq!(context(&[]).eval(&tree), Err(SemanticError::MalformedTree));
    assert_eq!(tree.to_string(), "<malformed>\n");
}

#[test]
fn self_referencing_node_is_malformed() {
    let other = parse("1").unwrap();
    let first = other.root().unwrap();

    // The only node of `tree` gets id 0, the same as `first`.
    let mut tree = Tree::new();
    tree.push(Node::unary(NodeKind::Transpose, first));

    assert_eq!(context(&[]).eval(&tree), Err(SemanticError::MalformedTree));
    assert_eq!(tree.to_string(), "<malformed>\n");
}

#[test]
fn operator_kinds_outside_their_family_are_malformed() {
    let context = context(&[]);
    let one = Value::Scalar(1.0);
    let m = Value::Matrix(Matrix::identity(2));

    assert_eq!(context.eval_binary(NodeKind::Trace, &one, &one),
               Err(SemanticError::MalformedTree));
    assert_eq!(context.eval_unary(NodeKind::Plus, &m), Err(SemanticError::MalformedTree));
}
