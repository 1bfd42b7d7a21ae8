use std::fmt;

/// One of the 26 named variable slots, `A` through `Z`.
///
/// # Example
/// ```
/// use matrica::ast::Slot;
///
/// let c = Slot::from_letter('C').unwrap();
/// assert_eq!(c.index(), 2);
/// assert_eq!(c.letter(), 'C');
/// assert_eq!(Slot::new(25), Slot::from_letter('Z'));
///
/// assert!(Slot::from_letter('c').is_none());
/// assert!(Slot::new(26).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot(u8);

impl Slot {
    /// Number of slots.
    pub const COUNT: usize = 26;

    /// The slot with the given index, if it is below [`Slot::COUNT`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// The slot named by an uppercase ASCII letter.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        if letter.is_ascii_uppercase() {
            Some(Self(letter as u8 - b'A'))
        } else {
            None
        }
    }

    /// Position of the slot, `0` for `A`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The letter naming the slot.
    #[must_use]
    pub const fn letter(self) -> char {
        (b'A' + self.0) as char
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A variable reference in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    /// A named slot, `A`..`Z`.
    Slot(Slot),
    /// The last-answer register, written `ans`.
    Answer,
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slot(slot) => write!(f, "{slot}"),
            Self::Answer => write!(f, "ans"),
        }
    }
}

/// Index of a node inside its [`Tree`].
///
/// Ids order by insertion, so a child always compares less than its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NodeId(usize);

/// What a node computes.
///
/// `Number` and `Variable` are leaves; `Plus` through `Power` are binary and
/// have both children; `Trace` through `Inverse` are prefix operators with
/// only a left child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeKind {
    /// A numeric literal.
    Number(f32),
    /// A variable or `ans`.
    Variable(Variable),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
    /// `tr`
    Trace,
    /// `det`
    Determinant,
    /// `rk`
    Rank,
    /// `trans`
    Transpose,
    /// `inv`
    Inverse,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Variable(v) => write!(f, "{v}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Multiply => write!(f, "*"),
            Self::Divide => write!(f, "/"),
            Self::Power => write!(f, "^"),
            Self::Trace => write!(f, "tr"),
            Self::Determinant => write!(f, "det"),
            Self::Rank => write!(f, "rk"),
            Self::Transpose => write!(f, "trans"),
            Self::Inverse => write!(f, "inv"),
        }
    }
}

/// A node of an expression tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// The operation or leaf value.
    pub kind:  NodeKind,
    /// Left operand, or the only operand of a prefix operator.
    pub left:  Option<NodeId>,
    /// Right operand of a binary operator.
    pub right: Option<NodeId>,
}

impl Node {
    /// A node without children.
    #[must_use]
    pub const fn leaf(kind: NodeKind) -> Self {
        Self { kind,
               left: None,
               right: None }
    }

    /// A prefix operator applied to `operand`.
    #[must_use]
    pub const fn unary(kind: NodeKind, operand: NodeId) -> Self {
        Self { kind,
               left: Some(operand),
               right: None }
    }

    /// A binary operator.
    #[must_use]
    pub const fn binary(kind: NodeKind, left: NodeId, right: NodeId) -> Self {
        Self { kind,
               left: Some(left),
               right: Some(right) }
    }
}

/// An expression tree stored as an arena.
///
/// Nodes refer to their children by [`NodeId`]; the tree owns every node and
/// they are all dropped together. Children are always stored before their
/// parents, so the root is the last node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    /// Creates an empty tree.
    #[must_use]
    pub const fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Appends `node` and returns its id.
    pub fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Borrows the node with the given id, or `None` if the id is out of
    /// range, as it may be for an id issued by another tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// The children of `id`, left before right.
    ///
    /// Returns `None` if `id` is out of range or a child does not precede its
    /// parent. Either means the tree was assembled from foreign ids, and
    /// walking it could read past the arena or loop forever.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Option<(Option<NodeId>, Option<NodeId>)> {
        let node = self.node(id)?;
        [node.left, node.right].into_iter()
                               .flatten()
                               .all(|child| child < id)
                               .then_some((node.left, node.right))
    }

    /// The root node, or `None` for an empty tree.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.nodes.len().checked_sub(1).map(NodeId)
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn write_subtree(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let (Some(node), Some((left, right))) = (self.node(id), self.children(id)) else {
            return writeln!(f, "{:indent$}<malformed>", "", indent = depth * 2);
        };
        writeln!(f, "{:indent$}{}", "", node.kind, indent = depth * 2)?;
        for child in [left, right].into_iter().flatten() {
            self.write_subtree(f, child, depth + 1)?;
        }
        Ok(())
    }
}

/// Pre-order dump, one node per line, children indented under their parent.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => self.write_subtree(f, root, 0),
            None => Ok(()),
        }
    }
}
