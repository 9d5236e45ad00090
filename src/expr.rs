use std::{fmt, rc::Rc};

use crate::{
    error::{Error, Result},
    node::{Allocation, Node},
};

/// A shared handle onto an expression tree node.
///
/// Cloning a handle never copies the node; it adds one to the node's share
/// count. The node, and through it every child it holds, is freed when the
/// last handle referencing it goes away.
///
/// A default-constructed handle is *unbound*: it references nothing, and
/// rendering it fails with [`Error::InvalidState`]. It can be assigned a
/// value or dropped like any other handle.
#[derive(Clone, Default)]
pub struct Expr {
    slot: Option<Rc<Allocation>>,
}

impl Expr {
    fn from_node(node: Node) -> Self {
        Expr {
            slot: Some(Rc::new(Allocation::new(node))),
        }
    }

    pub fn int(value: i64) -> Self {
        Expr::from_node(Node::Int(value))
    }

    /// Builds `(op operand)`.
    ///
    /// The operand's reference is moved into the new node, so no count is
    /// touched beyond the new node's own.
    pub fn unary<O, E>(op: O, operand: E) -> Self
    where
        O: Into<String>,
        E: Into<Expr>,
    {
        Expr::from_node(Node::Unary {
            op: op.into(),
            operand: operand.into(),
        })
    }

    /// Builds `(left op right)`.
    ///
    /// Passing clones of one handle as both operands shares a single subtree.
    pub fn binary<O, L, R>(op: O, left: L, right: R) -> Self
    where
        O: Into<String>,
        L: Into<Expr>,
        R: Into<Expr>,
    {
        Expr::from_node(Node::Binary {
            op: op.into(),
            left: left.into(),
            right: right.into(),
        })
    }

    pub fn is_bound(&self) -> bool {
        self.slot.is_some()
    }

    pub fn node(&self) -> Option<&Node> {
        self.slot.as_deref().map(|allocation| &allocation.node)
    }

    /// The number of handles sharing this handle's node, or 0 when unbound.
    pub fn share_count(&self) -> usize {
        self.slot.as_ref().map_or(0, Rc::strong_count)
    }

    /// Whether two handles reference the same node. Unbound handles never
    /// compare equal.
    pub fn ptr_eq(a: &Expr, b: &Expr) -> bool {
        match (&a.slot, &b.slot) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Makes this handle reference `other`'s node.
    ///
    /// The new reference is taken before the old one is released, so the
    /// old node may safely be the new node or one of its ancestors.
    pub fn assign(&mut self, other: &Expr) {
        if Expr::ptr_eq(self, other) {
            return;
        }
        let acquired = other.clone();
        *self = acquired;
    }

    pub fn render<W>(&self, sink: &mut W) -> Result<()>
    where
        W: fmt::Write + ?Sized,
    {
        self.node().ok_or(Error::InvalidState)?.render(sink)
    }

    pub fn text(&self) -> Result<String> {
        let mut text = String::new();
        self.render(&mut text)?;
        Ok(text)
    }

    pub(crate) fn take_slot(&mut self) -> Option<Rc<Allocation>> {
        self.slot.take()
    }
}

impl Drop for Expr {
    // Releases nodes with an explicit stack so that dropping a long chain
    // does not recurse once per level.
    fn drop(&mut self) {
        let mut pending: Vec<Rc<Allocation>> = self.slot.take().into_iter().collect();
        while let Some(shared) = pending.pop() {
            if let Ok(mut allocation) = Rc::try_unwrap(shared) {
                allocation.node.detach_children(&mut pending);
            }
        }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.text() {
            Ok(text) => write!(f, "Expr({})", text),
            Err(_) => write!(f, "Expr(<unbound>)"),
        }
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::int(value)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::int(value.into())
    }
}
