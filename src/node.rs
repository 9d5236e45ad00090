//! Expression tree nodes.
//!
//! A [`Node`] is one of a closed set of shapes. Nodes are never mutated once
//! built; the only thing that changes over a node's life is how many
//! [`Expr`] handles share it.

use std::{cell::Cell, fmt, rc::Rc};

use crate::{error::Result, expr::Expr};

thread_local! {
    static LIVE_NODES: Cell<usize> = Cell::new(0);
}

/// The number of nodes currently allocated on this thread.
///
/// Every node is created and freed through an [`Expr`], so after all handles
/// built during some stretch of work are gone this returns to the value it
/// had before.
pub fn live_nodes() -> usize {
    LIVE_NODES.with(Cell::get)
}

#[derive(Debug)]
pub enum Node {
    /// An integer literal
    Int(i64),
    /// A prefix operator applied to one operand
    Unary { op: String, operand: Expr },
    /// An infix operator between two operands
    Binary { op: String, left: Expr, right: Expr },
}

impl Node {
    /// Writes this node's text to `sink`.
    ///
    /// Children are rendered through their handles. Literals print as
    /// numerals, unary nodes as `(op operand)` with no space, and binary
    /// nodes as `(left op right)`.
    pub fn render<W>(&self, sink: &mut W) -> Result<()>
    where
        W: fmt::Write + ?Sized,
    {
        match self {
            Node::Int(value) => write!(sink, "{}", value)?,
            Node::Unary { op, operand } => {
                write!(sink, "({}", op)?;
                operand.render(sink)?;
                sink.write_char(')')?;
            }
            Node::Binary { op, left, right } => {
                sink.write_char('(')?;
                left.render(sink)?;
                write!(sink, " {} ", op)?;
                right.render(sink)?;
                sink.write_char(')')?;
            }
        }
        Ok(())
    }

    pub fn op(&self) -> Option<&str> {
        match self {
            Node::Int(_) => None,
            Node::Unary { op, .. } | Node::Binary { op, .. } => Some(op.as_str()),
        }
    }

    pub fn children(&self) -> impl Iterator<Item = &Expr> {
        let (first, second) = match self {
            Node::Int(_) => (None, None),
            Node::Unary { operand, .. } => (Some(operand), None),
            Node::Binary { left, right, .. } => (Some(left), Some(right)),
        };
        first.into_iter().chain(second)
    }

    /// Unbinds this node's child handles, moving their references into
    /// `pending` so the caller can release them without recursing.
    pub(crate) fn detach_children(&mut self, pending: &mut Vec<Rc<Allocation>>) {
        match self {
            Node::Int(_) => {}
            Node::Unary { operand, .. } => pending.extend(operand.take_slot()),
            Node::Binary { left, right, .. } => {
                pending.extend(left.take_slot());
                pending.extend(right.take_slot());
            }
        }
    }
}

/// The heap cell a handle points at.
///
/// Creating one and dropping one are the only places the live-node census
/// changes.
#[derive(Debug)]
pub(crate) struct Allocation {
    pub(crate) node: Node,
}

impl Allocation {
    pub(crate) fn new(node: Node) -> Self {
        LIVE_NODES.with(|live| live.set(live.get() + 1));
        lifecycle_log!("Allocated node, live: ", live_nodes());
        Allocation { node }
    }
}

impl Drop for Allocation {
    fn drop(&mut self) {
        LIVE_NODES.with(|live| live.set(live.get() - 1));
        lifecycle_log!("Released node, live: ", live_nodes());
    }
}
