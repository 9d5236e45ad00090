//! Shared, reference-counted expression trees.
//!
//! An [`Expr`] is a cheap-to-copy handle onto an immutable [`Node`]. Copies
//! share the node; the node is freed when the last handle referencing it is
//! dropped, which in turn releases its children.

#[macro_use]
mod log;

pub mod array;
mod error;
pub mod expr;
pub mod node;
pub mod surrogate;

pub use crate::{
    array::BoundedArray,
    error::{Error, Result},
    expr::Expr,
    node::{live_nodes, Node},
    surrogate::{Aircraft, Automobile, Fleet, Truck, Vehicle, VehicleSurrogate},
};
