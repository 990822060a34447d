//! HTML rendering pipeline: select, linearize, assemble.
//!
//! A priority list of identifiers is resolved against a [`crate::ParsedResult`]
//! by the [`selector`], expanded depth-first into `(level, node)` pairs by
//! [`linearize`], and turned into headers and paragraphs by [`html`].

pub mod html;
pub mod linearize;
pub mod selector;

pub use html::{render, render_list, NO_RESULTS, SIGNATURE};
pub use linearize::{linearize, Linearize};
pub use selector::{Field, Selector};
