//! swiftdb-rs: workspace facade over [`swiftdb_core`].
//!
//! Re-exports everything so demos and downstream users can depend on a
//! single crate.

pub use swiftdb_core::*;
