//! Search descriptors
//!
//! A lookup is either an identifier (shorthand for `id equals <identifier>`) or a declarative
//! descriptor of filters, order terms and a limit. [`compiler`] turns one into a statement.

pub mod compiler;
pub mod descriptor;

pub use compiler::compile;
pub use descriptor::{Filter, Lookup, Search};
