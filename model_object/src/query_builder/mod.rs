//! Statement builder
//!
//! Table definitions, the comparison vocabulary and the statements the model layer compiles
//! search descriptors into. Rendering to parameterized PostgreSQL text lives in
//! `sql_generation`; backends either render or interpret a [`Statement`].

pub mod filter;
pub mod ordering;
pub mod sql_generation;
pub mod statement;
pub mod table;


pub use filter::{Condition, FilterOperator};
pub use ordering::SortOrder;
pub use sql_generation::SqlGenerator;
pub use statement::{Query, Statement, StatementKind};
pub use table::Table;
