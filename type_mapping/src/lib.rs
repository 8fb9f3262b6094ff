//! Value mapping between JSON records and PostgreSQL
//! This crate provides the binding and decoding rules the modelhaus PostgreSQL backend uses

pub mod bind;
pub mod decode;
pub mod types;

pub use bind::bind_value;
pub use decode::row_to_json;
pub use types::PostgresValue;
