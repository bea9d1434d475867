pub mod convert;
pub mod filter;
pub mod models;
pub mod schema;
pub mod template;
