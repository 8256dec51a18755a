//! prodapi-adapter-postgres - PostgreSQL 适配器

mod connection;
mod migration;
mod product_repository;

pub use connection::*;
pub use migration::*;
pub use product_repository::*;
