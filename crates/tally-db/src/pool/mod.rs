//! PostgreSQL pool and schema

mod postgres;
mod schema;

pub use postgres::{create_pool, PgPool, PgPoolConfig};
pub use schema::ensure_schema;
