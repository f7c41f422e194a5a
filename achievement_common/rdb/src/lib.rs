//! Database connection management module
//! Builds MySQL and PostgreSQL connection pools and bootstraps the schema

pub mod config;
pub mod error;
pub mod rdb_many_types {
    pub mod postgresql;
    pub mod mysql;
}
pub mod connection;

pub use config::DbConfig;
pub use error::DbError;
pub use connection::create_connection;
pub use connection::execute_sql_file;
