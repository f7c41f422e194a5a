/*
 * Copyright (c) Huawei Technologies Co., Ltd. 2025. All rights reserved.
 * Global Trust Authority is licensed under the Mulan PSL v2.
 * You can use this software according to the terms and conditions of the Mulan PSL v2.
 * You may obtain a copy of Mulan PSL v2 at:
 *     http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY KIND, EITHER EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR
 * PURPOSE.
 * See the Mulan PSL v2 for more details.
 */

//! Database Connection Management Module
//! Creates connection pools and runs the schema bootstrap script

use std::path::PathBuf;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement, TransactionTrait};
use log::{info, error};
#[allow(unused_imports)]
use env_config_parse::find_file;
use crate::config::DbConfig;
use crate::DbError;
use crate::rdb_many_types::{mysql, postgresql};

/// Create a database connection pool for the configured backend.
///
/// The caller owns the returned connection and hands it to every store that needs it;
/// nothing is cached process-wide.
///
/// # Example
/// ```no_run
/// use rdb::{create_connection, DbConfig};
///
/// async fn example() {
///     let config = DbConfig::from_env().unwrap();
///     let conn = create_connection(&config).await.unwrap();
///     // Use connection for database operations
/// }
/// ```
pub async fn create_connection(config: &DbConfig) -> Result<DatabaseConnection, DbError> {
    info!("Initializing database connection: type={}, max_connections={}", config.db_type, config.max_connections);
    let result = match config.db_type.as_str() {
        "mysql" => mysql::create_mysql_connection(config).await,
        "postgres" => postgresql::create_postgresql_connection(config).await,
        other => Err(DbError::InvalidDatabaseType(other.to_string())),
    };
    match &result {
        Ok(_) => info!("{} database connection pool created successfully", config.db_type),
        Err(e) => error!("Failed to create {} connection pool: {}", config.db_type, e),
    }
    result
}

/// Run every statement of the versioned schema script inside one transaction.
pub async fn execute_sql_file(db: &DatabaseConnection, db_version: &str) -> Result<(), DbError> {
    let db_backend = db.get_database_backend();
    let sql_file = match db_backend {
        DatabaseBackend::Postgres => get_sql_file("postgresql", db_version),
        DatabaseBackend::MySql => get_sql_file("mysql", db_version),
        _ => return Err(DbError::InvalidDatabaseType(format!("{:?}", db_backend))),
    };
    info!("Executing schema file {}", sql_file.display());
    let sql_content = std::fs::read_to_string(&sql_file)
        .map_err(|e| DbError::SqlFileError(sql_file.display().to_string(), e.to_string()))?;
    let statements = split_statements(&sql_content);

    let txn = db.begin().await?;
    for stmt in statements {
        let statement = Statement::from_string(db_backend, stmt.to_owned());
        if let Err(e) = txn.execute(statement).await {
            error!("Failed to execute schema statement: {}", e);
            txn.rollback().await?;
            return Err(e.into());
        }
    }
    txn.commit().await?;
    Ok(())
}

/// Split a script on `;`, dropping blank fragments and `--` comment lines.
fn split_statements(sql_content: &str) -> Vec<String> {
    sql_content
        .split(';')
        .map(|s| {
            s.lines()
                .filter(|line| !line.trim_start().starts_with("--"))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn get_sql_file(backend: &str, db_version: &str) -> PathBuf {
    let file_name = format!("{}_{}.sql", backend, db_version);
    #[cfg(feature = "rpm_build")]
    {
        return PathBuf::from(format!("/etc/achievement_server/{}", file_name));
    }
    #[cfg(not(feature = "rpm_build"))]
    {
        find_file(&file_name).unwrap_or_else(|_| PathBuf::from(format!("/etc/achievement_server/{}", file_name)))
    }
}
