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

//! Database Configuration Module
//! Handles environment variables and connection settings

use std::env;
use log::{info, error};
use crate::DbError;

const DEFAULT_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Database configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DbConfig {
    /// Database type ("mysql" or "postgres")
    pub db_type: String,
    /// Database connection URL
    pub url: String,
    /// Maximum number of connections in the pool
    pub max_connections: u32,
    /// Connection timeout (seconds)
    pub timeout: u64,
}

impl DbConfig {
    /// Loads database configuration from environment variables.
    ///
    /// `DB_TYPE` selects the backend ("mysql" or "postgres") and therefore which of
    /// `MYSQL_DATABASE_URL` / `POSTGRESQL_DATABASE_URL` is required.
    /// `DATABASE_MAX_CONNECTIONS` and `DATABASE_TIMEOUT` are optional and default to
    /// 20 connections and 30 seconds when unset or unparsable.
    ///
    /// # Errors
    ///
    /// * `DbError::MissingDatabaseType` - If `DB_TYPE` is not set.
    /// * `DbError::InvalidDatabaseType` - If `DB_TYPE` is unsupported.
    /// * `DbError::MissingDatabaseUrl` - If the URL variable for the backend is not set.
    pub fn from_env() -> Result<Self, DbError> {
        info!("get db config from env");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`DbConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DbError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_type = lookup("DB_TYPE").ok_or(DbError::MissingDatabaseType)?.to_lowercase();
        let url_key = match db_type.as_str() {
            "mysql" => {
                info!("db type is mysql");
                "MYSQL_DATABASE_URL"
            },
            "postgres" => {
                info!("db type is postgresql");
                "POSTGRESQL_DATABASE_URL"
            },
            _ => {
                error!("db type is not support: {}", db_type);
                return Err(DbError::InvalidDatabaseType(db_type));
            },
        };
        let url = lookup(url_key).filter(|u| !u.trim().is_empty()).ok_or(DbError::MissingDatabaseUrl)?;

        let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        let timeout = lookup("DATABASE_TIMEOUT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self { db_type, url, max_connections, timeout })
    }
}
