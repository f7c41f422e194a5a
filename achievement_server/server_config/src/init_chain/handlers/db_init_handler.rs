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

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use common_log::{error, info};
use rdb::{create_connection, execute_sql_file, DbConfig};
use crate::init_chain::traits::{InitContext, InitHandler};

/// Opens the connection pool and, when configured, applies the schema script.
///
/// Must run after [`crate::ConfigInitHandler`].
#[derive(Debug)]
pub struct DbInitHandler {
    db_config: Option<DbConfig>,
    next: Option<Box<dyn InitHandler>>,
}

impl DbInitHandler {
    /// Reads the database settings from the environment when the chain runs.
    pub fn new() -> DbInitHandler {
        DbInitHandler { db_config: None, next: None }
    }

    pub fn with_config(db_config: DbConfig) -> DbInitHandler {
        DbInitHandler { db_config: Some(db_config), next: None }
    }

    async fn connect(&self, context: &mut InitContext) -> Result<(), String> {
        let db_config = match &self.db_config {
            Some(config) => config.clone(),
            None => DbConfig::from_env().map_err(|e| e.to_string())?,
        };
        let common = context.config()?.achievement_common.clone();
        let db = create_connection(&db_config).await.map_err(|e| e.to_string())?;
        if common.init_schema {
            execute_sql_file(&db, &common.schema_version).await.map_err(|e| {
                error!("Schema bootstrap failed: {}", e);
                e.to_string()
            })?;
            info!("Schema {} applied", common.schema_version);
        }
        context.db = Some(Arc::new(db));
        Ok(())
    }
}

impl Default for DbInitHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InitHandler for DbInitHandler {
    fn handle<'a>(&'a self, context: &'a mut InitContext) -> Pin<Box<dyn Future<Output = Result<(), String>> + 'a>> {
        Box::pin(async move {
            self.connect(context).await?;
            if let Some(next) = &self.next {
                next.handle(context).await
            } else {
                Ok(())
            }
        })
    }

    fn set_next(&mut self, next: Box<dyn InitHandler>) {
        self.next = Some(next);
    }
}
