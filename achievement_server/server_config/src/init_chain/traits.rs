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

use config_manager::types::context::ServerConfig;
use sea_orm::DatabaseConnection;
use std::fmt::Debug;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub trait InitHandler: Debug {
    fn handle<'a>(&'a self, context: &'a mut InitContext) -> Pin<Box<dyn Future<Output = Result<(), String>> + 'a>>;
    fn set_next(&mut self, next: Box<dyn InitHandler>);
}

/// Everything startup produces for the HTTP layer.
#[derive(Debug, Default)]
pub struct InitContext {
    pub config: Option<ServerConfig>,
    pub db: Option<Arc<DatabaseConnection>>,
}

impl InitContext {
    pub fn new() -> Self {
        InitContext { config: None, db: None }
    }

    pub fn config(&self) -> Result<&ServerConfig, String> {
        self.config.as_ref().ok_or_else(|| "server config was not initialized".to_string())
    }

    pub fn db(&self) -> Result<Arc<DatabaseConnection>, String> {
        self.db.clone().ok_or_else(|| "database was not initialized".to_string())
    }
}
