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
use std::path::PathBuf;
use std::pin::Pin;
use common_log::{error, info};
use config_manager::types::context::CONFIG;
#[allow(unused_imports)]
use env_config_parse::find_file;
use crate::init_chain::traits::{InitContext, InitHandler};

const CONFIG_FILE_NAME: &str = "server_config.yaml";

/// Loads `server_config.yaml` into the global singleton and the context.
#[derive(Debug)]
pub struct ConfigInitHandler {
    config_path: Option<PathBuf>,
    next: Option<Box<dyn InitHandler>>,
}

impl ConfigInitHandler {
    pub fn new() -> ConfigInitHandler {
        ConfigInitHandler { config_path: None, next: None }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> ConfigInitHandler {
        ConfigInitHandler { config_path: Some(path.into()), next: None }
    }

    /// `SERVER_CONFIG_PATH` wins over the packaged or searched location.
    fn resolve_path(&self) -> PathBuf {
        if let Some(path) = &self.config_path {
            return path.clone();
        }
        if let Ok(path) = std::env::var("SERVER_CONFIG_PATH") {
            return PathBuf::from(path);
        }
        #[cfg(feature = "rpm_build")]
        {
            PathBuf::from(format!("/etc/achievement_server/{}", CONFIG_FILE_NAME))
        }
        #[cfg(not(feature = "rpm_build"))]
        {
            find_file(CONFIG_FILE_NAME).unwrap_or_else(|_| PathBuf::from(CONFIG_FILE_NAME))
        }
    }
}

impl Default for ConfigInitHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InitHandler for ConfigInitHandler {
    fn handle<'a>(&'a self, context: &'a mut InitContext) -> Pin<Box<dyn Future<Output = Result<(), String>> + 'a>> {
        Box::pin(async move {
            let path = self.resolve_path();
            info!("Loading server config from {}", path.display());
            CONFIG.initialize(&path).map_err(|e| {
                error!("Failed to load {}: {}", path.display(), e);
                e
            })?;
            context.config = Some(CONFIG.get_instance()?.clone());
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
