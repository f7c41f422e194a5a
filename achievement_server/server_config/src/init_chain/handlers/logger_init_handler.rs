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
use common_log::info;
use crate::init_chain::traits::{InitContext, InitHandler};

#[derive(Debug)]
pub struct LoggerInitHandler {
    config_path: Option<PathBuf>,
    next: Option<Box<dyn InitHandler>>,
}

impl LoggerInitHandler {
    /// Looks `logging.yaml` up the default way.
    pub fn new() -> LoggerInitHandler {
        LoggerInitHandler { config_path: None, next: None }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> LoggerInitHandler {
        LoggerInitHandler { config_path: Some(path.into()), next: None }
    }

    pub fn init_logger(&self) -> Result<(), String> {
        let result = match &self.config_path {
            Some(path) => common_log::init_with_yaml(path.clone()),
            None => common_log::init(),
        };
        result.map_err(|e| format!("failed to init logger: {}", e))?;
        info!("Logger initialized");
        Ok(())
    }
}

impl Default for LoggerInitHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InitHandler for LoggerInitHandler {
    fn handle<'a>(&'a self, context: &'a mut InitContext) -> Pin<Box<dyn Future<Output = Result<(), String>> + 'a>> {
        Box::pin(async move {
            self.init_logger()?;
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
