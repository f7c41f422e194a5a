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

/// Configuration management module for loading and accessing application configuration.
///
/// A thread-safe singleton loads a YAML file once, validates it and hands out shared
/// references afterwards.
///
/// # Example
///
/// ```no_run
/// use serde::Deserialize;
///
/// use config_manager::{ConfigSingleton, ValidateConfig};
///
/// #[derive(Deserialize)]
/// struct AppConfig {
///     app_name: String,
///     #[serde(default)]
///     port: u16,
/// }
///
/// impl ValidateConfig for AppConfig {}
///
/// static CONFIG: ConfigSingleton<AppConfig> = ConfigSingleton::new();
/// CONFIG.initialize("config.yaml").expect("Failed to load config");
///
/// let app_config = CONFIG.get_instance().expect("Config not initialized");
/// println!("App running: {} on port {}", app_config.app_name, app_config.port);
/// ```
pub mod manager;
pub mod types;

pub use manager::{ConfigSingleton, ValidateConfig};
