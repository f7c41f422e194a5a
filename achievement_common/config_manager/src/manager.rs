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

use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

/// Semantic checks run after a configuration file has been parsed.
pub trait ValidateConfig {
    /// Returns a description of the first invalid value, if any.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// A thread-safe singleton configuration manager that loads and provides access to configuration data.
///
/// # Type Parameters
///
/// * `T` - The configuration type; it must be deserializable and validatable.
pub struct ConfigSingleton<T: for<'a> Deserialize<'a> + ValidateConfig + Send + Sync + 'static> {
    instance: OnceLock<T>,
}

impl<T: for<'a> Deserialize<'a> + ValidateConfig + Send + Sync + 'static> ConfigSingleton<T> {
    /// Creates a new, uninitialized `ConfigSingleton` instance.
    pub const fn new() -> Self {
        ConfigSingleton {
            instance: OnceLock::new(),
        }
    }

    /// Loads, parses and validates the YAML file at `path`.
    ///
    /// Calling this on an initialized singleton is a no-op returning `Ok(())`.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// * The file cannot be read
    /// * The YAML content cannot be parsed into the target type `T`
    /// * `T::validate` rejects the parsed values
    pub fn initialize<P: AsRef<Path>>(&self, path: P) -> Result<(), String> {
        if self.instance.get().is_some() {
            return Ok(());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;
        self.initialize_from_str(&contents)
    }

    /// Same as [`ConfigSingleton::initialize`] for YAML already in memory.
    pub fn initialize_from_str(&self, contents: &str) -> Result<(), String> {
        if self.instance.get().is_some() {
            return Ok(());
        }
        let config = parse_config::<T>(contents)?;
        let _ = self.instance.set(config);
        Ok(())
    }

    /// Retrieves a reference to the initialized configuration instance.
    ///
    /// # Errors
    ///
    /// Returns an error if `initialize` has not been called successfully before calling this method.
    pub fn get_instance(&self) -> Result<&T, String> {
        self.instance.get().ok_or_else(|| "Configuration not initialized".to_string())
    }
}

/// Parse and validate a configuration document without touching any singleton.
pub fn parse_config<T: for<'a> Deserialize<'a> + ValidateConfig>(contents: &str) -> Result<T, String> {
    let config: T = serde_yaml::from_str(contents).map_err(|e| format!("Failed to parse YAML: {}", e))?;
    config.validate().map_err(|e| format!("Invalid configuration: {}", e))?;
    Ok(config)
}
