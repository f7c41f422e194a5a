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
use crate::{ConfigSingleton, ValidateConfig};

/// Main configuration structure that matches the server_config.yaml file structure.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Common configuration settings
    #[serde(default)]
    pub achievement_common: AchievementCommon,
    /// Service-specific configuration settings
    pub achievement_service: AchievementService,
}

/// Common configuration settings
#[derive(Debug, Deserialize, Clone)]
pub struct AchievementCommon {
    /// Version suffix of the schema script, e.g. `v1` for `postgresql_v1.sql`
    #[serde(default = "default_schema_version")]
    pub schema_version: String,
    /// Whether the schema script runs at startup
    #[serde(default)]
    pub init_schema: bool,
}

impl Default for AchievementCommon {
    fn default() -> Self {
        Self { schema_version: default_schema_version(), init_schema: false }
    }
}

fn default_schema_version() -> String {
    "v1".to_string()
}

/// Service-specific configuration settings
#[derive(Debug, Deserialize, Clone)]
pub struct AchievementService {
    pub token: TokenSettings,
    pub attachment: AttachmentSettings,
    pub query: QuerySettings,
    pub report: ReportSettings,
    pub password: PasswordSettings,
}

/// Credential issuing configuration
#[derive(Debug, Deserialize, Clone)]
pub struct TokenSettings {
    /// Token issuer
    pub iss: String,
    /// Access token lifetime in seconds
    pub access_exist_time: u64,
    /// Refresh token lifetime in seconds
    pub refresh_exist_time: u64,
}

/// Attachment upload configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AttachmentSettings {
    /// Directory uploaded files are written to
    pub upload_dir: String,
    /// URL prefix recorded for stored files
    pub public_url_prefix: String,
    /// Maximum decoded file size in bytes
    pub max_file_size: usize,
    /// Accepted MIME types
    pub allowed_file_types: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QuerySettings {
    pub default_limit: u64,
    pub max_limit: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportSettings {
    /// Number of entries in the top students ranking
    pub top_student_limit: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PasswordSettings {
    pub pbkdf2_iterations: usize,
}

impl ValidateConfig for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        let service = &self.achievement_service;
        if service.token.access_exist_time == 0 || service.token.refresh_exist_time == 0 {
            return Err("token lifetimes must be positive".to_string());
        }
        if service.token.refresh_exist_time < service.token.access_exist_time {
            return Err("refresh_exist_time must not be shorter than access_exist_time".to_string());
        }
        if service.attachment.max_file_size == 0 {
            return Err("attachment max_file_size must be positive".to_string());
        }
        if service.attachment.allowed_file_types.is_empty() {
            return Err("attachment allowed_file_types must not be empty".to_string());
        }
        let query = &service.query;
        if query.default_limit == 0 || query.default_limit > query.max_limit {
            return Err(format!(
                "query default_limit must be between 1 and max_limit ({}), got {}",
                query.max_limit, query.default_limit
            ));
        }
        if service.report.top_student_limit == 0 {
            return Err("report top_student_limit must be positive".to_string());
        }
        if service.password.pbkdf2_iterations < 1000 {
            return Err(format!(
                "password pbkdf2_iterations must be at least 1000, got {}",
                service.password.pbkdf2_iterations
            ));
        }
        Ok(())
    }
}

/// Global configuration singleton instance
///
/// `CONFIG.initialize(path)` loads the configuration once at startup; everything after
/// that receives the values it needs explicitly.
pub static CONFIG: ConfigSingleton<ServerConfig> = ConfigSingleton::new();
