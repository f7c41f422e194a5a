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

use std::path::PathBuf;
use async_trait::async_trait;
use log::{error, info};
use uuid::Uuid;
use crate::error::achievement_error::AchievementError;

const MAX_NAME_LEN: usize = 100;

/// Where uploaded attachment bytes end up.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Persists `bytes` and returns the URL recorded on the attachment.
    async fn store(&self, bytes: &[u8], suggested_name: &str) -> Result<String, AchievementError>;
}

/// Writes files under a local directory as `<uuid>_<sanitized name>`.
pub struct LocalFileStorage {
    root: PathBuf,
    public_prefix: String,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>, public_prefix: &str) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.trim_end_matches('/').to_string(),
        }
    }

    /// Keeps the final path component and replaces anything outside `[A-Za-z0-9._-]`.
    pub fn sanitize_name(suggested_name: &str) -> String {
        let base = suggested_name.rsplit(['/', '\\']).next().unwrap_or_default();
        let cleaned: String = base
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
            .collect();
        let cleaned = cleaned.trim_start_matches('.');
        if cleaned.is_empty() {
            return "file".to_string();
        }
        cleaned.chars().rev().take(MAX_NAME_LEN).collect::<Vec<_>>().into_iter().rev().collect()
    }
}

#[async_trait]
impl ObjectStorage for LocalFileStorage {
    async fn store(&self, bytes: &[u8], suggested_name: &str) -> Result<String, AchievementError> {
        let file_name = format!("{}_{}", Uuid::new_v4(), Self::sanitize_name(suggested_name));
        tokio::fs::create_dir_all(&self.root).await?;
        let path = self.root.join(&file_name);
        tokio::fs::write(&path, bytes).await.map_err(|e| {
            error!("Failed to write attachment {}: {}", path.display(), e);
            AchievementError::from(e)
        })?;
        info!("stored attachment {} ({} bytes)", file_name, bytes.len());
        Ok(format!("{}/{}", self.public_prefix, file_name))
    }
}
