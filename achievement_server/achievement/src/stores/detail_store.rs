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

use async_trait::async_trait;
use crate::entities::db_model::detail_db_model;
use crate::entities::inner_model::detail_content::{Attachment, DetailPatch, NewDetail};
use crate::error::achievement_error::AchievementError;

/// Free-form achievement content, one document per reference.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DetailStore: Send + Sync {
    /// Stores a new document with no attachments and returns its generated id.
    async fn create(&self, content: NewDetail) -> Result<String, AchievementError>;

    async fn find_by_id(&self, detail_id: &str) -> Result<Option<detail_db_model::Model>, AchievementError>;

    /// Merges the supplied fields and stamps `updated_at`.
    async fn update(&self, detail_id: &str, patch: DetailPatch) -> Result<(), AchievementError>;

    async fn append_attachment(&self, detail_id: &str, attachment: Attachment) -> Result<(), AchievementError>;

    /// Only used to undo a creation whose reference row could not be written.
    async fn delete(&self, detail_id: &str) -> Result<(), AchievementError>;

    /// All documents, or only those of `student_ids` when given.
    async fn scan(&self, student_ids: Option<Vec<String>>) -> Result<Vec<detail_db_model::Model>, AchievementError>;
}
