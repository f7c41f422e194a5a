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
use crate::error::achievement_error::AchievementError;

/// Student and lecturer lookups needed to scope a principal.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    /// `students.id` of the student account `user_id`, if any.
    async fn student_id_by_user(&self, user_id: &str) -> Result<Option<String>, AchievementError>;

    /// `lecturers.id` of the lecturer account `user_id`, if any.
    async fn lecturer_id_by_user(&self, user_id: &str) -> Result<Option<String>, AchievementError>;

    async fn advisee_ids(&self, lecturer_id: &str) -> Result<Vec<String>, AchievementError>;
}
