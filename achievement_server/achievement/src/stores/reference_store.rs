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

use account::Page;
use async_trait::async_trait;
use jwt::Principal;
use crate::entities::db_model::reference_db_model;
use crate::entities::inner_model::achievement_view::ReferenceSummary;
use crate::entities::status::AchievementStatus;
use crate::error::achievement_error::AchievementError;

/// Canonical status and ownership of achievements.
///
/// Every transition is a single conditional write guarded by the required status and the
/// caller's ownership; when nothing matches, the write reports `NotFoundOrForbidden`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReferenceStore: Send + Sync {
    /// Inserts a `draft` reference already linked to its detail document.
    async fn create_draft(&self, ref_id: &str, student_id: &str, detail_ref_id: &str) -> Result<String, AchievementError>;

    async fn link_detail(&self, ref_id: &str, detail_ref_id: &str) -> Result<(), AchievementError>;

    async fn get_status(&self, ref_id: &str) -> Result<Option<AchievementStatus>, AchievementError>;

    async fn list_all(&self) -> Result<Vec<ReferenceSummary>, AchievementError>;

    async fn list_by_student(&self, user_id: &str) -> Result<Vec<ReferenceSummary>, AchievementError>;

    async fn list_by_advisor(&self, user_id: &str) -> Result<Vec<ReferenceSummary>, AchievementError>;

    async fn list_by_student_id(&self, student_id: &str, page: Page) -> Result<Vec<ReferenceSummary>, AchievementError>;

    /// The non-deleted reference if `principal` may see it.
    async fn resolve_for_read(
        &self,
        ref_id: &str,
        principal: &Principal,
    ) -> Result<reference_db_model::Model, AchievementError>;

    async fn submit(&self, ref_id: &str, student_user_id: &str) -> Result<(), AchievementError>;

    async fn soft_delete(&self, ref_id: &str, student_user_id: &str) -> Result<(), AchievementError>;

    async fn verify(&self, ref_id: &str, advisor_user_id: &str) -> Result<(), AchievementError>;

    async fn reject(&self, ref_id: &str, advisor_user_id: &str, note: &str) -> Result<(), AchievementError>;
}
