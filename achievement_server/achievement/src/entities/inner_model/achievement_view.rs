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

use serde::Serialize;
use crate::entities::db_model::reference_db_model;
use crate::entities::inner_model::detail_content::AchievementDetail;
use crate::entities::status::AchievementStatus;

/// List row: `(id, student_id, status, created_at)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceSummary {
    pub id: String,
    pub student_id: String,
    pub status: AchievementStatus,
    pub created_at: i64,
}

impl From<reference_db_model::Model> for ReferenceSummary {
    fn from(model: reference_db_model::Model) -> Self {
        Self {
            id: model.id,
            student_id: model.student_id,
            status: model.status,
            created_at: model.created_at,
        }
    }
}

/// A reference joined with its detail document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementView {
    pub id: String,
    pub student_id: String,
    pub status: AchievementStatus,
    pub rejection_note: Option<String>,
    pub created_at: i64,
    pub submitted_at: Option<i64>,
    pub verified_at: Option<i64>,
    pub verified_by: Option<String>,
    pub rejected_at: Option<i64>,
    pub updated_at: i64,
    pub detail: AchievementDetail,
}

impl AchievementView {
    pub fn new(reference: reference_db_model::Model, detail: AchievementDetail) -> Self {
        Self {
            id: reference.id,
            student_id: reference.student_id,
            status: reference.status,
            rejection_note: reference.rejection_note,
            created_at: reference.created_at,
            submitted_at: reference.submitted_at,
            verified_at: reference.verified_at,
            verified_by: reference.verified_by,
            rejected_at: reference.rejected_at,
            updated_at: reference.updated_at,
            detail,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub status: AchievementStatus,
    pub at: i64,
}

/// Result of a status transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusChange {
    pub id: String,
    pub status: AchievementStatus,
}
