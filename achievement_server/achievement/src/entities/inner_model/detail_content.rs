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

use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::entities::db_model::detail_db_model;
use crate::error::achievement_error::AchievementError;

/// One uploaded file recorded on a detail document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub file_url: String,
    pub file_type: String,
    pub uploaded_at: i64,
}

/// Content of a detail document about to be created.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDetail {
    pub reference_id: String,
    pub student_id: String,
    pub achievement_type: String,
    pub title: String,
    pub description: String,
    pub details: Value,
    pub tags: Vec<String>,
    pub points: i32,
}

/// Partial content update; `None` leaves the stored field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailPatch {
    pub achievement_type: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub details: Option<Value>,
    pub tags: Option<Vec<String>>,
    pub points: Option<i32>,
}

/// Typed view of a stored detail document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AchievementDetail {
    pub id: String,
    pub reference_id: String,
    pub student_id: String,
    pub achievement_type: String,
    pub title: String,
    pub description: String,
    pub details: Value,
    pub tags: Vec<String>,
    pub points: i32,
    pub attachments: Vec<Attachment>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl TryFrom<detail_db_model::Model> for AchievementDetail {
    type Error = AchievementError;

    fn try_from(model: detail_db_model::Model) -> Result<Self, Self::Error> {
        let tags: Vec<String> = serde_json::from_value(model.tags).map_err(|e| {
            AchievementError::InternalConsistency(format!("malformed tags in detail {}: {}", model.id, e))
        })?;
        let attachments: Vec<Attachment> = serde_json::from_value(model.attachments).map_err(|e| {
            AchievementError::InternalConsistency(format!("malformed attachments in detail {}: {}", model.id, e))
        })?;
        Ok(Self {
            id: model.id,
            reference_id: model.reference_id,
            student_id: model.student_id,
            achievement_type: model.achievement_type,
            title: model.title,
            description: model.description,
            details: model.details,
            tags,
            points: model.points,
            attachments,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

/// Trims tags, drops empty ones and removes duplicates keeping the first occurrence.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty() && seen.insert(t.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_tags_keeps_first_occurrence_order() {
        let tags = vec![" robotics".to_string(), "national".into(), "robotics".into(), "".into(), "ai".into()];
        assert_eq!(normalize_tags(tags), vec!["robotics", "national", "ai"]);
    }

    #[test]
    fn test_malformed_document_is_a_consistency_error() {
        let model = detail_db_model::Model {
            id: "d1".into(),
            reference_id: "r1".into(),
            student_id: "s1".into(),
            achievement_type: "competition".into(),
            title: "X".into(),
            description: String::new(),
            details: json!({}),
            tags: json!("not-a-list"),
            points: 0,
            attachments: json!([]),
            created_at: 0,
            updated_at: 0,
        };
        assert!(matches!(AchievementDetail::try_from(model), Err(AchievementError::InternalConsistency(_))));
    }
}
