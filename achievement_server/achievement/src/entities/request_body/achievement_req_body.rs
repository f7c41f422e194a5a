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
use validator::{Validate, ValidationError};
use crate::entities::inner_model::detail_content::{normalize_tags, DetailPatch, NewDetail};
use crate::entities::request_body::validator::Validator;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[validate(schema(function = "validate_create_body"))]
pub struct CreateAchievementReqBody {
    /// e.g. `competition`, `publication`, `organization`
    #[validate(length(min = 1, max = 64))]
    pub achievement_type: String,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(length(max = 5000))]
    pub description: Option<String>,

    /// Open object; type specific keys such as `level` or `rank`
    pub details: Option<Value>,

    pub tags: Option<Vec<String>>,

    pub points: Option<i32>,
}

fn validate_create_body(body: &CreateAchievementReqBody) -> Result<(), ValidationError> {
    Validator::validate_not_blank(&body.achievement_type, "achievement_type")?;
    Validator::validate_not_blank(&body.title, "title")?;
    Validator::validate_details(&body.details)?;
    Validator::validate_tags(&body.tags)?;
    Validator::validate_points(&body.points)?;
    Ok(())
}

impl CreateAchievementReqBody {
    pub fn into_new_detail(self, reference_id: &str, student_id: &str) -> NewDetail {
        NewDetail {
            reference_id: reference_id.to_string(),
            student_id: student_id.to_string(),
            achievement_type: self.achievement_type.trim().to_string(),
            title: self.title.trim().to_string(),
            description: self.description.unwrap_or_default(),
            details: self.details.unwrap_or_else(|| Value::Object(Default::default())),
            tags: normalize_tags(self.tags.unwrap_or_default()),
            points: self.points.unwrap_or(0),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[validate(schema(function = "validate_update_body"))]
pub struct UpdateAchievementReqBody {
    #[validate(length(min = 1, max = 64))]
    pub achievement_type: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[validate(length(max = 5000))]
    pub description: Option<String>,

    pub details: Option<Value>,

    pub tags: Option<Vec<String>>,

    pub points: Option<i32>,
}

fn validate_update_body(body: &UpdateAchievementReqBody) -> Result<(), ValidationError> {
    if body.achievement_type.is_none()
        && body.title.is_none()
        && body.description.is_none()
        && body.details.is_none()
        && body.tags.is_none()
        && body.points.is_none()
    {
        return Err(ValidationError::new("there is no field need to be updated"));
    }
    if let Some(achievement_type) = &body.achievement_type {
        Validator::validate_not_blank(achievement_type, "achievement_type")?;
    }
    if let Some(title) = &body.title {
        Validator::validate_not_blank(title, "title")?;
    }
    Validator::validate_details(&body.details)?;
    Validator::validate_tags(&body.tags)?;
    Validator::validate_points(&body.points)?;
    Ok(())
}

impl UpdateAchievementReqBody {
    pub fn into_patch(self) -> DetailPatch {
        DetailPatch {
            achievement_type: self.achievement_type.map(|t| t.trim().to_string()),
            title: self.title.map(|t| t.trim().to_string()),
            description: self.description,
            details: self.details,
            tags: self.tags.map(normalize_tags),
            points: self.points,
        }
    }
}
