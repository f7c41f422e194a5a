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

use serde_json::Value;
use validator::ValidationError;

const MAX_TAGS: usize = 20;
const MAX_TAG_LEN: usize = 50;

pub struct Validator {}

impl Validator {
    pub fn validate_not_blank(value: &str, field: &'static str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new(field).with_message(format!("{} should not be blank", field).into()));
        }
        Ok(())
    }

    /// `details` must be a JSON object when present.
    pub fn validate_details(details: &Option<Value>) -> Result<(), ValidationError> {
        match details {
            Some(Value::Object(_)) | None => Ok(()),
            Some(_) => Err(ValidationError::new("details").with_message("details should be an object".into())),
        }
    }

    pub fn validate_tags(tags: &Option<Vec<String>>) -> Result<(), ValidationError> {
        let Some(tags) = tags else {
            return Ok(());
        };
        if tags.len() > MAX_TAGS {
            return Err(ValidationError::new("tags").with_message(format!("at most {} tags are allowed", MAX_TAGS).into()));
        }
        if tags.iter().any(|t| t.trim().is_empty() || t.len() > MAX_TAG_LEN) {
            return Err(ValidationError::new("tags")
                .with_message(format!("tags should be non-empty and at most {} characters", MAX_TAG_LEN).into()));
        }
        Ok(())
    }

    pub fn validate_points(points: &Option<i32>) -> Result<(), ValidationError> {
        match points {
            Some(p) if *p < 0 => Err(ValidationError::new("points").with_message("points should not be negative".into())),
            _ => Ok(()),
        }
    }
}
