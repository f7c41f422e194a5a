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
use validator::{Validate, ValidationError};
use crate::entities::request_body::validator::Validator;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateUserReqBody {
    #[validate(length(min = 3, max = 50), custom(function = "Validator::validate_not_blank"))]
    pub username: String,

    #[validate(email, length(max = 100))]
    pub email: String,

    #[validate(length(min = 6, max = 128))]
    pub password: String,

    #[validate(length(min = 1, max = 100), custom(function = "Validator::validate_not_blank"))]
    pub full_name: String,

    /// "Admin" | "Mahasiswa" | "Dosen Wali"
    #[serde(rename = "roleName")]
    #[validate(custom(function = "Validator::validate_role_name"))]
    pub role_name: String,
}

impl CreateUserReqBody {
    /// Trim surrounding whitespace from every text field before validation.
    pub fn trimmed(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
            full_name: self.full_name.trim().to_string(),
            role_name: self.role_name.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
#[validate(schema(function = "validate_user_update_body"))]
pub struct UpdateUserReqBody {
    #[validate(length(min = 3, max = 50))]
    pub username: Option<String>,

    #[validate(email, length(max = 100))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub full_name: Option<String>,

    pub is_active: Option<bool>,
}

fn validate_user_update_body(body: &UpdateUserReqBody) -> Result<(), ValidationError> {
    if body.username.is_none() && body.email.is_none() && body.full_name.is_none() && body.is_active.is_none() {
        return Err(ValidationError::new("there is no field need to be updated"));
    }
    Ok(())
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct AssignRoleReqBody {
    #[serde(rename = "roleName")]
    #[validate(custom(function = "Validator::validate_role_name"))]
    pub role_name: String,
}
