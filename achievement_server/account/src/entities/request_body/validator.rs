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

use std::str::FromStr;
use jwt::Role;
use validator::ValidationError;

pub struct Validator {}

impl Validator {
    /// Reject values made only of whitespace.
    pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("value should not be blank"));
        }
        Ok(())
    }

    /// Only the stored role names are accepted.
    pub fn validate_role_name(role_name: &str) -> Result<(), ValidationError> {
        Role::from_str(role_name.trim())
            .map(|_| ())
            .map_err(|_| ValidationError::new("roleName should be one of Admin, Mahasiswa, Dosen Wali"))
    }
}
