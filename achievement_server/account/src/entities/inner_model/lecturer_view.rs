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
use crate::entities::db_model::{lecturer_db_model, user_db_model};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LecturerView {
    pub id: String,
    pub user_id: String,
    pub lecturer_id: String,
    pub department: String,
    pub created_at: i64,
    pub full_name: String,
    pub email: String,
}

impl LecturerView {
    pub fn from_models(lecturer: lecturer_db_model::Model, user: Option<&user_db_model::Model>) -> Self {
        Self {
            id: lecturer.id,
            user_id: lecturer.user_id,
            lecturer_id: lecturer.lecturer_id,
            department: lecturer.department,
            created_at: lecturer.created_at,
            full_name: user.map(|u| u.full_name.clone()).unwrap_or_default(),
            email: user.map(|u| u.email.clone()).unwrap_or_default(),
        }
    }
}
