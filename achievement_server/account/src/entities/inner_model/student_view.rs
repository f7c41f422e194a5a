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
use crate::entities::db_model::{student_db_model, user_db_model};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentView {
    pub id: String,
    pub user_id: String,
    pub student_id: String,
    pub program_study: String,
    pub academic_year: String,
    pub advisor_id: Option<String>,
    pub created_at: i64,
    pub full_name: String,
    pub email: String,
}

impl StudentView {
    /// `user` is `None` only when the owning account row is missing; names are left empty then.
    pub fn from_models(student: student_db_model::Model, user: Option<&user_db_model::Model>) -> Self {
        Self {
            id: student.id,
            user_id: student.user_id,
            student_id: student.student_id,
            program_study: student.program_study,
            academic_year: student.academic_year,
            advisor_id: student.advisor_id,
            created_at: student.created_at,
            full_name: user.map(|u| u.full_name.clone()).unwrap_or_default(),
            email: user.map(|u| u.email.clone()).unwrap_or_default(),
        }
    }
}
