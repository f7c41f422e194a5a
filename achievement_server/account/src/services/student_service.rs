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

use std::collections::HashMap;
use std::sync::Arc;
use log::info;
use sea_orm::DatabaseConnection;
use validator::Validate;
use crate::entities::db_model::{student_db_model, user_db_model};
use crate::entities::inner_model::page::Page;
use crate::entities::inner_model::student_view::StudentView;
use crate::entities::request_body::student_req_body::SetAdvisorReqBody;
use crate::error::account_error::AccountError;
use crate::repositories::lecturer_repository::LecturerRepository;
use crate::repositories::student_repository::StudentRepository;
use crate::repositories::user_repository::UserRepository;

pub struct StudentService {
    db: Arc<DatabaseConnection>,
}

impl StudentService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn list(&self, page: Page) -> Result<Vec<StudentView>, AccountError> {
        let students = StudentRepository::list(&self.db, page).await?;
        with_accounts(&self.db, students).await
    }

    pub async fn get(&self, id: &str) -> Result<StudentView, AccountError> {
        let student = StudentRepository::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| AccountError::NotFound("student not found".to_string()))?;
        let user = UserRepository::find_by_id(&self.db, &student.user_id).await?;
        Ok(StudentView::from_models(student, user.as_ref()))
    }

    /// Assigns `body.advisor_id` as the student's advisor, replacing any previous one.
    pub async fn set_advisor(&self, student_id: &str, body: SetAdvisorReqBody) -> Result<(), AccountError> {
        body.validate()?;
        let advisor_id = body.advisor_id.trim();
        if LecturerRepository::find_by_id(&self.db, advisor_id).await?.is_none() {
            return Err(AccountError::NotFound("advisor not found".to_string()));
        }
        if StudentRepository::set_advisor(&self.db, student_id, advisor_id).await? == 0 {
            return Err(AccountError::NotFound("student not found".to_string()));
        }
        info!("student {} assigned to advisor {}", student_id, advisor_id);
        Ok(())
    }
}

/// Joins student rows with the name and email of their accounts.
pub(crate) async fn with_accounts(
    db: &DatabaseConnection,
    students: Vec<student_db_model::Model>,
) -> Result<Vec<StudentView>, AccountError> {
    let user_ids: Vec<String> = students.iter().map(|s| s.user_id.clone()).collect();
    let users: HashMap<String, user_db_model::Model> = UserRepository::find_by_ids(db, user_ids)
        .await?
        .into_iter()
        .map(|u| (u.id.clone(), u))
        .collect();
    Ok(students
        .into_iter()
        .map(|s| {
            let user = users.get(&s.user_id);
            StudentView::from_models(s, user)
        })
        .collect())
}
