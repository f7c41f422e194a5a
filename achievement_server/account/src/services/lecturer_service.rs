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
use sea_orm::DatabaseConnection;
use crate::entities::db_model::user_db_model;
use crate::entities::inner_model::lecturer_view::LecturerView;
use crate::entities::inner_model::page::Page;
use crate::entities::inner_model::student_view::StudentView;
use crate::error::account_error::AccountError;
use crate::repositories::lecturer_repository::LecturerRepository;
use crate::repositories::student_repository::StudentRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::student_service::with_accounts;

pub struct LecturerService {
    db: Arc<DatabaseConnection>,
}

impl LecturerService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn list(&self, page: Page) -> Result<Vec<LecturerView>, AccountError> {
        let lecturers = LecturerRepository::list(&self.db, page).await?;
        let user_ids: Vec<String> = lecturers.iter().map(|l| l.user_id.clone()).collect();
        let users: HashMap<String, user_db_model::Model> = UserRepository::find_by_ids(&self.db, user_ids)
            .await?
            .into_iter()
            .map(|u| (u.id.clone(), u))
            .collect();
        Ok(lecturers
            .into_iter()
            .map(|l| {
                let user = users.get(&l.user_id);
                LecturerView::from_models(l, user)
            })
            .collect())
    }

    /// Students whose advisor is `lecturer_id` (a `lecturers.id`).
    pub async fn advisees(&self, lecturer_id: &str, page: Page) -> Result<Vec<StudentView>, AccountError> {
        if LecturerRepository::find_by_id(&self.db, lecturer_id).await?.is_none() {
            return Err(AccountError::NotFound("lecturer not found".to_string()));
        }
        let students = StudentRepository::list_by_advisor(&self.db, lecturer_id, page).await?;
        with_accounts(&self.db, students).await
    }
}
