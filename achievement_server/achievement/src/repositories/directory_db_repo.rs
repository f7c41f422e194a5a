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

use std::sync::Arc;
use account::repositories::lecturer_repository::LecturerRepository;
use account::repositories::student_repository::StudentRepository;
use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use crate::error::achievement_error::AchievementError;
use crate::stores::directory_store::DirectoryStore;

/// `DirectoryStore` backed by the account tables.
pub struct DirectoryDbRepo {
    db: Arc<DatabaseConnection>,
}

impl DirectoryDbRepo {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DirectoryStore for DirectoryDbRepo {
    async fn student_id_by_user(&self, user_id: &str) -> Result<Option<String>, AchievementError> {
        let student = StudentRepository::find_by_user_id(&self.db, user_id).await?;
        Ok(student.map(|s| s.id))
    }

    async fn lecturer_id_by_user(&self, user_id: &str) -> Result<Option<String>, AchievementError> {
        let lecturer = LecturerRepository::find_by_user_id(&self.db, user_id).await?;
        Ok(lecturer.map(|l| l.id))
    }

    async fn advisee_ids(&self, lecturer_id: &str) -> Result<Vec<String>, AchievementError> {
        Ok(StudentRepository::advisee_ids(&self.db, lecturer_id).await?)
    }
}
