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

use std::sync::Mutex;
use achievement::entities::db_model::detail_db_model;
use achievement::entities::inner_model::detail_content::{Attachment, DetailPatch, NewDetail};
use achievement::stores::detail_store::DetailStore;
use achievement::stores::directory_store::DirectoryStore;
use achievement::AchievementError;
use async_trait::async_trait;
use serde_json::{json, Value};

fn read_only() -> AchievementError {
    AchievementError::StorageFailure("read-only fixture".to_string())
}

/// Detail documents plus the student/lecturer directory, read-only.
#[derive(Default)]
pub struct Archive {
    documents: Vec<detail_db_model::Model>,
    /// (student id, user id, advisor lecturer id)
    students: Vec<(String, String, Option<String>)>,
    /// (lecturer id, user id)
    lecturers: Vec<(String, String)>,
    pub scans: Mutex<Vec<Option<Vec<String>>>>,
}

impl Archive {
    pub fn with_student(mut self, id: &str, user_id: &str, advisor: Option<&str>) -> Self {
        self.students.push((id.into(), user_id.into(), advisor.map(String::from)));
        self
    }

    pub fn with_lecturer(mut self, id: &str, user_id: &str) -> Self {
        self.lecturers.push((id.into(), user_id.into()));
        self
    }

    pub fn with_document(mut self, student_id: &str, achievement_type: &str, points: i32, created_at: i64, details: Value) -> Self {
        let n = self.documents.len();
        self.documents.push(detail_db_model::Model {
            id: format!("doc-{}", n),
            reference_id: format!("ref-{}", n),
            student_id: student_id.into(),
            achievement_type: achievement_type.into(),
            title: format!("Achievement {}", n),
            description: String::new(),
            details,
            tags: json!([]),
            points,
            attachments: json!([]),
            created_at,
            updated_at: created_at,
        });
        self
    }

    pub fn scan_count(&self) -> usize {
        self.scans.lock().unwrap().len()
    }
}

#[async_trait]
impl DetailStore for Archive {
    async fn create(&self, _content: NewDetail) -> Result<String, AchievementError> {
        Err(read_only())
    }

    async fn find_by_id(&self, detail_id: &str) -> Result<Option<detail_db_model::Model>, AchievementError> {
        Ok(self.documents.iter().find(|d| d.id == detail_id).cloned())
    }

    async fn update(&self, _detail_id: &str, _patch: DetailPatch) -> Result<(), AchievementError> {
        Err(read_only())
    }

    async fn append_attachment(&self, _detail_id: &str, _attachment: Attachment) -> Result<(), AchievementError> {
        Err(read_only())
    }

    async fn delete(&self, _detail_id: &str) -> Result<(), AchievementError> {
        Err(read_only())
    }

    async fn scan(&self, student_ids: Option<Vec<String>>) -> Result<Vec<detail_db_model::Model>, AchievementError> {
        self.scans.lock().unwrap().push(student_ids.clone());
        Ok(self
            .documents
            .iter()
            .filter(|d| student_ids.as_ref().map_or(true, |ids| ids.contains(&d.student_id)))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl DirectoryStore for Archive {
    async fn student_id_by_user(&self, user_id: &str) -> Result<Option<String>, AchievementError> {
        Ok(self.students.iter().find(|s| s.1 == user_id).map(|s| s.0.clone()))
    }

    async fn lecturer_id_by_user(&self, user_id: &str) -> Result<Option<String>, AchievementError> {
        Ok(self.lecturers.iter().find(|l| l.1 == user_id).map(|l| l.0.clone()))
    }

    async fn advisee_ids(&self, lecturer_id: &str) -> Result<Vec<String>, AchievementError> {
        Ok(self
            .students
            .iter()
            .filter(|s| s.2.as_deref() == Some(lecturer_id))
            .map(|s| s.0.clone())
            .collect())
    }
}
