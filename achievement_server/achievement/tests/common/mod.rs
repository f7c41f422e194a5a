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

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use account::Page;
use achievement::entities::db_model::{detail_db_model, reference_db_model};
use achievement::entities::inner_model::achievement_view::ReferenceSummary;
use achievement::entities::inner_model::detail_content::{Attachment, DetailPatch, NewDetail};
use achievement::services::achievement_service::{AchievementService, AttachmentPolicy};
use achievement::stores::detail_store::DetailStore;
use achievement::stores::directory_store::DirectoryStore;
use achievement::stores::object_storage::ObjectStorage;
use achievement::stores::reference_store::ReferenceStore;
use achievement::{AchievementError, AchievementStatus, LifecycleEvent};
use async_trait::async_trait;
use jwt::{Principal, Role};
use serde_json::json;

struct StudentRow {
    id: String,
    user_id: String,
    advisor_id: Option<String>,
}

struct LecturerRow {
    id: String,
    user_id: String,
}

#[derive(Default)]
struct State {
    students: Vec<StudentRow>,
    lecturers: Vec<LecturerRow>,
    references: BTreeMap<String, reference_db_model::Model>,
    details: BTreeMap<String, detail_db_model::Model>,
    stored_files: Vec<String>,
    clock: i64,
    fail_reference_writes: bool,
}

impl State {
    fn tick(&mut self) -> i64 {
        self.clock += 1000;
        self.clock
    }

    fn owner_user(&self, student_id: &str) -> Option<&str> {
        self.students.iter().find(|s| s.id == student_id).map(|s| s.user_id.as_str())
    }

    fn advisor_user(&self, student_id: &str) -> Option<&str> {
        let advisor_id = self.students.iter().find(|s| s.id == student_id)?.advisor_id.as_deref()?;
        self.lecturers.iter().find(|l| l.id == advisor_id).map(|l| l.user_id.as_str())
    }

    fn visible_to(&self, model: &reference_db_model::Model, principal: &Principal) -> bool {
        if model.status == AchievementStatus::Deleted {
            return false;
        }
        match principal.role {
            Role::Admin => true,
            Role::Student => self.owner_user(&model.student_id) == Some(principal.user_id.as_str()),
            Role::Advisor => self.advisor_user(&model.student_id) == Some(principal.user_id.as_str()),
        }
    }

    fn listed<F: Fn(&reference_db_model::Model) -> bool>(&self, keep: F) -> Vec<ReferenceSummary> {
        let mut rows: Vec<_> = self
            .references
            .values()
            .filter(|r| r.status != AchievementStatus::Deleted && keep(r))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.into_iter().map(ReferenceSummary::from).collect()
    }

    /// Same guard as the SQL store: id, required status and ownership in one step.
    fn transition<F: Fn(&State, &str) -> bool>(
        &mut self,
        ref_id: &str,
        event: LifecycleEvent,
        owns: F,
    ) -> Result<&mut reference_db_model::Model, AchievementError> {
        let now = self.tick();
        let matches = match self.references.get(ref_id) {
            Some(r) => r.status == event.required_status() && owns(self, &r.student_id),
            None => false,
        };
        if !matches {
            return Err(AchievementError::not_found());
        }
        let model = self.references.get_mut(ref_id).ok_or_else(AchievementError::not_found)?;
        model.status = event.target_status();
        model.updated_at = now;
        match event {
            LifecycleEvent::Submit => model.submitted_at = Some(now),
            LifecycleEvent::Verify => model.verified_at = Some(now),
            LifecycleEvent::Reject => model.rejected_at = Some(now),
            _ => {},
        }
        Ok(model)
    }
}

/// In-memory campus acting as every store the lifecycle service needs.
#[derive(Default)]
pub struct FakeCampus {
    state: Mutex<State>,
}

impl FakeCampus {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn add_lecturer(&self, id: &str, user_id: &str) {
        self.state.lock().unwrap().lecturers.push(LecturerRow { id: id.into(), user_id: user_id.into() });
    }

    pub fn add_student(&self, id: &str, user_id: &str, advisor_id: Option<&str>) {
        self.state.lock().unwrap().students.push(StudentRow {
            id: id.into(),
            user_id: user_id.into(),
            advisor_id: advisor_id.map(String::from),
        });
    }

    pub fn fail_reference_writes(&self) {
        self.state.lock().unwrap().fail_reference_writes = true;
    }

    pub fn detail_count(&self) -> usize {
        self.state.lock().unwrap().details.len()
    }

    pub fn reference_count(&self) -> usize {
        self.state.lock().unwrap().references.len()
    }

    pub fn stored_files(&self) -> Vec<String> {
        self.state.lock().unwrap().stored_files.clone()
    }

    pub fn reference(&self, ref_id: &str) -> Option<reference_db_model::Model> {
        self.state.lock().unwrap().references.get(ref_id).cloned()
    }

    pub fn drop_detail_of(&self, ref_id: &str) {
        let mut state = self.state.lock().unwrap();
        if let Some(detail_id) = state.references.get(ref_id).and_then(|r| r.detail_ref_id.clone()) {
            state.details.remove(&detail_id);
        }
    }
}

#[async_trait]
impl ReferenceStore for FakeCampus {
    async fn create_draft(&self, ref_id: &str, student_id: &str, detail_ref_id: &str) -> Result<String, AchievementError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_reference_writes {
            return Err(AchievementError::StorageFailure("reference table unavailable".into()));
        }
        let now = state.tick();
        state.references.insert(
            ref_id.to_string(),
            reference_db_model::Model {
                id: ref_id.to_string(),
                student_id: student_id.to_string(),
                status: AchievementStatus::Draft,
                detail_ref_id: Some(detail_ref_id.to_string()),
                rejection_note: None,
                created_at: now,
                submitted_at: None,
                verified_at: None,
                verified_by: None,
                rejected_at: None,
                updated_at: now,
            },
        );
        Ok(ref_id.to_string())
    }

    async fn link_detail(&self, ref_id: &str, detail_ref_id: &str) -> Result<(), AchievementError> {
        let mut state = self.state.lock().unwrap();
        let model = state.references.get_mut(ref_id).ok_or_else(AchievementError::not_found)?;
        model.detail_ref_id = Some(detail_ref_id.to_string());
        Ok(())
    }

    async fn get_status(&self, ref_id: &str) -> Result<Option<AchievementStatus>, AchievementError> {
        Ok(self.state.lock().unwrap().references.get(ref_id).map(|r| r.status))
    }

    async fn list_all(&self) -> Result<Vec<ReferenceSummary>, AchievementError> {
        Ok(self.state.lock().unwrap().listed(|_| true))
    }

    async fn list_by_student(&self, user_id: &str) -> Result<Vec<ReferenceSummary>, AchievementError> {
        let state = self.state.lock().unwrap();
        Ok(state.listed(|r| state.owner_user(&r.student_id) == Some(user_id)))
    }

    async fn list_by_advisor(&self, user_id: &str) -> Result<Vec<ReferenceSummary>, AchievementError> {
        let state = self.state.lock().unwrap();
        Ok(state.listed(|r| state.advisor_user(&r.student_id) == Some(user_id)))
    }

    async fn list_by_student_id(&self, student_id: &str, page: Page) -> Result<Vec<ReferenceSummary>, AchievementError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .listed(|r| r.student_id == student_id)
            .into_iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .collect())
    }

    async fn resolve_for_read(
        &self,
        ref_id: &str,
        principal: &Principal,
    ) -> Result<reference_db_model::Model, AchievementError> {
        let state = self.state.lock().unwrap();
        state
            .references
            .get(ref_id)
            .filter(|r| state.visible_to(r, principal))
            .cloned()
            .ok_or_else(AchievementError::not_found)
    }

    async fn submit(&self, ref_id: &str, student_user_id: &str) -> Result<(), AchievementError> {
        let mut state = self.state.lock().unwrap();
        state.transition(ref_id, LifecycleEvent::Submit, |s, id| s.owner_user(id) == Some(student_user_id))?;
        Ok(())
    }

    async fn soft_delete(&self, ref_id: &str, student_user_id: &str) -> Result<(), AchievementError> {
        let mut state = self.state.lock().unwrap();
        state.transition(ref_id, LifecycleEvent::Delete, |s, id| s.owner_user(id) == Some(student_user_id))?;
        Ok(())
    }

    async fn verify(&self, ref_id: &str, advisor_user_id: &str) -> Result<(), AchievementError> {
        let mut state = self.state.lock().unwrap();
        let model =
            state.transition(ref_id, LifecycleEvent::Verify, |s, id| s.advisor_user(id) == Some(advisor_user_id))?;
        model.verified_by = Some(advisor_user_id.to_string());
        Ok(())
    }

    async fn reject(&self, ref_id: &str, advisor_user_id: &str, note: &str) -> Result<(), AchievementError> {
        let mut state = self.state.lock().unwrap();
        let model =
            state.transition(ref_id, LifecycleEvent::Reject, |s, id| s.advisor_user(id) == Some(advisor_user_id))?;
        model.rejection_note = Some(note.to_string());
        Ok(())
    }
}

#[async_trait]
impl DetailStore for FakeCampus {
    async fn create(&self, content: NewDetail) -> Result<String, AchievementError> {
        let mut state = self.state.lock().unwrap();
        let now = state.tick();
        let id = format!("detail-{}", state.details.len() + 1);
        state.details.insert(
            id.clone(),
            detail_db_model::Model {
                id: id.clone(),
                reference_id: content.reference_id,
                student_id: content.student_id,
                achievement_type: content.achievement_type,
                title: content.title,
                description: content.description,
                details: content.details,
                tags: json!(content.tags),
                points: content.points,
                attachments: json!([]),
                created_at: now,
                updated_at: now,
            },
        );
        Ok(id)
    }

    async fn find_by_id(&self, detail_id: &str) -> Result<Option<detail_db_model::Model>, AchievementError> {
        Ok(self.state.lock().unwrap().details.get(detail_id).cloned())
    }

    async fn update(&self, detail_id: &str, patch: DetailPatch) -> Result<(), AchievementError> {
        let mut state = self.state.lock().unwrap();
        let now = state.tick();
        let detail = state
            .details
            .get_mut(detail_id)
            .ok_or_else(|| AchievementError::InternalConsistency("missing detail".into()))?;
        if let Some(v) = patch.achievement_type {
            detail.achievement_type = v;
        }
        if let Some(v) = patch.title {
            detail.title = v;
        }
        if let Some(v) = patch.description {
            detail.description = v;
        }
        if let Some(v) = patch.details {
            detail.details = v;
        }
        if let Some(v) = patch.tags {
            detail.tags = json!(v);
        }
        if let Some(v) = patch.points {
            detail.points = v;
        }
        detail.updated_at = now;
        Ok(())
    }

    async fn append_attachment(&self, detail_id: &str, attachment: Attachment) -> Result<(), AchievementError> {
        let mut state = self.state.lock().unwrap();
        let detail = state
            .details
            .get_mut(detail_id)
            .ok_or_else(|| AchievementError::InternalConsistency("missing detail".into()))?;
        if let Some(items) = detail.attachments.as_array_mut() {
            items.push(json!(attachment));
        }
        Ok(())
    }

    async fn delete(&self, detail_id: &str) -> Result<(), AchievementError> {
        self.state.lock().unwrap().details.remove(detail_id);
        Ok(())
    }

    async fn scan(&self, student_ids: Option<Vec<String>>) -> Result<Vec<detail_db_model::Model>, AchievementError> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<_> = state
            .details
            .values()
            .filter(|d| student_ids.as_ref().map_or(true, |ids| ids.contains(&d.student_id)))
            .cloned()
            .collect();
        rows.sort_by_key(|d| d.created_at);
        Ok(rows)
    }
}

#[async_trait]
impl DirectoryStore for FakeCampus {
    async fn student_id_by_user(&self, user_id: &str) -> Result<Option<String>, AchievementError> {
        let state = self.state.lock().unwrap();
        Ok(state.students.iter().find(|s| s.user_id == user_id).map(|s| s.id.clone()))
    }

    async fn lecturer_id_by_user(&self, user_id: &str) -> Result<Option<String>, AchievementError> {
        let state = self.state.lock().unwrap();
        Ok(state.lecturers.iter().find(|l| l.user_id == user_id).map(|l| l.id.clone()))
    }

    async fn advisee_ids(&self, lecturer_id: &str) -> Result<Vec<String>, AchievementError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .students
            .iter()
            .filter(|s| s.advisor_id.as_deref() == Some(lecturer_id))
            .map(|s| s.id.clone())
            .collect())
    }
}

#[async_trait]
impl ObjectStorage for FakeCampus {
    async fn store(&self, _bytes: &[u8], suggested_name: &str) -> Result<String, AchievementError> {
        let mut state = self.state.lock().unwrap();
        let url = format!("/uploads/{}_{}", state.stored_files.len() + 1, suggested_name);
        state.stored_files.push(url.clone());
        Ok(url)
    }
}

/// Advisor `lect-1` (user `dosen-1`) advises `stu-a` (user `mhs-a`); `stu-b` (user `mhs-b`)
/// is advised by `lect-2` (user `dosen-2`).
pub fn seeded_campus() -> Arc<FakeCampus> {
    let campus = FakeCampus::new();
    campus.add_lecturer("lect-1", "dosen-1");
    campus.add_lecturer("lect-2", "dosen-2");
    campus.add_student("stu-a", "mhs-a", Some("lect-1"));
    campus.add_student("stu-b", "mhs-b", Some("lect-2"));
    campus
}

pub fn service_for(campus: &Arc<FakeCampus>) -> AchievementService {
    AchievementService::new(
        campus.clone(),
        campus.clone(),
        campus.clone(),
        campus.clone(),
        AttachmentPolicy {
            max_file_size: 1024,
            allowed_file_types: vec!["application/pdf".to_string(), "image/png".to_string()],
        },
    )
}

pub fn admin() -> Principal {
    Principal::new("admin-1", Role::Admin, Vec::<String>::new())
}

pub fn student(user_id: &str) -> Principal {
    Principal::new(user_id, Role::Student, Vec::<String>::new())
}

pub fn advisor(user_id: &str) -> Principal {
    Principal::new(user_id, Role::Advisor, Vec::<String>::new())
}
