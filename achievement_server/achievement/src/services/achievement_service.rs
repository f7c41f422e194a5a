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
use account::Page;
use jwt::{Principal, Role};
use log::{error, info};
use uuid::Uuid;
use validator::Validate;
use crate::access::access_resolver::AccessResolver;
use crate::entities::db_model::reference_db_model;
use crate::entities::inner_model::achievement_view::{AchievementView, HistoryEntry, ReferenceSummary, StatusChange};
use crate::entities::inner_model::detail_content::{AchievementDetail, Attachment};
use crate::entities::request_body::achievement_req_body::{CreateAchievementReqBody, UpdateAchievementReqBody};
use crate::entities::request_body::attachment_req_body::{AttachmentReqBody, AttachmentUpload};
use crate::entities::request_body::reject_req_body::RejectReqBody;
use crate::entities::status::{AchievementStatus, LifecycleEvent};
use crate::error::achievement_error::AchievementError;
use crate::services::history;
use crate::stores::detail_store::DetailStore;
use crate::stores::directory_store::DirectoryStore;
use crate::stores::object_storage::ObjectStorage;
use crate::stores::reference_store::ReferenceStore;

/// Limits applied to uploaded attachments.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentPolicy {
    pub max_file_size: usize,
    pub allowed_file_types: Vec<String>,
}

impl AttachmentPolicy {
    pub fn check(&self, upload: &AttachmentUpload) -> Result<(), AchievementError> {
        if upload.file_name.is_empty() {
            return Err(AchievementError::ValidationError("file name is required".to_string()));
        }
        if upload.bytes.is_empty() {
            return Err(AchievementError::ValidationError("file is empty".to_string()));
        }
        if !self.allowed_file_types.iter().any(|t| t.eq_ignore_ascii_case(&upload.file_type)) {
            return Err(AchievementError::ValidationError(format!("file type {} is not allowed", upload.file_type)));
        }
        if upload.bytes.len() > self.max_file_size {
            return Err(AchievementError::ValidationError(format!(
                "file exceeds the limit of {} bytes",
                self.max_file_size
            )));
        }
        Ok(())
    }
}

/// Achievement lifecycle: draft, submitted, then verified or rejected; drafts may be deleted.
///
/// Ownership and state are enforced here; permission names are checked by the caller.
pub struct AchievementService {
    references: Arc<dyn ReferenceStore>,
    details: Arc<dyn DetailStore>,
    resolver: AccessResolver,
    storage: Arc<dyn ObjectStorage>,
    policy: AttachmentPolicy,
}

impl AchievementService {
    pub fn new(
        references: Arc<dyn ReferenceStore>,
        details: Arc<dyn DetailStore>,
        directory: Arc<dyn DirectoryStore>,
        storage: Arc<dyn ObjectStorage>,
        policy: AttachmentPolicy,
    ) -> Self {
        Self { references, details, resolver: AccessResolver::new(directory), storage, policy }
    }

    /// Stores the detail document first, then the draft reference pointing at it.
    ///
    /// If the reference cannot be written the detail is deleted again; a failed cleanup
    /// leaves an orphaned detail which is logged with both ids.
    pub async fn create(
        &self,
        principal: &Principal,
        body: CreateAchievementReqBody,
    ) -> Result<AchievementView, AchievementError> {
        let student_id = self.resolver.own_student_id(principal).await?;
        body.validate()?;
        let ref_id = Uuid::new_v4().to_string();
        let detail_id = self.details.create(body.into_new_detail(&ref_id, &student_id)).await?;
        if let Err(err) = self.references.create_draft(&ref_id, &student_id, &detail_id).await {
            error!("failed to create reference {}: {}", ref_id, err);
            if let Err(cleanup) = self.details.delete(&detail_id).await {
                error!(
                    "orphaned detail {} for reference {} could not be removed: {}",
                    detail_id, ref_id, cleanup
                );
            }
            return Err(err);
        }
        info!("student {} created achievement {}", student_id, ref_id);
        self.get(principal, &ref_id).await
    }

    pub async fn list(&self, principal: &Principal) -> Result<Vec<ReferenceSummary>, AchievementError> {
        match principal.role {
            Role::Admin => self.references.list_all().await,
            Role::Student => self.references.list_by_student(&principal.user_id).await,
            Role::Advisor => self.references.list_by_advisor(&principal.user_id).await,
        }
    }

    /// Achievements of one student, if the caller's scope covers that student.
    pub async fn list_for_student(
        &self,
        principal: &Principal,
        student_id: &str,
        page: Page,
    ) -> Result<Vec<ReferenceSummary>, AchievementError> {
        let scope = self.resolver.resolve_scope(principal).await?;
        if !scope.covers(student_id) {
            return Err(AchievementError::NotFoundOrForbidden("student not found".to_string()));
        }
        self.references.list_by_student_id(student_id, page).await
    }

    pub async fn get(&self, principal: &Principal, ref_id: &str) -> Result<AchievementView, AchievementError> {
        let reference = self.references.resolve_for_read(ref_id, principal).await?;
        let detail = self.load_detail(&reference).await?;
        Ok(AchievementView::new(reference, detail))
    }

    pub async fn update(
        &self,
        principal: &Principal,
        ref_id: &str,
        body: UpdateAchievementReqBody,
    ) -> Result<AchievementView, AchievementError> {
        let reference = self.owned_draft(principal, ref_id, LifecycleEvent::UpdateContent).await?;
        body.validate()?;
        let detail_id = Self::detail_id(&reference)?;
        self.details.update(detail_id, body.into_patch()).await?;
        info!("achievement {} content updated", ref_id);
        self.get(principal, ref_id).await
    }

    pub async fn submit(&self, principal: &Principal, ref_id: &str) -> Result<StatusChange, AchievementError> {
        if principal.role != Role::Student {
            return Err(AchievementError::not_found());
        }
        if let Err(err) = self.references.submit(ref_id, &principal.user_id).await {
            return Err(self.explain_miss(principal, ref_id, LifecycleEvent::Submit, err).await);
        }
        Ok(StatusChange { id: ref_id.to_string(), status: AchievementStatus::Submitted })
    }

    pub async fn delete(&self, principal: &Principal, ref_id: &str) -> Result<StatusChange, AchievementError> {
        if principal.role != Role::Student {
            return Err(AchievementError::not_found());
        }
        if let Err(err) = self.references.soft_delete(ref_id, &principal.user_id).await {
            return Err(self.explain_miss(principal, ref_id, LifecycleEvent::Delete, err).await);
        }
        Ok(StatusChange { id: ref_id.to_string(), status: AchievementStatus::Deleted })
    }

    /// Anything short of a submitted advisee's achievement is reported as not found.
    pub async fn verify(&self, principal: &Principal, ref_id: &str) -> Result<StatusChange, AchievementError> {
        if principal.role != Role::Advisor {
            return Err(AchievementError::not_found());
        }
        self.references.verify(ref_id, &principal.user_id).await?;
        Ok(StatusChange { id: ref_id.to_string(), status: AchievementStatus::Verified })
    }

    pub async fn reject(
        &self,
        principal: &Principal,
        ref_id: &str,
        body: RejectReqBody,
    ) -> Result<StatusChange, AchievementError> {
        body.validate()?;
        let note = body
            .trimmed_note()
            .ok_or_else(|| AchievementError::ValidationError("rejection note is required".to_string()))?;
        if principal.role != Role::Advisor {
            return Err(AchievementError::not_found());
        }
        self.references.reject(ref_id, &principal.user_id, note).await?;
        Ok(StatusChange { id: ref_id.to_string(), status: AchievementStatus::Rejected })
    }

    pub async fn history(&self, principal: &Principal, ref_id: &str) -> Result<Vec<HistoryEntry>, AchievementError> {
        let reference = self.references.resolve_for_read(ref_id, principal).await?;
        Ok(history::reconstruct(&reference))
    }

    /// Stores the file and records it on the draft's detail document.
    ///
    /// A stored file whose attachment entry cannot be written is logged as orphaned.
    pub async fn upload_attachment(
        &self,
        principal: &Principal,
        ref_id: &str,
        body: AttachmentReqBody,
    ) -> Result<Attachment, AchievementError> {
        let reference = self.owned_draft(principal, ref_id, LifecycleEvent::AttachFile).await?;
        let detail_id = Self::detail_id(&reference)?.to_string();
        let upload = body.decode()?;
        self.policy.check(&upload)?;
        let file_url = self.storage.store(&upload.bytes, &upload.file_name).await?;
        let attachment = Attachment {
            file_name: upload.file_name,
            file_url,
            file_type: upload.file_type,
            uploaded_at: chrono::Utc::now().timestamp_millis(),
        };
        if let Err(err) = self.details.append_attachment(&detail_id, attachment.clone()).await {
            error!(
                "orphaned file {} for achievement {} was not recorded on detail {}: {}",
                attachment.file_url, ref_id, detail_id, err
            );
            return Err(err);
        }
        Ok(attachment)
    }

    async fn owned_draft(
        &self,
        principal: &Principal,
        ref_id: &str,
        event: LifecycleEvent,
    ) -> Result<reference_db_model::Model, AchievementError> {
        if principal.role != Role::Student {
            return Err(AchievementError::not_found());
        }
        let reference = self.references.resolve_for_read(ref_id, principal).await?;
        if reference.status.apply(event).is_none() {
            return Err(Self::invalid_state(event, reference.status));
        }
        Ok(reference)
    }

    /// A conditional write matched nothing: tell the owner about a wrong status, hide everything else.
    async fn explain_miss(
        &self,
        principal: &Principal,
        ref_id: &str,
        event: LifecycleEvent,
        err: AchievementError,
    ) -> AchievementError {
        if !matches!(err, AchievementError::NotFoundOrForbidden(_)) {
            return err;
        }
        match self.references.resolve_for_read(ref_id, principal).await {
            Ok(reference) => Self::invalid_state(event, reference.status),
            Err(other) => other,
        }
    }

    fn invalid_state(event: LifecycleEvent, status: AchievementStatus) -> AchievementError {
        AchievementError::InvalidState(format!("cannot {} an achievement that is {}", event.name(), status))
    }

    fn detail_id(reference: &reference_db_model::Model) -> Result<&str, AchievementError> {
        reference.detail_ref_id.as_deref().ok_or_else(|| {
            AchievementError::InternalConsistency(format!("reference {} has no detail document", reference.id))
        })
    }

    async fn load_detail(&self, reference: &reference_db_model::Model) -> Result<AchievementDetail, AchievementError> {
        let detail_id = Self::detail_id(reference)?;
        let detail = self.details.find_by_id(detail_id).await?.ok_or_else(|| {
            error!("reference {} points at missing detail {}", reference.id, detail_id);
            AchievementError::InternalConsistency(format!("detail document {} is missing", detail_id))
        })?;
        AchievementDetail::try_from(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::detail_store::MockDetailStore;
    use crate::stores::directory_store::MockDirectoryStore;
    use crate::stores::object_storage::MockObjectStorage;
    use crate::stores::reference_store::MockReferenceStore;
    use serde_json::json;

    fn student() -> Principal {
        Principal::new("user-1", Role::Student, vec!["achievement:create"])
    }

    fn body() -> CreateAchievementReqBody {
        serde_json::from_value(json!({"achievement_type": "competition", "title": "X", "points": 50})).unwrap()
    }

    fn directory() -> MockDirectoryStore {
        let mut directory = MockDirectoryStore::new();
        directory.expect_student_id_by_user().returning(|_| Ok(Some("stu-1".to_string())));
        directory
    }

    fn policy() -> AttachmentPolicy {
        AttachmentPolicy { max_file_size: 8, allowed_file_types: vec!["application/pdf".to_string()] }
    }

    fn service(references: MockReferenceStore, details: MockDetailStore) -> AchievementService {
        AchievementService::new(
            Arc::new(references),
            Arc::new(details),
            Arc::new(directory()),
            Arc::new(MockObjectStorage::new()),
            policy(),
        )
    }

    #[tokio::test]
    async fn test_failed_reference_write_removes_detail() {
        let mut details = MockDetailStore::new();
        details.expect_create().times(1).returning(|_| Ok("detail-1".to_string()));
        details.expect_delete().withf(|id| id == "detail-1").times(1).returning(|_| Ok(()));
        let mut references = MockReferenceStore::new();
        references
            .expect_create_draft()
            .times(1)
            .returning(|_, _, _| Err(AchievementError::StorageFailure("connection reset".to_string())));

        let err = service(references, details).create(&student(), body()).await.unwrap_err();
        assert_eq!(err, AchievementError::StorageFailure("connection reset".to_string()));
    }

    #[tokio::test]
    async fn test_failed_cleanup_still_returns_original_error() {
        let mut details = MockDetailStore::new();
        details.expect_create().returning(|_| Ok("detail-1".to_string()));
        details
            .expect_delete()
            .times(1)
            .returning(|_| Err(AchievementError::StorageFailure("still down".to_string())));
        let mut references = MockReferenceStore::new();
        references
            .expect_create_draft()
            .returning(|_, _, _| Err(AchievementError::StorageFailure("connection reset".to_string())));

        let err = service(references, details).create(&student(), body()).await.unwrap_err();
        assert_eq!(err, AchievementError::StorageFailure("connection reset".to_string()));
    }

    #[tokio::test]
    async fn test_failed_detail_write_creates_no_reference() {
        let mut details = MockDetailStore::new();
        details
            .expect_create()
            .returning(|_| Err(AchievementError::StorageFailure("timeout".to_string())));
        details.expect_delete().never();
        let mut references = MockReferenceStore::new();
        references.expect_create_draft().never();

        let err = service(references, details).create(&student(), body()).await.unwrap_err();
        assert!(matches!(err, AchievementError::StorageFailure(_)));
    }

    #[tokio::test]
    async fn test_invalid_body_touches_no_store() {
        let mut details = MockDetailStore::new();
        details.expect_create().never();
        let invalid: CreateAchievementReqBody =
            serde_json::from_value(json!({"achievement_type": "competition", "title": "  "})).unwrap();
        let err = service(MockReferenceStore::new(), details).create(&student(), invalid).await.unwrap_err();
        assert!(matches!(err, AchievementError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_reject_requires_note_before_store() {
        let mut references = MockReferenceStore::new();
        references.expect_reject().never();
        let advisor = Principal::new("user-9", Role::Advisor, vec!["achievement:verify"]);
        let err = service(references, MockDetailStore::new())
            .reject(&advisor, "ref-1", RejectReqBody { note: "   ".to_string() })
            .await
            .unwrap_err();
        assert!(matches!(err, AchievementError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_failed_attachment_append_returns_error_after_store() {
        let mut references = MockReferenceStore::new();
        references.expect_resolve_for_read().times(1).returning(|ref_id, _| {
            Ok(reference_db_model::Model {
                id: ref_id.to_string(),
                student_id: "stu-1".to_string(),
                status: AchievementStatus::Draft,
                detail_ref_id: Some("detail-1".to_string()),
                rejection_note: None,
                created_at: 1,
                submitted_at: None,
                verified_at: None,
                verified_by: None,
                rejected_at: None,
                updated_at: 1,
            })
        });
        let mut details = MockDetailStore::new();
        details
            .expect_append_attachment()
            .withf(|id, attachment| id == "detail-1" && attachment.file_url == "/uploads/x_a.pdf")
            .times(1)
            .returning(|_, _| Err(AchievementError::StorageFailure("lock timeout".to_string())));
        let mut storage = MockObjectStorage::new();
        storage.expect_store().times(1).returning(|_, _| Ok("/uploads/x_a.pdf".to_string()));
        let service = AchievementService::new(
            Arc::new(references),
            Arc::new(details),
            Arc::new(directory()),
            Arc::new(storage),
            policy(),
        );
        let body = AttachmentReqBody {
            file_name: "a.pdf".to_string(),
            file_type: "application/pdf".to_string(),
            content: "JVBERg==".to_string(),
        };

        let err = service.upload_attachment(&student(), "ref-1", body).await.unwrap_err();
        assert_eq!(err, AchievementError::StorageFailure("lock timeout".to_string()));
    }

    #[test]
    fn test_attachment_policy() {
        let upload = |name: &str, file_type: &str, size: usize| AttachmentUpload {
            file_name: name.to_string(),
            file_type: file_type.to_string(),
            bytes: vec![1; size],
        };
        assert!(policy().check(&upload("a.pdf", "application/pdf", 8)).is_ok());
        assert!(policy().check(&upload("a.pdf", "APPLICATION/PDF", 1)).is_ok());
        assert!(policy().check(&upload("", "application/pdf", 1)).is_err());
        assert!(policy().check(&upload("a.exe", "application/x-msdownload", 1)).is_err());
        assert!(policy().check(&upload("a.pdf", "application/pdf", 9)).is_err());
        assert!(policy().check(&upload("a.pdf", "application/pdf", 0)).is_err());
    }
}
