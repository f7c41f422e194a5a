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

mod common;

use account::Page;
use achievement::entities::request_body::achievement_req_body::{CreateAchievementReqBody, UpdateAchievementReqBody};
use achievement::entities::request_body::attachment_req_body::AttachmentReqBody;
use achievement::entities::request_body::reject_req_body::RejectReqBody;
use achievement::{AchievementError, AchievementStatus};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use common::{admin, advisor, seeded_campus, service_for, student};
use serde_json::json;

fn competition(title: &str, points: i32) -> CreateAchievementReqBody {
    serde_json::from_value(json!({
        "achievement_type": "competition",
        "title": title,
        "details": {"level": "national"},
        "tags": ["robotics"],
        "points": points
    }))
    .unwrap()
}

fn reject_note(note: &str) -> RejectReqBody {
    RejectReqBody { note: note.to_string() }
}

fn pdf(name: &str) -> AttachmentReqBody {
    AttachmentReqBody {
        file_name: name.to_string(),
        file_type: "application/pdf".to_string(),
        content: STANDARD.encode(b"%PDF-1.4 certificate"),
    }
}

#[tokio::test]
async fn test_rejected_achievement_cannot_be_resubmitted() {
    let campus = seeded_campus();
    let service = service_for(&campus);
    let owner = student("mhs-a");

    let created = service.create(&owner, competition("X", 50)).await.unwrap();
    assert_eq!(created.status, AchievementStatus::Draft);
    assert_eq!(created.detail.title, "X");
    assert_eq!(created.detail.points, 50);
    assert_eq!(created.detail.reference_id, created.id);

    let submitted = service.submit(&owner, &created.id).await.unwrap();
    assert_eq!(submitted.status, AchievementStatus::Submitted);

    let rejected = service
        .reject(&advisor("dosen-1"), &created.id, reject_note("  insufficient evidence "))
        .await
        .unwrap();
    assert_eq!(rejected.status, AchievementStatus::Rejected);
    let view = service.get(&owner, &created.id).await.unwrap();
    assert_eq!(view.status, AchievementStatus::Rejected);
    assert_eq!(view.rejection_note.as_deref(), Some("insufficient evidence"));

    let err = service.submit(&owner, &created.id).await.unwrap_err();
    assert!(matches!(err, AchievementError::InvalidState(_)));
}

#[tokio::test]
async fn test_verified_history_is_ordered() {
    let campus = seeded_campus();
    let service = service_for(&campus);
    let owner = student("mhs-a");
    let id = service.create(&owner, competition("Gemastik", 80)).await.unwrap().id;
    service.submit(&owner, &id).await.unwrap();
    service.verify(&advisor("dosen-1"), &id).await.unwrap();

    let reference = campus.reference(&id).unwrap();
    assert_eq!(reference.verified_by.as_deref(), Some("dosen-1"));
    let history = service.history(&owner, &id).await.unwrap();
    let statuses: Vec<_> = history.iter().map(|h| h.status).collect();
    assert_eq!(statuses, vec![AchievementStatus::Draft, AchievementStatus::Submitted, AchievementStatus::Verified]);
    assert_eq!(history[0].at, reference.created_at);
    assert_eq!(history[1].at, reference.submitted_at.unwrap());
    assert_eq!(history[2].at, reference.verified_at.unwrap());
    assert!(history[0].at < history[1].at && history[1].at < history[2].at);
}

#[tokio::test]
async fn test_other_student_cannot_touch_achievement() {
    let campus = seeded_campus();
    let service = service_for(&campus);
    let id = service.create(&student("mhs-a"), competition("X", 10)).await.unwrap().id;
    let intruder = student("mhs-b");

    assert!(matches!(service.get(&intruder, &id).await, Err(AchievementError::NotFoundOrForbidden(_))));
    assert!(matches!(service.submit(&intruder, &id).await, Err(AchievementError::NotFoundOrForbidden(_))));
    assert!(matches!(service.delete(&intruder, &id).await, Err(AchievementError::NotFoundOrForbidden(_))));
    assert!(matches!(service.history(&intruder, &id).await, Err(AchievementError::NotFoundOrForbidden(_))));
    assert_eq!(campus.reference(&id).unwrap().status, AchievementStatus::Draft);
}

#[tokio::test]
async fn test_missing_and_foreign_look_the_same() {
    let campus = seeded_campus();
    let service = service_for(&campus);
    let id = service.create(&student("mhs-a"), competition("X", 10)).await.unwrap().id;

    let foreign = service.submit(&student("mhs-b"), &id).await.unwrap_err();
    let missing = service.submit(&student("mhs-b"), "no-such-id").await.unwrap_err();
    assert_eq!(foreign, missing);
}

#[tokio::test]
async fn test_verify_requires_submitted_and_own_advisee() {
    let campus = seeded_campus();
    let service = service_for(&campus);
    let owner = student("mhs-a");
    let id = service.create(&owner, competition("X", 10)).await.unwrap().id;

    // draft cannot be verified
    let err = service.verify(&advisor("dosen-1"), &id).await.unwrap_err();
    assert!(matches!(err, AchievementError::NotFoundOrForbidden(_)));

    service.submit(&owner, &id).await.unwrap();
    let err = service.verify(&advisor("dosen-2"), &id).await.unwrap_err();
    assert!(matches!(err, AchievementError::NotFoundOrForbidden(_)));
    let err = service.verify(&admin(), &id).await.unwrap_err();
    assert!(matches!(err, AchievementError::NotFoundOrForbidden(_)));
    let err = service.reject(&advisor("dosen-2"), &id, reject_note("no")).await.unwrap_err();
    assert!(matches!(err, AchievementError::NotFoundOrForbidden(_)));

    service.verify(&advisor("dosen-1"), &id).await.unwrap();
    let err = service.reject(&advisor("dosen-1"), &id, reject_note("too late")).await.unwrap_err();
    assert!(matches!(err, AchievementError::NotFoundOrForbidden(_)));
    assert_eq!(campus.reference(&id).unwrap().status, AchievementStatus::Verified);
}

#[tokio::test]
async fn test_blank_rejection_note_is_refused() {
    let campus = seeded_campus();
    let service = service_for(&campus);
    let owner = student("mhs-a");
    let id = service.create(&owner, competition("X", 10)).await.unwrap().id;
    service.submit(&owner, &id).await.unwrap();

    let err = service.reject(&advisor("dosen-1"), &id, reject_note(" \n ")).await.unwrap_err();
    assert!(matches!(err, AchievementError::ValidationError(_)));
    assert_eq!(campus.reference(&id).unwrap().status, AchievementStatus::Submitted);
}

#[tokio::test]
async fn test_update_only_in_draft() {
    let campus = seeded_campus();
    let service = service_for(&campus);
    let owner = student("mhs-a");
    let id = service.create(&owner, competition("X", 10)).await.unwrap().id;

    let patch: UpdateAchievementReqBody = serde_json::from_value(json!({"title": "Juara 1 Gemastik"})).unwrap();
    let updated = service.update(&owner, &id, patch).await.unwrap();
    assert_eq!(updated.detail.title, "Juara 1 Gemastik");
    assert_eq!(updated.detail.points, 10);

    let empty: UpdateAchievementReqBody = serde_json::from_value(json!({})).unwrap();
    let err = service.update(&owner, &id, empty).await.unwrap_err();
    assert!(matches!(err, AchievementError::ValidationError(_)));

    service.submit(&owner, &id).await.unwrap();
    let patch: UpdateAchievementReqBody = serde_json::from_value(json!({"points": 99})).unwrap();
    let err = service.update(&owner, &id, patch).await.unwrap_err();
    assert!(matches!(err, AchievementError::InvalidState(_)));
}

#[tokio::test]
async fn test_attachments_only_in_draft() {
    let campus = seeded_campus();
    let service = service_for(&campus);
    let owner = student("mhs-a");
    let id = service.create(&owner, competition("X", 10)).await.unwrap().id;

    let attachment = service.upload_attachment(&owner, &id, pdf("sertifikat.pdf")).await.unwrap();
    assert_eq!(attachment.file_name, "sertifikat.pdf");
    assert_eq!(campus.stored_files(), vec![attachment.file_url.clone()]);
    let view = service.get(&owner, &id).await.unwrap();
    assert_eq!(view.detail.attachments, vec![attachment]);
    assert_eq!(view.status, AchievementStatus::Draft);

    let mut exe = pdf("setup.exe");
    exe.file_type = "application/x-msdownload".to_string();
    let err = service.upload_attachment(&owner, &id, exe).await.unwrap_err();
    assert!(matches!(err, AchievementError::ValidationError(_)));

    service.submit(&owner, &id).await.unwrap();
    let err = service.upload_attachment(&owner, &id, pdf("late.pdf")).await.unwrap_err();
    assert!(matches!(err, AchievementError::InvalidState(_)));
    assert_eq!(campus.stored_files().len(), 1);
}

#[tokio::test]
async fn test_deleted_achievement_disappears() {
    let campus = seeded_campus();
    let service = service_for(&campus);
    let owner = student("mhs-a");
    let id = service.create(&owner, competition("X", 10)).await.unwrap().id;

    let deleted = service.delete(&owner, &id).await.unwrap();
    assert_eq!(deleted.status, AchievementStatus::Deleted);
    assert!(service.list(&owner).await.unwrap().is_empty());
    assert!(service.list(&admin()).await.unwrap().is_empty());
    assert!(matches!(service.get(&admin(), &id).await, Err(AchievementError::NotFoundOrForbidden(_))));
    assert!(matches!(service.submit(&owner, &id).await, Err(AchievementError::NotFoundOrForbidden(_))));
}

#[tokio::test]
async fn test_submitted_cannot_be_deleted() {
    let campus = seeded_campus();
    let service = service_for(&campus);
    let owner = student("mhs-a");
    let id = service.create(&owner, competition("X", 10)).await.unwrap().id;
    service.submit(&owner, &id).await.unwrap();

    let err = service.delete(&owner, &id).await.unwrap_err();
    assert!(matches!(err, AchievementError::InvalidState(_)));
}

#[tokio::test]
async fn test_list_follows_role() {
    let campus = seeded_campus();
    let service = service_for(&campus);
    let a1 = service.create(&student("mhs-a"), competition("A1", 10)).await.unwrap().id;
    let b1 = service.create(&student("mhs-b"), competition("B1", 20)).await.unwrap().id;
    let a2 = service.create(&student("mhs-a"), competition("A2", 30)).await.unwrap().id;

    let ids = |rows: Vec<achievement::entities::inner_model::achievement_view::ReferenceSummary>| {
        rows.into_iter().map(|r| r.id).collect::<Vec<_>>()
    };
    assert_eq!(ids(service.list(&admin()).await.unwrap()), vec![a2.clone(), b1.clone(), a1.clone()]);
    assert_eq!(ids(service.list(&student("mhs-a")).await.unwrap()), vec![a2.clone(), a1.clone()]);
    assert_eq!(ids(service.list(&advisor("dosen-1")).await.unwrap()), vec![a2, a1]);
    assert_eq!(ids(service.list(&advisor("dosen-2")).await.unwrap()), vec![b1]);
}

#[tokio::test]
async fn test_student_listing_is_scope_checked() {
    let campus = seeded_campus();
    let service = service_for(&campus);
    service.create(&student("mhs-a"), competition("A1", 10)).await.unwrap();

    let rows = service.list_for_student(&advisor("dosen-1"), "stu-a", Page::default()).await.unwrap();
    assert_eq!(rows.len(), 1);
    let err = service.list_for_student(&advisor("dosen-2"), "stu-a", Page::default()).await.unwrap_err();
    assert!(matches!(err, AchievementError::NotFoundOrForbidden(_)));
    let err = service.list_for_student(&student("mhs-b"), "stu-a", Page::default()).await.unwrap_err();
    assert!(matches!(err, AchievementError::NotFoundOrForbidden(_)));
}

#[tokio::test]
async fn test_only_students_with_profile_create() {
    let campus = seeded_campus();
    let service = service_for(&campus);

    let err = service.create(&advisor("dosen-1"), competition("X", 1)).await.unwrap_err();
    assert!(matches!(err, AchievementError::Forbidden(_)));
    let err = service.create(&student("ghost"), competition("X", 1)).await.unwrap_err();
    assert!(matches!(err, AchievementError::NotFoundOrForbidden(_)));
    assert_eq!(campus.detail_count(), 0);
}

#[tokio::test]
async fn test_create_is_compensated_when_reference_write_fails() {
    let campus = seeded_campus();
    campus.fail_reference_writes();
    let service = service_for(&campus);

    let err = service.create(&student("mhs-a"), competition("X", 10)).await.unwrap_err();
    assert!(matches!(err, AchievementError::StorageFailure(_)));
    assert_eq!(campus.detail_count(), 0);
    assert_eq!(campus.reference_count(), 0);
}

#[tokio::test]
async fn test_reference_without_detail_is_internal() {
    let campus = seeded_campus();
    let service = service_for(&campus);
    let owner = student("mhs-a");
    let id = service.create(&owner, competition("X", 10)).await.unwrap().id;
    campus.drop_detail_of(&id);

    let err = service.get(&owner, &id).await.unwrap_err();
    assert!(matches!(err, AchievementError::InternalConsistency(_)));
}
