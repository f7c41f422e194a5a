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
use account::entities::db_model::{lecturer_db_model, role_db_model, student_db_model, user_db_model};
use account::entities::inner_model::page::Page;
use account::entities::request_body::student_req_body::SetAdvisorReqBody;
use account::entities::request_body::user_req_body::{AssignRoleReqBody, CreateUserReqBody, UpdateUserReqBody};
use account::error::account_error::AccountError;
use account::services::student_service::StudentService;
use account::services::user_service::UserService;
use account::utils::password_hasher::{PasswordHasher, Pbkdf2Hasher};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

fn role(id: &str, name: &str) -> role_db_model::Model {
    role_db_model::Model { id: id.to_string(), name: name.to_string(), description: None, created_at: 0 }
}

fn user(id: &str, role_id: &str) -> user_db_model::Model {
    user_db_model::Model {
        id: id.to_string(),
        username: format!("{}-name", id),
        email: format!("{}@kampus.ac.id", id),
        password_hash: "x".to_string(),
        full_name: format!("Full {}", id),
        role_id: role_id.to_string(),
        is_active: true,
        created_at: 1,
        updated_at: 1,
    }
}

fn exec(rows_affected: u64) -> MockExecResult {
    MockExecResult { last_insert_id: 0, rows_affected }
}

fn create_body(role_name: &str) -> CreateUserReqBody {
    CreateUserReqBody {
        username: "siti".to_string(),
        email: "siti@kampus.ac.id".to_string(),
        password: "rahasia123".to_string(),
        full_name: "Siti Aminah".to_string(),
        role_name: role_name.to_string(),
    }
}

#[tokio::test]
async fn test_create_user_hashes_password() {
    let hasher = Arc::new(Pbkdf2Hasher::new(1000));
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![role("role-advisor", "Dosen Wali")]])
        .append_exec_results([exec(1)])
        .into_connection();
    let service = UserService::new(Arc::new(db), hasher);

    let created = service.create(create_body("Dosen Wali")).await.unwrap();
    assert_eq!(created.role_name, "Dosen Wali");
    assert_eq!(created.role_id, "role-advisor");
    assert!(created.is_active);
}

#[tokio::test]
async fn test_create_user_rejects_unknown_role_before_touching_db() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let service = UserService::new(Arc::new(db), Arc::new(Pbkdf2Hasher::new(1000)));

    let result = service.create(create_body("Guest")).await;
    assert!(matches!(result, Err(AccountError::IncorrectFormat(_))));
}

#[tokio::test]
async fn test_list_users_attaches_role_names() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user("u1", "r1"), user("u2", "r2")]])
        .append_query_results([vec![role("r1", "Admin"), role("r2", "Mahasiswa")]])
        .into_connection();
    let service = UserService::new(Arc::new(db), Arc::new(Pbkdf2Hasher::new(1000)));

    let users = service.list("", Page::default()).await.unwrap();
    let names: Vec<&str> = users.iter().map(|u| u.role_name.as_str()).collect();
    assert_eq!(names, vec!["Admin", "Mahasiswa"]);
}

#[tokio::test]
async fn test_update_and_deactivate_missing_user() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([exec(0), exec(0)])
        .into_connection();
    let service = UserService::new(Arc::new(db), Arc::new(Pbkdf2Hasher::new(1000)));

    let body = UpdateUserReqBody { username: None, email: None, full_name: Some("New".into()), is_active: None };
    assert!(matches!(service.update("missing", body).await, Err(AccountError::NotFound(_))));
    assert!(matches!(service.deactivate("missing").await, Err(AccountError::NotFound(_))));
}

#[tokio::test]
async fn test_assign_role() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![role("r1", "Admin")]])
        .append_exec_results([exec(1)])
        .into_connection();
    let service = UserService::new(Arc::new(db), Arc::new(Pbkdf2Hasher::new(1000)));

    let body = AssignRoleReqBody { role_name: "Admin".to_string() };
    assert!(service.assign_role("u1", body).await.is_ok());
}

#[tokio::test]
async fn test_set_advisor_requires_existing_lecturer() {
    let lecturer = lecturer_db_model::Model {
        id: "lec-1".into(),
        user_id: "u-lec".into(),
        lecturer_id: "198001".into(),
        department: "Informatika".into(),
        created_at: 0,
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<lecturer_db_model::Model>::new()])
        .append_query_results([vec![lecturer]])
        .append_exec_results([exec(1)])
        .into_connection();
    let service = StudentService::new(Arc::new(db));

    let missing = service.set_advisor("stu-1", SetAdvisorReqBody { advisor_id: "nope".into() }).await;
    assert_eq!(missing.unwrap_err(), AccountError::NotFound("advisor not found".to_string()));

    let assigned = service.set_advisor("stu-1", SetAdvisorReqBody { advisor_id: "lec-1".into() }).await;
    assert!(assigned.is_ok());
}

#[tokio::test]
async fn test_get_student_joins_account() {
    let student = student_db_model::Model {
        id: "stu-1".into(),
        user_id: "u1".into(),
        student_id: "2201001".into(),
        program_study: "Informatika".into(),
        academic_year: "2022".into(),
        advisor_id: None,
        created_at: 0,
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![student]])
        .append_query_results([vec![user("u1", "r1")]])
        .into_connection();
    let service = StudentService::new(Arc::new(db));

    let view = service.get("stu-1").await.unwrap();
    assert_eq!(view.full_name, "Full u1");
    assert_eq!(view.email, "u1@kampus.ac.id");
}

#[test]
fn test_hasher_is_usable_as_trait_object() {
    let hasher: Arc<dyn PasswordHasher> = Arc::new(Pbkdf2Hasher::new(1000));
    let digest = hasher.hash("pw").unwrap();
    assert!(hasher.verify(&digest, "pw"));
}
