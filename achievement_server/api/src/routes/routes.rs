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

use crate::controllers::{
    achievement_controller, auth_controller, lecturer_controller, report_controller, student_controller,
    user_controller,
};
use crate::middlewares::auth_filter::AuthFilter;
use actix_web::web;

/// configure routes under `/api/v1`
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .wrap(AuthFilter)
            .service(
                web::scope("/auth")
                    .route("/login", web::post().to(auth_controller::login))
                    .route("/refresh", web::post().to(auth_controller::refresh))
                    .route("/profile", web::get().to(auth_controller::profile))
                    .route("/logout", web::post().to(auth_controller::logout)),
            )
            .service(
                web::scope("/achievements")
                    .route("", web::get().to(achievement_controller::list))
                    .route("", web::post().to(achievement_controller::create))
                    .route("/{id}", web::get().to(achievement_controller::get))
                    .route("/{id}", web::put().to(achievement_controller::update))
                    .route("/{id}", web::delete().to(achievement_controller::delete))
                    .route("/{id}/submit", web::post().to(achievement_controller::submit))
                    .route("/{id}/verify", web::post().to(achievement_controller::verify))
                    .route("/{id}/reject", web::post().to(achievement_controller::reject))
                    .route("/{id}/history", web::get().to(achievement_controller::history))
                    .route("/{id}/attachments", web::post().to(achievement_controller::upload_attachment)),
            )
            .service(
                web::scope("/users")
                    .route("", web::get().to(user_controller::list))
                    .route("", web::post().to(user_controller::create))
                    .route("/{id}", web::get().to(user_controller::get))
                    .route("/{id}", web::put().to(user_controller::update))
                    .route("/{id}", web::delete().to(user_controller::delete))
                    .route("/{id}/role", web::put().to(user_controller::assign_role)),
            )
            .service(
                web::scope("/students")
                    .route("", web::get().to(student_controller::list))
                    .route("/{id}", web::get().to(student_controller::get))
                    .route("/{id}/achievements", web::get().to(student_controller::achievements))
                    .route("/{id}/advisor", web::put().to(student_controller::set_advisor)),
            )
            .service(
                web::scope("/lecturers")
                    .route("", web::get().to(lecturer_controller::list))
                    .route("/{id}/advisees", web::get().to(lecturer_controller::advisees)),
            )
            .service(
                web::scope("/reports")
                    .route("/statistics", web::get().to(report_controller::statistics))
                    .route("/student/{id}", web::get().to(report_controller::student_report)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middlewares::default_filter::DefaultFilter;
    use crate::utils::app_state::AppState;
    use crate::utils::response::default_not_found_page;
    use account::entities::db_model::user_db_model;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use config_manager::manager::parse_config;
    use config_manager::types::context::ServerConfig;
    use jwt::Role;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
    use serde_json::{json, Value};
    use std::sync::Arc;

    const SECRET: &str = "route-test-secret";

    const CONFIG: &str = r#"
achievement_service:
  token:
    iss: student-achievement
    access_exist_time: 600
    refresh_exist_time: 3600
  attachment:
    upload_dir: target/test-uploads
    public_url_prefix: /uploads
    max_file_size: 1024
    allowed_file_types: [application/pdf]
  query:
    default_limit: 50
    max_limit: 200
  report:
    top_student_limit: 5
  password:
    pbkdf2_iterations: 1000
"#;

    fn state(db: DatabaseConnection) -> web::Data<AppState> {
        let config: ServerConfig = parse_config(CONFIG).unwrap();
        web::Data::new(AppState::build(&config, Arc::new(db), SECRET).unwrap())
    }

    fn empty_db() -> DatabaseConnection {
        MockDatabase::new(DatabaseBackend::Postgres).into_connection()
    }

    fn bearer(state: &web::Data<AppState>, role: Role, permissions: &[&str]) -> String {
        let permissions: Vec<String> = permissions.iter().map(|p| p.to_string()).collect();
        let token = state.codec.issue_access("user-1", role, &permissions).unwrap();
        format!("Bearer {}", token)
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(
                App::new()
                    .app_data($state.clone())
                    .wrap(DefaultFilter)
                    .configure(configure_routes)
                    .default_service(web::route().to(default_not_found_page)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_missing_token_is_unauthorized() {
        let state = state(empty_db());
        let app = app!(state);
        let req = test::TestRequest::get().uri("/api/v1/achievements").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(resp.headers().get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "error");
    }

    #[actix_web::test]
    async fn test_malformed_token_is_unauthorized() {
        let state = state(empty_db());
        let app = app!(state);
        let req = test::TestRequest::get()
            .uri("/api/v1/auth/profile")
            .insert_header((header::AUTHORIZATION, "Bearer not-a-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_missing_permission_is_forbidden_before_any_query() {
        let state = state(empty_db());
        let app = app!(state);
        let req = test::TestRequest::get()
            .uri("/api/v1/users")
            .insert_header((header::AUTHORIZATION, bearer(&state, Role::Student, &["achievement:read"])))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "missing permission user:read");
    }

    #[actix_web::test]
    async fn test_login_with_unknown_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<user_db_model::Model>::new()])
            .into_connection();
        let state = state(db);
        let app = app!(state);
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({"username": "ghost", "password": "secret-password"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "invalid username or password");
    }

    #[actix_web::test]
    async fn test_only_exact_auth_paths_are_public() {
        let state = state(empty_db());
        let app = app!(state);
        let req = test::TestRequest::post().uri("/api/v1/achievements/auth/login").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_logout_acknowledges() {
        let state = state(empty_db());
        let app = app!(state);
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/logout")
            .insert_header((header::AUTHORIZATION, bearer(&state, Role::Admin, &[])))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "success");
    }

    #[actix_web::test]
    async fn test_unknown_route_falls_through_to_not_found() {
        let state = state(empty_db());
        let app = app!(state);
        let req = test::TestRequest::get().uri("/nowhere").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "resource not found");
    }
}
