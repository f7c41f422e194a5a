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
use account::entities::inner_model::page::{Page, PageQuery};
use account::services::auth_service::AuthService;
use account::services::lecturer_service::LecturerService;
use account::services::student_service::StudentService;
use account::services::user_service::UserService;
use account::utils::password_hasher::{PasswordHasher, Pbkdf2Hasher};
use achievement::repositories::detail_db_repo::DetailDbRepo;
use achievement::repositories::directory_db_repo::DirectoryDbRepo;
use achievement::repositories::reference_db_repo::ReferenceDbRepo;
use achievement::services::achievement_service::{AchievementService, AttachmentPolicy};
use achievement::stores::detail_store::DetailStore;
use achievement::stores::directory_store::DirectoryStore;
use achievement::stores::object_storage::LocalFileStorage;
use config_manager::types::context::{QuerySettings, ServerConfig};
use jwt::TokenCodec;
use report::services::report_service::ReportService;
use sea_orm::DatabaseConnection;

/// Services shared by every worker through `web::Data`.
pub struct AppState {
    pub codec: Arc<TokenCodec>,
    pub auth: AuthService,
    pub users: UserService,
    pub students: StudentService,
    pub lecturers: LecturerService,
    pub achievements: AchievementService,
    pub reports: ReportService,
    query: QuerySettings,
}

impl AppState {
    pub fn build(config: &ServerConfig, db: Arc<DatabaseConnection>, jwt_secret: &str) -> Result<Self, String> {
        let service = &config.achievement_service;
        let codec = Arc::new(
            TokenCodec::new(
                jwt_secret,
                &service.token.iss,
                service.token.access_exist_time,
                service.token.refresh_exist_time,
            )
            .map_err(|e| e.to_string())?,
        );
        let hasher: Arc<dyn PasswordHasher> = Arc::new(Pbkdf2Hasher::new(service.password.pbkdf2_iterations));
        let details: Arc<dyn DetailStore> = Arc::new(DetailDbRepo::new(db.clone()));
        let directory: Arc<dyn DirectoryStore> = Arc::new(DirectoryDbRepo::new(db.clone()));
        let storage = Arc::new(LocalFileStorage::new(
            service.attachment.upload_dir.clone(),
            &service.attachment.public_url_prefix,
        ));
        let policy = AttachmentPolicy {
            max_file_size: service.attachment.max_file_size,
            allowed_file_types: service.attachment.allowed_file_types.clone(),
        };
        Ok(Self {
            auth: AuthService::new(db.clone(), codec.clone(), hasher.clone()),
            users: UserService::new(db.clone(), hasher),
            students: StudentService::new(db.clone()),
            lecturers: LecturerService::new(db.clone()),
            achievements: AchievementService::new(
                Arc::new(ReferenceDbRepo::new(db)),
                details.clone(),
                directory.clone(),
                storage,
                policy,
            ),
            reports: ReportService::new(details, directory, service.report.top_student_limit),
            codec,
            query: service.query.clone(),
        })
    }

    pub fn page(&self, query: &PageQuery) -> Page {
        Page::from_query(query, self.query.default_limit, self.query.max_limit)
    }
}
