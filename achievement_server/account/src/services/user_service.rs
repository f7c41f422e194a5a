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
use log::{error, info};
use sea_orm::DatabaseConnection;
use uuid::Uuid;
use validator::Validate;
use crate::entities::db_model::user_db_model;
use crate::entities::inner_model::page::Page;
use crate::entities::inner_model::user_view::UserView;
use crate::entities::request_body::user_req_body::{AssignRoleReqBody, CreateUserReqBody, UpdateUserReqBody};
use crate::error::account_error::AccountError;
use crate::repositories::role_repository::RoleRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::password_hasher::PasswordHasher;

/// Administrative user management.
pub struct UserService {
    db: Arc<DatabaseConnection>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(db: Arc<DatabaseConnection>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { db, hasher }
    }

    pub async fn list(&self, search: &str, page: Page) -> Result<Vec<UserView>, AccountError> {
        let users = UserRepository::list(&self.db, search, page).await?;
        let role_ids: Vec<String> = users.iter().map(|u| u.role_id.clone()).collect();
        let role_names: HashMap<String, String> = RoleRepository::find_by_ids(&self.db, role_ids)
            .await?
            .into_iter()
            .map(|r| (r.id, r.name))
            .collect();
        Ok(users
            .into_iter()
            .map(|u| {
                let role_name = role_names.get(&u.role_id).cloned().unwrap_or_default();
                UserView::from_model(u, role_name)
            })
            .collect())
    }

    pub async fn get(&self, id: &str) -> Result<UserView, AccountError> {
        let user = UserRepository::find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| AccountError::NotFound("user not found".to_string()))?;
        let role_name = RoleRepository::find_by_id(&self.db, &user.role_id)
            .await?
            .map(|r| r.name)
            .unwrap_or_default();
        Ok(UserView::from_model(user, role_name))
    }

    /// Creates an active user with the named role; the password is stored hashed.
    pub async fn create(&self, body: CreateUserReqBody) -> Result<UserView, AccountError> {
        let body = body.trimmed();
        body.validate()?;
        let role = RoleRepository::find_by_name(&self.db, &body.role_name)
            .await?
            .ok_or_else(|| AccountError::IncorrectFormat("role not found".to_string()))?;
        let password_hash = self.hasher.hash(&body.password)?;
        let now = chrono::Utc::now().timestamp_millis();
        let model = user_db_model::Model {
            id: Uuid::new_v4().to_string(),
            username: body.username,
            email: body.email,
            password_hash,
            full_name: body.full_name,
            role_id: role.id,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        UserRepository::insert(&self.db, model.clone()).await.map_err(|e| {
            error!("Failed to create user {}: {}", model.username, e);
            e
        })?;
        info!("user {} created with role {}", model.id, role.name);
        Ok(UserView::from_model(model, role.name))
    }

    pub async fn update(&self, id: &str, body: UpdateUserReqBody) -> Result<(), AccountError> {
        body.validate()?;
        let now = chrono::Utc::now().timestamp_millis();
        if UserRepository::update_fields(&self.db, id, &body, now).await? == 0 {
            return Err(AccountError::NotFound("user not found".to_string()));
        }
        info!("user {} updated", id);
        Ok(())
    }

    /// Users are never removed; deleting one marks it inactive.
    pub async fn deactivate(&self, id: &str) -> Result<(), AccountError> {
        let now = chrono::Utc::now().timestamp_millis();
        if UserRepository::deactivate(&self.db, id, now).await? == 0 {
            return Err(AccountError::NotFound("user not found".to_string()));
        }
        info!("user {} deactivated", id);
        Ok(())
    }

    pub async fn assign_role(&self, id: &str, body: AssignRoleReqBody) -> Result<(), AccountError> {
        body.validate()?;
        let role = RoleRepository::find_by_name(&self.db, body.role_name.trim())
            .await?
            .ok_or_else(|| AccountError::IncorrectFormat("role not found".to_string()))?;
        let now = chrono::Utc::now().timestamp_millis();
        if UserRepository::set_role(&self.db, id, &role.id, now).await? == 0 {
            return Err(AccountError::NotFound("user not found".to_string()));
        }
        info!("user {} assigned role {}", id, role.name);
        Ok(())
    }
}
