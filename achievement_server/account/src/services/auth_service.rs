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

use std::str::FromStr;
use std::sync::Arc;
use jwt::{Role, TokenCodec};
use log::{info, warn};
use sea_orm::DatabaseConnection;
use validator::Validate;
use crate::entities::db_model::user_db_model;
use crate::entities::inner_model::user_view::{AuthUser, LoginResponse};
use crate::entities::request_body::auth_req_body::{LoginReqBody, RefreshReqBody};
use crate::error::account_error::AccountError;
use crate::repositories::role_repository::RoleRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::password_hasher::PasswordHasher;

/// Login, credential refresh and profile lookup.
pub struct AuthService {
    db: Arc<DatabaseConnection>,
    codec: Arc<TokenCodec>,
    hasher: Arc<dyn PasswordHasher>,
}

impl AuthService {
    pub fn new(db: Arc<DatabaseConnection>, codec: Arc<TokenCodec>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { db, codec, hasher }
    }

    /// Authenticates by username or email.
    ///
    /// # Errors
    ///
    /// * `AccountError::InvalidCredentials` - Unknown user or wrong password.
    /// * `AccountError::UserInactive` - The account was deactivated.
    /// * `AccountError::Forbidden` - The account's role is not one the service knows.
    pub async fn login(&self, body: LoginReqBody) -> Result<LoginResponse, AccountError> {
        body.validate()?;
        let identifier = body.username.trim();
        let user = UserRepository::find_by_identifier(&self.db, identifier)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;
        if !user.is_active {
            warn!("login refused for inactive user {}", user.id);
            return Err(AccountError::UserInactive);
        }
        if !self.hasher.verify(&user.password_hash, &body.password) {
            return Err(AccountError::InvalidCredentials);
        }
        let response = self.issue_for(user).await?;
        info!("user {} logged in", response.user.id);
        Ok(response)
    }

    /// Exchanges a refresh token for a new credential pair, re-reading role and permissions.
    pub async fn refresh(&self, body: RefreshReqBody) -> Result<LoginResponse, AccountError> {
        body.validate()?;
        let user_id = self.codec.validate_refresh(body.refresh_token.trim())?;
        let user = UserRepository::find_by_id(&self.db, &user_id)
            .await?
            .ok_or_else(|| AccountError::Unauthorized("user no longer exists".to_string()))?;
        if !user.is_active {
            return Err(AccountError::UserInactive);
        }
        self.issue_for(user).await
    }

    pub async fn profile(&self, user_id: &str) -> Result<AuthUser, AccountError> {
        let user = UserRepository::find_by_id(&self.db, user_id)
            .await?
            .ok_or_else(|| AccountError::NotFound("user not found".to_string()))?;
        let (_, auth_user) = self.resolve_role(user).await?;
        Ok(auth_user)
    }

    async fn issue_for(&self, user: user_db_model::Model) -> Result<LoginResponse, AccountError> {
        let (role, auth_user) = self.resolve_role(user).await?;
        let pair = self.codec.issue_pair(&auth_user.id, role, &auth_user.permissions)?;
        Ok(LoginResponse {
            token: pair.token,
            refresh_token: pair.refresh_token,
            expires_in: pair.expires_in,
            user: auth_user,
        })
    }

    async fn resolve_role(&self, user: user_db_model::Model) -> Result<(Role, AuthUser), AccountError> {
        let role_model = RoleRepository::find_by_id(&self.db, &user.role_id)
            .await?
            .ok_or_else(|| AccountError::Forbidden("role not allowed".to_string()))?;
        let role = Role::from_str(&role_model.name)?;
        let permissions = RoleRepository::permission_names(&self.db, &role_model.id).await?;
        Ok((
            role,
            AuthUser {
                id: user.id,
                username: user.username,
                full_name: user.full_name,
                role: role_model.name,
                permissions,
            },
        ))
    }
}
