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

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use account::AccountError;
use sea_orm::DbErr;
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// Outcome of every failing achievement operation.
///
/// `NotFoundOrForbidden` deliberately covers both "does not exist" and "not yours"; callers
/// outside the owning scope can never tell the two apart.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AchievementError {
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFoundOrForbidden(String),

    #[error("{0}")]
    InvalidState(String),

    #[error("{0}")]
    ValidationError(String),

    #[error("Internal Server Error")]
    InternalConsistency(String),

    #[error("Internal Server Error")]
    StorageFailure(String),
}

impl AchievementError {
    pub fn not_found() -> Self {
        AchievementError::NotFoundOrForbidden("achievement not found".to_string())
    }

    /// Get corresponding HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AchievementError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AchievementError::Forbidden(_) => StatusCode::FORBIDDEN,
            AchievementError::NotFoundOrForbidden(_) => StatusCode::NOT_FOUND,
            AchievementError::InvalidState(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AchievementError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AchievementError::InternalConsistency(_) | AchievementError::StorageFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
        }
    }

    /// Get error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl ResponseError for AchievementError {
    fn status_code(&self) -> StatusCode {
        AchievementError::status_code(self)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(AchievementError::status_code(self)).json(json!({
            "status": "error",
            "message": self.message(),
        }))
    }
}

impl From<DbErr> for AchievementError {
    fn from(err: DbErr) -> Self {
        AchievementError::StorageFailure(err.to_string())
    }
}

impl From<ValidationErrors> for AchievementError {
    fn from(err: ValidationErrors) -> Self {
        AchievementError::ValidationError(err.to_string())
    }
}

impl From<std::io::Error> for AchievementError {
    fn from(err: std::io::Error) -> Self {
        AchievementError::StorageFailure(err.to_string())
    }
}

/// Directory lookups go through the account repositories.
impl From<AccountError> for AchievementError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::DbError(msg) | AccountError::InternalError(msg) => AchievementError::StorageFailure(msg),
            AccountError::NotFound(msg) => AchievementError::NotFoundOrForbidden(msg),
            AccountError::Forbidden(msg) => AchievementError::Forbidden(msg),
            AccountError::Unauthorized(msg) => AchievementError::Unauthorized(msg),
            other => AchievementError::ValidationError(other.message()),
        }
    }
}
