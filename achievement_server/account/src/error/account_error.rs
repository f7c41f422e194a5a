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
use jwt::TokenError;
use sea_orm::{DbErr, SqlErr};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AccountError {
    #[error("{0}")]
    IncorrectFormat(String),

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("{0}")]
    Unauthorized(String),

    #[error("user is inactive")]
    UserInactive,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal Server Error")]
    DbError(String),

    #[error("Internal Server Error")]
    InternalError(String),
}

impl AccountError {
    /// Get corresponding HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::IncorrectFormat(_) => StatusCode::BAD_REQUEST,
            AccountError::InvalidCredentials | AccountError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AccountError::UserInactive | AccountError::Forbidden(_) => StatusCode::FORBIDDEN,
            AccountError::NotFound(_) => StatusCode::NOT_FOUND,
            AccountError::Conflict(_) => StatusCode::CONFLICT,
            AccountError::DbError(_) | AccountError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl ResponseError for AccountError {
    fn status_code(&self) -> StatusCode {
        AccountError::status_code(self)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(AccountError::status_code(self)).json(json!({
            "status": "error",
            "message": self.message(),
        }))
    }
}

impl From<DbErr> for AccountError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                AccountError::Conflict("username or email already exists".to_string())
            },
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                AccountError::IncorrectFormat("referenced record does not exist".to_string())
            },
            _ => AccountError::DbError(err.to_string()),
        }
    }
}

impl From<ValidationErrors> for AccountError {
    fn from(err: ValidationErrors) -> Self {
        AccountError::IncorrectFormat(err.to_string())
    }
}

impl From<TokenError> for AccountError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::UnknownRole(role) => AccountError::Forbidden(format!("role not allowed: {}", role)),
            TokenError::IssueFailed(msg) => AccountError::InternalError(msg),
            other => AccountError::Unauthorized(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AccountError::IncorrectFormat("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AccountError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AccountError::UserInactive.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AccountError::NotFound("user not found".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AccountError::Conflict("dup".into()).status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = AccountError::from(DbErr::Custom("connection refused on 10.0.0.3".into()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Internal Server Error");
    }

    #[test]
    fn test_token_errors() {
        assert_eq!(AccountError::from(TokenError::Expired).status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AccountError::from(TokenError::UnknownRole("Guest".into())).status_code(),
            StatusCode::FORBIDDEN
        );
    }
}
