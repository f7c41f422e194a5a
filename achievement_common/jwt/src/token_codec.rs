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

use std::time::{SystemTime, UNIX_EPOCH};
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use log::{debug, error};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::jwt_error::TokenError;
use crate::principal::{Principal, Role};

const REFRESH_TOKEN_TYPE: &str = "refresh";

#[derive(Debug, Serialize, Deserialize)]
struct AccessClaims {
    sub: String,
    role: String,
    permissions: Vec<String>,
    iss: String,
    iat: u64,
    exp: u64,
    jti: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct RefreshClaims {
    sub: String,
    #[serde(rename = "type")]
    token_type: String,
    iss: String,
    iat: u64,
    exp: u64,
    jti: String,
}

/// Access and refresh credentials handed out together at login and refresh.
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    pub token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub expires_in: u64,
}

/// Issues and validates HS256 credentials.
///
/// Access tokens carry `sub`, `role` and `permissions`; refresh tokens carry only `sub` and
/// `type = "refresh"`, so neither kind validates as the other.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    access_ttl: u64,
    refresh_ttl: u64,
}

impl TokenCodec {
    /// # Errors
    ///
    /// * `TokenError::IssueFailed` - If `secret` is empty.
    pub fn new(secret: &str, issuer: &str, access_ttl: u64, refresh_ttl: u64) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::IssueFailed("signing secret is empty".to_string()));
        }
        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer: issuer.to_string(),
            access_ttl,
            refresh_ttl,
        })
    }

    pub fn issue_access(&self, user_id: &str, role: Role, permissions: &[String]) -> Result<String, TokenError> {
        let now = Self::now()?;
        let claims = AccessClaims {
            sub: user_id.to_string(),
            role: role.as_str().to_string(),
            permissions: permissions.to_vec(),
            iss: self.issuer.clone(),
            iat: now,
            exp: now.saturating_add(self.access_ttl),
            jti: Uuid::new_v4().to_string(),
        };
        self.sign(&claims)
    }

    pub fn issue_refresh(&self, user_id: &str) -> Result<String, TokenError> {
        let now = Self::now()?;
        let claims = RefreshClaims {
            sub: user_id.to_string(),
            token_type: REFRESH_TOKEN_TYPE.to_string(),
            iss: self.issuer.clone(),
            iat: now,
            exp: now.saturating_add(self.refresh_ttl),
            jti: Uuid::new_v4().to_string(),
        };
        self.sign(&claims)
    }

    pub fn issue_pair(&self, user_id: &str, role: Role, permissions: &[String]) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            token: self.issue_access(user_id, role, permissions)?,
            refresh_token: self.issue_refresh(user_id)?,
            expires_in: self.access_ttl,
        })
    }

    /// Validate an access token and rebuild the caller's principal from it.
    ///
    /// # Errors
    ///
    /// * `TokenError::Expired` - If the token is past its `exp`.
    /// * `TokenError::Malformed` / `TokenError::Invalid` - If the token is not a valid access token.
    /// * `TokenError::UnknownRole` - If the role claim names no known role.
    pub fn validate(&self, token: &str) -> Result<Principal, TokenError> {
        let claims = decode::<AccessClaims>(token, &self.decoding_key, &self.validation())
            .map_err(Self::map_decode_error)?
            .claims;
        let role: Role = claims.role.parse()?;
        Ok(Principal::new(claims.sub, role, claims.permissions))
    }

    /// Validate a refresh token and return the user id it was issued to.
    pub fn validate_refresh(&self, token: &str) -> Result<String, TokenError> {
        let claims = decode::<RefreshClaims>(token, &self.decoding_key, &self.validation())
            .map_err(Self::map_decode_error)?
            .claims;
        if claims.token_type != REFRESH_TOKEN_TYPE {
            return Err(TokenError::Invalid("not a refresh token".to_string()));
        }
        Ok(claims.sub)
    }

    fn sign<T: Serialize>(&self, claims: &T) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            error!("Token generation failed: {}", e);
            TokenError::IssueFailed(e.to_string())
        })
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[self.issuer.as_str()]);
        validation
    }

    fn map_decode_error(e: jsonwebtoken::errors::Error) -> TokenError {
        debug!("token rejected: {}", e);
        match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
                TokenError::Malformed
            },
            _ => TokenError::Invalid(e.to_string()),
        }
    }

    fn now() -> Result<u64, TokenError> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .map_err(|e| TokenError::IssueFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TokenCodec {
        TokenCodec::new("test-secret", "student-achievement", 7200, 604800).unwrap()
    }

    #[test]
    fn test_access_token_yields_principal() {
        let codec = codec();
        let perms = vec!["achievement:create".to_string(), "achievement:read".to_string()];
        let token = codec.issue_access("user-1", Role::Student, &perms).unwrap();

        let principal = codec.validate(&token).unwrap();
        assert_eq!(principal.user_id, "user-1");
        assert_eq!(principal.role, Role::Student);
        assert!(principal.has_permission("achievement:create"));
    }

    #[test]
    fn test_refresh_and_access_tokens_are_not_interchangeable() {
        let codec = codec();
        let pair = codec.issue_pair("user-1", Role::Admin, &[]).unwrap();

        assert_eq!(codec.validate_refresh(&pair.refresh_token).unwrap(), "user-1");
        assert!(codec.validate(&pair.refresh_token).is_err());
        assert!(codec.validate_refresh(&pair.token).is_err());
    }

    #[test]
    fn test_wrong_secret_and_garbage_are_rejected() {
        let token = codec().issue_access("user-1", Role::Admin, &[]).unwrap();
        let other = TokenCodec::new("another-secret", "student-achievement", 7200, 604800).unwrap();
        assert!(matches!(other.validate(&token), Err(TokenError::Invalid(_))));
        assert_eq!(codec().validate("not-a-token"), Err(TokenError::Malformed));
    }

    #[test]
    fn test_expired_token() {
        let codec = codec();
        let now = TokenCodec::now().unwrap();
        let claims = AccessClaims {
            sub: "user-1".to_string(),
            role: "Admin".to_string(),
            permissions: vec![],
            iss: "student-achievement".to_string(),
            iat: now - 7300,
            exp: now - 100,
            jti: "j".to_string(),
        };
        let token = codec.sign(&claims).unwrap();
        assert_eq!(codec.validate(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_unknown_role_claim() {
        let codec = codec();
        let now = TokenCodec::now().unwrap();
        let claims = AccessClaims {
            sub: "user-1".to_string(),
            role: "Guest".to_string(),
            permissions: vec![],
            iss: "student-achievement".to_string(),
            iat: now,
            exp: now + 60,
            jti: "j".to_string(),
        };
        let token = codec.sign(&claims).unwrap();
        assert_eq!(codec.validate(&token), Err(TokenError::UnknownRole("Guest".to_string())));
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(TokenCodec::new("", "iss", 1, 1).is_err());
    }
}
