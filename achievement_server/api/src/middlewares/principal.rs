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

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use account::AccountError;
use futures::future::{ready, Ready};
use jwt::Principal;

/// Handler argument carrying the principal placed by `AuthFilter`.
#[derive(Debug, Clone)]
pub struct CurrentPrincipal(pub Principal);

impl FromRequest for CurrentPrincipal {
    type Error = AccountError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let principal = req.extensions().get::<Principal>().cloned();
        ready(principal.map(CurrentPrincipal).ok_or_else(|| AccountError::Unauthorized("missing credentials".to_string())))
    }
}

/// Permission check run by controllers before any service call.
pub struct PermissionGate;

impl PermissionGate {
    pub fn require(principal: &Principal, permission: &str) -> Result<(), AccountError> {
        if principal.has_permission(permission) {
            Ok(())
        } else {
            Err(AccountError::Forbidden(format!("missing permission {}", permission)))
        }
    }
}
