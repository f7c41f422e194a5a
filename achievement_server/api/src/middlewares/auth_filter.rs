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

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{http::header, web, Error, HttpMessage, ResponseError};
use account::AccountError;
use futures::future::{ready, LocalBoxFuture, Ready};
use jwt::Principal;
use log::{error, warn};
use std::task::{Context, Poll};
use crate::utils::app_state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Paths reachable without a bearer token.
const PUBLIC_PATHS: [&str; 2] = ["/api/v1/auth/login", "/api/v1/auth/refresh"];

/// Validates the bearer token and stores the resulting [`Principal`] in the request extensions.
pub struct AuthFilter;

impl<S, B> Transform<S, ServiceRequest> for AuthFilter
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthFilterMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthFilterMiddleware { service }))
    }
}

pub struct AuthFilterMiddleware<S> {
    service: S,
}

fn bearer_token(req: &ServiceRequest) -> Result<&str, AccountError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AccountError::Unauthorized("missing bearer token".to_string()))?;
    let value = value
        .to_str()
        .map_err(|_| AccountError::Unauthorized("Authorization header contains invalid characters".to_string()))?;
    value
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AccountError::Unauthorized("missing bearer token".to_string()))
}

fn authenticate(req: &ServiceRequest) -> Result<Principal, AccountError> {
    let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        error!("application state is not registered");
        AccountError::InternalError("application state is not registered".to_string())
    })?;
    let token = bearer_token(req)?;
    state.codec.validate(token).map_err(|e| {
        warn!("rejected token on {}: {}", req.path(), e);
        AccountError::from(e)
    })
}

impl<S, B> Service<ServiceRequest> for AuthFilterMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if PUBLIC_PATHS.iter().any(|path| *path == req.path()) {
            let fut = self.service.call(req);
            return Box::pin(async move { Ok(fut.await?.map_into_left_body()) });
        }
        match authenticate(&req) {
            Ok(principal) => {
                req.extensions_mut().insert(principal);
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            },
            Err(err) => {
                let response = req.into_response(err.error_response()).map_into_right_body();
                Box::pin(async move { Ok(response) })
            },
        }
    }
}
