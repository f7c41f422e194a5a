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

use actix_web::{web, Error, HttpResponse};
use account::entities::request_body::auth_req_body::{LoginReqBody, RefreshReqBody};
use log::info;
use serde_json::json;
use crate::middlewares::principal::CurrentPrincipal;
use crate::utils::app_state::AppState;
use crate::utils::response::success;

pub async fn login(state: web::Data<AppState>, body: web::Json<LoginReqBody>) -> Result<HttpResponse, Error> {
    info!("receive login request");
    let response = state.auth.login(body.into_inner()).await?;
    Ok(success(response))
}

pub async fn refresh(state: web::Data<AppState>, body: web::Json<RefreshReqBody>) -> Result<HttpResponse, Error> {
    let response = state.auth.refresh(body.into_inner()).await?;
    Ok(success(response))
}

pub async fn profile(state: web::Data<AppState>, principal: CurrentPrincipal) -> Result<HttpResponse, Error> {
    let user = state.auth.profile(&principal.0.user_id).await?;
    Ok(success(user))
}

/// Tokens are stateless; the client simply drops them.
pub async fn logout(principal: CurrentPrincipal) -> HttpResponse {
    info!("user {} logged out", principal.0.user_id);
    success(json!({"message": "logged out"}))
}
