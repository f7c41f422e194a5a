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
use achievement::entities::request_body::achievement_req_body::{CreateAchievementReqBody, UpdateAchievementReqBody};
use achievement::entities::request_body::attachment_req_body::AttachmentReqBody;
use achievement::entities::request_body::reject_req_body::RejectReqBody;
use log::info;
use crate::middlewares::principal::{CurrentPrincipal, PermissionGate};
use crate::utils::app_state::AppState;
use crate::utils::response::{created, success};

pub async fn list(state: web::Data<AppState>, principal: CurrentPrincipal) -> Result<HttpResponse, Error> {
    PermissionGate::require(&principal.0, "achievement:read")?;
    let rows = state.achievements.list(&principal.0).await?;
    Ok(success(rows))
}

pub async fn create(
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    body: web::Json<CreateAchievementReqBody>,
) -> Result<HttpResponse, Error> {
    PermissionGate::require(&principal.0, "achievement:create")?;
    info!("user {} creates an achievement", principal.0.user_id);
    let view = state.achievements.create(&principal.0, body.into_inner()).await?;
    Ok(created(view))
}

pub async fn get(
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    path: web::Path<String>,
) -> Result<HttpResponse, Error> {
    PermissionGate::require(&principal.0, "achievement:read")?;
    let view = state.achievements.get(&principal.0, &path).await?;
    Ok(success(view))
}

pub async fn update(
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    path: web::Path<String>,
    body: web::Json<UpdateAchievementReqBody>,
) -> Result<HttpResponse, Error> {
    PermissionGate::require(&principal.0, "achievement:update")?;
    let view = state.achievements.update(&principal.0, &path, body.into_inner()).await?;
    Ok(success(view))
}

pub async fn delete(
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    path: web::Path<String>,
) -> Result<HttpResponse, Error> {
    PermissionGate::require(&principal.0, "achievement:delete")?;
    let change = state.achievements.delete(&principal.0, &path).await?;
    Ok(success(change))
}

pub async fn submit(
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    path: web::Path<String>,
) -> Result<HttpResponse, Error> {
    PermissionGate::require(&principal.0, "achievement:update")?;
    let change = state.achievements.submit(&principal.0, &path).await?;
    Ok(success(change))
}

pub async fn verify(
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    path: web::Path<String>,
) -> Result<HttpResponse, Error> {
    PermissionGate::require(&principal.0, "achievement:verify")?;
    let change = state.achievements.verify(&principal.0, &path).await?;
    Ok(success(change))
}

pub async fn reject(
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    path: web::Path<String>,
    body: web::Json<RejectReqBody>,
) -> Result<HttpResponse, Error> {
    PermissionGate::require(&principal.0, "achievement:verify")?;
    let change = state.achievements.reject(&principal.0, &path, body.into_inner()).await?;
    Ok(success(change))
}

pub async fn history(
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    path: web::Path<String>,
) -> Result<HttpResponse, Error> {
    PermissionGate::require(&principal.0, "achievement:read")?;
    let entries = state.achievements.history(&principal.0, &path).await?;
    Ok(success(entries))
}

pub async fn upload_attachment(
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    path: web::Path<String>,
    body: web::Json<AttachmentReqBody>,
) -> Result<HttpResponse, Error> {
    PermissionGate::require(&principal.0, "achievement:update")?;
    let attachment = state.achievements.upload_attachment(&principal.0, &path, body.into_inner()).await?;
    Ok(created(attachment))
}
