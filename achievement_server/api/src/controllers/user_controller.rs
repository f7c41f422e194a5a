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
use account::entities::inner_model::page::PageQuery;
use account::entities::request_body::user_req_body::{AssignRoleReqBody, CreateUserReqBody, UpdateUserReqBody};
use serde_json::json;
use crate::middlewares::principal::{CurrentPrincipal, PermissionGate};
use crate::utils::app_state::AppState;
use crate::utils::response::{created, success};

pub async fn list(
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, Error> {
    PermissionGate::require(&principal.0, "user:read")?;
    let search = query.q.clone().unwrap_or_default();
    let users = state.users.list(search.trim(), state.page(&query)).await?;
    Ok(success(users))
}

pub async fn get(
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    path: web::Path<String>,
) -> Result<HttpResponse, Error> {
    PermissionGate::require(&principal.0, "user:read")?;
    Ok(success(state.users.get(&path).await?))
}

pub async fn create(
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    body: web::Json<CreateUserReqBody>,
) -> Result<HttpResponse, Error> {
    PermissionGate::require(&principal.0, "user:create")?;
    Ok(created(state.users.create(body.into_inner()).await?))
}

pub async fn update(
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    path: web::Path<String>,
    body: web::Json<UpdateUserReqBody>,
) -> Result<HttpResponse, Error> {
    PermissionGate::require(&principal.0, "user:update")?;
    state.users.update(&path, body.into_inner()).await?;
    Ok(success(json!({"id": path.into_inner()})))
}

/// Soft delete: the account is deactivated.
pub async fn delete(
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    path: web::Path<String>,
) -> Result<HttpResponse, Error> {
    PermissionGate::require(&principal.0, "user:delete")?;
    state.users.deactivate(&path).await?;
    Ok(success(json!({"id": path.into_inner(), "is_active": false})))
}

pub async fn assign_role(
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    path: web::Path<String>,
    body: web::Json<AssignRoleReqBody>,
) -> Result<HttpResponse, Error> {
    PermissionGate::require(&principal.0, "user:assign_role")?;
    state.users.assign_role(&path, body.into_inner()).await?;
    Ok(success(json!({"id": path.into_inner()})))
}
