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
use crate::middlewares::principal::{CurrentPrincipal, PermissionGate};
use crate::utils::app_state::AppState;
use crate::utils::response::success;

pub async fn list(
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, Error> {
    PermissionGate::require(&principal.0, "lecturer:read")?;
    Ok(success(state.lecturers.list(state.page(&query)).await?))
}

pub async fn advisees(
    state: web::Data<AppState>,
    principal: CurrentPrincipal,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, Error> {
    PermissionGate::require(&principal.0, "student:read")?;
    Ok(success(state.lecturers.advisees(&path, state.page(&query)).await?))
}
