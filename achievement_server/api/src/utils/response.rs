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
use actix_web::HttpResponse;
use serde::Serialize;
use serde_json::json;

/// `{"status": "success", "data": ...}` with 200.
pub fn success<T: Serialize>(data: T) -> HttpResponse {
    success_with(StatusCode::OK, data)
}

pub fn created<T: Serialize>(data: T) -> HttpResponse {
    success_with(StatusCode::CREATED, data)
}

pub fn success_with<T: Serialize>(status: StatusCode, data: T) -> HttpResponse {
    HttpResponse::build(status).json(json!({
        "status": "success",
        "data": data,
    }))
}

pub async fn default_not_found_page() -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "status": "error",
        "message": "resource not found",
    }))
}
