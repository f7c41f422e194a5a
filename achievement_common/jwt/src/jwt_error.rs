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

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TokenError {
    #[error("missing or malformed credential")]
    Malformed,
    #[error("credential expired")]
    Expired,
    #[error("invalid credential: {0}")]
    Invalid(String),
    #[error("role not allowed: {0}")]
    UnknownRole(String),
    #[error("failed to issue credential: {0}")]
    IssueFailed(String),
}
