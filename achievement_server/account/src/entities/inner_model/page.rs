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

use serde::Deserialize;

pub const DEFAULT_LIMIT: u64 = 50;
pub const MAX_LIMIT: u64 = 200;

/// Raw `limit` / `offset` / `q` query parameters of list endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub q: Option<String>,
}

/// Normalized list window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: u64,
    pub offset: u64,
}

impl Default for Page {
    fn default() -> Self {
        Self { limit: DEFAULT_LIMIT, offset: 0 }
    }
}

impl Page {
    /// A missing limit or one outside `1..=max_limit` becomes `default_limit`;
    /// a missing or negative offset becomes 0.
    pub fn normalize(limit: Option<i64>, offset: Option<i64>, default_limit: u64, max_limit: u64) -> Self {
        let limit = match limit {
            Some(l) if l >= 1 && (l as u64) <= max_limit => l as u64,
            _ => default_limit,
        };
        let offset = offset.filter(|o| *o > 0).map(|o| o as u64).unwrap_or(0);
        Self { limit, offset }
    }

    pub fn from_query(query: &PageQuery, default_limit: u64, max_limit: u64) -> Self {
        Self::normalize(query.limit, query.offset, default_limit, max_limit)
    }
}
