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

use serde::Serialize;

/// One group of an aggregation; `key` is `null` for documents without a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountByKey {
    pub key: Option<String>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopStudent {
    pub student_id: String,
    pub points: i64,
    pub total: u64,
}

/// Achievement statistics over the students a caller may see.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_per_type: Vec<CountByKey>,
    pub total_per_period: Vec<CountByKey>,
    pub top_students: Vec<TopStudent>,
    pub level_distribution: Vec<CountByKey>,
    /// `all`, `student` or `advisees`
    pub scope: String,
    pub filtered_students: usize,
}

impl Statistics {
    pub fn with_scope(mut self, scope: &str, filtered_students: usize) -> Self {
        self.scope = scope.to_string();
        self.filtered_students = filtered_students;
        self
    }

    /// Number of documents counted.
    pub fn total(&self) -> u64 {
        self.total_per_type.iter().map(|c| c.total).sum()
    }
}
