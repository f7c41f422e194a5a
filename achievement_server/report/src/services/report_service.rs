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

use std::sync::Arc;
use achievement::access::access_resolver::{AccessResolver, Scope};
use achievement::stores::detail_store::DetailStore;
use achievement::stores::directory_store::DirectoryStore;
use achievement::AchievementError;
use jwt::Principal;
use log::info;
use crate::aggregator::report_aggregator::ReportAggregator;
use crate::entities::statistics::Statistics;

pub struct ReportService {
    aggregator: ReportAggregator,
    resolver: AccessResolver,
}

impl ReportService {
    pub fn new(details: Arc<dyn DetailStore>, directory: Arc<dyn DirectoryStore>, top_limit: usize) -> Self {
        Self { aggregator: ReportAggregator::new(details, top_limit), resolver: AccessResolver::new(directory) }
    }

    /// Statistics over everything the caller may see.
    pub async fn statistics(&self, principal: &Principal) -> Result<Statistics, AchievementError> {
        let scope = self.resolver.resolve_scope(principal).await?;
        let filter = scope.student_filter().unwrap_or_default();
        let stats = self.aggregator.aggregate(&filter, scope == Scope::All).await?;
        info!("statistics for {} with scope {}", principal.user_id, scope.name());
        Ok(stats.with_scope(scope.name(), filter.len()))
    }

    /// Statistics of one student covered by the caller's scope.
    pub async fn student_report(&self, principal: &Principal, student_id: &str) -> Result<Statistics, AchievementError> {
        let scope = self.resolver.resolve_scope(principal).await?;
        if !scope.covers(student_id) {
            return Err(AchievementError::NotFoundOrForbidden("student not found".to_string()));
        }
        let stats = self.aggregator.aggregate(&[student_id.to_string()], false).await?;
        Ok(stats.with_scope("student", 1))
    }
}
