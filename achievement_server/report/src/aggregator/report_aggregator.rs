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

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use achievement::entities::db_model::detail_db_model;
use achievement::stores::detail_store::DetailStore;
use achievement::AchievementError;
use chrono::DateTime;
use log::info;
use serde_json::Value;
use crate::entities::statistics::{CountByKey, Statistics, TopStudent};

/// Counts keyed groups while remembering the order in which keys were first seen.
#[derive(Default)]
struct Tally {
    order: Vec<Option<String>>,
    totals: HashMap<Option<String>, u64>,
}

impl Tally {
    fn add(&mut self, key: Option<String>) {
        match self.totals.get_mut(&key) {
            Some(total) => *total += 1,
            None => {
                self.order.push(key.clone());
                self.totals.insert(key, 1);
            },
        }
    }

    /// Descending by total; equal totals keep first-seen order.
    fn by_total_desc(self) -> Vec<CountByKey> {
        let mut counts: Vec<CountByKey> = self
            .order
            .into_iter()
            .map(|key| {
                let total = self.totals.get(&key).copied().unwrap_or_default();
                CountByKey { key, total }
            })
            .collect();
        counts.sort_by(|a, b| b.total.cmp(&a.total));
        counts
    }
}

fn month_of(created_at_millis: i64) -> Option<String> {
    DateTime::from_timestamp_millis(created_at_millis).map(|t| t.format("%Y-%m").to_string())
}

fn level_of(details: &Value) -> Option<String> {
    match details.get("level") {
        None | Some(Value::Null) => None,
        Some(Value::String(level)) => Some(level.clone()),
        Some(other) => Some(other.to_string()),
    }
}

/// Aggregates documents in a single pass.
pub fn aggregate_documents(documents: &[detail_db_model::Model], top_limit: usize) -> Statistics {
    let mut per_type = Tally::default();
    let mut per_period: BTreeMap<Option<String>, u64> = BTreeMap::new();
    let mut levels = Tally::default();
    let mut student_order: Vec<String> = Vec::new();
    let mut students: HashMap<String, (i64, u64)> = HashMap::new();

    for doc in documents {
        per_type.add(Some(doc.achievement_type.clone()));
        *per_period.entry(month_of(doc.created_at)).or_default() += 1;
        levels.add(level_of(&doc.details));
        let entry = students.entry(doc.student_id.clone()).or_insert_with(|| {
            student_order.push(doc.student_id.clone());
            (0, 0)
        });
        entry.0 += i64::from(doc.points);
        entry.1 += 1;
    }

    let mut top_students: Vec<TopStudent> = student_order
        .into_iter()
        .map(|student_id| {
            let (points, total) = students.get(&student_id).copied().unwrap_or_default();
            TopStudent { student_id, points, total }
        })
        .collect();
    top_students.sort_by(|a, b| b.points.cmp(&a.points));
    top_students.truncate(top_limit);

    Statistics {
        total_per_type: per_type.by_total_desc(),
        total_per_period: per_period.into_iter().map(|(key, total)| CountByKey { key, total }).collect(),
        top_students,
        level_distribution: levels.by_total_desc(),
        scope: String::new(),
        filtered_students: 0,
    }
}

pub struct ReportAggregator {
    details: Arc<dyn DetailStore>,
    top_limit: usize,
}

impl ReportAggregator {
    pub fn new(details: Arc<dyn DetailStore>, top_limit: usize) -> Self {
        Self { details, top_limit }
    }

    /// Statistics for the documents of `filter`.
    ///
    /// An empty filter means every student when `empty_means_all` is set, and nobody otherwise.
    pub async fn aggregate(&self, filter: &[String], empty_means_all: bool) -> Result<Statistics, AchievementError> {
        if filter.is_empty() && !empty_means_all {
            return Ok(Statistics::default());
        }
        let student_ids = if filter.is_empty() { None } else { Some(filter.to_vec()) };
        let documents = self.details.scan(student_ids).await?;
        info!("aggregating {} achievement documents", documents.len());
        Ok(aggregate_documents(&documents, self.top_limit))
    }
}
