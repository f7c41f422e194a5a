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

use crate::entities::db_model::reference_db_model::Model;
use crate::entities::inner_model::achievement_view::HistoryEntry;
use crate::entities::status::AchievementStatus;

/// Rebuilds the status timeline of a reference from its timestamps.
///
/// Rows rejected before `rejected_at` was recorded fall back to `submitted_at`, then `created_at`.
pub fn reconstruct(reference: &Model) -> Vec<HistoryEntry> {
    let mut history = vec![HistoryEntry { status: AchievementStatus::Draft, at: reference.created_at }];
    if let Some(at) = reference.submitted_at {
        history.push(HistoryEntry { status: AchievementStatus::Submitted, at });
    }
    match reference.status {
        AchievementStatus::Verified => {
            if let Some(at) = reference.verified_at {
                history.push(HistoryEntry { status: AchievementStatus::Verified, at });
            }
        },
        AchievementStatus::Rejected => {
            let at = reference.rejected_at.or(reference.submitted_at).unwrap_or(reference.created_at);
            history.push(HistoryEntry { status: AchievementStatus::Rejected, at });
        },
        _ => {},
    }
    history
}
