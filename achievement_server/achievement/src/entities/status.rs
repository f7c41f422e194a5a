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

use std::fmt;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle status of an achievement reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
pub enum AchievementStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "submitted")]
    Submitted,
    #[sea_orm(string_value = "verified")]
    Verified,
    #[sea_orm(string_value = "rejected")]
    Rejected,
    #[sea_orm(string_value = "deleted")]
    Deleted,
}

/// Events that move, or require, a particular status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    Submit,
    Delete,
    UpdateContent,
    AttachFile,
    Verify,
    Reject,
}

impl AchievementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementStatus::Draft => "draft",
            AchievementStatus::Submitted => "submitted",
            AchievementStatus::Verified => "verified",
            AchievementStatus::Rejected => "rejected",
            AchievementStatus::Deleted => "deleted",
        }
    }

    /// No event leaves a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, AchievementStatus::Verified | AchievementStatus::Rejected | AchievementStatus::Deleted)
    }

    /// The status reached by applying `event`, or `None` when the event is not allowed here.
    pub fn apply(self, event: LifecycleEvent) -> Option<AchievementStatus> {
        if self == event.required_status() {
            Some(event.target_status())
        } else {
            None
        }
    }
}

impl fmt::Display for AchievementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LifecycleEvent {
    pub fn required_status(self) -> AchievementStatus {
        match self {
            LifecycleEvent::Submit
            | LifecycleEvent::Delete
            | LifecycleEvent::UpdateContent
            | LifecycleEvent::AttachFile => AchievementStatus::Draft,
            LifecycleEvent::Verify | LifecycleEvent::Reject => AchievementStatus::Submitted,
        }
    }

    pub fn target_status(self) -> AchievementStatus {
        match self {
            LifecycleEvent::Submit => AchievementStatus::Submitted,
            LifecycleEvent::Delete => AchievementStatus::Deleted,
            LifecycleEvent::UpdateContent | LifecycleEvent::AttachFile => AchievementStatus::Draft,
            LifecycleEvent::Verify => AchievementStatus::Verified,
            LifecycleEvent::Reject => AchievementStatus::Rejected,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            LifecycleEvent::Submit => "submit",
            LifecycleEvent::Delete => "delete",
            LifecycleEvent::UpdateContent => "update",
            LifecycleEvent::AttachFile => "attach file to",
            LifecycleEvent::Verify => "verify",
            LifecycleEvent::Reject => "reject",
        }
    }
}
