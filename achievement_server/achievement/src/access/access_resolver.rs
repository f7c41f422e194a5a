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
use jwt::{Principal, Role};
use log::warn;
use crate::error::achievement_error::AchievementError;
use crate::stores::directory_store::DirectoryStore;

/// The set of students whose achievements a principal may see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    All,
    Own { student_id: String },
    Advisees { lecturer_id: String, student_ids: Vec<String> },
}

impl Scope {
    pub fn name(&self) -> &'static str {
        match self {
            Scope::All => "all",
            Scope::Own { .. } => "student",
            Scope::Advisees { .. } => "advisees",
        }
    }

    pub fn covers(&self, student_id: &str) -> bool {
        match self {
            Scope::All => true,
            Scope::Own { student_id: own } => own == student_id,
            Scope::Advisees { student_ids, .. } => student_ids.iter().any(|id| id == student_id),
        }
    }

    /// Student filter for store scans; `None` means unrestricted.
    pub fn student_filter(&self) -> Option<Vec<String>> {
        match self {
            Scope::All => None,
            Scope::Own { student_id } => Some(vec![student_id.clone()]),
            Scope::Advisees { student_ids, .. } => Some(student_ids.clone()),
        }
    }
}

pub struct AccessResolver {
    directory: Arc<dyn DirectoryStore>,
}

impl AccessResolver {
    pub fn new(directory: Arc<dyn DirectoryStore>) -> Self {
        Self { directory }
    }

    pub async fn resolve_scope(&self, principal: &Principal) -> Result<Scope, AchievementError> {
        match principal.role {
            Role::Admin => Ok(Scope::All),
            Role::Student => {
                let student_id = self.directory.student_id_by_user(&principal.user_id).await?.ok_or_else(|| {
                    warn!("user {} has the student role but no student profile", principal.user_id);
                    AchievementError::NotFoundOrForbidden("student profile not found".to_string())
                })?;
                Ok(Scope::Own { student_id })
            },
            Role::Advisor => {
                let lecturer_id = self.directory.lecturer_id_by_user(&principal.user_id).await?.ok_or_else(|| {
                    warn!("user {} has the advisor role but no lecturer profile", principal.user_id);
                    AchievementError::NotFoundOrForbidden("lecturer profile not found".to_string())
                })?;
                let student_ids = self.directory.advisee_ids(&lecturer_id).await?;
                Ok(Scope::Advisees { lecturer_id, student_ids })
            },
        }
    }

    /// The Student row behind a student principal.
    pub async fn own_student_id(&self, principal: &Principal) -> Result<String, AchievementError> {
        if principal.role != Role::Student {
            return Err(AchievementError::Forbidden("only students can do this".to_string()));
        }
        match self.resolve_scope(principal).await? {
            Scope::Own { student_id } => Ok(student_id),
            _ => Err(AchievementError::not_found()),
        }
    }
}
