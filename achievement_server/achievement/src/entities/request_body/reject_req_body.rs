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

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct RejectReqBody {
    /// Reason shown to the student; blank notes are refused
    #[serde(alias = "rejection_note")]
    #[validate(length(max = 2000))]
    pub note: String,
}

impl RejectReqBody {
    /// The trimmed note, or `None` when nothing but whitespace was sent.
    pub fn trimmed_note(&self) -> Option<&str> {
        let note = self.note.trim();
        if note.is_empty() {
            None
        } else {
            Some(note)
        }
    }
}
