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

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::error::achievement_error::AchievementError;

/// JSON upload: the file travels base64 encoded in `content`.
#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct AttachmentReqBody {
    #[validate(length(min = 1, max = 255))]
    pub file_name: String,
    #[validate(length(min = 1, max = 100))]
    pub file_type: String,
    pub content: String,
}

/// A decoded upload ready for storage.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachmentUpload {
    pub file_name: String,
    pub file_type: String,
    pub bytes: Vec<u8>,
}

impl AttachmentReqBody {
    pub fn decode(self) -> Result<AttachmentUpload, AchievementError> {
        self.validate()?;
        let bytes = STANDARD
            .decode(self.content.trim())
            .map_err(|e| AchievementError::ValidationError(format!("content is not valid base64: {}", e)))?;
        Ok(AttachmentUpload {
            file_name: self.file_name.trim().to_string(),
            file_type: self.file_type.trim().to_lowercase(),
            bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode() {
        let body = AttachmentReqBody {
            file_name: " sertifikat.pdf ".into(),
            file_type: "Application/PDF".into(),
            content: STANDARD.encode(b"%PDF-1.4"),
        };
        let upload = body.decode().unwrap();
        assert_eq!(upload.file_name, "sertifikat.pdf");
        assert_eq!(upload.file_type, "application/pdf");
        assert_eq!(upload.bytes, b"%PDF-1.4");
    }

    #[test]
    fn test_decode_rejects_bad_base64() {
        let body = AttachmentReqBody { file_name: "a.pdf".into(), file_type: "application/pdf".into(), content: "***".into() };
        assert!(matches!(body.decode(), Err(AchievementError::ValidationError(_))));
    }
}
