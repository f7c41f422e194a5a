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
use log::error;
use openssl::hash::MessageDigest;
use openssl::memcmp;
use openssl::pkcs5::pbkdf2_hmac;
use openssl::rand::rand_bytes;
use crate::error::account_error::AccountError;

const SCHEME: &str = "pbkdf2_sha256";
const SALT_LEN: usize = 16;
const KEY_LEN: usize = 32;

/// One-way password digests.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plain: &str) -> Result<String, AccountError>;

    /// Malformed digests never verify.
    fn verify(&self, digest: &str, plain: &str) -> bool;
}

/// PBKDF2-HMAC-SHA256 with a random salt, encoded as
/// `pbkdf2_sha256$<iterations>$<salt base64>$<key base64>`.
#[derive(Debug, Clone)]
pub struct Pbkdf2Hasher {
    iterations: usize,
}

impl Pbkdf2Hasher {
    pub fn new(iterations: usize) -> Self {
        Self { iterations }
    }

    fn derive(plain: &str, salt: &[u8], iterations: usize) -> Result<Vec<u8>, AccountError> {
        let mut key = vec![0u8; KEY_LEN];
        pbkdf2_hmac(plain.as_bytes(), salt, iterations, MessageDigest::sha256(), &mut key).map_err(|e| {
            error!("pbkdf2 derivation failed: {}", e);
            AccountError::InternalError(e.to_string())
        })?;
        Ok(key)
    }
}

impl PasswordHasher for Pbkdf2Hasher {
    fn hash(&self, plain: &str) -> Result<String, AccountError> {
        let mut salt = [0u8; SALT_LEN];
        rand_bytes(&mut salt).map_err(|e| AccountError::InternalError(e.to_string()))?;
        let key = Self::derive(plain, &salt, self.iterations)?;
        Ok(format!("{}${}${}${}", SCHEME, self.iterations, STANDARD.encode(salt), STANDARD.encode(key)))
    }

    fn verify(&self, digest: &str, plain: &str) -> bool {
        let parts: Vec<&str> = digest.split('$').collect();
        if parts.len() != 4 || parts[0] != SCHEME {
            return false;
        }
        let Ok(iterations) = parts[1].parse::<usize>() else {
            return false;
        };
        let (Ok(salt), Ok(expected)) = (STANDARD.decode(parts[2]), STANDARD.decode(parts[3])) else {
            return false;
        };
        if iterations == 0 || expected.len() != KEY_LEN {
            return false;
        }
        match Self::derive(plain, &salt, iterations) {
            Ok(actual) => memcmp::eq(&actual, &expected),
            Err(_) => false,
        }
    }
}
