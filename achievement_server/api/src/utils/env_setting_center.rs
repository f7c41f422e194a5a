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

use std::env;
#[allow(unused_imports)]
use env_config_parse::find_file;

/// Loads the environment file for the current build.
///
/// Debug builds read `.env.dev` found under the working directory, packaged builds read
/// `/etc/achievement_server/.env.rpm`. Variables already set in the process win.
pub fn load_env() {
    #[cfg(feature = "rpm_build")]
    {
        if let Err(e) = dotenv::from_filename("/etc/achievement_server/.env.rpm") {
            eprintln!("failed to load /etc/achievement_server/.env.rpm: {}", e);
        }
    }
    #[cfg(not(feature = "rpm_build"))]
    {
        let env_file = find_file(".env.dev")
            .map(|file| file.to_string_lossy().to_string())
            .unwrap_or_else(|_| "./.env.dev".to_string());
        if dotenv::from_filename(&env_file).is_err() {
            dotenv::dotenv().ok();
        }
    }
}

pub fn get_env_by_key(key: &str) -> Result<String, String> {
    env::var(key).map_err(|_| format!("{} must be set", key))
}

pub fn get_address() -> Result<String, String> {
    get_env_by_key("ACHIEVEMENT_ADDRESS")
}

pub fn get_env_value_or_default<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    env::var(key).ok().and_then(|s| s.parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_or_default() {
        env::set_var("ACHIEVEMENT_TEST_MAX_JSON", "2048");
        env::set_var("ACHIEVEMENT_TEST_BAD_NUMBER", "lots");
        assert_eq!(get_env_value_or_default("ACHIEVEMENT_TEST_MAX_JSON", 10usize), 2048);
        assert_eq!(get_env_value_or_default("ACHIEVEMENT_TEST_BAD_NUMBER", 10usize), 10);
        assert_eq!(get_env_value_or_default("ACHIEVEMENT_TEST_UNSET", 7u32), 7);
        assert!(get_env_by_key("ACHIEVEMENT_TEST_UNSET").is_err());
    }
}
