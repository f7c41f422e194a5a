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
use std::path::{Path, PathBuf};
use log::debug;
use walkdir::{DirEntry, WalkDir};

/// Directories never searched for configuration files.
const SKIPPED_DIRS: [&str; 3] = ["target", "node_modules", "logs"];

/// Search the current working directory tree for `file_name` and return its absolute path.
pub fn find_file(file_name: &str) -> Result<PathBuf, String> {
    let current_dir = env::current_dir()
        .map_err(|e| format!("Failed to get current directory: {}", e))?;
    find_file_in(&current_dir, file_name)
}

/// Search `root` recursively for `file_name`, skipping build output and hidden directories.
pub fn find_file_in(root: &Path, file_name: &str) -> Result<PathBuf, String> {
    let root = root.canonicalize()
        .map_err(|e| format!("Failed to canonicalize path: {}", e))?;

    let walker = WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_skipped(e));
    for entry in walker.filter_map(|e| e.ok()) {
        let path = entry.path();
        if entry.file_type().is_file() && path.file_name() == Some(Path::new(file_name).as_os_str()) {
            debug!("found {} at {}", file_name, path.display());
            return path.canonicalize()
                .map_err(|e| format!("Failed to canonicalize file path: {}", e));
        }
    }

    Err(format!("File '{}' not found in {}", file_name, root.display()))
}

fn is_skipped(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref())
}
