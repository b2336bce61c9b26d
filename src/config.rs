// Copyright 2026 BadCompany
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::constants::config::{DEFAULT_LOG_FORMAT, DEFAULT_LOG_LEVEL};

/// Diagnostic logging settings. Nothing here affects what gets written
/// or the exit status.
///
/// Settings are fixed at build time. The process reads no environment
/// variables, so `RUST_LOG` and friends have no effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
    pub log_format: String, // "json" or "text"
}

impl Config {
    pub fn json_logs(&self) -> bool {
        self.log_format == "json"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}
