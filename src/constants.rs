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

//! timestamp-writer Constants - Single source of truth for fixed values.
//!
//! Output location, message texts and exit codes are part of the observable
//! contract of the binary and must not drift between modules.

/// Output file and console messages
pub mod output {
    /// Output file, relative to the process working directory
    pub const FILE_NAME: &str = "current_time.txt";
    /// Prefix of the single line written to the output file
    pub const LINE_PREFIX: &str = "Current system time: ";
    /// Printed to stdout once the file has been written
    pub const SUCCESS_MESSAGE: &str = "File written successfully.";
    /// Fixed prefix of the stderr diagnostic when the output cannot be opened
    pub const OPEN_FAILURE_PREFIX: &str = "Error opening file";
}

/// Process exit codes
pub mod exit {
    pub const SUCCESS: u8 = 0;
    pub const OPEN_FAILURE: u8 = 1;
}

/// Diagnostic logging defaults
pub mod config {
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
    pub const DEFAULT_LOG_FORMAT: &str = "text";
}
