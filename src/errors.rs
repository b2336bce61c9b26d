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

// Domain error types

use crate::constants::exit;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that terminate a run.
#[derive(Error, Debug)]
pub enum WriterError {
    /// The output file could not be created or truncated for writing.
    /// Display carries the fixed prefix followed by the OS reason.
    #[error("Error opening file: {source}")]
    OutputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WriterError {
    pub fn exit_code(&self) -> u8 {
        match self {
            WriterError::OutputOpen { .. } => exit::OPEN_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::output;
    use std::io;

    #[test]
    fn test_open_failure_message_has_prefix_and_reason() {
        let err = WriterError::OutputOpen {
            path: PathBuf::from(output::FILE_NAME),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied"),
        };
        let msg = err.to_string();

        assert!(msg.starts_with(output::OPEN_FAILURE_PREFIX));
        assert_eq!(msg, "Error opening file: Permission denied");
        assert_eq!(err.exit_code(), 1);
    }
}
