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

//! Timestamp writer.
//!
//! Queries the clock, then creates or truncates the output file and writes a
//! single formatted line to it. Only the open step is fallible from the
//! caller's point of view; a failed write is logged and otherwise ignored.

use crate::constants::output;
use crate::errors::WriterError;
use crate::utils::time::{Clock, SystemClock, Timestamp};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

pub struct TimestampWriter<C: Clock = SystemClock> {
    path: PathBuf,
    clock: C,
}

impl TimestampWriter<SystemClock> {
    /// Writer for `current_time.txt` in the working directory, using the OS clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TimestampWriter<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TimestampWriter<C> {
    pub fn with_clock(clock: C) -> Self {
        Self::at_path(output::FILE_NAME, clock)
    }

    pub fn at_path(path: impl Into<PathBuf>, clock: C) -> Self {
        Self {
            path: path.into(),
            clock,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the current time and returns the timestamp that was recorded.
    pub fn run(&self) -> Result<Timestamp, WriterError> {
        let now = Timestamp::now(&self.clock);
        debug!(timestamp = %now, "Queried system clock");

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|source| WriterError::OutputOpen {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), "Opened output file");

        let line = now.to_line();
        if let Err(e) = file.write_all(line.as_bytes()) {
            warn!(path = %self.path.display(), error = %e, "Failed to write timestamp");
        }
        drop(file);

        info!(path = %self.path.display(), timestamp = %now, "Timestamp written");
        Ok(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::time::FixedClock;
    use chrono::{TimeZone, Utc};
    use std::fs;
    use tempfile::tempdir;

    fn fixed(second: u32) -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2024, 3, 5, 7, 9, second).unwrap())
    }

    #[test]
    fn test_default_path_is_relative_output_name() {
        let writer = TimestampWriter::new();
        assert_eq!(writer.path(), Path::new("current_time.txt"));
    }

    #[test]
    fn test_run_writes_single_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(output::FILE_NAME);

        let written = TimestampWriter::at_path(&path, fixed(1)).run().unwrap();

        assert_eq!(written.to_string(), "05-03-2024 07:09:01");
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Current system time: 05-03-2024 07:09:01\n"
        );
    }

    #[test]
    fn test_run_truncates_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(output::FILE_NAME);
        fs::write(&path, "stale line that is much longer than the new one\nsecond\n").unwrap();

        TimestampWriter::at_path(&path, fixed(1)).run().unwrap();
        TimestampWriter::at_path(&path, fixed(2)).run().unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Current system time: 05-03-2024 07:09:02\n"
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_write_failure_after_open_is_not_an_error() {
        // /dev/full opens fine and fails every write with ENOSPC
        let written = TimestampWriter::at_path("/dev/full", fixed(1)).run().unwrap();
        assert_eq!(written.second, 1);
    }

    #[test]
    fn test_directory_in_the_way_fails_to_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(output::FILE_NAME);
        fs::create_dir(&path).unwrap();

        let err = TimestampWriter::at_path(&path, fixed(1)).run().unwrap_err();

        assert!(matches!(err, WriterError::OutputOpen { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(path.is_dir());
    }

    #[test]
    fn test_missing_parent_fails_without_creating_anything() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join(output::FILE_NAME);

        let err = TimestampWriter::at_path(&path, fixed(1)).run().unwrap_err();

        assert!(err.to_string().starts_with("Error opening file: "));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
