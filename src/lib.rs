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

//! timestamp-writer: records the current UTC system time to disk.
//!
//! The library holds the whole pipeline (clock query, file open, formatting,
//! write) so the binary in `main.rs` stays a thin shell that only wires up
//! logging and maps the outcome to a process exit status.

pub mod config;
pub mod constants;
pub mod errors;
pub mod utils;
pub mod writer;

pub use errors::WriterError;
pub use utils::time::{Clock, FixedClock, SystemClock, Timestamp};
pub use writer::TimestampWriter;
