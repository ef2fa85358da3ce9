// Copyright 2024 FastLabs Developers
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

//! Leveled line logging to a channel that pages its file by time.
//!
//! # Overview
//!
//! A [`Channel`] writes one line per call, in the shape
//!
//! ```text
//! 2025-04-20 10:00:00 |     INFO | count=5
//! ```
//!
//! to a file named `path + filename + page + extension`. The page suffix is derived from the
//! write time according to the channel's [`Paging`], so a daily channel named `app.log` writes to
//! `app_2025_04_20.log` today and to `app_2025_04_21.log` after midnight. The filenames `stdout`
//! and `stderr` select the standard streams, and a channel with no path, filename, or extension
//! discards every line.
//!
//! Nothing is buffered across calls: when a write returns, its line has been handed to the
//! operating system.
//!
//! # Examples
//!
//! Log to the standard output:
//!
//! ```
//! let mut channel = logforth_channel::Channel::stdout("\n").unwrap();
//! logforth_channel::info!(channel, "count={}", 5).unwrap();
//! ```
//!
//! Log to a file paged daily:
//!
//! ```
//! use logforth_channel::Channel;
//! use logforth_channel::Paging;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = format!("{}/", dir.path().display());
//!
//! let mut channel = Channel::builder()
//!     .path(path)
//!     .filename("app")
//!     .extension(".log")
//!     .line_space("\n")
//!     .paging(Paging::Day)
//!     .build()
//!     .unwrap();
//!
//! logforth_channel::warning!(channel, "disk usage at {:.1}%", 91.5).unwrap();
//! assert!(channel.filepath().unwrap().exists());
//! channel.close().unwrap();
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_docs)]

pub extern crate jiff;

mod channel;
mod error;
mod level;
mod macros;
mod paging;

pub mod clock;

#[cfg(feature = "bridge-log")]
pub mod bridge;
#[cfg(feature = "bridge-log")]
pub mod trap;

pub use self::channel::Channel;
pub use self::channel::ChannelBuilder;
pub use self::channel::ChannelConfig;
pub use self::channel::MAX_EXTENSION_LEN;
pub use self::channel::MAX_FILENAME_LEN;
pub use self::channel::MAX_LINE_SPACE_LEN;
pub use self::channel::MAX_PATH_LEN;
pub use self::clock::Clock;
pub use self::clock::ManualClock;
pub use self::error::Error;
pub use self::error::ErrorKind;
pub use self::level::Level;
pub use self::paging::MAX_PAGE_LEN;
pub use self::paging::Paging;

/// The version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
