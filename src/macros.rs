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

//! Macros that format a message and write it to a [`Channel`](crate::Channel) at a fixed level.
//!
//! Each macro takes the channel first, then a format string and its arguments, with the same
//! syntax as [`format!`]. The macro evaluates to the `Result<usize, Error>` of the write.

/// Write a trace line to a channel.
///
/// # Examples
///
/// ```
/// let mut channel = logforth_channel::Channel::none();
/// logforth_channel::trace!(channel, "entering {}", "parse").unwrap();
/// ```
#[macro_export]
macro_rules! trace {
    ($channel:expr, $($arg:tt)+) => {
        $channel.trace(::std::format_args!($($arg)+))
    };
}

/// Write a debug line to a channel.
#[macro_export]
macro_rules! debug {
    ($channel:expr, $($arg:tt)+) => {
        $channel.debug(::std::format_args!($($arg)+))
    };
}

/// Write an info line to a channel.
///
/// # Examples
///
/// ```
/// let mut channel = logforth_channel::Channel::stdout("\n").unwrap();
/// let written = logforth_channel::info!(channel, "count={}", 5).unwrap();
/// assert_eq!(written, "2025-04-20 10:00:00 |     INFO | count=5\n".len());
/// ```
#[macro_export]
macro_rules! info {
    ($channel:expr, $($arg:tt)+) => {
        $channel.info(::std::format_args!($($arg)+))
    };
}

/// Write a warning line to a channel.
#[macro_export]
macro_rules! warning {
    ($channel:expr, $($arg:tt)+) => {
        $channel.warning(::std::format_args!($($arg)+))
    };
}

/// Write an error line to a channel.
#[macro_export]
macro_rules! error {
    ($channel:expr, $($arg:tt)+) => {
        $channel.error(::std::format_args!($($arg)+))
    };
}

/// Write a critical line to a channel.
#[macro_export]
macro_rules! critical {
    ($channel:expr, $($arg:tt)+) => {
        $channel.critical(::std::format_args!($($arg)+))
    };
}

/// Write a fatal line to a channel.
#[macro_export]
macro_rules! fatal {
    ($channel:expr, $($arg:tt)+) => {
        $channel.fatal(::std::format_args!($($arg)+))
    };
}
