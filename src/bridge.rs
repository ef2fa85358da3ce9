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

//! Bridge from the [`log`] crate facade to a [`Channel`].
//!
//! The channel is owned by a [`ChannelLogger`] behind a mutex, so records from any thread are
//! written one at a time.

use std::sync::Mutex;
use std::sync::MutexGuard;

use crate::Channel;
use crate::Level;
use crate::trap::DefaultTrap;
use crate::trap::Trap;

/// A [`log::Log`] implementation that writes every record to one channel.
#[derive(Debug)]
pub struct ChannelLogger {
    channel: Mutex<Channel>,
    trap: Box<dyn Trap>,
}

impl ChannelLogger {
    /// Create a logger that owns `channel`.
    pub fn new(channel: Channel) -> Self {
        Self {
            channel: Mutex::new(channel),
            trap: Box::new(DefaultTrap::default()),
        }
    }

    /// Set the trap for errors raised while writing records.
    ///
    /// Default to [`DefaultTrap`].
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    fn channel(&self) -> MutexGuard<'_, Channel> {
        self.channel.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl log::Log for ChannelLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        let level = Level::from(record.level());
        if let Err(err) = self.channel().log(level, *record.args()) {
            self.trap.trap(&err);
        }
    }

    fn flush(&self) {
        if let Err(err) = self.channel().flush() {
            self.trap.trap(&err);
        }
    }
}

/// Set up a [`ChannelLogger`] over `channel` as the global logger of the log crate.
///
/// # Errors
///
/// Return an error if the log crate global logger has already been set.
pub fn try_setup_log_crate(channel: Channel) -> Result<(), log::SetLoggerError> {
    log::set_boxed_logger(Box::new(ChannelLogger::new(channel)))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Set up a [`ChannelLogger`] over `channel` as the global logger of the log crate.
///
/// # Panics
///
/// Panic if the log crate global logger has already been set.
pub fn setup_log_crate(channel: Channel) {
    try_setup_log_crate(channel).expect(
        "logforth_channel::bridge::setup_log_crate must be called before the log crate global logger initialized",
    )
}
