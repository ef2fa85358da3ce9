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

use crate::Channel;
use crate::Error;
use crate::ErrorKind;
use crate::Paging;
use crate::clock::Clock;

/// The maximum length of a channel path, including its trailing separator.
pub const MAX_PATH_LEN: usize = 128;
/// The maximum length of a channel filename, without page suffix and extension.
pub const MAX_FILENAME_LEN: usize = 16;
/// The maximum length of a channel extension, including its leading dot.
pub const MAX_EXTENSION_LEN: usize = 4;
/// The maximum length of the characters appended after every message.
pub const MAX_LINE_SPACE_LEN: usize = 2;

/// The plain settings of a [`Channel`].
///
/// A missing field is left empty. With the `serde` feature enabled, this struct can be loaded from
/// any serde format:
///
/// ```json
/// { "path": "logs/", "filename": "app", "extension": ".log", "line_space": "\n", "paging": "day" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ChannelConfig {
    /// The directory or prefix of the log file; it must end with a separator to name a directory.
    pub path: Option<String>,
    /// The base name of the log file, or `stdout`/`stderr` to log to a standard stream.
    pub filename: Option<String>,
    /// The extension of the log file, including the leading dot.
    pub extension: Option<String>,
    /// The characters appended after every message, usually `"\n"`.
    pub line_space: Option<String>,
    /// How often a new log file is started.
    pub paging: Paging,
}

impl ChannelConfig {
    /// Check every text field against its maximum length.
    ///
    /// Fields are checked in the order path, filename, extension, line space; the first overflow
    /// is reported.
    ///
    /// # Errors
    ///
    /// Return [`ErrorKind::PathTooLong`], [`ErrorKind::FilenameTooLong`],
    /// [`ErrorKind::ExtensionTooLong`] or [`ErrorKind::LineSpaceTooLong`].
    pub fn validate(&self) -> Result<(), Error> {
        check_len(&self.path, "path", MAX_PATH_LEN, ErrorKind::PathTooLong)?;
        check_len(
            &self.filename,
            "filename",
            MAX_FILENAME_LEN,
            ErrorKind::FilenameTooLong,
        )?;
        check_len(
            &self.extension,
            "extension",
            MAX_EXTENSION_LEN,
            ErrorKind::ExtensionTooLong,
        )?;
        check_len(
            &self.line_space,
            "line_space",
            MAX_LINE_SPACE_LEN,
            ErrorKind::LineSpaceTooLong,
        )?;
        Ok(())
    }

    /// Validate the settings and build a [`Channel`] on the system clock.
    pub fn build(self) -> Result<Channel, Error> {
        ChannelBuilder::from(self).build()
    }
}

fn check_len(
    value: &Option<String>,
    field: &'static str,
    max: usize,
    kind: ErrorKind,
) -> Result<(), Error> {
    match value {
        Some(value) if value.len() > max => Err(Error::new(kind, format!("{field} is too long"))
            .with_context("field", field)
            .with_context("len", value.len())
            .with_context("max", max)),
        _ => Ok(()),
    }
}

/// A builder to configure and create a [`Channel`].
///
/// # Examples
///
/// ```
/// use logforth_channel::ChannelBuilder;
/// use logforth_channel::Paging;
///
/// let channel = ChannelBuilder::new()
///     .path("logs/")
///     .filename("app")
///     .extension(".log")
///     .line_space("\n")
///     .paging(Paging::Day)
///     .build()
///     .unwrap();
/// assert!(!channel.is_open());
/// ```
#[derive(Debug, Default)]
pub struct ChannelBuilder {
    config: ChannelConfig,
    clock: Clock,
}

impl From<ChannelConfig> for ChannelBuilder {
    fn from(config: ChannelConfig) -> Self {
        Self {
            config,
            clock: Clock::default(),
        }
    }
}

impl ChannelBuilder {
    /// Create a new channel builder with every field empty.
    ///
    /// Building it as is yields a null channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the path of the log file.
    ///
    /// The path is prepended to the filename as is; include the trailing separator.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.config.path = Some(path.into());
        self
    }

    /// Set the base name of the log file.
    ///
    /// `stdout` and `stderr` select the standard streams instead of a file.
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.config.filename = Some(filename.into());
        self
    }

    /// Set the extension of the log file, including the leading dot.
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.config.extension = Some(extension.into());
        self
    }

    /// Set the characters appended after every message.
    pub fn line_space(mut self, line_space: impl Into<String>) -> Self {
        self.config.line_space = Some(line_space.into());
        self
    }

    /// Set how often a new log file is started.
    ///
    /// Default to [`Paging::None`].
    pub fn paging(mut self, paging: Paging) -> Self {
        self.config.paging = paging;
        self
    }

    /// Set the time source.
    ///
    /// Default to [`Clock::DefaultClock`].
    pub fn clock(mut self, clock: impl Into<Clock>) -> Self {
        self.clock = clock.into();
        self
    }

    /// Build the [`Channel`].
    ///
    /// No file is opened and the clock is not read; that happens lazily on the first write.
    ///
    /// # Errors
    ///
    /// Return an error if any text field exceeds its maximum length. See
    /// [`ChannelConfig::validate`].
    pub fn build(self) -> Result<Channel, Error> {
        let ChannelBuilder { config, clock } = self;
        config.validate()?;

        let ChannelConfig {
            path,
            filename,
            extension,
            line_space,
            paging,
        } = config;

        Ok(Channel::new(
            path.unwrap_or_default(),
            filename.unwrap_or_default(),
            extension.unwrap_or_default(),
            line_space.unwrap_or_default(),
            paging,
            clock,
        ))
    }
}
