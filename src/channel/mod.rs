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

use std::fmt;
use std::path::PathBuf;

use jiff::Zoned;

use crate::Error;
use crate::Level;
use crate::Paging;
use crate::clock::Clock;

mod builder;
mod output;

pub use self::builder::ChannelBuilder;
pub use self::builder::ChannelConfig;
pub use self::builder::MAX_EXTENSION_LEN;
pub use self::builder::MAX_FILENAME_LEN;
pub use self::builder::MAX_LINE_SPACE_LEN;
pub use self::builder::MAX_PATH_LEN;

use self::output::Output;

/// A logging destination that writes timestamped, leveled lines and pages its file by time.
///
/// The file of a channel is `path + filename + page + extension`, where the page suffix is
/// derived from the write time according to the channel's [`Paging`]. The file is opened lazily
/// on the first write and replaced whenever the page suffix changes.
///
/// Every line has the shape `YYYY-MM-DD HH:MM:SS <label><message><line space>`.
///
/// A channel takes `&mut self` for every write; share one across threads behind a mutex, or use
/// one channel per thread.
#[derive(Debug)]
pub struct Channel {
    path: String,
    filename: String,
    extension: String,
    line_space: String,
    paging: Paging,

    page: String,
    output: Option<Output>,
    clock: Clock,
}

impl Channel {
    pub(crate) fn new(
        path: String,
        filename: String,
        extension: String,
        line_space: String,
        paging: Paging,
        clock: Clock,
    ) -> Self {
        Self {
            path,
            filename,
            extension,
            line_space,
            paging,
            page: String::new(),
            output: None,
            clock,
        }
    }

    /// Returns a new builder.
    pub fn builder() -> ChannelBuilder {
        ChannelBuilder::new()
    }

    /// Initialize a channel from raw parts.
    ///
    /// A `None` field is left empty. `paging` is a raw paging code, see [`Paging::from_code`].
    ///
    /// # Errors
    ///
    /// Return the field-specific error of the first text field that exceeds its maximum length,
    /// or [`ErrorKind::PagingOutOfRange`](crate::ErrorKind::PagingOutOfRange) if `paging` is not
    /// a known code.
    pub fn init(
        path: Option<&str>,
        filename: Option<&str>,
        extension: Option<&str>,
        line_space: Option<&str>,
        paging: i32,
    ) -> Result<Channel, Error> {
        let config = ChannelConfig {
            path: path.map(str::to_owned),
            filename: filename.map(str::to_owned),
            extension: extension.map(str::to_owned),
            line_space: line_space.map(str::to_owned),
            paging: Paging::None,
        };
        config.validate()?;

        let paging = Paging::from_code(paging)?;
        ChannelConfig { paging, ..config }.build()
    }

    /// A null channel: every write succeeds without doing anything.
    pub fn none() -> Channel {
        Channel::new(
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            Paging::None,
            Clock::default(),
        )
    }

    /// A channel that writes to the standard output.
    pub fn stdout(line_space: impl Into<String>) -> Result<Channel, Error> {
        ChannelBuilder::new()
            .filename("stdout")
            .line_space(line_space)
            .build()
    }

    /// A channel that writes to the standard error.
    pub fn stderr(line_space: impl Into<String>) -> Result<Channel, Error> {
        ChannelBuilder::new()
            .filename("stderr")
            .line_space(line_space)
            .build()
    }

    /// A channel that writes to a file paged by `paging`.
    pub fn file(
        path: impl Into<String>,
        filename: impl Into<String>,
        extension: impl Into<String>,
        line_space: impl Into<String>,
        paging: Paging,
    ) -> Result<Channel, Error> {
        ChannelBuilder::new()
            .path(path)
            .filename(filename)
            .extension(extension)
            .line_space(line_space)
            .paging(paging)
            .build()
    }

    /// Whether this channel has no path, filename, or extension, and thus discards every write.
    pub fn is_null(&self) -> bool {
        self.path.is_empty() && self.filename.is_empty() && self.extension.is_empty()
    }

    /// Whether this channel targets the standard output or standard error.
    pub fn is_stream(&self) -> bool {
        Output::stream(&self.filename).is_some()
    }

    /// Whether this channel currently holds an open destination.
    pub fn is_open(&self) -> bool {
        self.output.is_some()
    }

    /// The paging granularity.
    pub fn paging(&self) -> Paging {
        self.paging
    }

    /// The page suffix of the current file; empty before the first paged write.
    pub fn page(&self) -> &str {
        &self.page
    }

    /// The characters appended after every message.
    pub fn line_space(&self) -> &str {
        &self.line_space
    }

    /// The full path of the file for the current page.
    ///
    /// Return `None` for a null channel or a standard stream.
    pub fn filepath(&self) -> Option<PathBuf> {
        if self.is_null() || self.is_stream() {
            return None;
        }
        Some(self.join_filepath())
    }

    fn join_filepath(&self) -> PathBuf {
        let Channel {
            path,
            filename,
            page,
            extension,
            ..
        } = self;
        PathBuf::from(format!("{path}{filename}{page}{extension}"))
    }

    /// Write a trace line.
    pub fn trace(&mut self, args: fmt::Arguments<'_>) -> Result<usize, Error> {
        self.log(Level::Trace, args)
    }

    /// Write a debug line.
    pub fn debug(&mut self, args: fmt::Arguments<'_>) -> Result<usize, Error> {
        self.log(Level::Debug, args)
    }

    /// Write an info line.
    pub fn info(&mut self, args: fmt::Arguments<'_>) -> Result<usize, Error> {
        self.log(Level::Info, args)
    }

    /// Write a warning line.
    pub fn warning(&mut self, args: fmt::Arguments<'_>) -> Result<usize, Error> {
        self.log(Level::Warning, args)
    }

    /// Write an error line.
    pub fn error(&mut self, args: fmt::Arguments<'_>) -> Result<usize, Error> {
        self.log(Level::Error, args)
    }

    /// Write a critical line.
    pub fn critical(&mut self, args: fmt::Arguments<'_>) -> Result<usize, Error> {
        self.log(Level::Critical, args)
    }

    /// Write a fatal line.
    pub fn fatal(&mut self, args: fmt::Arguments<'_>) -> Result<usize, Error> {
        self.log(Level::Fatal, args)
    }

    /// Write one line at `level`, paging the file first if the page suffix has changed.
    ///
    /// Return the number of bytes written, or `0` for a null channel.
    ///
    /// The line is written in parts (date, time, label, message, line space). If a part fails,
    /// the parts already written stay in the file.
    ///
    /// # Errors
    ///
    /// * [`ErrorKind::TimeGet`](crate::ErrorKind::TimeGet) if the clock cannot be read; nothing
    ///   is written.
    /// * [`ErrorKind::FileOpen`](crate::ErrorKind::FileOpen) if the file cannot be opened;
    ///   nothing is written.
    /// * [`ErrorKind::FileWrite`](crate::ErrorKind::FileWrite) if a part of the line cannot be
    ///   written.
    /// * [`ErrorKind::FileClose`](crate::ErrorKind::FileClose) if closing the previous page
    ///   failed. The line is still written to the new page; the error carries the byte count
    ///   in its `written` context.
    pub fn log(&mut self, level: Level, args: fmt::Arguments<'_>) -> Result<usize, Error> {
        if self.is_null() {
            return Ok(0);
        }

        let now = self.clock.now()?;

        let mut close_err = None;
        let mut output = match Output::stream(&self.filename) {
            Some(stream) => match self.output.take() {
                Some(output) if output.is_stream() => output,
                _ => stream,
            },
            None => {
                close_err = self.turn_page(&now).err();
                match self.output.take() {
                    Some(output) => output,
                    None => Output::open(self.join_filepath())
                        .map_err(|err| with_close_err(err, close_err.take()))?,
                }
            }
        };

        let result = write_line(&mut output, &self.line_space, level, &now, args);
        self.output = Some(output);

        let written = result.map_err(|err| with_close_err(err, close_err.take()))?;
        match close_err {
            Some(err) => Err(err.with_context("written", written)),
            None => Ok(written),
        }
    }

    /// Flush the open destination, if any.
    pub fn flush(&mut self) -> Result<(), Error> {
        match self.output.as_mut() {
            Some(output) => output.flush(),
            None => Ok(()),
        }
    }

    /// Release the open destination.
    ///
    /// Closing a channel that holds nothing is a no-op, so `close` can be called any number of
    /// times. Standard streams are only unbound, never closed. The channel stays usable: the next
    /// write opens the file of the current page again.
    ///
    /// # Errors
    ///
    /// Return [`ErrorKind::FileClose`](crate::ErrorKind::FileClose) if the file cannot be closed.
    /// The destination is released either way.
    pub fn close(&mut self) -> Result<(), Error> {
        match self.output.take() {
            Some(output) => output.close(),
            None => Ok(()),
        }
    }

    /// Recompute the page suffix; on change, release the file of the previous page.
    fn turn_page(&mut self, now: &Zoned) -> Result<(), Error> {
        if self.paging == Paging::None {
            return Ok(());
        }

        let page = self.paging.page(now);
        if page == self.page {
            return Ok(());
        }

        self.page = page;
        match self.output.take() {
            Some(output) => output.close(),
            None => Ok(()),
        }
    }
}

fn with_close_err(err: Error, close_err: Option<Error>) -> Error {
    match close_err {
        Some(close_err) => err.with_source(close_err),
        None => err,
    }
}

fn write_line(
    output: &mut Output,
    line_space: &str,
    level: Level,
    now: &Zoned,
    args: fmt::Arguments<'_>,
) -> Result<usize, Error> {
    let date = format!("{:04}-{:02}-{:02} ", now.year(), now.month(), now.day());
    let time = format!("{:02}:{:02}:{:02} ", now.hour(), now.minute(), now.second());

    let mut message = String::new();
    fmt::write(&mut message, args).map_err(Error::from_fmt_error)?;

    let mut written = 0;
    written += output.write_part("date", &date)?;
    written += output.write_part("time", &time)?;
    written += output.write_part("level", level.label())?;
    written += output.write_part("message", &message)?;
    written += output.write_part("line space", line_space)?;
    output.flush()?;

    Ok(written)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;
    use std::sync::Mutex;

    use tempfile::TempDir;

    use super::*;
    use crate::ErrorKind;
    use crate::ManualClock;
    use crate::channel::output::FaultyFile;

    fn minutely_channel(dir: &TempDir, clock: &ManualClock) -> Channel {
        ChannelBuilder::new()
            .path(format!("{}/", dir.path().display()))
            .filename("app")
            .extension(".log")
            .line_space("\n")
            .paging(Paging::Minute)
            .clock(clock.clone())
            .build()
            .unwrap()
    }

    #[test]
    fn test_turn_page_releases_previous_file() {
        let dir = TempDir::new().unwrap();
        let clock = ManualClock::new("2025-04-20T23:59:59[UTC]".parse().unwrap());
        let mut channel = minutely_channel(&dir, &clock);

        channel.info(format_args!("x")).unwrap();
        assert!(channel.output.is_some());
        assert_eq!(channel.page, "_2025_04_20_23_59");

        let now: Zoned = "2025-04-21T00:00:00[UTC]".parse().unwrap();
        channel.turn_page(&now).unwrap();
        assert!(channel.output.is_none());
        assert_eq!(channel.page, "_2025_04_21_00_00");

        clock.set_now(now.clone());
        channel.info(format_args!("y")).unwrap();
        assert!(channel.output.is_some());

        // unchanged page keeps the handle
        channel.turn_page(&now).unwrap();
        assert!(channel.output.is_some());
        assert_eq!(channel.page, "_2025_04_21_00_00");
    }

    #[test]
    fn test_unpaged_channel_keeps_empty_page() {
        let mut channel = Channel::init(Some("logs/"), Some("app"), Some(".log"), None, 0).unwrap();
        let now: Zoned = "2025-04-20T10:00:00[UTC]".parse().unwrap();
        channel.turn_page(&now).unwrap();
        assert_eq!(channel.page(), "");
        assert_eq!(channel.filepath(), Some(PathBuf::from("logs/app.log")));
    }

    #[test]
    fn test_failed_part_keeps_earlier_parts() {
        let dir = TempDir::new().unwrap();
        let clock = ManualClock::new("2025-04-20T10:00:00[UTC]".parse().unwrap());
        let mut channel = minutely_channel(&dir, &clock);
        channel.page = "_2025_04_20_10_00".to_string();

        let written = Arc::new(Mutex::new(Vec::new()));
        channel.output = Some(Output::Faulty(FaultyFile {
            written: written.clone(),
            fail_part: Some("message"),
            fail_close: false,
        }));

        let err = channel.info(format_args!("count={}", 5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileWrite);
        assert_eq!(err.context("part"), Some("message"));
        assert!(channel.is_open());

        let written = written.lock().unwrap();
        assert_eq!(
            String::from_utf8_lossy(&written),
            "2025-04-20 10:00:00 |     INFO | "
        );
    }

    #[test]
    fn test_rotation_close_failure_still_writes_line() {
        let dir = TempDir::new().unwrap();
        let clock = ManualClock::new("2025-04-20T10:00:59[UTC]".parse().unwrap());
        let mut channel = minutely_channel(&dir, &clock);
        channel.page = "_2025_04_20_10_00".to_string();
        channel.output = Some(Output::Faulty(FaultyFile {
            fail_close: true,
            ..FaultyFile::default()
        }));

        clock.set_now("2025-04-20T10:01:00[UTC]".parse().unwrap());
        let err = channel.info(format_args!("after")).unwrap_err();

        let line = "2025-04-20 10:01:00 |     INFO | after\n";
        assert_eq!(err.kind(), ErrorKind::FileClose);
        assert_eq!(err.context("written"), Some(line.len().to_string().as_str()));
        assert!(channel.is_open());
        assert_eq!(channel.page(), "_2025_04_20_10_01");

        let content = fs::read_to_string(dir.path().join("app_2025_04_20_10_01.log")).unwrap();
        assert_eq!(content, line);
    }

    #[test]
    fn test_rotation_close_failure_attached_to_open_failure() {
        let dir = TempDir::new().unwrap();
        let clock = ManualClock::new("2025-04-20T10:01:00[UTC]".parse().unwrap());
        let mut channel = ChannelBuilder::new()
            .path(format!("{}/missing/", dir.path().display()))
            .filename("app")
            .extension(".log")
            .paging(Paging::Minute)
            .clock(clock)
            .build()
            .unwrap();
        channel.page = "_2025_04_20_10_00".to_string();
        channel.output = Some(Output::Faulty(FaultyFile {
            fail_close: true,
            ..FaultyFile::default()
        }));

        let err = channel.info(format_args!("lost")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileOpen);
        assert_eq!(err.sources().len(), 2);
        assert!(
            err.sources()
                .any(|src| src.to_string().starts_with("failed to close log file"))
        );
        assert!(!channel.is_open());
        assert_eq!(channel.page(), "_2025_04_20_10_01");
    }

    #[test]
    fn test_close_failure_releases_handle() {
        let mut channel = Channel::init(Some("logs/"), Some("app"), Some(".log"), None, 0).unwrap();
        channel.output = Some(Output::Faulty(FaultyFile {
            fail_close: true,
            ..FaultyFile::default()
        }));

        let err = channel.close().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileClose);
        assert_eq!(err.code(), -9);
        assert!(!channel.is_open());
        channel.close().unwrap();
    }
}
