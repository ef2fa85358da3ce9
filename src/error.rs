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
use std::io;

/// The kind of failure reported by a [`Channel`](crate::Channel).
///
/// Configuration kinds are only produced while building a channel; runtime kinds are produced by
/// the write and close paths.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The path exceeds [`MAX_PATH_LEN`](crate::MAX_PATH_LEN).
    PathTooLong,
    /// The filename exceeds [`MAX_FILENAME_LEN`](crate::MAX_FILENAME_LEN).
    FilenameTooLong,
    /// The extension exceeds [`MAX_EXTENSION_LEN`](crate::MAX_EXTENSION_LEN).
    ExtensionTooLong,
    /// The line terminator exceeds [`MAX_LINE_SPACE_LEN`](crate::MAX_LINE_SPACE_LEN).
    LineSpaceTooLong,
    /// The paging value is not one of the known granularities.
    PagingOutOfRange,
    /// The wall clock could not be read or decomposed into local calendar fields.
    TimeGet,
    /// The log file could not be opened for appending.
    FileOpen,
    /// Writing or flushing a part of the log line failed.
    FileWrite,
    /// Closing the log file failed.
    FileClose,
}

impl ErrorKind {
    /// The stable numeric code of this kind.
    ///
    /// Codes are negative so that callers can keep a single integer return channel where zero or
    /// a positive byte count means success.
    pub const fn code(self) -> i32 {
        match self {
            ErrorKind::PathTooLong => -1,
            ErrorKind::FilenameTooLong => -2,
            ErrorKind::ExtensionTooLong => -3,
            ErrorKind::LineSpaceTooLong => -4,
            ErrorKind::PagingOutOfRange => -5,
            ErrorKind::TimeGet => -6,
            ErrorKind::FileOpen => -7,
            ErrorKind::FileWrite => -8,
            ErrorKind::FileClose => -9,
        }
    }

    /// Whether this kind is raised while validating a channel configuration.
    pub const fn is_config(self) -> bool {
        matches!(
            self,
            ErrorKind::PathTooLong
                | ErrorKind::FilenameTooLong
                | ErrorKind::ExtensionTooLong
                | ErrorKind::LineSpaceTooLong
                | ErrorKind::PagingOutOfRange
        )
    }

    fn as_str(self) -> &'static str {
        match self {
            ErrorKind::PathTooLong => "PathTooLong",
            ErrorKind::FilenameTooLong => "FilenameTooLong",
            ErrorKind::ExtensionTooLong => "ExtensionTooLong",
            ErrorKind::LineSpaceTooLong => "LineSpaceTooLong",
            ErrorKind::PagingOutOfRange => "PagingOutOfRange",
            ErrorKind::TimeGet => "TimeGet",
            ErrorKind::FileOpen => "FileOpen",
            ErrorKind::FileWrite => "FileWrite",
            ErrorKind::FileClose => "FileClose",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The error struct of logforth-channel.
pub struct Error {
    kind: ErrorKind,
    message: String,
    sources: Vec<anyhow::Error>,
    context: Vec<(&'static str, String)>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if !self.context.is_empty() {
            write!(f, ", context: {{ ")?;
            write!(
                f,
                "{}",
                self.context
                    .iter()
                    .map(|(k, v)| format!("{k}: {v}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            )?;
            write!(f, " }}")?;
        }

        if !self.sources.is_empty() {
            write!(f, ", sources: [")?;
            for (i, source) in self.sources.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{source}")?;
            }
            write!(f, "]")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // If alternate has been specified, we will print like Debug.
        if f.alternate() {
            let mut de = f.debug_struct("Error");
            de.field("kind", &self.kind);
            de.field("message", &self.message);
            de.field("context", &self.context);
            de.field("sources", &self.sources);
            return de.finish();
        }

        write!(f, "{} ({}) => {}", self.kind, self.kind.code(), self.message)?;
        writeln!(f)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "Context:")?;
            for (k, v) in self.context.iter() {
                writeln!(f, "   {k}: {v}")?;
            }
        }
        if !self.sources.is_empty() {
            writeln!(f)?;
            writeln!(f, "Sources:")?;
            for source in self.sources.iter() {
                writeln!(f, "   {source:#}")?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.sources.first().map(|v| v.as_ref())
    }
}

impl Error {
    /// Create a new Error with error kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            sources: vec![],
            context: vec![],
        }
    }

    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The numeric code of this error; shorthand for `self.kind().code()`.
    pub fn code(&self) -> i32 {
        self.kind.code()
    }

    /// The message of this error, without context or sources.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Add one more context in error.
    pub fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.push((key, value.to_string()));
        self
    }

    /// Look up a context value by key.
    pub fn context(&self, key: &str) -> Option<&str> {
        self.context
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Add one more source in error.
    pub fn with_source(mut self, src: impl Into<anyhow::Error>) -> Self {
        self.sources.push(src.into());
        self
    }

    /// Return an iterator over all sources of this error.
    pub fn sources(&self) -> impl ExactSizeIterator<Item = &(dyn std::error::Error + 'static)> {
        self.sources.iter().map(|v| v.as_ref())
    }

    /// Constructor for a [`ErrorKind::FileWrite`] error from [`io::Error`].
    pub fn from_io_error(err: io::Error) -> Error {
        Error::new(ErrorKind::FileWrite, "failed to write log").with_source(err)
    }

    /// Constructor for a [`ErrorKind::FileWrite`] error from [`fmt::Error`].
    pub fn from_fmt_error(err: fmt::Error) -> Error {
        Error::new(ErrorKind::FileWrite, "failed to format log message").with_source(err)
    }
}
