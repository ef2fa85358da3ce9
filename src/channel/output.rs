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

use std::fs::File;
use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::PathBuf;

use crate::Error;
use crate::ErrorKind;

/// The destination a channel is currently bound to.
///
/// Files are written without a user-space buffer, so every part of a line reaches the operating
/// system, or fails, on its own.
#[derive(Debug)]
pub(crate) enum Output {
    Stdout,
    Stderr,
    File {
        path: PathBuf,
        file: File,
    },
    #[cfg(test)]
    Faulty(FaultyFile),
}

impl Output {
    /// The standard stream selected by a reserved filename, if any.
    pub(crate) fn stream(filename: &str) -> Option<Output> {
        match filename {
            "stdout" => Some(Output::Stdout),
            "stderr" => Some(Output::Stderr),
            _ => None,
        }
    }

    pub(crate) fn open(path: PathBuf) -> Result<Output, Error> {
        match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => Ok(Output::File { path, file }),
            Err(err) => Err(Error::new(ErrorKind::FileOpen, "failed to open log file")
                .with_context("path", path.display())
                .with_source(err)),
        }
    }

    pub(crate) fn is_stream(&self) -> bool {
        matches!(self, Output::Stdout | Output::Stderr)
    }

    /// Write one part of a log line, returning the number of bytes written.
    pub(crate) fn write_part(&mut self, part: &'static str, s: &str) -> Result<usize, Error> {
        let result = match self {
            Output::Stdout => io::stdout().write_all(s.as_bytes()),
            Output::Stderr => io::stderr().write_all(s.as_bytes()),
            Output::File { file, .. } => file.write_all(s.as_bytes()),
            #[cfg(test)]
            Output::Faulty(file) => file.write_part(part, s),
        };
        result
            .map(|()| s.len())
            .map_err(|err| Error::from_io_error(err).with_context("part", part))
    }

    pub(crate) fn flush(&mut self) -> Result<(), Error> {
        let result = match self {
            Output::Stdout => io::stdout().flush(),
            Output::Stderr => io::stderr().flush(),
            Output::File { file, .. } => file.flush(),
            #[cfg(test)]
            Output::Faulty(_) => Ok(()),
        };
        result.map_err(|err| Error::from_io_error(err).with_context("part", "flush"))
    }

    /// Release the destination. Standard streams are left open.
    pub(crate) fn close(self) -> Result<(), Error> {
        match self {
            Output::Stdout | Output::Stderr => Ok(()),
            Output::File { path, mut file } => file.flush().map_err(|err| {
                Error::new(ErrorKind::FileClose, "failed to close log file")
                    .with_context("path", path.display())
                    .with_source(err)
            }),
            #[cfg(test)]
            Output::Faulty(file) => file.close().map_err(|err| {
                Error::new(ErrorKind::FileClose, "failed to close log file").with_source(err)
            }),
        }
    }
}

/// An in-memory file that fails on demand.
#[derive(Debug, Default)]
#[cfg(test)]
pub(crate) struct FaultyFile {
    pub(crate) written: std::sync::Arc<std::sync::Mutex<Vec<u8>>>,
    pub(crate) fail_part: Option<&'static str>,
    pub(crate) fail_close: bool,
}

#[cfg(test)]
impl FaultyFile {
    fn write_part(&mut self, part: &'static str, s: &str) -> io::Result<()> {
        if self.fail_part == Some(part) {
            return Err(io::Error::new(io::ErrorKind::StorageFull, "no space left"));
        }
        let mut written = self.written.lock().unwrap_or_else(|e| e.into_inner());
        written.extend_from_slice(s.as_bytes());
        Ok(())
    }

    fn close(self) -> io::Result<()> {
        if self.fail_close {
            return Err(io::Error::new(io::ErrorKind::Other, "device went away"));
        }
        Ok(())
    }
}
