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

//! Time sources for channels.

use std::sync::Arc;
use std::sync::Mutex;
use std::time::SystemTime;

use jiff::Timestamp;
use jiff::Zoned;
use jiff::tz::TimeZone;

use crate::Error;
use crate::ErrorKind;

/// The time source of a channel.
#[derive(Debug, Clone, Default)]
pub enum Clock {
    /// The system wall clock, decomposed in the system time zone.
    #[default]
    DefaultClock,
    /// A clock whose time is set by hand.
    ManualClock(ManualClock),
}

impl Clock {
    /// Read the current time.
    ///
    /// # Errors
    ///
    /// Return [`ErrorKind::TimeGet`] if the system time cannot be represented as a timestamp, or
    /// if the system time zone cannot be resolved.
    pub fn now(&self) -> Result<Zoned, Error> {
        match self {
            Clock::DefaultClock => {
                let now = Timestamp::try_from(SystemTime::now()).map_err(|err| {
                    Error::new(ErrorKind::TimeGet, "failed to read system time").with_source(err)
                })?;
                let tz = TimeZone::try_system().map_err(|err| {
                    Error::new(ErrorKind::TimeGet, "failed to resolve system time zone")
                        .with_source(err)
                })?;
                Ok(now.to_zoned(tz))
            }
            Clock::ManualClock(clock) => Ok(clock.now()),
        }
    }
}

impl From<ManualClock> for Clock {
    fn from(clock: ManualClock) -> Self {
        Clock::ManualClock(clock)
    }
}

/// The time could be reset.
///
/// Clones share the same time, so a caller can keep one handle and move the time of a channel
/// that owns another.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Zoned>>,
}

impl ManualClock {
    /// Create a clock stopped at `now`.
    pub fn new(now: Zoned) -> ManualClock {
        ManualClock {
            now: Arc::new(Mutex::new(now)),
        }
    }

    /// The time this clock is stopped at.
    pub fn now(&self) -> Zoned {
        self.now.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Move the clock to `now`.
    pub fn set_now(&self, now: Zoned) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }
}
