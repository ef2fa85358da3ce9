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

use std::str::FromStr;

use jiff::Zoned;

use crate::Error;
use crate::ErrorKind;

/// The maximum length of a page suffix, reached by [`Paging::Second`]: `_YYYY_MM_DD_HH_mm_ss`.
pub const MAX_PAGE_LEN: usize = 20;

/// Defines how often a channel starts a new log file.
///
/// Each granularity adds its own calendar component, and every coarser one, to the file name:
///
/// ```text
/// logs/app.log                      Paging::None
/// logs/app_2025.log                 Paging::Year
/// logs/app_2025_04.log              Paging::Month
/// logs/app_2025_04_20.log           Paging::Day
/// logs/app_2025_04_20_12_07_01.log  Paging::Second
/// ```
#[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Paging {
    /// A single file, never rotated.
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "never"))]
    None,
    /// Yearly paging.
    #[cfg_attr(feature = "serde", serde(alias = "yearly"))]
    Year,
    /// Monthly paging.
    #[cfg_attr(feature = "serde", serde(alias = "monthly"))]
    Month,
    /// Daily paging, at 00:00 local time.
    #[cfg_attr(feature = "serde", serde(alias = "daily"))]
    Day,
    /// Hourly paging.
    #[cfg_attr(feature = "serde", serde(alias = "hourly"))]
    Hour,
    /// Minutely paging.
    #[cfg_attr(feature = "serde", serde(alias = "minutely"))]
    Minute,
    /// Paging every second.
    #[cfg_attr(feature = "serde", serde(alias = "secondly"))]
    Second,
}

impl Paging {
    /// Convert a raw paging code into a [`Paging`].
    ///
    /// Known codes are `0` (none), `1` (year), `3` (month), `4` (day), `5` (hour), `6` (minute)
    /// and `7` (second). The unassigned code `2` falls between year and month and pages by year.
    ///
    /// # Errors
    ///
    /// Return [`ErrorKind::PagingOutOfRange`] for any code outside `0..=7`.
    pub fn from_code(code: i32) -> Result<Paging, Error> {
        match code {
            0 => Ok(Paging::None),
            1 | 2 => Ok(Paging::Year),
            3 => Ok(Paging::Month),
            4 => Ok(Paging::Day),
            5 => Ok(Paging::Hour),
            6 => Ok(Paging::Minute),
            7 => Ok(Paging::Second),
            _ => Err(
                Error::new(ErrorKind::PagingOutOfRange, "paging code is out of range")
                    .with_context("code", code),
            ),
        }
    }

    /// The canonical raw code of this granularity.
    pub const fn code(self) -> i32 {
        match self {
            Paging::None => 0,
            Paging::Year => 1,
            Paging::Month => 3,
            Paging::Day => 4,
            Paging::Hour => 5,
            Paging::Minute => 6,
            Paging::Second => 7,
        }
    }

    /// Compute the page suffix of `now` for this granularity.
    ///
    /// The suffix is empty for [`Paging::None`].
    pub fn page(self, now: &Zoned) -> String {
        let components = [
            (Paging::Year, i32::from(now.year()), 4usize),
            (Paging::Month, i32::from(now.month()), 2),
            (Paging::Day, i32::from(now.day()), 2),
            (Paging::Hour, i32::from(now.hour()), 2),
            (Paging::Minute, i32::from(now.minute()), 2),
            (Paging::Second, i32::from(now.second()), 2),
        ];

        let mut page = String::with_capacity(MAX_PAGE_LEN);
        for (paging, value, width) in components {
            if self < paging {
                break;
            }
            page.push_str(&format!("_{value:0width$}"));
        }
        page
    }
}

impl TryFrom<i32> for Paging {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Paging::from_code(code)
    }
}

impl FromStr for Paging {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "never" => Ok(Paging::None),
            "year" | "yearly" => Ok(Paging::Year),
            "month" | "monthly" => Ok(Paging::Month),
            "day" | "daily" => Ok(Paging::Day),
            "hour" | "hourly" => Ok(Paging::Hour),
            "minute" | "minutely" => Ok(Paging::Minute),
            "second" | "secondly" => Ok(Paging::Second),
            _ => Err(
                Error::new(ErrorKind::PagingOutOfRange, "unknown paging granularity")
                    .with_context("value", s),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use jiff::Zoned;
    use jiff::tz::TimeZone;

    use super::*;

    #[test]
    fn test_page_per_granularity() {
        let now = Zoned::from_str("2025-04-20T12:07:01[UTC]").unwrap();

        assert_eq!(Paging::None.page(&now), "");
        assert_eq!(Paging::Year.page(&now), "_2025");
        assert_eq!(Paging::Month.page(&now), "_2025_04");
        assert_eq!(Paging::Day.page(&now), "_2025_04_20");
        assert_eq!(Paging::Hour.page(&now), "_2025_04_20_12");
        assert_eq!(Paging::Minute.page(&now), "_2025_04_20_12_07");
        assert_eq!(Paging::Second.page(&now), "_2025_04_20_12_07_01");
        assert_eq!(Paging::Second.page(&now).len(), MAX_PAGE_LEN);
    }

    #[test]
    fn test_page_zero_padding() {
        let now = Zoned::from_str("0987-01-02T03:04:05[UTC]").unwrap();
        assert_eq!(Paging::Second.page(&now), "_0987_01_02_03_04_05");
    }

    #[test]
    fn test_page_uses_zoned_local_fields() {
        // 23:30 UTC is already the next day at +08.
        let now = Zoned::from_str("2025-04-20T23:30:00+00:00[UTC]").unwrap();
        let local = now.with_time_zone(TimeZone::fixed(jiff::tz::offset(8)));
        assert_eq!(Paging::Day.page(&now), "_2025_04_20");
        assert_eq!(Paging::Day.page(&local), "_2025_04_21");
    }

    #[test]
    fn test_paging_codes() {
        for paging in [
            Paging::None,
            Paging::Year,
            Paging::Month,
            Paging::Day,
            Paging::Hour,
            Paging::Minute,
            Paging::Second,
        ] {
            assert_eq!(Paging::from_code(paging.code()).unwrap(), paging);
        }

        assert_eq!(Paging::try_from(2).unwrap(), Paging::Year);

        for code in [-1, 8, i32::MIN, i32::MAX] {
            let err = Paging::try_from(code).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::PagingOutOfRange);
        }
    }

    #[test]
    fn test_paging_from_str() {
        assert_eq!("daily".parse::<Paging>().unwrap(), Paging::Day);
        assert_eq!("Hour".parse::<Paging>().unwrap(), Paging::Hour);
        assert_eq!("NEVER".parse::<Paging>().unwrap(), Paging::None);

        let err = "fortnightly".parse::<Paging>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PagingOutOfRange);
        assert_eq!(err.context("value"), Some("fortnightly"));
    }
}
