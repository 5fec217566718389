use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::hdx::HdxError;

const HDX_DATE_FORMAT: &str = "%m/%d/%Y";

/// The period of time a dataset covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DatasetDate {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DatasetDate {
    /// Parse a dataset date.
    ///
    /// Accepts a bare year (covering the whole year), `YYYY-MM-DD`, `MM/DD/YYYY`,
    /// RFC 3339 timestamps and `start-end` ranges of these.
    pub fn parse(input: &str) -> Result<Self, HdxError> {
        let input = input.trim();

        if let Some(date) = Self::parse_single(input) {
            return Ok(date);
        }

        input
            .match_indices('-')
            .filter_map(|(index, _)| {
                let start = Self::parse_single(input[..index].trim())?;
                let end = Self::parse_single(input[index + 1..].trim())?;
                Some(Self {
                    start: start.start,
                    end: end.end,
                })
            })
            .find(|date| date.start <= date.end)
            .ok_or_else(|| HdxError::InvalidDatasetDate(input.into()))
    }

    fn parse_single(input: &str) -> Option<Self> {
        if input.len() == 4 && input.chars().all(|c| c.is_ascii_digit()) {
            let year = input.parse().ok()?;
            return Some(Self {
                start: NaiveDate::from_ymd_opt(year, 1, 1)?,
                end: NaiveDate::from_ymd_opt(year, 12, 31)?,
            });
        }

        NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(input, HDX_DATE_FORMAT))
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(input)
                    .ok()
                    .map(|datetime| datetime.date_naive())
            })
            .or_else(|| {
                NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S")
                    .ok()
                    .map(|datetime| datetime.date())
            })
            .map(|date| Self {
                start: date,
                end: date,
            })
    }
}

impl fmt::Display for DatasetDate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start.format(HDX_DATE_FORMAT))
        } else {
            write!(
                f,
                "{}-{}",
                self.start.format(HDX_DATE_FORMAT),
                self.end.format(HDX_DATE_FORMAT)
            )
        }
    }
}
