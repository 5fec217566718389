use std::fmt;

use crate::hdx::HdxError;

/// The expected update frequency vocabulary of HDX.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateFrequency {
    AsNeeded,
    Never,
    Live,
    EveryDay,
    EveryWeek,
    EveryTwoWeeks,
    EveryMonth,
    EveryThreeMonths,
    EverySixMonths,
    EveryYear,
}

impl UpdateFrequency {
    /// Parse a frequency from its HDX label, a common alias or its day code.
    /// Matching ignores case and surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self, HdxError> {
        let frequency = match input.trim().to_lowercase().as_str() {
            "-2" | "as needed" | "adhoc" | "ad hoc" => Self::AsNeeded,
            "-1" | "never" => Self::Never,
            "0" | "live" => Self::Live,
            "1" | "every day" | "daily" => Self::EveryDay,
            "7" | "every week" | "weekly" => Self::EveryWeek,
            "14" | "every two weeks" | "every other week" | "fortnightly" => {
                Self::EveryTwoWeeks
            }
            "30" | "every month" | "monthly" => Self::EveryMonth,
            "90" | "every three months" | "quarterly" => Self::EveryThreeMonths,
            "180" | "every six months" | "semiannually" | "semiyearly" => Self::EverySixMonths,
            "365" | "every year" | "yearly" | "annually" | "annual" => Self::EveryYear,
            _ => return Err(HdxError::InvalidUpdateFrequency(input.into())),
        };

        Ok(frequency)
    }

    /// The number of days HDX stores for this frequency.
    pub fn days(self) -> i32 {
        match self {
            Self::AsNeeded => -2,
            Self::Never => -1,
            Self::Live => 0,
            Self::EveryDay => 1,
            Self::EveryWeek => 7,
            Self::EveryTwoWeeks => 14,
            Self::EveryMonth => 30,
            Self::EveryThreeMonths => 90,
            Self::EverySixMonths => 180,
            Self::EveryYear => 365,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::AsNeeded => "As needed",
            Self::Never => "Never",
            Self::Live => "Live",
            Self::EveryDay => "Every day",
            Self::EveryWeek => "Every week",
            Self::EveryTwoWeeks => "Every two weeks",
            Self::EveryMonth => "Every month",
            Self::EveryThreeMonths => "Every three months",
            Self::EverySixMonths => "Every six months",
            Self::EveryYear => "Every year",
        }
    }
}

impl fmt::Display for UpdateFrequency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
