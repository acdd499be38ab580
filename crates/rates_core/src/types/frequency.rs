//! Compounding and payment frequency enumeration.

use std::fmt;
use std::str::FromStr;

use super::error::RateError;

/// Compounding or payment frequency.
///
/// Defines how many times per year interest is compounded or an instalment
/// falls due.
///
/// # Examples
///
/// ```
/// use rates_core::types::Frequency;
///
/// let freq = Frequency::Quarterly;
/// assert_eq!(freq.periods_per_year(), 4);
/// assert_eq!(freq.name(), "Quarterly");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Frequency {
    /// Once per year.
    Annual,
    /// Twice per year.
    SemiAnnual,
    /// Four times per year.
    Quarterly,
    /// Twelve times per year.
    Monthly,
    /// 52 times per year.
    Weekly,
    /// 365 times per year.
    Daily,
    /// 730 times per year.
    TwiceDaily,
}

impl Frequency {
    /// All frequencies, from least to most frequent.
    pub const ALL: [Frequency; 7] = [
        Frequency::Annual,
        Frequency::SemiAnnual,
        Frequency::Quarterly,
        Frequency::Monthly,
        Frequency::Weekly,
        Frequency::Daily,
        Frequency::TwiceDaily,
    ];

    /// Returns the number of periods per year.
    ///
    /// # Examples
    ///
    /// ```
    /// use rates_core::types::Frequency;
    ///
    /// assert_eq!(Frequency::Annual.periods_per_year(), 1);
    /// assert_eq!(Frequency::SemiAnnual.periods_per_year(), 2);
    /// assert_eq!(Frequency::Monthly.periods_per_year(), 12);
    /// assert_eq!(Frequency::TwiceDaily.periods_per_year(), 730);
    /// ```
    #[inline]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
            Frequency::Weekly => 52,
            Frequency::Daily => 365,
            Frequency::TwiceDaily => 730,
        }
    }

    /// Looks up the frequency with exactly `n` periods per year.
    ///
    /// ```
    /// use rates_core::types::Frequency;
    ///
    /// assert_eq!(Frequency::from_periods_per_year(4), Some(Frequency::Quarterly));
    /// assert_eq!(Frequency::from_periods_per_year(3), None);
    /// ```
    pub fn from_periods_per_year(n: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.periods_per_year() == n)
    }

    /// Returns the standard name for this frequency.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Frequency::Annual => "Yearly",
            Frequency::SemiAnnual => "Half-yearly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
            Frequency::Weekly => "Weekly",
            Frequency::Daily => "Daily",
            Frequency::TwiceDaily => "Half-daily",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Frequency {
    type Err = RateError;

    /// Parses frequency from string (case-insensitive).
    ///
    /// Supported formats:
    /// - Annual: "annual", "yearly", "1y", "12m"
    /// - SemiAnnual: "semi-annual", "half-yearly", "6m"
    /// - Quarterly: "quarterly", "3m"
    /// - Monthly: "monthly", "1m"
    /// - Weekly: "weekly", "1w"
    /// - Daily: "daily", "1d"
    /// - TwiceDaily: "half-daily", "twice-daily", "12h"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "annual" | "yearly" | "1y" | "12m" => Ok(Frequency::Annual),
            "semiannual" | "halfyearly" | "6m" => Ok(Frequency::SemiAnnual),
            "quarterly" | "3m" => Ok(Frequency::Quarterly),
            "monthly" | "1m" => Ok(Frequency::Monthly),
            "weekly" | "1w" => Ok(Frequency::Weekly),
            "daily" | "1d" => Ok(Frequency::Daily),
            "halfdaily" | "twicedaily" | "12h" => Ok(Frequency::TwiceDaily),
            _ => Err(RateError::invalid(
                "frequency",
                format!("unknown frequency: {}", s),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_per_year() {
        assert_eq!(Frequency::Annual.periods_per_year(), 1);
        assert_eq!(Frequency::SemiAnnual.periods_per_year(), 2);
        assert_eq!(Frequency::Quarterly.periods_per_year(), 4);
        assert_eq!(Frequency::Monthly.periods_per_year(), 12);
        assert_eq!(Frequency::Weekly.periods_per_year(), 52);
        assert_eq!(Frequency::Daily.periods_per_year(), 365);
        assert_eq!(Frequency::TwiceDaily.periods_per_year(), 730);
    }

    #[test]
    fn test_all_is_ordered_by_frequency() {
        let counts: Vec<u32> = Frequency::ALL.iter().map(|f| f.periods_per_year()).collect();
        let mut sorted = counts.clone();
        sorted.sort_unstable();
        assert_eq!(counts, sorted);
    }

    #[test]
    fn test_from_periods_per_year_roundtrip() {
        for freq in Frequency::ALL {
            assert_eq!(
                Frequency::from_periods_per_year(freq.periods_per_year()),
                Some(freq)
            );
        }
        assert_eq!(Frequency::from_periods_per_year(0), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Frequency::Annual), "Yearly");
        assert_eq!(format!("{}", Frequency::SemiAnnual), "Half-yearly");
        assert_eq!(format!("{}", Frequency::TwiceDaily), "Half-daily");
    }

    #[test]
    fn test_from_str_valid() {
        assert_eq!("annual".parse::<Frequency>().unwrap(), Frequency::Annual);
        assert_eq!("Yearly".parse::<Frequency>().unwrap(), Frequency::Annual);
        assert_eq!(
            "semi-annual".parse::<Frequency>().unwrap(),
            Frequency::SemiAnnual
        );
        assert_eq!(
            "Half-yearly".parse::<Frequency>().unwrap(),
            Frequency::SemiAnnual
        );
        assert_eq!("3m".parse::<Frequency>().unwrap(), Frequency::Quarterly);
        assert_eq!("monthly".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert_eq!("weekly".parse::<Frequency>().unwrap(), Frequency::Weekly);
        assert_eq!("daily".parse::<Frequency>().unwrap(), Frequency::Daily);
        assert_eq!(
            "half_daily".parse::<Frequency>().unwrap(),
            Frequency::TwiceDaily
        );
    }

    #[test]
    fn test_from_str_invalid() {
        let err = "fortnightly".parse::<Frequency>().unwrap_err();
        assert_eq!(err.parameter(), "frequency");
        assert!("".parse::<Frequency>().is_err());
    }
}
