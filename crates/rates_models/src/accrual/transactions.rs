//! Dated transaction set.

use std::collections::BTreeMap;

use rates_core::types::RateError;

/// Signed cash flows keyed by 1-based day of month.
///
/// Days are unique and iteration is always in ascending day order,
/// regardless of the order entries were added in.
///
/// # Examples
///
/// ```
/// use rates_models::accrual::Transactions;
///
/// let txs = Transactions::new().with(21, -55_000.0).with(5, 17_000.0);
/// let days: Vec<u32> = txs.iter().map(|(day, _)| day).collect();
/// assert_eq!(days, vec![5, 21]);
/// assert_eq!(txs.net_flow(), -38_000.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Transactions {
    entries: BTreeMap<u32, f64>,
}

impl Transactions {
    /// Empty transaction set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transaction, replacing any existing entry on the same day.
    #[must_use]
    pub fn with(mut self, day: u32, amount: f64) -> Self {
        self.entries.insert(day, amount);
        self
    }

    /// Build from `(day, amount)` pairs in any order.
    ///
    /// # Errors
    ///
    /// `RateError::InvalidParameter` when a day appears twice.
    pub fn try_from_pairs<I>(pairs: I) -> Result<Self, RateError>
    where
        I: IntoIterator<Item = (u32, f64)>,
    {
        let mut entries = BTreeMap::new();
        for (day, amount) in pairs {
            if entries.insert(day, amount).is_some() {
                return Err(RateError::invalid(
                    "transactions",
                    format!("duplicate transaction on day {}", day),
                ));
            }
        }
        Ok(Self { entries })
    }

    /// `(day, amount)` pairs in ascending day order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.entries.iter().map(|(&day, &amount)| (day, amount))
    }

    /// Sum of all amounts.
    pub fn net_flow(&self) -> f64 {
        self.entries.values().sum()
    }

    /// Number of transactions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no transactions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check every day lies in `1..=days_in_month` and every amount is finite.
    pub fn validate(&self, days_in_month: u32) -> Result<(), RateError> {
        for (day, amount) in self.iter() {
            if day == 0 || day > days_in_month {
                return Err(RateError::invalid(
                    "transactions",
                    format!("day {} outside 1..={}", day, days_in_month),
                ));
            }
            RateError::ensure_finite("transaction_amount", amount)?;
        }
        Ok(())
    }

    /// Ordered pairs followed by a zero-amount sentinel on `days_in_month + 1`.
    ///
    /// The sentinel forces accrual through the last day of the month.
    ///
    /// ```
    /// use rates_models::accrual::Transactions;
    ///
    /// let txs = Transactions::new().with(30, 100.0).with(9, -25.0);
    /// assert_eq!(
    ///     txs.with_month_end_sentinel(30),
    ///     vec![(9, -25.0), (30, 100.0), (31, 0.0)]
    /// );
    /// ```
    pub fn with_month_end_sentinel(&self, days_in_month: u32) -> Vec<(u32, f64)> {
        self.iter()
            .chain(std::iter::once((days_in_month.saturating_add(1), 0.0)))
            .collect()
    }
}

impl FromIterator<(u32, f64)> for Transactions {
    /// Collect pairs; a later entry on the same day replaces an earlier one.
    fn from_iter<I: IntoIterator<Item = (u32, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
