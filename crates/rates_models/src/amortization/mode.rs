//! Repayment convention enumeration.

use std::fmt;
use std::str::FromStr;

use rates_core::types::RateError;

/// How each instalment splits between principal and interest.
///
/// # Examples
///
/// ```
/// use rates_models::amortization::AmortizationMode;
///
/// let mode: AmortizationMode = "annuity".parse().unwrap();
/// assert_eq!(mode, AmortizationMode::Annuity);
/// assert_eq!(mode.to_string(), "Equal Total Payments (Annuity)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum AmortizationMode {
    /// Constant principal portion, declining total payment.
    EqualPrincipal,
    /// Constant total payment.
    Annuity,
}

impl AmortizationMode {
    /// Both modes, in display order.
    pub const ALL: [AmortizationMode; 2] =
        [AmortizationMode::EqualPrincipal, AmortizationMode::Annuity];

    /// Returns the descriptive name of this mode.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            AmortizationMode::EqualPrincipal => "Equal Principal Payments",
            AmortizationMode::Annuity => "Equal Total Payments (Annuity)",
        }
    }

    /// Short identifier used on the command line and in config files.
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            AmortizationMode::EqualPrincipal => "equal-principal",
            AmortizationMode::Annuity => "annuity",
        }
    }
}

impl fmt::Display for AmortizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for AmortizationMode {
    type Err = RateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "equalprincipal" | "constantprincipal" | "linear" => {
                Ok(AmortizationMode::EqualPrincipal)
            }
            "annuity" | "equalpayment" | "equaltotal" | "level" => Ok(AmortizationMode::Annuity),
            _ => Err(RateError::invalid(
                "mode",
                format!("unknown amortization mode: {}", s),
            )),
        }
    }
}
