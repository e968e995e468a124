//! Partnership tiers and their pricing/rate configuration.
//!
//! The tier set is closed. Every lookup is an exhaustive `match`, so adding
//! a tier is a compile error until every table below knows about it.

use crate::{
    error::{CalcError, CalcResult},
    types::{Currency, Fraction},
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Revolution,
    Equity,
    Catalyst,
}

impl Tier {
    /// Display order: cheapest first.
    pub const ALL: [Tier; 3] = [Tier::Revolution, Tier::Equity, Tier::Catalyst];

    /// Stable machine key, also used in catalog files and on the CLI.
    pub fn key(self) -> &'static str {
        match self {
            Tier::Revolution => "revolution",
            Tier::Equity     => "equity",
            Tier::Catalyst   => "catalyst",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Tier::Revolution => "Revolution Partnership",
            Tier::Equity     => "Equity Partnership",
            Tier::Catalyst   => "Community Catalyst",
        }
    }

    /// Reference pricing. The built-in catalog is assembled from these.
    pub fn reference_config(self) -> TierConfig {
        match self {
            Tier::Revolution => TierConfig {
                monthly_cost:                 2997.0,
                churn_reduction_fraction:     0.30,
                time_reduction_fraction:      0.40,
                placement_commission_fraction: 0.25,
            },
            Tier::Equity => TierConfig {
                monthly_cost:                 3997.0,
                churn_reduction_fraction:     0.35,
                time_reduction_fraction:      0.45,
                placement_commission_fraction: 0.20,
            },
            Tier::Catalyst => TierConfig {
                monthly_cost:                 4997.0,
                churn_reduction_fraction:     0.40,
                time_reduction_fraction:      0.50,
                placement_commission_fraction: 0.15,
            },
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Tier {
    type Err = CalcError;

    /// Accepts the machine key in any case.
    fn from_str(s: &str) -> CalcResult<Self> {
        let wanted = s.trim();
        Tier::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CalcError::UnknownTier { name: s.to_string() })
    }
}

/// Rates and price for one tier. Immutable once a catalog is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierConfig {
    /// Subscription price per month.
    pub monthly_cost: Currency,
    /// Share of current churn loss the platform eliminates.
    pub churn_reduction_fraction: Fraction,
    /// Share of management cost saved.
    pub time_reduction_fraction: Fraction,
    /// Share of placement revenue retained by the platform (not paid out
    /// to the community).
    pub placement_commission_fraction: Fraction,
}

impl TierConfig {
    /// Check the catalog invariants: every fraction finite and in [0, 1],
    /// monthly cost finite and positive.
    pub fn validate(&self, tier: Tier) -> CalcResult<()> {
        let rates = [
            ("churn_reduction_fraction",      self.churn_reduction_fraction),
            ("time_reduction_fraction",       self.time_reduction_fraction),
            ("placement_commission_fraction", self.placement_commission_fraction),
        ];
        for (field, value) in rates {
            if !(0.0..=1.0).contains(&value) {
                return Err(CalcError::InvalidRate { tier, field, value });
            }
        }

        if !self.monthly_cost.is_finite() || self.monthly_cost <= 0.0 {
            return Err(CalcError::NonPositiveCost {
                tier,
                value: self.monthly_cost,
            });
        }

        Ok(())
    }
}
