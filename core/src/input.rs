//! Community metrics entered by the user, and the text-to-number coercion
//! applied at the input boundary.
//!
//! The calculator never validates. Anything that is not a finite number by
//! the time it leaves this module has already been turned into 0.

use crate::types::{Currency, Percent};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputMetrics {
    pub member_count:               f64,
    pub monthly_fee:                Currency,
    pub churn_rate_percent:         Percent,
    pub management_hours_per_month: f64,
    pub hourly_rate:                Currency,
    pub monthly_placements:         f64,
    pub placement_fee:              Currency,
}

impl Default for InputMetrics {
    /// The values the calculator opens with.
    fn default() -> Self {
        Self {
            member_count:               1000.0,
            monthly_fee:                50.0,
            churn_rate_percent:         5.0,
            management_hours_per_month: 40.0,
            hourly_rate:                50.0,
            monthly_placements:         10.0,
            placement_fee:              5000.0,
        }
    }
}

impl InputMetrics {
    pub fn zeroed() -> Self {
        Self {
            member_count:               0.0,
            monthly_fee:                0.0,
            churn_rate_percent:         0.0,
            management_hours_per_month: 0.0,
            hourly_rate:                0.0,
            monthly_placements:         0.0,
            placement_fee:              0.0,
        }
    }

    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::MemberCount             => self.member_count,
            InputField::MonthlyFee              => self.monthly_fee,
            InputField::ChurnRatePercent        => self.churn_rate_percent,
            InputField::ManagementHoursPerMonth => self.management_hours_per_month,
            InputField::HourlyRate              => self.hourly_rate,
            InputField::MonthlyPlacements       => self.monthly_placements,
            InputField::PlacementFee            => self.placement_fee,
        }
    }

    /// Copy with one field replaced. The value is stored as given.
    pub fn with(mut self, field: InputField, value: f64) -> Self {
        let slot = match field {
            InputField::MemberCount             => &mut self.member_count,
            InputField::MonthlyFee              => &mut self.monthly_fee,
            InputField::ChurnRatePercent        => &mut self.churn_rate_percent,
            InputField::ManagementHoursPerMonth => &mut self.management_hours_per_month,
            InputField::HourlyRate              => &mut self.hourly_rate,
            InputField::MonthlyPlacements       => &mut self.monthly_placements,
            InputField::PlacementFee            => &mut self.placement_fee,
        };
        *slot = value;
        self
    }

    /// Copy with one field replaced by coerced user text.
    pub fn with_raw(self, field: InputField, raw: &str) -> Self {
        self.with(field, coerce_numeric(raw))
    }
}

/// One editable field of [`InputMetrics`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    MemberCount,
    MonthlyFee,
    ChurnRatePercent,
    ManagementHoursPerMonth,
    HourlyRate,
    MonthlyPlacements,
    PlacementFee,
}

impl InputField {
    /// Form order.
    pub const ALL: [InputField; 7] = [
        InputField::MemberCount,
        InputField::MonthlyFee,
        InputField::ChurnRatePercent,
        InputField::ManagementHoursPerMonth,
        InputField::HourlyRate,
        InputField::MonthlyPlacements,
        InputField::PlacementFee,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InputField::MemberCount             => "Member Count",
            InputField::MonthlyFee              => "Monthly Fee",
            InputField::ChurnRatePercent        => "Current Churn Rate (%)",
            InputField::ManagementHoursPerMonth => "Monthly Management Hours",
            InputField::HourlyRate              => "Hourly Rate",
            InputField::MonthlyPlacements       => "Monthly Placements",
            InputField::PlacementFee            => "Average Placement Fee",
        }
    }
}

/// Turn raw field text into a number the way a browser number field does:
/// leading whitespace is skipped and the longest decimal prefix is parsed
/// ("12abc" is 12, ".5" is 0.5, "1e3x" is 1000). Empty, unparsable,
/// non-finite and negative-zero input all become 0.
pub fn coerce_numeric(raw: &str) -> f64 {
    let prefix = numeric_prefix(raw.trim_start());
    let value = prefix.parse::<f64>().unwrap_or(0.0);

    if !value.is_finite() {
        log::warn!("input: '{raw}' overflows to {value}, using 0");
        return 0.0;
    }
    if value == 0.0 {
        if !raw.trim().is_empty() && prefix.is_empty() {
            log::debug!("input: '{raw}' is not a number, using 0");
        }
        return 0.0;
    }
    value
}

/// Longest prefix of `s` matching `[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?`.
/// Returns "" when there is no mantissa digit.
fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    &s[..end]
}
