//! Whether the results panel shows the detailed ROI figures or asks the
//! user to adjust their inputs. Decided from the [`RoiResult`] alone.

use crate::calculator::RoiResult;
use serde::{Deserialize, Serialize};

/// Payback must come in under a year for the detailed view.
pub const PAYBACK_THRESHOLD_MONTHS: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outlook {
    /// Positive net ROI with payback under the threshold.
    Detailed,
    /// Net ROI is zero, negative or undefined.
    Unprofitable,
    /// Profitable, but payback takes a year or more.
    SlowPayback,
}

impl Outlook {
    /// Comparisons are written so that NaN fails the positive checks and
    /// an infinite payback never passes the threshold.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn of(result: &RoiResult) -> Self {
        if result.net_roi > 0.0 && result.payback_period_months < PAYBACK_THRESHOLD_MONTHS {
            Outlook::Detailed
        } else if !(result.net_roi > 0.0) {
            Outlook::Unprofitable
        } else {
            Outlook::SlowPayback
        }
    }

    pub fn shows_detail(self) -> bool {
        self == Outlook::Detailed
    }

    /// Prompt shown in place of the detailed figures.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Outlook::Detailed => None,
            Outlook::Unprofitable => {
                Some("Adjust your inputs to see potential positive returns on investment")
            }
            Outlook::SlowPayback => {
                Some("Consider adjusting your metrics to achieve a faster payback period")
            }
        }
    }
}
