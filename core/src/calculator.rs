//! ROI derivation: the only piece of the calculator with business logic.
//!
//! Pure and total: no I/O, no validation, no error path. Zero or negative
//! inputs flow straight through, and a zero denominator yields an infinite
//! or NaN figure that is handed back to the caller unchanged.
//!
//! ORDER OF OPERATIONS is fixed (churn, time, recruitment, totals, payback)
//! and every product is evaluated left to right as written, so results stay
//! bit-identical to the reference figures.

use crate::{
    input::InputMetrics,
    tier::{Tier, TierConfig},
    types::{Currency, MONTHS_PER_YEAR},
};
use serde::{Deserialize, Serialize};

/// The six figures the results panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    /// Annual revenue kept by reducing churn.
    pub revenue_impact: Currency,
    /// Annual management cost saved.
    pub time_savings: Currency,
    /// Annual placement revenue after platform commission.
    pub recruitment_revenue: Currency,
    /// Total annual benefit minus annual subscription cost.
    pub net_roi: Currency,
    /// `net_roi` as a whole percentage of annual cost.
    pub roi_percentage: f64,
    /// Months to recoup one month's subscription, rounded up.
    pub payback_period_months: f64,
}

/// Every intermediate of the derivation. The result cards' calculation
/// details are built from this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiBreakdown {
    pub current_churn_loss:      Currency,
    pub new_churn_loss:          Currency,
    pub revenue_impact:          Currency,

    pub current_management_cost: Currency,
    pub time_savings:            Currency,

    pub annual_placements:       f64,
    pub total_placement_revenue: Currency,
    /// Part of placement revenue retained by the platform.
    pub platform_commission:     Currency,
    pub recruitment_revenue:     Currency,

    pub annual_cost:             Currency,
    pub total_benefit:           Currency,
    pub net_roi:                 Currency,
    pub roi_percentage:          f64,
    pub monthly_benefit:         Currency,
    pub payback_period_months:   f64,
}

impl RoiBreakdown {
    pub fn compute(inputs: &InputMetrics, config: &TierConfig) -> Self {
        // Churn
        let current_churn_loss = inputs.member_count
            * (inputs.churn_rate_percent / 100.0)
            * inputs.monthly_fee
            * MONTHS_PER_YEAR;
        let new_churn_loss = current_churn_loss * (1.0 - config.churn_reduction_fraction);
        let revenue_impact = current_churn_loss - new_churn_loss;

        // Management time
        let current_management_cost =
            inputs.management_hours_per_month * inputs.hourly_rate * MONTHS_PER_YEAR;
        let time_savings = current_management_cost * config.time_reduction_fraction;

        // Recruitment
        let annual_placements = inputs.monthly_placements * MONTHS_PER_YEAR;
        let total_placement_revenue = annual_placements * inputs.placement_fee;
        let recruitment_revenue =
            total_placement_revenue * (1.0 - config.placement_commission_fraction);
        let platform_commission =
            total_placement_revenue * config.placement_commission_fraction;

        // Totals
        let annual_cost = config.monthly_cost * MONTHS_PER_YEAR;
        let total_benefit = revenue_impact + time_savings + recruitment_revenue;
        let net_roi = total_benefit - annual_cost;
        let roi_percentage = (net_roi / annual_cost * 100.0).round();

        // Payback. The benefit is divided by 12 twice (annual -> monthly,
        // then again). Kept as-is; see DESIGN.md.
        let monthly_benefit = total_benefit / MONTHS_PER_YEAR;
        let payback_period_months =
            (config.monthly_cost / (monthly_benefit / MONTHS_PER_YEAR)).ceil();

        Self {
            current_churn_loss,
            new_churn_loss,
            revenue_impact,
            current_management_cost,
            time_savings,
            annual_placements,
            total_placement_revenue,
            platform_commission,
            recruitment_revenue,
            annual_cost,
            total_benefit,
            net_roi,
            roi_percentage,
            monthly_benefit,
            payback_period_months,
        }
    }

    pub fn result(&self) -> RoiResult {
        RoiResult {
            revenue_impact:        self.revenue_impact,
            time_savings:          self.time_savings,
            recruitment_revenue:   self.recruitment_revenue,
            net_roi:               self.net_roi,
            roi_percentage:        self.roi_percentage,
            payback_period_months: self.payback_period_months,
        }
    }
}

/// ROI for `tier` at reference pricing.
pub fn compute_roi(inputs: &InputMetrics, tier: Tier) -> RoiResult {
    compute_roi_with(inputs, &tier.reference_config())
}

/// ROI against an explicit tier configuration, e.g. one from a loaded
/// catalog.
pub fn compute_roi_with(inputs: &InputMetrics, config: &TierConfig) -> RoiResult {
    RoiBreakdown::compute(inputs, config).result()
}
