//! Presentation model: everything a front end needs to draw one frame,
//! already formatted.
//!
//! Built fresh from a [`UiState`] snapshot and the catalog on every event.
//! This is where the ROI figures are recomputed; nothing is cached between
//! frames.

use crate::{
    calculator::{RoiBreakdown, RoiResult},
    catalog::{Feature, TierCatalog},
    format::{format_currency, format_months, format_percent, format_plain, format_whole_percent},
    input::InputField,
    outlook::Outlook,
    state::{Layout, ResultCard, UiState},
    tier::{Tier, TierConfig},
    types::Fraction,
};
use serde::Serialize;

pub const TITLE: &str = "VoiceLoop ROI Calculator";
pub const DESKTOP_PROMPT: &str = "Open on desktop for full experience";
pub const COMPARISON_TITLE: &str = "Features & Value Stack";

#[derive(Debug, Clone, Serialize)]
pub struct Screen {
    pub title:          &'static str,
    pub tagline:        &'static str,
    pub layout:         Layout,
    pub selected_tier:  Tier,
    pub inputs:         Vec<InputRow>,
    pub tier_cards:     Vec<TierCardView>,
    /// Desktop only.
    pub comparison:     Option<ComparisonView>,
    /// Raw figures; JSON renders non-finite values as null.
    pub results:        RoiResult,
    /// Desktop only; empty when compact.
    pub result_cards:   Vec<ResultCardView>,
    pub outlook:        OutlookView,
    /// Compact only.
    pub quick_estimate: Option<QuickEstimate>,
    /// Compact only.
    pub desktop_prompt: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputRow {
    pub field: InputField,
    pub label: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct FeatureView {
    pub name:        String,
    pub value_label: String,
    pub bullets:     Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TierCardView {
    pub tier:        Tier,
    pub title:       &'static str,
    pub price_label: String,
    /// "$8,000/month value"; desktop only.
    pub value_label: Option<String>,
    pub highlights:  Vec<String>,
    pub selected:    bool,
    pub expanded:    bool,
    /// "View Full Features" / "Show Less"; desktop only.
    pub toggle_label: Option<&'static str>,
    /// Included features, listed only while expanded.
    pub features:    Vec<FeatureView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonView {
    pub title:    &'static str,
    pub summary:  String,
    pub expanded: bool,
    /// Every catalog feature, listed only while expanded.
    pub rows:     Vec<ComparisonRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRow {
    pub index:       usize,
    pub name:        String,
    pub value_label: String,
    pub included_in: Vec<&'static str>,
    /// Part of the selected tier; unavailable rows are drawn dimmed.
    pub available:   bool,
    pub expanded:    bool,
    pub bullets:     Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailLine {
    pub heading: &'static str,
    pub text:    String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultCardView {
    pub card:        ResultCard,
    pub title:       &'static str,
    pub value:       String,
    pub description: &'static str,
    pub flipped:     bool,
    /// Calculation details, listed only while flipped.
    pub details:     Vec<DetailLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutlookView {
    pub outlook:        Outlook,
    /// The next three are present only for [`Outlook::Detailed`].
    pub net_roi:        Option<String>,
    pub roi_percentage: Option<String>,
    pub payback:        Option<String>,
    pub message:        Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickEstimate {
    pub heading: &'static str,
    pub net_roi: String,
    pub note:    &'static str,
}

impl Screen {
    pub fn build(state: &UiState, catalog: &TierCatalog) -> Self {
        let config = catalog.config_for(state.selected_tier);
        let breakdown = RoiBreakdown::compute(&state.inputs, &config);
        let results = breakdown.result();
        let desktop = state.layout == Layout::Desktop;

        let fields: &[InputField] = if desktop {
            &InputField::ALL
        } else {
            &[InputField::MemberCount, InputField::MonthlyFee]
        };
        let inputs = fields
            .iter()
            .map(|&field| InputRow {
                field,
                label: field.label(),
                value: state.inputs.get(field),
            })
            .collect();

        let card_tiers: &[Tier] = if desktop { &Tier::ALL } else { &[Tier::Catalyst] };
        let tier_cards = card_tiers
            .iter()
            .map(|&tier| tier_card(state, catalog, tier))
            .collect();

        let result_cards = if desktop {
            ResultCard::ALL
                .iter()
                .map(|&card| result_card(state, &breakdown, &config, card))
                .collect()
        } else {
            Vec::new()
        };

        Self {
            title: TITLE,
            tagline: if desktop {
                "Discover the financial impact of our partnership tiers on your community's growth"
            } else {
                "Quick ROI estimation for your community"
            },
            layout: state.layout,
            selected_tier: state.selected_tier,
            inputs,
            tier_cards,
            comparison: desktop.then(|| comparison(state, catalog)),
            results,
            result_cards,
            outlook: outlook_view(&results),
            quick_estimate: (!desktop).then(|| QuickEstimate {
                heading: "Estimated Annual ROI",
                net_roi: format_currency(results.net_roi),
                note:    "Based on reduced churn and improved efficiency",
            }),
            desktop_prompt: (!desktop).then_some(DESKTOP_PROMPT),
        }
    }
}

pub fn value_label(monthly_value: f64) -> String {
    format!("{}/month value", format_currency(monthly_value))
}

fn feature_view(feature: &Feature) -> FeatureView {
    FeatureView {
        name:        feature.name.clone(),
        value_label: value_label(feature.monthly_value),
        bullets:     feature.description_bullets.clone(),
    }
}

fn tier_card(state: &UiState, catalog: &TierCatalog, tier: Tier) -> TierCardView {
    let entry = catalog.entry(tier);
    let desktop = state.layout == Layout::Desktop;
    let selected = state.selected_tier == tier;
    // Compact cards never expand.
    let expanded = desktop && state.expanded_tier_cards.contains(&tier);

    TierCardView {
        tier,
        title: tier.display_name(),
        price_label: entry.price_label.clone(),
        value_label: desktop.then(|| value_label(catalog.total_monthly_value(tier))),
        highlights: if desktop || selected {
            entry.highlights.clone()
        } else {
            Vec::new()
        },
        selected,
        expanded,
        toggle_label: desktop.then_some(if expanded { "Show Less" } else { "View Full Features" }),
        features: if expanded {
            catalog.included_features(tier).into_iter().map(feature_view).collect()
        } else {
            Vec::new()
        },
    }
}

fn comparison(state: &UiState, catalog: &TierCatalog) -> ComparisonView {
    let tier = state.selected_tier;
    let available = catalog.included_features(tier).len();
    let summary = format!(
        "{} with {} premium features",
        value_label(catalog.total_monthly_value(tier)),
        available
    );

    let rows = if state.comparison_expanded {
        catalog
            .features()
            .iter()
            .enumerate()
            .map(|(index, feature)| {
                let expanded = state.expanded_features.contains(&index);
                ComparisonRow {
                    index,
                    name:        feature.name.clone(),
                    value_label: value_label(feature.monthly_value),
                    included_in: catalog
                        .included_tiers(index)
                        .into_iter()
                        .map(Tier::display_name)
                        .collect(),
                    available:   catalog.is_included(tier, index),
                    expanded,
                    bullets: if expanded {
                        feature.description_bullets.clone()
                    } else {
                        Vec::new()
                    },
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    ComparisonView {
        title: COMPARISON_TITLE,
        summary,
        expanded: state.comparison_expanded,
        rows,
    }
}

/// A rate fraction as a percentage number without trailing noise:
/// 0.4 -> "40", 0.325 -> "32.5".
fn rate(fraction: Fraction) -> String {
    format_plain((fraction * 10_000.0).round() / 100.0)
}

fn result_card(
    state: &UiState,
    b: &RoiBreakdown,
    config: &TierConfig,
    card: ResultCard,
) -> ResultCardView {
    let flipped = state.flipped_cards.contains(&card);
    let inputs = &state.inputs;
    let line = |heading, text| DetailLine { heading, text };

    let (title, value, description, details) = match card {
        ResultCard::RevenueImpact => {
            let churn = config.churn_reduction_fraction;
            (
                "Revenue Impact",
                b.revenue_impact,
                "Additional annual revenue from reduced churn",
                vec![
                    line(
                        "Current Annual Churn Loss",
                        format!(
                            "{} members × {} churn × ${}/mo × 12 months = {}",
                            format_plain(inputs.member_count),
                            format_percent(inputs.churn_rate_percent),
                            format_plain(inputs.monthly_fee),
                            format_currency(b.current_churn_loss),
                        ),
                    ),
                    line(
                        "New Annual Churn Loss",
                        format!(
                            "Current loss × {} (after {}% reduction) = {}",
                            format_percent(100.0 - churn * 100.0),
                            rate(churn),
                            format_currency(b.new_churn_loss),
                        ),
                    ),
                    line("Annual Savings", format_currency(b.revenue_impact)),
                ],
            )
        }
        ResultCard::TimeSavings => {
            let time = config.time_reduction_fraction;
            (
                "Time Savings",
                b.time_savings,
                "Annual cost savings from improved efficiency",
                vec![
                    line(
                        "Current Management Cost",
                        format!(
                            "{} hours/mo × ${}/hr × 12 months = {}",
                            format_plain(inputs.management_hours_per_month),
                            format_plain(inputs.hourly_rate),
                            format_currency(b.current_management_cost),
                        ),
                    ),
                    line(
                        "Time Reduction",
                        format!("{}% efficiency improvement", rate(time)),
                    ),
                    line(
                        "Annual Savings",
                        format!(
                            "{} ({} of current cost)",
                            format_currency(b.time_savings),
                            format_percent(time * 100.0),
                        ),
                    ),
                ],
            )
        }
        ResultCard::RecruitmentRevenue => {
            let commission = config.placement_commission_fraction;
            (
                "Recruitment Revenue",
                b.recruitment_revenue,
                "Potential annual revenue from placements",
                vec![
                    line(
                        "Total Placement Value",
                        format!(
                            "{} placements/mo × 12 months × {}/placement = {}",
                            format_plain(inputs.monthly_placements),
                            format_currency(inputs.placement_fee),
                            format_currency(b.total_placement_revenue),
                        ),
                    ),
                    line(
                        "Partnership Commission",
                        format!(
                            "{}% of total value = {}",
                            rate(commission),
                            format_currency(b.platform_commission),
                        ),
                    ),
                    line(
                        "Net Annual Revenue",
                        format!(
                            "{} (after {}% commission)",
                            format_currency(b.recruitment_revenue),
                            rate(commission),
                        ),
                    ),
                ],
            )
        }
    };

    ResultCardView {
        card,
        title,
        value: format_currency(value),
        description,
        flipped,
        details: if flipped { details } else { Vec::new() },
    }
}

fn outlook_view(results: &RoiResult) -> OutlookView {
    let outlook = Outlook::of(results);
    let detail = outlook.shows_detail();
    OutlookView {
        outlook,
        net_roi:        detail.then(|| format_currency(results.net_roi)),
        roi_percentage: detail.then(|| format!("{} ROI", format_whole_percent(results.roi_percentage))),
        payback:        detail.then(|| format_months(results.payback_period_months)),
        message:        outlook.message(),
    }
}
