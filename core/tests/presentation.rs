//! Formatting, the outlook decision, and the screen model.

use voiceloop_core::{
    calculator::compute_roi,
    catalog::TierCatalog,
    format::{format_currency, format_months, format_percent, format_plain, format_whole_percent},
    input::{InputField, InputMetrics},
    outlook::Outlook,
    state::{Layout, ResultCard, UiEvent, UiState},
    tier::Tier,
    view::Screen,
};

#[test]
fn currency_has_no_fraction_and_groups_thousands() {
    assert_eq!(format_currency(474_036.0), "$474,036");
    assert_eq!(format_currency(-35_964.0), "-$35,964");
    assert_eq!(format_currency(0.0), "$0");
    assert_eq!(format_currency(999.5), "$1,000");
    assert_eq!(format_currency(12.4), "$12");
    assert_eq!(format_currency(1_234_567_890.0), "$1,234,567,890");
    assert_eq!(format_currency(-0.3), "$0");
}

#[test]
fn non_finite_values_render_legibly() {
    assert_eq!(format_currency(f64::INFINITY), "$∞");
    assert_eq!(format_currency(f64::NEG_INFINITY), "-$∞");
    assert_eq!(format_currency(f64::NAN), "$NaN");
    assert_eq!(format_months(f64::INFINITY), "∞ months");
    assert_eq!(format_whole_percent(f64::NAN), "NaN%");
    assert_eq!(format_percent(f64::NEG_INFINITY), "-∞%");
}

#[test]
fn percentages_and_plain_numbers() {
    assert_eq!(format_percent(5.0), "5.0%");
    assert_eq!(format_percent(60.0), "60.0%");
    assert_eq!(format_whole_percent(791.0), "791%");
    assert_eq!(format_whole_percent(-100.0), "-100%");
    assert_eq!(format_months(2.0), "2 months");
    assert_eq!(format_plain(1000.0), "1000");
    assert_eq!(format_plain(12.5), "12.5");
    assert_eq!(format_plain(-0.0), "0");
}

#[test]
fn outlook_is_detailed_for_reference_inputs() {
    let r = compute_roi(&InputMetrics::default(), Tier::Catalyst);
    assert_eq!(Outlook::of(&r), Outlook::Detailed);
    assert!(Outlook::of(&r).message().is_none());
}

#[test]
fn outlook_asks_to_adjust_when_unprofitable() {
    let r = compute_roi(&InputMetrics::zeroed(), Tier::Revolution);
    let outlook = Outlook::of(&r);
    assert_eq!(outlook, Outlook::Unprofitable);
    assert_eq!(
        outlook.message(),
        Some("Adjust your inputs to see potential positive returns on investment")
    );
}

/// Barely profitable on Revolution: time savings alone are
/// 780 h × $10 × 12 × 0.40 = $37,440 against a $35,964 annual cost, and
/// payback is ceil(2997 / (3120 / 12)) = 12 months.
#[test]
fn outlook_flags_slow_payback() {
    let inputs = InputMetrics::zeroed()
        .with(InputField::ManagementHoursPerMonth, 780.0)
        .with(InputField::HourlyRate, 10.0);
    let r = compute_roi(&inputs, Tier::Revolution);

    assert!((r.time_savings - 37_440.0).abs() < 1e-6, "time savings {}", r.time_savings);
    assert!((r.net_roi - 1_476.0).abs() < 1e-6, "net roi {}", r.net_roi);
    assert_eq!(r.payback_period_months, 12.0);
    assert_eq!(Outlook::of(&r), Outlook::SlowPayback);
    assert_eq!(
        Outlook::of(&r).message(),
        Some("Consider adjusting your metrics to achieve a faster payback period")
    );

    // Doubling the hourly rate brings payback down to 6 months.
    let faster = compute_roi(&inputs.with(InputField::HourlyRate, 20.0), Tier::Revolution);
    assert_eq!(faster.payback_period_months, 6.0);
    assert_eq!(Outlook::of(&faster), Outlook::Detailed);
}

#[test]
fn nan_net_roi_is_treated_as_unprofitable() {
    let mut r = compute_roi(&InputMetrics::default(), Tier::Equity);
    r.net_roi = f64::NAN;
    assert_eq!(Outlook::of(&r), Outlook::Unprofitable);
}

/// Every way of zeroing the metrics, on every tier: a non-finite payback
/// must never reach the detailed view.
#[test]
fn detailed_view_never_shows_non_finite_payback_for_any_zero_mask() {
    let base = InputMetrics::default();
    for tier in Tier::ALL {
        for mask in 0u32..(1 << InputField::ALL.len()) {
            let inputs = InputField::ALL
                .into_iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .fold(base, |m, (_, field)| m.with(field, 0.0));

            let r = compute_roi(&inputs, tier);
            let outlook = Outlook::of(&r);
            if !r.payback_period_months.is_finite() {
                assert_ne!(
                    outlook,
                    Outlook::Detailed,
                    "{tier} mask {mask:07b}: non-finite payback shown in detail"
                );
            }
            if outlook.shows_detail() {
                assert!(r.net_roi > 0.0 && r.payback_period_months < 12.0);
            }
        }
    }
}

#[test]
fn desktop_screen_shows_all_tiers_and_result_cards() {
    let catalog = TierCatalog::reference();
    let state = UiState::default().apply(UiEvent::Resize { width: 1280 });
    let screen = Screen::build(&state, &catalog);

    assert_eq!(screen.layout, Layout::Desktop);
    assert_eq!(screen.tier_cards.len(), 3);
    assert_eq!(screen.inputs.len(), 7);
    assert_eq!(screen.result_cards.len(), 3);
    assert!(screen.quick_estimate.is_none());
    assert!(screen.desktop_prompt.is_none());

    let catalyst = &screen.tier_cards[2];
    assert!(catalyst.selected);
    assert_eq!(catalyst.value_label.as_deref(), Some("$19,000/month value"));
    assert_eq!(catalyst.highlights.len(), 4);
    assert!(catalyst.features.is_empty(), "card collapsed by default");

    assert_eq!(screen.result_cards[0].value, "$12,000");
    assert_eq!(screen.result_cards[1].value, "$12,000");
    assert_eq!(screen.result_cards[2].value, "$510,000");

    assert_eq!(screen.outlook.net_roi.as_deref(), Some("$474,036"));
    assert_eq!(screen.outlook.roi_percentage.as_deref(), Some("791% ROI"));
    assert_eq!(screen.outlook.payback.as_deref(), Some("2 months"));
    assert!(screen.outlook.message.is_none());
}

#[test]
fn compact_screen_shows_quick_estimate_only() {
    let catalog = TierCatalog::reference();
    let screen = Screen::build(&UiState::default(), &catalog);

    assert_eq!(screen.layout, Layout::Compact);
    assert_eq!(screen.tier_cards.len(), 1);
    assert_eq!(screen.tier_cards[0].tier, Tier::Catalyst);
    assert!(screen.tier_cards[0].value_label.is_none());
    assert!(screen.tier_cards[0].toggle_label.is_none(), "compact cards never expand");
    assert_eq!(screen.inputs.len(), 2);
    assert!(screen.result_cards.is_empty());
    assert!(screen.comparison.is_none());
    assert_eq!(
        screen.quick_estimate.as_ref().map(|q| q.net_roi.as_str()),
        Some("$474,036")
    );
    assert_eq!(screen.desktop_prompt, Some("Open on desktop for full experience"));
}

#[test]
fn compact_card_hides_highlights_unless_selected() {
    let catalog = TierCatalog::reference();
    let state = UiState::default().apply(UiEvent::SelectTier { tier: Tier::Equity });
    let screen = Screen::build(&state, &catalog);

    assert!(!screen.tier_cards[0].selected);
    assert!(screen.tier_cards[0].highlights.is_empty());
}

#[test]
fn flipped_cards_carry_calculation_details() {
    let catalog = TierCatalog::reference();
    let state = UiState::default().replay([
        UiEvent::Resize { width: 1280 },
        UiEvent::FlipCard { card: ResultCard::RevenueImpact },
        UiEvent::FlipCard { card: ResultCard::RecruitmentRevenue },
    ]);
    let screen = Screen::build(&state, &catalog);

    let revenue = &screen.result_cards[0];
    assert!(revenue.flipped);
    assert_eq!(
        revenue.details[0].text,
        "1000 members × 5.0% churn × $50/mo × 12 months = $30,000"
    );
    assert_eq!(
        revenue.details[1].text,
        "Current loss × 60.0% (after 40% reduction) = $18,000"
    );
    assert_eq!(revenue.details[2].text, "$12,000");

    assert!(screen.result_cards[1].details.is_empty(), "time card not flipped");

    let recruitment = &screen.result_cards[2];
    assert_eq!(
        recruitment.details[0].text,
        "10 placements/mo × 12 months × $5,000/placement = $600,000"
    );
    assert_eq!(recruitment.details[1].text, "15% of total value = $90,000");
    assert_eq!(recruitment.details[2].text, "$510,000 (after 15% commission)");
}

#[test]
fn comparison_lists_rows_only_when_expanded() {
    let catalog = TierCatalog::reference();
    let desktop = UiState::default().replay([
        UiEvent::Resize { width: 1280 },
        UiEvent::SelectTier { tier: Tier::Revolution },
    ]);

    let collapsed = Screen::build(&desktop, &catalog).comparison.expect("desktop comparison");
    assert_eq!(collapsed.summary, "$8,000/month value with 2 premium features");
    assert!(collapsed.rows.is_empty());

    let expanded_state = desktop.replay([
        UiEvent::ToggleComparison,
        UiEvent::ToggleFeature { index: 5 },
    ]);
    let expanded = Screen::build(&expanded_state, &catalog)
        .comparison
        .expect("desktop comparison");
    assert_eq!(expanded.rows.len(), 6);

    let first = &expanded.rows[0];
    assert!(first.available);
    assert_eq!(
        first.included_in,
        vec!["Revolution Partnership", "Equity Partnership", "Community Catalyst"]
    );
    assert!(first.bullets.is_empty());

    let last = &expanded.rows[5];
    assert!(!last.available);
    assert_eq!(last.included_in, vec!["Community Catalyst"]);
    assert_eq!(last.value_label, "$2,500/month value");
    assert_eq!(last.bullets.len(), 4);
}

#[test]
fn expanded_tier_card_lists_its_features() {
    let catalog = TierCatalog::reference();
    let state = UiState::default().replay([
        UiEvent::Resize { width: 1280 },
        UiEvent::ToggleTierCard { tier: Tier::Equity },
    ]);
    let screen = Screen::build(&state, &catalog);

    let equity = &screen.tier_cards[1];
    assert!(equity.expanded);
    assert_eq!(equity.toggle_label, Some("Show Less"));
    assert_eq!(screen.tier_cards[0].toggle_label, Some("View Full Features"));
    let names: Vec<&str> = equity.features.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["MatchMaker AI Engine", "GeoNet Pulse Map", "Elite Hosts Program", "Spotlight Launcher"]
    );
    assert_eq!(equity.features[0].value_label, "$5,000/month value");
}

#[test]
fn all_zero_screen_hides_payback_and_prompts() {
    let catalog = TierCatalog::reference();
    let state = InputField::ALL.into_iter().fold(
        UiState::default().replay([
            UiEvent::Resize { width: 1280 },
            UiEvent::SelectTier { tier: Tier::Revolution },
        ]),
        |s, field| s.apply(UiEvent::SetInput { field, raw: String::new() }),
    );
    let screen = Screen::build(&state, &catalog);

    assert!(screen.results.payback_period_months.is_infinite());
    assert_eq!(screen.outlook.outlook, Outlook::Unprofitable);
    assert!(screen.outlook.payback.is_none());
    assert!(screen.outlook.net_roi.is_none());

    let json = serde_json::to_value(&screen).expect("screen serializes");
    assert!(json["results"]["payback_period_months"].is_null());
    assert_eq!(json["results"]["net_roi"], serde_json::json!(-35964.0));
}
