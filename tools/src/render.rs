//! Plain-text rendering of the presentation model.

use std::fmt::Write;
use voiceloop_core::{
    catalog::TierCatalog,
    format::{format_currency, format_plain},
    state::Layout,
    tier::Tier,
    view::{value_label, Screen},
};

pub fn screen(screen: &Screen) -> String {
    let mut out = String::new();
    // fmt::Write into a String cannot fail.
    let _ = write_screen(&mut out, screen);
    out
}

fn write_screen(out: &mut String, s: &Screen) -> std::fmt::Result {
    writeln!(out, "=== {} ===", s.title)?;
    writeln!(out, "  {}", s.tagline)?;
    writeln!(out)?;

    for card in &s.tier_cards {
        let marker = if card.selected { "*" } else { " " };
        writeln!(out, "[{marker}] {} | {}", card.title, card.price_label)?;
        if let Some(value) = &card.value_label {
            writeln!(out, "      {value}")?;
        }
        for line in &card.highlights {
            writeln!(out, "      ✓ {line}")?;
        }
        for feature in &card.features {
            writeln!(out, "      - {} ({})", feature.name, feature.value_label)?;
        }
        if let Some(toggle) = card.toggle_label {
            writeln!(out, "      [{toggle}]")?;
        }
    }
    writeln!(out)?;

    writeln!(out, "=== COMMUNITY METRICS ===")?;
    for row in &s.inputs {
        writeln!(out, "  {:<26} {}", row.label, format_plain(row.value))?;
    }
    writeln!(out)?;

    if let Some(quick) = &s.quick_estimate {
        writeln!(out, "=== {} ===", quick.heading.to_uppercase())?;
        writeln!(out, "  {}", quick.net_roi)?;
        writeln!(out, "  {}", quick.note)?;
        writeln!(out)?;
    }

    if s.layout == Layout::Desktop {
        writeln!(out, "=== ROI ANALYSIS ===")?;
        for card in &s.result_cards {
            writeln!(out, "  {:<20} {:>14}  {}", card.title, card.value, card.description)?;
            for line in &card.details {
                writeln!(out, "      {}: {}", line.heading, line.text)?;
            }
        }
        writeln!(out)?;
    }

    match (&s.outlook.net_roi, &s.outlook.roi_percentage, &s.outlook.payback) {
        (Some(net), Some(pct), Some(payback)) => {
            writeln!(out, "  Net ROI:        {net} -> {pct}")?;
            writeln!(out, "  Payback Period: {payback}")?;
        }
        _ => {
            if let Some(message) = s.outlook.message {
                writeln!(out, "  ! {message}")?;
            }
        }
    }

    if let Some(cmp) = &s.comparison {
        writeln!(out)?;
        writeln!(out, "=== {} ===", cmp.title.to_uppercase())?;
        writeln!(out, "  {}", cmp.summary)?;
        for row in &cmp.rows {
            let dim = if row.available { " " } else { "-" };
            writeln!(
                out,
                "  {dim} {:<28} {:<20} [{}]",
                row.name,
                row.value_label,
                row.included_in.join(", ")
            )?;
            for bullet in &row.bullets {
                writeln!(out, "        • {bullet}")?;
            }
        }
    }

    if let Some(prompt) = s.desktop_prompt {
        writeln!(out)?;
        writeln!(out, "  ({prompt})")?;
    }
    Ok(())
}

pub fn tiers(catalog: &TierCatalog) -> String {
    let mut out = String::new();
    let _ = write_tiers(&mut out, catalog);
    out
}

fn write_tiers(out: &mut String, catalog: &TierCatalog) -> std::fmt::Result {
    writeln!(out, "=== PARTNERSHIP TIERS ===")?;
    for tier in Tier::ALL {
        let entry = catalog.entry(tier);
        let c = &entry.config;
        writeln!(out, "  {} ({})", tier.display_name(), tier.key())?;
        writeln!(out, "    price:            {}", entry.price_label)?;
        writeln!(out, "    monthly cost:     {}", format_currency(c.monthly_cost))?;
        writeln!(out, "    churn reduction:  {:.0}%", c.churn_reduction_fraction * 100.0)?;
        writeln!(out, "    time reduction:   {:.0}%", c.time_reduction_fraction * 100.0)?;
        writeln!(out, "    commission:       {:.0}%", c.placement_commission_fraction * 100.0)?;
        writeln!(out, "    feature value:    {}", value_label(catalog.total_monthly_value(tier)))?;
    }
    Ok(())
}

pub fn features(catalog: &TierCatalog, tier: Tier) -> String {
    let mut out = String::new();
    let _ = write_features(&mut out, catalog, tier);
    out
}

fn write_features(out: &mut String, catalog: &TierCatalog, tier: Tier) -> std::fmt::Result {
    let included = catalog.included_features(tier);
    writeln!(out, "=== FEATURES & VALUE STACK: {} ===", tier.display_name())?;
    writeln!(
        out,
        "  {} with {} premium features",
        value_label(catalog.total_monthly_value(tier)),
        included.len()
    )?;
    for (index, feature) in catalog.features().iter().enumerate() {
        let mark = if catalog.is_included(tier, index) { "✓" } else { " " };
        writeln!(out, "  [{mark}] {} ({})", feature.name, value_label(feature.monthly_value))?;
        for bullet in &feature.description_bullets {
            writeln!(out, "        • {bullet}")?;
        }
    }
    Ok(())
}
