//! Tier catalog: per-tier pricing plus the feature value stack.
//!
//! A catalog is built once at startup, either from the built-in reference
//! data or from a JSON file, validated, and then only read. Tiers are keyed
//! by named struct fields rather than a map so a catalog file that omits a
//! tier fails to decode instead of failing at lookup time.

use crate::{
    error::{CalcError, CalcResult},
    tier::{Tier, TierConfig},
    types::Currency,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub monthly_value: Currency,
    pub description_bullets: Vec<String>,
}

/// Everything the catalog knows about one tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierEntry {
    pub config: TierConfig,
    /// Marketing price line, e.g. "$2,997/mo + 10% equity".
    pub price_label: String,
    /// Short bullets shown on the tier card.
    pub highlights: Vec<String>,
    /// Indices into the feature list.
    pub features: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TierTable {
    revolution: TierEntry,
    equity:     TierEntry,
    catalyst:   TierEntry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierCatalog {
    tiers:    TierTable,
    features: Vec<Feature>,
}

impl TierCatalog {
    /// The built-in reference catalog.
    pub fn reference() -> Self {
        fn entry(tier: Tier, price_label: &str, highlights: [&str; 4], features: &[usize]) -> TierEntry {
            TierEntry {
                config: tier.reference_config(),
                price_label: price_label.to_string(),
                highlights: highlights.iter().map(|s| s.to_string()).collect(),
                features: features.to_vec(),
            }
        }

        Self {
            tiers: TierTable {
                revolution: entry(
                    Tier::Revolution,
                    "$2,997/mo + 10% equity",
                    [
                        "Core AI Matching Engine",
                        "Geographic Expansion Tools",
                        "Basic Support Package",
                        "Standard Analytics",
                    ],
                    &[0, 1],
                ),
                equity: entry(
                    Tier::Equity,
                    "$3,997/mo + 2% equity",
                    [
                        "Advanced Host Management",
                        "Content Automation Suite",
                        "Priority Support Access",
                        "Enhanced Analytics",
                    ],
                    &[0, 1, 2, 3],
                ),
                catalyst: entry(
                    Tier::Catalyst,
                    "$4,997/mo",
                    [
                        "Full Platform Access",
                        "Custom Growth Strategy",
                        "Dedicated Success Team",
                        "Enterprise Analytics",
                    ],
                    &[0, 1, 2, 3, 4, 5],
                ),
            },
            features: reference_features(),
        }
    }

    /// Load and validate a catalog file.
    pub fn load(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CalcError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&content)?;
        log::info!(
            "catalog: loaded {} features from {}",
            catalog.features.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn from_json(content: &str) -> CalcResult<Self> {
        let catalog: TierCatalog = serde_json::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> CalcResult<()> {
        let len = self.features.len();
        for tier in Tier::ALL {
            let entry = self.entry(tier);
            entry.config.validate(tier)?;

            let mut seen = HashSet::new();
            for &index in &entry.features {
                if index >= len {
                    return Err(CalcError::UnknownFeature { tier, index, len });
                }
                if !seen.insert(index) {
                    return Err(CalcError::DuplicateFeature { tier, index });
                }
            }
        }
        Ok(())
    }

    pub fn entry(&self, tier: Tier) -> &TierEntry {
        match tier {
            Tier::Revolution => &self.tiers.revolution,
            Tier::Equity     => &self.tiers.equity,
            Tier::Catalyst   => &self.tiers.catalyst,
        }
    }

    pub fn config_for(&self, tier: Tier) -> TierConfig {
        let config = self.entry(tier).config;
        log::debug!("catalog: {tier} config {config:?}");
        config
    }

    /// The whole feature list, in catalog order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn is_included(&self, tier: Tier, feature_index: usize) -> bool {
        self.entry(tier).features.contains(&feature_index)
    }

    /// Features available in `tier`, in catalog order regardless of the
    /// order the tier lists them.
    pub fn included_features(&self, tier: Tier) -> Vec<&Feature> {
        let included: Vec<&Feature> = self
            .features
            .iter()
            .enumerate()
            .filter(|(index, _)| self.is_included(tier, *index))
            .map(|(_, feature)| feature)
            .collect();
        log::debug!(
            "catalog: {tier} includes {} of {} features",
            included.len(),
            self.features.len()
        );
        included
    }

    pub fn total_monthly_value(&self, tier: Tier) -> Currency {
        self.included_features(tier)
            .iter()
            .map(|f| f.monthly_value)
            .sum()
    }

    /// Tiers that include the feature, cheapest first.
    pub fn included_tiers(&self, feature_index: usize) -> Vec<Tier> {
        Tier::ALL
            .into_iter()
            .filter(|&tier| self.is_included(tier, feature_index))
            .collect()
    }
}

impl Default for TierCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

fn reference_features() -> Vec<Feature> {
    fn feature(name: &str, monthly_value: Currency, bullets: [&str; 4]) -> Feature {
        Feature {
            name: name.to_string(),
            monthly_value,
            description_bullets: bullets.iter().map(|s| s.to_string()).collect(),
        }
    }

    vec![
        feature(
            "MatchMaker AI Engine",
            5000.0,
            [
                "Custom-trained AI on your community's unique DNA",
                "50+ data point analysis for perfect matches",
                "Automated warm introductions",
                "Human-guided connection protocol",
            ],
        ),
        feature(
            "GeoNet Pulse Map",
            3000.0,
            [
                "Real-time community visualization",
                "Automated local meetup suggestions",
                "Geographic expansion planning",
                "Connection density analytics",
            ],
        ),
        feature(
            "Elite Hosts Program",
            4000.0,
            [
                "Host recruitment & training system",
                "Proven host incentive structure",
                "Weekly host performance analytics",
                "Connection quality monitoring",
            ],
        ),
        feature(
            "Spotlight Launcher",
            2500.0,
            [
                "Automated member highlight system",
                "AI-powered content generation",
                "Cross-platform promotion",
                "Engagement tracking",
            ],
        ),
        feature(
            "Community Podcast Launchpad",
            2000.0,
            [
                "Full podcast launch strategy",
                "Content planning system",
                "Member story curation",
                "Distribution automation",
            ],
        ),
        feature(
            "Growth Analytics Dashboard",
            2500.0,
            [
                "Real-time retention metrics",
                "Connection strength scoring",
                "Engagement prediction",
                "ROI tracking",
            ],
        ),
    ]
}
