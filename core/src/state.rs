//! UI state as an immutable snapshot replaced wholesale on every event.
//!
//! RULE: `UiState::apply` is the only way state changes. Nothing holds a
//! mutable reference to the current snapshot; the owner swaps in the value
//! `apply` returns. Results are never stored here, they are recomputed from
//! the snapshot each time a view is built.

use crate::{
    input::{InputField, InputMetrics},
    tier::Tier,
};
use serde::{Deserialize, Serialize};

/// Width-driven layout. Only the presentation model reads this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Desktop,
    Compact,
}

impl Layout {
    pub const DESKTOP_MIN_WIDTH: u32 = 1024;

    pub fn for_width(width: u32) -> Self {
        if width >= Self::DESKTOP_MIN_WIDTH {
            Layout::Desktop
        } else {
            Layout::Compact
        }
    }
}

/// The three flippable result cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultCard {
    RevenueImpact,
    TimeSavings,
    RecruitmentRevenue,
}

impl ResultCard {
    pub const ALL: [ResultCard; 3] = [
        ResultCard::RevenueImpact,
        ResultCard::TimeSavings,
        ResultCard::RecruitmentRevenue,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    pub inputs:              InputMetrics,
    pub selected_tier:       Tier,
    pub layout:              Layout,
    /// The "Features & Value Stack" section.
    pub comparison_expanded: bool,
    /// Feature rows showing their bullets, in the order they were opened.
    pub expanded_features:   Vec<usize>,
    /// Tier cards showing their full feature list.
    pub expanded_tier_cards: Vec<Tier>,
    /// Result cards turned to their calculation details.
    pub flipped_cards:       Vec<ResultCard>,
}

impl Default for UiState {
    /// Opening screen: reference inputs, Catalyst selected, everything
    /// collapsed. Layout starts compact until the first resize arrives.
    fn default() -> Self {
        Self {
            inputs:              InputMetrics::default(),
            selected_tier:       Tier::Catalyst,
            layout:              Layout::Compact,
            comparison_expanded: false,
            expanded_features:   Vec::new(),
            expanded_tier_cards: Vec::new(),
            flipped_cards:       Vec::new(),
        }
    }
}

/// Everything the user (or the window) can do.
/// Variants are only ever appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// Keystroke in a metric field. `raw` is the field's full text.
    SetInput { field: InputField, raw: String },
    SelectTier { tier: Tier },
    Resize { width: u32 },
    ToggleComparison,
    ToggleFeature { index: usize },
    ToggleTierCard { tier: Tier },
    FlipCard { card: ResultCard },
    Reset,
}

impl UiState {
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Produce the next snapshot.
    pub fn apply(self, event: UiEvent) -> Self {
        log::debug!("state: {event:?}");
        match event {
            UiEvent::SetInput { field, raw } => Self {
                inputs: self.inputs.with_raw(field, &raw),
                ..self
            },
            UiEvent::SelectTier { tier } => Self {
                selected_tier: tier,
                ..self
            },
            UiEvent::Resize { width } => Self {
                layout: Layout::for_width(width),
                ..self
            },
            UiEvent::ToggleComparison => Self {
                comparison_expanded: !self.comparison_expanded,
                ..self
            },
            UiEvent::ToggleFeature { index } => Self {
                expanded_features: toggled(self.expanded_features, index),
                ..self
            },
            UiEvent::ToggleTierCard { tier } => Self {
                expanded_tier_cards: toggled(self.expanded_tier_cards, tier),
                ..self
            },
            UiEvent::FlipCard { card } => Self {
                flipped_cards: toggled(self.flipped_cards, card),
                ..self
            },
            UiEvent::Reset => Self {
                layout: self.layout,
                ..Self::default()
            },
        }
    }

    /// Fold a sequence of events into a final snapshot.
    pub fn replay(self, events: impl IntoIterator<Item = UiEvent>) -> Self {
        events.into_iter().fold(self, Self::apply)
    }
}

/// Remove `item` if present, append it otherwise.
fn toggled<T: PartialEq>(mut items: Vec<T>, item: T) -> Vec<T> {
    match items.iter().position(|x| *x == item) {
        Some(pos) => {
            items.remove(pos);
        }
        None => items.push(item),
    }
    items
}
