//! voiceloop-core: partnership tier catalog, ROI derivation, and the
//! headless presentation model for the VoiceLoop ROI calculator.

pub mod calculator;
pub mod catalog;
pub mod error;
pub mod format;
pub mod input;
pub mod outlook;
pub mod state;
pub mod tier;
pub mod types;
pub mod view;
