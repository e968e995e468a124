//! roi-calc: command-line front end for the VoiceLoop ROI calculator.
//!
//! Usage:
//!   roi-calc estimate --tier equity --members 2500 --churn-rate 4.5
//!   roi-calc estimate --json
//!   roi-calc tiers
//!   roi-calc features --tier revolution
//!   roi-calc --catalog data/catalog.json ipc --width 1280

mod render;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use voiceloop_core::{
    catalog::TierCatalog,
    input::{InputField, InputMetrics},
    state::{Layout, ResultCard, UiEvent, UiState},
    tier::Tier,
    view::Screen,
};

#[derive(Parser, Debug)]
#[command(name = "roi-calc")]
#[command(about = "Estimate the ROI of a VoiceLoop partnership tier", long_about = None)]
#[command(version)]
struct Cli {
    /// Catalog file (JSON). The built-in reference catalog when omitted.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the ROI for one tier and print the results panel
    Estimate(EstimateArgs),
    /// List the partnership tiers with pricing and rates
    Tiers,
    /// Print the feature value stack for a tier
    Features {
        #[arg(long, default_value = "catalyst")]
        tier: Tier,
    },
    /// Line-delimited JSON event loop over stdin/stdout
    Ipc {
        /// Initial viewport width in pixels
        #[arg(long, default_value_t = 1280)]
        width: u32,
    },
}

/// Metric flags take raw text and go through the same coercion as the
/// form fields, so `--members abc` counts as 0.
#[derive(Args, Debug)]
struct EstimateArgs {
    #[arg(long, default_value = "catalyst")]
    tier: Tier,

    /// Member count
    #[arg(long, allow_hyphen_values = true)]
    members: Option<String>,

    /// Monthly membership fee
    #[arg(long, allow_hyphen_values = true)]
    monthly_fee: Option<String>,

    /// Churn rate in percent
    #[arg(long, allow_hyphen_values = true)]
    churn_rate: Option<String>,

    /// Management hours per month
    #[arg(long, allow_hyphen_values = true)]
    management_hours: Option<String>,

    /// Cost per management hour
    #[arg(long, allow_hyphen_values = true)]
    hourly_rate: Option<String>,

    /// Recruitment placements per month
    #[arg(long, allow_hyphen_values = true)]
    placements: Option<String>,

    /// Revenue per placement
    #[arg(long, allow_hyphen_values = true)]
    placement_fee: Option<String>,

    /// Start from all-zero metrics instead of the defaults
    #[arg(long)]
    zero: bool,

    /// Viewport width in pixels; below 1024 renders the compact layout
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Show calculation details on every result card
    #[arg(long)]
    details: bool,

    /// Print the raw results as JSON
    #[arg(long)]
    json: bool,
}

impl EstimateArgs {
    fn start_state(&self) -> UiState {
        if self.zero {
            UiState {
                inputs: InputMetrics::zeroed(),
                ..UiState::default()
            }
        } else {
            UiState::default()
        }
    }

    fn events(&self) -> Vec<UiEvent> {
        let raw = [
            (InputField::MemberCount,             &self.members),
            (InputField::MonthlyFee,              &self.monthly_fee),
            (InputField::ChurnRatePercent,        &self.churn_rate),
            (InputField::ManagementHoursPerMonth, &self.management_hours),
            (InputField::HourlyRate,              &self.hourly_rate),
            (InputField::MonthlyPlacements,       &self.placements),
            (InputField::PlacementFee,            &self.placement_fee),
        ];

        let mut events = vec![
            UiEvent::Resize { width: self.width },
            UiEvent::SelectTier { tier: self.tier },
        ];
        events.extend(raw.into_iter().filter_map(|(field, value)| {
            value.as_ref().map(|raw| UiEvent::SetInput { field, raw: raw.clone() })
        }));
        if self.details {
            events.extend(ResultCard::ALL.map(|card| UiEvent::FlipCard { card }));
            events.push(UiEvent::ToggleComparison);
        }
        events
    }
}

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Event { event: UiEvent },
    Quit,
}

#[derive(serde::Serialize)]
struct EstimateJson<'a> {
    tier:    Tier,
    inputs:  &'a InputMetrics,
    results: &'a voiceloop_core::calculator::RoiResult,
    outlook: voiceloop_core::outlook::Outlook,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let catalog = match &cli.catalog {
        Some(path) => TierCatalog::load(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => TierCatalog::reference(),
    };

    match cli.command {
        Command::Estimate(args) => run_estimate(&catalog, &args),
        Command::Tiers => {
            print!("{}", render::tiers(&catalog));
            Ok(())
        }
        Command::Features { tier } => {
            print!("{}", render::features(&catalog, tier));
            Ok(())
        }
        Command::Ipc { width } => run_ipc_loop(&catalog, width, io::stdin().lock(), io::stdout()),
    }
}

fn run_estimate(catalog: &TierCatalog, args: &EstimateArgs) -> Result<()> {
    let state = args.start_state().replay(args.events());
    let screen = Screen::build(&state, catalog);

    if args.json {
        let out = EstimateJson {
            tier:    screen.selected_tier,
            inputs:  &state.inputs,
            results: &screen.results,
            outlook: screen.outlook.outlook,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", render::screen(&screen));
    }
    Ok(())
}

/// One JSON command per line in, one JSON line out. Lines that fail to
/// decode, including invalid UTF-8, get an `{"error": ...}` reply and the
/// loop carries on. Ends on `quit` or EOF.
fn run_ipc_loop<R: BufRead, W: Write>(
    catalog: &TierCatalog,
    width: u32,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let mut buffer = Vec::new();
    let mut state = UiState::default().with_layout(Layout::for_width(width));

    loop {
        buffer.clear();
        let bytes_read = input.read_until(b'\n', &mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_slice(&buffer) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("ipc: rejected line: {e}");
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(output, "{}", err_json)?;
                output.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => {}
            IpcCommand::Event { event } => {
                state = state.apply(event);
            }
        }

        let screen = Screen::build(&state, catalog);
        writeln!(output, "{}", serde_json::to_string(&screen)?)?;
        output.flush()?;
    }
    Ok(())
}
