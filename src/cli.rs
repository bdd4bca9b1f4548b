use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{info, warn};
use serde::Serialize;

use crate::auth::Token;
use crate::dashboard;
use crate::error::SprintboardError;
use crate::providers::{FileSource, HttpSource, ManagerSource, SeedSource};
use crate::report;
use crate::trend::{self, Palette, RenderPlan};

#[derive(Parser)]
#[command(name = "sprintboard")]
#[command(author, version, about = "Engineering board-of-boards dashboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output file path (defaults to stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Pretty print JSON output
    #[arg(short, long, global = true, default_value_t = false)]
    pretty: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Colors used for rising and falling burndown segments
    #[arg(long, global = true, value_enum, default_value_t = PaletteChoice::Risk)]
    palette: PaletteChoice,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaletteChoice {
    /// Rising remaining work is drawn as risk (red)
    Risk,
    /// Rising remaining work is drawn green and falling red
    Inverted,
}

impl PaletteChoice {
    fn palette(self) -> Palette {
        match self {
            Self::Risk => Palette::RISK,
            Self::Inverted => Palette::INVERTED,
        }
    }
}

#[derive(Args)]
struct SourceArgs {
    /// JSON file with an array of managers (repeatable); takes precedence over --url
    #[arg(long = "file")]
    files: Vec<PathBuf>,

    /// HTTP endpoint returning an array of managers
    #[arg(long, env = "SPRINTBOARD_URL")]
    url: Option<String>,

    /// Bearer token for the HTTP endpoint
    #[arg(long, env = "SPRINTBOARD_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

impl SourceArgs {
    fn source(&self) -> Result<Box<dyn ManagerSource>> {
        if !self.files.is_empty() {
            if let Some(url) = &self.url {
                warn!("Ignoring URL {url}: data files were given");
            }
            return Ok(Box::new(FileSource::new(self.files.clone())?));
        }

        if let Some(url) = &self.url {
            let token = self.token.as_deref().map(Token::from);
            return Ok(Box::new(HttpSource::new(url, token)?));
        }

        if self.token.is_some() {
            warn!("Ignoring token: no URL configured");
        }

        Ok(Box::new(SeedSource))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show managers and their boards, optionally filtered
    Dashboard {
        /// Case-insensitive text matched against managers and boards
        #[arg(short, long, default_value = "")]
        query: String,

        #[command(flatten)]
        source: SourceArgs,
    },
    /// Show the burndown chart of one board
    Burndown {
        /// Board id or project code
        #[arg(short, long)]
        board: String,

        /// Only search boards of managers matching this text
        #[arg(short, long, default_value = "")]
        query: String,

        #[command(flatten)]
        source: SourceArgs,
    },
}

impl Cli {
    pub async fn execute(&self) -> Result<()> {
        let palette = self.palette.palette();

        match &self.command {
            Commands::Dashboard { query, source } => {
                let source = source.source()?;
                info!("Loading managers from {} source", source.name());
                let managers = source.load_managers().await?;

                let view = dashboard::build(query, &managers, &palette, Utc::now());
                if let Some(empty) = &view.empty_state {
                    warn!("{}", empty.message);
                }

                let rendered = match self.format {
                    Format::Json => self.to_json(&view)?,
                    Format::Text => report::build_report(&view),
                };
                self.write(&rendered)
            }
            Commands::Burndown {
                board,
                query,
                source,
            } => {
                let source = source.source()?;
                info!("Loading managers from {} source", source.name());
                let managers = source.load_managers().await?;

                let record = dashboard::find_matching_board(query, &managers, board)
                    .ok_or_else(|| SprintboardError::NotFound(format!("Board '{board}'")))?;
                let plan = trend::render_with_palette(&record.burndown, &palette);

                let rendered = match self.format {
                    Format::Json => self.to_json(&plan)?,
                    Format::Text => burndown_text(&record.name, &plan),
                };
                self.write(&rendered)
            }
        }
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }

    fn write(&self, rendered: &str) -> Result<()> {
        if let Some(output_path) = &self.output {
            std::fs::write(output_path, rendered)?;
            info!("Output written to: {}", output_path.display());
        } else {
            println!("{rendered}");
        }

        Ok(())
    }
}

fn burndown_text(name: &str, plan: &RenderPlan) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{name}: {}", report::trend_strip(plan));
    for (marker, label) in plan.markers.iter().zip(&plan.labels) {
        let guideline = plan.guideline.points[marker.index].1;
        let weekend = if plan.weekends.iter().any(|w| w.index == marker.index) {
            " (weekend)"
        } else {
            ""
        };
        let _ = writeln!(
            output,
            "{label:>8} {:>5} {:>5} {}{weekend}",
            marker.y, guideline, marker.descriptor.hue
        );
    }

    output
}
