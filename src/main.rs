use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use jobdesk::config::{JobdeskPaths, Settings};
use jobdesk::display::format_steps;
use jobdesk::export::{write_summary, SummaryFormat};
use jobdesk::models::DashboardData;
use jobdesk::tour::TOUR_STEPS;

#[derive(Parser)]
#[command(
    name = "jobdesk",
    author = "Kaylee Beyene",
    version,
    about = "Business-health dashboard and guided job tutorial",
    long_about = "jobdesk shows how a small trade business is tracking across quotes, \
                  jobs and invoices, and walks new users through creating their \
                  first job with a step-by-step guided tour."
)]
struct Cli {
    /// Dashboard data file (JSON). The built-in sample is used when omitted.
    #[arg(long, global = true, env = "JOBDESK_DATA")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui {
        /// Open straight into the guided job tutorial
        #[arg(short, long)]
        tutorial: bool,
    },

    /// Print the dashboard summary
    Summary {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = SummaryFormat::Text)]
        format: SummaryFormat,
    },

    /// List the guided tour steps
    Steps,

    /// Write default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = JobdeskPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let _log_guard = jobdesk::logging::init(&paths, &settings)?;

    match cli.command {
        None => run_tui(&settings, cli.data, false)?,
        Some(Commands::Tui { tutorial }) => run_tui(&settings, cli.data, tutorial)?,
        Some(Commands::Summary { format }) => {
            let data = DashboardData::load_or_sample(cli.data.as_deref())?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_summary(&data, format, &settings.currency_symbol, &mut out)?;
            out.flush()?;
        }
        Some(Commands::Steps) => {
            print!("{}", format_steps(&TOUR_STEPS));
        }
        Some(Commands::Init) => {
            println!("Initializing jobdesk at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Settings written to {}", paths.settings_file().display());
            println!();
            println!("Run 'jobdesk' to open the dashboard, or 'jobdesk tui --tutorial'");
            println!("to go straight to the guided job tutorial.");
        }
        Some(Commands::Config) => {
            println!("jobdesk Configuration");
            println!("=====================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log directory:    {}", paths.log_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Log level:          {}", settings.log_level);
            println!("  Tour auto-start:    {}", settings.tour.auto_start);
            println!("  Auto-start delay:   {} ms", settings.tour.auto_start_delay_ms);
            println!("  Scroll settle:      {} ms", settings.tour.scroll_settle_ms);
            println!("  Highlight padding:  {}", settings.tour.highlight_padding);
            println!("  Reserved rows:      {}", settings.tour.reserved_bottom);
        }
    }

    Ok(())
}

fn run_tui(settings: &Settings, data_file: Option<PathBuf>, tutorial: bool) -> Result<()> {
    let data = DashboardData::load_or_sample(data_file.as_deref())?;
    info!(tutorial, "launching tui");
    jobdesk::tui::run_tui(settings, &data, tutorial)
}
