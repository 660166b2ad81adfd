use anyhow::Result;
use clap::{Parser, Subcommand};

use maintenance_report::cli::{handle_export_command, handle_months_command, ExportArgs};
use maintenance_report::config::{paths::ReportPaths, settings::Settings};
use maintenance_report::logging;
use maintenance_report::services::ReportSession;

#[derive(Parser)]
#[command(
    name = "mreport",
    version,
    about = "Maintenance expense form and spreadsheet report",
    long_about = "Record maintenance expenses (item, billing month, amount, deadline, \
                  status), review them with a running total, and export the list \
                  as Maintenance_Report.xls for any spreadsheet application."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui {
        /// Initial report title
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Print the billing month options
    Months {
        /// Reference date (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Build a report from a JSON or CSV file of entries
    Export(ExportArgs),

    /// Show current configuration and paths
    Config {
        /// Write the effective settings to config.json
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ReportPaths::new()?;

    match cli.command.unwrap_or(Commands::Tui { title: None }) {
        Commands::Tui { title } => {
            paths.ensure_directories()?;
            logging::init_file(&paths.log_file())?;
            let settings = Settings::load_or_create(&paths)?;

            let session = match title {
                Some(title) => ReportSession::new(title),
                None => ReportSession::starting_on(
                    chrono::Local::now().date_naive(),
                    &settings.title_prefix,
                ),
            };
            maintenance_report::tui::run_tui(session, &settings)?;
        }
        Commands::Months { date } => {
            logging::init_stderr();
            handle_months_command(date)?;
        }
        Commands::Export(args) => {
            logging::init_stderr();
            let settings = Settings::load_or_create(&paths)?;
            handle_export_command(&settings, args)?;
        }
        Commands::Config { save } => {
            logging::init_stderr();
            let settings = Settings::load_or_create(&paths)?;
            if save {
                settings.save(&paths)?;
                println!("Settings saved to {}", paths.settings_file().display());
                println!();
            }
            println!("Maintenance Report Configuration");
            println!("================================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency:      {}", settings.currency_code.as_str());
            println!("  Locale:        {}", settings.locale.language_tag);
            println!("  Grouping:      {:?}", settings.locale.grouping);
            println!("  Date format:   {}", settings.date_format);
            println!("  Output dir:    {}", settings.output_dir.display());
            println!("  Title prefix:  {}", settings.title_prefix);
        }
    }

    Ok(())
}
