//! `export` command: build a report from a file of drafts
//!
//! Rows are validated exactly like the form. Rejected rows are listed with
//! their field errors; the report is written if at least one row is valid.

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::display::{format_entry_table, format_rejected_rows};
use crate::error::{ReportError, ReportResult};
use crate::export::DirectorySink;
use crate::services::{apply_drafts, default_title, load_drafts, ImportFormat, ReportSession};

use super::months::reference_date;

/// Draft file format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum InputFormat {
    /// JSON array of objects
    Json,
    /// CSV with an item,month,amount,deadline,status header
    Csv,
}

impl From<InputFormat> for ImportFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Json => ImportFormat::Json,
            InputFormat::Csv => ImportFormat::Csv,
        }
    }
}

/// Arguments of the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// File of draft rows
    pub input: PathBuf,

    /// Report title (default: "<prefix> - <Month YYYY>")
    #[arg(short, long)]
    pub title: Option<String>,

    /// Directory to write Maintenance_Report.xls into
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Input format (default: from the file extension)
    #[arg(short, long, value_enum)]
    pub format: Option<InputFormat>,
}

/// Run the export command
pub fn handle_export_command(settings: &Settings, args: ExportArgs) -> ReportResult<()> {
    let format = match args.format {
        Some(format) => format.into(),
        None => ImportFormat::from_path(&args.input).ok_or_else(|| {
            ReportError::Validation(format!(
                "Cannot tell the format of {}; pass --format json|csv",
                args.input.display()
            ))
        })?,
    };

    let drafts = load_drafts(&args.input, format)?;
    let title = match args.title {
        Some(title) => title,
        None => default_title(&settings.title_prefix, reference_date(None)?),
    };

    let mut session = ReportSession::new(title);
    let outcome = apply_drafts(&mut session, drafts);

    if !outcome.rejected.is_empty() {
        eprintln!("Skipped {} invalid row(s):", outcome.rejected.len());
        eprint!("{}", format_rejected_rows(&outcome.rejected));
    }

    if outcome.accepted.is_empty() {
        return Err(ReportError::Validation(format!(
            "No valid rows in {}",
            args.input.display()
        )));
    }

    let exporter = settings.exporter();
    println!("{}", session.title().to_uppercase());
    print!("{}", format_entry_table(session.entries(), &exporter));

    let output_dir = args.output.unwrap_or_else(|| settings.output_dir.clone());
    let mut sink = DirectorySink::new(output_dir);
    let delivery = session.export(&exporter, &mut sink)?;
    println!();
    println!("Report written to: {} ({} bytes)", delivery.location, delivery.size);

    Ok(())
}
