use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::export::ExportFormat;
use crate::preview::DEFAULT_PREVIEW_ELEMENT_ID;

#[derive(Debug, Parser)]
#[command(
    name = "buttonsmith",
    version,
    about = "Compile a button style config into CSS, utility classes or design tokens"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate one export format from a config file, a saved preset or the defaults.
    Export(ExportArgs),
    /// Print the canonical default config as JSON.
    Defaults,
    /// Manage named presets.
    #[command(subcommand)]
    Presets(PresetCommand),
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Button config JSON file.
    #[arg(short, long, conflicts_with = "preset")]
    pub input: Option<PathBuf>,
    /// Name of a saved preset.
    #[arg(short, long)]
    pub preset: Option<String>,
    /// css, tailwind or tokens.
    #[arg(short, long)]
    pub format: Option<ExportFormat>,
    /// Scope the stylesheet to the element with this id (`preview-button` when
    /// given without a value).
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_PREVIEW_ELEMENT_ID)]
    pub preview_id: Option<String>,
    /// Copy to the clipboard instead of printing.
    #[arg(long)]
    pub copy: bool,
}

#[derive(Debug, Subcommand)]
pub enum PresetCommand {
    /// List saved preset names.
    List,
    /// Save a config under a name.
    Save {
        name: String,
        /// Button config JSON file; the defaults when omitted.
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}
