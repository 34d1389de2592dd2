use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "eam-maturity",
    version,
    about = "Enterprise architecture management maturity self-assessment"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Score a filled-in answers file
    Assess(AssessArgs),
    /// Write an answers file with every statement at its default rating
    Template(TemplateArgs),
    /// Write a default eam-maturity.toml into the current directory
    Init(InitArgs),
}

#[derive(Debug, Args, Clone)]
pub struct AssessArgs {
    /// Answers file (TOML, or JSON with a .json extension)
    pub answers: PathBuf,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
    /// Write the CSV detail table and the executive summary
    #[arg(long)]
    pub export: bool,
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct TemplateArgs {
    #[arg(long, default_value = "answers.toml")]
    pub output: PathBuf,
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}
