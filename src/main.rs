mod answers;
mod cli;
mod config;
mod core;
mod questionnaire;

use anyhow::Result;
use clap::Parser;
use cli::{AssessArgs, Cli, Commands, TemplateArgs};
use questionnaire::QUESTIONNAIRE;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Assess(args) => run_assess(args),
        Commands::Template(args) => run_template(args),
        Commands::Init(args) => {
            if args.config.is_some() {
                warn!("--config is ignored by `eam-maturity init`; writing ./eam-maturity.toml");
            }

            let path = std::env::current_dir()?.join(config::CONFIG_FILE_NAME);
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
    }
}

fn run_assess(args: AssessArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(args.config.as_deref(), &cwd)?;
    let answers = answers::load_answers(&resolve_path(&cwd, &args.answers))?;
    let report = core::run_assessment(&QUESTIONNAIRE, &answers, &loaded.config)?;

    if args.export {
        let out_dir = resolve_path(&cwd, &args.out_dir);
        let (csv_path, summary_path) =
            core::export::write_exports(&out_dir, &loaded.config.export, &report)?;
        info!(
            csv = %csv_path.display(),
            summary = %summary_path.display(),
            "exported results"
        );
    }

    let output_json = args.json || loaded.config.general.json;
    if output_json {
        let json_report = core::report::JsonReport::from(&report);
        println!("{}", serde_json::to_string_pretty(&json_report)?);
    } else {
        core::report::print_human(&report);
    }

    if report.exit.ok { Ok(0) } else { Ok(1) }
}

fn run_template(args: TemplateArgs) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(args.config.as_deref(), &cwd)?;
    let path = resolve_path(&cwd, &args.output);
    answers::write_template(&path, &QUESTIONNAIRE, &loaded.config)?;
    println!("created {}", path.display());
    Ok(0)
}

fn resolve_path(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
