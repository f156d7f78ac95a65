//! featgen's main application entry point.
//! Parses arguments, loads the environment configuration once and hands
//! both to the generation pipeline.

use std::path::PathBuf;

use featgen::{
    cli::{get_args, Args, Command},
    error::{default_error_handler, Result},
    generator::{generate_feature, GeneratorOptions},
    guard::EnvConfig,
    logger::init_logger,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the project directory
/// 2. Reads environment signals (process environment, then src/config/.env)
/// 3. Runs the generation pipeline
/// 4. Prints the summary
fn run(args: Args) -> Result<()> {
    let Command::Generate { name } = args.command;

    let options = GeneratorOptions::new(args.project_dir.unwrap_or_else(|| PathBuf::from(".")))?;
    let env = EnvConfig::load(options.project_dir())?;
    let renderer = MiniJinjaRenderer::new();

    let summary = generate_feature(&options, &env, &renderer, name.as_deref())?;
    println!("{summary}");
    Ok(())
}
