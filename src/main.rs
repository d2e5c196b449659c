//! nbctl - batch tooling for Jupyter notebooks
//!
//! A command-line tool for checking, stripping, executing and rendering
//! notebooks through `jupyter nbconvert`.

use clap::Parser;
use nbctl::cli::args::{generate_completions, Cli, Commands};
use nbctl::commands::{
    run_check_stripped, run_execute, run_strip, run_strip_stdout, run_to_html, CommandContext,
};
use nbctl::config::{Config, ConfigBuilder, LoggingConfig};
use nbctl::error::AppError;
use nbctl::tool::nbconvert::SPAWN_FAILURE_EXIT_CODE;

fn main() {
    let cli = parse_args();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            init_logging(LoggingConfig {
                verbose: cli.verbose,
            });
            log::error!("{}", e);
            print_error(&e);
            std::process::exit(1);
        }
    };

    init_logging(config.logging());

    if let Err(e) = run(&cli, config) {
        log::debug!("{:?}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

/// Parse arguments, reporting usage errors with exit code 1
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            // Nothing useful to do if stderr is gone
            let _ = e.print();
            std::process::exit(1);
        }
    }
}

fn init_logging(logging: LoggingConfig) {
    env_logger::Builder::new()
        .filter_level(logging.level_filter())
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config, AppError> {
    let mut builder = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_program(cli.jupyter.clone());

    if cli.verbose {
        builder = builder.with_verbose(Some(true));
    }

    builder = match &cli.command {
        Commands::Run(args) => builder.with_timeout(args.timeout),
        Commands::ToHtml(args) => builder.with_output_dir(args.output.clone()),
        _ => builder,
    };

    Ok(builder.build()?)
}

fn run(cli: &Cli, config: Config) -> Result<(), AppError> {
    let tool = config.nbconvert();
    let ctx = CommandContext::new(tool, config, cli.format);

    match &cli.command {
        Commands::CheckStripped(args) => run_check_stripped(args, &ctx),

        Commands::Strip(args) => run_strip(args, &ctx),

        Commands::StripStdout(args) => run_strip_stdout(args, &ctx),

        Commands::ToHtml(args) => run_to_html(args, &ctx),

        Commands::Run(args) => run_execute(args, &ctx),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::OperationFailed {
            exit_code: Some(SPAWN_FAILURE_EXIT_CODE),
            ..
        } => {
            eprintln!();
            eprintln!("Hint: Make sure Jupyter is installed and on your PATH.");
            eprintln!("      Try 'pip install nbconvert' or set NBCTL_JUPYTER.");
        }
        AppError::NotStripped { path, .. } => {
            eprintln!();
            eprintln!("Hint: Run 'nbctl strip -f {}' to clear outputs.", path.display());
        }
        _ => {}
    }
}
