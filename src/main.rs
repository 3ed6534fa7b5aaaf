use clap::Parser;
use lighthouse_batch::{cli, config, errors};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let verbose = cli.verbose > 0;
    let result = match cli.command {
        cli::Commands::Run(args) => cli::run::handle_run(args, verbose, cli.quiet).await,
        cli::Commands::Check(args) => cli::check::handle_check(args).await,
        cli::Commands::Serve(args) => cli::serve::handle_serve(args, verbose).await,
        cli::Commands::Validate(args) => handle_validate(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let classification = e.classify();
        tracing::debug!(error_type = classification.error_type, "Exiting with failure");
        std::process::exit(classification.exit_code);
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), errors::BatchError> {
    let path = std::path::PathBuf::from(&args.config);
    let config = config::parse_config(&path).await?;
    println!("Configuration is valid: {} ({} site(s))", args.config, config.sites.len());
    Ok(())
}
