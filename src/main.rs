use clap::Parser;
use sdet_architect::cli::{Cli, Cmd};
use sdet_architect::commands;
use sdet_architect::core::config::Config;
use sdet_architect::core::context::AppCtx;
use sdet_architect::GenerationAdapter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("• {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "warn,sdet_architect=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), String> {
    let config = Config::load(cli.config.as_deref()).map_err(|e| e.to_string())?;
    let mut ctx = AppCtx::new(GenerationAdapter::from_config(&config));

    match cli.command {
        Cmd::Interactive => commands::interactive::run(&mut ctx).await,
        command => commands::dispatch(command, &mut ctx).await,
    }
}
