use cardioscore_server::cli::{Cli, Commands};
use cardioscore_server::config::ServiceConfig;
use cardioscore_server::server::run_server;
use cardioscore_server::state::AppState;
use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Start {
            port,
            address,
            model,
            output,
            threshold,
            verbose,
        } => {
            init_logging(verbose);

            let config = ServiceConfig {
                model_path: model,
                output,
                threshold,
            };
            config.validate().map_err(anyhow::Error::msg)?;

            let classifier = cardioscore_model::load_classifier(&config.model_path)?;
            let addr: SocketAddr = format!("{}:{}", address, port).parse()?;

            println!();
            println!("  cardioscore — heart-disease prediction service");
            println!();
            println!("  Model:     {}", config.model_path.display());
            println!("  Output:    {:?}", config.output);
            println!("  Threshold: {}", config.threshold);
            println!();
            println!("  POST http://{}/predict", addr);
            println!();

            let state = AppState::new(classifier, config);
            run_server(state, addr).await?;
        }

        Commands::Inspect { model, verbose } => {
            init_logging(verbose);

            let artifact = cardioscore_model::load_artifact(&model)?;

            println!("Artifact: {}", model.display());
            println!("  Model:    {}", artifact.model);
            println!("  Version:  {}", artifact.version);
            println!("  Classes:  {:?}", artifact.classes);
            println!("  Scaled:   {}", artifact.scaler.is_some());
            println!("  Features ({}):", artifact.feature_names.len());
            for (name, coefficient) in artifact.feature_names.iter().zip(&artifact.coefficients) {
                println!("    {name:<10} {coefficient:+.6}");
            }
            println!("  Intercept: {:+.6}", artifact.intercept);
            println!();
            println!("Artifact is valid.");
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "cardioscore=debug,cardioscore_server=debug,cardioscore_model=debug,tower_http=debug"
    } else {
        "cardioscore=info,cardioscore_server=info,cardioscore_model=info,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
