use clap::Parser;
use oasguard::{
    Result,
    cli::{Cli, Commands},
    commands, telemetry,
    validation::ValidatorConfig,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let guard = telemetry::init_telemetry()?;

    let cli = Cli::parse();

    let passed = match cli.command {
        Commands::Validate {
            document,
            schema,
            value,
            format,
            engine,
        } => commands::execute_validate(
            &document,
            schema.as_deref(),
            &value,
            &format,
            engine.apply(ValidatorConfig::from_env()),
        )?,
        Commands::Schemas { document } => {
            commands::execute_schemas(&document)?;
            true
        }
        Commands::Refs { document } => commands::execute_refs(&document)?,
        Commands::Serve {
            document,
            port,
            engine,
        } => {
            commands::execute_serve(&document, port, engine.apply(ValidatorConfig::from_env()))
                .await?;
            true
        }
    };

    drop(guard);
    if !passed {
        std::process::exit(1);
    }

    Ok(())
}
