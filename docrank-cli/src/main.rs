use clap::Parser;
use docrank_cli::cli::{Cli, Commands};
use docrank_cli::{commands, init_logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Extract(args) => {
            commands::extract(args)?;
        }
        Commands::Rank(args) => {
            commands::rank(args).await?;
        }
        Commands::Run(args) => {
            commands::run(args).await?;
        }
    }

    Ok(())
}
