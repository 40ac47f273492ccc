mod probe;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use mikud_client::PostClient;
use mikud_core::AddressQuery;

#[derive(Debug, Parser)]
#[command(name = "mikud")]
#[command(about = "Israel Post zip-code lookup and probe harness")]
struct Cli {
    /// Request timeout in seconds.
    #[arg(long, env = "MIKUD_TIMEOUT_SECS", default_value_t = 8)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up the zip code for a single address.
    Lookup {
        #[arg(long)]
        city: String,
        #[arg(long)]
        street: String,
        #[arg(long)]
        house: String,
        #[arg(long)]
        entrance: Option<String>,
    },
    /// Probe random city/street/house combinations and record the hits.
    Probe {
        /// Number of combinations to try.
        #[arg(long, default_value_t = 20)]
        count: u32,
        /// Minimum delay between consecutive requests, in whole seconds.
        #[arg(long, default_value_t = 2)]
        delay_secs: u64,
        /// Where to write the JSON array of found addresses.
        #[arg(long, default_value = "valid_addresses.json")]
        output: PathBuf,
    },
    /// Probe a fixed list of addresses from a JSON file.
    ProbeList {
        /// JSON array of `{city, street, house, entrance?}` objects.
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = 2)]
        delay_secs: u64,
        #[arg(long, default_value = "valid_addresses.json")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let client = PostClient::new(cli.timeout_secs)?;

    match cli.command {
        Commands::Lookup {
            city,
            street,
            house,
            entrance,
        } => {
            let query = AddressQuery::new(&city, &street, &house, entrance.as_deref());
            let result = client.lookup(&query).await;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Probe {
            count,
            delay_secs,
            output,
        } => {
            let queries = probe::random_queries(count);
            probe::run(&client, &queries, delay_secs, &output).await?;
        }
        Commands::ProbeList {
            input,
            delay_secs,
            output,
        } => {
            let queries = probe::load_queries(&input)?;
            probe::run(&client, &queries, delay_secs, &output).await?;
        }
    }

    Ok(())
}
