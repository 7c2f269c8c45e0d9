use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "swatch-cli")]
#[command(about = "Query CLI for the swatch color lookup service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the HTML swatch for a color name
    Css {
        /// Color name, e.g. "red" or "cornflowerblue"
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Css { name } => {
            let res = client
                .get(format!("{}/css/{}", cli.url, name))
                .send()
                .await?;
            println!("Status: {}", res.status());
            println!("{}", res.text().await?);
        }
    }

    Ok(())
}
