use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{forecast, serve};

#[derive(Parser)]
#[command(name = "piview")]
#[command(about = "Pi Wallet View API server and CLI tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
    /// Generate one mining forecast and print it as JSON
    ///
    /// Requires GEMINI_API_KEY to be set. Useful for smoke-testing the
    /// generation pipeline without starting the server.
    Forecast {
        /// Current mining rate in π per hour
        #[arg(long)]
        current_rate: f64,

        /// Total referred members
        #[arg(long)]
        team_size: u32,

        /// Members currently mining
        #[arg(long)]
        active_members: u32,

        /// The goal to ask the model about
        #[arg(long)]
        question: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address } => {
                serve(&bind_address).await?;
            }
            Commands::Forecast {
                current_rate,
                team_size,
                active_members,
                question,
            } => {
                forecast(current_rate, team_size, active_members, &question).await?;
            }
        }
        Ok(())
    }
}
