pub mod init;
pub mod login;
pub mod logout;
pub mod report;
pub mod sum;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Sign in to the learning platform")]
    Login,
    #[command(about = "Sign out and close any open session")]
    Logout,
    #[command(about = "Track study time while this terminal stays open")]
    Watch,
    #[command(about = "Show today / week / month study time")]
    Sum,
    #[command(about = "Show per-day study time for a date range")]
    Report(report::ReportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login => login::cmd().await,
            Commands::Logout => logout::cmd().await,
            Commands::Watch => watch::cmd().await,
            Commands::Sum => sum::cmd().await,
            Commands::Report(args) => report::cmd(args).await,
        }
    }
}
