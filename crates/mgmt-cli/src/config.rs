use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use url::Url;

use crate::commands::{
    set_password::{SetPasswordCmd, SET_PASSWORD_HELP},
    Executor,
};

#[derive(Parser)]
#[command(
    version,
    about,
    long_about = "CLI for management service - performs administrative operations on a running installation."
)]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Sets an user password.", long_about = SET_PASSWORD_HELP)]
    SetPassword(SetPasswordCmd),
}

impl Executor for Command {
    async fn run(self) -> anyhow::Result<()> {
        match self {
            Command::SetPassword(cmd) => cmd.run().await,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ClientConfig {
    #[arg(
        short,
        long,
        env = "MGMT_ADDRESS",
        default_value = "http://localhost:9008",
        help = "Address of the management service"
    )]
    pub address: Url,

    #[arg(
        short,
        long,
        env = "MGMT_TIMEOUT",
        default_value = "5s",
        help = "Time limit for the command in human friendly format (e.g. 5s, 1m)",
        value_parser = humantime::parse_duration
    )]
    pub timeout: Duration,
}
