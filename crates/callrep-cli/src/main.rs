mod interactive;
mod lookup;
mod session;

#[cfg(test)]
mod test_support;

use std::io::Write;
use std::process::ExitCode;

use callrep_core::Issue;
use callrep_fivecalls::FiveCallsClient;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::lookup::ScriptArgs;

#[derive(Debug, Parser)]
#[command(name = "callrep")]
#[command(about = "Find your members of Congress and generate a call or email script")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Look up your federal representatives by ZIP code
    Lookup {
        /// ZIP code to look up
        #[arg(long)]
        zip: String,
    },
    /// Look up representatives and print a script for one of them
    Script {
        /// ZIP code to look up
        #[arg(long)]
        zip: String,
        /// Your name (shown as [NAME] when omitted)
        #[arg(long, default_value = "")]
        name: String,
        /// Email or phone number for a response
        #[arg(long, default_value = "")]
        contact: String,
        /// Issue to raise; repeat for several (ceasefire, ethnic-cleansing,
        /// humanitarian-aid, military-aid)
        #[arg(long = "issue", required = true)]
        issues: Vec<Issue>,
        /// Index of the representative to address, as listed by `lookup`
        #[arg(long, default_value = "0")]
        rep: usize,
    },
    /// Fill in the form step by step
    Interactive,
    /// List the issues you can raise
    Issues,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = callrep_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = FiveCallsClient::from_config(&config)?;
    if !client.has_api_key() {
        tracing::warn!("FIVE_CALLS_API_KEY is not set; representative lookups will fail");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let ok = match cli.command {
        Some(Commands::Lookup { zip }) => lookup::run_lookup(&client, &zip, &mut out).await?,
        Some(Commands::Script {
            zip,
            name,
            contact,
            issues,
            rep,
        }) => {
            let args = ScriptArgs {
                zip: &zip,
                name: &name,
                contact: &contact,
                issues: &issues,
                rep,
            };
            lookup::run_script(&client, &args, &mut out).await?
        }
        Some(Commands::Issues) => {
            for issue in Issue::ALL {
                writeln!(out, "{:<18}{}", issue.slug(), issue.label())?;
            }
            true
        }
        Some(Commands::Interactive) | None => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            interactive::run_interactive(&client, stdin, &mut out).await?;
            true
        }
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
