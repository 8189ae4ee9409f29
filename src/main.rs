use clap::{Parser, Subcommand};
use courier_core::{config, context::RequestContext};
use courier_methods::catalog;
use courier_types::{Chat, Message, MessageId, TelegramObject, User};
use serde_json::Value;
use std::io::Read;

#[derive(Parser)]
#[command(
    name = "courier",
    version,
    about = "Courier: build Telegram Bot API requests and check response payloads offline"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the request a method would send, without sending it.
    Build {
        /// Endpoint name, e.g. `copyMessage`.
        method: String,
        /// JSON file with the method parameters (`-` for stdin).
        #[arg(default_value = "-")]
        params: String,
    },
    /// Parse an API object and print its canonical wire form.
    Parse {
        /// One of: chat, message, message_id, user.
        entity: String,
        /// JSON file with the object (`-` for stdin).
        #[arg(default_value = "-")]
        payload: String,
    },
    /// List the methods `build` understands.
    Methods,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.bot.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Build { method, params } => {
            let ctx = RequestContext::from_config(&cfg);
            let params = read_json(&params)?;
            let request = catalog::build_named(&method, params, &ctx)?;
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        Commands::Parse { entity, payload } => {
            let payload = read_json(&payload)?;
            let wire = reencode(&entity, payload)?;
            println!("{}", serde_json::to_string_pretty(&wire)?);
        }
        Commands::Methods => {
            for name in catalog::endpoints() {
                println!("{name}");
            }
        }
    }

    Ok(())
}

/// Read a JSON document from a file, or from stdin for `-`.
fn read_json(source: &str) -> anyhow::Result<Value> {
    let text = if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(source)
            .map_err(|e| anyhow::anyhow!("failed to read {source}: {e}"))?
    };
    Ok(serde_json::from_str(&text)?)
}

/// Parse `payload` as the named entity and encode it back.
fn reencode(entity: &str, payload: Value) -> anyhow::Result<Value> {
    let wire = match entity {
        "chat" => Chat::from_wire(payload)?.to_wire()?,
        "message" => Message::from_wire(payload)?.to_wire()?,
        "message_id" => MessageId::from_wire(payload)?.to_wire()?,
        "user" => User::from_wire(payload)?.to_wire()?,
        other => anyhow::bail!("unknown entity '{other}' (expected chat, message, message_id, user)"),
    };
    Ok(wire)
}
