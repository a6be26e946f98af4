use anyhow::{bail, Context};
use clap::Parser;
use tower_lsp::{LspService, Server};

mod capabilities;
mod config;
mod document;
mod handlers;
mod server;

use config::Config;

#[derive(Parser)]
#[command(name = "utilhint-lsp")]
#[command(about = "Language Server for JavaScript/TypeScript utility helpers")]
struct Cli {
    /// Use stdio for communication (required)
    #[arg(long)]
    stdio: bool,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,

    /// Language id to serve; repeat for several (default: javascript, typescript)
    #[arg(long = "language", value_name = "ID")]
    languages: Vec<String>,

    /// Print the utility catalog as JSON and exit
    #[arg(long)]
    dump_catalog: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if args.dump_catalog {
        let json = serde_json::to_string_pretty(utilhint_lsp_core::all_entries())
            .context("failed to encode utility catalog")?;
        println!("{}", json);
        return Ok(());
    }

    if !args.stdio {
        bail!("--stdio flag is required");
    }

    let config = Config::new(args.debug, args.languages);

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(|client| server::Backend::new(client, config));

    Server::new(stdin, stdout, socket).serve(service).await;

    Ok(())
}
