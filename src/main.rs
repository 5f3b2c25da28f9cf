//! CLI entry point for editorial

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "editorial")]
#[command(version)]
#[command(about = "A server-rendered blog front-end", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pre-render every route to the public folder
    #[command(alias = "g")]
    Generate,

    /// Start the HTTP server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,
    },

    /// Clean the public folder
    Clean,

    /// List site information
    List {
        /// Type of content to list (post, route, category)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "editorial=debug,tower_http=debug,info"
    } else {
        "editorial=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Generate => {
            let app = editorial::Editorial::new(&base_dir)?;
            tracing::info!("Generating static files...");
            app.generate()?;
            println!("Generated successfully!");
        }

        Commands::Server { port, ip, open } => {
            let app = editorial::Editorial::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            editorial::server::start(&app, &ip, port, open).await?;
        }

        Commands::Clean => {
            let app = editorial::Editorial::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            app.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type } => {
            let app = editorial::Editorial::new(&base_dir)?;
            editorial::commands::list::run(&app, &r#type)?;
        }

        Commands::Version => {
            println!("editorial version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
