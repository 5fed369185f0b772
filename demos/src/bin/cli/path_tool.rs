//! Path Tool CLI
//!
//! Inspect or rewrite path strings under a chosen platform's syntax, regardless of the
//! host OS. Nothing is read from or written to disk.
//!
//! ```text
//! path_tool --platform windows root-len 'C:\foo'           # 3
//! path_tool --platform posix dirname /usr/local/bin        # /usr/local
//! path_tool change-ext report.doc .pdf                     # report.pdf
//! path_tool --config layout.json combine /srv www
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use portable_path::{PathSyntax, Platform, SeparatorConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "path_tool")]
#[command(about = "Platform-aware path string manipulation")]
struct Cli {
    /// Path syntax to apply (windows | posix). Defaults to the host's.
    #[arg(short, long, global = true)]
    platform: Option<Platform>,
    /// JSON file holding a full separator configuration; overrides --platform.
    #[arg(long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the extension of the final segment (with its leading dot)
    Ext { path: String },
    /// Replace the extension; omit EXTENSION to strip it
    ChangeExt {
        path: String,
        extension: Option<String>,
    },
    /// Print the parent directory; prints nothing for a root
    Dirname { path: String },
    /// Print the file name
    Basename {
        path: String,
        /// Drop the extension as well
        #[arg(short, long)]
        strip_ext: bool,
    },
    /// Print the root prefix length in bytes
    RootLen { path: String },
    /// Print the root prefix
    Root { path: String },
    /// Join two paths
    Combine { left: String, right: String },
    /// Check a path for illegal characters
    Check {
        path: String,
        /// Also reject the wildcards * and ?
        #[arg(long)]
        strict: bool,
    },
    /// Split a PATH-style list, one entry per line
    SplitList { list: String },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<SeparatorConfig> {
    if let Some(file) = &cli.config {
        let text =
            std::fs::read_to_string(file).with_context(|| format!("reading config '{file}'"))?;
        let config: SeparatorConfig =
            serde_json::from_str(&text).with_context(|| format!("parsing config '{file}'"))?;
        tracing::info!(platform = %config.platform, file = %file, "loaded separator config");
        return Ok(config);
    }
    // Host detection belongs to the caller, not to the library.
    let host = if cfg!(windows) {
        Platform::Windows
    } else {
        Platform::Posix
    };
    Ok(SeparatorConfig::for_platform(cli.platform.unwrap_or(host)))
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let syntax = PathSyntax::from_config(load_config(&cli)?);

    match &cli.command {
        Commands::Ext { path } => {
            let ext = syntax.get_extension(Some(path.as_str()))?.unwrap_or_default();
            println!("{ext}");
        }
        Commands::ChangeExt { path, extension } => {
            if let Some(out) = syntax.change_extension(Some(path.as_str()), extension.as_deref())? {
                println!("{out}");
            }
        }
        Commands::Dirname { path } => {
            match syntax.get_directory_name(Some(path.as_str()))? {
                Some(dir) => println!("{dir}"),
                None => tracing::info!(path = %path, "path is a root; no parent directory"),
            }
        }
        Commands::Basename { path, strip_ext } => {
            let name = if *strip_ext {
                syntax.get_file_name_without_extension(Some(path.as_str()))?
            } else {
                syntax.get_file_name(Some(path.as_str()))?
            };
            println!("{}", name.unwrap_or_default());
        }
        Commands::RootLen { path } => println!("{}", syntax.root_length(path)?),
        Commands::Root { path } => {
            println!("{}", syntax.get_path_root(Some(path.as_str()))?.unwrap_or_default())
        }
        Commands::Combine { left, right } => {
            println!("{}", syntax.combine(Some(left.as_str()), Some(right.as_str()))?)
        }
        Commands::Check { path, strict } => {
            portable_path::check_invalid_path_chars(Some(path.as_str()), *strict)?;
            println!("ok");
        }
        Commands::SplitList { list } => {
            for entry in syntax.split_path_list(list)? {
                println!("{entry}");
            }
        }
    }
    Ok(())
}
