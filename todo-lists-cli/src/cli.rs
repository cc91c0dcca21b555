use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "todo-lists")]
#[command(version)]
#[command(about = "Serve session-scoped todo lists over HTTP")]
#[command(long_about = "
todo-lists runs a small web application for keeping todo lists. Each browser
gets its own lists, kept in a session identified by a cookie.

Configuration is read from todo-lists.{toml,yaml,yml,json} in ~/.todo-lists/
and the working directory, then from TODO_LISTS_* environment variables
(use __ between nested keys, e.g. TODO_LISTS_SESSION__STORE=file).

Example usage:
  todo-lists                          # Serve on 127.0.0.1:5003
  todo-lists serve --port 8080        # Serve on another port
  todo-lists --config ./dev.toml config   # Show the resolved configuration
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file merged above discovered files
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve {
        /// Address to bind, overriding configuration
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overriding configuration
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the resolved configuration as YAML
    Config,
}

impl Cli {
    /// Parse arguments, returning clap's error instead of exiting
    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(args)
    }

    /// The subcommand to run; `serve` when none was given
    pub fn command(&self) -> Commands {
        match &self.command {
            Some(Commands::Serve { host, port }) => Commands::Serve {
                host: host.clone(),
                port: *port,
            },
            Some(Commands::Config) => Commands::Config,
            None => Commands::Serve {
                host: None,
                port: None,
            },
        }
    }
}
