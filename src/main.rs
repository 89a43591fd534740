//! nat-configure - Etapa de configuração do build do Nat
//!
//! Gera `src/config.h` com `NAT_CORE_LOC` e `NAT_SYSTEM_LOC`, os caminhos
//! que o runtime usa para carregar o core da linguagem.
//!
//! # Uso
//! ```bash
//! NAT_BASE_DIR=/proj nat-configure generate
//! nat-configure generate --target virtualized
//! nat-configure env
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;

mod commands;
mod core;

use commands::ConfigureArgs;
use crate::core::{config, utils::Output};

#[derive(Parser)]
#[command(name = "nat-configure")]
#[command(about = "⚙ nat-configure - Gera o config.h do Nat", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Gera src/config.h
    Generate {
        #[command(flatten)]
        args: ConfigureArgs,
    },

    /// Mostra os caminhos resolvidos
    Env {
        #[command(flatten)]
        args: ConfigureArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    crate::core::tracing::setup(config::env_vars::TRACING);

    if !cli.quiet {
        println!("{}", "⚙ nat-configure".bright_cyan().bold());
        println!();
    }

    match cli.command {
        Commands::Generate { args } => {
            commands::generate::run(&args, Output::new(cli.quiet, cli.verbose))?;
        }
        Commands::Env { args } => commands::env::run(&args)?,
    }

    Ok(())
}
