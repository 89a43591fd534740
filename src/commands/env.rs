//! Comando env - Mostra os caminhos resolvidos
use anyhow::Result;
use colored::*;
use xshell::Shell;

use super::ConfigureArgs;
use crate::core::paths::BaseDirSource;

pub fn run(args: &ConfigureArgs) -> Result<()> {
    let sh = Shell::new()?;
    let (config, _) = super::resolve(args, &sh)?;

    let origin = match config.source() {
        BaseDirSource::Override => "override",
        BaseDirSource::WorkingDirectory => "diretório atual",
    };

    println!("{}", "🔧 Ambiente do nat-configure:".bright_cyan());
    println!();
    println!("  {} {} ({})", label("base"), config.base_dir().display(), origin.bright_black());
    println!("  {} {}", label("src"), config.src_dir().display());
    println!("  {} {}", label("core"), config.core_index_loc().display());
    println!("  {} {}", label("system"), config.system_loc().display());
    println!("  {} {}", label("output"), config.output_path().display());
    println!("  {} {}", label("target"), config.target());

    Ok(())
}

fn label(name: &str) -> ColoredString {
    format!("{:<8}", name).bright_green()
}
