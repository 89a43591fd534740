//! Comando generate - Gera src/config.h
use anyhow::{Context, Result};
use colored::*;
use xshell::Shell;

use super::ConfigureArgs;
use crate::core::config::header as header_config;
use crate::core::paths::{BaseDirSource, TargetMode};
use crate::core::utils::Output;
use crate::core::{header, writer};

pub fn run(args: &ConfigureArgs, out: Output) -> Result<()> {
    if !out.quiet {
        println!("{}", "⚙ Gerando config.h...".bright_yellow());
    }

    let sh = Shell::new()?;
    let (config, options) = super::resolve(args, &sh)?;

    if config.source() == BaseDirSource::WorkingDirectory {
        out.warning("NAT_BASE_DIR não definido, usando diretório atual");
    }
    out.detail("Raiz", &config.base_dir().display().to_string());
    out.detail("Target", &config.target().to_string());
    if config.target() == TargetMode::Virtualized {
        out.detail("Ramo virtual", header_config::VIRTUAL_TARGET_MACRO);
    }

    out.step("Resolvendo caminhos do core...");
    let text = header::render(&config, options).context("Failed to render config.h")?;

    let dest = config.output_path();
    out.step(&format!("Escrevendo {}", dest.display()));
    writer::write_atomic(&dest, &text)?;

    out.success("config.h gerado");
    Ok(())
}
