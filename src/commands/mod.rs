//! Módulo de comandos do nat-configure

pub mod env;
pub mod generate;

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use xshell::Shell;

use crate::core::header::HeaderOptions;
use crate::core::paths::{BaseDirPolicy, BuildPathConfig, Environment, TargetMode};
use crate::core::settings::Settings;

/// Opções compartilhadas por `generate` e `env`
#[derive(Args, Debug, Default)]
pub struct ConfigureArgs {
    /// Target (native, virtualized)
    #[arg(long, value_enum, env = "NAT_TARGET")]
    pub target: Option<TargetMode>,

    /// Raiz do projeto (sobrepõe NAT_BASE_DIR)
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Arquivo de configuração TOML
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Falha se nenhuma raiz for informada
    #[arg(long)]
    pub require_base_dir: bool,

    /// Também define NAT_BASE_DIR no header
    #[arg(long)]
    pub emit_base_dir: bool,
}

/// Layered inputs: CLI, then environment, then settings file, then defaults.
pub fn resolve(args: &ConfigureArgs, sh: &Shell) -> Result<(BuildPathConfig, HeaderOptions)> {
    let settings = Settings::load_optional(args.config.as_deref())?.configure;

    let env = Environment::capture(sh)
        .with_base_dir(args.base_dir.clone())
        .or_base_dir(settings.base_dir);

    let target = args.target.or(settings.target).unwrap_or_default();
    let policy = if args.require_base_dir || settings.require_base_dir {
        BaseDirPolicy::Required
    } else {
        BaseDirPolicy::FallbackToCwd
    };

    let config = BuildPathConfig::resolve(&env, target, policy)
        .context("Failed to resolve project layout")?;
    let options = HeaderOptions {
        emit_base_dir: args.emit_base_dir || settings.emit_base_dir,
    };

    Ok((config, options))
}
