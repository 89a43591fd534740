//! Módulo core - Resolução de caminhos e geração do config.h

pub mod config;
pub mod error;
pub mod header;
pub mod paths;
pub mod settings;
pub mod tracing;
pub mod utils;
pub mod writer;
