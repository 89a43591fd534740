//! Header module - Renders `config.h`
//!
//! Native builds get a flat list of defines. Virtualized builds get both sets
//! behind `#ifdef __EMSCRIPTEN__`, so the same header serves either compiler.

use super::config::header;
use super::error::ConfigureError;
use super::paths::{BuildPathConfig, MacroSet, TargetMode};

/// Rendering switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderOptions {
    /// Also define `NAT_BASE_DIR`
    pub emit_base_dir: bool,
}

/// Render the header text for a resolved layout.
pub fn render(config: &BuildPathConfig, options: HeaderOptions) -> Result<String, ConfigureError> {
    let native = config.native_macros()?;
    let mut out = String::new();

    line(&mut out, "", &format!("#ifndef {}", header::GUARD));
    line(&mut out, "", &format!("#define {}", header::GUARD));

    match config.target() {
        TargetMode::Native => defines(&mut out, "", &native, options),
        TargetMode::Virtualized => {
            line(&mut out, "", &format!("#ifdef {}", header::VIRTUAL_TARGET_MACRO));
            defines(&mut out, "  ", &config.virtual_macros(), options);
            line(&mut out, "", "#else");
            defines(&mut out, "  ", &native, options);
            line(&mut out, "", "#endif");
        }
    }

    line(&mut out, "", "#endif");
    Ok(out)
}

fn defines(out: &mut String, indent: &str, set: &MacroSet, options: HeaderOptions) {
    if options.emit_base_dir {
        define(out, indent, header::BASE_DIR, &set.base_dir);
    }
    define(out, indent, header::CORE_LOC, &set.core_loc);
    define(out, indent, header::SYSTEM_LOC, &set.system_loc);
}

fn define(out: &mut String, indent: &str, name: &str, value: &str) {
    line(out, indent, &format!("#define {} \"{}\"", name, escape(value)));
}

fn line(out: &mut String, indent: &str, text: &str) {
    out.push_str(indent);
    out.push_str(text);
    out.push('\n');
}

/// Escape a value for use inside a C string literal.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(c),
        }
    }
    escaped
}
