//! Configuration module - Names and constants shared by the generator

/// Environment variables read by the generator
pub mod env_vars {
    /// Project root override
    pub const BASE_DIR: &str = "NAT_BASE_DIR";

    /// Tracing filter (e.g. `nat_configure=debug`)
    pub const TRACING: &str = "NAT_TRACING";
}

/// Source tree layout, relative to the project root
pub mod layout {
    /// Source directory under the project root
    pub const SRC: &str = "src";

    /// Core library directory under `src/`
    pub const CORE: &str = "core";

    /// Canonical name of the core index module.
    ///
    /// Older trees call it `__index__`; the module loader resolves that alias,
    /// this generator only ever emits `index`.
    pub const INDEX_NAME: &str = "index";

    /// Core system module
    pub const SYSTEM: &str = "system";

    /// Generated header, written into `src/`
    pub const CONFIG_HEADER: &str = "config.h";
}

/// Header emission constants
pub mod header {
    /// Include guard macro
    pub const GUARD: &str = "nat_config_h";

    /// Macro tested to select the virtualized branch
    pub const VIRTUAL_TARGET_MACRO: &str = "__EMSCRIPTEN__";

    /// Root the virtualized runtime mounts the project tree at
    pub const VIRTUAL_ROOT: &str = "/";

    /// Core index location macro
    pub const CORE_LOC: &str = "NAT_CORE_LOC";

    /// Core system location macro
    pub const SYSTEM_LOC: &str = "NAT_SYSTEM_LOC";

    /// Project root macro, only emitted on request
    pub const BASE_DIR: &str = "NAT_BASE_DIR";
}
