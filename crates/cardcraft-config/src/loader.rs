// SPDX-FileCopyrightText: 2026 Cardcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./cardcraft.toml` > `~/.config/cardcraft/cardcraft.toml`
//! > `/etc/cardcraft/cardcraft.toml` with environment variable overrides via
//! the `CARDCRAFT_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::CardcraftConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/cardcraft/cardcraft.toml";

/// Config file in the working directory.
pub const LOCAL_CONFIG_PATH: &str = "cardcraft.toml";

/// User config file under the XDG config dir, if one can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("cardcraft/cardcraft.toml"))
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/cardcraft/cardcraft.toml`
/// 3. `~/.config/cardcraft/cardcraft.toml`
/// 4. `./cardcraft.toml`
/// 5. `CARDCRAFT_*` environment variables
pub fn load_config() -> Result<CardcraftConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<CardcraftConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CardcraftConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<CardcraftConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(CardcraftConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for hierarchy loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(CardcraftConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(LOCAL_CONFIG_PATH))
        .merge(env_provider())
}

/// Environment provider mapping `CARDCRAFT_<SECTION>_<KEY>` to `section.key`.
///
/// Uses `Env::map()` rather than `Env::split("_")` because keys such as
/// `max_tokens` contain underscores: `CARDCRAFT_OPENAI_MAX_TOKENS` must map to
/// `openai.max_tokens`.
fn env_provider() -> Env {
    Env::prefixed("CARDCRAFT_").map(|key| map_env_key(key.as_str()).into())
}

/// Maps a prefix-stripped env var name to a dotted config path.
///
/// Figment hands over the name in its original case, so it is lowercased
/// before the section is matched.
pub fn map_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    ["app", "openai"]
        .iter()
        .find_map(|section| {
            key.strip_prefix(section)
                .and_then(|rest| rest.strip_prefix('_'))
                .map(|field| format!("{section}.{field}"))
        })
        .unwrap_or(key)
}
