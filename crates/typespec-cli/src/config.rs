use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use typespec_resolver::ResolveOptions;

use crate::args::CliArgs;

/// File name looked up when a directory is given as the project.
pub const CONFIG_FILE_NAME: &str = "typespec.json";

/// Location of the combined extractor document inside the spec directory.
pub const DEFAULT_SPEC_FILE: &str = "enrichments/tsdoc_v2/combined.json";

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TypeSpecConfig {
    /// Directory holding spec files, relative to the config file.
    #[serde(default)]
    pub spec_directory: Option<String>,
    /// Extractor document, relative to `spec_directory`.
    #[serde(default)]
    pub spec_file: Option<String>,
    #[serde(default)]
    pub anonymous_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub spec_path: PathBuf,
    pub options: ResolveOptions,
}

pub fn parse_config(source: &str) -> Result<TypeSpecConfig> {
    serde_json::from_str(source).context("failed to parse typespec config")
}

pub fn load_config(path: &Path) -> Result<TypeSpecConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&source).with_context(|| format!("in {}", path.display()))
}

/// Accept either a config file or a directory containing `typespec.json`.
pub fn config_path_for(project: &Path) -> PathBuf {
    if project.is_dir() {
        project.join(CONFIG_FILE_NAME)
    } else {
        project.to_path_buf()
    }
}

/// Resolve relative paths in `config` against `base_dir`.
pub fn resolve_config(config: &TypeSpecConfig, base_dir: &Path) -> ResolvedConfig {
    let spec_directory = match config.spec_directory.as_deref() {
        Some(dir) => base_dir.join(dir),
        None => base_dir.to_path_buf(),
    };
    let spec_file = config.spec_file.as_deref().unwrap_or(DEFAULT_SPEC_FILE);

    let mut options = ResolveOptions::default();
    if let Some(name) = &config.anonymous_name {
        options.anonymous_name = name.clone();
    }

    ResolvedConfig {
        spec_path: spec_directory.join(spec_file),
        options,
    }
}

/// Combine the config file (explicit, or `typespec.json` in `cwd`) with
/// command-line overrides.
pub fn resolve_cli_config(args: &CliArgs, cwd: &Path) -> Result<ResolvedConfig> {
    let (config, base_dir) = match &args.project {
        Some(project) => {
            let project = cwd.join(project);
            let path = config_path_for(&project);
            if !path.is_file() {
                bail!("config file not found: {}", path.display());
            }
            let base_dir = path.parent().unwrap_or(cwd).to_path_buf();
            (load_config(&path)?, base_dir)
        }
        None => {
            let implicit = cwd.join(CONFIG_FILE_NAME);
            if implicit.is_file() {
                (load_config(&implicit)?, cwd.to_path_buf())
            } else {
                (TypeSpecConfig::default(), cwd.to_path_buf())
            }
        }
    };

    let mut resolved = resolve_config(&config, &base_dir);
    if let Some(spec) = &args.spec {
        resolved.spec_path = cwd.join(spec);
    }
    if let Some(name) = &args.anonymous_name {
        resolved.options.anonymous_name = name.clone();
    }
    Ok(resolved)
}
