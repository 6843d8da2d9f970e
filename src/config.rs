use crate::error::MirrorError;
use crate::model::Configuration;
use std::fs;
use std::path::Path;

/// Environment variables that take precedence over the file, when non-empty.
/// The field-name spelling wins over the upper-cased one.
pub const URL_ENV: [&str; 2] = ["Segments4URL", "SEGMENTS4URL"];
pub const PATH_ENV: [&str; 2] = ["FilePath", "FILEPATH"];

fn env_override(env: &impl Fn(&str) -> Option<String>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|&key| env(key))
        .find(|v| !v.is_empty())
}

pub fn load_config(path: &Path) -> Result<Configuration, MirrorError> {
    load_config_with(path, |key| std::env::var(key).ok())
}

pub fn load_config_with(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Configuration, MirrorError> {
    let fail = |message: String| MirrorError::Config {
        path: path.to_path_buf(),
        message,
    };
    let text = fs::read_to_string(path).map_err(|e| fail(e.to_string()))?;
    let mut config: Configuration =
        serde_json::from_str(&text).map_err(|e| fail(e.to_string()))?;

    if let Some(url) = env_override(&env, &URL_ENV) {
        config.segments4_url = url;
    }
    if let Some(dir) = env_override(&env, &PATH_ENV) {
        config.file_path = dir;
    }

    if config.segments4_url.trim().is_empty() {
        return Err(fail("Segments4URL is empty".into()));
    }
    if config.file_path.trim().is_empty() {
        return Err(fail("FilePath is empty".into()));
    }
    Ok(config)
}
