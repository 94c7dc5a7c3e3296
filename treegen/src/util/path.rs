use std::path::PathBuf;

/// Expand `~`, `$VAR` and `${VAR}`; returns the input unchanged if expansion fails.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(expand_env_vars(path))
}
