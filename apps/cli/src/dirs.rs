use std::path::PathBuf;

const DATA_DIR_NAME: &str = "fleet-manager";

/// Resolves an XDG base directory, falling back to `$HOME/<fallback>`.
pub fn xdg_base(var: &str, fallback: &str) -> Result<PathBuf, String> {
    if let Ok(value) = std::env::var(var)
        && !value.trim().is_empty()
    {
        return Ok(PathBuf::from(value));
    }
    let home = std::env::var("HOME").map_err(|err| format!("resolve HOME: {}", err))?;
    Ok(PathBuf::from(home).join(fallback))
}

pub fn resolve_data_dir() -> Result<PathBuf, String> {
    let base = xdg_base("XDG_DATA_HOME", ".local/share")?;
    Ok(base.join(DATA_DIR_NAME))
}
