use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use sotay_config::Config;

/// Load config from a JSON file, or defaults when no file is given.
/// Environment overrides apply in both cases.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };

    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    let config: Config = serde_json::from_reader(reader)
        .with_context(|| format!("parsing {}", path.display()))?;

    Ok(config.with_env_overrides())
}
