use std::io::Read;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Read a JSON payload from a file, or from stdin when the path is `-`.
pub fn read_payload<T>(path: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read payload from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read payload file {}", path.display()))?
    };

    serde_json::from_str(&text)
        .with_context(|| format!("invalid payload in {}", path.display()))
}
