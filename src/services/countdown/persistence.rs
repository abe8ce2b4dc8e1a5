use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{self, Error as SerdeError};

pub fn load_mapping<V>(path: &Path) -> Result<BTreeMap<String, V>>
where
    V: DeserializeOwned,
{
    if !path.exists() {
        return Ok(BTreeMap::new());
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read day state from {}", path.display()))?;
    let mapping = serde_json::from_str(&data).map_err(|err| map_deser_error(err, path))?;
    Ok(mapping)
}

pub fn save_mapping<V>(path: &Path, mapping: &BTreeMap<String, V>) -> Result<()>
where
    V: Serialize,
{
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let data = serde_json::to_string_pretty(mapping)?;
    fs::write(path, data)
        .with_context(|| format!("failed to write day state to {}", path.display()))?;
    Ok(())
}

fn map_deser_error(err: SerdeError, path: &Path) -> anyhow::Error {
    anyhow::Error::new(err).context(format!(
        "failed to deserialize day state from {}",
        path.display()
    ))
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn missing_file_loads_as_empty_mapping() {
        let dir = tempdir().unwrap();
        let mapping: BTreeMap<String, bool> =
            load_mapping(&dir.path().join("markedDays.json")).unwrap();
        assert!(mapping.is_empty());
    }

    #[test]
    fn mapping_round_trips_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("markedDays.json");

        let mut mapping = BTreeMap::new();
        mapping.insert("2025-11-14".to_string(), true);
        save_mapping(&path, &mapping).unwrap();

        let loaded: BTreeMap<String, bool> = load_mapping(&path).unwrap();
        assert_eq!(loaded, mapping);
    }

    #[test]
    fn malformed_content_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("markedDays.json");
        fs::write(&path, "{ not json").unwrap();

        let result: Result<BTreeMap<String, bool>> = load_mapping(&path);
        assert!(result.is_err());
    }
}
