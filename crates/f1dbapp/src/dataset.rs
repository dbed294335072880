//! Dataset selection by user-facing name.

use crate::error::{F1dbError, Result};
use crate::schema::{DatasetKey, Schema};

/// Resolve a display name ("Drivers", "Constructors", "Race Results").
pub fn resolve(display_name: &str) -> Result<(DatasetKey, &'static Schema)> {
    DatasetKey::all()
        .into_iter()
        .find(|key| key.display_name() == display_name)
        .map(|key| (key, key.schema()))
        .ok_or_else(|| F1dbError::UnknownDisplayName(display_name.to_string()))
}

/// Resolve either a display name or a dataset key ("race-results").
///
/// Used by the command line, where both spellings are accepted.
pub fn resolve_any(name: &str) -> Result<(DatasetKey, &'static Schema)> {
    match resolve(name) {
        Ok(found) => Ok(found),
        Err(_) => name
            .parse::<DatasetKey>()
            .map(|key| (key, key.schema()))
            .map_err(|_| F1dbError::UnknownDisplayName(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_display_name() {
        let (key, schema) = resolve("Race Results").unwrap();
        assert_eq!(key, DatasetKey::RaceResults);
        assert_eq!(schema.key, DatasetKey::RaceResults);

        assert_eq!(resolve("Drivers").unwrap().0, DatasetKey::Drivers);
        assert_eq!(resolve("Constructors").unwrap().0, DatasetKey::Constructors);
    }

    #[test]
    fn display_names_are_exact() {
        for name in ["drivers", "Circuits", "", "Race results"] {
            assert!(matches!(
                resolve(name),
                Err(F1dbError::UnknownDisplayName(n)) if n == name
            ));
        }
    }

    #[test]
    fn resolve_any_accepts_keys() {
        assert_eq!(resolve_any("race-results").unwrap().0, DatasetKey::RaceResults);
        assert_eq!(resolve_any("Drivers").unwrap().0, DatasetKey::Drivers);
        assert!(matches!(
            resolve_any("seasons"),
            Err(F1dbError::UnknownDisplayName(_))
        ));
    }
}
