//! Config blob decoding

use serde::Deserialize;

use crate::error::{SolverError, SolverResult};
use crate::types::SolverConfig;

/// Decodes the opaque config blob attached to a challenge.
pub trait ConfigDecoder: Send + Sync {
    /// Decode `blob` into a [`SolverConfig`].
    ///
    /// # Errors
    /// [`SolverError::ConfigInvalid`] when the blob is absent or malformed.
    fn decode(&self, blob: Option<&serde_json::Value>) -> SolverResult<SolverConfig>;
}

/// Decodes the JSON blob with serde.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConfigDecoder;

impl ConfigDecoder for JsonConfigDecoder {
    fn decode(&self, blob: Option<&serde_json::Value>) -> SolverResult<SolverConfig> {
        let blob = blob
            .filter(|v| !v.is_null())
            .ok_or_else(|| SolverError::ConfigInvalid("no solver config supplied".to_string()))?;
        SolverConfig::deserialize(blob)
            .map_err(|e| SolverError::ConfigInvalid(format!("error decoding solver config: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_blob() {
        let cfg = JsonConfigDecoder
            .decode(Some(&json!({"serviceID": 5, "maxPages": 2})))
            .unwrap();
        assert_eq!(cfg.service_id, 5);
        assert_eq!(cfg.max_pages(), 2);
    }

    #[test]
    fn missing_blob_is_invalid() {
        for blob in [None, Some(&serde_json::Value::Null)] {
            let err = JsonConfigDecoder.decode(blob).unwrap_err();
            assert_eq!(
                err,
                SolverError::ConfigInvalid("no solver config supplied".to_string())
            );
        }
    }

    #[test]
    fn wrong_types_are_invalid() {
        let err = JsonConfigDecoder
            .decode(Some(&json!({"serviceID": "not-a-number"})))
            .unwrap_err();
        assert!(
            matches!(&err, SolverError::ConfigInvalid(msg) if msg.starts_with("error decoding solver config")),
            "unexpected: {err:?}"
        );
    }

    #[test]
    fn missing_service_id_is_invalid() {
        let err = JsonConfigDecoder
            .decode(Some(&json!({"domain": "example.com"})))
            .unwrap_err();
        assert!(matches!(err, SolverError::ConfigInvalid(_)));
    }
}
