use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::{DomainError, DomainResult};

/// A single detected foot position reported by the UI layer
/// Samples are the unit of tracking updates; one call stores one sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingSample {
    /// Named tracking points mapped to arbitrary numeric/array data (REQUIRED)
    pub landmarks: Map<String, Value>,

    /// Rotation in degrees; 0.0 when the caller omits it
    pub rotation: f32,

    /// Per-axis scale components (REQUIRED)
    pub scale: Map<String, Value>,
}

impl TrackingSample {
    /// Parse a sample out of the loose `arData` argument map.
    ///
    /// `landmarks` and `scale` must be present and be JSON objects. `rotation`
    /// is optional and falls back to 0.0 when absent or non-numeric.
    pub fn from_args(ar_data: &Value) -> DomainResult<Self> {
        let landmarks = ar_data
            .get("landmarks")
            .and_then(Value::as_object)
            .ok_or(DomainError::MissingField("landmarks"))?
            .clone();

        let scale = ar_data
            .get("scale")
            .and_then(Value::as_object)
            .ok_or(DomainError::MissingField("scale"))?
            .clone();

        let rotation = ar_data
            .get("rotation")
            .and_then(Value::as_f64)
            .unwrap_or(0.0) as f32;

        Ok(Self {
            landmarks,
            rotation,
            scale,
        })
    }

    /// Render the sample in the engine's JSON form for display.
    pub fn display_form(&self) -> String {
        // Serializing a Map-backed struct cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}
