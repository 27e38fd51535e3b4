//! Decoder configuration.

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`DecodeOptions::max_elements`].
pub const MAX_ELEMENTS_ENV: &str = "TSF_MAX_ELEMENTS";

/// Default per-sequence element limit (2 GiB of `f64` values).
pub const DEFAULT_MAX_ELEMENTS: u64 = 1 << 28;

/// Limits applied while decoding untrusted buffers.
///
/// A declared count above `max_elements` is rejected before any allocation,
/// so a corrupt or hostile header cannot request an arbitrarily large
/// buffer. Encoding applies the same limit, so a codec never writes a
/// buffer it would refuse to read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    pub max_elements: u64,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_elements: DEFAULT_MAX_ELEMENTS,
        }
    }
}

impl DecodeOptions {
    pub fn with_max_elements(max_elements: u64) -> Self {
        Self { max_elements }
    }

    /// Defaults, overridden by `TSF_MAX_ELEMENTS` when it is set.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(MAX_ELEMENTS_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") => Self::default(),
            Some(raw) => match raw.parse::<u64>() {
                Ok(max_elements) => Self { max_elements },
                Err(e) => {
                    log::warn!(
                        "ignoring {}={:?}: {}; using {}",
                        MAX_ELEMENTS_ENV,
                        raw,
                        e,
                        DEFAULT_MAX_ELEMENTS
                    );
                    Self::default()
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_env_uses_default() {
        assert_eq!(DecodeOptions::from_env_value(None), DecodeOptions::default());
        assert_eq!(DecodeOptions::from_env_value(Some("  ")), DecodeOptions::default());
    }

    #[test]
    fn env_value_overrides_limit() {
        let options = DecodeOptions::from_env_value(Some(" 1024 "));
        assert_eq!(options.max_elements, 1024);
    }

    #[test]
    fn bad_env_value_falls_back() {
        let options = DecodeOptions::from_env_value(Some("lots"));
        assert_eq!(options.max_elements, DEFAULT_MAX_ELEMENTS);
    }

    #[test]
    fn deserializes_with_defaults() {
        let options: DecodeOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, DecodeOptions::default());

        let options: DecodeOptions = serde_json::from_str(r#"{"max_elements": 7}"#).unwrap();
        assert_eq!(options.max_elements, 7);
    }
}
