use serde::{Deserialize, Serialize};

use crate::types::ResizePolicy;

/// Concatenation parameters suitable for config files and host presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcatParams {
    /// If true, reconcile the second batch's spatial extent to the reference
    pub ensure_same_size: bool,
    /// Reconciliation policy applied when sizes differ
    pub policy: ResizePolicy,
}

impl Default for ConcatParams {
    fn default() -> Self {
        Self {
            ensure_same_size: true,
            policy: ResizePolicy::Letterbox,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_host_contract() {
        let params = ConcatParams::default();
        assert!(params.ensure_same_size);
        assert_eq!(params.policy, ResizePolicy::Letterbox);
    }

    #[test]
    fn params_serialize_with_wire_tokens() {
        let json = serde_json::to_string(&ConcatParams::default()).unwrap();
        assert!(json.contains("\"policy\":\"fit\""));
        let back: ConcatParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back.policy, ResizePolicy::Letterbox);
    }
}
