//! High-level, ergonomic library API: concatenate two [`ImageBatch`] values
//! with optional spatial reconciliation, plus the registration descriptor a
//! plugin host uses to declare the operation and its parameters. Prefer these
//! entrypoints over the low-level processing modules when integrating FRAMECAT.
use serde::{Deserialize, Serialize};

use crate::core::params::ConcatParams;
use crate::core::processing::concat::concat_batches;
use crate::error::{Error, Result};
use crate::types::{ImageBatch, ResizePolicy};

/// Concatenate `b` after `a` along the batch axis.
///
/// Fails with [`Error::ChannelMismatch`] when channel counts differ. `b` is
/// first re-expressed in `a`'s precision (a pure representation conversion),
/// then reconciled to `a`'s spatial extent when `params.ensure_same_size` is
/// set and the extents differ. The result carries `a`'s precision and extent,
/// `a.len() + b.len()` frames, and every sample clamped to `[0, 1]`.
pub fn concat_image_batches(
    a: &ImageBatch,
    b: &ImageBatch,
    params: &ConcatParams,
) -> Result<ImageBatch> {
    if a.channels() != b.channels() {
        return Err(Error::ChannelMismatch {
            a: a.channels(),
            b: b.channels(),
        });
    }

    let working = b.to_precision(a.precision());
    match (a, working) {
        (ImageBatch::F32(a), ImageBatch::F32(b)) => {
            concat_batches(a, b, params.ensure_same_size, params.policy).map(ImageBatch::F32)
        }
        (ImageBatch::F64(a), ImageBatch::F64(b)) => {
            concat_batches(a, b, params.ensure_same_size, params.policy).map(ImageBatch::F64)
        }
        // to_precision above aligned the working copy to a's precision
        (a, b) => Err(Error::Placement(format!(
            "precision alignment failed: {} vs {}",
            a.precision(),
            b.precision()
        ))),
    }
}

/// Host-boundary entry point: `(batch A, batch B, reconcile flag, policy token)`.
///
/// The token set is stable: `"fit"`, `"pad"`, `"stretch"`. Anything else fails
/// with [`Error::InvalidPolicy`].
pub fn concat_with_policy_token(
    a: &ImageBatch,
    b: &ImageBatch,
    ensure_same_size: bool,
    policy: &str,
) -> Result<ImageBatch> {
    let params = ConcatParams {
        ensure_same_size,
        policy: policy.parse::<ResizePolicy>()?,
    };
    concat_image_batches(a, b, &params)
}

/// One user-facing parameter in a [`NodeDescriptor`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    /// Host-side widget/value kind: "image", "boolean", or "choice"
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub choices: Vec<String>,
}

/// Registration entry a plugin host scans at startup to discover the
/// operation: stable identifier, display metadata, and parameter schema.
/// The host owns this table; the core logic never consults it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDescriptor {
    pub id: String,
    pub display_name: String,
    pub category: String,
    pub parameters: Vec<ParamSpec>,
}

/// Build the registration descriptor for the concatenation operation.
pub fn node_descriptor() -> NodeDescriptor {
    NodeDescriptor {
        id: "concat_image_batches".to_string(),
        display_name: "Concat Image Batches".to_string(),
        category: "video/processing".to_string(),
        parameters: vec![
            ParamSpec {
                name: "images_a".to_string(),
                kind: "image".to_string(),
                default: None,
                choices: vec![],
            },
            ParamSpec {
                name: "images_b".to_string(),
                kind: "image".to_string(),
                default: None,
                choices: vec![],
            },
            ParamSpec {
                name: "ensure_same_size".to_string(),
                kind: "boolean".to_string(),
                default: Some(serde_json::Value::Bool(true)),
                choices: vec![],
            },
            ParamSpec {
                name: "resize_method".to_string(),
                kind: "choice".to_string(),
                default: Some(serde_json::Value::String(
                    ResizePolicy::Letterbox.token().to_string(),
                )),
                choices: vec![
                    ResizePolicy::Letterbox.token().to_string(),
                    ResizePolicy::PadCrop.token().to_string(),
                    ResizePolicy::Stretch.token().to_string(),
                ],
            },
        ],
    }
}

/// Serialize the registration descriptor for hosts that ingest JSON.
pub fn descriptor_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&node_descriptor())?)
}
