//! Shared types and enums used across FRAMECAT.
//! Includes `ImageBatch` (the dual-precision NHWC sample container),
//! `Precision`, and the spatial `ResizePolicy` selector.
use clap::ValueEnum;
use ndarray::Array4;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// Spatial reconciliation policy applied to the second batch before stacking.
///
/// Host-facing wire tokens are stable: `fit`, `pad`, `stretch`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum ResizePolicy {
    /// Aspect-preserving resize, then zero-pad the uncovered remainder.
    #[serde(rename = "fit")]
    Letterbox,
    /// Centered crop and/or symmetric zero pad, no resampling.
    #[serde(rename = "pad")]
    PadCrop,
    /// Direct resize to the target, aspect ratio not preserved.
    #[serde(rename = "stretch")]
    Stretch,
}

impl ResizePolicy {
    pub fn token(&self) -> &'static str {
        match self {
            ResizePolicy::Letterbox => "fit",
            ResizePolicy::PadCrop => "pad",
            ResizePolicy::Stretch => "stretch",
        }
    }
}

// Manual implementation since the wire tokens differ from the variant names
impl clap::ValueEnum for ResizePolicy {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            ResizePolicy::Letterbox,
            ResizePolicy::PadCrop,
            ResizePolicy::Stretch,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.token()))
    }
}

impl std::fmt::Display for ResizePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl FromStr for ResizePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fit" => Ok(ResizePolicy::Letterbox),
            "pad" => Ok(ResizePolicy::PadCrop),
            "stretch" => Ok(ResizePolicy::Stretch),
            other => Err(Error::InvalidPolicy {
                token: other.to_string(),
            }),
        }
    }
}

/// Floating-point sample precision of an [`ImageBatch`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum Precision {
    F32,
    F64,
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Precision::F32 => write!(f, "f32"),
            Precision::F64 => write!(f, "f64"),
        }
    }
}

/// An owned batch of images in `(N, H, W, C)` layout.
///
/// Samples are semantically normalized to `[0, 1]` but are not force-clamped
/// on input; the concatenation pipeline clamps its output. The two precision
/// variants carry the same logical content; [`ImageBatch::to_precision`] is
/// the explicit representation conversion between them.
#[derive(Debug, Clone)]
pub enum ImageBatch {
    F32(Array4<f32>),
    F64(Array4<f64>),
}

impl ImageBatch {
    /// Logical shape as `(batch, height, width, channels)`.
    pub fn dims(&self) -> (usize, usize, usize, usize) {
        match self {
            ImageBatch::F32(a) => a.dim(),
            ImageBatch::F64(a) => a.dim(),
        }
    }

    /// Number of images in the batch.
    pub fn len(&self) -> usize {
        self.dims().0
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn height(&self) -> usize {
        self.dims().1
    }

    pub fn width(&self) -> usize {
        self.dims().2
    }

    pub fn channels(&self) -> usize {
        self.dims().3
    }

    pub fn precision(&self) -> Precision {
        match self {
            ImageBatch::F32(_) => Precision::F32,
            ImageBatch::F64(_) => Precision::F64,
        }
    }

    /// Re-express the batch in `precision`. Values are converted, never
    /// transformed; same-precision conversion is a plain copy.
    pub fn to_precision(&self, precision: Precision) -> ImageBatch {
        match (self, precision) {
            (ImageBatch::F32(a), Precision::F32) => ImageBatch::F32(a.clone()),
            (ImageBatch::F64(a), Precision::F64) => ImageBatch::F64(a.clone()),
            (ImageBatch::F32(a), Precision::F64) => {
                ImageBatch::F64(a.mapv(|v| f64::from(v)))
            }
            (ImageBatch::F64(a), Precision::F32) => ImageBatch::F32(a.mapv(|v| v as f32)),
        }
    }
}

impl From<Array4<f32>> for ImageBatch {
    fn from(a: Array4<f32>) -> Self {
        ImageBatch::F32(a)
    }
}

impl From<Array4<f64>> for ImageBatch {
    fn from(a: Array4<f64>) -> Self {
        ImageBatch::F64(a)
    }
}
