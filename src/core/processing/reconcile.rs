use ndarray::{Array4, NdFloat};
use tracing::debug;

use crate::core::processing::geometry::{crop_or_pad, resize_letterbox, resize_stretch};
use crate::error::Result;
use crate::types::ResizePolicy;

/// Bring `working` to the reference spatial extent `(target_h, target_w)`.
///
/// Returns the batch unchanged when the extent already matches; otherwise
/// dispatches on `policy`. Channel count and precision are untouched.
pub fn reconcile_to<A: NdFloat>(
    working: Array4<A>,
    target_h: usize,
    target_w: usize,
    policy: ResizePolicy,
) -> Result<Array4<A>> {
    let (_, h, w, _) = working.dim();
    if h == target_h && w == target_w {
        return Ok(working);
    }

    debug!(
        "Reconciling {}x{} -> {}x{} via {}",
        h, w, target_h, target_w, policy
    );
    match policy {
        ResizePolicy::Letterbox => resize_letterbox(&working, target_h, target_w),
        ResizePolicy::PadCrop => crop_or_pad(&working, target_h, target_w),
        ResizePolicy::Stretch => resize_stretch(&working, target_h, target_w),
    }
}
