use ndarray::{Array4, Axis, NdFloat, concatenate};
use tracing::info;

use crate::core::processing::reconcile::reconcile_to;
use crate::error::{Error, Result};
use crate::types::ResizePolicy;

/// Stack `b` after `a` along the batch axis, reconciling spatial extents first
/// when requested, and clamp the result to `[0, 1]`.
///
/// With `ensure_same_size` disabled, mismatched extents fail with
/// [`Error::ShapeMismatch`] before any buffer is assembled; no partial result
/// is ever produced. NaN samples clamp to `0.0`; infinities clamp to the
/// nearest bound like any other out-of-range value.
pub fn concat_batches<A: NdFloat>(
    a: &Array4<A>,
    b: Array4<A>,
    ensure_same_size: bool,
    policy: ResizePolicy,
) -> Result<Array4<A>> {
    let (na, ha, wa, ca) = a.dim();
    let (_, _, _, cb) = b.dim();
    if ca != cb {
        return Err(Error::ChannelMismatch { a: ca, b: cb });
    }

    let (_, hb, wb, _) = b.dim();
    let b = if ensure_same_size && (ha != hb || wa != wb) {
        reconcile_to(b, ha, wa, policy)?
    } else {
        b
    };

    let (nb, hb, wb, _) = b.dim();
    if ha != hb || wa != wb {
        return Err(Error::ShapeMismatch {
            a_h: ha,
            a_w: wa,
            b_h: hb,
            b_w: wb,
        });
    }

    info!(
        "Concatenating {}+{} frames at {}x{}x{}",
        na, nb, ha, wa, ca
    );
    let mut out =
        concatenate(Axis(0), &[a.view(), b.view()]).map_err(Error::placement)?;

    let zero = A::zero();
    let one = A::one();
    out.par_mapv_inplace(|v| {
        if v.is_nan() {
            zero
        } else if v < zero {
            zero
        } else if v > one {
            one
        } else {
            v
        }
    });
    Ok(out)
}
