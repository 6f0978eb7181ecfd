use ndarray::{Array4, NdFloat, Zip, s};
use tracing::debug;

use crate::error::{Error, Result};

fn cast<A: NdFloat>(v: f64) -> A {
    A::from(v).unwrap_or_else(A::zero)
}

fn check_extents(h: usize, w: usize, target_h: usize, target_w: usize) -> Result<()> {
    if target_h == 0 {
        return Err(Error::InvalidDimension {
            dim: "target_h",
            value: target_h,
        });
    }
    if target_w == 0 {
        return Err(Error::InvalidDimension {
            dim: "target_w",
            value: target_w,
        });
    }
    if h == 0 {
        return Err(Error::InvalidDimension {
            dim: "height",
            value: h,
        });
    }
    if w == 0 {
        return Err(Error::InvalidDimension {
            dim: "width",
            value: w,
        });
    }
    Ok(())
}

/// Centered crop and/or symmetric zero pad to exactly `(target_h, target_w)`.
///
/// Each spatial axis is handled independently: over-size axes are cropped
/// around the center first, then any residual shortfall is padded with zero
/// samples split evenly (extra sample goes after). No resampling occurs.
/// Returns a copy of the input when the extent already matches.
pub fn crop_or_pad<A: NdFloat>(
    batch: &Array4<A>,
    target_h: usize,
    target_w: usize,
) -> Result<Array4<A>> {
    let (n, h, w, c) = batch.dim();
    check_extents(h, w, target_h, target_w)?;

    let crop_h = h.min(target_h);
    let crop_w = w.min(target_w);
    let top = (h - crop_h) / 2;
    let left = (w - crop_w) / 2;
    let cropped = batch.slice(s![.., top..top + crop_h, left..left + crop_w, ..]);

    if crop_h == target_h && crop_w == target_w {
        return Ok(cropped.to_owned());
    }

    let pad_top = (target_h - crop_h) / 2;
    let pad_left = (target_w - crop_w) / 2;
    debug!(
        "Padding {}x{} to {}x{} (top={}, left={})",
        crop_h, crop_w, target_h, target_w, pad_top, pad_left
    );

    let mut out = Array4::zeros((n, target_h, target_w, c));
    out.slice_mut(s![
        ..,
        pad_top..pad_top + crop_h,
        pad_left..pad_left + crop_w,
        ..
    ])
    .assign(&cropped);
    Ok(out)
}

/// Bilinear resample to `(out_h, out_w)` with half-pixel-centered sampling:
/// output index `i` reads source coordinate `(i + 0.5) * (in / out) - 0.5`,
/// clamped at the boundaries.
fn resize_bilinear<A: NdFloat>(batch: &Array4<A>, out_h: usize, out_w: usize) -> Array4<A> {
    let (n, h, w, c) = batch.dim();
    let scale_y = h as f64 / out_h as f64;
    let scale_x = w as f64 / out_w as f64;

    let mut out = Array4::zeros((n, out_h, out_w, c));
    Zip::indexed(&mut out).par_for_each(|(bi, oy, ox, ch), v| {
        let sy = ((oy as f64 + 0.5) * scale_y - 0.5).max(0.0);
        let sx = ((ox as f64 + 0.5) * scale_x - 0.5).max(0.0);
        let y0 = (sy.floor() as usize).min(h - 1);
        let x0 = (sx.floor() as usize).min(w - 1);
        let y1 = (y0 + 1).min(h - 1);
        let x1 = (x0 + 1).min(w - 1);
        let fy = cast::<A>(sy - y0 as f64);
        let fx = cast::<A>(sx - x0 as f64);
        let one = A::one();

        let top = batch[[bi, y0, x0, ch]] * (one - fx) + batch[[bi, y0, x1, ch]] * fx;
        let bottom = batch[[bi, y1, x0, ch]] * (one - fx) + batch[[bi, y1, x1, ch]] * fx;
        *v = top * (one - fy) + bottom * fy;
    });
    out
}

/// Aspect-preserving resize into the target box, letterboxed with zero padding.
///
/// A single uniform scale `min(target_w / W, target_h / H)` is applied, the
/// result rounded (floored at 1 per axis), then [`crop_or_pad`] brings the
/// resized batch to the exact target extent. The scale guarantees at most one
/// axis falls short, so that step only pads under exact arithmetic, but it is
/// reused as-is to stay correct under rounding.
pub fn resize_letterbox<A: NdFloat>(
    batch: &Array4<A>,
    target_h: usize,
    target_w: usize,
) -> Result<Array4<A>> {
    let (_, h, w, _) = batch.dim();
    check_extents(h, w, target_h, target_w)?;

    let scale = (target_w as f64 / w as f64).min(target_h as f64 / h as f64);
    let new_w = ((w as f64 * scale).round() as usize).max(1);
    let new_h = ((h as f64 * scale).round() as usize).max(1);
    debug!(
        "Letterbox {}x{} -> {}x{} inside {}x{} (scale={:.4})",
        h, w, new_h, new_w, target_h, target_w, scale
    );

    let resized = resize_bilinear(batch, new_h, new_w);
    crop_or_pad(&resized, target_h, target_w)
}

/// Direct resize to `(target_h, target_w)`, scaling each axis independently.
/// Aspect ratio is not preserved and no padding is added.
pub fn resize_stretch<A: NdFloat>(
    batch: &Array4<A>,
    target_h: usize,
    target_w: usize,
) -> Result<Array4<A>> {
    let (_, h, w, _) = batch.dim();
    check_extents(h, w, target_h, target_w)?;

    debug!("Stretch {}x{} -> {}x{}", h, w, target_h, target_w);
    Ok(resize_bilinear(batch, target_h, target_w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array4;

    fn filled(n: usize, h: usize, w: usize, c: usize, value: f32) -> Array4<f32> {
        Array4::from_elem((n, h, w, c), value)
    }

    #[test]
    fn crop_or_pad_is_identity_at_target_shape() {
        let batch = Array4::from_shape_fn((2, 8, 6, 3), |(n, y, x, c)| {
            (n * 1000 + y * 100 + x * 10 + c) as f32
        });
        let out = crop_or_pad(&batch, 8, 6).unwrap();
        assert_eq!(out, batch);
    }

    #[test]
    fn crop_or_pad_pads_smaller_input_symmetrically() {
        let batch = filled(1, 10, 10, 3, 1.0);
        let out = crop_or_pad(&batch, 20, 20).unwrap();
        assert_eq!(out.dim(), (1, 20, 20, 3));
        // 5 zero rows/cols on each side, content centered
        assert_eq!(out[[0, 4, 10, 0]], 0.0);
        assert_eq!(out[[0, 15, 10, 0]], 0.0);
        assert_eq!(out[[0, 10, 4, 0]], 0.0);
        assert_eq!(out[[0, 10, 15, 0]], 0.0);
        assert_eq!(out[[0, 5, 5, 0]], 1.0);
        assert_eq!(out[[0, 14, 14, 2]], 1.0);
        let content: f32 = out.iter().sum();
        assert_eq!(content, (10 * 10 * 3) as f32);
    }

    #[test]
    fn crop_or_pad_crops_larger_input_around_center() {
        let batch = Array4::from_shape_fn((1, 6, 6, 1), |(_, y, x, _)| (y * 10 + x) as f32);
        let out = crop_or_pad(&batch, 2, 2).unwrap();
        assert_eq!(out.dim(), (1, 2, 2, 1));
        // offset = (6 - 2) / 2 = 2 on both axes
        assert_eq!(out[[0, 0, 0, 0]], 22.0);
        assert_eq!(out[[0, 1, 1, 0]], 33.0);
    }

    #[test]
    fn crop_or_pad_mixes_crop_and_pad_across_axes() {
        let batch = filled(1, 8, 2, 1, 1.0);
        let out = crop_or_pad(&batch, 4, 4).unwrap();
        assert_eq!(out.dim(), (1, 4, 4, 1));
        // height cropped 8 -> 4, width padded 2 -> 4 with one zero col each side
        assert_eq!(out[[0, 0, 0, 0]], 0.0);
        assert_eq!(out[[0, 0, 3, 0]], 0.0);
        assert_eq!(out[[0, 0, 1, 0]], 1.0);
        assert_eq!(out[[0, 3, 2, 0]], 1.0);
    }

    #[test]
    fn odd_shortfall_pads_extra_sample_after() {
        let batch = filled(1, 3, 3, 1, 1.0);
        let out = crop_or_pad(&batch, 6, 6).unwrap();
        // pad_before = (6 - 3) / 2 = 1, pad_after = 2
        assert_eq!(out[[0, 0, 1, 0]], 0.0);
        assert_eq!(out[[0, 1, 1, 0]], 1.0);
        assert_eq!(out[[0, 3, 1, 0]], 1.0);
        assert_eq!(out[[0, 4, 1, 0]], 0.0);
        assert_eq!(out[[0, 5, 1, 0]], 0.0);
    }

    #[test]
    fn letterbox_preserves_aspect_and_centers_content() {
        // 100x200 into 100x100: scale = 0.5, content occupies 50 rows
        let batch = filled(1, 100, 200, 3, 1.0);
        let out = resize_letterbox(&batch, 100, 100).unwrap();
        assert_eq!(out.dim(), (1, 100, 100, 3));
        for y in 0..25 {
            assert_eq!(out[[0, y, 50, 0]], 0.0, "row {} should be padding", y);
        }
        for y in 25..75 {
            assert!(
                (out[[0, y, 50, 0]] - 1.0).abs() < 1e-5,
                "row {} should be content",
                y
            );
        }
        for y in 75..100 {
            assert_eq!(out[[0, y, 50, 0]], 0.0, "row {} should be padding", y);
        }
        // full width covered, no horizontal padding
        assert!((out[[0, 50, 0, 0]] - 1.0).abs() < 1e-5);
        assert!((out[[0, 50, 99, 0]] - 1.0).abs() < 1e-5);
    }

    #[test]
    fn letterbox_never_collapses_an_axis_to_zero() {
        // Extreme aspect ratio: rounded short side floors at 1
        let batch = filled(1, 1, 100, 1, 1.0);
        let out = resize_letterbox(&batch, 50, 50).unwrap();
        assert_eq!(out.dim(), (1, 50, 50, 1));
    }

    #[test]
    fn stretch_hits_exact_target_shape() {
        let batch = filled(2, 10, 20, 3, 0.5);
        let out = resize_stretch(&batch, 30, 15).unwrap();
        assert_eq!(out.dim(), (2, 30, 15, 3));
        // constant input stays constant under bilinear interpolation
        assert!(out.iter().all(|&v| (v - 0.5).abs() < 1e-6));
    }

    #[test]
    fn same_size_resize_is_exact() {
        // scale = 1 maps every output index onto a source sample exactly
        let batch = Array4::from_shape_fn((1, 4, 5, 2), |(_, y, x, c)| {
            (y * 100 + x * 10 + c) as f32
        });
        let out = resize_stretch(&batch, 4, 5).unwrap();
        assert_eq!(out, batch);
    }

    #[test]
    fn bilinear_upscale_interpolates_between_neighbors() {
        let mut batch = Array4::zeros((1, 1, 2, 1));
        batch[[0, 0, 0, 0]] = 0.0f32;
        batch[[0, 0, 1, 0]] = 1.0f32;
        let out = resize_stretch(&batch, 1, 4).unwrap();
        // half-pixel centers: sx = {-0.25, 0.25, 0.75, 1.25} clamped to [0, 1]
        assert!((out[[0, 0, 0, 0]] - 0.0).abs() < 1e-6);
        assert!((out[[0, 0, 1, 0]] - 0.25).abs() < 1e-6);
        assert!((out[[0, 0, 2, 0]] - 0.75).abs() < 1e-6);
        assert!((out[[0, 0, 3, 0]] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn zero_target_is_rejected() {
        let batch = filled(1, 4, 4, 1, 0.0);
        for (th, tw) in [(0, 4), (4, 0)] {
            let err = crop_or_pad(&batch, th, tw).unwrap_err();
            assert!(matches!(err, Error::InvalidDimension { .. }));
            assert!(matches!(
                resize_letterbox(&batch, th, tw).unwrap_err(),
                Error::InvalidDimension { .. }
            ));
            assert!(matches!(
                resize_stretch(&batch, th, tw).unwrap_err(),
                Error::InvalidDimension { .. }
            ));
        }
    }

    #[test]
    fn degenerate_source_is_rejected() {
        let batch: Array4<f32> = Array4::zeros((1, 0, 4, 1));
        assert!(matches!(
            resize_letterbox(&batch, 4, 4).unwrap_err(),
            Error::InvalidDimension { dim: "height", .. }
        ));
        let batch: Array4<f32> = Array4::zeros((1, 4, 0, 1));
        assert!(matches!(
            crop_or_pad(&batch, 4, 4).unwrap_err(),
            Error::InvalidDimension { dim: "width", .. }
        ));
    }

    #[test]
    fn geometry_is_generic_over_f64() {
        let batch = Array4::from_elem((1, 4, 4, 1), 0.75f64);
        let out = resize_letterbox(&batch, 8, 8).unwrap();
        assert_eq!(out.dim(), (1, 8, 8, 1));
        assert!((out[[0, 4, 4, 0]] - 0.75).abs() < 1e-12);
    }
}
