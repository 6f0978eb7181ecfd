#![doc = r#"
FRAMECAT — image batch concatenation with spatial reconciliation.

This crate joins two batches of images along the batch dimension, optionally
bringing the second batch to the first batch's spatial extent before stacking.
Three reconciliation policies are provided: aspect-preserving letterbox resize
(`fit`), centered crop/pad without resampling (`pad`), and direct stretch
(`stretch`). It is designed to sit behind a plugin host (e.g. a node-graph
video pipeline) that supplies the two batches and a policy selector, but works
just as well as a plain library call.

Data model
----------
Batches are `ndarray` arrays in `(N, H, W, C)` layout with samples normalized
to `[0, 1]`. The [`ImageBatch`] wrapper carries either `f32` or `f64` samples;
the second batch is always re-expressed in the first batch's precision before
any arithmetic, and the concatenated output is clamped to `[0, 1]` (NaN clamps
to `0.0`).

Quick start
-----------
```rust
use ndarray::Array4;
use framecat::{concat_image_batches, ConcatParams, ImageBatch, ResizePolicy};

fn main() -> framecat::Result<()> {
    let a = ImageBatch::from(Array4::<f32>::zeros((8, 512, 512, 3)));
    let b = ImageBatch::from(Array4::<f32>::zeros((4, 256, 384, 3)));

    let params = ConcatParams {
        ensure_same_size: true,
        policy: ResizePolicy::Letterbox,
    };
    let joined = concat_image_batches(&a, &b, &params)?;
    assert_eq!(joined.dims(), (12, 512, 512, 3));
    Ok(())
}
```

Host-boundary entry point
-------------------------
Plugin hosts pass the policy as a string token and read the registration
descriptor at startup:

```rust
use ndarray::Array4;
use framecat::{concat_with_policy_token, descriptor_json, ImageBatch};

fn main() -> framecat::Result<()> {
    let a = ImageBatch::from(Array4::<f32>::zeros((1, 64, 64, 3)));
    let b = ImageBatch::from(Array4::<f32>::zeros((1, 32, 32, 3)));

    let joined = concat_with_policy_token(&a, &b, true, "fit")?;
    assert_eq!(joined.dims(), (2, 64, 64, 3));

    let schema = descriptor_json()?;
    assert!(schema.contains("resize_method"));
    Ok(())
}
```

Typed geometry helpers (when you already have arrays)
-----------------------------------------------------
```rust
use ndarray::Array4;
use framecat::core::processing::geometry::{crop_or_pad, resize_letterbox};

fn letterbox_to_square(frames: &Array4<f32>) -> framecat::Result<Array4<f32>> {
    resize_letterbox(frames, 512, 512)
}

fn pad_to_square(frames: &Array4<f32>) -> framecat::Result<Array4<f32>> {
    crop_or_pad(frames, 512, 512)
}
```

Error handling
--------------
All public functions return `framecat::Result<T>`; match on `framecat::Error`
to handle specific cases.

```rust
use ndarray::Array4;
use framecat::{concat_with_policy_token, Error, ImageBatch};

fn main() {
    let a = ImageBatch::from(Array4::<f32>::zeros((1, 64, 64, 3)));
    let b = ImageBatch::from(Array4::<f32>::zeros((1, 32, 32, 3)));

    match concat_with_policy_token(&a, &b, false, "fit") {
        Ok(_) => {}
        Err(Error::ShapeMismatch { a_h, a_w, b_h, b_w }) => {
            eprintln!("sizes differ ({a_h}x{a_w} vs {b_h}x{b_w}); retry with reconciliation")
        }
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points and the host registration descriptor.
- [`types`] — core types (`ImageBatch`, `Precision`, `ResizePolicy`).
- [`core`] — typed geometry, reconciliation, and concatenation primitives.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
pub use crate::core::params::ConcatParams;
pub use error::{Error, Result};
pub use types::{ImageBatch, Precision, ResizePolicy};

pub use api::{
    NodeDescriptor, ParamSpec, concat_image_batches, concat_with_policy_token, descriptor_json,
    node_descriptor,
};
