// Copyright 2026 the Shrinkcircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A circle that contracts toward a point inside it.
//!
//! Starting from an initial [`Circle`], a [`ShrinkCircle`] produces one
//! circle per frame. The center moves at constant velocity toward a target
//! point, and the radius shrinks at a constant rate toward a fraction of the
//! initial radius. The frames are plain values, ready to hand to whatever
//! draws them.
//!
//! # Examples
//!
//! Shrinking the unit circle to half size toward a random point:
//!
//! ```
//! use shrinkcircle::{ShrinkCircle, ShrinkParams};
//!
//! let mut sc = ShrinkCircle::with_seed((0.0, 0.0), 1.0, 42);
//! let frames = sc.shrink(&ShrinkParams::new(0.5, 2.0, 10.0)).unwrap();
//! assert_eq!(frames.len(), 20);
//!
//! // The target was kept far enough from the edge that the final circle
//! // still fits inside the initial one.
//! let last = frames[19];
//! assert!(last.center.distance(sc.init_circle().center) + last.radius <= 1.0 + 1e-9);
//! ```
//!
//! Choosing the target yourself:
//!
//! ```
//! use shrinkcircle::{Circle, Point, ShrinkCircle, ShrinkParams};
//!
//! let mut sc = ShrinkCircle::with_seed((0.0, 0.0), 1.0, 0);
//! sc.set_target_point((0.0, 0.0)).unwrap();
//! let frames = sc.shrink(&ShrinkParams::new(0.0, 1.0, 1.0)).unwrap();
//! assert_eq!(frames, [Circle::new(Point::ORIGIN, 0.0)]);
//!
//! // Targets must lie inside the current circle.
//! sc.reset();
//! assert!(sc.set_target_point((2.0, 0.0)).is_err());
//! ```
//!
//! # Feature Flags
//!
//! The following crate [feature flags](https://doc.rust-lang.org/cargo/reference/features.html#dependency-features) are available:
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc), seed generators from the thread-local random
//!   source, and implement `std::error::Error`.
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//!   However, note that the `libm` crate is not as efficient as the standard library.
//! - `mint`: Enable `From`/`Into` conversion of [`Point`] and [`Vec2`] with [mint][] types.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on the value types
//!   and [`ShrinkParams`].
//! - `schemars`: Add best-effort support for using these types in JSON schemas using [schemars][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//! Note that this crate does require that an allocator is available (i.e. it uses [alloc]).
//!
//! # Logging
//!
//! Events are emitted through [tracing][]: the chosen target and frame count
//! of each shrink at `debug`, sampled points at `trace`, and negative shrink
//! ratios at `warn`. No subscriber is installed.
//!
//! [libm]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint
//! [schemars]: https://docs.rs/schemars
//! [tracing]: https://docs.rs/tracing

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(clippy::many_single_char_names)]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
#![allow(
    clippy::cast_possible_truncation,
    clippy::missing_assert_message,
    clippy::exhaustive_enums,
    clippy::use_self,
    clippy::return_self_not_must_use,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("shrinkcircle requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

// The JSON tests only run with the `serde` feature.
#[cfg(all(test, not(feature = "serde")))]
use serde_json as _;

extern crate alloc;

mod circle;
mod common;
mod point;
mod rect;
mod sample;
mod shrink;
mod vec2;

pub use crate::circle::*;
pub use crate::point::*;
pub use crate::rect::*;
pub use crate::sample::{Distribution, SampleError};
pub use crate::shrink::*;
pub use crate::vec2::*;
