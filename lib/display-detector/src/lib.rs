//! Detects when DOM elements become visible or hidden on the screen.
//!
//! The visible part of an element is its bounding rectangle clipped by every scrollable ancestor
//! and finally by the viewport. Elements are registered with [`Tracker::bind`] or
//! [`Tracker::bind_once`]; every call to [`Tracker::detect`] recomputes their visibility and fires
//! the show/hide callbacks of the elements whose visibility changed.
//!
//! The algorithm is written against the [`Environment`] trait. In the browser use
//! [`web::DisplayDetector`], which wires the window `resize` and `scroll` events and the `scroll`
//! events of the discovered scroll containers to [`Tracker::detect`].

#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_import_braces)]

pub mod callback;
pub mod config;
pub mod environment;
pub mod geometry;
pub mod registry;
pub mod target;
pub mod tracker;
pub mod web;

pub use callback::OnceCallback;
pub use callback::VisibilityCallback;
pub use config::Config;
pub use config::DuplicateBinding;
pub use environment::ComputedStyle;
pub use environment::Environment;
pub use environment::Position;
pub use geometry::Rectangle;
pub use target::Target;
pub use tracker::Tracker;
pub use web::DisplayDetector;

/// Common types used across the crate.
pub mod prelude {
    pub use detector_prelude::*;
    pub use logger::AnyLogger;
    pub use logger::Logger;
}
