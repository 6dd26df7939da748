//! Common imports shared by every crate of the workspace. Import it with
//! `use detector_prelude::*;` or re-export it as the crate-local `prelude` module.

pub use core::fmt::Debug;
pub use derivative::Derivative;
pub use enclose::enclose;
pub use failure::Fail;
pub use itertools::Itertools;
pub use smallvec::SmallVec;
pub use std::cell::Cell;
pub use std::cell::RefCell;
pub use std::fmt::Display;
pub use std::iter;
pub use std::rc::Rc;
pub use std::rc::Weak;

/// Anything that can be viewed as a string slice.
pub trait Str : AsRef<str> {}
impl<T:AsRef<str>> Str for T {}

/// Alias for `Default::default()`, reads nicely in struct constructors.
pub fn default<T:Default>() -> T {
    Default::default()
}
