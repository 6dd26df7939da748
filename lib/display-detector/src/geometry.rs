//! Computation of the visible part of an element.
//!
//! The visible part is obtained by clipping. The viewport rectangle is clipped first, then every
//! scroll container from the outermost to the innermost is clipped by the visible part of its own
//! scroll container, and finally the element is clipped by the visible part of its nearest scroll
//! container. Clipping an extent may leave it with a zero or negative size: a negative size means
//! the element is hidden, a zero size still counts as visible.
//!
//! Everything here is free of side effects. Registering scroll listeners on the discovered
//! containers is the job of the `registry` module.

use crate::prelude::*;

use crate::environment::Environment;
use crate::environment::Position;



// =================
// === Rectangle ===
// =================

/// An axis-aligned rectangle in viewport coordinates. Width and height may be negative, which
/// marks a rectangle clipped away entirely.
#[derive(Clone,Copy,Debug,Default,PartialEq)]
#[allow(missing_docs)]
pub struct Rectangle {
    pub left   : f64,
    pub top    : f64,
    pub width  : f64,
    pub height : f64,
}

impl Rectangle {
    /// Constructor.
    pub fn new(left:f64, top:f64, width:f64, height:f64) -> Self {
        Self {left,top,width,height}
    }

    /// The viewport of the given size, anchored at the origin.
    pub fn viewport(width:f64, height:f64) -> Self {
        Self::new(0.0,0.0,width,height)
    }

    /// Horizontal coordinate of the right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Vertical coordinate of the bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether any part of the rectangle survived clipping. Zero-sized extents count as visible.
    pub fn is_visible(&self) -> bool {
        self.width >= 0.0 && self.height >= 0.0
    }

    /// Clips the rectangle by the visible rectangle of its scroll container.
    ///
    /// Each axis is clipped independently: a negative start is cut at zero, the part before the
    /// container's start is cut, then the part past the container's end. The last two steps only
    /// run while the extent is still positive.
    pub fn clip_to(&self, container:&Rectangle) -> Rectangle {
        let (left,width)  = clip_extent(self.left,self.width,container.left,container.width);
        let (top,height)  = clip_extent(self.top,self.height,container.top,container.height);
        Rectangle {left,top,width,height}
    }
}

fn clip_extent(mut start:f64, mut size:f64, container_start:f64, container_size:f64) -> (f64,f64) {
    if start < 0.0 {
        size  += start;
        start  = 0.0;
    }
    if size > 0.0 && start < container_start {
        size  -= container_start - start;
        start  = container_start;
    }
    let container_end = container_start + container_size;
    if size > 0.0 && start + size > container_end {
        size -= start + size - container_end;
    }
    (start,size)
}



// ========================
// === Scroll Ancestors ===
// ========================

/// Chain of scroll containers of an element, the nearest first.
pub type Ancestors<Element> = SmallVec<[Element;4]>;

/// The nearest ancestor clipping the element's overflow.
///
/// With `respect_positioning` set, a fixed element has no scroll container at all and an
/// absolutely positioned one skips statically positioned ancestors.
pub fn scroll_parent<Env:Environment>
(env:&Env, element:&Env::Element, respect_positioning:bool) -> Option<Env::Element> {
    let mut skip_static = false;
    if respect_positioning {
        match env.computed_style(element).position {
            Position::Fixed    => return None,
            Position::Absolute => skip_static = true,
            _                  => {}
        }
    }
    let mut parent = env.parent(element);
    while let Some(candidate) = parent {
        let style = env.computed_style(&candidate);
        let skip  = skip_static && style.position == Position::Static;
        if !skip && style.clips_overflow() {
            return Some(candidate)
        }
        parent = env.parent(&candidate);
    }
    None
}

/// All scroll containers affecting the visibility of the element, the nearest first. Each entry
/// is the scroll parent of the previous one.
pub fn scroll_ancestors<Env:Environment>
(env:&Env, element:&Env::Element, respect_positioning:bool) -> Ancestors<Env::Element> {
    let first = scroll_parent(env,element,respect_positioning);
    iter::successors(first,|ancestor| scroll_parent(env,ancestor,respect_positioning)).collect()
}

/// Visible rectangle of the element, given the chain returned by `scroll_ancestors`.
pub fn clip_against_ancestors<Env:Environment>
(env:&Env, element:&Env::Element, ancestors:&[Env::Element]) -> Rectangle {
    let clip = ancestors.iter().rev().fold(env.viewport(),|clip,ancestor| {
        env.bounding_rect(ancestor).clip_to(&clip)
    });
    env.bounding_rect(element).clip_to(&clip)
}



// ===================
// === VisiblePart ===
// ===================

/// Result of resolving the visibility of an element.
#[derive(Clone,Debug,PartialEq)]
pub struct VisiblePart<Element> {
    /// The part of the element not clipped away.
    pub rect      : Rectangle,
    /// The scroll containers the element was clipped by, the nearest first.
    pub ancestors : Ancestors<Element>,
}

impl<Element> VisiblePart<Element> {
    /// Whether the element is visible.
    pub fn is_visible(&self) -> bool {
        self.rect.is_visible()
    }
}

/// Resolves the visible part of the element.
pub fn visible_part<Env:Environment>
(env:&Env, element:&Env::Element, respect_positioning:bool) -> VisiblePart<Env::Element> {
    let ancestors = scroll_ancestors(env,element,respect_positioning);
    let rect      = clip_against_ancestors(env,element,&ancestors);
    VisiblePart {rect,ancestors}
}



// =============
// === Tests ===
// =============
