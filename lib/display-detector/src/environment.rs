//! The DOM-like environment the detector runs in.

use crate::prelude::*;

use crate::geometry::Rectangle;



// ================
// === Position ===
// ================

/// The computed value of the CSS `position` property.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
#[allow(missing_docs)]
pub enum Position { Static, Relative, Absolute, Fixed, Sticky }

impl Default for Position {
    fn default() -> Self {
        Position::Static
    }
}

impl Position {
    /// Parses a CSS value. Unknown values are treated as `static`.
    pub fn from_css(value:&str) -> Self {
        match value.trim() {
            "relative" => Position::Relative,
            "absolute" => Position::Absolute,
            "fixed"    => Position::Fixed,
            "sticky"   => Position::Sticky,
            _          => Position::Static,
        }
    }
}



// =====================
// === ComputedStyle ===
// =====================

/// Overflow values that make an element clip its descendants.
const CLIPPING_OVERFLOW : &[&str] = &["auto","scroll","hidden"];

/// The part of an element's computed style that affects clipping.
#[derive(Clone,Debug,Default,PartialEq)]
pub struct ComputedStyle {
    /// `overflow`.
    pub overflow   : String,
    /// `overflow-x`.
    pub overflow_x : String,
    /// `overflow-y`.
    pub overflow_y : String,
    /// `position`.
    pub position   : Position,
}

impl ComputedStyle {
    /// Style of an element scrolling its content in both directions.
    pub fn scrollable() -> Self {
        let overflow   = "auto".to_string();
        let overflow_x = overflow.clone();
        let overflow_y = overflow.clone();
        let position   = default();
        Self {overflow,overflow_x,overflow_y,position}
    }

    /// Returns the style with `position` changed.
    pub fn with_position(self, position:Position) -> Self {
        Self {position,..self}
    }

    /// Checks whether any of the overflow properties makes the element clip its descendants.
    pub fn clips_overflow(&self) -> bool {
        let overflow = [&self.overflow,&self.overflow_x,&self.overflow_y].iter().join("");
        CLIPPING_OVERFLOW.iter().any(|value| overflow.contains(value))
    }
}



// ===================
// === Environment ===
// ===================

/// Everything the detector needs from the document it observes. Elements are compared by
/// identity and never owned: the environment keeps them alive.
pub trait Environment {
    /// Reference to a DOM element.
    type Element : Clone + Debug + PartialEq + 'static;

    /// The viewport rectangle, always anchored at the origin.
    fn viewport(&self) -> Rectangle;

    /// Layout rectangle of the element relative to the viewport, like `getBoundingClientRect`.
    fn bounding_rect(&self, element:&Self::Element) -> Rectangle;

    /// The parent element, `None` for the document root and for detached elements.
    fn parent(&self, element:&Self::Element) -> Option<Self::Element>;

    /// The computed style of the element.
    fn computed_style(&self, element:&Self::Element) -> ComputedStyle;

    /// All elements matching the CSS selector, in document order. Invalid selectors match
    /// nothing.
    fn query_all(&self, selector:&str) -> Vec<Self::Element>;

    /// Starts delivering the `scroll` events of the element to the detector.
    fn watch_scroll(&self, element:&Self::Element);

    /// Stops delivering the `scroll` events of the element to the detector.
    fn unwatch_scroll(&self, element:&Self::Element);
}



// ============
// === Mock ===
// ============




// =============
// === Tests ===
// =============

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_detection() {
        assert!(!ComputedStyle::default().clips_overflow());
        assert!(ComputedStyle::scrollable().clips_overflow());
        let visible = |overflow_y:&str| ComputedStyle {
            overflow   : "visible".into(),
            overflow_x : "visible".into(),
            overflow_y : overflow_y.into(),
            ..default()
        };
        assert!(!visible("visible").clips_overflow());
        assert!(visible("hidden").clips_overflow());
        assert!(visible("scroll").clips_overflow());
    }

    #[test]
    fn position_parsing() {
        assert_eq!(Position::from_css("fixed"),Position::Fixed);
        assert_eq!(Position::from_css(" absolute "),Position::Absolute);
        assert_eq!(Position::from_css("inherit"),Position::Static);
    }
}
