//! Configuration of the display detector.

use logger::Level;



// ========================
// === DuplicateBinding ===
// ========================

/// What `bind` and `bind_once` do with an element that is already tracked.
#[derive(Clone,Copy,Debug,Eq,PartialEq)]
pub enum DuplicateBinding {
    /// Keep the existing binding, the new one is dropped without calling any callback.
    Ignore,
    /// Drop the existing binding and bind the element again with the new callbacks.
    Replace,
    /// Track the element once more, so both bindings fire their callbacks.
    Allow,
}

impl Default for DuplicateBinding {
    fn default() -> Self {
        DuplicateBinding::Ignore
    }
}



// ==============
// === Config ===
// ==============

/// Configuration of a `Tracker` and of the browser integration.
#[derive(Clone,Copy,Debug,PartialEq)]
pub struct Config {
    /// Policy for binding an element that is already tracked.
    pub duplicate_binding : DuplicateBinding,
    /// Detach the scroll listener of a scroll container once no tracked element is clipped by it.
    /// When disabled, every discovered scroll container keeps its listener.
    pub prune_scroll_ancestors : bool,
    /// Take the CSS `position` of elements into account when looking for their scroll container:
    /// fixed elements are clipped by the viewport only, absolute elements skip statically
    /// positioned ancestors.
    pub respect_positioning : bool,
    /// Attach the window `resize` and `scroll` listeners in the capture phase. The window then sees
    /// the (non-bubbling) `scroll` events of every element too.
    pub capture_events : bool,
    /// The least severe log level emitted by the detector.
    pub log_level : Level,
}

impl Default for Config {
    fn default() -> Self {
        let duplicate_binding      = DuplicateBinding::Ignore;
        let prune_scroll_ancestors = true;
        let respect_positioning    = false;
        let capture_events         = false;
        let log_level              = Level::Warning;
        Self {duplicate_binding,prune_scroll_ancestors,respect_positioning,capture_events,log_level}
    }
}

impl Config {
    /// Configuration reproducing the first generation of the detector: capture-phase listeners,
    /// positioning-aware scroll container lookup and scroll listeners that are never removed.
    pub fn legacy() -> Self {
        Self {
            prune_scroll_ancestors : false,
            respect_positioning    : true,
            capture_events         : true,
            ..Self::default()
        }
    }
}
