//! Hierarchical logger. Every component owns a `Logger` whose path names the component and its
//! parents (e.g. `DisplayDetector.registry`). Messages are formatted lazily, only when the logger's
//! level lets them through. In the browser they are written to the JavaScript console, on native
//! targets to the standard error stream.

#![warn(missing_docs)]
#![warn(trivial_casts)]
#![warn(unused_import_braces)]

use detector_prelude::*;

use std::fmt;



// =============
// === Level ===
// =============

/// Severity of a log message. Ordered from the most verbose to the most severe.
#[derive(Clone,Copy,Debug,Eq,Hash,Ord,PartialEq,PartialOrd)]
#[allow(missing_docs)]
pub enum Level { Trace, Debug, Info, Warning, Error }

impl Default for Level {
    fn default() -> Self {
        Level::Info
    }
}

impl Display for Level {
    fn fmt(&self, f:&mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Level::Trace   => "TRACE",
            Level::Debug   => "DEBUG",
            Level::Info    => "INFO",
            Level::Warning => "WARNING",
            Level::Error   => "ERROR",
        };
        f.pad(label)
    }
}



// =================
// === AnyLogger ===
// =================

/// Interface of every logger. Implemented for `Logger` and for references to loggers, so the
/// logging macros accept both `logger` and `&logger`.
pub trait AnyLogger {
    /// Dot-separated path of the logger.
    fn path(&self) -> &str;

    /// The least severe level this logger still emits.
    fn level(&self) -> Level;

    /// Checks whether messages of the given level would be emitted.
    fn is_enabled(&self, level:Level) -> bool {
        level >= self.level()
    }

    /// Emits the message produced by `msg` if `level` is enabled.
    fn log<F:FnOnce() -> String>(&self, level:Level, msg:F) {
        if self.is_enabled(level) {
            sink::write(level,self.path(),&msg())
        }
    }
}

impl<T:AnyLogger> AnyLogger for &T {
    fn path (&self) -> &str  { T::path(self) }
    fn level(&self) -> Level { T::level(self) }
}



// ==============
// === Logger ===
// ==============

/// The default logger implementation. Cheap to clone, the path is shared.
#[derive(Clone,Debug)]
pub struct Logger {
    path  : Rc<str>,
    level : Level,
}

impl Logger {
    /// Creates a root logger with the default level.
    pub fn new(path:impl Str) -> Self {
        Self::new_with_level(path,default())
    }

    /// Creates a root logger emitting messages of `level` and above.
    pub fn new_with_level(path:impl Str, level:Level) -> Self {
        let path = path.as_ref().into();
        Self {path,level}
    }

    /// Creates a child logger. It inherits the level of its parent.
    pub fn sub(parent:impl AnyLogger, name:impl Str) -> Self {
        let path = format!("{}.{}",parent.path(),name.as_ref()).into();
        Self {path,level:parent.level()}
    }

    /// Returns a copy of this logger emitting messages of `level` and above.
    pub fn with_level(&self, level:Level) -> Self {
        Self {path:self.path.clone(),level}
    }
}

impl AnyLogger for Logger {
    fn path (&self) -> &str  { &self.path }
    fn level(&self) -> Level { self.level }
}



// ============
// === Sink ===
// ============

#[cfg(target_arch = "wasm32")]
mod sink {
    use super::Level;
    use wasm_bindgen::JsValue;
    use web_sys::console;

    pub fn write(level:Level, path:&str, msg:&str) {
        let line = JsValue::from_str(&format!("[{}] {}",path,msg));
        match level {
            Level::Trace   => console::debug_1(&line),
            Level::Debug   => console::debug_1(&line),
            Level::Info    => console::info_1(&line),
            Level::Warning => console::warn_1(&line),
            Level::Error   => console::error_1(&line),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod sink {
    use super::Level;

    pub fn write(level:Level, path:&str, msg:&str) {
        eprintln!("{:<7} [{}] {}",level,path,msg)
    }
}



// ==============
// === Macros ===
// ==============

/// Logs a message at the given level. The message arguments follow `format!` syntax.
#[macro_export]
macro_rules! log {
    ($level:expr, $logger:expr, $($arg:tt)*) => {
        $crate::AnyLogger::log(&$logger,$level,|| format!($($arg)*))
    };
}

/// Logs a `Trace` message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)*) => { $crate::log!($crate::Level::Trace,$logger,$($arg)*) };
}

/// Logs a `Debug` message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)*) => { $crate::log!($crate::Level::Debug,$logger,$($arg)*) };
}

/// Logs an `Info` message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)*) => { $crate::log!($crate::Level::Info,$logger,$($arg)*) };
}

/// Logs a `Warning` message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)*) => { $crate::log!($crate::Level::Warning,$logger,$($arg)*) };
}

/// Logs an `Error` message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)*) => { $crate::log!($crate::Level::Error,$logger,$($arg)*) };
}



// =============
// === Tests ===
// =============

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_logger_extends_path() {
        let root  = Logger::new("DisplayDetector");
        let child = Logger::sub(&root,"registry");
        assert_eq!(child.path(),"DisplayDetector.registry");
        assert_eq!(child.level(),Level::Info);
    }

    #[test]
    fn messages_below_level_are_not_formatted() {
        let logger    = Logger::new_with_level("test",Level::Warning);
        let formatted = Cell::new(false);
        logger.log(Level::Debug,|| { formatted.set(true); String::new() });
        assert!(!formatted.get());
        logger.log(Level::Error,|| { formatted.set(true); "shown".into() });
        assert!(formatted.get());
    }

    #[test]
    fn macros_accept_loggers_and_references() {
        let logger = Logger::new_with_level("test",Level::Error);
        let name   = "element";
        debug!(logger,"Skipped {name}.");
        warning!(&logger,"Skipped {name}.");
        assert!(!logger.is_enabled(Level::Warning));
    }
}
