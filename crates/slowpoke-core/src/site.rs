//! Identity of an instrumented callable or routine.

/// Name and declaring source location of a wrapped callable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    name: &'static str,
    file: &'static str,
    line: u32,
}

impl CallSite {
    pub const fn new(name: &'static str, file: &'static str, line: u32) -> Self {
        Self { name, file, line }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

/// Build a [`CallSite`] for `name` at the invocation's file and line.
///
/// ```
/// let site = slowpoke_core::callsite!("MainHandler.get");
/// assert_eq!(site.name(), "MainHandler.get");
/// assert!(site.file().ends_with(".rs"));
/// ```
#[macro_export]
macro_rules! callsite {
    ($name:expr) => {
        $crate::site::CallSite::new($name, file!(), line!())
    };
}
