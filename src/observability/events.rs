//! Observable lifecycle events for the bookshelf service.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Startup begins
    BootStart,
    /// Configuration loaded (or defaulted)
    ConfigLoaded,
    /// Server bound and accepting requests
    Serving,
    /// Startup failed (FATAL)
    BootFailed,
    /// Server stopped after a shutdown signal
    Shutdown,

    // Catalog
    /// Mirror file read into memory
    CatalogLoaded,
    /// Mirror file absent, starting empty
    CatalogFileMissing,
    /// Mirror file rewritten
    CatalogSaved,
    /// Mirror file could not be written
    CatalogSaveFailed,

    // Requests
    /// One HTTP request handled
    HttpRequest,
    /// Handler failed with a server-side error
    HttpInternalError,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOKSHELF_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::Serving => "BOOKSHELF_SERVING",
            Event::BootFailed => "BOOKSHELF_STARTUP_FAILED",
            Event::Shutdown => "BOOKSHELF_SHUTDOWN",

            Event::CatalogLoaded => "CATALOG_LOADED",
            Event::CatalogFileMissing => "CATALOG_FILE_MISSING",
            Event::CatalogSaved => "CATALOG_SAVED",
            Event::CatalogSaveFailed => "CATALOG_SAVE_FAILED",

            Event::HttpRequest => "HTTP_REQUEST",
            Event::HttpInternalError => "HTTP_INTERNAL_ERROR",
        }
    }

    /// Default severity this event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::BootFailed => Severity::Fatal,
            Event::CatalogSaveFailed | Event::HttpInternalError => Severity::Error,
            Event::CatalogFileMissing => Severity::Warn,
            _ => Severity::Info,
        }
    }

    /// Returns true if this event indicates a fatal condition
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        assert_eq!(Event::CatalogLoaded.as_str(), "CATALOG_LOADED");
        assert_eq!(Event::HttpRequest.to_string(), "HTTP_REQUEST");
    }

    #[test]
    fn test_fatal_events() {
        assert!(Event::BootFailed.is_fatal());
        assert!(!Event::CatalogSaveFailed.is_fatal());
        assert_eq!(Event::CatalogFileMissing.severity(), Severity::Warn);
        assert_eq!(Event::CatalogSaved.severity(), Severity::Info);
    }
}
