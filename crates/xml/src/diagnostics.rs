//! Diagnostic sinks for recoverable parse events.
//!
//! Unknown elements are skipped, never fatal. Whoever drives a parse decides
//! where reports about them go by placing a [`Diagnostics`] implementation in
//! the [`crate::ParseContext`]. Nothing here touches global state.

use parking_lot::Mutex;

/// An element skipped because the enclosing entity does not declare it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownElement {
    /// Tag of the entity that was parsing when the element appeared.
    pub entity: &'static str,
    /// Name of the skipped element.
    pub element: String,
    /// Depth of the skipped element in the document.
    pub depth: usize,
}

/// Receiver for recoverable parse events.
pub trait Diagnostics {
    /// Called once for every skipped unknown element.
    fn unknown_element(&self, report: UnknownElement);
}

/// Reports through `tracing` at debug level. This is the default.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn unknown_element(&self, report: UnknownElement) {
        tracing::debug!(
            entity = report.entity,
            element = %report.element,
            depth = report.depth,
            "skipping unrecognized element"
        );
    }
}

/// Discards every report.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {
    fn unknown_element(&self, _report: UnknownElement) {}
}

/// Records every report, for tests and for callers that watch for schema
/// drift in API responses.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    unknown: Mutex<Vec<UnknownElement>>,
}

impl CollectingDiagnostics {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the reports gathered so far.
    pub fn unknown_elements(&self) -> Vec<UnknownElement> {
        self.unknown.lock().clone()
    }

    /// Returns `true` if nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.unknown_elements().is_empty()
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn unknown_element(&self, report: UnknownElement) {
        self.unknown.lock().push(report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(element: &str) -> UnknownElement {
        UnknownElement {
            entity: "person",
            element: element.to_string(),
            depth: 2,
        }
    }

    #[test]
    fn collector_keeps_reports_in_order() {
        let diagnostics = CollectingDiagnostics::new();
        assert!(diagnostics.is_empty());
        diagnostics.unknown_element(report("picture-url"));
        diagnostics.unknown_element(report("twitter-accounts"));
        let names: Vec<_> = diagnostics
            .unknown_elements()
            .into_iter()
            .map(|r| r.element)
            .collect();
        assert_eq!(names, vec!["picture-url", "twitter-accounts"]);
    }

    #[test]
    fn collector_is_shared_across_threads() {
        let diagnostics = CollectingDiagnostics::new();
        std::thread::scope(|scope| {
            for i in 0..4 {
                let diagnostics = &diagnostics;
                scope.spawn(move || diagnostics.unknown_element(report(&format!("e{i}"))));
            }
        });
        let mut names: Vec<_> = diagnostics
            .unknown_elements()
            .into_iter()
            .map(|r| r.element)
            .collect();
        names.sort();
        assert_eq!(names, vec!["e0", "e1", "e2", "e3"]);
    }

    #[test]
    fn silent_and_tracing_accept_reports() {
        SilentDiagnostics.unknown_element(report("a"));
        TracingDiagnostics.unknown_element(report("b"));
    }
}
