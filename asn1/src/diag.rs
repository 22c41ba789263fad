//! Diagnostics for elements the deserializer had to drop.
//!
//! The deserializer never aborts a scan because one element is broken; it
//! reports the failure here and keeps going. Callers subscribe by passing
//! their own sink to [`deserialize_with`](crate::deserialize_with), or
//! ignore the channel entirely and get the default [`LogSink`].

use std::sync::Mutex;

use tlv::Tag;

use crate::Error;

/// A decode failure, attached to the buffer offset where the element began.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub offset: usize,
    pub tag: Option<Tag>,
    pub error: Error,
}

/// Receives per-element decode failures from the deserializer.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to the `log` facade. The default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic.tag {
            Some(tag) => log::warn!(
                "dropping undecodable {} element at offset {}: {}",
                tag,
                diagnostic.offset,
                diagnostic.error
            ),
            None => log::warn!(
                "stopping scan at offset {}: {}",
                diagnostic.offset,
                diagnostic.error
            ),
        }
    }
}

/// Accumulates diagnostics for callers that want to inspect them.
#[derive(Debug, Default)]
pub struct CollectSink {
    collected: Mutex<Vec<Diagnostic>>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains everything reported so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        self.collected
            .lock()
            .map(|mut collected| std::mem::take(&mut *collected))
            .unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.collected
            .lock()
            .map(|collected| collected.is_empty())
            .unwrap_or(true)
    }
}

impl DiagnosticSink for CollectSink {
    fn report(&self, diagnostic: Diagnostic) {
        if let Ok(mut collected) = self.collected.lock() {
            collected.push(diagnostic);
        }
    }
}
