//! Ordered record of generated charts.
//!
//! Entries are immutable once appended and shared as `Arc`s, so reading the
//! history never copies specs. A single mutex serializes index assignment,
//! insertion and the sink call, so a persisted history is written in index
//! order.

mod sink;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use tracing::{debug, warn};

use crate::request::ChartRequest;
use crate::spec::Spec;
use crate::theme::ThemeConfig;

pub use sink::{HistorySink, JsonLinesSink};

/// One generated chart with the request and theme that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub index: u64,
    /// Unix timestamp (seconds since epoch) of generation.
    pub created_at: u64,
    pub request: ChartRequest,
    pub theme: ThemeConfig,
    pub spec: Spec,
}

/// Seconds since the Unix epoch, or 0 if the clock is before it.
#[must_use]
pub fn current_unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

#[derive(Debug, Default)]
struct Inner {
    entries: VecDeque<Arc<HistoryEntry>>,
    next_index: u64,
}

/// Append-only history of generated specs.
#[derive(Default)]
pub struct HistoryStore {
    inner: Mutex<Inner>,
    max_entries: Option<usize>,
    sink: Option<Box<dyn HistorySink>>,
}

impl std::fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryStore")
            .field("len", &self.len())
            .field("max_entries", &self.max_entries)
            .field("has_sink", &self.sink.is_some())
            .finish()
    }
}

impl HistoryStore {
    /// Unbounded store without persistence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only the most recent `max_entries` entries.
    ///
    /// A cap of zero is treated as unbounded.
    #[must_use]
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = (max_entries > 0).then_some(max_entries);
        self
    }

    /// Forward every appended entry to `sink`.
    #[must_use]
    pub fn with_sink(mut self, sink: impl HistorySink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    #[must_use]
    pub const fn max_entries(&self) -> Option<usize> {
        self.max_entries
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Entries are pushed whole, so a poisoned lock still guards a
        // consistent deque.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record a generated chart and return the stored entry.
    pub fn append(&self, request: ChartRequest, theme: ThemeConfig, spec: Spec) -> Arc<HistoryEntry> {
        let mut inner = self.lock();
        let entry = Arc::new(HistoryEntry {
            index: inner.next_index,
            created_at: current_unix_timestamp(),
            request,
            theme,
            spec,
        });
        inner.next_index += 1;
        inner.entries.push_back(Arc::clone(&entry));

        let mut evicted = 0;
        if let Some(max) = self.max_entries {
            while inner.entries.len() > max {
                inner.entries.pop_front();
                evicted += 1;
            }
        }

        debug!(
            index = entry.index,
            chart_type = %entry.request.chart_type,
            evicted,
            "Recorded chart in history"
        );

        // Held across the sink call so records arrive in index order.
        if let Some(sink) = &self.sink
            && let Err(e) = sink.record(&entry)
        {
            warn!(index = entry.index, error = %e, "Failed to persist history entry");
        }
        drop(inner);
        entry
    }

    /// Snapshot of all retained entries in generation order.
    #[must_use]
    pub fn all(&self) -> Vec<Arc<HistoryEntry>> {
        self.lock().entries.iter().cloned().collect()
    }

    #[must_use]
    pub fn last(&self) -> Option<Arc<HistoryEntry>> {
        self.lock().entries.back().cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Drop every retained entry. Indices keep counting from where they were.
    pub fn clear(&self) {
        let mut inner = self.lock();
        let dropped = inner.entries.len();
        inner.entries.clear();
        debug!(dropped, "Cleared chart history");
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
