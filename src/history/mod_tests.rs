use std::sync::Arc;
use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::Duration;

use tempfile::TempDir;

use super::*;
use crate::chart::ChartType;
use crate::engine::Engine;
use crate::error::VizError;
use crate::request::{ChartData, ChartOptions};

fn generated(title: &str) -> (ChartRequest, ThemeConfig, Spec) {
    let engine = Engine::default();
    let request = engine
        .prepare(
            ChartType::Bar,
            ChartData::series("categories", &["A", "B"], &[1.0, 2.0]),
            ChartOptions::new(title),
        )
        .unwrap();
    let spec = engine.render(&request).unwrap();
    (request, engine.theme().clone(), spec)
}

fn append(store: &HistoryStore, title: &str) -> Arc<HistoryEntry> {
    let (request, theme, spec) = generated(title);
    store.append(request, theme, spec)
}

#[derive(Default)]
struct RecordingSink {
    seen: Arc<Mutex<Vec<u64>>>,
}

impl HistorySink for RecordingSink {
    fn record(&self, entry: &HistoryEntry) -> crate::Result<()> {
        self.seen.lock().unwrap().push(entry.index);
        Ok(())
    }
}

/// Stalls on the first entry after signalling that it has started.
struct StallingSink {
    started: Mutex<Option<Sender<()>>>,
    seen: Arc<Mutex<Vec<u64>>>,
}

impl HistorySink for StallingSink {
    fn record(&self, entry: &HistoryEntry) -> crate::Result<()> {
        if entry.index == 0 {
            if let Some(started) = self.started.lock().unwrap().take() {
                started.send(()).unwrap();
            }
            thread::sleep(Duration::from_millis(200));
        }
        self.seen.lock().unwrap().push(entry.index);
        Ok(())
    }
}

struct FailingSink;

impl HistorySink for FailingSink {
    fn record(&self, _entry: &HistoryEntry) -> crate::Result<()> {
        Err(VizError::Config("disk full".to_string()))
    }
}

mod ordering_tests {
    use super::*;

    #[test]
    fn entries_keep_generation_order() {
        let store = HistoryStore::new();
        for title in ["first", "second", "third"] {
            append(&store, title);
        }

        let titles: Vec<String> = store.all().iter().map(|e| e.request.title.clone()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
        let indices: Vec<u64> = store.all().iter().map(|e| e.index).collect();
        assert_eq!(indices, [0, 1, 2]);
        assert_eq!(store.last().unwrap().request.title, "third");
    }

    #[test]
    fn entry_spec_matches_request() {
        let store = HistoryStore::new();
        let entry = append(&store, "Traceable");
        assert_eq!(entry.spec.title.text, entry.request.title);
        assert_eq!(entry.theme, ThemeConfig::default());
    }

    #[test]
    fn entry_is_stamped_with_generation_time() {
        let before = current_unix_timestamp();
        let entry = append(&HistoryStore::new(), "stamped");
        let after = current_unix_timestamp();

        assert!(before > 1_700_000_000);
        assert!((before..=after).contains(&entry.created_at));
    }

    #[test]
    fn clear_does_not_rewind_indices() {
        let store = HistoryStore::new();
        append(&store, "a");
        append(&store, "b");
        store.clear();
        assert!(store.is_empty());

        let entry = append(&store, "c");
        assert_eq!(entry.index, 2);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn snapshot_is_detached_from_later_appends() {
        let store = HistoryStore::new();
        append(&store, "a");
        let snapshot = store.all();
        append(&store, "b");
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(), 2);
    }
}

mod retention_tests {
    use super::*;

    #[test]
    fn cap_drops_oldest_entries() {
        let store = HistoryStore::new().with_max_entries(2);
        for title in ["a", "b", "c"] {
            append(&store, title);
        }

        let entries = store.all();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].request.title, "b");
        assert_eq!(entries[1].index, 2);
    }

    #[test]
    fn zero_cap_means_unbounded() {
        let store = HistoryStore::new().with_max_entries(0);
        assert_eq!(store.max_entries(), None);
        for title in ["a", "b", "c"] {
            append(&store, title);
        }
        assert_eq!(store.len(), 3);
    }
}

mod concurrency_tests {
    use super::*;

    #[test]
    fn concurrent_appends_get_unique_indices() {
        let store = Arc::new(HistoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for n in 0..10 {
                        append(&store, &format!("{worker}-{n}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut indices: Vec<u64> = store.all().iter().map(|e| e.index).collect();
        assert_eq!(indices.len(), 80);
        let in_order = indices.clone();
        indices.sort_unstable();
        indices.dedup();
        assert_eq!(indices, (0..80).collect::<Vec<u64>>());
        assert_eq!(in_order, indices);
    }

    #[test]
    fn slow_sink_still_records_in_index_order() {
        let (started_tx, started_rx) = mpsc::channel();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = StallingSink {
            started: Mutex::new(Some(started_tx)),
            seen: Arc::clone(&seen),
        };
        let store = Arc::new(HistoryStore::new().with_sink(sink));

        let first = {
            let store = Arc::clone(&store);
            thread::spawn(move || append(&store, "first"))
        };
        started_rx.recv().unwrap();
        let second = append(&store, "second");
        first.join().unwrap();

        assert_eq!(second.index, 1);
        let memory: Vec<u64> = store.all().iter().map(|e| e.index).collect();
        assert_eq!(memory, [0, 1]);
        assert_eq!(*seen.lock().unwrap(), memory);
    }
}

mod sink_tests {
    use super::*;

    #[test]
    fn sink_sees_every_append() {
        let sink = RecordingSink::default();
        let seen = Arc::clone(&sink.seen);
        let store = HistoryStore::new().with_sink(sink);

        append(&store, "a");
        append(&store, "b");
        assert_eq!(*seen.lock().unwrap(), vec![0, 1]);
    }

    #[test]
    fn failing_sink_keeps_entry_in_memory() {
        let store = HistoryStore::new().with_sink(FailingSink);
        append(&store, "a");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn json_lines_sink_writes_one_object_per_entry() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.jsonl");
        let sink = JsonLinesSink::open(&path).unwrap();
        assert_eq!(sink.path(), Some(path.as_path()));
        let store = HistoryStore::new().with_sink(sink);

        append(&store, "first");
        append(&store, "second");

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = content
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["index"], 1);
        assert!(lines[1]["created_at"].as_u64().unwrap() > 0);
        assert_eq!(lines[1]["request"]["title"], "second");
        assert_eq!(lines[0]["spec"]["$schema"], crate::spec::VEGA_LITE_SCHEMA);
    }

    #[test]
    fn json_lines_sink_over_buffer() {
        let sink = JsonLinesSink::new(Vec::new());
        let (request, theme, spec) = generated("buffered");
        let entry = HistoryEntry {
            index: 7,
            created_at: 1_700_000_000,
            request,
            theme,
            spec,
        };
        sink.record(&entry).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.ends_with('\n'));
        assert!(text.contains("\"index\":7"));
    }
}
