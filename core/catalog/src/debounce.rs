// core/catalog/src/debounce.rs

use crate::query::{run_query, QueryOutcome, QueryState};
use crate::session::CatalogConfig;
use crate::store::ListingStore;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Outcome of a debounced query, tagged with the submission that
/// produced it
#[derive(Debug, Clone, PartialEq)]
pub struct DebouncedResult {
    pub generation: u64,
    pub state: QueryState,
    pub outcome: QueryOutcome,
}

/// Debounced search runner.
///
/// Every `submit` bumps a generation counter and schedules the query
/// after the configured delay. A submission that has been superseded by
/// a newer one publishes nothing, so a stale query can never overwrite
/// the result of a newer query.
pub struct SearchDebouncer {
    store: Arc<ListingStore>,
    delay: Duration,
    generation: Arc<AtomicU64>,
    tx: Arc<watch::Sender<Option<DebouncedResult>>>,
}

impl SearchDebouncer {
    pub fn new(store: Arc<ListingStore>, delay: Duration) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            store,
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            tx: Arc::new(tx),
        }
    }

    /// Build with the session's configured delay
    pub fn from_config(store: Arc<ListingStore>, config: &CatalogConfig) -> Self {
        Self::new(store, Duration::from_millis(config.debounce_ms))
    }

    /// Watch for published results
    pub fn subscribe(&self) -> watch::Receiver<Option<DebouncedResult>> {
        self.tx.subscribe()
    }

    /// Schedule a query for this state after the delay. Returns the task
    /// handle so callers (and tests) can await completion.
    pub fn submit(&self, state: QueryState) -> JoinHandle<()> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.generation);
        let store = Arc::clone(&self.store);
        let tx = Arc::clone(&self.tx);
        let delay = self.delay;

        debug!(generation, term = %state.search_term, "Debounced query scheduled");

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            if latest.load(Ordering::SeqCst) != generation {
                debug!(generation, "Debounced query superseded before running");
                return;
            }

            let outcome = run_query(&store, &state);

            // Publish only if no newer result landed while we ran
            tx.send_if_modified(|slot| match slot {
                Some(previous) if previous.generation > generation => false,
                _ => {
                    *slot = Some(DebouncedResult {
                        generation,
                        state,
                        outcome,
                    });
                    true
                }
            });
        })
    }
}
