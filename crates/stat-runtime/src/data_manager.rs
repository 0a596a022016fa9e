//! Content-hash-cached data manager.
//!
//! Wraps the analysis pipeline with an explicit cache keyed by the SHA-256
//! hash of the input file bytes plus the active start-date filter. A repeated
//! request with an identical key returns the cached [`AnalysisResult`] without
//! recomputation; any key change recomputes. Invalidation happens only on
//! input-identity change or an explicit [`DataManager::invalidate`] call,
//! never on a timer, and a failed load surfaces its error while leaving any
//! previous cache untouched.

use std::path::Path;

use chrono::NaiveDate;
use sha2::{Digest, Sha256};
use stat_core::config::NormalizerConfig;
use stat_core::error::{Result, StatError};
use stat_data::analysis::{analyze_events, AnalysisResult};
use stat_data::reader;
use tracing::debug;

// ── DataManager ───────────────────────────────────────────────────────────────

/// One cached analysis and the key it was computed under.
struct CacheEntry {
    content_hash: String,
    start_date: Option<NaiveDate>,
    result: AnalysisResult,
}

/// Content-identity-cached wrapper around the analysis pipeline.
///
/// # Example
/// ```no_run
/// use stat_core::config::NormalizerConfig;
/// use stat_runtime::data_manager::DataManager;
///
/// let mut manager = DataManager::new(NormalizerConfig::default());
/// let result = manager
///     .get_data(std::path::Path::new("data/example.csv"), None)
///     .expect("load failed");
/// println!("{} events", result.events.len());
/// ```
pub struct DataManager {
    /// Pipeline configuration applied to every analysis run.
    config: NormalizerConfig,
    /// Most recently computed analysis, if any.
    cache: Option<CacheEntry>,
    /// Human-readable description of the last load error.
    last_error: Option<String>,
}

impl DataManager {
    /// Create a manager running the pipeline under `config`.
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            config,
            cache: None,
            last_error: None,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────────

    /// Return the analysis of `path` under the given start-date filter,
    /// recomputing only when the file content or the filter changed.
    pub fn get_data(
        &mut self,
        path: &Path,
        start_date: Option<NaiveDate>,
    ) -> Result<&AnalysisResult> {
        let bytes = std::fs::read(path).map_err(|source| StatError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let hash = content_hash(&bytes);

        let stale = match &self.cache {
            Some(entry) => entry.content_hash != hash || entry.start_date != start_date,
            None => true,
        };

        if stale {
            let events = match reader::read_events(bytes.as_slice()) {
                Ok(events) => events,
                Err(e) => {
                    // The previous cache stays untouched as a best-effort
                    // fallback for the caller to keep displaying.
                    self.last_error = Some(e.to_string());
                    return Err(e);
                }
            };
            let result = analyze_events(events, start_date, &self.config);
            self.last_error = None;
            debug!(hash = %hash, "analysis cache updated");
            let entry = CacheEntry {
                content_hash: hash,
                start_date,
                result,
            };
            return Ok(&self.cache.insert(entry).result);
        }

        debug!(hash = %hash, "returning cached analysis result");
        match &self.cache {
            Some(entry) => Ok(&entry.result),
            None => unreachable!("a non-stale cache is always populated"),
        }
    }

    /// Drop the cached analysis, forcing the next request to recompute.
    pub fn invalidate(&mut self) {
        self.cache = None;
        debug!("analysis cache invalidated");
    }

    /// Content hash of the cached analysis, if any.
    pub fn cached_hash(&self) -> Option<&str> {
        self.cache.as_ref().map(|entry| entry.content_hash.as_str())
    }

    /// Human-readable description of the last load error, or `None`.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

// ── Hashing ───────────────────────────────────────────────────────────────────

/// SHA-256 of the raw file bytes, hex-encoded.
fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
