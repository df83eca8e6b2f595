//! Multi-target digest generation engine
//!
//! Fans out one worker per target, joins them all through a bounded
//! result channel, merges the records, and imposes a deterministic
//! total order so repeated runs serialize identically.

use crate::config::HashSelection;
use crate::error::{Result, SrigenError};
use crate::hash::IntegrityRecord;
use crate::target::handle_target;
use crossbeam::channel;
use reqwest::blocking::Client;
use std::thread;
use std::time::Duration;

/// Timeout for remote target fetches
const FETCH_TIMEOUT: Duration = Duration::from_secs(2);

/// Digest generation engine
///
/// Owns the HTTP client used for remote targets. The default client
/// carries a 2-second request timeout; tests and embedders can inject
/// their own via [`Generator::with_client`].
pub struct Generator {
    client: Client,
    selection: HashSelection,
}

impl Generator {
    /// Create a generator with the default HTTP client.
    pub fn new(selection: HashSelection) -> Self {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self::with_client(client, selection)
    }

    /// Create a generator using a preconfigured HTTP client.
    pub fn with_client(client: Client, selection: HashSelection) -> Self {
        Self { client, selection }
    }

    /// Compute integrity records for every target.
    ///
    /// Targets are classified and handled concurrently, one worker per
    /// target. All workers are joined before any error is inspected;
    /// the first observed failure aborts the whole call and discards
    /// sibling results. A run producing no records at all is an
    /// [`SrigenError::EmptyResult`], never a silently empty success.
    /// The merged records are ordered by file name, then algorithm.
    pub fn generate(&self, targets: &[String]) -> Result<Vec<IntegrityRecord>> {
        if targets.is_empty() {
            return Err(SrigenError::empty_result(targets.to_vec()));
        }

        tracing::debug!("generating digests for {} target(s)", targets.len());

        let (sender, receiver) = channel::bounded(targets.len());
        thread::scope(|scope| {
            for target in targets {
                let sender = sender.clone();
                let client = &self.client;
                let selection = self.selection;
                scope.spawn(move || {
                    let _ = sender.send(handle_target(client, target, selection));
                });
            }
        });
        drop(sender);

        let mut merged = Vec::new();
        let mut first_error = None;
        for result in receiver.iter().take(targets.len()) {
            match result {
                Ok(records) => merged.extend(records),
                Err(e) if first_error.is_none() => first_error = Some(e),
                Err(_) => {}
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        if merged.is_empty() {
            return Err(SrigenError::empty_result(targets.to_vec()));
        }

        merged.sort_by(|a, b| {
            a.file_name
                .cmp(&b.file_name)
                .then_with(|| a.algorithm().cmp(b.algorithm()))
        });

        Ok(merged)
    }
}
