//! Per-kind target handling
//!
//! Obtains a byte stream for a classified target and feeds it to the
//! digest computer. Directory targets fan out one worker per contained
//! regular file and join through a channel sized to the fan-out count.

use crate::config::HashSelection;
use crate::error::{Result, SrigenError};
use crate::hash::{digest_stream, records_for_target, IntegrityRecord};
use crate::target::{classify, TargetKind};
use crossbeam::channel;
use reqwest::blocking::Client;
use reqwest::Url;
use std::fs::File;
use std::path::Path;
use std::thread;

/// Classify a target and produce its integrity records.
pub fn handle_target(
    client: &Client,
    target: &str,
    selection: HashSelection,
) -> Result<Vec<IntegrityRecord>> {
    match classify(target) {
        TargetKind::Remote(url) => handle_remote(client, target, url, selection),
        TargetKind::File(path) => handle_file(target, &path, selection),
        TargetKind::Directory(path) => handle_directory(&path, selection),
    }
}

/// Fetch a remote target and digest the response body.
///
/// Only transport failures are errors; a non-2xx response body is still
/// digested. The digest computer drains the body in full, and dropping
/// the response releases the connection on either path.
fn handle_remote(
    client: &Client,
    target: &str,
    url: Url,
    selection: HashSelection,
) -> Result<Vec<IntegrityRecord>> {
    tracing::debug!("fetching {url}");

    let response = client
        .get(url)
        .send()
        .map_err(|e| SrigenError::fetch(target, e))?;

    let digests = digest_stream(target, response, selection)?;
    Ok(records_for_target(target, digests))
}

/// Open a local file and digest its contents.
fn handle_file(target: &str, path: &Path, selection: HashSelection) -> Result<Vec<IntegrityRecord>> {
    let file = File::open(path).map_err(|e| SrigenError::file_open(path, e))?;
    let digests = digest_stream(target, file, selection)?;
    Ok(records_for_target(target, digests))
}

/// Digest every immediate regular file of a directory concurrently.
///
/// Non-regular entries (subdirectories, sockets) are skipped. Workers
/// report through a channel with one slot per file; all workers are
/// joined before results are inspected, and the first error observed
/// wins.
fn handle_directory(path: &Path, selection: HashSelection) -> Result<Vec<IntegrityRecord>> {
    let entries = std::fs::read_dir(path).map_err(|e| SrigenError::directory_list(path, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SrigenError::directory_list(path, e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| SrigenError::directory_list(path, e))?;

        if file_type.is_file() {
            files.push(entry.path());
        } else {
            tracing::debug!("skipping non-regular entry {:?}", entry.path());
        }
    }

    tracing::debug!("digesting {} files under '{}'", files.len(), path.display());

    let (sender, receiver) = channel::bounded(files.len());
    thread::scope(|scope| {
        for file in &files {
            let sender = sender.clone();
            scope.spawn(move || {
                let child_target = file.to_string_lossy().into_owned();
                let _ = sender.send(handle_file(&child_target, file, selection));
            });
        }
    });
    drop(sender);

    let mut combined = Vec::new();
    let mut first_error = None;
    for result in receiver.iter().take(files.len()) {
        match result {
            Ok(records) => combined.extend(records),
            Err(e) if first_error.is_none() => first_error = Some(e),
            Err(_) => {}
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(combined),
    }
}
