//! Multi-algorithm digest computation
//!
//! The byte source is read exactly once: every chunk is broadcast to all
//! requested hashers, because a source such as a network body cannot be
//! rewound for a second pass. Finalization of the requested algorithms
//! runs in parallel, each worker reporting into a channel sized to the
//! algorithm fan-out.

use crate::config::{HashAlgorithm, HashSelection};
use crate::error::{Result, SrigenError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use crossbeam::channel;
use sha2::{Digest as _, Sha256, Sha384, Sha512};
use std::io::Read;
use std::thread;

/// Read buffer size for streaming digests
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// A single computed digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestValue {
    /// Algorithm that produced this digest
    pub algorithm: HashAlgorithm,
    /// Rendered digest string, e.g. `sha256-<base64>`
    pub value: String,
}

/// Unified hasher over the supported SRI algorithms
pub enum Hasher {
    /// SHA-256
    Sha256(Sha256),
    /// SHA-384
    Sha384(Sha384),
    /// SHA-512
    Sha512(Sha512),
}

impl Hasher {
    /// Create a new hasher for the given algorithm
    pub fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Sha256 => Self::Sha256(Sha256::new()),
            HashAlgorithm::Sha384 => Self::Sha384(Sha384::new()),
            HashAlgorithm::Sha512 => Self::Sha512(Sha512::new()),
        }
    }

    /// Get the algorithm this hasher uses
    pub fn algorithm(&self) -> HashAlgorithm {
        match self {
            Self::Sha256(_) => HashAlgorithm::Sha256,
            Self::Sha384(_) => HashAlgorithm::Sha384,
            Self::Sha512(_) => HashAlgorithm::Sha512,
        }
    }

    /// Update the hasher with more data
    pub fn update(&mut self, data: &[u8]) {
        match self {
            Self::Sha256(h) => h.update(data),
            Self::Sha384(h) => h.update(data),
            Self::Sha512(h) => h.update(data),
        }
    }

    /// Finalize into the SRI digest string `sha<bits>-<base64>`
    pub fn finalize(self) -> DigestValue {
        let algorithm = self.algorithm();
        let bytes = match self {
            Self::Sha256(h) => h.finalize().to_vec(),
            Self::Sha384(h) => h.finalize().to_vec(),
            Self::Sha512(h) => h.finalize().to_vec(),
        };

        DigestValue {
            algorithm,
            value: format!("{}-{}", algorithm.name(), STANDARD.encode(bytes)),
        }
    }
}

/// Compute the requested digests over a byte stream.
///
/// The stream is consumed exactly once and drained to EOF. A read
/// failure aborts the whole call with a [`SrigenError::StreamRead`]
/// naming `target`. The returned digests carry no particular order;
/// callers impose ordering where they need it.
pub fn digest_stream<R: Read>(
    target: &str,
    mut reader: R,
    selection: HashSelection,
) -> Result<Vec<DigestValue>> {
    let mut hashers: Vec<Hasher> = selection
        .algorithms()
        .iter()
        .map(|algorithm| Hasher::new(*algorithm))
        .collect();

    let mut buffer = vec![0u8; READ_BUFFER_SIZE];
    loop {
        let n = reader
            .read(&mut buffer)
            .map_err(|e| SrigenError::stream_read(target, e))?;
        if n == 0 {
            break;
        }

        // Broadcast the chunk; the source cannot be read twice.
        for hasher in &mut hashers {
            hasher.update(&buffer[..n]);
        }
    }

    // Finalize each algorithm on its own worker. The channel holds one
    // slot per worker, and the scope joins them all before we drain it.
    let count = hashers.len();
    let (sender, receiver) = channel::bounded(count);
    thread::scope(|scope| {
        for hasher in hashers {
            let sender = sender.clone();
            scope.spawn(move || {
                let _ = sender.send(hasher.finalize());
            });
        }
    });
    drop(sender);

    Ok(receiver.iter().take(count).collect())
}
