//! Isolated worker context for byte transcoding.
//!
//! The reference environment could not process bytes in its main context and
//! delegated to a sandboxed helper over a single shared mailbox, which forced
//! a one-request-in-flight discipline onto callers. Here the helper is a
//! dedicated worker thread, and every request carries its own reply channel,
//! so responses are correlated by construction and can never be
//! cross-delivered.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use anyhow::Context;

use crate::foundation::error::{SlideloomError, SlideloomResult};
use crate::raster::transcode::{ByteTranscoder, PngTranscoder};

/// Default bound on one transcode round-trip.
pub const DEFAULT_TRANSCODE_TIMEOUT: Duration = Duration::from_secs(30);

struct TranscodeRequest {
    bytes: Vec<u8>,
    reply: Sender<SlideloomResult<Vec<u8>>>,
}

/// A [`ByteTranscoder`] that runs another transcoder on a dedicated worker
/// thread and bounds each round-trip with a timeout.
///
/// The thread is spawned at construction and exits when the transcoder is
/// dropped (its request channel disconnects). A worker that hangs past the
/// timeout surfaces as [`SlideloomError::Transcode`], the same fatal
/// condition as a failed response.
pub struct WorkerTranscoder {
    request_tx: Sender<TranscodeRequest>,
    timeout: Duration,
}

impl WorkerTranscoder {
    /// Spawn a worker thread hosting the stock [`PngTranscoder`].
    pub fn new() -> SlideloomResult<Self> {
        Self::hosting(PngTranscoder)
    }

    /// Spawn a worker thread hosting `inner`.
    pub fn hosting<T>(inner: T) -> SlideloomResult<Self>
    where
        T: ByteTranscoder + Send + 'static,
    {
        let (request_tx, request_rx) = mpsc::channel::<TranscodeRequest>();

        thread::Builder::new()
            .name("transcode".to_string())
            .spawn(move || {
                let mut inner = inner;
                tracing::debug!("transcode worker started");
                while let Ok(request) = request_rx.recv() {
                    let result = inner.transcode(&request.bytes);
                    if request.reply.send(result).is_err() {
                        // Caller gave up (timeout or drop); nothing to deliver to.
                        tracing::warn!("transcode caller went away before the reply");
                    }
                }
                tracing::debug!("transcode worker stopped");
            })
            .context("failed to spawn transcode worker thread")?;

        Ok(Self {
            request_tx,
            timeout: DEFAULT_TRANSCODE_TIMEOUT,
        })
    }

    /// Replace the round-trip timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl ByteTranscoder for WorkerTranscoder {
    fn transcode(&mut self, bytes: &[u8]) -> SlideloomResult<Vec<u8>> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.request_tx
            .send(TranscodeRequest {
                bytes: bytes.to_vec(),
                reply: reply_tx,
            })
            .map_err(|_| SlideloomError::transcode("transcode worker is no longer running"))?;

        match reply_rx.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(SlideloomError::transcode(format!(
                "transcode worker did not respond within {:?}",
                self.timeout
            ))),
            Err(RecvTimeoutError::Disconnected) => Err(SlideloomError::transcode(
                "transcode worker dropped the reply channel",
            )),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/worker.rs"]
mod tests;
