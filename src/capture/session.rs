//! Scoped trace capture.
//!
//! A capture session is a two-phase acquisition: `begin` sends the start
//! signal with the sink destination, `finish` sends the stop signal and
//! yields the sink path for reconstruction. If the session is dropped
//! without finishing, the stop signal is still sent, so the sink is released
//! no matter how the traced code exited.

use super::emitter::TraceEmitter;
use crate::utils::error::CaptureError;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// An active trace capture over one emitter and one sink
pub struct CaptureSession<E: TraceEmitter> {
    emitter: E,
    sink: PathBuf,
    finished: bool,
}

impl<E: TraceEmitter> CaptureSession<E> {
    /// Signal the emitter to start tracing into `sink`
    ///
    /// # Errors
    /// * `CaptureError::AlreadyActive` - the emitter is already tracing
    /// * `CaptureError::SinkUnavailable` - the sink cannot be opened
    pub fn begin(mut emitter: E, sink: impl Into<PathBuf>) -> Result<Self, CaptureError> {
        let sink = sink.into();

        emitter.start_tracing(&sink)?;

        debug!("Capture session started, sink: {}", sink.display());

        Ok(Self {
            emitter,
            sink,
            finished: false,
        })
    }

    /// The emitter, for the instrumented code under capture
    pub fn emitter(&mut self) -> &mut E {
        &mut self.emitter
    }

    /// Where the records are being persisted
    pub fn sink(&self) -> &Path {
        &self.sink
    }

    /// Signal the emitter to stop tracing and yield the sink path
    pub fn finish(mut self) -> Result<PathBuf, CaptureError> {
        self.finished = true;
        self.emitter.stop_tracing()?;

        debug!("Capture session finished, sink: {}", self.sink.display());

        Ok(self.sink.clone())
    }
}

impl<E: TraceEmitter> Drop for CaptureSession<E> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }

        if let Err(e) = self.emitter.stop_tracing() {
            warn!(
                "Failed to stop tracing for abandoned session on {}: {}",
                self.sink.display(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::emitter::{traced, FileEmitter};
    use tempfile::tempdir;

    #[test]
    fn test_begin_trace_finish() {
        let dir = tempdir().unwrap();
        let sink_path = dir.path().join("trace.out");

        let mut session = CaptureSession::begin(FileEmitter::new(), &sink_path).unwrap();
        traced(session.emitter(), "a", |em| {
            traced(em, "b", |_| {});
        });
        let finished = session.finish().unwrap();

        assert_eq!(finished, sink_path);
        let contents = std::fs::read_to_string(&sink_path).unwrap();
        assert_eq!(contents, "1:a\n2:b\n3:POP\n4:POP\n");
    }

    #[test]
    fn test_drop_sends_stop_signal() {
        let dir = tempdir().unwrap();
        let sink_path = dir.path().join("trace.out");

        {
            let mut session = CaptureSession::begin(FileEmitter::new(), &sink_path).unwrap();
            session.emitter().frame_entered("open");
            // Session dropped without finish(); stop must still happen.
        }

        let contents = std::fs::read_to_string(&sink_path).unwrap();
        assert_eq!(contents, "1:open\n");
    }

    #[test]
    fn test_begin_fails_on_unwritable_sink() {
        let err =
            CaptureSession::begin(FileEmitter::new(), "/definitely/not/here/trace.out")
                .unwrap_err();
        assert!(matches!(err, CaptureError::SinkUnavailable { .. }));
    }
}
