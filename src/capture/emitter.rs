//! The trace emitter boundary and an in-process file emitter.

use crate::utils::config::{EXIT_TOKEN, RECORD_SEPARATOR};
use crate::utils::error::CaptureError;
use log::{debug, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Interface to the tracing instrumentation.
///
/// `start_tracing` / `stop_tracing` form the out-of-band control channel: the
/// start signal carries the destination of the persisted record sink, the
/// stop signal closes it. `frame_entered` / `frame_exited` are the event
/// surface the instrumented code drives; events arriving while tracing is
/// inactive are dropped.
pub trait TraceEmitter {
    /// Begin appending records to the sink at `sink`
    fn start_tracing(&mut self, sink: &Path) -> Result<(), CaptureError>;

    /// Stop recording and release the sink
    fn stop_tracing(&mut self) -> Result<(), CaptureError>;

    /// Record a method activation
    fn frame_entered(&mut self, name: &str);

    /// Record a method deactivation
    fn frame_exited(&mut self);
}

/// In-process emitter writing wire records to a file sink.
///
/// Stands in for the VM instrumentation in the conformance fixtures.
/// Timestamps come from a monotonic counter, so the stream order is the
/// record order and fixture output is deterministic.
pub struct FileEmitter {
    sink: Option<ActiveSink>,
    clock: u64,
}

struct ActiveSink {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl FileEmitter {
    pub fn new() -> Self {
        Self {
            sink: None,
            clock: 0,
        }
    }

    /// True while a sink is open and records are being persisted
    pub fn is_active(&self) -> bool {
        self.sink.is_some()
    }

    fn write_record(&mut self, name: &str) {
        self.clock += 1;
        let timestamp = self.clock;

        let Some(active) = self.sink.as_mut() else {
            // Instrumentation is off; the event is not observed.
            return;
        };

        if let Err(e) = writeln!(active.writer, "{timestamp}{RECORD_SEPARATOR}{name}") {
            warn!(
                "Dropping trace record for {}: write to {} failed: {}",
                name,
                active.path.display(),
                e
            );
        }
    }
}

impl Default for FileEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl TraceEmitter for FileEmitter {
    fn start_tracing(&mut self, sink: &Path) -> Result<(), CaptureError> {
        if self.sink.is_some() {
            return Err(CaptureError::AlreadyActive);
        }

        debug!("Opening trace sink: {}", sink.display());

        let file = File::create(sink).map_err(|source| CaptureError::SinkUnavailable {
            path: sink.display().to_string(),
            source,
        })?;

        self.sink = Some(ActiveSink {
            writer: BufWriter::new(file),
            path: sink.to_path_buf(),
        });

        Ok(())
    }

    fn stop_tracing(&mut self) -> Result<(), CaptureError> {
        let mut active = self.sink.take().ok_or(CaptureError::NotActive)?;

        active.writer.flush()?;

        debug!("Closed trace sink: {}", active.path.display());

        Ok(())
    }

    fn frame_entered(&mut self, name: &str) {
        self.write_record(name);
    }

    fn frame_exited(&mut self) {
        self.write_record(EXIT_TOKEN);
    }
}

/// Run `body` inside an ENTER/EXIT pair for `name`.
///
/// The EXIT is recorded after the body returns, whatever it returns; a body
/// that propagates an error value still closes its frame, so an unwinding
/// call is indistinguishable from a normal return in the record stream.
pub fn traced<T>(
    emitter: &mut dyn TraceEmitter,
    name: &str,
    body: impl FnOnce(&mut dyn TraceEmitter) -> T,
) -> T {
    emitter.frame_entered(name);
    let out = body(emitter);
    emitter.frame_exited();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_emitter_writes_wire_records() {
        let dir = tempdir().unwrap();
        let sink = dir.path().join("trace.out");

        let mut emitter = FileEmitter::new();
        emitter.start_tracing(&sink).unwrap();
        emitter.frame_entered("a");
        emitter.frame_exited();
        emitter.stop_tracing().unwrap();

        let contents = std::fs::read_to_string(&sink).unwrap();
        assert_eq!(contents, "1:a\n2:POP\n");
    }

    #[test]
    fn test_events_while_inactive_are_dropped() {
        let dir = tempdir().unwrap();
        let sink = dir.path().join("trace.out");

        let mut emitter = FileEmitter::new();
        emitter.frame_entered("before");

        emitter.start_tracing(&sink).unwrap();
        emitter.frame_entered("during");
        emitter.stop_tracing().unwrap();

        emitter.frame_entered("after");

        let contents = std::fs::read_to_string(&sink).unwrap();
        // The counter still advanced for the dropped event.
        assert_eq!(contents, "2:during\n");
    }

    #[test]
    fn test_start_twice_fails() {
        let dir = tempdir().unwrap();

        let mut emitter = FileEmitter::new();
        emitter.start_tracing(&dir.path().join("a.out")).unwrap();
        let err = emitter.start_tracing(&dir.path().join("b.out")).unwrap_err();

        assert!(matches!(err, CaptureError::AlreadyActive));
    }

    #[test]
    fn test_stop_without_start_fails() {
        let mut emitter = FileEmitter::new();
        let err = emitter.stop_tracing().unwrap_err();
        assert!(matches!(err, CaptureError::NotActive));
    }

    #[test]
    fn test_sink_unavailable() {
        let mut emitter = FileEmitter::new();
        let err = emitter
            .start_tracing(Path::new("/definitely/not/here/trace.out"))
            .unwrap_err();
        assert!(matches!(err, CaptureError::SinkUnavailable { .. }));
    }

    #[test]
    fn test_traced_records_exit_on_error_path() {
        let dir = tempdir().unwrap();
        let sink = dir.path().join("trace.out");

        let mut emitter = FileEmitter::new();
        emitter.start_tracing(&sink).unwrap();

        let result: Result<(), &str> = traced(&mut emitter, "fails", |_| Err("unwound"));
        assert!(result.is_err());

        emitter.stop_tracing().unwrap();

        let contents = std::fs::read_to_string(&sink).unwrap();
        assert_eq!(contents, "1:fails\n2:POP\n");
    }
}
