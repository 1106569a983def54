//! Trace capture control and the emitter boundary.
//!
//! The VM instrumentation that produces trace records is an external
//! collaborator; this module models its control surface ("start tracing" /
//! "stop tracing, the sink lives here") and its event surface (frame entered /
//! frame exited) behind one trait, plus a scoped session handle that
//! guarantees the stop signal is sent even when the traced code unwinds.

pub mod emitter;
pub mod session;

// Re-export main types
pub use emitter::{traced, FileEmitter, TraceEmitter};
pub use session::CaptureSession;
