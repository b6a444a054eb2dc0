// Adapters layer: concrete sinks for the rendered line.

pub mod sink;

pub use sink::{FileSink, StdoutSink};
