pub mod sink;

pub use sink::{create_sink, LineSink, RecordSink};
