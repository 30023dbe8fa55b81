use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::models::Record;

/// Destination for exported records.
pub trait RecordSink: Send {
    fn write_record(&mut self, record: &Record) -> Result<()>;

    fn flush(&mut self) -> Result<()>;

    /// Human-readable name of the destination, used in the run summary.
    fn describe(&self) -> String;

    /// Writes `records` in order and flushes. Returns the number written.
    fn write_records(&mut self, records: &[Record]) -> Result<usize> {
        for record in records {
            self.write_record(record)?;
        }
        self.flush()?;
        Ok(records.len())
    }
}

/// Writes one `<number>,<title>` line per record.
pub struct LineSink<W: Write> {
    writer: W,
    target: String,
}

impl<W: Write> LineSink<W> {
    pub fn new(writer: W, target: impl Into<String>) -> Self {
        Self {
            writer,
            target: target.into(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl LineSink<BufWriter<File>> {
    /// Deletes any existing file at `path` and starts a new, empty one.
    pub fn create_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match fs::remove_file(path) {
            Ok(()) => tracing::debug!("Removed previous output {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file), path.display().to_string()))
    }
}

impl LineSink<BufWriter<io::Stdout>> {
    pub fn stdout() -> Self {
        Self::new(BufWriter::new(io::stdout()), "stdout")
    }
}

impl<W: Write + Send> RecordSink for LineSink<W> {
    fn write_record(&mut self, record: &Record) -> Result<()> {
        writeln!(self.writer, "{}", record)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.target.clone()
    }
}

/// Opens the sink named on the command line: `-` or `stdout` streams to
/// standard output, anything else is a file path.
pub fn create_sink(target: &str) -> Result<Box<dyn RecordSink>> {
    match target {
        "-" | "stdout" => Ok(Box::new(LineSink::stdout())),
        path => Ok(Box::new(LineSink::create_file(path)?)),
    }
}
