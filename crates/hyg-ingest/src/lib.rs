//! Signal ingestion: JSON and CSV file sources plus built-in sample data.

pub mod csv_source;
pub mod source;

pub use csv_source::CsvFileSource;
pub use source::{JsonFileSource, SampleSource, SignalSource, source_for_path};
