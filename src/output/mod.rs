use crate::error::OutputError;
use crate::types::query::{Query, QueryOutcome};
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One integer per line, `-1` for a miss
    #[default]
    Plain,
    /// `query,result,matched` rows with a header
    Csv,
    /// One JSON object per line
    Json,
}

/// One answered query, as serialized by the csv and json formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryRecord {
    pub query: i32,
    pub result: i32,
    pub matched: bool,
}

impl QueryRecord {
    pub fn new(query: Query, outcome: QueryOutcome) -> Self {
        Self {
            query: query.value(),
            result: outcome.reported(),
            matched: outcome.is_match(),
        }
    }
}

const CSV_HEADER: [&str; 3] = ["query", "result", "matched"];

/// Writes one record per query, in the order `write` is called
pub enum ResultWriter<W: Write> {
    Plain(W),
    Csv(csv::Writer<W>),
    Json(W),
}

impl<W: Write> ResultWriter<W> {
    pub fn new(format: OutputFormat, writer: W) -> Result<Self, OutputError> {
        Ok(match format {
            OutputFormat::Plain => ResultWriter::Plain(writer),
            OutputFormat::Json => ResultWriter::Json(writer),
            OutputFormat::Csv => {
                let mut csv = csv::WriterBuilder::new()
                    .has_headers(false)
                    .from_writer(writer);
                // Written up front so an empty query batch still gets a header
                csv.write_record(CSV_HEADER)?;
                ResultWriter::Csv(csv)
            }
        })
    }

    pub fn write(&mut self, query: Query, outcome: QueryOutcome) -> Result<(), OutputError> {
        match self {
            ResultWriter::Plain(w) => writeln!(w, "{}", outcome)?,
            ResultWriter::Csv(csv) => csv.serialize(QueryRecord::new(query, outcome))?,
            ResultWriter::Json(w) => {
                serde_json::to_writer(&mut *w, &QueryRecord::new(query, outcome))?;
                w.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    /// Flush everything and hand back the underlying writer
    pub fn finish(self) -> Result<W, OutputError> {
        let mut writer = match self {
            ResultWriter::Plain(w) | ResultWriter::Json(w) => w,
            ResultWriter::Csv(csv) => csv
                .into_inner()
                .map_err(|err| OutputError::Io(err.into_error()))?,
        };
        writer.flush()?;
        Ok(writer)
    }
}
