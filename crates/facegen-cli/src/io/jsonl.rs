// crates/facegen-cli/src/io/jsonl.rs

use std::io::{BufWriter, Write};

use anyhow::Context;
use facegen_core::error::Result;
use facegen_core::{Appearance, Sink};

/// One appearance per line.
pub struct JsonlSink<W: Write> {
    out: BufWriter<W>,
}

impl<W: Write> JsonlSink<W> {
    pub fn new(w: W) -> Self {
        Self { out: BufWriter::new(w) }
    }

    pub fn finish(mut self) -> anyhow::Result<()> {
        self.out.flush().context("flush appearances")
    }
}

impl<W: Write> Sink for JsonlSink<W> {
    fn accept(&mut self, appearance: Appearance) -> Result<()> {
        serde_json::to_writer(&mut self.out, &appearance)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

/// File sink when a path is given, stdout otherwise.
pub fn open_sink(path: Option<&str>) -> anyhow::Result<JsonlSink<Box<dyn Write>>> {
    let w: Box<dyn Write> = match path {
        Some(p) => Box::new(std::fs::File::create(p).with_context(|| format!("create output {p}"))?),
        None => Box::new(std::io::stdout().lock()),
    };
    Ok(JsonlSink::new(w))
}
