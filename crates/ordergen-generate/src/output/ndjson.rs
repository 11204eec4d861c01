use std::io::Write;

use serde::Serialize;

use crate::errors::GenerationError;

/// Writes one compact JSON document per line and counts the bytes it emits.
pub struct NdjsonWriter<W: Write> {
    inner: CountingWriter<W>,
    records: u64,
}

impl<W: Write> NdjsonWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: CountingWriter::new(inner),
            records: 0,
        }
    }

    pub fn write_record<T: Serialize>(&mut self, record: &T) -> Result<(), GenerationError> {
        serde_json::to_writer(&mut self.inner, record)?;
        self.inner.write_all(b"\n")?;
        self.records += 1;
        Ok(())
    }

    pub fn records_written(&self) -> u64 {
        self.records
    }

    pub fn bytes_written(&self) -> u64 {
        self.inner.bytes_written()
    }

    pub fn flush(&mut self) -> Result<(), GenerationError> {
        self.inner.flush()?;
        Ok(())
    }
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn writes_one_line_per_record() {
        let mut buffer = Vec::new();
        let mut writer = NdjsonWriter::new(&mut buffer);
        writer
            .write_record(&json!({"a": 1, "b": [1, 2]}))
            .expect("write first");
        writer.write_record(&json!({"c": "x y"})).expect("write second");
        writer.flush().expect("flush");

        assert_eq!(writer.records_written(), 2);
        let bytes = writer.bytes_written();
        drop(writer);

        let text = String::from_utf8(buffer).expect("utf8 output");
        assert_eq!(text, "{\"a\":1,\"b\":[1,2]}\n{\"c\":\"x y\"}\n");
        assert_eq!(bytes, text.len() as u64);
    }
}
