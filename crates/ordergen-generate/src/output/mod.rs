pub mod ndjson;

pub use ndjson::NdjsonWriter;
