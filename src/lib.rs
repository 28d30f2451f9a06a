pub mod ktp_reader;
pub mod models;
pub mod processing;
pub mod utils;

pub use ktp_reader::KtpReader;
pub use models::{ExtractionRules, KtpData, SchemaField, TextItem, Vertex};
pub use utils::KtpError;
