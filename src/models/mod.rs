pub mod data;
pub mod item;
pub mod rules;
pub mod schema;

pub use data::{KtpData, SENTINEL};
pub use item::{load_items, TextItem, Vertex};
pub use rules::ExtractionRules;
pub use schema::{Extractor, SchemaField};
