pub mod extractors;
pub mod fallback;
pub mod lines;
pub mod resolver;
pub mod skew;
pub mod splitter;

pub use extractors::{FieldExtractor, GenderBloodType, Region};
pub use fallback::recover;
pub use lines::{GroupedLines, LineGrouper, TextLine};
pub use resolver::{FieldResolver, Resolution, SchemaPool};
pub use skew::estimate_angle;
pub use splitter::split_index;
