pub mod error;
pub mod text;

pub use error::KtpError;
pub use text::{clean_text, closest, levenshtein_distance};
