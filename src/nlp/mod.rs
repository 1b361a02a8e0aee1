//! Text processing shared by the search pipelines: normalization, function-word
//! filtering, and stemming.

pub(crate) mod normalize;
pub(crate) mod parts_of_speech;
pub(crate) mod stemmer;

pub use normalize::{collapse_whitespace, collation_key, normalize};
pub use parts_of_speech::{filter_parts_of_speech, is_stopword};
pub use stemmer::stem;
