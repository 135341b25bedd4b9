pub mod entity;
pub mod repr;
pub mod text;
pub mod value_objects;

pub use entity::Article;
pub use text::WordFrequencies;
pub use value_objects::{ArticleId, ArticleIdSequence};
