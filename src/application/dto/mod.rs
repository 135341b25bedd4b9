pub mod articles;

pub use articles::ArticleSummaryDto;
