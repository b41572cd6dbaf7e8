pub mod post;

pub use post::{BatchReport, ItemOutcome, ScrapedItem, SearchResult, NO_TITLE};
