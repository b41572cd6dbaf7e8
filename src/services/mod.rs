pub mod item_scraper;
pub mod result_writer;
pub mod search_collector;

pub use item_scraper::ItemScraper;
pub use result_writer::ResultWriter;
pub use search_collector::SearchCollector;
