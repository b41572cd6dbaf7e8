pub mod chrome_page;
pub mod page_driver;

pub use chrome_page::ChromePage;
pub use page_driver::{bounded_navigation, PageDriver, Selector};
