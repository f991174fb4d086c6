/// Search path adapters for locating executables
mod search_path_locator;

pub use search_path_locator::SearchPathLocator;
