pub mod search;

pub use search::{App, SearchPage};
