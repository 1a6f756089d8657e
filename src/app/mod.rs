pub mod components;
pub mod pages;

// Re-export the search page App
pub use pages::search::App;
