pub mod common;
pub mod result_card;
pub mod search_form;

pub use common::{ErrorBanner, MessageBanner};
pub use result_card::ResultCard;
pub use search_form::VrmSearchForm;
