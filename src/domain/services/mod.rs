// Domain services
pub mod classification;

pub use classification::{
    badge_for, display_timestamp, is_exact_match, is_stale, normalize_timestamp, BadgeTone,
    SessionBadge,
};
