pub mod content;
pub mod fallback;
