//! Pure helpers used by the page renderer
//!
//! Category labels, date formatting, excerpting, related-post selection
//! and URL generation. None of these touch the content store.

mod category;
mod date;
mod related;
mod text;
mod url;

pub use category::*;
pub use date::*;
pub use related::*;
pub use text::*;
pub use url::*;
