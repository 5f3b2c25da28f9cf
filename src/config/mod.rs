//! Configuration module

mod site;

pub use site::ContentConfig;
pub use site::ContentSource;
pub use site::SiteConfig;
