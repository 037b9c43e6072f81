//! Application-wide constants

pub const SITE_NAME: &str = "CoWork Kerala";
pub const DEFAULT_SITE_URL: &str = "https://coworkkerala.com";
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8080/";

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const SITEMAP_WORKSPACE_LIMIT: u32 = 100;
pub const DEFAULT_REVALIDATE_SECONDS: u64 = 60;
pub const DEFAULT_BACKEND_TIMEOUT_SECONDS: u64 = 10;

pub const MIN_PHONE_LENGTH: u64 = 10;

pub const CONTACT_PHONE: &str = "+91 7356735091";
pub const CONTACT_EMAIL: &str = "coworkkerala@gmail.com";
pub const CONTACT_ADDRESS: &str = "Kochi, Kerala, India";

pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.png";
