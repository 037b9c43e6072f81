pub mod health;
pub mod mock;
pub mod pages;
pub mod sitemap;
