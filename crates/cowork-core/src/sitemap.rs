//! Sitemap entries: the static route set plus one entry per workspace and city.

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use crate::domain::{Location, Workspace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

impl SitemapEntry {
    fn new(url: String, now: DateTime<Utc>, change_frequency: ChangeFrequency, priority: f32) -> Self {
        Self { url, last_modified: now, change_frequency, priority }
    }
}

fn origin(site_url: &str) -> &str {
    site_url.trim_end_matches('/')
}

pub fn static_pages(site_url: &str, now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let base = origin(site_url);
    [
        ("", ChangeFrequency::Daily, 1.0),
        ("/about", ChangeFrequency::Monthly, 0.8),
        ("/contact", ChangeFrequency::Monthly, 0.7),
        ("/virtual-office", ChangeFrequency::Weekly, 0.9),
        ("/private-office", ChangeFrequency::Weekly, 0.9),
        ("/coworking-space", ChangeFrequency::Daily, 0.9),
    ]
    .into_iter()
    .map(|(path, freq, priority)| SitemapEntry::new(format!("{}{}", base, path), now, freq, priority))
    .collect()
}

pub fn workspace_pages(site_url: &str, workspaces: &[Workspace], now: DateTime<Utc>) -> Vec<SitemapEntry> {
    let base = origin(site_url);
    workspaces
        .iter()
        .map(|ws| {
            SitemapEntry::new(
                format!("{}/coworking-space/details/{}", base, ws.id),
                now,
                ChangeFrequency::Weekly,
                0.8,
            )
        })
        .collect()
}

pub fn city_pages(site_url: &str, locations: &[Location], now: DateTime<Utc>) -> Vec<SitemapEntry> {
    locations
        .iter()
        .map(|loc| {
            SitemapEntry::new(
                city_page_url(origin(site_url), &loc.slug()),
                now,
                ChangeFrequency::Weekly,
                0.8,
            )
        })
        .collect()
}

/// `{base}/coworking-space/{slug}` with the slug percent-encoded as one segment.
fn city_page_url(base: &str, slug: &str) -> String {
    match Url::parse(base) {
        Ok(mut url) => {
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.pop_if_empty().push("coworking-space").push(slug);
            }
            url.to_string()
        }
        Err(_) => format!("{}/coworking-space/{}", base, slug),
    }
}
