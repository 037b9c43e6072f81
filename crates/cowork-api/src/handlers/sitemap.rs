//! `GET /sitemap.xml`

use std::io::Cursor;

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use cowork_core::sitemap::SitemapEntry;

use crate::error::ApiError;
use crate::state::AppState;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

fn xml_error<E: std::fmt::Display>(e: E) -> ApiError {
    ApiError::InternalError(format!("Failed to write sitemap: {}", e))
}

fn write_element<W: std::io::Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<(), ApiError> {
    writer.write_event(Event::Start(BytesStart::new(name))).map_err(xml_error)?;
    writer.write_event(Event::Text(BytesText::new(text))).map_err(xml_error)?;
    writer.write_event(Event::End(BytesEnd::new(name))).map_err(xml_error)?;
    Ok(())
}

/// `<urlset>` document with loc, lastmod, changefreq and priority per entry.
pub fn render_sitemap(entries: &[SitemapEntry]) -> Result<String, ApiError> {
    let mut writer = Writer::new(Cursor::new(Vec::new()));

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_error)?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    writer.write_event(Event::Start(urlset)).map_err(xml_error)?;

    for entry in entries {
        writer.write_event(Event::Start(BytesStart::new("url"))).map_err(xml_error)?;
        write_element(&mut writer, "loc", &entry.url)?;
        write_element(
            &mut writer,
            "lastmod",
            &entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true),
        )?;
        write_element(&mut writer, "changefreq", entry.change_frequency.as_str())?;
        write_element(&mut writer, "priority", &format!("{:.1}", entry.priority))?;
        writer.write_event(Event::End(BytesEnd::new("url"))).map_err(xml_error)?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset"))).map_err(xml_error)?;

    String::from_utf8(writer.into_inner().into_inner()).map_err(xml_error)
}

pub async fn sitemap_xml(State(state): State<AppState>) -> Result<Response, ApiError> {
    let entries = state.listings.sitemap(&state.config.app.site_url, Utc::now()).await;
    tracing::debug!("Sitemap with {} entries", entries.len());

    let body = render_sitemap(&entries)?;
    Ok(([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], body).into_response())
}
