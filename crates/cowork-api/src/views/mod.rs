//! Server-rendered pages. Templates are compiled into the binary and
//! registered once at startup.

pub mod models;

use axum::response::Html;
use handlebars::Handlebars;
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;

const PARTIALS: [(&str, &str); 5] = [
    ("head", include_str!("../../templates/partials/head.hbs")),
    ("foot", include_str!("../../templates/partials/foot.hbs")),
    ("workspace_card", include_str!("../../templates/partials/workspace_card.hbs")),
    ("notice", include_str!("../../templates/partials/notice.hbs")),
    ("field_error", include_str!("../../templates/partials/field_error.hbs")),
];

const PAGES: [(&str, &str); 5] = [
    ("landing", include_str!("../../templates/landing.hbs")),
    ("contact", include_str!("../../templates/contact.hbs")),
    ("virtual_office", include_str!("../../templates/virtual_office.hbs")),
    ("directory", include_str!("../../templates/directory.hbs")),
    ("workspace_detail", include_str!("../../templates/workspace_detail.hbs")),
];

pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> Result<Self, ApiError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(false);

        for (name, source) in PARTIALS {
            registry
                .register_partial(name, source)
                .map_err(|e| ApiError::TemplateError(format!("partial {}: {}", name, e)))?;
        }
        for (name, source) in PAGES {
            registry
                .register_template_string(name, source)
                .map_err(|e| ApiError::TemplateError(format!("template {}: {}", name, e)))?;
        }

        debug!("Registered {} page templates", PAGES.len());
        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, name: &str, context: &T) -> Result<Html<String>, ApiError> {
        Ok(Html(self.registry.render(name, context)?))
    }
}
