//! Fluent catalogues compiled into the binary

use crate::error::{I18nError, I18nResult};
use crate::Locale;
use fluent_bundle::FluentResource;
use tracing::{debug, error};

const ES_MAIN: &str = include_str!("../locales/es/main.ftl");
const EN_MAIN: &str = include_str!("../locales/en/main.ftl");

/// Raw Fluent source of a locale's catalogue
pub fn catalogue_source(locale: Locale) -> &'static str {
    match locale {
        Locale::SpanishMexico => ES_MAIN,
        Locale::English => EN_MAIN,
    }
}

/// Parse a locale's catalogue into a Fluent resource
pub fn load_resource(locale: Locale) -> I18nResult<FluentResource> {
    parse_resource(locale, catalogue_source(locale).to_string())
}

/// Parse Fluent source, reporting every syntax error at once
pub fn parse_resource(locale: Locale, source: String) -> I18nResult<FluentResource> {
    let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
        let error_messages: Vec<String> = errors.into_iter().map(|e| format!("{:?}", e)).collect();

        error!("Failed to parse Fluent resource: {:?}", error_messages);

        I18nError::FluentParseError {
            locale: locale.code().to_string(),
            errors: error_messages,
        }
    })?;

    debug!("Parsed catalogue for locale {}", locale);
    Ok(resource)
}

/// Message identifiers declared by a Fluent source
pub fn message_ids(source: &str) -> Vec<String> {
    source
        .lines()
        .filter(|line| !line.starts_with('#') && !line.starts_with(' '))
        .filter_map(|line| line.split_once(" = "))
        .map(|(id, _)| id.trim().to_string())
        .collect()
}
