//! Route model for the navigation stack.
//!
//! # Responsibility
//! - Declare the fixed route table as pattern strings (`meditation/{topic}`).
//! - Parse navigated paths into a template plus extracted parameters.
//!
//! # Invariants
//! - Parsing never fails: unknown paths keep `template == None`.
//! - Empty parameters are treated as absent, so defaults apply.
//! - A path with a missing parameter (`meditation`) still resolves its
//!   template, leaving the default to parameter extraction.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Parameter key carried by `meditation/{topic}`.
pub const TOPIC_PARAM: &str = "topic";
/// Parameter key carried by `note/{date}`.
pub const DATE_PARAM: &str = "date";
/// Substituted when a meditation route has no topic.
pub const UNKNOWN_TOPIC: &str = "Unknown";

static PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\{([A-Za-z_][A-Za-z0-9_]*)\}$").expect("valid placeholder regex"));

static ROUTE_MATCHERS: Lazy<Vec<(RouteTemplate, Regex)>> = Lazy::new(|| {
    RouteTemplate::ALL
        .iter()
        .map(|template| (*template, compile_pattern(template.pattern())))
        .collect()
});

/// Known navigable destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteTemplate {
    /// Entry point and stack root.
    Home,
    Settings,
    Topics,
    /// Countdown screen for one topic.
    Meditation,
    Calendar,
    /// Per-date note and motivational phrase.
    Note,
}

impl RouteTemplate {
    pub const ALL: [RouteTemplate; 6] = [
        Self::Home,
        Self::Settings,
        Self::Topics,
        Self::Meditation,
        Self::Calendar,
        Self::Note,
    ];

    /// Declared path pattern, placeholders in braces.
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Settings => "settings",
            Self::Topics => "topics",
            Self::Meditation => "meditation/{topic}",
            Self::Calendar => "calendar",
            Self::Note => "note/{date}",
        }
    }

    /// Leading path segment used to build concrete paths.
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Settings => "settings",
            Self::Topics => "topics",
            Self::Meditation => "meditation",
            Self::Calendar => "calendar",
            Self::Note => "note",
        }
    }

    /// Parameter key and its default, for parameterized templates.
    pub fn param(self) -> Option<(&'static str, &'static str)> {
        match self {
            Self::Meditation => Some((TOPIC_PARAM, UNKNOWN_TOPIC)),
            Self::Note => Some((DATE_PARAM, "")),
            _ => None,
        }
    }
}

/// One entry of the navigation stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    path: String,
    template: Option<RouteTemplate>,
    params: BTreeMap<String, String>,
}

impl Route {
    /// Parses a concrete path such as `meditation/Focus`.
    pub fn parse(path: impl Into<String>) -> Self {
        let path = path.into();
        let trimmed = path.trim().trim_matches('/');

        for (template, matcher) in ROUTE_MATCHERS.iter() {
            let Some(captures) = matcher.captures(trimmed) else {
                continue;
            };
            let mut params = BTreeMap::new();
            if let Some((key, _)) = template.param() {
                if let Some(value) = captures.name(key).map(|m| m.as_str()) {
                    if !value.is_empty() {
                        params.insert(key.to_string(), value.to_string());
                    }
                }
            }
            return Self {
                path: trimmed.to_string(),
                template: Some(*template),
                params,
            };
        }

        Self {
            path: trimmed.to_string(),
            template: None,
            params: BTreeMap::new(),
        }
    }

    /// Builds a path from a route name and an optional parameter.
    ///
    /// `from_parts("meditation", Some("Focus"))` equals
    /// `parse("meditation/Focus")`.
    pub fn from_parts(name: &str, param: Option<&str>) -> Self {
        match param {
            Some(value) => Self::parse(format!("{}/{}", name.trim_end_matches('/'), value)),
            None => Self::parse(name),
        }
    }

    /// Builds the concrete path for a known template.
    pub fn to_template(template: RouteTemplate, param: Option<&str>) -> Self {
        Self::from_parts(template.name(), param)
    }

    pub fn home() -> Self {
        Self::to_template(RouteTemplate::Home, None)
    }

    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    pub fn template(&self) -> Option<RouteTemplate> {
        self.template
    }

    /// Raw parameter lookup without defaults.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Topic of a meditation route, `"Unknown"` when missing.
    pub fn topic(&self) -> String {
        self.param(TOPIC_PARAM).unwrap_or(UNKNOWN_TOPIC).to_string()
    }

    /// Date key of a note route, empty when missing.
    pub fn date(&self) -> String {
        self.param(DATE_PARAM).unwrap_or_default().to_string()
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path.as_str())
    }
}

/// Compiles `meditation/{topic}` into `^meditation(?:/(?P<topic>[^/]*))?$`.
///
/// Placeholder segments are optional so that a bare route name still
/// resolves its template.
fn compile_pattern(pattern: &str) -> Regex {
    let mut source = String::from("^");
    for (index, segment) in pattern.split('/').enumerate() {
        let separator = if index == 0 { "" } else { "/" };
        match PLACEHOLDER_RE.captures(segment) {
            Some(captures) => {
                source.push_str(&format!("(?:{separator}(?P<{}>[^/]*))?", &captures[1]));
            }
            None => {
                source.push_str(&regex::escape(separator));
                source.push_str(&regex::escape(segment));
            }
        }
    }
    source.push('$');
    Regex::new(source.as_str()).expect("route table patterns compile")
}

#[cfg(test)]
mod tests {
    use super::{compile_pattern, Route, RouteTemplate, UNKNOWN_TOPIC};

    #[test]
    fn compiles_placeholder_as_optional_named_group() {
        let matcher = compile_pattern("note/{date}");
        assert_eq!(matcher.as_str(), "^note(?:/(?P<date>[^/]*))?$");
        assert!(matcher.is_match("note/2025-07-03"));
        assert!(matcher.is_match("note"));
        assert!(!matcher.is_match("notes/2025-07-03"));
    }

    #[test]
    fn parses_every_declared_template() {
        for template in RouteTemplate::ALL {
            let route = Route::to_template(template, Some("x"));
            let expected = if template.param().is_some() {
                Some(template)
            } else {
                None
            };
            assert_eq!(route.template(), expected, "{}", route.path());
            assert_eq!(Route::parse(template.name()).template(), Some(template));
        }
    }

    #[test]
    fn extracts_topic_and_date_parameters() {
        let meditation = Route::parse("meditation/Focus");
        assert_eq!(meditation.template(), Some(RouteTemplate::Meditation));
        assert_eq!(meditation.topic(), "Focus");

        let note = Route::from_parts("note", Some("2025-07-03"));
        assert_eq!(note.template(), Some(RouteTemplate::Note));
        assert_eq!(note.date(), "2025-07-03");
        assert_eq!(note.path(), "note/2025-07-03");
    }

    #[test]
    fn missing_or_empty_parameters_fall_back_to_defaults() {
        assert_eq!(Route::parse("meditation").topic(), UNKNOWN_TOPIC);
        assert_eq!(Route::parse("meditation/").topic(), UNKNOWN_TOPIC);
        assert_eq!(Route::parse("note").date(), "");
        assert_eq!(Route::parse("note/").param("date"), None);
    }

    #[test]
    fn unknown_paths_are_kept_verbatim() {
        let route = Route::parse("profile/42");
        assert_eq!(route.template(), None);
        assert_eq!(route.path(), "profile/42");
        assert_eq!(route.to_string(), "profile/42");
    }
}
