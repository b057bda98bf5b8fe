//! Route index served at the API root.

use serde::{Deserialize, Serialize};

use crate::API_PREFIX;

/// A route advertised on the index page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteEntry {
    /// Path or path template (e.g. `/api/v1.0/<start>`).
    pub path: String,

    /// Whether the path can be followed as-is. Templates are listed as text.
    pub linkable: bool,
}

impl RouteEntry {
    pub fn link(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            linkable: true,
        }
    }

    pub fn template(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            linkable: false,
        }
    }
}

/// All routes exposed by the data API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteIndex {
    pub routes: Vec<RouteEntry>,
}

impl RouteIndex {
    /// The v1.0 route set.
    pub fn v1() -> Self {
        Self {
            routes: vec![
                RouteEntry::link(format!("{}/precipitation", API_PREFIX)),
                RouteEntry::link(format!("{}/stations", API_PREFIX)),
                RouteEntry::link(format!("{}/tobs", API_PREFIX)),
                RouteEntry::template(format!("{}/<start>", API_PREFIX)),
                RouteEntry::template(format!("{}/<start>/<end>", API_PREFIX)),
            ],
        }
    }

    /// Render as the HTML fragment returned by `GET /`.
    pub fn to_html(&self) -> String {
        let mut html = String::from("Available Routes:<br/>");
        for route in &self.routes {
            let path = escape_html(&route.path);
            if route.linkable {
                html.push_str(&format!("<a href='{path}'>{path}</a><br/>"));
            } else {
                html.push_str(&format!("{path}<br/>"));
            }
        }
        html
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&#39;")
}
