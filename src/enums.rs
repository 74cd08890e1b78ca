use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RouteKind {
    Route,
    Api,
    Layout,
    Redirect,
    Rewrite,
    Unknown(String),
}

impl RouteKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Route => "route",
            Self::Api => "api",
            Self::Layout => "layout",
            Self::Redirect => "redirect",
            Self::Rewrite => "rewrite",
            Self::Unknown(raw) => raw,
        }
    }

    pub fn is_matchable(&self) -> bool {
        matches!(self, Self::Route | Self::Api)
    }
}

impl From<&str> for RouteKind {
    fn from(raw: &str) -> Self {
        match raw {
            "route" => Self::Route,
            "api" => Self::Api,
            "layout" => Self::Layout,
            "redirect" => Self::Redirect,
            "rewrite" => Self::Rewrite,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl From<String> for RouteKind {
    fn from(raw: String) -> Self {
        match Self::from(raw.as_str()) {
            Self::Unknown(_) => Self::Unknown(raw),
            known => known,
        }
    }
}

impl From<RouteKind> for String {
    fn from(kind: RouteKind) -> Self {
        match kind {
            RouteKind::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RouteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_kinds() {
        assert_eq!(RouteKind::from("route"), RouteKind::Route);
        assert_eq!(RouteKind::from("api"), RouteKind::Api);
        assert_eq!(RouteKind::from("layout"), RouteKind::Layout);
    }

    #[test]
    fn keeps_unknown_kind_text() {
        let kind = RouteKind::from("middleware".to_string());
        assert_eq!(kind, RouteKind::Unknown("middleware".to_string()));
        assert_eq!(kind.to_string(), "middleware");
        assert!(!kind.is_matchable());
    }
}
