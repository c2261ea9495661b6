//! Navigation boundary: `/`, `/property/:id`, `/saved`.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("No page at {0:?}")]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Search,
    Details(String),
    Saved,
}

impl Route {
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        let segments: Vec<&str> = trimmed.split('/').collect();

        match segments.as_slice() {
            [""] => Ok(Route::Search),
            ["", "saved"] => Ok(Route::Saved),
            ["", "property", id] if !id.is_empty() => Ok(Route::Details(id.to_string())),
            _ => Err(RouteError::Unknown(path.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Search => "/".to_string(),
            Route::Details(id) => format!("/property/{}", id),
            Route::Saved => "/saved".to_string(),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Ok(Route::Search));
        assert_eq!(Route::parse(""), Ok(Route::Search));
        assert_eq!(Route::parse("/saved"), Ok(Route::Saved));
        assert_eq!(Route::parse("/saved/"), Ok(Route::Saved));
        assert_eq!(
            Route::parse("/property/prop3"),
            Ok(Route::Details("prop3".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for path in ["/property", "/property/", "/property/a/b", "/favourites", "saved"] {
            assert!(Route::parse(path).is_err(), "{} should not route", path);
        }
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            Route::Search,
            Route::Saved,
            Route::Details("prop1".to_string()),
        ] {
            assert_eq!(route.path().parse::<Route>(), Ok(route));
        }
    }
}
