use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Simple enum for the two kinds of catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Standalone title with its own watch/download links
    Movie,
    /// Multi-season title with nested episodes
    Series,
}

impl Display for ContentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Movie => write!(f, "movie"),
            ContentType::Series => write!(f, "series"),
        }
    }
}

/// Parse failure for a content type string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseContentTypeError(pub String);

impl Display for ParseContentTypeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized content type: {}", self.0)
    }
}

impl std::error::Error for ParseContentTypeError {}

impl FromStr for ContentType {
    type Err = ParseContentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(ContentType::Movie),
            "series" => Ok(ContentType::Series),
            other => Err(ParseContentTypeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_types() {
        assert_eq!("movie".parse::<ContentType>().unwrap(), ContentType::Movie);
        assert_eq!(
            "series".parse::<ContentType>().unwrap(),
            ContentType::Series
        );
    }

    #[test]
    fn rejects_unknown_and_cased_types() {
        assert!("Movie".parse::<ContentType>().is_err());
        assert!("documentary".parse::<ContentType>().is_err());
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(ContentType::Movie.to_string(), "movie");
        assert_eq!(ContentType::Series.to_string(), "series");
    }
}
