use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://util.unicode.org/UnicodeJsps/list-unicodeset.jsp";

pub const XID_START_URL: &str =
    "https://util.unicode.org/UnicodeJsps/list-unicodeset.jsp?a=%5B%3AXID_Start%3A%5D&g=&i=";

// Only requested when XID_Continue is selected explicitly.
pub const XID_CONTINUE_URL: &str =
    "https://util.unicode.org/UnicodeJsps/list-unicodeset.jsp?a=%5B%3AXID_Continue%3A%5D&g=&i=";

/// Identifier property whose code point list is fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum XidProperty {
    #[default]
    #[serde(rename = "XID_Start", alias = "xid-start")]
    Start,
    #[serde(rename = "XID_Continue", alias = "xid-continue")]
    Continue,
}

impl XidProperty {
    pub fn name(&self) -> &'static str {
        match self {
            XidProperty::Start => "XID_Start",
            XidProperty::Continue => "XID_Continue",
        }
    }

    /// UnicodeSet expression understood by the list service, e.g. `[:XID_Start:]`.
    pub fn set_expression(&self) -> String {
        format!("[:{}:]", self.name())
    }

    /// Builds `<endpoint>?a=<expression>&g=&i=`. Against [`DEFAULT_ENDPOINT`]
    /// this is exactly [`XID_START_URL`] or [`XID_CONTINUE_URL`].
    pub fn list_url(&self, endpoint: &str) -> Result<Url> {
        let expression = self.set_expression();
        let url = Url::parse_with_params(
            endpoint,
            &[("a", expression.as_str()), ("g", ""), ("i", "")],
        )?;
        Ok(url)
    }
}

impl fmt::Display for XidProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for XidProperty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "xid-start" | "start" => Ok(XidProperty::Start),
            "xid-continue" | "continue" => Ok(XidProperty::Continue),
            _ => Err(format!(
                "unknown property '{}', expected xid-start or xid-continue",
                s
            )),
        }
    }
}

/// Hex digits captured after a `U+` marker, as they appeared in the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Codepoint(String);

impl Codepoint {
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    pub fn hex(&self) -> &str {
        &self.0
    }

    /// Escaped char literal with uppercased digits: `'\u{005A}'`.
    pub fn literal(&self) -> String {
        format!("'\\u{{{}}}'", self.0.to_uppercase())
    }
}

#[derive(Debug, Clone)]
pub struct CodepointList {
    pub codepoints: Vec<Codepoint>,
    pub line: String,
}
