use crate::domain::model::Codepoint;

pub const SEPARATOR: &str = " | ";

/// Joins the char literals of `codepoints` with [`SEPARATOR`].
/// An empty sequence renders as the empty string.
pub fn render<'a, I>(codepoints: I) -> String
where
    I: IntoIterator<Item = &'a Codepoint>,
{
    codepoints
        .into_iter()
        .map(Codepoint::literal)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
