use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"number=(\d+)").unwrap());
static AUTHOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"by=\{(.*?)\}").unwrap());

/// Song attributes scanned from the optional `[...]` argument of
/// `\beginsong`. The argument is freeform text; only `number=<digits>`
/// and `by={<text>}` are recognized, anything else is ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    /// Explicit display number, if the source carries one.
    pub number: Option<usize>,
    /// Author credit shown under the song heading.
    pub author: Option<String>,
}

impl Metadata {
    /// Scan a raw metadata string. The first occurrence of each
    /// recognized key wins.
    pub fn scan(raw: &str) -> Self {
        let number = NUMBER
            .captures(raw)
            .and_then(|c| c[1].parse::<usize>().ok());
        let author = AUTHOR.captures(raw).map(|c| c[1].to_string());
        Metadata { number, author }
    }
}
