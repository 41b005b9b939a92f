use serde::Deserialize;

use renderer::{DocumentOptions, Download};

/// Optional TOML document configuration. Every key falls back to the
/// neutral defaults of [`DocumentOptions`]; unknown keys are rejected
/// by serde so typos surface early.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Page title, used in <title> and the main heading.
    pub title: Option<String>,

    /// Document language attribute (e.g. "cs").
    pub lang: Option<String>,

    /// Logo image shown under the main heading.
    pub logo: Option<String>,

    /// Favicon reference, not validated for existence.
    pub favicon: Option<String>,

    /// External stylesheet reference, in addition to the inline styles.
    pub stylesheet: Option<String>,

    /// Download links shown at the top of the page.
    #[serde(default)]
    pub downloads: Vec<DownloadEntry>,

    /// Heading above the alphabetical index.
    pub contents_heading: Option<String>,

    /// Label of the per-song back-to-top link.
    pub back_to_top: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DownloadEntry {
    pub label: String,
    pub href: String,
}

impl Config {
    pub fn into_options(self) -> DocumentOptions {
        let mut options = DocumentOptions::default();
        if let Some(title) = self.title {
            options.title = title;
        }
        if let Some(lang) = self.lang {
            options.lang = lang;
        }
        options.logo = self.logo;
        options.favicon = self.favicon;
        options.stylesheet = self.stylesheet;
        options.downloads = self
            .downloads
            .into_iter()
            .map(|d| Download {
                label: d.label,
                href: d.href,
            })
            .collect();
        if let Some(heading) = self.contents_heading {
            options.contents_heading = heading;
        }
        if let Some(label) = self.back_to_top {
            options.back_to_top = label;
        }
        options
    }
}

/// Read and parse a config file into document options.
pub fn load(path: &str) -> Result<DocumentOptions, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read '{}': {}", path, e))?;
    let config: Config =
        toml::from_str(&text).map_err(|e| format!("invalid config '{}': {}", path, e))?;
    Ok(config.into_options())
}
