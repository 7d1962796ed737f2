use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
pub const DEFAULT_TITLE: &str = "Pequenos Instantes";

// gallery configuration
//
// this is handed to the gallery coordinator when it is constructed; nothing in the core reads
// a process-wide base url
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GalleryConfig {
    // where the photo api and the uploaded files live
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    // mime types the upload form accepts
    #[serde(default = "default_accepted_types")]
    pub accepted_types: Vec<String>,

    // page heading
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_api_base_url() -> String {
    String::from(DEFAULT_API_BASE_URL)
}

fn default_accepted_types() -> Vec<String> {
    vec![
        String::from("image/png"),
        String::from("image/jpeg"),
        String::from("image/gif"),
    ]
}

fn default_title() -> String {
    String::from(DEFAULT_TITLE)
}

impl Default for GalleryConfig {
    fn default() -> Self {
        GalleryConfig {
            api_base_url: default_api_base_url(),
            accepted_types: default_accepted_types(),
            title: default_title(),
        }
    }
}

impl GalleryConfig {
    pub fn accepts(&self, mime_type: &str) -> bool {
        self.accepted_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(mime_type))
    }

    // the value for an <input type=file accept=...> attribute
    pub fn accept_attr(&self) -> String {
        self.accepted_types.join(", ")
    }

    pub fn with_api_base_url(mut self, api_base_url: impl Into<String>) -> Self {
        self.api_base_url = api_base_url.into();
        self
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: GalleryConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> anyhow::Result<GalleryConfig> {
    debug!("parsing gallery config");

    let data: TomlConfigFile = toml::from_str(doc)
        .map_err(|err| anyhow::Error::msg(format!("failed to parse config file: {err}")))?;

    if data.config.api_base_url.trim().is_empty() {
        return Err(anyhow::Error::msg("api_base_url must not be empty"));
    }

    debug!(api_base_url = %data.config.api_base_url, "successfully parsed gallery config");
    Ok(data.config)
}
