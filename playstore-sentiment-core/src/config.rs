use {
    std::{fs::read_to_string, path::PathBuf},
    tracing::warn,
    serde::Deserialize,
};

pub const DEFAULT_REVIEW_COUNT: usize = 300;
pub const DEFAULT_EXPORT_FILE_NAME: &str = "hasil_sentimen.csv";

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    pub play_store: Option<PlayStoreConfig>,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct PlayStoreConfig {
    base_url: Option<String>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct AnalysisConfig {
    pub review_count: usize,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ReportConfig {
    pub top_terms: usize,
    table_rows: Option<usize>,
    pub description_preview_chars: usize,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ExportConfig {
    output_dir: Option<PathBuf>,
    file_name: Option<String>,
}

impl Default for PlayStoreConfig {
    fn default() -> Self {
        Self {
            base_url: None,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            review_count: DEFAULT_REVIEW_COUNT,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_terms: 20,
            table_rows: None,
            description_preview_chars: 500,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            file_name: None,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        read_to_string("./config.toml")
            .or_else(|_| read_to_string("/config/config.toml"))
            .map_err(|err| err.to_string())
            .and_then(|v| Self::from_toml(&v))
            .unwrap_or_else(|err| {
                warn!("failed to read config: {}", err);
                Config::default()
            })
    }

    pub fn from_toml(source: &str) -> Result<Self, String> {
        toml::from_str(source).map_err(|err| err.to_string())
    }

    pub fn play_store(&self) -> PlayStoreConfig {
        self.play_store.as_ref().cloned().unwrap_or_default()
    }
}

impl PlayStoreConfig {
    pub fn base_url(&self) -> String {
        self.base_url.as_ref().cloned().unwrap_or("https://play.google.com".to_owned())
    }
}

impl ReportConfig {
    pub fn table_rows(&self) -> Option<usize> {
        self.table_rows
    }
}

impl ExportConfig {
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.as_ref().cloned().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn file_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or(DEFAULT_EXPORT_FILE_NAME)
    }

    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = Some(output_dir);
        self
    }
}
