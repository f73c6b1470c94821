use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_STOP_WORDS: &[&str] = &[
    "as", "i", "am", "his", "that", "he", "was", "for", "on", "are", "with", "they", "be", "at",
    "one", "have", "this", "from", "by", "hot", "word", "but", "what", "some", "is", "it", "you",
    "or", "had", "the", "of", "to", "and", "a", "in", "we",
];

const DEFAULT_PUNCTUATION: &[char] = &['.', '?', '!', ',', ';', ':'];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Words ignored by frequency, prefix and longest/shortest word analysis
    pub stop_words: Vec<String>,
    pub punctuation: Vec<char>,
    pub autocomplete_limit: usize,
    /// Where the letter-frequency chart is written
    pub chart_path: PathBuf,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect(),
            punctuation: DEFAULT_PUNCTUATION.to_vec(),
            autocomplete_limit: 3,
            chart_path: PathBuf::from("plot.png"),
            chart_width: 1000,
            chart_height: 500,
        }
    }
}

/// Settings present in one config file; absent keys leave the layer below untouched.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    stop_words: Option<Vec<String>>,
    punctuation: Option<Vec<char>>,
    autocomplete_limit: Option<usize>,
    chart_path: Option<PathBuf>,
    chart_width: Option<u32>,
    chart_height: Option<u32>,
}

impl ConfigFile {
    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

impl Config {
    /// Load configuration with priority: local config > global config > defaults
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config = config.merge(ConfigFile::read(&global_path)?);
            }
        }

        // Local config overrides global
        let local_path = PathBuf::from(".doctools.toml");
        if local_path.exists() {
            config = config.merge(ConfigFile::read(&local_path)?);
        }

        Ok(config)
    }

    /// Defaults overlaid with the settings of a single TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::default().merge(ConfigFile::read(path)?))
    }

    /// Overlay `self` with every setting `path` spells out
    pub fn merge_file(self, path: &Path) -> Result<Self> {
        Ok(self.merge(ConfigFile::read(path)?))
    }

    fn merge(mut self, file: ConfigFile) -> Self {
        if let Some(stop_words) = file.stop_words {
            self.stop_words = stop_words;
        }
        if let Some(punctuation) = file.punctuation {
            self.punctuation = punctuation;
        }
        if let Some(limit) = file.autocomplete_limit {
            self.autocomplete_limit = limit;
        }
        if let Some(chart_path) = file.chart_path {
            self.chart_path = chart_path;
        }
        if let Some(width) = file.chart_width {
            self.chart_width = width;
        }
        if let Some(height) = file.chart_height {
            self.chart_height = height;
        }
        self
    }

    /// Stop words plus punctuation characters, as one lookup set.
    pub fn stop_set(&self) -> HashSet<String> {
        self.stop_words
            .iter()
            .map(|w| w.to_lowercase())
            .chain(self.punctuation.iter().map(|c| c.to_string()))
            .collect()
    }

    pub fn is_punctuation(&self, ch: char) -> bool {
        self.punctuation.contains(&ch)
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "doctools").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
