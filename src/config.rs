use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use anyhow::{Context, Result};
use regex::Regex;

static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{(\w+)\}").unwrap());

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "@context")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub generation_config: GenerationConfig,
    #[serde(default)]
    pub speech_config: SpeechConfig,
    #[serde(default)]
    pub translate_config: TranslateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub log_filter: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

/// Text-generation service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_generation_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default = "default_max_length")]
    pub max_length: u32,
    #[serde(default = "default_num_return_sequences")]
    pub num_return_sequences: u32,
    #[serde(default = "default_generation_timeout")]
    pub timeout_secs: u64,
}

fn default_generation_url() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_model() -> String {
    "distilgpt2".to_string()
}

fn default_max_length() -> u32 {
    60
}

fn default_num_return_sequences() -> u32 {
    1
}

fn default_generation_timeout() -> u64 {
    10
}

/// Speech recognition and synthesis settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    #[serde(default = "default_recognition_url")]
    pub recognition_url: String,
    #[serde(default = "default_recognition_language")]
    pub recognition_language: String,
    #[serde(default = "default_synthesis_url")]
    pub synthesis_url: String,
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
    #[serde(default = "default_max_clip_bytes")]
    pub max_clip_bytes: u64,
    /// Overrides the platform player, e.g. `["ffplay", "-nodisp", "-autoexit"]`
    #[serde(default)]
    pub player: Option<Vec<String>>,
    #[serde(default = "default_helper_timeout")]
    pub timeout_secs: u64,
}

fn default_recognition_url() -> String {
    "http://localhost:8000/asr".to_string()
}

fn default_recognition_language() -> String {
    "en-US".to_string()
}

fn default_synthesis_url() -> String {
    "http://localhost:8000/tts".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_output_file() -> String {
    "output.mp3".to_string()
}

fn default_max_clip_bytes() -> u64 {
    25 * 1024 * 1024
}

fn default_helper_timeout() -> u64 {
    5
}

/// Translation service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    #[serde(default = "default_translate_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_language")]
    pub default_target: String,
    #[serde(default = "default_helper_timeout")]
    pub timeout_secs: u64,
}

fn default_translate_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_filter: None,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: default_generation_url(),
            model: default_model(),
            api_token: None,
            max_length: default_max_length(),
            num_return_sequences: default_num_return_sequences(),
            timeout_secs: default_generation_timeout(),
        }
    }
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            recognition_url: default_recognition_url(),
            recognition_language: default_recognition_language(),
            synthesis_url: default_synthesis_url(),
            default_language: default_language(),
            output_file: default_output_file(),
            max_clip_bytes: default_max_clip_bytes(),
            player: None,
            timeout_secs: default_helper_timeout(),
        }
    }
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            base_url: default_translate_url(),
            api_key: None,
            default_target: default_language(),
            timeout_secs: default_helper_timeout(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            anyhow::bail!("Configuration file not found: {}", path);
        }

        let bytes = fs::read(path)?;
        // Strips a UTF-8 BOM if present
        let (content, _, _) = encoding_rs::UTF_8.decode(&bytes);
        let content = substitute_env_vars(&content);

        let path_lower = path.to_lowercase();
        let config: Config = if path_lower.ends_with(".jsonld") || path_lower.ends_with(".json") {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(config.without_blank_credentials())
    }

    /// Credentials left empty (e.g. by an unset `${VAR}`) count as absent
    fn without_blank_credentials(mut self) -> Self {
        let blank_to_none = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        self.generation_config.api_token = blank_to_none(self.generation_config.api_token);
        self.translate_config.api_key = blank_to_none(self.translate_config.api_key);
        self
    }

    /// Loads the first config found among the candidate paths, or the
    /// built-in defaults when none exists.
    pub fn discover(explicit: Option<&str>) -> Result<(Self, Option<String>)> {
        if let Some(path) = explicit {
            let config = Self::load(path)
                .with_context(|| format!("Failed to load config from {}", path))?;
            return Ok((config, Some(path.to_string())));
        }

        let candidates: Vec<String> = vec![
            std::env::var("CONFIG_PATH").ok(),
            Some("conf.jsonld".to_string()),
            Some("conf.yaml".to_string()),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::discover_in(&candidates)
    }

    /// First existing candidate wins; a candidate that exists but fails to
    /// load is an error rather than a fallback to defaults.
    fn discover_in(candidates: &[String]) -> Result<(Self, Option<String>)> {
        for path in candidates {
            if !Path::new(path).exists() {
                continue;
            }
            let config = Self::load(path)
                .with_context(|| format!("Failed to load config from {}", path))?;
            return Ok((config, Some(path.clone())));
        }

        Ok((Self::default(), None))
    }
}

/// Replaces `${VAR_NAME}` with the environment value; unset variables
/// become empty.
fn substitute_env_vars(content: &str) -> String {
    ENV_VAR_PATTERN
        .replace_all(content, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        })
        .into_owned()
}
