// src/config.rs
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_BASE_URL: &str = "LEXICON_BASE_URL";
pub const ENV_PARTITIONS_PATH: &str = "LEXICON_PARTITIONS_PATH";
pub const ENV_BIND: &str = "LEXICON_BIND";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/storage/quran-dictionary";
pub const DEFAULT_BIND: &str = "0.0.0.0:8000";

/// The dictionary partition files, one per source-alphabet letter, in the
/// order the collection is concatenated. The list is configuration, not
/// logic; `LEXICON_PARTITIONS_PATH` can override it.
pub const DEFAULT_PARTITION_FILES: [&str; 26] = [
    "letter_$_ش.json",
    "letter_A_أ.json",
    "letter_b_ب.json",
    "letter_d_د.json",
    "letter_D_ض.json",
    "letter_f_ف.json",
    "letter_g_غ.json",
    "letter_H_ح.json",
    "letter_h_ه.json",
    "letter_j_ج.json",
    "letter_k_ك.json",
    "letter_l_ل.json",
    "letter_m_م.json",
    "letter_n_ن.json",
    "letter_q_ق.json",
    "letter_r_ر.json",
    "letter_s_س.json",
    "letter_S_ص.json",
    "letter_t_ت.json",
    "letter_T_ط.json",
    "letter_v_ث.json",
    "letter_w_و.json",
    "letter_x_خ.json",
    "letter_y_ي.json",
    "letter_z_ز.json",
    "letter_Z_ظ.json",
];

/// Runtime configuration for the service and loader.
#[derive(Debug, Clone)]
pub struct LexiconConfig {
    pub base_url: String,
    pub partitions: Vec<String>,
    pub bind: String,
}

impl LexiconConfig {
    /// Resolve config from the environment:
    /// - base URL from $LEXICON_BASE_URL (trailing slash trimmed),
    /// - partition list from $LEXICON_PARTITIONS_PATH if set, else builtin,
    /// - bind address from $LEXICON_BIND.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var(ENV_BASE_URL)
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let partitions = load_partitions_default()?;
        let bind = std::env::var(ENV_BIND).unwrap_or_else(|_| DEFAULT_BIND.to_string());
        Ok(Self {
            base_url,
            partitions,
            bind,
        })
    }
}

/// Builtin partition list as owned strings.
pub fn default_partitions() -> Vec<String> {
    DEFAULT_PARTITION_FILES
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Load the partition list from an explicit path. Supports TOML or JSON.
pub fn load_partitions_from(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading partition list from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    parse_partitions(&content, ext.as_str())
}

/// Load the partition list using env var + builtin fallback:
/// 1) $LEXICON_PARTITIONS_PATH
/// 2) the builtin 26-letter list
pub fn load_partitions_default() -> Result<Vec<String>> {
    if let Ok(p) = std::env::var(ENV_PARTITIONS_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_partitions_from(&pb);
        } else {
            return Err(anyhow!("LEXICON_PARTITIONS_PATH points to non-existent path"));
        }
    }
    Ok(default_partitions())
}

fn parse_partitions(s: &str, hint_ext: &str) -> Result<Vec<String>> {
    // A known extension picks the parser, and its error surfaces as-is.
    match hint_ext {
        "toml" => parse_toml(s).context("parsing TOML partition list"),
        "json" => parse_json(s).context("parsing JSON partition list"),
        _ => match parse_toml(s) {
            Ok(v) => Ok(v),
            Err(toml_err) => parse_json(s).map_err(|json_err| {
                anyhow!("unsupported partition list format (toml: {toml_err}; json: {json_err})")
            }),
        },
    }
}

fn parse_toml(s: &str) -> Result<Vec<String>> {
    #[derive(serde::Deserialize)]
    struct TomlList {
        partitions: Vec<String>,
    }
    let v: TomlList = toml::from_str(s)?;
    Ok(clean_list(v.partitions))
}

fn parse_json(s: &str) -> Result<Vec<String>> {
    let v: Vec<String> = serde_json::from_str(s)?;
    Ok(clean_list(v))
}

/// Trim entries and drop blanks. Order is kept and duplicates survive:
/// a file listed twice is concatenated twice, matching the loader contract.
fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|it| it.trim().to_string())
        .filter(|it| !it.is_empty())
        .collect()
}
