use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::CONFIG_FILE;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigPrecision {
    Secs,
    Millis,
    Micros,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) output: Option<PathBuf>,
    #[serde(default)]
    pub(crate) precision: Option<ConfigPrecision>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) quiet: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    /// File this config was loaded from
    #[serde(skip)]
    pub(crate) source: Option<PathBuf>,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_from(&Self::get_config_paths())
    }

    fn load_from(config_paths: &[PathBuf]) -> Self {
        // First file that parses wins
        for path in config_paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(path)
            {
                match Self::parse(&content, path) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn parse(content: &str, path: &Path) -> Result<Self, toml::de::Error> {
        let mut config = toml::from_str::<Config>(content)?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Configured output path; relative paths are taken from the config file's directory
    pub(crate) fn output_path(&self) -> Option<PathBuf> {
        let output = self.output.as_ref()?;
        if output.is_absolute() {
            return Some(output.clone());
        }
        let base = self
            .source
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new("."));
        Some(base.join(output))
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Working directory: ./buildstamp.toml
        paths.push(PathBuf::from(CONFIG_FILE));

        // 2. XDG config: ~/.config/buildstamp/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("buildstamp").join("config.toml"));
        }

        // 3. macOS Application Support: ~/Library/Application Support/buildstamp/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let macos_path = config_dir.join("buildstamp").join("config.toml");
            if !paths.contains(&macos_path) {
                paths.push(macos_path);
            }
        }

        // 4. Home directory: ~/.buildstamp.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".buildstamp.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_paths_start_with_working_directory() {
        let paths = Config::get_config_paths();
        assert_eq!(paths[0], PathBuf::from("buildstamp.toml"));
    }

    #[test]
    fn parses_all_fields() {
        let toml = r#"
output = "web/src/build-time.ts"
precision = "millis"
timezone = "Asia/Shanghai"
quiet = true
debug = true
"#;
        let config = Config::parse(toml, Path::new("/repo/buildstamp.toml")).unwrap();
        assert_eq!(config.precision, Some(ConfigPrecision::Millis));
        assert_eq!(config.timezone.as_deref(), Some("Asia/Shanghai"));
        assert!(config.quiet);
        assert!(config.debug);
        assert_eq!(
            config.output_path(),
            Some(PathBuf::from("/repo/web/src/build-time.ts"))
        );
    }

    #[test]
    fn empty_config_is_default() {
        let config = Config::parse("", Path::new("buildstamp.toml")).unwrap();
        assert!(config.output_path().is_none());
        assert!(config.precision.is_none());
        assert!(!config.quiet);
    }

    #[test]
    fn absolute_output_is_kept() {
        let config = Config::parse(
            r#"output = "/abs/build-time.ts""#,
            Path::new("/elsewhere/buildstamp.toml"),
        )
        .unwrap();
        assert_eq!(config.output_path(), Some(PathBuf::from("/abs/build-time.ts")));
    }

    #[test]
    fn unknown_precision_is_rejected() {
        assert!(Config::parse(r#"precision = "nanos""#, Path::new("a.toml")).is_err());
    }

    #[test]
    fn load_skips_unparsable_file_and_uses_next() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        fs::write(&broken, "precision = [").unwrap();
        fs::write(&good, "quiet = true\n").unwrap();

        let config = Config::load_from(&[dir.path().join("missing.toml"), broken, good.clone()]);
        assert!(config.quiet);
        assert_eq!(config.source, Some(good));
    }

    #[test]
    fn load_with_no_files_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&[dir.path().join("missing.toml")]);
        assert!(config.source.is_none());
    }
}
