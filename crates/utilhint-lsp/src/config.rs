/// Language ids served when none are given on the command line
pub const DEFAULT_LANGUAGES: &[&str] = &["javascript", "typescript"];

/// Runtime settings for the server, assembled from command-line flags
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Send per-request `[DEBUG]` log messages to the client
    pub debug: bool,
    /// Document language ids that get completion and hover
    pub languages: Vec<String>,
}

impl Config {
    pub fn new(debug: bool, languages: Vec<String>) -> Self {
        let languages = if languages.is_empty() {
            DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect()
        } else {
            languages
        };

        Self { debug, languages }
    }

    /// Whether documents with this language id are served
    pub fn supports(&self, language_id: &str) -> bool {
        self.languages.iter().any(|l| l == language_id)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(false, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_languages() {
        let config = Config::default();
        assert!(!config.debug);
        assert!(config.supports("javascript"));
        assert!(config.supports("typescript"));
        assert!(!config.supports("python"));
        assert!(!config.supports("JavaScript"));
    }

    #[test]
    fn test_explicit_languages_replace_defaults() {
        let config = Config::new(true, vec!["javascriptreact".to_string()]);
        assert!(config.debug);
        assert!(config.supports("javascriptreact"));
        assert!(!config.supports("javascript"));
    }
}
