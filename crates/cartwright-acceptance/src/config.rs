use cartwright_browser::{SessionOptions, WaitPolicy};
use clap::Parser;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;

static CONFIG: OnceLock<HarnessConfig> = OnceLock::new();

/// Harness configuration, from flags or `CARTWRIGHT_*` environment variables.
#[derive(Parser, Debug, Clone)]
#[command(name = "cartwright")]
#[command(version)]
#[command(about = "Browser-driven acceptance harness for the storefront shopping flow")]
pub struct HarnessConfig {
    /// Storefront base URL
    #[arg(long, env = "CARTWRIGHT_BASE_URL", default_value = "https://www.amazon.in")]
    pub base_url: Url,

    /// Marker the home page title must contain
    #[arg(long, env = "CARTWRIGHT_TITLE_MARKER", default_value = "Amazon.in")]
    pub title_marker: String,

    /// Path to the Chrome binary (auto-detected when omitted)
    #[arg(long, env = "CARTWRIGHT_CHROME")]
    pub chrome_path: Option<PathBuf>,

    /// Run with a visible browser window instead of headless
    #[arg(long, env = "CARTWRIGHT_HEADED")]
    pub headed: bool,

    /// Named persistent browser profile (ephemeral when omitted)
    #[arg(long, env = "CARTWRIGHT_PROFILE")]
    pub profile: Option<String>,

    /// Chrome remote-debugging port
    #[arg(long, env = "CARTWRIGHT_DEBUG_PORT", default_value_t = 9222)]
    pub debugging_port: u16,

    /// Uniform element wait bound, in seconds
    #[arg(long, env = "CARTWRIGHT_WAIT_SECS", default_value_t = 20)]
    pub wait_secs: u64,

    /// Feature directory (relative paths resolve against this crate)
    #[arg(long, env = "CARTWRIGHT_FEATURES", default_value = "features")]
    pub features: PathBuf,

    /// Directory for failure screenshots
    #[arg(long, env = "CARTWRIGHT_SCREENSHOTS", default_value = "target/screenshots")]
    pub screenshot_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl HarnessConfig {
    /// Install this configuration as the process-wide one, read by hooks and
    /// steps for the rest of the run.
    pub fn install(self) {
        CONFIG.set(self).expect("harness config installed twice");
    }

    pub fn global() -> &'static HarnessConfig {
        CONFIG.get().expect("harness config not installed")
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            chrome_path: self.chrome_path.clone(),
            profile: self.profile.clone(),
            headless: !self.headed,
            debugging_port: self.debugging_port,
            wait: WaitPolicy::new(Duration::from_secs(self.wait_secs)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_headless_with_session_wait() {
        let config = HarnessConfig::parse_from(["cartwright"]);

        assert_eq!(config.base_url.as_str(), "https://www.amazon.in/");
        assert_eq!(config.wait_secs, 20);
        assert!(!config.headed);

        let options = config.session_options();
        assert!(options.headless);
        assert_eq!(options.wait.timeout, Duration::from_secs(20));
    }

    #[test]
    fn test_headed_flag_disables_headless() {
        let config = HarnessConfig::parse_from(["cartwright", "--headed"]);
        assert!(!config.session_options().headless);
    }

    #[test]
    fn test_rejects_malformed_base_url() {
        let result = HarnessConfig::try_parse_from(["cartwright", "--base-url", "not a url"]);
        assert!(result.is_err());
    }
}
