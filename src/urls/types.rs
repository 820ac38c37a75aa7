use std::collections::HashMap;
use std::env;

use super::errors::UrlError;

/// Execution mode of the consuming application.
///
/// Internal URL resolution points at per-application hosts in
/// `Development` and at the shared website root in any other mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeMode {
    Development,
    Production,
}

impl RuntimeMode {
    pub(crate) fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Maps application names to root URLs.
///
/// Implemented by the consuming platform. Root URLs must carry no
/// trailing slash; fixed path suffixes are appended to them verbatim.
pub trait HostResolver {
    /// Root URL for the named application.
    ///
    /// Fails when no host is registered under `application`.
    fn application_host(&self, application: &str) -> Result<String, UrlError>;

    /// The single canonical root URL of the website.
    fn website_root(&self) -> String;
}

/// Read-only key lookup over an environment
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// [`EnvSource`] backed by the real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// Fixed key/value environment, for tests and embedded configuration
impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}
