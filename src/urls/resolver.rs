use crate::config::override_var;

use super::errors::UrlError;
use super::types::{EnvSource, HostResolver, ProcessEnv, RuntimeMode};

/// Well-known URL lookups for account functionality across the platform.
///
/// Each lookup first honours a `GOVUK_PERSONALISATION_*_URI` environment
/// override and otherwise builds the URL from the injected [`HostResolver`].
/// Nothing is cached; every call reads the current environment state.
#[derive(Debug, Clone)]
pub struct Urls<H, E = ProcessEnv> {
    hosts: H,
    env: E,
    mode: RuntimeMode,
}

impl<H: HostResolver> Urls<H, ProcessEnv> {
    /// Resolver reading overrides from the process environment
    pub fn new(hosts: H, mode: RuntimeMode) -> Self {
        Self::with_env(hosts, ProcessEnv, mode)
    }
}

impl<H: HostResolver, E: EnvSource> Urls<H, E> {
    /// Resolver reading overrides from the given environment source
    pub fn with_env(hosts: H, env: E, mode: RuntimeMode) -> Self {
        Self { hosts, env, mode }
    }

    /// URL for the "sign in" page
    pub fn sign_in(&self) -> Result<String, UrlError> {
        self.resolve_internal_url("SIGN_IN", "frontend", "/sign-in")
    }

    /// URL for the "sign out" page
    pub fn sign_out(&self) -> Result<String, UrlError> {
        self.resolve_internal_url("SIGN_OUT", "frontend", "/sign-out")
    }

    /// URL for the "your account" page
    pub fn your_account(&self) -> Result<String, UrlError> {
        self.resolve_internal_url("YOUR_ACCOUNT", "frontend", "/account/home")
    }

    /// URL for the "manage" page on the account manager
    pub fn manage(&self) -> Result<String, UrlError> {
        self.resolve_external_url("MANAGE", "account-manager", "/account/manage")
    }

    /// URL for the "security" page on the account manager
    pub fn security(&self) -> Result<String, UrlError> {
        self.resolve_external_url("SECURITY", "account-manager", "/account/security")
    }

    /// Resolve a URL on the website itself.
    ///
    /// Links built here work both in production, where they point at the
    /// shared website root, and in development, where no shared root
    /// exists and the per-application host is used instead.
    fn resolve_internal_url(
        &self,
        var: &str,
        application: &str,
        path: &str,
    ) -> Result<String, UrlError> {
        if let Some(value) = self.env_override(var) {
            return Ok(value);
        }

        let base = if self.mode.is_development() {
            self.hosts.application_host(application)?
        } else {
            self.hosts.website_root()
        };
        Ok(format!("{base}{path}"))
    }

    /// Resolve a URL on a distinct application outside the shared website.
    ///
    /// The target has no shared-host form, so the per-application host is
    /// used in every runtime mode.
    fn resolve_external_url(
        &self,
        var: &str,
        application: &str,
        path: &str,
    ) -> Result<String, UrlError> {
        if let Some(value) = self.env_override(var) {
            return Ok(value);
        }

        let base = self.hosts.application_host(application)?;
        Ok(format!("{base}{path}"))
    }

    /// Environment override for the lookup named `var`, if set.
    ///
    /// Presence is the whole test: an empty value still wins.
    fn env_override(&self, var: &str) -> Option<String> {
        let key = override_var(var);
        let value = self.env.get(&key)?;
        tracing::debug!("Using {} from environment: {}", key, value);
        Some(value)
    }
}
