//! govuk_personalisation - Cross-application URL helpers for GOV.UK accounts
//!
//! This crate resolves the well-known account URLs (sign in, sign out, your
//! account, manage, security) used by applications across the platform.
//! Each lookup honours a `GOVUK_PERSONALISATION_*_URI` environment override
//! and otherwise builds the URL from a host resolver supplied by the
//! consuming application:
//!
//! ```
//! use govuk_personalisation::{HostResolver, RuntimeMode, UrlError, Urls};
//!
//! struct Hosts;
//!
//! impl HostResolver for Hosts {
//!     fn application_host(&self, application: &str) -> Result<String, UrlError> {
//!         Ok(format!("http://{application}.dev.gov.uk"))
//!     }
//!
//!     fn website_root(&self) -> String {
//!         "https://www.gov.uk".to_string()
//!     }
//! }
//!
//! let urls = Urls::new(Hosts, RuntimeMode::Production);
//! assert_eq!(urls.sign_in()?, "https://www.gov.uk/sign-in");
//! # Ok::<(), UrlError>(())
//! ```

mod config;
mod urls;

pub use urls::{EnvSource, HostResolver, ProcessEnv, RuntimeMode, UrlError, Urls};
