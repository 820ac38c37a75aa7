mod errors;
mod resolver;
mod types;

pub use errors::UrlError;
pub use resolver::Urls;
pub use types::{EnvSource, HostResolver, ProcessEnv, RuntimeMode};
