use thiserror::Error;

/// Errors that can occur during URL resolution
#[derive(Clone, Error, Debug)]
pub enum UrlError {
    /// No host is known for the requested application
    #[error("Unresolvable application host: {0}")]
    UnresolvableApplicationHost(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<UrlError>();
    }

    #[test]
    fn test_error_display() {
        let err = UrlError::UnresolvableApplicationHost("account-manager".to_string());
        assert_eq!(
            err.to_string(),
            "Unresolvable application host: account-manager"
        );
    }
}
