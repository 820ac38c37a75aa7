//! Central configuration for the govuk_personalisation crate

/// Prefix shared by every URL override variable
pub(crate) const OVERRIDE_VAR_PREFIX: &str = "GOVUK_PERSONALISATION_";

/// Suffix shared by every URL override variable
pub(crate) const OVERRIDE_VAR_SUFFIX: &str = "_URI";

/// Environment variable consulted for the lookup named `var`.
///
/// `override_var("SIGN_IN")` is `"GOVUK_PERSONALISATION_SIGN_IN_URI"`.
pub(crate) fn override_var(var: &str) -> String {
    format!("{OVERRIDE_VAR_PREFIX}{var}{OVERRIDE_VAR_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_var_names() {
        assert_eq!(
            override_var("SIGN_IN"),
            "GOVUK_PERSONALISATION_SIGN_IN_URI"
        );
        assert_eq!(override_var("MANAGE"), "GOVUK_PERSONALISATION_MANAGE_URI");
    }
}
