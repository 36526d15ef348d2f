//! `${VAR}` expansion in `folio.toml` values.

use std::borrow::Cow;
use std::env::{self, VarError};

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` in a config value.
///
/// A value without `${` is returned as is, so a bare `$VAR` stays literal.
/// `field` names the config key in the error for an unset variable.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |name: &str| env::var(name).map(Some))
        .map(Cow::into_owned)
        .map_err(|err| ConfigError::EnvVar {
            field: field.to_owned(),
            message: match err.cause {
                VarError::NotPresent => format!("${{{}}} not set", err.var_name),
                VarError::NotUnicode(_) => format!("${{{}}} is not valid UTF-8", err.var_name),
            },
        })
}
