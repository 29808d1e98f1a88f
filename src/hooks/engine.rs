//! Hook pipeline: template lookup, parameter substitution, macro
//! expansion, validation
//!
//! Every failure is a value the caller can branch on; nothing here
//! unwinds. The resolved command string is opaque - it may carry
//! pipe-delimited sub-commands for the host dispatcher, which this
//! engine never interprets.

use ahash::AHashMap;
use rand_chacha::ChaCha8Rng;
use serde_json::Value;
use thiserror::Error;

use crate::core::profile::Profile;
use crate::hooks::macros::{expand_macros, unresolved_tokens};

/// Event parameters, as loosely-typed values from the host
pub type HookParams = AHashMap<String, Value>;

/// Why a hook produced no dispatchable command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HookError {
    #[error("No profile provided")]
    MissingProfile,

    /// Non-fatal: there is simply no side effect to perform.
    #[error("Hook not defined or empty")]
    NotConfigured,

    /// Template variables survived substitution and expansion.
    #[error("Unsubstituted template variables: {0}")]
    UnresolvedTokens(String),

    #[error("Hook expanded to an empty command")]
    EmptyCommand,
}

/// Replace every `{{key}}` occurrence with the stringified parameter
/// value, globally per key. Tokens for keys not in `params` are left
/// untouched for macro expansion and validation.
pub fn substitute_params(template: &str, params: &HookParams) -> String {
    let mut out = template.to_string();
    for (key, value) in params {
        let token = format!("{{{{{key}}}}}");
        out = out.replace(&token, &stringify(value));
    }
    out
}

/// Strings substitute without quotes; everything else uses its JSON form.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Resolve the command registered for `event` into a dispatchable string.
///
/// Substitution always precedes macro expansion, so a macro argument
/// pulled from a parameter resolves correctly. Each pass runs once - no
/// recursive re-expansion.
pub fn fire_hook(
    profile: Option<&Profile>,
    event: &str,
    params: &HookParams,
    rng: &mut ChaCha8Rng,
) -> Result<String, HookError> {
    let profile = profile.ok_or(HookError::MissingProfile)?;
    let template = profile.hook_template(event).ok_or(HookError::NotConfigured)?;

    let substituted = substitute_params(template, params);
    let expanded = expand_macros(&substituted, rng);

    let leftover = unresolved_tokens(&expanded);
    if !leftover.is_empty() {
        let joined = leftover.join(", ");
        tracing::warn!("Hook '{}' left unsubstituted variables: {}", event, joined);
        return Err(HookError::UnresolvedTokens(joined));
    }
    if expanded.trim().is_empty() {
        return Err(HookError::EmptyCommand);
    }

    tracing::debug!("Hook '{}' resolved to: {}", event, expanded);
    Ok(expanded)
}
