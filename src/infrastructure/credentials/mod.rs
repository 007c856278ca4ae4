//! Credentials management infrastructure
//!
//! Resolves the Notion integration token:
//! - `--token` flag
//! - `NOTION_TOKEN` environment variable fallback

use thiserror::Error;

/// Environment variable consulted when no `--token` flag is given.
pub const TOKEN_ENV_VAR: &str = "NOTION_TOKEN";

/// Credential resolution errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CredentialError {
    /// Neither the flag nor the environment holds a token
    #[error("notion token required: use --token or set NOTION_TOKEN")]
    MissingToken,
}

/// Resolve the token from the flag value, falling back to `NOTION_TOKEN`.
pub fn resolve_token(flag: Option<&str>) -> Result<String, CredentialError> {
    resolve_token_from(flag, std::env::var(TOKEN_ENV_VAR).ok().as_deref())
}

/// Resolve the token from explicit flag and environment values.
///
/// The flag wins when it holds a non-blank value. Whitespace-only values are
/// treated as absent, and the returned token is trimmed.
pub fn resolve_token_from(flag: Option<&str>, env: Option<&str>) -> Result<String, CredentialError> {
    [flag, env]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or(CredentialError::MissingToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_takes_precedence() {
        let token = resolve_token_from(Some("from_flag"), Some("from_env"));
        assert_eq!(token, Ok("from_flag".to_string()));
    }

    #[test]
    fn test_env_fallback() {
        let token = resolve_token_from(None, Some("from_env"));
        assert_eq!(token, Ok("from_env".to_string()));
    }

    #[test]
    fn test_empty_flag_falls_back_to_env() {
        let token = resolve_token_from(Some(""), Some("from_env"));
        assert_eq!(token, Ok("from_env".to_string()));
    }

    #[test]
    fn test_whitespace_is_absent() {
        assert_eq!(
            resolve_token_from(Some("   "), Some("\t\n")),
            Err(CredentialError::MissingToken)
        );
    }

    #[test]
    fn test_missing_everywhere() {
        let err = resolve_token_from(None, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "notion token required: use --token or set NOTION_TOKEN"
        );
    }

    #[test]
    fn test_token_is_trimmed() {
        let token = resolve_token_from(Some("  secret_abc\n"), None);
        assert_eq!(token, Ok("secret_abc".to_string()));
    }

    #[test]
    fn test_resolve_token_reads_env() {
        temp_env::with_var(TOKEN_ENV_VAR, Some("secret_env_token"), || {
            assert_eq!(resolve_token(None), Ok("secret_env_token".to_string()));
        });
    }

    #[test]
    fn test_resolve_token_env_unset() {
        temp_env::with_var_unset(TOKEN_ENV_VAR, || {
            assert_eq!(resolve_token(None), Err(CredentialError::MissingToken));
        });
    }
}
