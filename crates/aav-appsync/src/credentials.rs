//! AWS credentials read from the environment or a shared profile

use crate::profile::{self, PROFILE_VAR, SharedProfiles};
use crate::{Error, Result};

pub const ACCESS_KEY_ID_VAR: &str = "AWS_ACCESS_KEY_ID";
pub const SECRET_ACCESS_KEY_VAR: &str = "AWS_SECRET_ACCESS_KEY";
pub const SESSION_TOKEN_VAR: &str = "AWS_SESSION_TOKEN";

/// Static credentials used to sign requests.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl Credentials {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Static credentials from the environment, else from the shared profile.
    ///
    /// `AWS_ACCESS_KEY_ID` in the environment selects the environment keys.
    /// Otherwise the profile named by `AWS_PROFILE` (or `default`) must carry
    /// both keys.
    pub fn resolve(
        lookup: impl Fn(&str) -> Option<String>,
        profiles: &SharedProfiles,
    ) -> Result<Self> {
        if lookup(ACCESS_KEY_ID_VAR).is_some_and(|v| !v.is_empty()) {
            return Self::from_lookup(lookup);
        }

        let profile = profile::profile_name(&lookup);
        if let Some(credentials) = profiles.credentials(&profile) {
            tracing::debug!(%profile, "Using shared profile credentials");
            return Ok(credentials);
        }

        if lookup(PROFILE_VAR).is_some_and(|v| !v.trim().is_empty()) {
            return Err(Error::ProfileCredentials { profile });
        }
        Err(Error::MissingCredentials {
            var: ACCESS_KEY_ID_VAR,
        })
    }

    /// Read credentials through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |var: &'static str| lookup(var).filter(|v| !v.is_empty());

        let access_key_id = get(ACCESS_KEY_ID_VAR).ok_or(Error::MissingCredentials {
            var: ACCESS_KEY_ID_VAR,
        })?;
        let secret_access_key = get(SECRET_ACCESS_KEY_VAR).ok_or(Error::MissingCredentials {
            var: SECRET_ACCESS_KEY_VAR,
        })?;

        Ok(Self {
            access_key_id,
            secret_access_key,
            session_token: get(SESSION_TOKEN_VAR),
        })
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("session_token", &self.session_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_all_variables() {
        let creds = Credentials::from_lookup(lookup(&[
            (ACCESS_KEY_ID_VAR, "AKID"),
            (SECRET_ACCESS_KEY_VAR, "secret"),
            (SESSION_TOKEN_VAR, "token"),
        ]))
        .unwrap();

        assert_eq!(creds, Credentials::new("AKID", "secret").with_session_token("token"));
    }

    #[test]
    fn missing_secret_names_the_variable() {
        let err = Credentials::from_lookup(lookup(&[(ACCESS_KEY_ID_VAR, "AKID")])).unwrap_err();
        assert_eq!(err.to_string(), "AWS_SECRET_ACCESS_KEY must be set");
    }

    #[test]
    fn empty_session_token_is_ignored() {
        let creds = Credentials::from_lookup(lookup(&[
            (ACCESS_KEY_ID_VAR, "AKID"),
            (SECRET_ACCESS_KEY_VAR, "secret"),
            (SESSION_TOKEN_VAR, ""),
        ]))
        .unwrap();
        assert!(creds.session_token.is_none());
    }

    fn shared() -> SharedProfiles {
        SharedProfiles::parse(
            "[default]\naws_access_key_id = AKIDDEFAULT\naws_secret_access_key = d\n\
             [work]\naws_access_key_id = AKIDWORK\naws_secret_access_key = w\n",
            "",
        )
    }

    #[test]
    fn environment_keys_win_over_profile() {
        let creds = Credentials::resolve(
            lookup(&[
                (ACCESS_KEY_ID_VAR, "AKIDENV"),
                (SECRET_ACCESS_KEY_VAR, "env-secret"),
                (PROFILE_VAR, "work"),
            ]),
            &shared(),
        )
        .unwrap();
        assert_eq!(creds, Credentials::new("AKIDENV", "env-secret"));
    }

    #[test]
    fn falls_back_to_default_profile() {
        let creds = Credentials::resolve(lookup(&[]), &shared()).unwrap();
        assert_eq!(creds.access_key_id, "AKIDDEFAULT");
    }

    #[test]
    fn aws_profile_selects_named_profile() {
        let creds = Credentials::resolve(lookup(&[(PROFILE_VAR, "work")]), &shared()).unwrap();
        assert_eq!(creds, Credentials::new("AKIDWORK", "w"));
    }

    #[test]
    fn unknown_named_profile_is_reported() {
        let err =
            Credentials::resolve(lookup(&[(PROFILE_VAR, "ops")]), &shared()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Profile ops has no aws_access_key_id/aws_secret_access_key"
        );
    }

    #[test]
    fn nothing_configured_asks_for_access_key() {
        let err = Credentials::resolve(lookup(&[]), &SharedProfiles::default()).unwrap_err();
        assert_eq!(err.to_string(), "AWS_ACCESS_KEY_ID must be set");
    }

    #[test]
    fn environment_secret_still_required() {
        let err = Credentials::resolve(lookup(&[(ACCESS_KEY_ID_VAR, "AKID")]), &shared())
            .unwrap_err();
        assert_eq!(err.to_string(), "AWS_SECRET_ACCESS_KEY must be set");
    }

    #[test]
    fn debug_hides_secrets() {
        let creds = Credentials::new("AKID", "super-secret").with_session_token("tok");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("AKID"));
        assert!(!rendered.contains("super-secret"));
        assert!(!rendered.contains("tok\""));
    }
}
