//! Shared AWS configuration files
//!
//! Static keys and the region may come from `~/.aws/credentials` and
//! `~/.aws/config` (or the files named by `AWS_SHARED_CREDENTIALS_FILE` and
//! `AWS_CONFIG_FILE`), for the profile named by `AWS_PROFILE` or `default`.
//! Role assumption, SSO and `credential_process` profiles are not resolved.

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

use crate::{Credentials, Error, Result};

pub const PROFILE_VAR: &str = "AWS_PROFILE";
pub const CREDENTIALS_FILE_VAR: &str = "AWS_SHARED_CREDENTIALS_FILE";
pub const CONFIG_FILE_VAR: &str = "AWS_CONFIG_FILE";
pub const DEFAULT_PROFILE: &str = "default";

type Section = BTreeMap<String, String>;

/// Profiles of the shared credentials and config files.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SharedProfiles {
    credentials: BTreeMap<String, Section>,
    config: BTreeMap<String, Section>,
}

impl SharedProfiles {
    /// Parse file contents.
    ///
    /// Credentials file sections are profile names. Config file sections are
    /// `[profile <name>]` or `[default]`; other sections are ignored.
    pub fn parse(credentials: &str, config: &str) -> Self {
        let config = parse_sections(config)
            .into_iter()
            .filter_map(|(header, section)| {
                if header == DEFAULT_PROFILE {
                    return Some((header, section));
                }
                let name = header.strip_prefix("profile")?;
                name.starts_with(char::is_whitespace)
                    .then(|| (name.trim().to_string(), section))
            })
            .collect();

        Self {
            credentials: parse_sections(credentials),
            config,
        }
    }

    /// Read both files. A missing file counts as empty.
    pub fn load(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let credentials = read_optional(shared_file(&lookup, CREDENTIALS_FILE_VAR, "credentials"))?;
        let config = read_optional(shared_file(&lookup, CONFIG_FILE_VAR, "config"))?;
        Ok(Self::parse(&credentials, &config))
    }

    /// Static keys of `profile`; the credentials file wins over the config file.
    pub fn credentials(&self, profile: &str) -> Option<Credentials> {
        let access_key_id = self.value(profile, "aws_access_key_id")?;
        let secret_access_key = self.value(profile, "aws_secret_access_key")?;

        let credentials = Credentials::new(access_key_id, secret_access_key);
        Some(match self.value(profile, "aws_session_token") {
            Some(token) => credentials.with_session_token(token),
            None => credentials,
        })
    }

    /// `region` of `profile` in the config file.
    pub fn region(&self, profile: &str) -> Option<&str> {
        lookup_in(&self.config, profile, "region")
    }

    fn value(&self, profile: &str, key: &str) -> Option<&str> {
        lookup_in(&self.credentials, profile, key)
            .or_else(|| lookup_in(&self.config, profile, key))
    }
}

/// The profile named by `AWS_PROFILE`, or `default`.
pub fn profile_name(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup(PROFILE_VAR)
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string())
}

fn lookup_in<'a>(
    sections: &'a BTreeMap<String, Section>,
    profile: &str,
    key: &str,
) -> Option<&'a str> {
    sections
        .get(profile)?
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

fn shared_file(
    lookup: impl Fn(&str) -> Option<String>,
    var: &str,
    file_name: &str,
) -> Option<PathBuf> {
    lookup(var)
        .filter(|path| !path.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".aws").join(file_name)))
}

fn read_optional(path: Option<PathBuf>) -> Result<String> {
    let Some(path) = path else {
        return Ok(String::new());
    };
    match std::fs::read_to_string(&path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(String::new()),
        Err(source) => Err(Error::ProfileFile { path, source }),
    }
}

/// `[section]` headers with `key = value` lines. Keys are lower-cased.
fn parse_sections(text: &str) -> BTreeMap<String, Section> {
    let mut sections: BTreeMap<String, Section> = BTreeMap::new();
    let mut current: Option<String> = None;

    for raw in text.lines() {
        // Indented lines belong to a nested property such as `s3 =`.
        if raw.starts_with(char::is_whitespace) {
            continue;
        }
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            let name = header.trim().to_string();
            sections.entry(name.clone()).or_default();
            current = Some(name);
            continue;
        }
        let (Some(name), Some((key, value))) = (current.as_ref(), line.split_once('=')) else {
            continue;
        };
        if let Some(section) = sections.get_mut(name) {
            section.insert(key.trim().to_lowercase(), value.trim().to_string());
        }
    }
    sections
}
