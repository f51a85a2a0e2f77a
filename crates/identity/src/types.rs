use std::ffi::OsString;

use serde::Serialize;

use crate::error::{ResolveError, Result};

/// Name identifying one running instance of the service.
///
/// Always non-empty, valid UTF-8 and free of surrounding whitespace, so a
/// `server` field built from it can be trusted by whoever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HostName(String);

impl HostName {
    /// Validates and wraps a host name.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ResolveError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the host name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for HostName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HostName {
    type Error = ResolveError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for HostName {
    type Error = ResolveError;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<OsString> for HostName {
    type Error = ResolveError;

    fn try_from(value: OsString) -> Result<Self> {
        let name = value
            .into_string()
            .map_err(|raw| ResolveError::NotUnicode(raw.to_string_lossy().into_owned()))?;
        Self::parse(name)
    }
}

impl From<HostName> for String {
    fn from(name: HostName) -> Self {
        name.0
    }
}
