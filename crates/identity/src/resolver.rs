//! Host resolvers.

use crate::error::Result;
use crate::types::HostName;

/// Source of the host identifier reported to clients.
///
/// Implementations are queried once per request and must not cache, so a
/// renamed or rescheduled instance reports its current identity.
pub trait HostResolver: Send + Sync {
    fn resolve(&self) -> Result<HostName>;
}

/// Resolves the host name configured in the operating system.
///
/// In a container this is the per-container host name, which is what lets a
/// client tell replicas behind a load balancer apart.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostResolver;

impl SystemHostResolver {
    pub fn new() -> Self {
        Self
    }
}

impl HostResolver for SystemHostResolver {
    fn resolve(&self) -> Result<HostName> {
        let raw = hostname::get()?;
        let name = HostName::try_from(raw)?;
        tracing::trace!(host = %name, "resolved system host name");
        Ok(name)
    }
}

/// Always reports the same, preconfigured host name.
#[derive(Debug, Clone)]
pub struct FixedHostResolver {
    name: HostName,
}

impl FixedHostResolver {
    pub fn new(name: HostName) -> Self {
        Self { name }
    }
}

impl HostResolver for FixedHostResolver {
    fn resolve(&self) -> Result<HostName> {
        Ok(self.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_resolver_returns_non_empty_name() {
        let name = SystemHostResolver::new().resolve().unwrap();
        assert!(!name.as_str().is_empty());
    }

    #[test]
    fn system_resolver_matches_os_host_name() {
        let os_name = hostname::get().unwrap().into_string().unwrap();
        let name = SystemHostResolver::new().resolve().unwrap();
        assert_eq!(name.as_str(), os_name.trim());
    }

    #[test]
    fn fixed_resolver_returns_configured_name() {
        let resolver = FixedHostResolver::new(HostName::parse("web-1").unwrap());
        assert_eq!(resolver.resolve().unwrap().as_str(), "web-1");
    }

    #[test]
    fn resolvers_are_object_safe() {
        let resolvers: Vec<Box<dyn HostResolver>> = vec![
            Box::new(SystemHostResolver::new()),
            Box::new(FixedHostResolver::new(HostName::parse("web-2").unwrap())),
        ];
        assert!(resolvers.iter().all(|r| r.resolve().is_ok()));
    }
}
