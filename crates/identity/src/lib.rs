//! Host identity for the HA web app.
//!
//! Every response from the greeting endpoint names the instance that served
//! it. This crate owns that name: the validated [`HostName`] type, the
//! [`HostResolver`] seam used by the HTTP layer, and the resolvers backing it.

pub mod error;
pub mod resolver;
pub mod types;

pub use error::{ResolveError, Result};
pub use resolver::{FixedHostResolver, HostResolver, SystemHostResolver};
pub use types::HostName;
