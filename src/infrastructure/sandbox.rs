use crate::domain::descriptor::GatewayDescriptor;
use crate::domain::gateway::{Gateway, GatewayRef};
use crate::error::ConfigurationError;
use crate::infrastructure::constructor_table::ConstructorTable;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

/// Type tag of the built-in sandbox gateway.
pub const SANDBOX_CLASS: &str = "Sandbox";

/// An in-process gateway that performs no I/O.
///
/// Used for dry runs of a configuration. Requires a `purse`; the optional `secret` is
/// kept redacted in `Debug` output.
#[derive(Debug)]
pub struct SandboxGateway {
    id: String,
    purse: String,
    secret: Option<SecretString>,
}

impl SandboxGateway {
    pub fn from_descriptor(descriptor: &GatewayDescriptor) -> Result<Self, ConfigurationError> {
        let id = descriptor.id.clone().unwrap_or_default();
        let purse = descriptor.str_param("purse")?.to_string();
        let secret = descriptor
            .opt_str_param("secret")?
            .map(|s| SecretString::from(s.to_string()));
        Ok(Self { id, purse, secret })
    }

    pub fn purse(&self) -> &str {
        &self.purse
    }

    /// Whether `candidate` matches the configured secret. Always false without one.
    pub fn secret_matches(&self, candidate: &str) -> bool {
        self.secret
            .as_ref()
            .is_some_and(|s| s.expose_secret() == candidate)
    }
}

impl Gateway for SandboxGateway {
    fn id(&self) -> &str {
        &self.id
    }

    fn class(&self) -> &str {
        SANDBOX_CLASS
    }
}

/// Constructor table holding the gateways built into this crate.
pub fn builtin_constructors() -> ConstructorTable {
    ConstructorTable::new().with(SANDBOX_CLASS, |descriptor: &GatewayDescriptor| {
        Ok(Arc::new(SandboxGateway::from_descriptor(descriptor)?) as GatewayRef)
    })
}
