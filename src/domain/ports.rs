use super::descriptor::GatewayDescriptor;
use super::gateway::GatewayRef;
use crate::error::{ConfigurationError, Result};
use async_trait::async_trait;
use indexmap::IndexMap;

/// Generic construction facility: builds an instance from a descriptor's type tag and
/// parameters.
pub trait ObjectFactory: Send + Sync {
    fn construct(
        &self,
        descriptor: &GatewayDescriptor,
    ) -> std::result::Result<GatewayRef, ConfigurationError>;
}

/// Strategy the registry calls to build an unresolved slot.
///
/// The registry has already set `descriptor.id` to `id`. Implementations may add
/// defaults or wrap the result, but must return the construction error unchanged.
pub trait GatewayFactory: Send + Sync {
    fn create_gateway(
        &self,
        id: &str,
        descriptor: GatewayDescriptor,
    ) -> std::result::Result<GatewayRef, ConfigurationError>;
}

impl<F> GatewayFactory for F
where
    F: Fn(&str, GatewayDescriptor) -> std::result::Result<GatewayRef, ConfigurationError>
        + Send
        + Sync,
{
    fn create_gateway(
        &self,
        id: &str,
        descriptor: GatewayDescriptor,
    ) -> std::result::Result<GatewayRef, ConfigurationError> {
        self(id, descriptor)
    }
}

/// Gateway lookup as seen by request-handling code.
#[async_trait]
pub trait GatewayProvider: Send + Sync {
    async fn has_gateway(&self, id: &str) -> bool;
    async fn get_gateway(&self, id: &str) -> Result<GatewayRef>;
    async fn get_gateways(&self) -> Result<IndexMap<String, GatewayRef>>;
}

pub type GatewayFactoryBox = Box<dyn GatewayFactory>;
pub type GatewayProviderBox = Box<dyn GatewayProvider>;
