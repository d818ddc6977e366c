use crate::config::GatewaysConfig;
use crate::domain::descriptor::GatewayDescriptor;
use crate::domain::gateway::{GatewayEntry, GatewayRef};
use crate::domain::ports::GatewayFactoryBox;
use crate::error::{ConfigurationError, GatewayError, Result};
use indexmap::IndexMap;
use tracing::debug;

/// Id-keyed collection of payment gateways, resolved lazily.
///
/// Slots start out as descriptors and are built through the injected
/// [`GatewayFactory`](crate::domain::ports::GatewayFactory) the first time they are
/// requested. The built instance replaces the descriptor, so every later lookup returns
/// the same instance.
///
/// Lookups that may resolve take `&mut self`. Wrap the registry in
/// [`SharedGatewayRegistry`](crate::infrastructure::shared::SharedGatewayRegistry) when
/// several tasks need it at once.
pub struct GatewayRegistry {
    gateways: IndexMap<String, GatewayEntry>,
    factory: GatewayFactoryBox,
}

impl GatewayRegistry {
    /// Creates an empty registry that builds gateways with `factory`.
    pub fn new(factory: GatewayFactoryBox) -> Self {
        Self {
            gateways: IndexMap::new(),
            factory,
        }
    }

    pub fn with_gateways<I, E>(factory: GatewayFactoryBox, entries: I) -> Self
    where
        I: IntoIterator<Item = (String, E)>,
        E: Into<GatewayEntry>,
    {
        let mut registry = Self::new(factory);
        registry.set_gateways(entries);
        registry
    }

    /// Replaces every slot with `entries`, dropping previously resolved instances.
    ///
    /// Entries are not validated here; a bad descriptor fails when it is first resolved.
    pub fn set_gateways<I, E>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (String, E)>,
        E: Into<GatewayEntry>,
    {
        self.gateways = entries
            .into_iter()
            .map(|(id, entry)| (id, entry.into()))
            .collect();
        debug!(count = self.gateways.len(), "gateway registry loaded");
    }

    /// Loads every descriptor from `config`, replacing the current slots.
    pub fn load_config(&mut self, config: &GatewaysConfig) {
        self.set_gateways(config.gateways.clone());
    }

    pub fn has_gateway(&self, id: &str) -> bool {
        self.gateways.contains_key(id)
    }

    /// Whether the slot for `id` has already been built. False for unknown ids.
    pub fn is_resolved(&self, id: &str) -> bool {
        self.gateways.get(id).is_some_and(GatewayEntry::is_resolved)
    }

    /// Returns the instance for `id` only if it is already resolved. Never builds.
    pub fn peek(&self, id: &str) -> Option<GatewayRef> {
        match self.gateways.get(id) {
            Some(GatewayEntry::Resolved(gateway)) => Some(gateway.clone()),
            _ => None,
        }
    }

    /// Registered ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.gateways.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.gateways.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gateways.is_empty()
    }

    /// Returns the gateway registered under `id`, building it on first access.
    ///
    /// # Errors
    ///
    /// * [`GatewayError::UnknownGateway`] if `id` was never registered.
    /// * [`GatewayError::Configuration`] if construction fails. The slot stays
    ///   unresolved and the next call tries again.
    pub fn get_gateway(&mut self, id: &str) -> Result<GatewayRef> {
        let descriptor = match self.gateways.get(id) {
            None => return Err(GatewayError::UnknownGateway(id.to_string())),
            Some(GatewayEntry::Resolved(gateway)) => return Ok(gateway.clone()),
            Some(GatewayEntry::Unresolved(descriptor)) => descriptor.clone(),
        };

        let gateway = self.create_gateway(id, descriptor)?;
        debug!(id, class = gateway.class(), "gateway resolved");
        if let Some(slot) = self.gateways.get_mut(id) {
            *slot = GatewayEntry::Resolved(gateway.clone());
        }
        Ok(gateway)
    }

    /// Resolves every slot in registration order.
    ///
    /// The first construction failure aborts the call; no partial map is returned.
    pub fn get_gateways(&mut self) -> Result<IndexMap<String, GatewayRef>> {
        let ids: Vec<String> = self.gateways.keys().cloned().collect();
        let mut gateways = IndexMap::with_capacity(ids.len());
        for id in ids {
            let gateway = self.get_gateway(&id)?;
            gateways.insert(id, gateway);
        }
        Ok(gateways)
    }

    /// Stamps `id` onto the descriptor and hands it to the factory.
    pub fn create_gateway(
        &self,
        id: &str,
        descriptor: GatewayDescriptor,
    ) -> std::result::Result<GatewayRef, ConfigurationError> {
        self.factory.create_gateway(id, descriptor.with_id(id))
    }
}

impl std::fmt::Debug for GatewayRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slots: Vec<(&str, bool)> = self
            .gateways
            .iter()
            .map(|(id, entry)| (id.as_str(), entry.is_resolved()))
            .collect();
        f.debug_struct("GatewayRegistry")
            .field("resolved", &slots)
            .finish_non_exhaustive()
    }
}
