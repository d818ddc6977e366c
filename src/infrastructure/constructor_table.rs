use crate::domain::descriptor::GatewayDescriptor;
use crate::domain::gateway::GatewayRef;
use crate::domain::ports::{GatewayFactory, ObjectFactory};
use crate::error::ConfigurationError;
use std::collections::HashMap;

type ConstructorResult = Result<GatewayRef, ConfigurationError>;

/// Builds a gateway from an id-stamped descriptor.
pub type GatewayConstructor = Box<dyn Fn(&GatewayDescriptor) -> ConstructorResult + Send + Sync>;

/// Explicit mapping from type tag to constructor.
///
/// Tags are matched exactly. Populate it once at startup; descriptors naming a tag that
/// was never registered fail with [`ConfigurationError::UnknownClass`].
#[derive(Default)]
pub struct ConstructorTable {
    constructors: HashMap<String, GatewayConstructor>,
}

impl ConstructorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `constructor` under `tag`, replacing any previous one.
    pub fn register<F>(&mut self, tag: impl Into<String>, constructor: F) -> &mut Self
    where
        F: Fn(&GatewayDescriptor) -> ConstructorResult + Send + Sync + 'static,
    {
        self.constructors.insert(tag.into(), Box::new(constructor));
        self
    }

    pub fn with<F>(mut self, tag: impl Into<String>, constructor: F) -> Self
    where
        F: Fn(&GatewayDescriptor) -> ConstructorResult + Send + Sync + 'static,
    {
        self.register(tag, constructor);
        self
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.constructors.contains_key(tag)
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

impl ObjectFactory for ConstructorTable {
    fn construct(&self, descriptor: &GatewayDescriptor) -> Result<GatewayRef, ConfigurationError> {
        let tag = descriptor.type_tag().ok_or(ConfigurationError::MissingClass)?;
        let constructor = self
            .constructors
            .get(tag)
            .ok_or_else(|| ConfigurationError::UnknownClass(tag.to_string()))?;
        constructor(descriptor)
    }
}

impl GatewayFactory for ConstructorTable {
    fn create_gateway(
        &self,
        _id: &str,
        descriptor: GatewayDescriptor,
    ) -> Result<GatewayRef, ConfigurationError> {
        self.construct(&descriptor)
    }
}
