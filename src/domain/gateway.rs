use super::descriptor::GatewayDescriptor;
use std::fmt;
use std::sync::Arc;

/// A constructed payment gateway.
///
/// Payment processing and notification handling live in the implementations; the
/// registry only stores and hands out instances.
pub trait Gateway: Send + Sync + fmt::Debug {
    /// The registry id this instance was built for.
    fn id(&self) -> &str;

    /// The type tag this instance was built from.
    fn class(&self) -> &str;
}

/// Shared handle to a gateway. Two handles refer to the same instance iff `Arc::ptr_eq`.
pub type GatewayRef = Arc<dyn Gateway>;

/// One registry slot.
///
/// A slot only ever moves from `Unresolved` to `Resolved`.
#[derive(Debug, Clone)]
pub enum GatewayEntry {
    Unresolved(GatewayDescriptor),
    Resolved(GatewayRef),
}

impl GatewayEntry {
    pub fn is_resolved(&self) -> bool {
        matches!(self, GatewayEntry::Resolved(_))
    }
}

impl From<GatewayDescriptor> for GatewayEntry {
    fn from(descriptor: GatewayDescriptor) -> Self {
        GatewayEntry::Unresolved(descriptor)
    }
}

impl From<GatewayRef> for GatewayEntry {
    fn from(gateway: GatewayRef) -> Self {
        GatewayEntry::Resolved(gateway)
    }
}
