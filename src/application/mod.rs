//! Application layer holding the gateway registry.
//!
//! `GatewayRegistry` maps gateway ids to either a configuration descriptor or an
//! already-built instance, and builds descriptors on first lookup through an injected
//! factory strategy.

pub mod registry;
