//! Domain types shared by the registry and its collaborators.

pub mod descriptor;
pub mod gateway;
pub mod ports;
