use serde::Serialize;

use crate::*;

/// Capability tags this implementation advertises. The set is fixed at
/// construction; `supports_interface` is a pure lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceTag {
    OwnershipRegistry,
    Enumeration,
    Metadata,
    Approvals,
    ReceiverProtocol,
}

pub(crate) const DECLARED_INTERFACES: &[InterfaceTag] = &[
    InterfaceTag::OwnershipRegistry,
    InterfaceTag::Enumeration,
    InterfaceTag::Metadata,
    InterfaceTag::Approvals,
    InterfaceTag::ReceiverProtocol,
];

impl Registry {
    pub fn supports_interface(&self, tag: InterfaceTag) -> bool {
        self.interfaces.contains(&tag)
    }

    pub fn declared_interfaces(&self) -> &[InterfaceTag] {
        self.interfaces
    }
}
