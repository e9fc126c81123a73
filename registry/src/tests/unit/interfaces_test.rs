use crate::tests::test_utils::*;
use crate::*;

#[test]
fn declared_interfaces_are_supported() {
    let registry = new_registry();
    for tag in registry.declared_interfaces() {
        assert!(registry.supports_interface(*tag));
    }
    assert!(registry.supports_interface(InterfaceTag::OwnershipRegistry));
    assert!(registry.supports_interface(InterfaceTag::ReceiverProtocol));
}

#[test]
fn interface_tags_serialize_as_snake_case() {
    assert_eq!(
        serde_json::to_string(&InterfaceTag::OwnershipRegistry).unwrap(),
        "\"ownership_registry\""
    );
}
