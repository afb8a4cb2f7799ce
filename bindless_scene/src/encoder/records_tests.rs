use super::*;
use std::mem::{offset_of, size_of};

#[test]
fn test_indirect_command_matches_vulkan_layout() {
    assert_eq!(size_of::<DrawIndexedIndirectCommand>(), 20);
    assert_eq!(offset_of!(DrawIndexedIndirectCommand, index_count), 0);
    assert_eq!(offset_of!(DrawIndexedIndirectCommand, instance_count), 4);
    assert_eq!(offset_of!(DrawIndexedIndirectCommand, first_index), 8);
    assert_eq!(offset_of!(DrawIndexedIndirectCommand, vertex_offset), 12);
    assert_eq!(offset_of!(DrawIndexedIndirectCommand, first_instance), 16);
}

#[test]
fn test_instance_property_std430_layout() {
    assert_eq!(size_of::<InstanceProperty>(), 80);
    assert_eq!(size_of::<InstanceProperty>() % InstanceProperty::GPU_ALIGNMENT, 0);
    assert_eq!(offset_of!(InstanceProperty, position), 0);
    assert_eq!(offset_of!(InstanceProperty, rotation), 16);
    assert_eq!(offset_of!(InstanceProperty, scale), 32);
    assert_eq!(offset_of!(InstanceProperty, color_blend), 48);
    assert_eq!(offset_of!(InstanceProperty, id), 64);
}

#[test]
fn test_instance_property_padding_is_zero() {
    let property = InstanceProperty::new(Vec3::ONE, Quat::IDENTITY, Vec3::ONE, Vec4::ONE, 5);
    let bytes = bytemuck::bytes_of(&property);
    assert_eq!(&bytes[12..16], &[0; 4]);
    assert_eq!(&bytes[44..48], &[0; 4]);
    assert_eq!(&bytes[68..80], &[0; 12]);
}

#[test]
fn test_instance_property_from_instance() {
    let instance = MeshInstance::default()
        .with_position(Vec3::new(1.0, 2.0, 3.0))
        .with_scale(Vec3::splat(2.0))
        .with_color_blend(Vec4::new(0.1, 0.2, 0.3, 0.4))
        .with_id(99);
    let property = InstanceProperty::from_instance(&instance, 7);

    assert_eq!(property.position, instance.position);
    assert_eq!(property.rotation, Quat::IDENTITY);
    assert_eq!(property.scale, Vec3::splat(2.0));
    assert_eq!(property.color_blend, instance.color_blend);
    // The resolved id wins over the instance's own field
    assert_eq!(property.id, 7);
}
