//! Draw list synchronization onto Bevy entities.
//!
//! Each draw call owns one pooled entity (a unit circle mesh scaled to the
//! call's radius). The pool only grows; surplus slots are hidden.

use bevy::prelude::*;

use crate::camera::world_to_render;
use crate::render::{CircleDraw, DrawList, z_layers};

/// Pooled circle entity mirroring `DrawList::circles[index]`.
#[derive(Component, Debug)]
pub struct CircleSlot {
    pub index: usize,
}

/// Shared unit-circle mesh for every slot.
#[derive(Resource)]
pub(super) struct CircleAssets {
    mesh: Handle<Mesh>,
}

pub(super) fn setup_circle_assets(mut commands: Commands, mut meshes: ResMut<Assets<Mesh>>) {
    let mesh = meshes.add(Circle::new(1.0));
    commands.insert_resource(CircleAssets { mesh });
}

/// Update pooled entities from the draw list, spawning slots as needed.
pub(super) fn sync_circle_slots(
    mut commands: Commands,
    list: Res<DrawList>,
    assets: Option<Res<CircleAssets>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut slots: Query<(
        &CircleSlot,
        &mut Transform,
        &mut Visibility,
        &MeshMaterial2d<ColorMaterial>,
    )>,
) {
    let Some(assets) = assets else {
        return;
    };

    let mut pooled = 0;
    for (slot, mut transform, mut visibility, material) in slots.iter_mut() {
        pooled = pooled.max(slot.index + 1);

        let Some(circle) = list.circles.get(slot.index) else {
            *visibility = Visibility::Hidden;
            continue;
        };

        *transform = circle_transform(circle, slot.index);
        *visibility = Visibility::Inherited;

        // Only touch the asset when the color changed
        let stale = materials
            .get(&material.0)
            .is_some_and(|m| m.color != circle.color);
        if stale && let Some(mut m) = materials.get_mut(&material.0) {
            m.color = circle.color;
        }
    }

    for (index, circle) in list.circles.iter().enumerate().skip(pooled) {
        commands.spawn((
            Mesh2d(assets.mesh.clone()),
            MeshMaterial2d(materials.add(ColorMaterial::from(circle.color))),
            circle_transform(circle, index),
            Visibility::Inherited,
            CircleSlot { index },
        ));
    }
}

/// Later draw calls get a slightly higher z so they cover earlier ones.
fn circle_transform(circle: &CircleDraw, index: usize) -> Transform {
    let z = z_layers::BASE + index as f32 * z_layers::STEP;
    Transform::from_translation(world_to_render(circle.center, z))
        .with_scale(Vec3::splat(circle.radius as f32))
}
