use crate::components::entity::Entity;
use crate::renderer::arena::MeshArena;
use crate::renderer::instance::{RenderBuffer, SphereInstance};

/// Build the sphere render buffer from the scene.
/// Inactive entities and entities without a mesh are skipped; a dangling
/// handle (freed mesh) is skipped the same way.
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    meshes: &MeshArena,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();

    for entity in entities {
        if !entity.active {
            continue;
        }
        let handle = match entity.mesh {
            Some(h) => h,
            None => continue,
        };
        if let Some(mesh) = meshes.get(handle) {
            buffer.push(SphereInstance::from_mesh(entity.pos, mesh));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::mesh::{MeshColor, SphereMesh};
    use glam::Vec3;

    #[test]
    fn build_buffer_skips_inactive_and_meshless() {
        let mut meshes = MeshArena::new();
        let h1 = meshes.alloc(SphereMesh::new(1.0, MeshColor::default()));
        let h2 = meshes.alloc(SphereMesh::new(2.0, MeshColor::default()));

        let mut inactive = Entity::new(EntityId(2))
            .with_pos(Vec3::new(5.0, 0.0, 0.0))
            .with_mesh(h2);
        inactive.active = false;

        let entities = vec![
            Entity::new(EntityId(1))
                .with_pos(Vec3::new(40.0, 0.0, 0.0))
                .with_mesh(h1),
            inactive,
            Entity::new(EntityId(3)).with_pos(Vec3::new(9.0, 0.0, 0.0)),
        ];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &meshes, &mut buffer);

        assert_eq!(buffer.instance_count(), 1);
        assert_eq!(buffer.instances[0].x, 40.0);
        assert_eq!(buffer.instances[0].radius, 1.0);
    }

    #[test]
    fn build_buffer_skips_freed_handles() {
        let mut meshes = MeshArena::new();
        let h = meshes.alloc(SphereMesh::default());
        let entities = vec![Entity::new(EntityId(1)).with_mesh(h)];
        meshes.free(h);

        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &meshes, &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
    }
}
