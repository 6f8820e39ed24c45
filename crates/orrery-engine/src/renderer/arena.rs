use crate::components::mesh::SphereMesh;

/// Handle into the [`MeshArena`]. Copyable, cheap, and only meaningful for
/// the arena that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshHandle(u32);

/// Slot arena owning every renderable sphere descriptor in the scene.
///
/// Entities reference their renderable through a [`MeshHandle`]; removal
/// paths must free the handle before the entity goes away so that graphics
/// resources never outlive their owner. `live_count` exposes the pairing
/// invariant to tests.
pub struct MeshArena {
    slots: Vec<Option<SphereMesh>>,
    free: Vec<u32>,
}

impl MeshArena {
    pub fn new() -> Self {
        Self {
            slots: Vec::with_capacity(64),
            free: Vec::new(),
        }
    }

    /// Allocate a slot for a mesh and return its handle.
    pub fn alloc(&mut self, mesh: SphereMesh) -> MeshHandle {
        if let Some(idx) = self.free.pop() {
            self.slots[idx as usize] = Some(mesh);
            MeshHandle(idx)
        } else {
            self.slots.push(Some(mesh));
            MeshHandle((self.slots.len() - 1) as u32)
        }
    }

    /// Release the mesh behind a handle. Freeing an already-freed handle is
    /// a no-op, so removal paths can be idempotent.
    pub fn free(&mut self, handle: MeshHandle) {
        let idx = handle.0 as usize;
        if idx < self.slots.len() && self.slots[idx].take().is_some() {
            self.free.push(handle.0);
        }
    }

    pub fn get(&self, handle: MeshHandle) -> Option<&SphereMesh> {
        self.slots.get(handle.0 as usize).and_then(|s| s.as_ref())
    }

    pub fn get_mut(&mut self, handle: MeshHandle) -> Option<&mut SphereMesh> {
        self.slots.get_mut(handle.0 as usize).and_then(|s| s.as_mut())
    }

    /// Number of live (allocated, not yet freed) meshes.
    pub fn live_count(&self) -> usize {
        self.slots.len() - self.free.len()
    }
}

impl Default for MeshArena {
    fn default() -> Self {
        Self::new()
    }
}
