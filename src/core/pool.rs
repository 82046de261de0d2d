use super::surface::VisualId;

#[derive(Clone, Copy, Debug)]
struct PooledElement {
    id: VisualId,
    in_use: bool,
}

/// Fixed set of reusable visuals. Never grows; exhaustion is reported as `None`.
#[derive(Debug, Default)]
pub struct ParticlePool {
    elements: Vec<PooledElement>,
    in_use: usize,
}

impl ParticlePool {
    pub fn new(ids: impl IntoIterator<Item = VisualId>) -> Self {
        let elements = ids
            .into_iter()
            .map(|id| PooledElement { id, in_use: false })
            .collect();
        Self {
            elements,
            in_use: 0,
        }
    }

    /// Build a pool by calling `create` up to `capacity` times. Elements that
    /// fail to create are left out, so the pool may end up smaller.
    pub fn with_capacity(capacity: usize, mut create: impl FnMut() -> Option<VisualId>) -> Self {
        Self::new((0..capacity).filter_map(|_| create()))
    }

    pub fn acquire(&mut self) -> Option<VisualId> {
        let slot = self.elements.iter_mut().find(|e| !e.in_use)?;
        slot.in_use = true;
        self.in_use += 1;
        Some(slot.id)
    }

    /// Returns true only if `id` was in use; a repeated release is a no-op.
    pub fn release(&mut self, id: VisualId) -> bool {
        match self.elements.iter_mut().find(|e| e.id == id) {
            Some(slot) if slot.in_use => {
                slot.in_use = false;
                self.in_use -= 1;
                true
            }
            _ => false,
        }
    }

    /// Force-release every in-use element and return what was released.
    pub fn clear_all(&mut self) -> Vec<VisualId> {
        let mut released = Vec::with_capacity(self.in_use);
        for slot in self.elements.iter_mut().filter(|e| e.in_use) {
            slot.in_use = false;
            released.push(slot.id);
        }
        self.in_use = 0;
        released
    }

    /// Empty the pool for teardown, yielding every element.
    pub fn drain(&mut self) -> Vec<VisualId> {
        self.in_use = 0;
        self.elements.drain(..).map(|e| e.id).collect()
    }

    #[inline]
    pub fn in_use(&self) -> usize {
        self.in_use
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.elements.len()
    }

    pub fn is_in_use(&self, id: VisualId) -> bool {
        self.elements.iter().any(|e| e.id == id && e.in_use)
    }
}
