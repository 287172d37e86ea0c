//! Generic timed entity field
//!
//! Both mini-games spawn short-lived entities (obstacles crossing the field,
//! targets waiting to be tapped) that live for a fixed tick window and must
//! be resolved at most once. The field owns spawn bookkeeping, idempotent
//! resolution and expiry; drivers supply the payload, the position rule and
//! the miss policy.

/// A spawned obstacle or target
#[derive(Debug, Clone)]
pub struct Entity<P> {
    pub id: u32,
    /// Tick the entity entered play
    pub spawned_tick: u64,
    /// Tick the motion/visibility window elapses
    pub expires_tick: u64,
    pub payload: P,
    resolved: bool,
}

impl<P> Entity<P> {
    /// Linear motion/visibility fraction in [0, 1] over the entity's window
    pub fn progress(&self, now: u64) -> f32 {
        let window = self.expires_tick.saturating_sub(self.spawned_tick).max(1);
        let elapsed = now.saturating_sub(self.spawned_tick);
        (elapsed as f32 / window as f32).clamp(0.0, 1.0)
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}

/// Insertion-ordered set of live entities with idempotent resolution.
///
/// IDs are monotonically increasing, so iteration order is stable and
/// deterministic.
#[derive(Debug, Clone)]
pub struct EntityField<P> {
    entities: Vec<Entity<P>>,
    next_id: u32,
}

impl<P> Default for EntityField<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> EntityField<P> {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            next_id: 1,
        }
    }

    /// Add an entity whose window runs `lifetime_ticks` from `now`
    pub fn spawn(&mut self, now: u64, lifetime_ticks: u32, payload: P) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.entities.push(Entity {
            id,
            spawned_tick: now,
            expires_tick: now + u64::from(lifetime_ticks),
            payload,
            resolved: false,
        });
        id
    }

    /// Mark an entity resolved (hit/tapped) and drop it from the active set.
    ///
    /// Idempotent: only the first call for an id returns true; repeats and
    /// unknown ids are no-ops, so racing resolutions (tap vs. expiry, two
    /// collision scans) produce exactly one side effect.
    pub fn resolve(&mut self, id: u32) -> bool {
        match self.entities.iter().position(|e| e.id == id && !e.resolved) {
            Some(index) => {
                self.entities[index].resolved = true;
                self.entities.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove and return entities whose window elapsed unresolved.
    ///
    /// The obstacle variant drops these silently (the obstacle left the
    /// screen); the tapper variant charges a miss per returned entity.
    pub fn drain_expired(&mut self, now: u64) -> Vec<Entity<P>> {
        let mut expired = Vec::new();
        let mut i = 0;
        while i < self.entities.len() {
            if self.entities[i].expires_tick <= now {
                expired.push(self.entities.remove(i));
            } else {
                i += 1;
            }
        }
        expired
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity<P>> {
        self.entities.iter()
    }

    pub fn get(&self, id: u32) -> Option<&Entity<P>> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Drop every entity (restart); in-flight ids become stale no-ops
    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_assigns_increasing_ids() {
        let mut field: EntityField<()> = EntityField::new();
        let a = field.spawn(0, 10, ());
        let b = field.spawn(0, 10, ());
        assert!(b > a);
        assert_eq!(field.len(), 2);
    }

    #[test]
    fn resolve_is_idempotent() {
        let mut field: EntityField<()> = EntityField::new();
        let id = field.spawn(0, 10, ());

        assert!(field.resolve(id));
        // Second resolution (e.g. tap racing with a collision scan) is a no-op.
        assert!(!field.resolve(id));
        assert!(field.is_empty());

        // Unknown ids are no-ops too.
        assert!(!field.resolve(999));
    }

    #[test]
    fn expiry_returns_unresolved_only() {
        let mut field: EntityField<u32> = EntityField::new();
        let tapped = field.spawn(0, 10, 1);
        field.spawn(0, 10, 2);
        field.spawn(0, 30, 3);

        field.resolve(tapped);

        let expired = field.drain_expired(10);
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].payload, 2);
        // The longer-lived entity stays in play.
        assert_eq!(field.len(), 1);
    }

    #[test]
    fn progress_is_clamped_linear() {
        let mut field: EntityField<()> = EntityField::new();
        let id = field.spawn(10, 20, ());
        let entity = field.get(id).unwrap();

        assert_eq!(entity.progress(10), 0.0);
        assert!((entity.progress(20) - 0.5).abs() < 1e-6);
        assert_eq!(entity.progress(30), 1.0);
        assert_eq!(entity.progress(99), 1.0);
    }

    #[test]
    fn clear_makes_pending_ids_stale() {
        let mut field: EntityField<()> = EntityField::new();
        let id = field.spawn(0, 10, ());
        field.clear();
        assert!(!field.resolve(id));
        assert!(field.is_empty());
    }
}
