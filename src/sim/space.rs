//! Body/shape ownership and the fixed-substep world
//!
//! The space owns every (body, shape) pair, damps and integrates them each
//! step, and reports overlaps for watched collision-kind pairs. It never
//! removes anything itself: callers queue removals and drain the queue at
//! the top of the next substep, so the collections are structurally stable
//! while a step runs.

use serde::{Deserialize, Serialize};

use super::body::RigidBody;
use super::collision::shapes_overlap;
use super::shape::{CollisionKind, Shape};

/// Stable handle to a body/shape pair owned by a [`Space`]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BodyId(pub u32);

/// What to do when two shapes of a given kind pair overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairPolicy {
    /// Run narrow phase and report a [`Contact`]
    Report,
    /// Registered no-op: skip the pair without running narrow phase
    Ignore,
}

/// An overlap reported by [`Space::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub a: BodyId,
    pub b: BodyId,
    /// Kinds of `a` and `b`, in that order
    pub kinds: (CollisionKind, CollisionKind),
}

impl Contact {
    /// Handle of the participant with the given kind, if either side has it
    pub fn body_of(&self, kind: CollisionKind) -> Option<BodyId> {
        if self.kinds.0 == kind {
            Some(self.a)
        } else if self.kinds.1 == kind {
            Some(self.b)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Entry {
    id: BodyId,
    kind: CollisionKind,
    body: RigidBody,
    shape: Shape,
}

/// Owns all bodies and shapes and advances them by fixed substeps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Space {
    /// Fraction of velocity remaining after one second of coasting
    pub damping: f32,
    /// Entries in handle order (handles only ever grow)
    entries: Vec<Entry>,
    /// Unordered kind pair → policy; pairs absent here are skipped outright
    policies: Vec<((CollisionKind, CollisionKind), PairPolicy)>,
    next_id: u32,
}

impl Space {
    pub fn new(damping: f32) -> Self {
        Self {
            damping,
            entries: Vec::new(),
            policies: Vec::new(),
            next_id: 1,
        }
    }

    /// Register the policy for an unordered kind pair. Registering the
    /// same pair again overwrites the earlier policy.
    pub fn set_pair_policy(&mut self, a: CollisionKind, b: CollisionKind, policy: PairPolicy) {
        let key = pair_key(a, b);
        if let Some(slot) = self.policies.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = policy;
        } else {
            self.policies.push((key, policy));
        }
    }

    fn pair_policy(&self, a: CollisionKind, b: CollisionKind) -> Option<PairPolicy> {
        let key = pair_key(a, b);
        self.policies.iter().find(|(k, _)| *k == key).map(|&(_, p)| p)
    }

    /// Add a body with its shape; returns the handle used for lookups and
    /// removal.
    pub fn add(&mut self, body: RigidBody, shape: Shape, kind: CollisionKind) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            kind,
            body,
            shape,
        });
        id
    }

    /// Remove a body and its shape. Returns false for a stale handle.
    pub fn remove(&mut self, id: BodyId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn body(&self, id: BodyId) -> Option<&RigidBody> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.body)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut RigidBody> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| &mut e.body)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Advance every body by `dt`, then report overlaps.
    ///
    /// Velocities (linear and angular) first decay by `damping^dt` — the
    /// damping coefficient is the fraction remaining after one second —
    /// then each body integrates. Narrow phase runs only for unordered
    /// pairs whose kind pair is registered [`PairPolicy::Report`];
    /// [`PairPolicy::Ignore`] and unregistered pairs cost at most the
    /// policy lookup.
    pub fn step(&mut self, dt: f32) -> Vec<Contact> {
        let decay = self.damping.powf(dt);
        for entry in &mut self.entries {
            entry.body.velocity *= decay;
            entry.body.angular_velocity *= decay;
            entry.body.integrate(dt);
        }

        let mut contacts = Vec::new();
        for i in 0..self.entries.len() {
            for j in (i + 1)..self.entries.len() {
                let a = &self.entries[i];
                let b = &self.entries[j];
                if self.pair_policy(a.kind, b.kind) != Some(PairPolicy::Report) {
                    continue;
                }
                if shapes_overlap(&a.shape, &a.body, &b.shape, &b.body) {
                    contacts.push(Contact {
                        a: a.id,
                        b: b.id,
                        kinds: (a.kind, b.kind),
                    });
                }
            }
        }
        contacts
    }
}

/// Order-normalized key for the unordered pair registry
fn pair_key(a: CollisionKind, b: CollisionKind) -> (CollisionKind, CollisionKind) {
    if a <= b { (a, b) } else { (b, a) }
}
