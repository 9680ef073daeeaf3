//! Scene: the in-memory object store and its group membership tree.
//!
//! DESIGN
//! ======
//! Objects are stored by id. Membership lives beside them in two maps: each
//! child points at its one parent, and each group lists its children by id.
//! Ids are weak references, so neither direction keeps an object alive and
//! there is no ownership cycle. `set_parent` detaches from the old group
//! before attaching to the new one and refuses any link that would make a
//! group its own ancestor, so walking `ancestors` always terminates.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::HashMap;

use tracing::trace;

use crate::object::{ObjectId, TargetObject};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),
    #[error("object is not a group: {0}")]
    NotAGroup(ObjectId),
    #[error("group {group} is {child} or one of its descendants")]
    CycleDetected { child: ObjectId, group: ObjectId },
}

impl SceneError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ObjectNotFound(_) => "E_OBJECT_NOT_FOUND",
            Self::NotAGroup(_) => "E_NOT_A_GROUP",
            Self::CycleDetected { .. } => "E_GROUP_CYCLE",
        }
    }
}

/// In-memory store of objects and their group membership.
#[derive(Debug, Default)]
pub struct Scene {
    objects: HashMap<ObjectId, TargetObject>,
    parents: HashMap<ObjectId, ObjectId>,
    children: HashMap<ObjectId, Vec<ObjectId>>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an object. Replacing keeps existing membership.
    pub fn insert(&mut self, obj: TargetObject) {
        self.objects.insert(obj.id, obj);
    }

    /// Remove an object, detaching it from its parent. Its children, if any,
    /// move to the root plane.
    pub fn remove(&mut self, id: &ObjectId) -> Option<TargetObject> {
        let obj = self.objects.remove(id)?;
        self.detach(*id);
        if let Some(orphans) = self.children.remove(id) {
            for child in orphans {
                self.parents.remove(&child);
            }
        }
        Some(obj)
    }

    /// Return a reference to an object by id.
    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&TargetObject> {
        self.objects.get(id)
    }

    /// Return a mutable reference to an object by id.
    pub fn get_mut(&mut self, id: &ObjectId) -> Option<&mut TargetObject> {
        self.objects.get_mut(id)
    }

    /// Look up an object, as an error when absent.
    ///
    /// # Errors
    ///
    /// Returns `ObjectNotFound` if no object has this id.
    pub fn require(&self, id: &ObjectId) -> Result<&TargetObject, SceneError> {
        self.objects.get(id).ok_or(SceneError::ObjectNotFound(*id))
    }

    /// The group directly containing `id`, if any.
    #[must_use]
    pub fn parent(&self, id: &ObjectId) -> Option<ObjectId> {
        self.parents.get(id).copied()
    }

    /// Direct children of a group, in attach order.
    #[must_use]
    pub fn children(&self, id: &ObjectId) -> &[ObjectId] {
        self.children.get(id).map_or(&[], Vec::as_slice)
    }

    /// Move `child` into `group`, or to the root plane when `group` is `None`.
    ///
    /// The old membership is dropped before the new one is recorded. On error
    /// nothing changes.
    ///
    /// # Errors
    ///
    /// Returns `ObjectNotFound` if either object is missing, `NotAGroup` if the
    /// target is a leaf shape, and `CycleDetected` if `group` is `child` or lies
    /// inside it.
    pub fn set_parent(&mut self, child: ObjectId, group: Option<ObjectId>) -> Result<(), SceneError> {
        self.require(&child)?;
        if let Some(group) = group {
            if !self.require(&group)?.is_group() {
                return Err(SceneError::NotAGroup(group));
            }
            let mut cursor = Some(group);
            while let Some(id) = cursor {
                if id == child {
                    return Err(SceneError::CycleDetected { child, group });
                }
                cursor = self.parent(&id);
            }
        }

        self.detach(child);
        if let Some(group) = group {
            self.parents.insert(child, group);
            self.children.entry(group).or_default().push(child);
        }
        trace!(%child, ?group, "parent set");
        Ok(())
    }

    /// Ancestors of `id`, closest first. Stops at the first id missing from
    /// the store.
    #[must_use]
    pub fn ancestors(&self, id: &ObjectId) -> Ancestors<'_> {
        Ancestors { scene: self, next: self.parent(id) }
    }

    /// Number of objects currently in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns `true` if the scene contains no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    fn detach(&mut self, child: ObjectId) {
        let Some(old) = self.parents.remove(&child) else {
            return;
        };
        if let Some(siblings) = self.children.get_mut(&old) {
            siblings.retain(|c| *c != child);
            if siblings.is_empty() {
                self.children.remove(&old);
            }
        }
    }
}

/// Iterator over an object's ancestor groups, closest first.
pub struct Ancestors<'a> {
    scene: &'a Scene,
    next: Option<ObjectId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a TargetObject;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let group = self.scene.get(&id)?;
        self.next = self.scene.parent(&id);
        Some(group)
    }
}
