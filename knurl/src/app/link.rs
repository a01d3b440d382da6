// Copyright 2026 the Knurl Authors
// SPDX-License-Identifier: Apache-2.0

use smallvec::SmallVec;

use crate::core::ControlId;

/// A set of controls kept at the same value.
///
/// Members are referred to by id; the group never owns them. When tracking changes the
/// value of one member, the [`ControlRoot`](super::ControlRoot) assigns the new value
/// directly to every other member, and to the members of any group sharing a control
/// with this one. Direct assignments don't notify, so the fan-out never loops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkGroup {
    members: SmallVec<[ControlId; 4]>,
}

impl LinkGroup {
    /// Create a group from its members. Duplicates are dropped.
    pub fn new(members: impl IntoIterator<Item = ControlId>) -> Self {
        let mut group = Self::default();
        for id in members {
            group.insert(id);
        }
        group
    }

    /// Add a member. Returns `false` if it was already in the group.
    pub fn insert(&mut self, id: ControlId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.members.push(id);
        true
    }

    /// Remove a member. Returns `false` if it wasn't in the group.
    pub fn remove(&mut self, id: ControlId) -> bool {
        let len = self.members.len();
        self.members.retain(|member| *member != id);
        self.members.len() != len
    }

    /// Whether `id` is a member.
    pub fn contains(&self, id: ControlId) -> bool {
        self.members.contains(&id)
    }

    /// Every member, in insertion order.
    pub fn members(&self) -> &[ControlId] {
        &self.members
    }

    /// Every member other than `source`.
    pub fn peers(&self, source: ControlId) -> impl Iterator<Item = ControlId> + '_ {
        self.members.iter().copied().filter(move |id| *id != source)
    }

    /// The number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership() {
        let [a, b, c] = [ControlId::next(), ControlId::next(), ControlId::next()];
        let mut group = LinkGroup::new([a, b, a]);
        assert_eq!(group.members(), &[a, b]);
        assert!(group.insert(c));
        assert!(!group.insert(b));
        assert_eq!(group.peers(b).collect::<Vec<_>>(), vec![a, c]);

        assert!(group.remove(a));
        assert!(!group.remove(a));
        assert!(!group.contains(a));
        assert_eq!(group.len(), 2);
    }
}
