//! Structural self-check for a [`SkipMap`].
//!
//! Walks every level and reports the first broken invariant. Meant for tests
//! and fuzzing; it is O(n · levels) and never runs on the operation paths.

use crate::SkipMap;
use crate::arena::{Link, NodeId};
use skipmap_order::Comparator;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// A violated structural invariant. Positions are 0-based indices along
/// level 0.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("level {level} does not terminate")]
    Cycle { level: usize },
    #[error("key at position {position} does not sort after its predecessor")]
    OutOfOrder { position: usize },
    #[error("level {level} is not an ordered subsequence of level {below}")]
    NotSubsequence { level: usize, below: usize },
    #[error("node at position {position} has {links} links but its membership on level {level} disagrees")]
    LevelMismatch {
        position: usize,
        level: usize,
        links: usize,
    },
    #[error("header top level {level} is empty")]
    EmptyTopLevel { level: usize },
    #[error("length is {recorded} but level 0 holds {counted} nodes")]
    LengthMismatch { recorded: usize, counted: usize },
    #[error("arena holds {live} nodes but level 0 reaches {counted}")]
    Unreachable { live: usize, counted: usize },
}

impl<K, V, C: Comparator<K>, R> SkipMap<K, V, C, R> {
    /// Verify the structural invariants of the list.
    ///
    /// Checks that level 0 is strictly increasing, that each level is an
    /// ordered subsequence of the one below, that every node is linked on
    /// exactly the levels its link vector covers, that the header has no
    /// empty top level, and that the recorded length matches.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let limit = self.arena.len();

        // Level 0: order and positions.
        let base = self.walk(0, limit)?;
        for (position, pair) in base.windows(2).enumerate() {
            let prev = &self.arena.get(pair[0]).key;
            let next = &self.arena.get(pair[1]).key;
            if !self.comparator.less_than(prev, next) {
                return Err(InvariantError::OutOfOrder { position: position + 1 });
            }
        }
        let positions: HashMap<NodeId, usize> =
            base.iter().enumerate().map(|(pos, &id)| (id, pos)).collect();

        let mut below: HashSet<NodeId> = base.iter().copied().collect();
        for level in 0..self.head.len() {
            let chain = if level == 0 { base.clone() } else { self.walk(level, limit)? };

            let mut last = None;
            for &id in &chain {
                let position = match positions.get(&id) {
                    Some(&position) => position,
                    None => return Err(InvariantError::NotSubsequence { level, below: 0 }),
                };
                if level > 0 && (!below.contains(&id) || last.is_some_and(|l| l >= position)) {
                    return Err(InvariantError::NotSubsequence {
                        level,
                        below: level - 1,
                    });
                }
                last = Some(position);
            }

            let members: HashSet<NodeId> = chain.iter().copied().collect();
            for (position, &id) in base.iter().enumerate() {
                let links = self.arena.get(id).forward.len();
                if (links > level) != members.contains(&id) {
                    return Err(InvariantError::LevelMismatch {
                        position,
                        level,
                        links,
                    });
                }
            }
            below = members;
        }

        // Links above the header's top level cannot be reached.
        for (position, &id) in base.iter().enumerate() {
            let links = self.arena.get(id).forward.len();
            if links > self.head.len() {
                return Err(InvariantError::LevelMismatch {
                    position,
                    level: self.head.len(),
                    links,
                });
            }
        }

        let top = self.head.len() - 1;
        if top > 0 && self.head[top].is_none() {
            return Err(InvariantError::EmptyTopLevel { level: top });
        }

        if self.len != base.len() {
            return Err(InvariantError::LengthMismatch {
                recorded: self.len,
                counted: base.len(),
            });
        }
        if self.arena.len() != base.len() {
            return Err(InvariantError::Unreachable {
                live: self.arena.len(),
                counted: base.len(),
            });
        }
        Ok(())
    }

    /// Collect the chain of nodes on `level`, giving up after `limit` steps.
    fn walk(&self, level: usize, limit: usize) -> Result<Vec<NodeId>, InvariantError> {
        let mut chain = Vec::new();
        let mut next: Link = self.head[level];
        while let Some(id) = next {
            if chain.len() == limit {
                return Err(InvariantError::Cycle { level });
            }
            chain.push(id);
            next = self.arena.get(id).forward.get(level).copied().flatten();
        }
        Ok(chain)
    }
}
