//! Arena index over the flat skill list.
//!
//! Skills are persisted as a flat `Vec<Skill>` with parent-id back
//! references. `SkillTree` is built once from that list and maps ids to
//! positions, with parent and child links as indices, so lookups and tree
//! walks never rescan the list. The tree stores no skill data itself; it
//! indexes into the same `Vec` it was built from.

use super::types::Skill;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
struct SkillNode {
    parent: Option<usize>,
    children: Vec<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillTree {
    index: HashMap<String, usize>,
    nodes: Vec<SkillNode>,
    roots: Vec<usize>,
}

impl SkillTree {
    /// Builds the index. A parent id that names no skill is treated as a
    /// root so a damaged save cannot make a skill unreachable.
    pub fn build(skills: &[Skill]) -> Self {
        let index: HashMap<String, usize> = skills
            .iter()
            .enumerate()
            .map(|(i, skill)| (skill.id.clone(), i))
            .collect();

        let mut nodes: Vec<SkillNode> = skills
            .iter()
            .map(|skill| SkillNode {
                parent: skill
                    .parent_skill_id
                    .as_ref()
                    .and_then(|pid| index.get(pid).copied()),
                children: Vec::new(),
            })
            .collect();

        let mut roots = Vec::new();
        let parents: Vec<Option<usize>> = nodes.iter().map(|n| n.parent).collect();
        for (i, parent) in parents.into_iter().enumerate() {
            match parent {
                Some(p) => nodes[p].children.push(i),
                None => roots.push(i),
            }
        }

        Self {
            index,
            nodes,
            roots,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn position(&self, skill_id: &str) -> Option<usize> {
        self.index.get(skill_id).copied()
    }

    pub fn parent(&self, index: usize) -> Option<usize> {
        self.nodes.get(index).and_then(|n| n.parent)
    }

    pub fn children(&self, index: usize) -> &[usize] {
        self.nodes
            .get(index)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Depth-first order: each root followed by its descendants.
    pub fn walk(&self) -> Vec<(usize, usize)> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<(usize, usize)> = self.roots.iter().rev().map(|&r| (r, 0)).collect();
        while let Some((index, depth)) = stack.pop() {
            order.push((index, depth));
            for &child in self.children(index).iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        order
    }
}
