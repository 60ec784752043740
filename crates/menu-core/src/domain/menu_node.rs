//! Menu tree node

use serde::Serialize;

use super::menu_record::{MenuId, MenuRecord};

/// A record placed in the built tree. Children are owned exclusively by
/// their single parent; the way back up is `record.parent_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuTreeNode {
    #[serde(flatten)]
    pub record: MenuRecord,
    pub full_path: String,
    /// Parent walk hit a cycle, so `full_path` stops short of a real root.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub truncated: bool,
    pub children: Vec<MenuTreeNode>,
}

impl MenuTreeNode {
    pub fn new(record: MenuRecord, full_path: String, truncated: bool) -> Self {
        Self {
            record,
            full_path,
            truncated,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> MenuId {
        self.record.id
    }

    pub fn title(&self) -> &str {
        &self.record.title
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Pre-order walk of this node and everything below it.
    pub fn iter(&self) -> NodeIter<'_> {
        NodeIter { stack: vec![self] }
    }

    /// Number of nodes in this subtree, including this one.
    pub fn subtree_len(&self) -> usize {
        self.iter().count()
    }
}

/// Pre-order iterator over one or more subtrees.
pub struct NodeIter<'a> {
    stack: Vec<&'a MenuTreeNode>,
}

impl<'a> NodeIter<'a> {
    pub fn over(forest: &'a [MenuTreeNode]) -> Self {
        Self {
            stack: forest.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a MenuTreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
