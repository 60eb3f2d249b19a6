//! Navigation menu tree.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A menu node. `semantic_id` (e.g., `dashboard.reports`) is the stable
/// outward identity; `uuid` is a storage surrogate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Menu {
    pub uuid: Uuid,
    pub semantic_id: String,
    pub name: String,
    pub path: String,
    pub icon: String,
    pub component: String,
    pub children: Vec<Menu>,
}

impl Menu {
    /// Depth-first, pre-order semantic ids of this node and its descendants.
    pub fn semantic_ids(&self) -> Vec<&str> {
        let mut out = vec![self.semantic_id.as_str()];
        for child in &self.children {
            out.extend(child.semantic_ids());
        }
        out
    }
}
