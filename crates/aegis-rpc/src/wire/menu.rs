use serde::{Deserialize, Serialize};

/// A navigation node. `id` is the menu's semantic identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuNode {
    pub id: Option<String>,
    pub name: Option<String>,
    pub path: Option<String>,
    pub icon: Option<String>,
    pub component: Option<String>,
    pub children: Option<Vec<MenuNode>>,
}
