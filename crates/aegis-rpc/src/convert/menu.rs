//! Menu tree projection.
//!
//! Nodes are identified outward by their semantic id; the storage UUID is
//! never emitted.

use aegis_core::boxing::box_string;
use aegis_core::models::menu::Menu;

use crate::wire::menu::MenuNode;

#[derive(Debug, Clone, Copy, Default)]
pub struct MenuProjector;

impl MenuProjector {
    pub fn to_wire(&self, menu: Option<&Menu>) -> Option<MenuNode> {
        menu.map(|m| self.project(m))
    }

    pub fn project(&self, menu: &Menu) -> MenuNode {
        let children = if menu.children.is_empty() {
            None
        } else {
            Some(self.to_wire_forest(&menu.children))
        };
        MenuNode {
            id: box_string(&menu.semantic_id),
            name: box_string(&menu.name),
            path: box_string(&menu.path),
            icon: box_string(&menu.icon),
            component: box_string(&menu.component),
            children,
        }
    }

    /// Project sibling menus, preserving their order.
    pub fn to_wire_forest(&self, menus: &[Menu]) -> Vec<MenuNode> {
        menus.iter().map(|m| self.project(m)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn node(semantic_id: &str, name: &str, children: Vec<Menu>) -> Menu {
        Menu {
            uuid: Uuid::new_v4(),
            semantic_id: semantic_id.into(),
            name: name.into(),
            path: format!("/{semantic_id}"),
            icon: String::new(),
            component: String::new(),
            children,
        }
    }

    fn wire_ids(nodes: &[MenuNode], out: &mut Vec<String>) {
        for n in nodes {
            out.push(n.id.clone().unwrap_or_default());
            if let Some(children) = &n.children {
                wire_ids(children, out);
            }
        }
    }

    #[test]
    fn absent_menu_projects_to_absent() {
        assert_eq!(MenuProjector.to_wire(None), None);
    }

    #[test]
    fn semantic_id_replaces_uuid() {
        let reports = node("dashboard.reports", "Reports", vec![]);
        let dashboard = node("dashboard", "Home", vec![reports.clone()]);
        let wire = MenuProjector.to_wire(Some(&dashboard)).unwrap();

        assert_eq!(wire.id.as_deref(), Some("dashboard"));
        assert_eq!(wire.name.as_deref(), Some("Home"));
        let children = wire.children.as_ref().unwrap();
        assert_eq!(children[0].id.as_deref(), Some("dashboard.reports"));

        let json = serde_json::to_string(&wire).unwrap();
        assert!(!json.contains(&dashboard.uuid.to_string()));
        assert!(!json.contains(&reports.uuid.to_string()));
    }

    #[test]
    fn leaves_have_no_children_list() {
        let wire = MenuProjector.project(&node("settings", "Settings", vec![]));
        assert_eq!(wire.children, None);
        assert_eq!(wire.icon, None);
    }

    #[test]
    fn traversal_order_is_preserved() {
        let tree = vec![
            node(
                "a",
                "A",
                vec![node("a.1", "A1", vec![node("a.1.x", "X", vec![])]), node("a.2", "A2", vec![])],
            ),
            node("b", "B", vec![]),
        ];
        let wire = MenuProjector.to_wire_forest(&tree);

        let mut projected = Vec::new();
        wire_ids(&wire, &mut projected);
        let expected: Vec<String> = tree
            .iter()
            .flat_map(|m| m.semantic_ids())
            .map(str::to_owned)
            .collect();
        assert_eq!(projected, expected);
    }
}
