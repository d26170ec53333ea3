/*
 * This module defines `CategoryNode`, the plain tree-of-directories model for
 * the category hierarchy. It replaces any toolkit-provided filesystem model:
 * the store enumerates directories into these nodes and the application logic
 * turns them into `TreeItemDescriptor`s for whatever tree widget the shell
 * provides.
 */
use std::path::PathBuf;

use crate::platform_layer::{TreeItemDescriptor, TreeItemId};

/*
 * A single category: a directory under the categories root. `has_children`
 * reflects whether the directory contains at least one subdirectory, so the
 * tree widget can show an expander without the children being enumerated yet.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNode {
    pub path: PathBuf,
    pub name: String,
    pub has_children: bool,
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    pub fn new(path: PathBuf, name: String, has_children: bool) -> Self {
        CategoryNode {
            path,
            name,
            has_children,
            children: Vec::new(),
        }
    }

    /*
     * Converts category nodes into tree item descriptors, assigning fresh
     * `TreeItemId`s from the given counter and recording each node's path in
     * the map so tree-selection events can be resolved back to paths.
     */
    pub fn build_tree_item_descriptors_recursive(
        nodes: &[CategoryNode],
        path_for_tree_item_id: &mut std::collections::HashMap<TreeItemId, PathBuf>,
        next_tree_item_id_counter: &mut u64,
    ) -> Vec<TreeItemDescriptor> {
        let mut descriptors = Vec::new();
        for node in nodes {
            let id_val = *next_tree_item_id_counter;
            *next_tree_item_id_counter += 1;
            let item_id = TreeItemId(id_val);

            path_for_tree_item_id.insert(item_id, node.path.clone());

            let children = Self::build_tree_item_descriptors_recursive(
                &node.children,
                path_for_tree_item_id,
                next_tree_item_id_counter,
            );
            descriptors.push(TreeItemDescriptor {
                id: item_id,
                text: node.name.clone(),
                has_children: node.has_children,
                children,
            });
        }
        descriptors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_build_tree_item_descriptors_assigns_unique_ids_and_maps_paths() {
        // Arrange
        let mut child = CategoryNode::new(PathBuf::from("/root/Travel/Asia"), "Asia".into(), false);
        child.children = Vec::new();
        let mut travel = CategoryNode::new(PathBuf::from("/root/Travel"), "Travel".into(), true);
        travel.children = vec![child];
        let recipes = CategoryNode::new(PathBuf::from("/root/Recipes"), "Recipes".into(), false);
        let nodes = vec![travel, recipes];

        let mut id_to_path: HashMap<TreeItemId, PathBuf> = HashMap::new();
        let mut counter = 1u64;

        // Act
        let descriptors =
            CategoryNode::build_tree_item_descriptors_recursive(&nodes, &mut id_to_path, &mut counter);

        // Assert
        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].text, "Travel");
        assert!(descriptors[0].has_children);
        assert_eq!(descriptors[0].children.len(), 1);
        assert_eq!(descriptors[0].children[0].text, "Asia");
        assert_eq!(counter, 4, "Three nodes consume three ids");
        assert_eq!(
            id_to_path.get(&descriptors[0].children[0].id),
            Some(&PathBuf::from("/root/Travel/Asia"))
        );
        assert_eq!(
            id_to_path.get(&descriptors[1].id),
            Some(&PathBuf::from("/root/Recipes"))
        );
    }
}
