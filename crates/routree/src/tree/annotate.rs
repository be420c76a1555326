// File: src/tree/annotate.rs
// Purpose: Pre-mount annotation pass (tree paths, defaults, normalization)

use super::RouteTree;

/// Walks the tree depth-first and fills in everything derivation relies
/// on: `tree_path` for every node, route `path_part` defaults, action
/// `path_part`/`parent_action` defaults, and `params` normalization.
///
/// Runs in place. Fields already set by the loader or by a hook are left
/// alone, except that a `parent_action` ending in `../` gets the index
/// action name appended (so `../` is shorthand for "the enclosing
/// route's index action").
pub(crate) fn annotate<H>(tree: &mut RouteTree<H>, index_action: &str) {
    for id in tree.routes_preorder() {
        // parents come first in pre-order, so their tree_path is ready
        let tree_path = match tree.route(id).parent {
            Some(parent) => format!("{}/{}", tree.route(parent).tree_path, tree.route(id).name),
            None => String::new(),
        };

        let route = tree.route_mut(id);
        route.tree_path = tree_path.clone();
        if route.path_part.is_none() {
            route.path_part = Some(route.name.clone());
        }

        let action_ids: Vec<_> = route.actions.values().copied().collect();
        for action_id in action_ids {
            let action = tree.action_mut(action_id);
            action.tree_path = format!("{}/{}", tree_path, action.name);

            if action.path_part.is_none() {
                action.path_part = Some(if action.name == index_action {
                    String::new()
                } else {
                    action.name.clone()
                });
            }

            if action.params.as_ref().is_some_and(|p| p.is_empty()) {
                action.params = None;
            }

            match &mut action.parent_action {
                None => {
                    action.parent_action = Some(if action.name == index_action {
                        format!("../{index_action}")
                    } else {
                        index_action.to_string()
                    });
                }
                Some(reference) if reference.ends_with("../") => {
                    reference.push_str(index_action);
                }
                Some(_) => {}
            }
        }
    }
}
