// File: src/hooks.rs
// Purpose: User extension points around path computation

use crate::tree::{ActionNode, RouteNode, RouteTree};

pub type TreeHook<H> = Box<dyn FnMut(&mut RouteTree<H>)>;
pub type RouteHook = Box<dyn FnMut(&mut RouteNode)>;
pub type ActionHook<H> = Box<dyn FnMut(&mut ActionNode<H>)>;

/// Optional callbacks fired around path computation.
///
/// "Before" hooks run after annotation but before dependency resolution
/// and path building; "after" hooks run once every path is computed.
/// Route and action hooks fire once per node in the same depth-first
/// pre-order used everywhere else.
///
/// Hooks may mutate any field. A before-hook that sets an action's
/// `path` makes the builder treat it as already resolved. There is no
/// host-context argument — closures capture whatever they need.
pub struct Hooks<H> {
    pub before_tree: Option<TreeHook<H>>,
    pub after_tree: Option<TreeHook<H>>,
    pub before_route: Option<RouteHook>,
    pub after_route: Option<RouteHook>,
    pub before_action: Option<ActionHook<H>>,
    pub after_action: Option<ActionHook<H>>,
}

impl<H> Hooks<H> {
    pub fn new() -> Self {
        Self {
            before_tree: None,
            after_tree: None,
            before_route: None,
            after_route: None,
            before_action: None,
            after_action: None,
        }
    }

    pub fn before_tree(mut self, hook: impl FnMut(&mut RouteTree<H>) + 'static) -> Self {
        self.before_tree = Some(Box::new(hook));
        self
    }

    pub fn after_tree(mut self, hook: impl FnMut(&mut RouteTree<H>) + 'static) -> Self {
        self.after_tree = Some(Box::new(hook));
        self
    }

    pub fn before_route(mut self, hook: impl FnMut(&mut RouteNode) + 'static) -> Self {
        self.before_route = Some(Box::new(hook));
        self
    }

    pub fn after_route(mut self, hook: impl FnMut(&mut RouteNode) + 'static) -> Self {
        self.after_route = Some(Box::new(hook));
        self
    }

    pub fn before_action(mut self, hook: impl FnMut(&mut ActionNode<H>) + 'static) -> Self {
        self.before_action = Some(Box::new(hook));
        self
    }

    pub fn after_action(mut self, hook: impl FnMut(&mut ActionNode<H>) + 'static) -> Self {
        self.after_action = Some(Box::new(hook));
        self
    }
}

impl<H> Default for Hooks<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fires the per-node hooks of one phase over the whole tree, route
/// hook before the route's action hooks, pre-order throughout.
pub(crate) fn run_node_hooks<H>(
    tree: &mut RouteTree<H>,
    route_hook: &mut Option<RouteHook>,
    action_hook: &mut Option<ActionHook<H>>,
) {
    if route_hook.is_none() && action_hook.is_none() {
        return;
    }
    for id in tree.routes_preorder() {
        if let Some(hook) = route_hook {
            hook(tree.route_mut(id));
        }
        if let Some(hook) = action_hook {
            let action_ids: Vec<_> = tree.route(id).actions.values().copied().collect();
            for action_id in action_ids {
                hook(tree.action_mut(action_id));
            }
        }
    }
}
