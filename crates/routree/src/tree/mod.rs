// File: src/tree/mod.rs
// Purpose: In-memory route/action tree and its construction API

pub(crate) mod annotate;

use std::collections::BTreeMap;
use std::fmt;

/// Index of a route node inside its [`RouteTree`] arena.
///
/// Ids are plain copyable indices, so a child can refer back to its
/// parent without an ownership cycle. An id is only meaningful for the
/// tree that handed it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteId(pub(crate) usize);

/// Index of an action node inside its [`RouteTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(pub(crate) usize);

/// A tree branch: owns child routes and actions by name.
#[derive(Debug, Clone)]
pub struct RouteNode {
    /// Segment identifier, unique among siblings. The root's name is `""`.
    pub name: String,
    /// Literal path segment this route contributes. `None` until
    /// annotation defaults it to `name`; `Some("")` is an explicit
    /// "contribute nothing".
    pub path_part: Option<String>,
    /// Fully explicit path override. When set, actions reaching this
    /// route from outside use it as their base instead of deriving one.
    pub path: Option<String>,
    /// Enclosing route. `None` only for the root.
    pub parent: Option<RouteId>,
    /// Child routes keyed by name.
    pub routes: BTreeMap<String, RouteId>,
    /// Actions keyed by name.
    pub actions: BTreeMap<String, ActionId>,
    /// Diagnostic identifier derived from ancestry (root is `""`,
    /// children are `<parent>/<name>`). Only used in error messages.
    pub tree_path: String,
}

/// A leaf node: one or more method handlers sharing a single derived path.
pub struct ActionNode<H> {
    /// Unique within the owning route's `actions` mapping.
    pub name: String,
    /// Owning route, fixed at insertion.
    pub route: RouteId,
    /// Literal path segment this action contributes. Defaulted during
    /// annotation: empty for the configured index action, else `name`.
    pub path_part: Option<String>,
    /// Explicit override before the build, computed result after.
    pub path: Option<String>,
    /// Ordered parameter names, each emitted as `/:name`. An empty list
    /// is normalized to `None` during annotation.
    pub params: Option<Vec<String>>,
    /// Reference to the action whose path this one chains onto. Leading
    /// `../` tokens walk up one route each before the remaining name is
    /// resolved. Defaulted during annotation.
    pub parent_action: Option<String>,
    /// Handler per lowercase HTTP method name.
    pub handlers: BTreeMap<String, H>,
    /// Diagnostic identifier, `<route tree_path>/<name>`.
    pub tree_path: String,
}

impl<H> fmt::Debug for ActionNode<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionNode")
            .field("name", &self.name)
            .field("route", &self.route)
            .field("path_part", &self.path_part)
            .field("path", &self.path)
            .field("params", &self.params)
            .field("parent_action", &self.parent_action)
            .field("methods", &self.handlers.keys().collect::<Vec<_>>())
            .field("tree_path", &self.tree_path)
            .finish()
    }
}

/// Builder for inserting an action into a [`RouteTree`].
///
/// Everything is optional; unset fields are defaulted during annotation
/// when the tree is mounted.
///
/// ```
/// use routree::Action;
///
/// let action = Action::new()
///     .param("id")
///     .on("get", "edit_user");
/// # let _: Action<&str> = action;
/// ```
pub struct Action<H> {
    path_part: Option<String>,
    path: Option<String>,
    params: Option<Vec<String>>,
    parent_action: Option<String>,
    handlers: BTreeMap<String, H>,
}

impl<H> Action<H> {
    pub fn new() -> Self {
        Self {
            path_part: None,
            path: None,
            params: None,
            parent_action: None,
            handlers: BTreeMap::new(),
        }
    }

    /// Overrides the literal segment this action contributes. An empty
    /// string means "contribute nothing".
    pub fn path_part(mut self, part: impl Into<String>) -> Self {
        self.path_part = Some(part.into());
        self
    }

    /// Sets a fully explicit path, bypassing derivation entirely.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Appends a single parameter name. Equivalent to a one-element
    /// [`params`](Self::params) list.
    pub fn param(mut self, name: impl Into<String>) -> Self {
        self.params.get_or_insert_with(Vec::new).push(name.into());
        self
    }

    /// Sets the ordered parameter list. An empty list behaves exactly
    /// like never calling this.
    pub fn params<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Chains this action's path onto another action's computed path.
    /// Prefix with `../` (repeatable) to resolve the name in an
    /// enclosing route.
    pub fn parent_action(mut self, reference: impl Into<String>) -> Self {
        self.parent_action = Some(reference.into());
        self
    }

    /// Attaches a handler for an HTTP method. The method name is stored
    /// lowercase.
    pub fn on(mut self, method: impl Into<String>, handler: H) -> Self {
        self.handlers.insert(method.into().to_lowercase(), handler);
        self
    }
}

impl<H> Default for Action<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// The route/action tree. `H` is the host framework's handler type; the
/// core never looks inside it.
///
/// Nodes live in two arenas and refer to each other by id, keeping
/// ownership strictly top-down. Sibling maps are `BTreeMap`s so every
/// traversal is deterministic.
pub struct RouteTree<H> {
    routes: Vec<RouteNode>,
    actions: Vec<ActionNode<H>>,
    root: RouteId,
}

impl<H> RouteTree<H> {
    /// Creates a tree holding only the root route.
    pub fn new() -> Self {
        let root = RouteNode {
            name: String::new(),
            path_part: None,
            path: None,
            parent: None,
            routes: BTreeMap::new(),
            actions: BTreeMap::new(),
            tree_path: String::new(),
        };
        Self {
            routes: vec![root],
            actions: Vec::new(),
            root: RouteId(0),
        }
    }

    pub fn root(&self) -> RouteId {
        self.root
    }

    /// Inserts a child route under `parent` and returns its id. If a
    /// child of that name already exists, its id is returned instead
    /// (loaders may discover a folder twice).
    pub fn add_route(&mut self, parent: RouteId, name: impl Into<String>) -> RouteId {
        let name = name.into();
        if let Some(&existing) = self.route(parent).routes.get(&name) {
            return existing;
        }
        let id = RouteId(self.routes.len());
        self.routes.push(RouteNode {
            name: name.clone(),
            path_part: None,
            path: None,
            parent: Some(parent),
            routes: BTreeMap::new(),
            actions: BTreeMap::new(),
            tree_path: String::new(),
        });
        self.route_mut(parent).routes.insert(name, id);
        id
    }

    /// Inserts an action under `route` and returns its id.
    pub fn add_action(
        &mut self,
        route: RouteId,
        name: impl Into<String>,
        action: Action<H>,
    ) -> ActionId {
        let name = name.into();
        let id = ActionId(self.actions.len());
        self.actions.push(ActionNode {
            name: name.clone(),
            route,
            path_part: action.path_part,
            path: action.path,
            params: action.params,
            parent_action: action.parent_action,
            handlers: action.handlers,
            tree_path: String::new(),
        });
        self.route_mut(route).actions.insert(name, id);
        id
    }

    pub fn route(&self, id: RouteId) -> &RouteNode {
        &self.routes[id.0]
    }

    pub fn route_mut(&mut self, id: RouteId) -> &mut RouteNode {
        &mut self.routes[id.0]
    }

    pub fn action(&self, id: ActionId) -> &ActionNode<H> {
        &self.actions[id.0]
    }

    pub fn action_mut(&mut self, id: ActionId) -> &mut ActionNode<H> {
        &mut self.actions[id.0]
    }

    /// Looks up a direct child route by name.
    pub fn child(&self, route: RouteId, name: &str) -> Option<RouteId> {
        self.route(route).routes.get(name).copied()
    }

    /// Looks up an action of `route` by name.
    pub fn action_id(&self, route: RouteId, name: &str) -> Option<ActionId> {
        self.route(route).actions.get(name).copied()
    }

    /// Convenience lookup returning the node itself.
    pub fn find_action(&self, route: RouteId, name: &str) -> Option<&ActionNode<H>> {
        self.action_id(route, name).map(|id| self.action(id))
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// All routes, depth-first pre-order, children in name order.
    ///
    /// Implemented with an explicit stack so deep trees cannot blow the
    /// call stack.
    pub fn routes_preorder(&self) -> Vec<RouteId> {
        let mut out = Vec::with_capacity(self.routes.len());
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            out.push(id);
            // reversed so the stack pops children in name order
            for &child in self.route(id).routes.values().rev() {
                stack.push(child);
            }
        }
        out
    }

    /// All actions in the pre-order of their routes, each route's
    /// actions in name order.
    pub fn actions_preorder(&self) -> Vec<ActionId> {
        self.routes_preorder()
            .into_iter()
            .flat_map(|id| self.route(id).actions.values().copied().collect::<Vec<_>>())
            .collect()
    }
}

impl<H> Default for RouteTree<H> {
    fn default() -> Self {
        Self::new()
    }
}
