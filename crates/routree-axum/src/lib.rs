//! # routree-axum
//!
//! Mounts a [`routree`] routing table onto an [`axum::Router`].
//!
//! Handlers are stored in the tree as [`MethodRouter`]s (built with
//! `axum::routing::get`, `post`, ...), so the method key on the action
//! selects *when* a handler is registered while the `MethodRouter`
//! carries the actual binding. Registrations arrive from the core
//! already sorted literal-segments-first; axum matches by specificity
//! on its own, so the order is belt-and-braces here, but adapters for
//! first-match-wins frameworks rely on it.
//!
//! Registering two actions onto the same path with the same method
//! panics inside axum — the core deliberately passes duplicates
//! through instead of hiding them.
//!
//! ## Example
//!
//! ```
//! use axum::routing::get;
//! use routree::{Action, MountOptions, RouteTree};
//! use routree_axum::mount_router;
//!
//! async fn home() -> &'static str {
//!     "home"
//! }
//!
//! async fn edit_user() -> &'static str {
//!     "edit"
//! }
//!
//! let mut tree = RouteTree::new();
//! tree.add_action(tree.root(), "index", Action::new().on("get", get(home)));
//! let users = tree.add_route(tree.root(), "users");
//! tree.add_action(users, "index", Action::new().on("get", get(home)));
//! tree.add_action(users, "edit", Action::new().param("id").on("get", get(edit_user)));
//!
//! let router: axum::Router = mount_router(&mut tree, &mut MountOptions::new()).unwrap();
//! # let _ = router;
//! ```

use axum::routing::MethodRouter;
use axum::Router;
use routree::{mount, Dispatch, MountError, MountOptions, RouteTree};
use tracing::warn;

/// [`Dispatch`] implementation that folds registrations into an
/// [`axum::Router`].
pub struct AxumDispatch<S = ()> {
    router: Router<S>,
}

impl<S> AxumDispatch<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            router: Router::new(),
        }
    }

    /// Consumes the dispatcher and returns the assembled router.
    pub fn into_router(self) -> Router<S> {
        self.router
    }
}

impl<S> Default for AxumDispatch<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Dispatch<MethodRouter<S>> for AxumDispatch<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn register(&mut self, method: &str, path: &str, handler: MethodRouter<S>) {
        if !is_known_method(method) {
            warn!(%method, %path, "skipping registration for unknown HTTP method");
            return;
        }
        let router = std::mem::take(&mut self.router);
        self.router = router.route(path, handler);
    }
}

/// Builds the routing table for `tree` and returns the resulting
/// [`axum::Router`]. Shorthand for driving [`mount`] with an
/// [`AxumDispatch`].
pub fn mount_router<S>(
    tree: &mut RouteTree<MethodRouter<S>>,
    options: &mut MountOptions<MethodRouter<S>>,
) -> Result<Router<S>, MountError>
where
    S: Clone + Send + Sync + 'static,
{
    let mut dispatch = AxumDispatch::new();
    mount(tree, &mut dispatch, options)?;
    Ok(dispatch.into_router())
}

fn is_known_method(method: &str) -> bool {
    matches!(
        method,
        "get" | "post" | "put" | "delete" | "patch" | "head" | "options" | "trace"
    )
}
