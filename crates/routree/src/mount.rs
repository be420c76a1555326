// File: src/mount.rs
// Purpose: Build orchestration — annotate, hook, resolve, derive, register

use crate::config::Config;
use crate::error::MountError;
use crate::hooks::{run_node_hooks, Hooks};
use crate::order::resolve_order;
use crate::path::build_path;
use crate::registrar::{register_all, Dispatch};
use crate::tree::{ActionNode, RouteTree};
use crate::tree::annotate::annotate;

/// Transforms a handler right before registration. Receives the cloned
/// handler, the lowercase method name and the action it belongs to.
pub type WrapperFn<H> = Box<dyn FnMut(H, &str, &ActionNode<H>) -> H>;

/// Receives one human-readable message per successful registration.
pub type LoggerFn = Box<dyn FnMut(&str)>;

/// Everything a mount consumes besides the tree: the data-level
/// [`Config`] plus the callback surface that cannot live in a file.
pub struct MountOptions<H> {
    pub config: Config,
    pub hooks: Hooks<H>,
    pub wrapper: Option<WrapperFn<H>>,
    pub logger: Option<LoggerFn>,
}

impl<H> MountOptions<H> {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            hooks: Hooks::new(),
            wrapper: None,
            logger: None,
        }
    }

    pub fn hooks(mut self, hooks: Hooks<H>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn wrapper(mut self, wrapper: impl FnMut(H, &str, &ActionNode<H>) -> H + 'static) -> Self {
        self.wrapper = Some(Box::new(wrapper));
        self
    }

    pub fn logger(mut self, logger: impl FnMut(&str) + 'static) -> Self {
        self.logger = Some(Box::new(logger));
        self
    }
}

impl<H> Default for MountOptions<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the routing table for `tree` and registers every resulting
/// `(method, path, handler)` with `dispatcher`.
///
/// Phases, in order: annotate → before-hooks → per-route dependency
/// ordering and path derivation (routes pre-order, each route's actions
/// in topological order) → after-hooks → precedence sort → emission.
/// Runs synchronously to completion or returns the first error, in
/// which case nothing has been registered and the tree is left
/// partially annotated — rebuild it before trying again. Re-mounting a
/// successfully mounted tree is likewise unsupported: computed paths
/// are cached on the nodes.
pub fn mount<H, D>(
    tree: &mut RouteTree<H>,
    dispatcher: &mut D,
    options: &mut MountOptions<H>,
) -> Result<(), MountError>
where
    H: Clone,
    D: Dispatch<H>,
{
    annotate(tree, &options.config.index_action);

    if let Some(hook) = &mut options.hooks.before_tree {
        hook(tree);
    }
    run_node_hooks(
        tree,
        &mut options.hooks.before_route,
        &mut options.hooks.before_action,
    );

    for route_id in tree.routes_preorder() {
        for action_id in resolve_order(tree, route_id)? {
            let path = build_path(tree, action_id, &options.config)?;
            tree.action_mut(action_id).path = Some(path);
        }
    }

    run_node_hooks(
        tree,
        &mut options.hooks.after_route,
        &mut options.hooks.after_action,
    );
    if let Some(hook) = &mut options.hooks.after_tree {
        hook(tree);
    }

    register_all(tree, dispatcher, options);
    Ok(())
}
