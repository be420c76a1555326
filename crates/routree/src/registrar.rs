// File: src/registrar.rs
// Purpose: Sorted emission of (method, path, handler) registrations

use tracing::debug;

use crate::mount::MountOptions;
use crate::path::compare_paths;
use crate::tree::RouteTree;

/// The seam between the core and the host framework.
///
/// An adapter receives every registration in the sorted order produced
/// by [`compare_paths`] — literal segments before parameters — and
/// never sees the same `(method, path)` pair twice unless the tree
/// legitimately produced a duplicate.
pub trait Dispatch<H> {
    fn register(&mut self, method: &str, path: &str, handler: H);
}

/// Collects every action pre-order, stable-sorts by path precedence and
/// emits one registration per configured method with a handler.
pub(crate) fn register_all<H, D>(
    tree: &RouteTree<H>,
    dispatcher: &mut D,
    options: &mut MountOptions<H>,
) where
    H: Clone,
    D: Dispatch<H>,
{
    let mut ids = tree.actions_preorder();
    ids.sort_by(|&a, &b| {
        compare_paths(
            tree.action(a).path.as_deref().unwrap_or(""),
            tree.action(b).path.as_deref().unwrap_or(""),
        )
    });

    for id in ids {
        let action = tree.action(id);
        let Some(path) = action.path.as_deref() else {
            continue;
        };
        for method in &options.config.methods {
            let Some(handler) = action.handlers.get(method) else {
                continue;
            };
            let mut handler = handler.clone();
            if let Some(wrapper) = &mut options.wrapper {
                handler = wrapper(handler, method, action);
            }
            dispatcher.register(method, path, handler);
            debug!(%method, %path, "attached route");
            if let Some(logger) = &mut options.logger {
                logger(&format!("Attached route:\t{method}\t{path}"));
            }
        }
    }
}
