// File: src/path/mod.rs
// Purpose: Path derivation for a single action

mod precedence;

pub use precedence::compare_paths;

use tracing::trace;

use crate::config::Config;
use crate::error::MountError;
use crate::tree::{ActionId, RouteTree};

/// Computes the path for one action.
///
/// Callers must have computed the paths of everything the action chains
/// onto: same-route parents via the dependency ordering, ancestor-route
/// parents via pre-order route traversal. The result is returned, not
/// stored — the mount loop owns the write-back.
pub(crate) fn build_path<H>(
    tree: &RouteTree<H>,
    id: ActionId,
    config: &Config,
) -> Result<String, MountError> {
    let action = tree.action(id);

    // hooks (or the loader) may have resolved it already
    if let Some(path) = &action.path {
        return Ok(path.clone());
    }

    let route = tree.route(action.route);
    let reference = action
        .parent_action
        .clone()
        .unwrap_or_else(|| config.index_action.clone());
    let (hops, residual) = split_reference(&reference);
    let crossed = hops > 0;

    let mut path = if !crossed {
        // same-route chain: base is the parent action's computed path
        let parent_id = route.actions.get(residual).copied().ok_or_else(|| {
            MountError::MissingParentAction {
                reference: reference.clone(),
                tree_path: action.tree_path.clone(),
            }
        })?;
        tree.action(parent_id).path.clone().unwrap_or_default()
    } else if let Some(explicit) = &route.path {
        // the route override replaces both the parent lookup and the
        // route's own path_part
        explicit.clone()
    } else {
        let mut cursor = Some(action.route);
        for _ in 0..hops {
            cursor = cursor.and_then(|c| tree.route(c).parent);
        }
        let mut base = match cursor {
            // ran past the root: nothing left to chain onto
            None => String::new(),
            Some(landing) => {
                let parent_id =
                    tree.route(landing).actions.get(residual).copied().ok_or_else(|| {
                        MountError::MissingParentAction {
                            reference: reference.clone(),
                            tree_path: action.tree_path.clone(),
                        }
                    })?;
                tree.action(parent_id).path.clone().unwrap_or_default()
            }
        };
        if let Some(part) = route.path_part.as_deref() {
            if !part.is_empty() {
                push_segment(&mut base, part);
            }
        }
        base
    };

    if let Some(params) = &action.params {
        for param in params {
            push_segment(&mut path, &format!(":{param}"));
        }
    }

    match action.path_part.as_deref() {
        Some(part) if !part.is_empty() => push_segment(&mut path, part),
        _ => {
            if config.end_slash {
                if !path.ends_with('/') {
                    path.push('/');
                }
            } else if path.is_empty() {
                path.push('/');
            }
        }
    }

    trace!(action = %action.tree_path, %path, "derived path");
    Ok(path)
}

/// Splits a parent-action reference into its `../` hop count and the
/// residual action name.
fn split_reference(reference: &str) -> (usize, &str) {
    let mut rest = reference;
    let mut hops = 0;
    while let Some(stripped) = rest.strip_prefix("../") {
        hops += 1;
        rest = stripped;
    }
    (hops, rest)
}

/// Appends one segment, never doubling the separator.
fn push_segment(path: &mut String, segment: &str) {
    if !path.ends_with('/') {
        path.push('/');
    }
    path.push_str(segment);
}
