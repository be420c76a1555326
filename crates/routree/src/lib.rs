//! # routree
//!
//! Builds a URL routing table from a hierarchical tree of **routes**
//! (branches) and **actions** (leaf handler groups), then registers
//! every resulting `(method, path, handler)` triple with a host
//! framework through the [`Dispatch`] seam.
//!
//! Paths are derived, not declared: each action chains onto another
//! action's computed path via its `parent_action` reference — its own
//! route's index action by default, or an ancestor route's action via
//! `../` prefixes — then appends its `/:param` segments and its own
//! literal segment. An `edit` action can inherit a sibling `view`
//! action's `/:id` segment without re-declaring it. Per-route
//! topological ordering guarantees a parent's path exists before any
//! dependent needs it; registrations are emitted literal-segments-first
//! so parameterized paths never shadow specific ones.
//!
//! The tree is populated by an external loader (or by hand, as below);
//! this crate never touches the filesystem and never runs a handler.
//!
//! ## Example
//!
//! ```
//! use routree::{mount, Action, Dispatch, MountOptions, RouteTree};
//!
//! struct Recorder(Vec<(String, String)>);
//!
//! impl Dispatch<&'static str> for Recorder {
//!     fn register(&mut self, method: &str, path: &str, _handler: &'static str) {
//!         self.0.push((method.to_string(), path.to_string()));
//!     }
//! }
//!
//! let mut tree = RouteTree::new();
//! tree.add_action(tree.root(), "index", Action::new().on("get", "home"));
//! let users = tree.add_route(tree.root(), "users");
//! tree.add_action(users, "index", Action::new().on("get", "list_users"));
//! tree.add_action(users, "edit", Action::new().param("id").on("get", "edit_user"));
//!
//! let mut recorder = Recorder(Vec::new());
//! mount(&mut tree, &mut recorder, &mut MountOptions::new()).unwrap();
//!
//! let paths: Vec<&str> = recorder.0.iter().map(|(_, p)| p.as_str()).collect();
//! assert_eq!(paths, vec!["/", "/users", "/users/:id/edit"]);
//! ```

mod error;
mod hooks;
mod mount;
mod order;
mod registrar;

pub mod config;
pub mod path;
pub mod tree;

pub use config::{Config, LoadConfig};
pub use error::MountError;
pub use hooks::{ActionHook, Hooks, RouteHook, TreeHook};
pub use mount::{mount, LoggerFn, MountOptions, WrapperFn};
pub use path::compare_paths;
pub use registrar::Dispatch;
pub use tree::{Action, ActionId, ActionNode, RouteId, RouteNode, RouteTree};
