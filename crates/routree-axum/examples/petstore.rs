//! Tree-driven routing demo: a little pet store.
//!
//! Run with `cargo run --example petstore`, then try:
//!   GET  /           -> home
//!   GET  /pets       -> listing
//!   GET  /pets/new   -> form
//!   GET  /pets/42    -> one pet
//!   POST /pets       -> create

use anyhow::Result;
use axum::extract::Path;
use axum::routing::{get, post};
use routree::{Action, Config, MountOptions, RouteTree};
use routree_axum::mount_router;

async fn home() -> &'static str {
    "pet store"
}

async fn list_pets() -> &'static str {
    "all the pets"
}

async fn new_pet_form() -> &'static str {
    "describe your pet"
}

async fn show_pet(Path(id): Path<String>) -> String {
    format!("pet #{id}")
}

async fn create_pet() -> &'static str {
    "pet created"
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::load_default().unwrap_or_else(|e| {
        eprintln!("Failed to load config: {}, using defaults", e);
        Config::default()
    });

    let mut tree = RouteTree::new();
    tree.add_action(tree.root(), "index", Action::new().on("get", get(home)));

    let pets = tree.add_route(tree.root(), "pets");
    tree.add_action(
        pets,
        "index",
        Action::new().on("get", get(list_pets)).on("post", post(create_pet)),
    );
    tree.add_action(pets, "new", Action::new().on("get", get(new_pet_form)));
    tree.add_action(
        pets,
        "view",
        Action::new().path_part("").param("id").on("get", get(show_pet)),
    );

    let mut options = MountOptions::with_config(config).logger(|message| println!("{message}"));
    let router = mount_router(&mut tree, &mut options)?;

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    println!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
