//! family-tree-graph: interactive family tree visualization.
//!
//! This crate provides a WASM-based component that pairs parents into joint
//! nodes, lays the tree out top-down with dagre, and renders it on a canvas
//! with pan and zoom.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};

pub mod components;
pub mod data;
pub mod error;

pub use components::family_tree::{
	FamilyGraph, FamilyTreeCanvas, Gender, LayoutConfig, Person, TreeConfig, build_family_graph,
};
pub use error::DataError;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("family-tree: logging initialized");
}

/// Main application component.
/// Loads people and configuration from the DOM and renders the tree.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let people = data::load_people().unwrap_or_else(|e| {
		warn!("family-tree: no people loaded: {}", e);
		Vec::new()
	});
	let config = data::load_config().unwrap_or_else(|e| {
		warn!("family-tree: using default configuration: {}", e);
		TreeConfig::default()
	});
	let people = Signal::derive(move || people.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Family Tree" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-graph">
			<FamilyTreeCanvas data=people config=config fullscreen=true />
			<div class="graph-overlay">
				<h1>"Family Tree"</h1>
				<p class="subtitle">"Drag to pan. Scroll to zoom. Double-click to fit."</p>
			</div>
		</div>
	}
}
