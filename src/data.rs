//! Page-embedded input: people and configuration.
//!
//! The host page ships its data as JSON inside `<script>` elements:
//! `#family-data` holds an array of people, `#tree-config` an optional
//! configuration object.

use log::{info, warn};
use serde_json::Value;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::components::family_tree::{Person, TreeConfig};
use crate::error::DataError;

/// Id of the script element holding the people array.
pub const PEOPLE_ELEMENT: &str = "family-data";
/// Id of the script element holding the configuration object.
pub const CONFIG_ELEMENT: &str = "tree-config";

/// Parses a JSON array of people.
///
/// Entries that are not valid person records (for example, no numeric `id`)
/// are skipped with a warning instead of failing the whole dataset.
pub fn parse_people(json: &str) -> Result<Vec<Person>, DataError> {
	let Value::Array(entries) = serde_json::from_str::<Value>(json)? else {
		return Err(DataError::NotAnArray);
	};

	let mut people = Vec::with_capacity(entries.len());
	for (i, entry) in entries.into_iter().enumerate() {
		match serde_json::from_value::<Person>(entry) {
			Ok(person) => people.push(person),
			Err(e) => warn!("family-tree: skipping person #{}: {}", i, e),
		}
	}
	Ok(people)
}

/// Parses a configuration object. Unusable zoom limits are repaired.
pub fn parse_config(json: &str) -> Result<TreeConfig, DataError> {
	let mut config: TreeConfig = serde_json::from_str(json)?;
	let view = config.view.clone().sanitized();
	if view != config.view {
		warn!("family-tree: adjusted view config {:?} to {:?}", config.view, view);
		config.view = view;
	}
	Ok(config)
}

fn script_text(id: &'static str) -> Result<String, DataError> {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or(DataError::NoWindow)?;
	let element = document
		.get_element_by_id(id)
		.ok_or(DataError::MissingElement(id))?;
	let script: HtmlScriptElement = element
		.dyn_into()
		.map_err(|_| DataError::NotAScript(id))?;
	Ok(script.text().unwrap_or_default())
}

/// Loads people from the `#family-data` element.
pub fn load_people() -> Result<Vec<Person>, DataError> {
	let people = parse_people(&script_text(PEOPLE_ELEMENT)?)?;
	info!("family-tree: loaded {} people", people.len());
	Ok(people)
}

/// Loads configuration from the `#tree-config` element.
///
/// A missing element is not an error; it means "use the defaults".
pub fn load_config() -> Result<TreeConfig, DataError> {
	match script_text(CONFIG_ELEMENT) {
		Ok(text) if text.trim().is_empty() => Ok(TreeConfig::default()),
		Ok(text) => parse_config(&text),
		Err(DataError::MissingElement(_)) => Ok(TreeConfig::default()),
		Err(e) => Err(e),
	}
}
