//! Errors raised while loading page-embedded data.

use thiserror::Error;

/// Failure to read people or configuration from the host page.
///
/// None of these are fatal: the app logs them and carries on with an empty
/// tree or the default configuration.
#[derive(Debug, Error)]
pub enum DataError {
	#[error("no browser window or document available")]
	NoWindow,
	#[error("element #{0} not found")]
	MissingElement(&'static str),
	#[error("element #{0} is not a <script> element")]
	NotAScript(&'static str),
	#[error("expected a JSON array of people")]
	NotAnArray,
	#[error("invalid JSON: {0}")]
	Parse(#[from] serde_json::Error),
}
