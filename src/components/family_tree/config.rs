//! Tunable layout and view settings.
//!
//! Every field has a default, so a partial JSON object (or none at all) is a
//! valid configuration.

use serde::Deserialize;

/// Flow direction of generations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum LayoutDirection {
	#[default]
	#[serde(rename = "TB")]
	TopBottom,
	#[serde(rename = "BT")]
	BottomTop,
	#[serde(rename = "LR")]
	LeftRight,
	#[serde(rename = "RL")]
	RightLeft,
}

impl LayoutDirection {
	/// The `rankdir` value understood by dagre.
	pub fn rankdir(self) -> &'static str {
		match self {
			LayoutDirection::TopBottom => "tb",
			LayoutDirection::BottomTop => "bt",
			LayoutDirection::LeftRight => "lr",
			LayoutDirection::RightLeft => "rl",
		}
	}
}

/// Node geometry and spacing handed to the layout engine.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
	/// Width of every node card in world units.
	pub node_width: f32,
	/// Height of every node card in world units.
	pub node_height: f32,
	/// Gap between nodes on the same rank.
	pub node_spacing: f32,
	/// Gap between ranks (generations).
	pub rank_spacing: f32,
	pub margin: f32,
	pub direction: LayoutDirection,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			node_width: 200.0,
			node_height: 200.0,
			node_spacing: 50.0,
			rank_spacing: 50.0,
			margin: 8.0,
			direction: LayoutDirection::TopBottom,
		}
	}
}

/// Pan/zoom limits for the canvas.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
	pub min_zoom: f64,
	pub max_zoom: f64,
	/// Fraction of the viewport left empty around the tree when fitting.
	pub fit_padding: f64,
	/// Multiplicative zoom change per wheel notch.
	pub zoom_step: f64,
}

impl Default for ViewConfig {
	fn default() -> Self {
		Self {
			min_zoom: 0.1,
			max_zoom: 2.0,
			fit_padding: 0.1,
			zoom_step: 1.1,
		}
	}
}

impl ViewConfig {
	/// Repairs limits that zoom clamping cannot work with.
	///
	/// Non-finite or non-positive values fall back to their defaults and
	/// inverted zoom bounds are swapped. A padding that leaves no room for the
	/// tree is reset.
	pub fn sanitized(self) -> Self {
		let defaults = Self::default();
		let positive = |value: f64, fallback: f64| {
			if value.is_finite() && value > 0.0 { value } else { fallback }
		};

		let mut min_zoom = positive(self.min_zoom, defaults.min_zoom);
		let mut max_zoom = positive(self.max_zoom, defaults.max_zoom);
		if min_zoom > max_zoom {
			std::mem::swap(&mut min_zoom, &mut max_zoom);
		}
		let fit_padding = if (0.0..0.5).contains(&self.fit_padding) {
			self.fit_padding
		} else {
			defaults.fit_padding
		};

		Self {
			min_zoom,
			max_zoom,
			fit_padding,
			zoom_step: positive(self.zoom_step, defaults.zoom_step),
		}
	}
}

/// Complete component configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
	pub layout: LayoutConfig,
	pub view: ViewConfig,
	/// Theme preset name, see [`Theme::by_name`](super::theme::Theme::by_name).
	pub theme: String,
}

impl Default for TreeConfig {
	fn default() -> Self {
		Self {
			layout: LayoutConfig::default(),
			view: ViewConfig::default(),
			theme: "default".to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_is_default() {
		let config: TreeConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config, TreeConfig::default());
	}

	#[test]
	fn partial_layout_keeps_other_defaults() {
		let config: TreeConfig =
			serde_json::from_str(r#"{"layout": {"node_width": 120, "direction": "LR"}}"#).unwrap();
		assert_eq!(config.layout.node_width, 120.0);
		assert_eq!(config.layout.node_height, 200.0);
		assert_eq!(config.layout.direction, LayoutDirection::LeftRight);
		assert_eq!(config.layout.direction.rankdir(), "lr");
		assert_eq!(config.view, ViewConfig::default());
	}

	#[test]
	fn inverted_zoom_bounds_are_swapped() {
		let view = ViewConfig {
			min_zoom: 5.0,
			max_zoom: 1.0,
			..ViewConfig::default()
		}
		.sanitized();
		assert_eq!((view.min_zoom, view.max_zoom), (1.0, 5.0));
	}

	#[test]
	fn unusable_view_values_fall_back() {
		let view = ViewConfig {
			min_zoom: f64::NAN,
			max_zoom: f64::INFINITY,
			fit_padding: 0.7,
			zoom_step: -2.0,
		}
		.sanitized();
		assert_eq!(view, ViewConfig::default());
		assert_eq!(ViewConfig::default().sanitized(), ViewConfig::default());
	}
}
