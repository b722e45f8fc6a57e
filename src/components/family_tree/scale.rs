//! Zoom-dependent sizes for tree visuals.
//!
//! Cards are drawn in world space and grow with zoom. Strokes and handles
//! would vanish or turn into blobs if they did the same, so each gets a
//! [`ScaleBehavior`] that says how its size reacts to the zoom factor `k`.

/// How a visual size reacts to zoom.
#[derive(Clone, Debug, PartialEq)]
pub enum ScaleBehavior {
	/// Fixed world size; grows on screen when zooming in.
	World,
	/// Fixed pixel size on screen.
	Screen,
	/// World size kept within `min_screen..=max_screen` pixels.
	Clamped { min_screen: f64, max_screen: f64 },
}

impl ScaleBehavior {
	/// World-space size for `base` at zoom `k`.
	pub fn apply(&self, base: f64, k: f64) -> f64 {
		match self {
			ScaleBehavior::World => base,
			ScaleBehavior::Screen => base / k,
			ScaleBehavior::Clamped {
				min_screen,
				max_screen,
			} => base.clamp(min_screen / k, max_screen / k),
		}
	}
}

/// A base size paired with its scaling rule.
#[derive(Clone, Debug, PartialEq)]
pub struct Scaled {
	pub base: f64,
	pub behavior: ScaleBehavior,
}

impl Scaled {
	pub const fn new(base: f64, behavior: ScaleBehavior) -> Self {
		Self { base, behavior }
	}

	pub fn at(&self, k: f64) -> f64 {
		self.behavior.apply(self.base, k)
	}
}

#[derive(Clone, Debug)]
pub struct ScaleConfig {
	pub edge_width: Scaled,
	pub border_width: Scaled,
	pub handle_radius: Scaled,
	/// Name font size in world units.
	pub label_size: f64,
	/// Labels smaller than this on screen are not drawn.
	pub label_min_screen: f64,
}

impl Default for ScaleConfig {
	fn default() -> Self {
		Self {
			edge_width: Scaled::new(1.5, ScaleBehavior::Screen),
			border_width: Scaled::new(1.0, ScaleBehavior::Screen),
			handle_radius: Scaled::new(
				4.0,
				ScaleBehavior::Clamped {
					min_screen: 2.5,
					max_screen: 8.0,
				},
			),
			label_size: 16.0,
			label_min_screen: 5.0,
		}
	}
}

/// Sizes resolved for one zoom level, in world space.
///
/// Built once per frame and passed to the drawing functions.
#[derive(Clone, Debug)]
pub struct ScaledValues {
	pub edge_width: f64,
	pub border_width: f64,
	pub handle_radius: f64,
	pub label_font: String,
	pub show_labels: bool,
}

impl ScaledValues {
	pub fn new(config: &ScaleConfig, k: f64) -> Self {
		Self {
			edge_width: config.edge_width.at(k),
			border_width: config.border_width.at(k),
			handle_radius: config.handle_radius.at(k),
			label_font: format!("{}px sans-serif", config.label_size),
			show_labels: config.label_size * k >= config.label_min_screen,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn screen_sizes_counter_zoom() {
		assert_eq!(ScaleBehavior::Screen.apply(2.0, 4.0), 0.5);
		assert_eq!(ScaleBehavior::World.apply(2.0, 4.0), 2.0);
	}

	#[test]
	fn clamped_sizes_respect_pixel_bounds() {
		let clamp = ScaleBehavior::Clamped {
			min_screen: 2.0,
			max_screen: 8.0,
		};
		// 4 world units at k=4 would be 16px, capped to 8px = 2 world units.
		assert_eq!(clamp.apply(4.0, 4.0), 2.0);
		// At k=0.25 it would be 1px, raised to 2px = 8 world units.
		assert_eq!(clamp.apply(4.0, 0.25), 8.0);
		assert_eq!(clamp.apply(4.0, 1.0), 4.0);
	}

	#[test]
	fn labels_hide_when_zoomed_far_out() {
		let config = ScaleConfig::default();
		assert!(ScaledValues::new(&config, 1.0).show_labels);
		assert!(!ScaledValues::new(&config, 0.1).show_labels);
	}
}
