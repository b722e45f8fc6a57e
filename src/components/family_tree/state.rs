//! View state for the tree canvas.
//!
//! Holds the current graph snapshot together with the pan/zoom transform.
//! The snapshot is replaced wholesale on every rebuild; the view is refitted
//! so the new tree is fully visible.

use super::config::TreeConfig;
use super::graph::{FamilyGraph, build_family_graph};
use super::layout::LayoutEngine;
use super::types::Person;

/// Pan and zoom transform: `screen = world * k + (x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

/// Tracks an in-progress canvas pan operation.
#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

pub struct TreeViewState {
	pub graph: FamilyGraph,
	pub config: TreeConfig,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
	dirty: bool,
}

impl TreeViewState {
	pub fn new(mut config: TreeConfig, width: f64, height: f64) -> Self {
		config.view = config.view.sanitized();
		Self {
			graph: FamilyGraph::default(),
			config,
			transform: ViewTransform::default(),
			pan: PanState::default(),
			width,
			height,
			dirty: true,
		}
	}

	/// Runs the full pipeline on `people` and swaps in the result.
	pub fn rebuild(&mut self, people: &[Person], engine: &dyn LayoutEngine) {
		self.graph = build_family_graph(people, &self.config.layout, engine);
		self.fit_to_view();
	}

	/// Scales and centers the view so the whole tree fits with padding.
	pub fn fit_to_view(&mut self) {
		self.dirty = true;
		let Some((min, max)) = self.graph.bounds(&self.config.layout) else {
			self.transform = ViewTransform {
				x: self.width / 2.0,
				y: self.height / 2.0,
				k: 1.0,
			};
			return;
		};

		let view = &self.config.view;
		let (bw, bh) = ((max.x - min.x) as f64, (max.y - min.y) as f64);
		let usable = 1.0 - 2.0 * view.fit_padding;
		let k = (self.width * usable / bw.max(1.0))
			.min(self.height * usable / bh.max(1.0))
			.clamp(view.min_zoom, view.max_zoom);

		let (cx, cy) = (
			(min.x as f64 + max.x as f64) / 2.0,
			(min.y as f64 + max.y as f64) / 2.0,
		);
		self.transform = ViewTransform {
			x: self.width / 2.0 - cx * k,
			y: self.height / 2.0 - cy * k,
			k,
		};
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Zooms by `factor` while keeping the world point under `(sx, sy)` fixed.
	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let view = &self.config.view;
		let new_k = (self.transform.k * factor).clamp(view.min_zoom, view.max_zoom);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
		self.dirty = true;
	}

	/// One wheel notch; positive `delta_y` zooms out.
	pub fn wheel(&mut self, sx: f64, sy: f64, delta_y: f64) {
		let step = self.config.view.zoom_step;
		let factor = if delta_y > 0.0 { 1.0 / step } else { step };
		self.zoom_at(sx, sy, factor);
	}

	pub fn begin_pan(&mut self, sx: f64, sy: f64) {
		self.pan = PanState {
			active: true,
			start_x: sx,
			start_y: sy,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	pub fn pan_to(&mut self, sx: f64, sy: f64) {
		if !self.pan.active {
			return;
		}
		self.transform.x = self.pan.transform_start_x + (sx - self.pan.start_x);
		self.transform.y = self.pan.transform_start_y + (sy - self.pan.start_y);
		self.dirty = true;
	}

	pub fn end_pan(&mut self) {
		self.pan.active = false;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.dirty = true;
	}

	/// Returns whether a redraw is pending and clears the flag.
	pub fn take_dirty(&mut self) -> bool {
		std::mem::take(&mut self.dirty)
	}
}
