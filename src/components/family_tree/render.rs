//! Canvas rendering for the family tree.
//!
//! Drawing order:
//! 1. Background (screen space)
//! 2. Smooth-step connectors (world space)
//! 3. Node cards with person boxes, names and connection handles

use std::collections::HashMap;
use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::config::{LayoutConfig, LayoutDirection};
use super::graph::PositionedNode;
use super::layout::Point;
use super::pairing::{JointKey, NodeKind};
use super::scale::{ScaleConfig, ScaledValues};
use super::state::TreeViewState;
use super::theme::Theme;
use super::types::Person;

/// Renders the complete tree to the canvas.
pub fn render(
	state: &TreeViewState,
	ctx: &CanvasRenderingContext2d,
	config: &ScaleConfig,
	theme: &Theme,
) {
	let scale = ScaledValues::new(config, state.transform.k);
	let layout = &state.config.layout;

	draw_background(state, ctx, theme);

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);

	draw_edges(state, ctx, layout, &scale, theme);
	for node in &state.graph.nodes {
		draw_node(ctx, node, layout, &scale, theme);
	}

	ctx.restore();
}

fn draw_background(state: &TreeViewState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let background = &theme.background;
	let gradient = background
		.use_gradient
		.then(|| {
			ctx.create_radial_gradient(
				state.width / 2.0,
				state.height / 2.0,
				0.0,
				state.width / 2.0,
				state.height / 2.0,
				state.width.max(state.height) * 0.8,
			)
			.ok()
		})
		.flatten();

	match gradient {
		Some(gradient) => {
			let _ = gradient.add_color_stop(0.0, &background.color_secondary.to_css());
			let _ = gradient.add_color_stop(1.0, &background.color.to_css());
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
		}
		None => ctx.set_fill_style_str(&background.color.to_css()),
	}

	ctx.fill_rect(0.0, 0.0, state.width, state.height);
}

/// Connection points of a card: `(target side, source side)`.
///
/// Incoming edges attach to the side facing the previous generation,
/// outgoing edges to the side facing the next one.
pub fn handle_points(top_left: Point, layout: &LayoutConfig) -> (Point, Point) {
	let (x, y) = (top_left.x, top_left.y);
	let (w, h) = (layout.node_width, layout.node_height);
	let top = Point::new(x + w / 2.0, y);
	let bottom = Point::new(x + w / 2.0, y + h);
	let left = Point::new(x, y + h / 2.0);
	let right = Point::new(x + w, y + h / 2.0);
	match layout.direction {
		LayoutDirection::TopBottom => (top, bottom),
		LayoutDirection::BottomTop => (bottom, top),
		LayoutDirection::LeftRight => (left, right),
		LayoutDirection::RightLeft => (right, left),
	}
}

/// Orthogonal route from `start` to `end` that bends halfway along the
/// rank axis. Returns the corner points including both ends.
pub fn smooth_step_route(start: Point, end: Point, vertical: bool) -> Vec<Point> {
	if vertical {
		let mid = (start.y + end.y) / 2.0;
		vec![start, Point::new(start.x, mid), Point::new(end.x, mid), end]
	} else {
		let mid = (start.x + end.x) / 2.0;
		vec![start, Point::new(mid, start.y), Point::new(mid, end.y), end]
	}
}

fn draw_edges(
	state: &TreeViewState,
	ctx: &CanvasRenderingContext2d,
	layout: &LayoutConfig,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let vertical = matches!(
		layout.direction,
		LayoutDirection::TopBottom | LayoutDirection::BottomTop
	);

	let positions: HashMap<JointKey, Point> = state
		.graph
		.nodes
		.iter()
		.map(|n| (n.node.key, n.position))
		.collect();

	ctx.set_stroke_style_str(&theme.edge.color.to_css());
	ctx.set_line_width(scale.edge_width);

	for edge in &state.graph.edges {
		if edge.is_self_loop() {
			continue;
		}
		let (Some(&source), Some(&target)) =
			(positions.get(&edge.source), positions.get(&edge.target))
		else {
			continue;
		};

		let (_, start) = handle_points(source, layout);
		let (end, _) = handle_points(target, layout);
		let route = smooth_step_route(start, end, vertical);
		stroke_rounded_polyline(ctx, &route, theme.edge.corner_radius);
	}
}

fn stroke_rounded_polyline(ctx: &CanvasRenderingContext2d, points: &[Point], radius: f64) {
	let Some((first, rest)) = points.split_first() else {
		return;
	};
	ctx.begin_path();
	ctx.move_to(first.x as f64, first.y as f64);
	for pair in points.windows(3) {
		let (prev, corner, next) = (pair[0], pair[1], pair[2]);
		let r = radius
			.min(distance(prev, corner) / 2.0)
			.min(distance(corner, next) / 2.0);
		let _ = ctx.arc_to(
			corner.x as f64,
			corner.y as f64,
			next.x as f64,
			next.y as f64,
			r,
		);
	}
	if let Some(last) = rest.last() {
		ctx.line_to(last.x as f64, last.y as f64);
	}
	ctx.stroke();
}

fn distance(a: Point, b: Point) -> f64 {
	let (dx, dy) = ((b.x - a.x) as f64, (b.y - a.y) as f64);
	(dx * dx + dy * dy).sqrt()
}

fn rounded_rect_path(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
	let r = r.min(w / 2.0).min(h / 2.0);
	ctx.begin_path();
	ctx.move_to(x + r, y);
	let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
	let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
	let _ = ctx.arc_to(x, y + h, x, y, r);
	let _ = ctx.arc_to(x, y, x + w, y, r);
	ctx.close_path();
}

fn draw_node(
	ctx: &CanvasRenderingContext2d,
	node: &PositionedNode,
	layout: &LayoutConfig,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let card = &theme.card;
	let (x, y) = (node.position.x as f64, node.position.y as f64);
	let (w, h) = (layout.node_width as f64, layout.node_height as f64);

	rounded_rect_path(ctx, x, y, w, h, card.corner_radius);
	ctx.set_fill_style_str(&card.fill.to_css());
	ctx.fill();
	ctx.set_stroke_style_str(&card.border.to_css());
	ctx.set_line_width(scale.border_width);
	ctx.stroke();

	let members: Vec<&Person> = node.node.members().collect();
	let pad = card.padding;
	let count = members.len() as f64;
	let box_h = ((h - pad * (count + 1.0)) / count).max(0.0);
	let box_w = (w - pad * 2.0).max(0.0);

	for (i, person) in members.iter().enumerate() {
		let by = y + pad + i as f64 * (box_h + pad);
		draw_person(ctx, person, x + pad, by, box_w, box_h, scale, theme);
	}

	let (target, source) = handle_points(node.position, layout);
	if node.node.kind != NodeKind::Root {
		draw_handle(ctx, target, scale, theme);
	}
	if node.node.kind != NodeKind::Leaf {
		draw_handle(ctx, source, scale, theme);
	}
}

#[allow(clippy::too_many_arguments)]
fn draw_person(
	ctx: &CanvasRenderingContext2d,
	person: &Person,
	x: f64,
	y: f64,
	w: f64,
	h: f64,
	scale: &ScaledValues,
	theme: &Theme,
) {
	let fill = theme.genders.get(person.gender);
	rounded_rect_path(ctx, x, y, w, h, theme.card.corner_radius / 2.0);
	ctx.set_fill_style_str(&fill.to_css());
	ctx.fill();
	ctx.set_stroke_style_str(&fill.darken(0.25).to_css());
	ctx.set_line_width(scale.border_width);
	ctx.stroke();

	if !scale.show_labels || person.name.is_empty() {
		return;
	}
	ctx.set_fill_style_str(&theme.card.text.to_css());
	ctx.set_font(&scale.label_font);
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text_with_max_width(&person.name, x + w / 2.0, y + h / 2.0, w - 8.0);
}

fn draw_handle(ctx: &CanvasRenderingContext2d, at: Point, scale: &ScaledValues, theme: &Theme) {
	ctx.begin_path();
	let _ = ctx.arc(at.x as f64, at.y as f64, scale.handle_radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(&theme.card.handle.to_css());
	ctx.fill();
}
