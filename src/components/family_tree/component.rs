//! Leptos component wrapping the family tree canvas.
//!
//! The component owns a canvas element and a [`TreeViewState`]. Whenever the
//! `data` signal changes the whole pipeline (pairing, edges, layout) is
//! rerun and the view refitted. The tree is read-only: dragging the
//! background pans, the wheel zooms, and a double-click fits the tree back
//! into view. Frames are drawn from a `requestAnimationFrame` loop, but only
//! when the view state has changed.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::config::TreeConfig;
use super::layout::DagreLayout;
use super::render;
use super::scale::ScaleConfig;
use super::state::TreeViewState;
use super::theme::Theme;
use super::types::Person;

/// Bundles view state with visual configuration.
struct TreeContext {
	state: TreeViewState,
	scale: ScaleConfig,
	theme: Theme,
}

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Mouse position relative to the canvas.
fn canvas_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Renders an interactive, non-editable family tree on a canvas element.
///
/// The component sizes itself to its parent container by default; set
/// `fullscreen = true` to fill the viewport and follow window resizes.
/// Explicit `width`/`height` override automatic sizing.
#[component]
pub fn FamilyTreeCanvas(
	#[prop(into)] data: Signal<Vec<Person>>,
	#[prop(optional)] config: TreeConfig,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let theme = Theme::by_name(&config.theme);
	let context = Rc::new(RefCell::new(TreeContext {
		state: TreeViewState::new(config, 800.0, 600.0),
		scale: ScaleConfig::default(),
		theme,
	}));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let context_data = context.clone();
	Effect::new(move |_| {
		let people = data.get();
		let mut c = context_data.borrow_mut();
		c.state.rebuild(&people, &DagreLayout);
		info!(
			"family-tree: laid out {} people as {} nodes, {} edges",
			people.len(),
			c.state.graph.nodes.len(),
			c.state.graph.edges.len()
		);
	});

	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());
	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("family-tree: no window, canvas not started");
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window).unwrap_or((800.0, 600.0))
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					warn!("family-tree: 2d context has unexpected type");
					return;
				}
			},
			_ => {
				warn!("family-tree: canvas 2d context unavailable");
				return;
			}
		};

		{
			let mut c = context_init.borrow_mut();
			c.state.resize(w, h);
			c.state.fit_to_view();
		}

		if fullscreen {
			let (context_resize, canvas_resize) = (context_init.clone(), canvas.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				context_resize.borrow_mut().state.resize(nw, nh);
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			{
				let mut c = context_anim.borrow_mut();
				if c.state.take_dirty() {
					render::render(&c.state, &ctx, &c.scale, &c.theme);
				}
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_md = context.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		context_md.borrow_mut().state.begin_pan(x, y);
	};

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		context_mm.borrow_mut().state.pan_to(x, y);
	};

	let context_mu = context.clone();
	let on_mouseup = move |_: MouseEvent| {
		context_mu.borrow_mut().state.end_pan();
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		context_ml.borrow_mut().state.end_pan();
	};

	let context_dc = context.clone();
	let on_dblclick = move |_: MouseEvent| {
		context_dc.borrow_mut().state.fit_to_view();
	};

	let context_wh = context.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = canvas_point(canvas_ref, &ev) else {
			return;
		};
		context_wh.borrow_mut().state.wheel(x, y, ev.delta_y());
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="family-tree-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:dblclick=on_dblclick
			on:wheel=on_wheel
			style="display: block; cursor: grab;"
		/>
	}
}
