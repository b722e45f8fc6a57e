//! Hierarchical placement of joint nodes.
//!
//! Rank assignment and crossing reduction are delegated to a [`LayoutEngine`]
//! (dagre by default), which reports node centers. The canvas anchors cards
//! by their top-left corner, so every center is shifted by half the node size.

use std::collections::{HashMap, HashSet};

use dagre_rust::{
	GraphConfig as DagreConfig, GraphEdge as DagreEdge, GraphNode as DagreNode,
	layout as dagre_layout,
};
use graphlib_rust::{Graph as DagreGraph, GraphOption};
use log::debug;
use serde::Serialize;

use super::config::LayoutConfig;
use super::edges::FamilyEdge;
use super::pairing::JointNode;

/// A position in world coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
	pub x: f32,
	pub y: f32,
}

impl Point {
	pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

	pub const fn new(x: f32, y: f32) -> Self {
		Self { x, y }
	}
}

/// Anything that can place a directed graph of equally sized nodes.
pub trait LayoutEngine {
	/// Returns the center of every node it could place, keyed by node id.
	fn centers(
		&self,
		node_ids: &[String],
		edges: &[(String, String)],
		config: &LayoutConfig,
	) -> HashMap<String, Point>;
}

/// Rank-based layout backed by `dagre_rust`.
///
/// A new dagre graph is built on every call, so nothing leaks between runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct DagreLayout;

impl LayoutEngine for DagreLayout {
	fn centers(
		&self,
		node_ids: &[String],
		edges: &[(String, String)],
		config: &LayoutConfig,
	) -> HashMap<String, Point> {
		if node_ids.is_empty() {
			return HashMap::new();
		}

		let mut dagre_graph: DagreGraph<DagreConfig, DagreNode, DagreEdge> =
			DagreGraph::new(Some(GraphOption {
				directed: Some(true),
				multigraph: Some(false),
				compound: Some(false),
			}));

		let mut graph_config = DagreConfig::default();
		graph_config.rankdir = Some(config.direction.rankdir().to_string());
		graph_config.nodesep = Some(config.node_spacing);
		graph_config.ranksep = Some(config.rank_spacing);
		graph_config.marginx = Some(config.margin);
		graph_config.marginy = Some(config.margin);
		dagre_graph.set_graph(graph_config);

		for node_id in node_ids {
			let mut node = DagreNode::default();
			node.width = config.node_width;
			node.height = config.node_height;
			dagre_graph.set_node(node_id.clone(), Some(node));
		}

		let node_set: HashSet<&String> = node_ids.iter().collect();
		let mut edge_set: HashSet<(&String, &String)> = HashSet::new();
		for (from, to) in edges {
			// Self-loops carry no rank information.
			if from == to || !node_set.contains(from) || !node_set.contains(to) {
				continue;
			}
			if !edge_set.insert((from, to)) {
				continue;
			}
			let _ = dagre_graph.set_edge(from, to, Some(DagreEdge::default()), None);
		}

		dagre_layout::run_layout(&mut dagre_graph);

		node_ids
			.iter()
			.filter_map(|id| {
				dagre_graph
					.node(id)
					.map(|n| (id.clone(), Point::new(n.x, n.y)))
			})
			.collect()
	}
}

/// Shifts a center-anchored point to the top-left corner of its node.
pub fn center_to_top_left(center: Point, config: &LayoutConfig) -> Point {
	Point::new(
		center.x - config.node_width / 2.0,
		center.y - config.node_height / 2.0,
	)
}

/// Lays out `nodes` and returns their top-left positions, in node order.
///
/// A node the engine did not place is anchored at the origin.
pub fn position_nodes(
	nodes: &[JointNode],
	edges: &[FamilyEdge],
	config: &LayoutConfig,
	engine: &dyn LayoutEngine,
) -> Vec<Point> {
	let ids: Vec<String> = nodes.iter().map(|n| n.key.to_string()).collect();
	let pairs: Vec<(String, String)> = edges
		.iter()
		.map(|e| (e.source.to_string(), e.target.to_string()))
		.collect();

	let centers = engine.centers(&ids, &pairs, config);
	if centers.len() < ids.len() {
		debug!(
			"family-tree: layout placed {} of {} nodes",
			centers.len(),
			ids.len()
		);
	}

	ids.iter()
		.map(|id| {
			centers
				.get(id)
				.map(|&c| center_to_top_left(c, config))
				.unwrap_or(Point::ORIGIN)
		})
		.collect()
}
