//! The people → positioned graph pipeline.
//!
//! `build_family_graph` runs pairing, edge derivation and layout in that
//! order and returns a fresh snapshot. It holds no state between calls, so
//! the component simply rebuilds whenever the input list changes.

use log::debug;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::config::LayoutConfig;
use super::edges::{FamilyEdge, derive_edges};
use super::layout::{LayoutEngine, Point, position_nodes};
use super::pairing::{JointNode, pair_people};
use super::types::{Person, PersonId, PersonSummary};

/// A joint node with its top-left position.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedNode {
	pub node: JointNode,
	pub position: Point,
}

#[derive(Serialize)]
struct NodeData<'a> {
	id: String,
	person1: PersonSummary,
	#[serde(skip_serializing_if = "Option::is_none")]
	person2: Option<PersonSummary>,
	children: &'a [PersonId],
}

impl Serialize for PositionedNode {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let id = self.node.key.to_string();
		let data = NodeData {
			id: id.clone(),
			person1: self.node.person1.summary(),
			person2: self.node.person2.as_ref().map(Person::summary),
			children: &self.node.children,
		};
		let mut s = serializer.serialize_struct("PositionedNode", 4)?;
		s.serialize_field("id", &id)?;
		s.serialize_field("position", &self.position)?;
		s.serialize_field("type", &self.node.kind)?;
		s.serialize_field("data", &data)?;
		s.end()
	}
}

/// Render-ready family graph.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FamilyGraph {
	pub nodes: Vec<PositionedNode>,
	pub edges: Vec<FamilyEdge>,
}

impl FamilyGraph {
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Axis-aligned bounds `(min, max)` of all node cards.
	pub fn bounds(&self, config: &LayoutConfig) -> Option<(Point, Point)> {
		let mut iter = self.nodes.iter().map(|n| n.position);
		let first = iter.next()?;
		let (min, max) = iter.fold((first, first), |(min, max), p| {
			(
				Point::new(min.x.min(p.x), min.y.min(p.y)),
				Point::new(max.x.max(p.x), max.y.max(p.y)),
			)
		});
		Some((
			min,
			Point::new(max.x + config.node_width, max.y + config.node_height),
		))
	}
}

/// Pairs `people`, derives edges and lays the result out.
pub fn build_family_graph(
	people: &[Person],
	config: &LayoutConfig,
	engine: &dyn LayoutEngine,
) -> FamilyGraph {
	let joint_nodes = pair_people(people);
	let edges = derive_edges(&joint_nodes);
	let positions = position_nodes(&joint_nodes, &edges, config, engine);

	debug!(
		"family-tree: {} people -> {} nodes, {} edges",
		people.len(),
		joint_nodes.len(),
		edges.len()
	);

	let nodes = joint_nodes
		.into_iter()
		.zip(positions)
		.map(|(node, position)| PositionedNode { node, position })
		.collect();

	FamilyGraph { nodes, edges }
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;
	use crate::components::family_tree::pairing::{JointKey, NodeKind};
	use crate::components::family_tree::types::Gender;

	/// Stacks nodes vertically in input order.
	struct StackLayout;

	impl LayoutEngine for StackLayout {
		fn centers(
			&self,
			node_ids: &[String],
			_edges: &[(String, String)],
			config: &LayoutConfig,
		) -> HashMap<String, Point> {
			node_ids
				.iter()
				.enumerate()
				.map(|(i, id)| {
					let y = config.node_height / 2.0 + i as f32 * config.node_height;
					(id.clone(), Point::new(config.node_width / 2.0, y))
				})
				.collect()
		}
	}

	#[test]
	fn empty_input_builds_an_empty_graph() {
		let graph = build_family_graph(&[], &LayoutConfig::default(), &StackLayout);
		assert!(graph.is_empty());
		assert!(graph.edges.is_empty());
		assert_eq!(graph.bounds(&LayoutConfig::default()), None);
	}

	#[test]
	fn unrelated_root_and_parent_chain() {
		let people = vec![
			Person::new(1, "A", Gender::Male),
			Person::new(2, "B", Gender::Female).with_children([3]),
			Person::new(3, "C", Gender::Male).with_parents([2]),
		];
		let graph = build_family_graph(&people, &LayoutConfig::default(), &StackLayout);

		let kinds: Vec<_> = graph.nodes.iter().map(|n| n.node.kind).collect();
		assert_eq!(kinds, vec![NodeKind::Root, NodeKind::Root, NodeKind::Leaf]);
		assert_eq!(graph.edges.len(), 1);
		assert_eq!(graph.edges[0].source, JointKey::single(2));
		assert_eq!(graph.edges[0].target, JointKey::single(3));
	}

	#[test]
	fn positions_are_top_left_anchored() {
		let people = vec![
			Person::new(4, "D", Gender::Male).with_children([6]),
			Person::new(5, "E", Gender::Female).with_children([6]),
			Person::new(6, "F", Gender::Female).with_parents([4, 5]),
		];
		let config = LayoutConfig::default();
		let graph = build_family_graph(&people, &config, &StackLayout);
		assert_eq!(graph.nodes[0].position, Point::new(0.0, 0.0));
		assert_eq!(graph.nodes[1].position, Point::new(0.0, 200.0));
		assert_eq!(
			graph.bounds(&config),
			Some((Point::new(0.0, 0.0), Point::new(200.0, 400.0)))
		);
		assert_eq!(graph.nodes[0].node.key.to_string(), "4+5");
	}

	#[test]
	fn rebuilding_is_deterministic() {
		let people = vec![
			Person::new(1, "A", Gender::Male).with_children([3, 4]),
			Person::new(2, "B", Gender::Female).with_children([3, 4]),
			Person::new(3, "C", Gender::Male).with_parents([1, 2]),
			Person::new(4, "D", Gender::Female).with_parents([1, 2]),
		];
		let config = LayoutConfig::default();
		let first = build_family_graph(&people, &config, &StackLayout);
		let second = build_family_graph(&people, &config, &StackLayout);
		assert_eq!(first, second);
	}

	#[test]
	fn serializes_to_the_surface_shape() {
		let people = vec![
			Person::new(4, "D", Gender::Male).with_children([6]),
			Person::new(5, "E", Gender::Female).with_children([6]),
			Person::new(6, "F", Gender::Female).with_parents([4, 5]),
		];
		let graph = build_family_graph(&people, &LayoutConfig::default(), &StackLayout);
		let json = serde_json::to_value(&graph).unwrap();

		let couple = &json["nodes"][0];
		assert_eq!(couple["id"], "4+5");
		assert_eq!(couple["type"], "root");
		assert_eq!(couple["position"]["x"], 0.0);
		assert_eq!(couple["data"]["person1"]["name"], "D");
		assert_eq!(couple["data"]["person2"]["gender"], "female");
		assert_eq!(couple["data"]["children"][0], 6);

		let child = &json["nodes"][1];
		assert_eq!(child["type"], "leaf");
		assert!(child["data"].get("person2").is_none());

		let edge = &json["edges"][0];
		assert_eq!(edge["id"], "e_4+5_6");
		assert_eq!(edge["source"], "4+5");
		assert_eq!(edge["target"], "6");
		assert_eq!(edge["type"], "smoothstep");
	}
}
