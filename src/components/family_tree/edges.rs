//! Parent-to-child edges between joint nodes.
//!
//! Edges are derived only once every joint node exists: each declared child
//! id is looked up in a member index and connected to the node that holds
//! that child. Ids that match no node are dropped.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use super::pairing::{JointKey, JointNode};
use super::types::PersonId;

/// A directed "parents of" relation between two joint nodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FamilyEdge {
	pub id: String,
	pub source: JointKey,
	pub target: JointKey,
	/// Connector style hint for the rendering surface.
	#[serde(rename = "type")]
	pub style: &'static str,
}

impl FamilyEdge {
	fn new(source: JointKey, target: JointKey) -> Self {
		Self {
			id: format!("e_{source}_{target}"),
			source,
			target,
			style: "smoothstep",
		}
	}

	pub fn is_self_loop(&self) -> bool {
		self.source == self.target
	}
}

/// Maps each member id to the index of the node holding it.
///
/// If an id occurs in more than one node (duplicate ids in the input), the
/// first node wins so lookups stay unambiguous.
pub fn member_index(nodes: &[JointNode]) -> HashMap<PersonId, usize> {
	let mut index = HashMap::with_capacity(nodes.len() * 2);
	for (i, node) in nodes.iter().enumerate() {
		for id in node.key.members() {
			index.entry(id).or_insert(i);
		}
	}
	index
}

/// Derives edges from every node to the nodes holding its children.
///
/// Output order follows node order, then child order. Repeated
/// source/target pairs are emitted once.
pub fn derive_edges(nodes: &[JointNode]) -> Vec<FamilyEdge> {
	let index = member_index(nodes);
	let mut seen = HashSet::new();
	let mut edges = Vec::new();

	for parent in nodes {
		for child in &parent.children {
			let Some(&target) = index.get(child) else {
				continue;
			};
			let target = nodes[target].key;
			if seen.insert((parent.key, target)) {
				edges.push(FamilyEdge::new(parent.key, target));
			}
		}
	}

	edges
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::family_tree::pairing::pair_people;
	use crate::components::family_tree::types::{Gender, Person};

	fn person(id: PersonId, children: &[PersonId], parents: &[PersonId]) -> Person {
		Person::new(id, format!("P{id}"), Gender::Other)
			.with_children(children.iter().copied())
			.with_parents(parents.iter().copied())
	}

	#[test]
	fn couple_links_once_to_child() {
		let people = vec![
			person(4, &[6], &[]),
			person(5, &[6], &[]),
			person(6, &[], &[4, 5]),
		];
		let nodes = pair_people(&people);
		let edges = derive_edges(&nodes);
		assert_eq!(edges.len(), 1);
		assert_eq!(edges[0].source, JointKey::pair(4, 5));
		assert_eq!(edges[0].target, JointKey::single(6));
		assert_eq!(edges[0].id, "e_4+5_6");
	}

	#[test]
	fn edge_targets_the_node_of_a_married_child() {
		let people = vec![
			person(1, &[3], &[]),
			person(3, &[7], &[1]),
			person(4, &[7], &[]),
			person(7, &[], &[3, 4]),
		];
		let nodes = pair_people(&people);
		let edges = derive_edges(&nodes);
		let pairs: Vec<_> = edges.iter().map(|e| (e.source, e.target)).collect();
		assert_eq!(
			pairs,
			vec![
				(JointKey::single(1), JointKey::pair(3, 4)),
				(JointKey::pair(3, 4), JointKey::single(7)),
			]
		);
	}

	#[test]
	fn dangling_children_are_dropped() {
		let people = vec![person(1, &[99, 2], &[]), person(2, &[], &[1])];
		let nodes = pair_people(&people);
		let edges = derive_edges(&nodes);
		assert_eq!(edges.len(), 1);
		assert_eq!(edges[0].target, JointKey::single(2));
	}

	#[test]
	fn endpoints_always_exist() {
		let people = vec![
			person(1, &[3, 4, 50], &[]),
			person(2, &[3], &[]),
			person(3, &[], &[1, 2]),
			person(4, &[8], &[1, 60]),
			person(5, &[8], &[]),
			person(8, &[], &[4, 5]),
		];
		let nodes = pair_people(&people);
		let keys: HashSet<_> = nodes.iter().map(|n| n.key).collect();
		for edge in derive_edges(&nodes) {
			assert!(keys.contains(&edge.source));
			assert!(keys.contains(&edge.target));
		}
	}

	#[test]
	fn own_child_produces_self_loop() {
		let people = vec![person(1, &[1], &[1])];
		let nodes = pair_people(&people);
		let edges = derive_edges(&nodes);
		assert_eq!(edges.len(), 1);
		assert!(edges[0].is_self_loop());
	}

	#[test]
	fn third_co_parent_gets_its_own_edge() {
		let people = vec![
			person(1, &[9], &[]),
			person(2, &[9], &[]),
			person(3, &[9], &[]),
			person(9, &[], &[1, 2, 3]),
		];
		let nodes = pair_people(&people);
		let edges = derive_edges(&nodes);
		let pairs: Vec<_> = edges.iter().map(|e| (e.source, e.target)).collect();
		assert_eq!(
			pairs,
			vec![
				(JointKey::pair(1, 2), JointKey::single(9)),
				(JointKey::single(3), JointKey::single(9)),
			]
		);
	}

	#[test]
	fn siblings_paired_together_yield_one_edge() {
		// 5 and 6 share child 8, so they form one node; their parent lists both.
		let people = vec![
			person(1, &[5, 6], &[]),
			person(5, &[8], &[1]),
			person(6, &[8], &[1]),
			person(8, &[], &[5, 6]),
		];
		let nodes = pair_people(&people);
		let edges = derive_edges(&nodes);
		assert_eq!(edges.len(), 2);
		assert_eq!(edges[0].target, JointKey::pair(5, 6));
	}
}
