//! Groups people into joint nodes.
//!
//! Two people who declare at least one common child are drawn as a single
//! node, so that their children hang off one parent box instead of two.
//! Pairing is greedy: each unpaired person, in input order, takes the first
//! later person that shares a child with them. There is no backtracking, so
//! when three or more people share a child only the first two end up
//! together and the rest become singletons (or pair with a later match).
//!
//! Person ids are expected to be unique. A repeated id is dropped so that
//! node ids stay unique, keeping the first record that used it.

use std::collections::{HashSet, VecDeque};
use std::fmt;

use log::warn;
use serde::{Serialize, Serializer};

use super::types::{Person, PersonId};

/// Composite identity of a joint node.
///
/// Member ids are stored sorted, so the key does not depend on which
/// member was encountered first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JointKey {
	low: PersonId,
	high: Option<PersonId>,
}

impl JointKey {
	pub fn single(id: PersonId) -> Self {
		Self { low: id, high: None }
	}

	pub fn pair(a: PersonId, b: PersonId) -> Self {
		Self {
			low: a.min(b),
			high: Some(a.max(b)),
		}
	}

	pub fn members(&self) -> impl Iterator<Item = PersonId> + '_ {
		std::iter::once(self.low).chain(self.high)
	}
}

impl fmt::Display for JointKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.high {
			Some(high) => write!(f, "{}+{}", self.low, high),
			None => write!(f, "{}", self.low),
		}
	}
}

impl Serialize for JointKey {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

/// Rendering hint for a joint node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
	/// No member has recorded parents.
	Root,
	/// The primary member has no children.
	Leaf,
	#[default]
	Default,
}

/// One or two people drawn as a single node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JointNode {
	pub key: JointKey,
	/// The member that was first in input order.
	pub person1: Person,
	pub person2: Option<Person>,
	/// Children of `person1`. Partners are assumed to share the same set.
	pub children: Vec<PersonId>,
	pub kind: NodeKind,
}

impl JointNode {
	fn new(first: Person, second: Option<Person>) -> Self {
		let key = match &second {
			Some(second) => JointKey::pair(first.id, second.id),
			None => JointKey::single(first.id),
		};
		let kind = classify(&first, second.as_ref());
		Self {
			key,
			children: first.children.clone(),
			person1: first,
			person2: second,
			kind,
		}
	}

	pub fn members(&self) -> impl Iterator<Item = &Person> {
		std::iter::once(&self.person1).chain(self.person2.as_ref())
	}

	pub fn is_pair(&self) -> bool {
		self.person2.is_some()
	}
}

/// Root wins over leaf, so an isolated person with no parents is a root.
fn classify(first: &Person, second: Option<&Person>) -> NodeKind {
	let no_parents = first.parents.is_empty() && second.is_none_or(|p| p.parents.is_empty());
	if no_parents {
		NodeKind::Root
	} else if first.children.is_empty() {
		NodeKind::Leaf
	} else {
		NodeKind::Default
	}
}

/// Pairs people into joint nodes, preserving first-encounter order.
pub fn pair_people(people: &[Person]) -> Vec<JointNode> {
	let mut seen = HashSet::with_capacity(people.len());
	let mut queue: VecDeque<Person> = people
		.iter()
		.filter(|p| {
			let first = seen.insert(p.id);
			if !first {
				warn!("family-tree: skipping duplicate person id {}", p.id);
			}
			first
		})
		.cloned()
		.collect();
	let mut nodes = Vec::with_capacity(queue.len());

	while let Some(first) = queue.pop_front() {
		let second = queue
			.iter()
			.position(|candidate| candidate.shares_child_with(&first))
			.and_then(|idx| queue.remove(idx));
		nodes.push(JointNode::new(first, second));
	}

	nodes
}
