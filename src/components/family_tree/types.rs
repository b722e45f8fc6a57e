//! Input records for the family tree component.

use serde::{Deserialize, Serialize};

/// Identifier of a person in the source dataset.
pub type PersonId = i64;

/// Gender as recorded in the dataset. Anything unrecognised maps to `Other`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
	Male,
	Female,
	#[default]
	#[serde(other)]
	Other,
}

/// A person and their declared relationships.
///
/// `children` and `parents` may reference ids that are absent from the
/// dataset. Such dangling references are ignored when edges are derived.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Person {
	pub id: PersonId,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub gender: Gender,
	#[serde(default)]
	pub children: Vec<PersonId>,
	#[serde(default)]
	pub parents: Vec<PersonId>,
}

impl Person {
	/// Convenience constructor used by demos and tests.
	pub fn new(id: PersonId, name: impl Into<String>, gender: Gender) -> Self {
		Self {
			id,
			name: name.into(),
			gender,
			children: Vec::new(),
			parents: Vec::new(),
		}
	}

	pub fn with_children(mut self, children: impl IntoIterator<Item = PersonId>) -> Self {
		self.children = children.into_iter().collect();
		self
	}

	pub fn with_parents(mut self, parents: impl IntoIterator<Item = PersonId>) -> Self {
		self.parents = parents.into_iter().collect();
		self
	}

	/// True if both people declare at least one common child.
	pub fn shares_child_with(&self, other: &Person) -> bool {
		self.children.iter().any(|c| other.children.contains(c))
	}

	/// Identity fields carried on a rendered node.
	pub fn summary(&self) -> PersonSummary {
		PersonSummary {
			id: self.id,
			name: self.name.clone(),
			gender: self.gender,
		}
	}
}

/// The identity part of a [`Person`], without relationships.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PersonSummary {
	pub id: PersonId,
	pub name: String,
	pub gender: Gender,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn missing_fields_fall_back_to_defaults() {
		let person: Person = serde_json::from_str(r#"{"id": 7}"#).unwrap();
		assert_eq!(person.id, 7);
		assert!(person.name.is_empty());
		assert_eq!(person.gender, Gender::Other);
		assert!(person.children.is_empty());
		assert!(person.parents.is_empty());
	}

	#[test]
	fn unknown_gender_is_other() {
		let person: Person =
			serde_json::from_str(r#"{"id": 1, "name": "Sam", "gender": "nonbinary"}"#).unwrap();
		assert_eq!(person.gender, Gender::Other);

		let person: Person =
			serde_json::from_str(r#"{"id": 2, "name": "Ann", "gender": "female"}"#).unwrap();
		assert_eq!(person.gender, Gender::Female);
	}

	#[test]
	fn shared_children_are_detected() {
		let a = Person::new(1, "A", Gender::Male).with_children([3, 4]);
		let b = Person::new(2, "B", Gender::Female).with_children([4]);
		let c = Person::new(5, "C", Gender::Female).with_children([9]);
		assert!(a.shares_child_with(&b));
		assert!(b.shares_child_with(&a));
		assert!(!a.shares_child_with(&c));
	}
}
