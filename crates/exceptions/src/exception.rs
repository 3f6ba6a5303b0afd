//! Synthesized exception types and their resolved parents.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::builtin::{self, BuiltinType};
use crate::name::QualifiedName;

/// Resolved parent of a synthesized exception type.
#[derive(Debug, Clone)]
pub enum Parent {
	/// A type built into the host runtime.
	Builtin(&'static BuiltinType),
	/// A previously synthesized type.
	Synthetic(Arc<SyntheticException>),
}

impl Parent {
	/// Fully-qualified name of the parent type.
	pub fn name(&self) -> &str {
		match self {
			Parent::Builtin(ty) => ty.name,
			Parent::Synthetic(exc) => exc.full_name(),
		}
	}
}

/// An exception type synthesized on first reference.
///
/// Bound under its fully-qualified name for the lifetime of the process;
/// never removed or redefined.
#[derive(Debug)]
pub struct SyntheticException {
	fqn: String,
	namespace: String,
	class: String,
	parent: Parent,
	definition: String,
}

impl SyntheticException {
	pub(crate) fn new(name: QualifiedName<'_>, parent: Parent, definition: String) -> Self {
		Self {
			fqn: name.full().to_string(),
			namespace: name.namespace().to_string(),
			class: name.class().to_string(),
			parent,
			definition,
		}
	}

	/// The fully-qualified name this type is bound under.
	pub fn full_name(&self) -> &str {
		&self.fqn
	}

	/// The namespace portion of the name.
	pub fn namespace(&self) -> &str {
		&self.namespace
	}

	/// The short type name.
	pub fn class(&self) -> &str {
		&self.class
	}

	/// The resolved parent type.
	pub fn parent(&self) -> &Parent {
		&self.parent
	}

	/// The definition text rendered from the generation template.
	pub fn definition(&self) -> &str {
		&self.definition
	}

	/// Walks the parent chain, through synthetic parents into built-in
	/// bases. Reflexive on the fully-qualified name.
	pub fn is_subtype_of(&self, ancestor: &str) -> bool {
		if self.fqn == ancestor {
			return true;
		}
		let mut parent = self.parent.clone();
		loop {
			match parent {
				Parent::Builtin(ty) => return builtin::is_derived_from(ty.name, ancestor),
				Parent::Synthetic(exc) => {
					if exc.full_name() == ancestor {
						return true;
					}
					parent = exc.parent().clone();
				}
			}
		}
	}

	/// Serializable snapshot of this binding.
	pub fn descriptor(&self) -> ExceptionDescriptor {
		ExceptionDescriptor {
			name: self.fqn.clone(),
			parent: self.parent.name().to_string(),
			definition: self.definition.clone(),
		}
	}
}

impl fmt::Display for SyntheticException {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.fqn)
	}
}

impl std::error::Error for SyntheticException {}

/// Exported description of one bound exception type.
#[derive(Debug, Clone, Serialize)]
pub struct ExceptionDescriptor {
	/// Fully-qualified name.
	pub name: String,
	/// Fully-qualified parent name.
	pub parent: String,
	/// Rendered definition text.
	pub definition: String,
}
