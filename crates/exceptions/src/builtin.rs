//! The host runtime's built-in type table.
//!
//! Built-in types are contributed through [`inventory`]: this crate ships the
//! error taxonomy rooted at [`ROOT_EXCEPTION`], and embedding hosts submit
//! their own entries with `inventory::submit!`. The builtin parent mapping is
//! derived once, at registry construction, by scanning this table.

use rustc_hash::FxHashMap as HashMap;

use crate::name::EXCEPTION_MARKER;

/// A type built into the host runtime.
#[derive(Debug)]
pub struct BuiltinType {
	/// Unqualified type name.
	pub name: &'static str,
	/// Name of the base type, `None` for the hierarchy root.
	pub base: Option<&'static str>,
}

inventory::collect!(BuiltinType);

/// Root of the built-in error hierarchy; the default parent when neither an
/// explicit override nor a builtin mapping applies.
pub const ROOT_EXCEPTION: &str = "Exception";

static ROOT_TYPE: BuiltinType = BuiltinType {
	name: ROOT_EXCEPTION,
	base: None,
};

/// Returns the root built-in error type.
pub fn root() -> &'static BuiltinType {
	&ROOT_TYPE
}

/// Looks up a built-in type by exact name.
pub fn find(name: &str) -> Option<&'static BuiltinType> {
	if name == ROOT_EXCEPTION {
		return Some(&ROOT_TYPE);
	}
	inventory::iter::<BuiltinType>.into_iter().find(|ty| ty.name == name)
}

/// Returns true if `name` is `ancestor` or transitively derives from it.
pub fn is_derived_from(name: &str, ancestor: &str) -> bool {
	let mut current = find(name);
	while let Some(ty) = current {
		if ty.name == ancestor {
			return true;
		}
		current = ty.base.and_then(find);
	}
	false
}

/// Scans the built-in type table for error-like names and produces the
/// short-name to built-in parent mapping.
pub fn discover_exception_parents() -> HashMap<String, String> {
	let mut parents = HashMap::default();
	for ty in inventory::iter::<BuiltinType> {
		if ty.name.contains(EXCEPTION_MARKER) {
			parents.insert(ty.name.to_string(), ty.name.to_string());
		}
	}
	parents
}

inventory::submit! { BuiltinType { name: "RuntimeException", base: Some("Exception") } }
inventory::submit! { BuiltinType { name: "LogicException", base: Some("Exception") } }
inventory::submit! { BuiltinType { name: "TypeException", base: Some("LogicException") } }
inventory::submit! { BuiltinType { name: "RangeException", base: Some("LogicException") } }
inventory::submit! { BuiltinType { name: "StateException", base: Some("RuntimeException") } }
inventory::submit! { BuiltinType { name: "IoException", base: Some("RuntimeException") } }
inventory::submit! { BuiltinType { name: "OverflowException", base: Some("RuntimeException") } }
