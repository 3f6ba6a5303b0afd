//! Fully-qualified name parsing and the gating naming convention.

/// Separator between namespace segments and the short type name.
pub const SEPARATOR: char = '.';

/// Substring a name must contain before the registry will synthesize it.
pub const EXCEPTION_MARKER: &str = "Exception";

/// A parsed fully-qualified type name: one or more namespace segments
/// followed by a short class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifiedName<'a> {
	full: &'a str,
	/// Byte offset of the last separator.
	split: usize,
}

impl<'a> QualifiedName<'a> {
	/// Parses `namespace.Class`.
	///
	/// Returns `None` for unqualified names and for names with an empty
	/// segment (leading, trailing or doubled separator).
	pub fn parse(full: &'a str) -> Option<Self> {
		let split = full.rfind(SEPARATOR)?;
		let name = Self { full, split };
		if name.class().is_empty() || name.namespace().split(SEPARATOR).any(str::is_empty) {
			return None;
		}
		Some(name)
	}

	/// The complete dotted name.
	pub fn full(&self) -> &'a str {
		self.full
	}

	/// Everything before the last separator.
	pub fn namespace(&self) -> &'a str {
		&self.full[..self.split]
	}

	/// The short type name after the last separator.
	pub fn class(&self) -> &'a str {
		&self.full[self.split + SEPARATOR.len_utf8()..]
	}

	/// The leading namespace segment, matched against the package allow-list.
	pub fn root_segment(&self) -> &'a str {
		self.namespace().split(SEPARATOR).next().unwrap_or(self.namespace())
	}

	/// Whether the name satisfies the error-like naming convention.
	pub fn is_exception_like(&self) -> bool {
		self.full.contains(EXCEPTION_MARKER)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_nested_namespace() {
		let name = QualifiedName::parse("acme.data.NotFoundException").unwrap();
		assert_eq!(name.namespace(), "acme.data");
		assert_eq!(name.class(), "NotFoundException");
		assert_eq!(name.root_segment(), "acme");
		assert!(name.is_exception_like());
	}

	#[test]
	fn parses_single_segment_namespace() {
		let name = QualifiedName::parse("acme.Widget").unwrap();
		assert_eq!(name.namespace(), "acme");
		assert_eq!(name.root_segment(), "acme");
		assert!(!name.is_exception_like());
	}

	#[test]
	fn rejects_unqualified_name() {
		assert!(QualifiedName::parse("NakedException").is_none());
	}

	#[test]
	fn rejects_empty_segments() {
		assert!(QualifiedName::parse(".NotFoundException").is_none());
		assert!(QualifiedName::parse("acme.").is_none());
		assert!(QualifiedName::parse("acme..NotFoundException").is_none());
	}
}
