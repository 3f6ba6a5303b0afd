//! The generation template: opaque text with three named placeholders,
//! loaded once and read-only afterwards.

use std::path::Path;

use crate::error::RegistryError;

/// Placeholder names every template must carry.
pub const PLACEHOLDERS: [&str; 3] = ["namespace", "class", "extends"];

const BUILTIN_SOURCE: &str = include_str!("../assets/exception.tpl");

/// Immutable definition template with `{namespace}`, `{class}` and
/// `{extends}` placeholders.
#[derive(Debug, Clone)]
pub struct DefinitionTemplate {
	text: String,
}

impl DefinitionTemplate {
	/// Validates and wraps template text. Every placeholder must appear at
	/// least once.
	pub fn new(text: impl Into<String>) -> Result<Self, RegistryError> {
		let text = text.into();
		for name in PLACEHOLDERS {
			if !text.contains(&format!("{{{name}}}")) {
				return Err(RegistryError::MissingPlaceholder(name));
			}
		}
		Ok(Self { text })
	}

	/// The template compiled into the crate.
	pub fn builtin() -> Result<Self, RegistryError> {
		Self::new(BUILTIN_SOURCE)
	}

	/// Loads template text from a file. A startup-time asset load, not
	/// something to retry at resolution time.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
		let path = path.as_ref();
		let text =
			std::fs::read_to_string(path).map_err(|err| RegistryError::TemplateUnreadable {
				path: path.display().to_string(),
				message: err.to_string(),
			})?;
		Self::new(text)
	}

	/// Renders the definition text for one synthesized type.
	pub fn render(&self, namespace: &str, class: &str, extends: &str) -> String {
		self.text
			.replace("{namespace}", namespace)
			.replace("{class}", class)
			.replace("{extends}", extends)
	}

	/// The raw template text.
	pub fn source(&self) -> &str {
		&self.text
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtin_template_is_valid() {
		let template = DefinitionTemplate::builtin().unwrap();
		for name in PLACEHOLDERS {
			assert!(template.source().contains(&format!("{{{name}}}")));
		}
	}

	#[test]
	fn render_substitutes_all_placeholders() {
		let template =
			DefinitionTemplate::new("ns={namespace} cls={class} ext={extends}").unwrap();
		let rendered = template.render("acme.data", "NotFoundException", "RuntimeException");
		assert_eq!(rendered, "ns=acme.data cls=NotFoundException ext=RuntimeException");
	}

	#[test]
	fn missing_placeholder_is_fatal() {
		let err = DefinitionTemplate::new("ns={namespace} cls={class}").unwrap_err();
		assert_eq!(err, RegistryError::MissingPlaceholder("extends"));
	}

	#[test]
	fn unreadable_template_file_is_fatal() {
		let err = DefinitionTemplate::from_path("/nonexistent/exception.tpl").unwrap_err();
		assert!(matches!(err, RegistryError::TemplateUnreadable { .. }));
	}
}
