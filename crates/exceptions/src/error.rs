use thiserror::Error;

/// Errors surfaced by registry construction and type synthesis.
///
/// Gating-precondition failures during resolution are not errors; the
/// registry declines silently and the caller's normal "type not found"
/// handling applies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistryError {
	/// The template resource could not be read at startup. Fatal: the
	/// registry cannot function without it.
	#[error("template resource `{path}` is unreadable: {message}")]
	TemplateUnreadable { path: String, message: String },
	/// The template text lacks one of the required placeholders. Fatal.
	#[error("template is missing required placeholder `{{{0}}}`")]
	MissingPlaceholder(&'static str),
	/// An explicit parent override names a type that does not exist.
	///
	/// Overrides are not validated when registered; a dangling target
	/// surfaces here, at generation time.
	#[error("parent type `{parent}` for `{class}` was not found")]
	ParentNotFound { class: String, parent: String },
}
