//! The lazy exception-type registry: allow-listed namespace prefixes, parent
//! resolution precedence, and idempotent per-name synthesis.

use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use rustc_hash::{FxHashMap as HashMap, FxHashSet as HashSet};

use crate::builtin;
use crate::chain::ResolverChain;
use crate::error::RegistryError;
use crate::exception::{ExceptionDescriptor, Parent, SyntheticException};
use crate::name::QualifiedName;
use crate::template::DefinitionTemplate;

/// Prefix every registry accepts when the builder seeds none.
pub const DEFAULT_PREFIX: &str = "app";

/// Outcome of one resolution attempt.
#[derive(Debug, Clone)]
pub enum Resolution {
	/// A gating precondition failed; the registry took no action and the
	/// caller's normal "type not found" handling applies.
	Declined,
	/// The type is bound: freshly synthesized, or found already bound.
	Bound(Arc<SyntheticException>),
}

impl Resolution {
	/// Returns the bound type, if any.
	pub fn bound(&self) -> Option<&Arc<SyntheticException>> {
		match self {
			Resolution::Bound(exc) => Some(exc),
			Resolution::Declined => None,
		}
	}
}

/// Registry that synthesizes exception types on first reference.
///
/// A name is synthesized when it is namespaced, contains the exception
/// marker, and its leading segment is an allowed package prefix. The parent
/// is chosen by precedence: explicit override, builtin parent mapping, then
/// the root built-in error type. Once bound, a name stays bound for the
/// lifetime of the registry.
pub struct ExceptionRegistry {
	prefixes: RwLock<HashSet<String>>,
	builtin_parents: HashMap<String, String>,
	overrides: RwLock<HashMap<String, String>>,
	template: DefinitionTemplate,
	bound: RwLock<HashMap<String, Arc<SyntheticException>>>,
}

impl ExceptionRegistry {
	/// Starts explicit configuration.
	pub fn builder() -> RegistryBuilder {
		RegistryBuilder::new()
	}

	/// Registry with [`DEFAULT_PREFIX`], the discovered builtin parent
	/// mapping and the compiled-in template.
	pub fn new() -> Result<Self, RegistryError> {
		Self::builder().build()
	}

	/// Registers an additional allowed namespace prefix.
	///
	/// Idempotent; re-adding an existing prefix is a no-op. Empty input is
	/// ignored so the prefix set can never become degenerate.
	pub fn add_package_prefix(&self, prefix: &str) {
		if prefix.is_empty() {
			tracing::warn!("ignoring empty package prefix");
			return;
		}
		self.prefixes.write().insert(prefix.to_string());
	}

	/// Currently allowed namespace prefixes, sorted.
	pub fn package_prefixes(&self) -> Vec<String> {
		let mut prefixes: Vec<String> = self.prefixes.read().iter().cloned().collect();
		prefixes.sort_unstable();
		prefixes
	}

	/// Maps a short type name onto an explicit fully-qualified parent,
	/// taking precedence over the builtin parent mapping.
	///
	/// The target is not validated here; a dangling override surfaces at
	/// generation time as [`RegistryError::ParentNotFound`].
	pub fn set_parent_override(&self, class: impl Into<String>, parent: impl Into<String>) {
		self.overrides.write().insert(class.into(), parent.into());
	}

	/// Returns the type bound under `fqn`, without synthesizing.
	pub fn get(&self, fqn: &str) -> Option<Arc<SyntheticException>> {
		self.bound.read().get(fqn).cloned()
	}

	/// Resolution entry point: synthesizes and binds `name` when all gating
	/// preconditions hold.
	///
	/// Idempotent per name. A name that is already bound resolves to the
	/// same type object without re-generating, including under concurrent
	/// first references.
	pub fn resolve(&self, name: &str) -> Result<Resolution, RegistryError> {
		if let Some(existing) = self.get(name) {
			return Ok(Resolution::Bound(existing));
		}
		let Some(qualified) = QualifiedName::parse(name) else {
			tracing::trace!(name, "declined: not a namespaced name");
			return Ok(Resolution::Declined);
		};
		if !qualified.is_exception_like() {
			tracing::trace!(name, "declined: not an exception-like name");
			return Ok(Resolution::Declined);
		}
		if !self.prefixes.read().contains(qualified.root_segment()) {
			tracing::trace!(
				name,
				prefix = qualified.root_segment(),
				"declined: prefix not registered"
			);
			return Ok(Resolution::Declined);
		}

		// check-exists / generate / bind is one critical section per
		// registry: two concurrent first references must not define the
		// same type twice.
		let mut bound = self.bound.write();
		if let Some(existing) = bound.get(name) {
			return Ok(Resolution::Bound(existing.clone()));
		}
		let parent = self.resolve_parent(qualified.class(), &bound)?;
		let definition =
			self.template.render(qualified.namespace(), qualified.class(), parent.name());
		let exception = Arc::new(SyntheticException::new(qualified, parent, definition));
		bound.insert(name.to_string(), exception.clone());
		tracing::debug!(name, parent = exception.parent().name(), "synthesized exception type");
		Ok(Resolution::Bound(exception))
	}

	/// First match wins: explicit override, builtin parent mapping, root.
	fn resolve_parent(
		&self,
		class: &str,
		bound: &HashMap<String, Arc<SyntheticException>>,
	) -> Result<Parent, RegistryError> {
		if let Some(target) = self.overrides.read().get(class).cloned() {
			if let Some(exc) = bound.get(&target) {
				return Ok(Parent::Synthetic(exc.clone()));
			}
			if let Some(ty) = builtin::find(&target) {
				return Ok(Parent::Builtin(ty));
			}
			return Err(RegistryError::ParentNotFound {
				class: class.to_string(),
				parent: target,
			});
		}
		if let Some(target) = self.builtin_parents.get(class) {
			return builtin::find(target).map(Parent::Builtin).ok_or_else(|| {
				RegistryError::ParentNotFound {
					class: class.to_string(),
					parent: target.clone(),
				}
			});
		}
		Ok(Parent::Builtin(builtin::root()))
	}

	/// Serializable descriptors for every bound type, sorted by name.
	pub fn export(&self) -> Vec<ExceptionDescriptor> {
		let bound = self.bound.read();
		let mut all: Vec<ExceptionDescriptor> =
			bound.values().map(|exc| exc.descriptor()).collect();
		all.sort_unstable_by(|a, b| a.name.cmp(&b.name));
		all
	}
}

/// Explicit configuration for [`ExceptionRegistry`] construction.
#[derive(Default)]
pub struct RegistryBuilder {
	prefixes: Vec<String>,
	builtin_parents: Option<HashMap<String, String>>,
	overrides: Vec<(String, String)>,
	template: Option<DefinitionTemplate>,
}

impl RegistryBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Seeds an allowed namespace prefix. When none are seeded the registry
	/// starts with [`DEFAULT_PREFIX`].
	pub fn package_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefixes.push(prefix.into());
		self
	}

	/// Seeds one builtin parent mapping entry. Seeding any entry replaces
	/// the discovery scan entirely.
	pub fn builtin_parent(mut self, class: impl Into<String>, parent: impl Into<String>) -> Self {
		self.builtin_parents.get_or_insert_default().insert(class.into(), parent.into());
		self
	}

	/// Seeds an explicit parent override.
	pub fn parent_override(mut self, class: impl Into<String>, parent: impl Into<String>) -> Self {
		self.overrides.push((class.into(), parent.into()));
		self
	}

	/// Uses `template` instead of the compiled-in asset.
	pub fn template(mut self, template: DefinitionTemplate) -> Self {
		self.template = Some(template);
		self
	}

	/// Builds the registry. Fails only on an invalid template.
	pub fn build(self) -> Result<ExceptionRegistry, RegistryError> {
		let template = match self.template {
			Some(template) => template,
			None => DefinitionTemplate::builtin()?,
		};
		let builtin_parents =
			self.builtin_parents.unwrap_or_else(builtin::discover_exception_parents);
		let mut prefixes: HashSet<String> =
			self.prefixes.into_iter().filter(|p| !p.is_empty()).collect();
		if prefixes.is_empty() {
			prefixes.insert(DEFAULT_PREFIX.to_string());
		}
		Ok(ExceptionRegistry {
			prefixes: RwLock::new(prefixes),
			builtin_parents,
			overrides: RwLock::new(self.overrides.into_iter().collect()),
			template,
			bound: RwLock::new(HashMap::default()),
		})
	}
}

static GLOBAL: OnceLock<Arc<ExceptionRegistry>> = OnceLock::new();

/// Returns the process-wide registry, constructing it on first use.
///
/// Construction failure is not cached: a later call may succeed if the
/// failure was transient, though with the compiled-in template it never is.
pub fn global() -> Result<Arc<ExceptionRegistry>, RegistryError> {
	if let Some(registry) = GLOBAL.get() {
		return Ok(registry.clone());
	}
	let built = Arc::new(ExceptionRegistry::new()?);
	// A racing first caller may have stored its own instance; whichever won
	// is the one every caller sees from now on.
	Ok(GLOBAL.get_or_init(|| built).clone())
}

/// Idempotent process-wide setup: builds the global registry at most once
/// and hooks it into `chain` unless that exact resolver is already installed.
pub fn initialize(chain: &ResolverChain) -> Result<Arc<ExceptionRegistry>, RegistryError> {
	let registry = global()?;
	chain.install(registry.clone());
	Ok(registry)
}
