//! The host's "resolve unknown identifier" extension point, modeled as an
//! explicit resolver chain called at the point of use.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;

use crate::error::RegistryError;
use crate::exception::SyntheticException;
use crate::registry::{ExceptionRegistry, Resolution};

/// Callback invoked when an identifier cannot be found through normal lookup.
pub trait ResolveIdentifier: Send + Sync {
	/// Either binds a type for `name` or declines. Declining is not an
	/// error; the absence of a binding after return is itself the "not
	/// found" signal.
	fn resolve_unknown(&self, name: &str) -> Result<Resolution, RegistryError>;
}

impl ResolveIdentifier for ExceptionRegistry {
	fn resolve_unknown(&self, name: &str) -> Result<Resolution, RegistryError> {
		self.resolve(name)
	}
}

/// Ordered chain of identifier resolvers with a cache of successful
/// resolutions.
///
/// A resolver is never re-invoked for a name that already resolved: the
/// chain answers repeat lookups from its cache.
#[derive(Default)]
pub struct ResolverChain {
	resolvers: RwLock<Vec<Arc<dyn ResolveIdentifier>>>,
	cache: RwLock<HashMap<String, Arc<SyntheticException>>>,
}

impl ResolverChain {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends `resolver` unless that exact object is already installed.
	/// Returns false for the duplicate no-op.
	pub fn install(&self, resolver: Arc<dyn ResolveIdentifier>) -> bool {
		let mut resolvers = self.resolvers.write();
		if resolvers.iter().any(|installed| Arc::ptr_eq(installed, &resolver)) {
			tracing::warn!("resolver already installed; ignoring duplicate");
			return false;
		}
		resolvers.push(resolver);
		true
	}

	/// Walks installed resolvers for `name`. Returns `Ok(None)` when every
	/// resolver declines.
	pub fn lookup(&self, name: &str) -> Result<Option<Arc<SyntheticException>>, RegistryError> {
		if let Some(hit) = self.cache.read().get(name) {
			return Ok(Some(hit.clone()));
		}
		// Resolvers run outside the list lock; a resolver may itself trigger
		// nested lookups.
		let resolvers: Vec<Arc<dyn ResolveIdentifier>> = self.resolvers.read().clone();
		for resolver in resolvers {
			if let Resolution::Bound(exc) = resolver.resolve_unknown(name)? {
				self.cache.write().insert(name.to_string(), exc.clone());
				return Ok(Some(exc));
			}
		}
		Ok(None)
	}

	/// Number of installed resolvers.
	pub fn len(&self) -> usize {
		self.resolvers.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.resolvers.read().is_empty()
	}
}
