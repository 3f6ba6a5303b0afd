//! Lazy exception-type registry.
//!
//! On first reference to an undefined error-type name inside an allowed
//! namespace prefix, the registry synthesizes that type, wires it into a
//! parent chain (explicit override, then builtin parent mapping, then the
//! root built-in error type) and binds it for the lifetime of the process.
//!
//! ```
//! use myriad_exceptions::ExceptionRegistry;
//!
//! let registry = ExceptionRegistry::builder().package_prefix("acme").build()?;
//! let resolution = registry.resolve("acme.net.TimeoutException")?;
//! let exc = resolution.bound().expect("gates passed");
//! assert!(exc.is_subtype_of("Exception"));
//! # Ok::<(), myriad_exceptions::RegistryError>(())
//! ```

pub mod builtin;
pub mod chain;
mod error;
pub mod exception;
pub mod name;
pub mod registry;
pub mod template;

pub use builtin::{BuiltinType, ROOT_EXCEPTION};
pub use chain::{ResolveIdentifier, ResolverChain};
pub use error::RegistryError;
pub use exception::{ExceptionDescriptor, Parent, SyntheticException};
pub use name::QualifiedName;
pub use registry::{
	DEFAULT_PREFIX, ExceptionRegistry, RegistryBuilder, Resolution, global, initialize,
};
pub use template::DefinitionTemplate;
