//! Registry of the resource kinds this crate defines.
//!
//! Nothing is registered implicitly: callers build a [`Scheme`] (usually through
//! [`scheme`]) and hand it to whatever needs to map `apiVersion`/`kind` pairs.
use kube::core::{ApiResource, Resource};

use crate::spec::Runner;

/// Set of known resource kinds.
#[derive(Clone, Debug, Default)]
pub struct Scheme {
    resources: Vec<ApiResource>,
}

impl Scheme {
    /// Create an empty scheme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a statically typed resource kind.
    ///
    /// Registering the same kind twice is a no-op.
    pub fn register<K>(&mut self) -> &mut Self
    where
        K: Resource<DynamicType = ()>,
    {
        let resource = ApiResource::erase::<K>(&());
        if !self.recognizes(&resource.api_version, &resource.kind) {
            self.resources.push(resource);
        }
        self
    }

    /// Find a registered kind by `apiVersion` (`group/version`) and `kind`.
    pub fn lookup(&self, api_version: &str, kind: &str) -> Option<&ApiResource> {
        self.resources
            .iter()
            .find(|r| r.api_version == api_version && r.kind == kind)
    }

    /// Returns `true` if the pair is registered.
    pub fn recognizes(&self, api_version: &str, kind: &str) -> bool {
        self.lookup(api_version, kind).is_some()
    }
}

/// Register every kind of this crate into `scheme`.
pub fn add_to_scheme(scheme: &mut Scheme) {
    scheme.register::<Runner>();
}

/// Build a scheme holding every kind of this crate.
pub fn scheme() -> Scheme {
    let mut s = Scheme::new();
    add_to_scheme(&mut s);
    s
}
