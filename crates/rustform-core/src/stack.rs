//! Stack registry: resource declarations, ownership, and dependency edges.
//!
//! A [`Stack`] collects resource declarations during a single evaluation
//! pass. Each declaration records its type token, logical name, optional
//! parent (component ownership), explicit `depends_on` edges, data
//! dependencies harvested from its inputs, and the provider-supplied
//! provisioning operation. Dependency handles can only name resources that
//! are already registered, so registration order is always a valid
//! topological order of the deployment graph.

use std::fmt;
use std::sync::atomic::AtomicBool;

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parking_lot::RwLock;
use tracing::debug;

use crate::error::{RustformError, RustformResult};
use crate::output::Output;
use crate::types::{ResourceId, ResourceType, Urn};

/// A provider-supplied resource creation operation.
///
/// Implementations resolve their inputs, perform the provider-side mutation,
/// and resolve the handle outputs of the resource they create. Errors are
/// propagated unchanged; the engine only attaches the resource URN.
#[async_trait]
pub trait Provision: Send {
    /// Create the resource.
    async fn create(self: Box<Self>) -> anyhow::Result<()>;
}

/// Options accepted by every resource declaration.
#[derive(Debug, Default, Clone)]
pub struct ResourceOptions {
    /// Owning parent resource (component ownership scope).
    pub parent: Option<ResourceId>,
    /// Explicit ordering prerequisites, beyond data references.
    pub depends_on: Vec<ResourceId>,
}

impl ResourceOptions {
    /// Options for a child owned by `parent`.
    #[must_use]
    pub fn parent(parent: ResourceId) -> Self {
        Self {
            parent: Some(parent),
            depends_on: Vec::new(),
        }
    }

    /// Add explicit ordering prerequisites.
    #[must_use]
    pub fn with_depends_on(mut self, prerequisites: impl IntoIterator<Item = ResourceId>) -> Self {
        self.depends_on.extend(prerequisites);
        self
    }
}

/// A resource declaration submitted to [`Stack::register`].
pub struct Declaration {
    /// The resource type token.
    pub type_token: ResourceType,
    /// Logical name, unique per type within the stack.
    pub name: String,
    /// Data dependencies harvested from input/output references.
    pub data_deps: Vec<ResourceId>,
    /// Declaration options (parent, explicit depends_on).
    pub options: ResourceOptions,
    /// The provisioning operation; `None` for component resources.
    pub provision: Option<Box<dyn Provision>>,
}

impl fmt::Debug for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Declaration")
            .field("type_token", &self.type_token)
            .field("name", &self.name)
            .field("data_deps", &self.data_deps)
            .field("options", &self.options)
            .field("has_provision", &self.provision.is_some())
            .finish()
    }
}

/// Introspection view of a registered resource.
#[derive(Debug, Clone)]
pub struct ResourceSummary {
    /// The resource id.
    pub id: ResourceId,
    /// The resource URN.
    pub urn: Urn,
    /// The resource type token.
    pub type_token: ResourceType,
    /// The logical name.
    pub name: String,
    /// Owning parent, if any.
    pub parent: Option<ResourceId>,
    /// Explicitly declared prerequisites.
    pub explicit_depends_on: Vec<ResourceId>,
    /// All ordering prerequisites: explicit, data, and parent edges.
    pub dependencies: Vec<ResourceId>,
}

pub(crate) struct ResourceRecord {
    pub(crate) urn: Urn,
    pub(crate) type_token: ResourceType,
    pub(crate) name: String,
    pub(crate) parent: Option<ResourceId>,
    pub(crate) explicit_depends_on: Vec<ResourceId>,
    pub(crate) data_deps: Vec<ResourceId>,
    pub(crate) provision: Option<Box<dyn Provision>>,
    pub(crate) outputs: Vec<(String, Output<String>)>,
}

impl ResourceRecord {
    /// Union of explicit, data, and parent edges, deduplicated.
    pub(crate) fn all_dependencies(&self) -> Vec<ResourceId> {
        let mut deps: Vec<ResourceId> = self
            .explicit_depends_on
            .iter()
            .chain(self.data_deps.iter())
            .copied()
            .chain(self.parent)
            .collect();
        deps.sort_unstable();
        deps.dedup();
        deps
    }
}

/// Registry of declared resources for one deployment.
pub struct Stack {
    name: String,
    pub(crate) records: RwLock<Vec<ResourceRecord>>,
    names: DashMap<(ResourceType, String), ResourceId>,
    pub(crate) deployed: AtomicBool,
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("name", &self.name)
            .field("resources", &self.records.read().len())
            .finish_non_exhaustive()
    }
}

impl Stack {
    /// Create an empty stack.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: RwLock::new(Vec::new()),
            names: DashMap::new(),
            deployed: AtomicBool::new(false),
        }
    }

    /// The stack name used in URNs.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a resource declaration.
    ///
    /// # Errors
    /// Rejects empty logical names, duplicate `(type, name)` pairs, and
    /// dependency edges that reference unknown resources.
    pub fn register(&self, declaration: Declaration) -> RustformResult<ResourceId> {
        let Declaration {
            type_token,
            name,
            data_deps,
            options,
            provision,
        } = declaration;

        if name.is_empty() {
            return Err(RustformError::EmptyName);
        }

        let mut records = self.records.write();
        let id = ResourceId::new(records.len() as u64);

        let known = |dep: ResourceId| dep.index() < records.len();
        for dep in options
            .depends_on
            .iter()
            .chain(data_deps.iter())
            .copied()
            .chain(options.parent)
        {
            if !known(dep) {
                return Err(RustformError::UnknownDependency(dep));
            }
        }

        // Entry, not insert: a rejected duplicate must leave the original
        // (type, name) mapping in place.
        match self.names.entry((type_token, name.clone())) {
            Entry::Occupied(_) => {
                return Err(RustformError::DuplicateResource {
                    type_token: type_token.as_str().to_owned(),
                    name,
                });
            }
            Entry::Vacant(vacant) => {
                vacant.insert(id);
            }
        }

        let urn = Urn::new(&self.name, type_token, &name);
        debug!(urn = %urn, parent = ?options.parent, "resource registered");

        records.push(ResourceRecord {
            urn,
            type_token,
            name,
            parent: options.parent,
            explicit_depends_on: options.depends_on,
            data_deps,
            provision,
            outputs: Vec::new(),
        });

        Ok(id)
    }

    /// Register a component resource and return its child scope.
    ///
    /// Component resources have no provisioning operation of their own; they
    /// exist to own children and carry outputs.
    ///
    /// # Errors
    /// Same conditions as [`Stack::register`].
    pub fn component(
        &self,
        type_token: ResourceType,
        name: &str,
        options: ResourceOptions,
    ) -> RustformResult<ComponentScope<'_>> {
        let id = self.register(Declaration {
            type_token,
            name: name.to_owned(),
            data_deps: Vec::new(),
            options,
            provision: None,
        })?;
        Ok(ComponentScope { stack: self, id })
    }

    /// Introspect all registered resources, in registration order.
    #[must_use]
    pub fn resources(&self) -> Vec<ResourceSummary> {
        self.records
            .read()
            .iter()
            .enumerate()
            .map(|(index, record)| ResourceSummary {
                id: ResourceId::new(index as u64),
                urn: record.urn.clone(),
                type_token: record.type_token,
                name: record.name.clone(),
                parent: record.parent,
                explicit_depends_on: record.explicit_depends_on.clone(),
                dependencies: record.all_dependencies(),
            })
            .collect()
    }

    /// Introspect the registered resources of one type.
    #[must_use]
    pub fn resources_of_type(&self, type_token: ResourceType) -> Vec<ResourceSummary> {
        self.resources()
            .into_iter()
            .filter(|summary| summary.type_token == type_token)
            .collect()
    }

    /// Outputs registered on a resource (typically a component).
    #[must_use]
    pub fn outputs_of(&self, id: ResourceId) -> Vec<(String, Output<String>)> {
        self.records
            .read()
            .get(id.index())
            .map(|record| record.outputs.clone())
            .unwrap_or_default()
    }
}

/// Handle to a registered component resource, used to declare owned children
/// and register component outputs.
#[derive(Debug, Clone, Copy)]
pub struct ComponentScope<'a> {
    stack: &'a Stack,
    id: ResourceId,
}

impl<'a> ComponentScope<'a> {
    /// The component's resource id.
    #[must_use]
    pub fn id(&self) -> ResourceId {
        self.id
    }

    /// The stack this component belongs to.
    #[must_use]
    pub fn stack(&self) -> &'a Stack {
        self.stack
    }

    /// Options that parent a child resource to this component.
    #[must_use]
    pub fn child_options(&self) -> ResourceOptions {
        ResourceOptions::parent(self.id)
    }

    /// Register a named output on the component.
    pub fn register_output(&self, name: &str, output: &Output<String>) {
        if let Some(record) = self.stack.records.write().get_mut(self.id.index()) {
            record.outputs.push((name.to_owned(), output.clone()));
        }
    }
}
