//! Output and input values.
//!
//! An [`Output`] is a handle to a resource attribute that becomes available
//! only after the deployment engine has provisioned the owning resource.
//! Components wire outputs into downstream resource arguments as [`Input`]s;
//! the engine orders provisioning so that every input a resource resolves at
//! creation time is already available. Derived outputs created with
//! [`Output::map`] keep the identity of the resource they originate from, so
//! data dependencies survive transformation.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{RustformError, RustformResult};
use crate::types::ResourceId;

/// Internal source of an output value.
trait OutputSource<T>: Send + Sync {
    /// Return the current value, if the owning resource has been provisioned.
    fn poll(&self) -> Option<T>;
}

/// Root slot written once by a [`Resolver`] during provisioning.
struct Slot<T> {
    value: RwLock<Option<T>>,
}

impl<T: Clone + Send + Sync> OutputSource<T> for Slot<T> {
    fn poll(&self) -> Option<T> {
        self.value.read().clone()
    }
}

/// Output derived from another output through a pure function.
struct Mapped<S, T> {
    source: Output<S>,
    f: Box<dyn Fn(S) -> T + Send + Sync>,
}

impl<S, T> OutputSource<T> for Mapped<S, T>
where
    S: Clone + Send + Sync + 'static,
    T: Send + Sync,
{
    fn poll(&self) -> Option<T> {
        self.source.try_get().map(|value| (self.f)(value))
    }
}

/// A resource attribute that resolves when the owning resource is created.
pub struct Output<T> {
    source: Arc<dyn OutputSource<T>>,
    resource: Option<ResourceId>,
}

impl<T> Clone for Output<T> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            resource: self.resource,
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Output<T> {
    /// Create an unresolved output together with the [`Resolver`] that a
    /// provisioning operation uses to supply its value.
    #[must_use]
    pub fn pending() -> (Self, Resolver<T>) {
        let slot = Arc::new(Slot {
            value: RwLock::new(None),
        });
        let output = Self {
            source: Arc::clone(&slot) as Arc<dyn OutputSource<T>>,
            resource: None,
        };
        (output, Resolver { slot })
    }

    /// Create an output that is already resolved to `value`.
    #[must_use]
    pub fn from_value(value: T) -> Self {
        let slot = Arc::new(Slot {
            value: RwLock::new(Some(value)),
        });
        Self {
            source: slot,
            resource: None,
        }
    }

    /// Return the value if it has been resolved.
    #[must_use]
    pub fn try_get(&self) -> Option<T> {
        self.source.poll()
    }

    /// Return the resolved value.
    ///
    /// # Errors
    /// Returns [`RustformError::OutputUnresolved`] if the owning resource has
    /// not been provisioned yet.
    pub fn get(&self) -> RustformResult<T> {
        self.try_get().ok_or(RustformError::OutputUnresolved)
    }

    /// Derive a new output by applying `f` to the resolved value.
    ///
    /// The derived output keeps the source resource's identity, so consumers
    /// of the derived value still pick up the data dependency.
    #[must_use]
    pub fn map<U, F>(&self, f: F) -> Output<U>
    where
        U: Send + Sync + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        Output {
            source: Arc::new(Mapped {
                source: self.clone(),
                f: Box::new(f),
            }),
            resource: self.resource,
        }
    }

    /// Attach the id of the resource this output originates from.
    #[must_use]
    pub fn bind(mut self, resource: ResourceId) -> Self {
        self.resource = Some(resource);
        self
    }

    /// Id of the resource this output originates from, if any.
    #[must_use]
    pub fn resource(&self) -> Option<ResourceId> {
        self.resource
    }
}

impl<T: Clone + Send + Sync + 'static> fmt::Debug for Output<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output")
            .field("resolved", &self.try_get().is_some())
            .field("resource", &self.resource)
            .finish()
    }
}

/// Write-once handle used by provisioning operations to resolve an output.
pub struct Resolver<T> {
    slot: Arc<Slot<T>>,
}

impl<T: Clone + Send + Sync> Resolver<T> {
    /// Resolve the paired output to `value`.
    pub fn resolve(&self, value: T) {
        *self.slot.value.write() = Some(value);
    }
}

impl<T> fmt::Debug for Resolver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver").finish_non_exhaustive()
    }
}

/// A resource argument: either a literal value or a reference to another
/// resource's output.
pub enum Input<T> {
    /// A literal value known at declaration time.
    Value(T),
    /// A reference to an output resolved during deployment.
    Output(Output<T>),
}

impl<T: Clone + Send + Sync + 'static> Input<T> {
    /// Resolve the input to a concrete value.
    ///
    /// # Errors
    /// Returns [`RustformError::OutputUnresolved`] for an output reference
    /// whose resource has not been provisioned yet.
    pub fn resolve(&self) -> RustformResult<T> {
        match self {
            Self::Value(value) => Ok(value.clone()),
            Self::Output(output) => output.get(),
        }
    }

    /// Id of the resource this input depends on, if it references an output.
    #[must_use]
    pub fn resource(&self) -> Option<ResourceId> {
        match self {
            Self::Value(_) => None,
            Self::Output(output) => output.resource(),
        }
    }
}

impl<T> Clone for Input<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Self::Value(value) => Self::Value(value.clone()),
            Self::Output(output) => Self::Output(output.clone()),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> fmt::Debug for Input<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(_) => f.debug_struct("Input::Value").finish_non_exhaustive(),
            Self::Output(output) => f.debug_tuple("Input::Output").field(output).finish(),
        }
    }
}

impl<T> From<Output<T>> for Input<T> {
    fn from(output: Output<T>) -> Self {
        Self::Output(output)
    }
}

impl From<String> for Input<String> {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Input<String> {
    fn from(value: &str) -> Self {
        Self::Value(value.to_owned())
    }
}
