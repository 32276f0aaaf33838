use super::current::{self, CurrentGuard};
use super::{Callback, ZoneSpec};
use crate::types::{is_truthy, Properties, ZoneResult};
use serde_json::Value;
use std::fmt::{Debug, Display, Formatter, Result};
use std::sync::{Arc, OnceLock};
use tracing::debug;
use uuid::Uuid;

/// Diagnostic name of the root zone
pub const ROOT_ZONE_NAME: &str = "global_zone";

static ROOT: OnceLock<Zone> = OnceLock::new();

struct ZoneInner {
    id: Uuid,
    name: String,
    properties: Properties,
    parent: Option<Zone>,
}

/// An immutable node in the context tree.
///
/// Cloning a `Zone` clones the handle, not the node: clones compare equal and
/// share properties and ancestry. A zone keeps its whole ancestor chain alive.
#[derive(Clone)]
pub struct Zone {
    inner: Arc<ZoneInner>,
}

impl Zone {
    /// Create a zone as a child of `parent`
    pub fn new(spec: ZoneSpec, parent: &Zone) -> ZoneResult<Zone> {
        spec.validate()?;
        let zone = Self::from_parts(spec.name, spec.properties, Some(parent.clone()));
        debug!(
            zone = %zone,
            parent = %parent,
            properties = zone.inner.properties.len(),
            "Created zone"
        );
        Ok(zone)
    }

    fn from_parts(name: String, properties: Properties, parent: Option<Zone>) -> Self {
        Self {
            inner: Arc::new(ZoneInner {
                id: Uuid::new_v4(),
                name,
                properties,
                parent,
            }),
        }
    }

    /// The process-wide root. It has no properties and no parent.
    pub fn root() -> Zone {
        ROOT.get_or_init(|| Self::from_parts(ROOT_ZONE_NAME.to_string(), Properties::new(), None))
            .clone()
    }

    /// The zone active on this thread
    pub fn current() -> Zone {
        current::current()
    }

    pub fn id(&self) -> Uuid {
        self.inner.id
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn parent(&self) -> Option<&Zone> {
        self.inner.parent.as_ref()
    }

    pub fn is_root(&self) -> bool {
        self.inner.parent.is_none()
    }

    /// Bindings declared on this zone alone, without ancestors
    pub fn properties(&self) -> &Properties {
        &self.inner.properties
    }

    /// Number of ancestors between this zone and the root
    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// Iterate over the parent chain, nearest first, ending at the root
    pub fn ancestors(&self) -> impl Iterator<Item = &Zone> {
        std::iter::successors(self.parent(), |zone| zone.parent())
    }

    /// Look `key` up here and then up the parent chain.
    ///
    /// A falsy binding (`null`, `false`, `0`, `""`) does not stop the walk, so
    /// a child cannot shadow an ancestor's value with a falsy one. At the root
    /// the root's own binding is returned as is. Use [`Zone::get_bound`] for a
    /// lookup that stops at the first binding of any value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut zone = self;
        loop {
            let value = zone.inner.properties.get(key);
            match zone.parent() {
                Some(parent) if !value.is_some_and(is_truthy) => zone = parent,
                _ => return value,
            }
        }
    }

    /// Look `key` up in the nearest zone that binds it, whatever the value
    pub fn get_bound(&self, key: &str) -> Option<&Value> {
        std::iter::once(self)
            .chain(self.ancestors())
            .find_map(|zone| zone.inner.properties.get(key))
    }

    /// Create a child of this zone
    pub fn fork(&self, spec: ZoneSpec) -> ZoneResult<Zone> {
        Zone::new(spec, self)
    }

    /// Run `f` synchronously with this zone as current, then restore the
    /// previous zone, even if `f` panics.
    pub fn run<R>(&self, f: impl FnOnce() -> R) -> R {
        let _guard = self.enter();
        f()
    }

    /// Make this zone current until the returned guard is dropped.
    ///
    /// The guard only covers synchronous code. Do not hold it across an
    /// `.await`: when the task resumes, the host restores the zone its
    /// resource was created in, not this one. To run a future in a zone, use
    /// `ZonedExt::in_zone` from the tokio adapter instead.
    pub fn enter(&self) -> CurrentGuard {
        CurrentGuard::enter(self)
    }

    /// Return a callback that runs `callback` inside this zone.
    ///
    /// A callback that was already wrapped, by this zone or another, is
    /// returned unchanged.
    pub fn wrap<A, R>(&self, callback: Callback<A, R>) -> Callback<A, R>
    where
        A: 'static,
        R: 'static,
    {
        if callback.is_wrapped() {
            return callback;
        }
        let zone = self.clone();
        Callback::bound(self.clone(), move |args| zone.run(|| callback.call(args)))
    }

    /// Wrap a plain closure in one step
    pub fn bind<A, R, F>(&self, f: F) -> Callback<A, R>
    where
        F: Fn(A) -> R + Send + Sync + 'static,
        A: 'static,
        R: 'static,
    {
        self.wrap(Callback::new(f))
    }

    /// Whether both handles point at the same node
    pub fn ptr_eq(a: &Zone, b: &Zone) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

impl PartialEq for Zone {
    fn eq(&self, other: &Self) -> bool {
        Zone::ptr_eq(self, other)
    }
}

impl Eq for Zone {}

impl Display for Zone {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let id = self.inner.id.simple().to_string();
        write!(f, "{}#{}", self.inner.name, &id[..8])
    }
}

// Ancestry is summarised as depth so nested zones do not print the whole chain
impl Debug for Zone {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("Zone")
            .field("name", &self.inner.name)
            .field("id", &self.inner.id)
            .field("properties", &self.inner.properties)
            .field("depth", &self.depth())
            .finish()
    }
}
