use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;

// ── BeanInfo ────────────────────────────────────────────────────────────────

/// Name and type of a registered bean, in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeanInfo {
    pub name: String,
    pub type_name: &'static str,
}

// ── BeanContext ─────────────────────────────────────────────────────────────

/// Read-only container holding every constructed component.
///
/// Produced by [`BeanRegistry::resolve`]. Each entry is keyed by [`TypeId`],
/// so a component is looked up by its type.
pub struct BeanContext {
    entries: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
    inventory: Vec<BeanInfo>,
}

impl fmt::Debug for BeanContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanContext")
            .field("entry_count", &self.entries.len())
            .finish()
    }
}

impl BeanContext {
    /// Retrieve a bean by type, cloning it out of the context.
    pub fn get<T: Clone + 'static>(&self) -> Result<T, BeanError> {
        self.try_get::<T>().ok_or_else(|| BeanError::NotFound {
            type_name: type_name::<T>().to_string(),
        })
    }

    /// Try to retrieve a bean by type, returning `None` if absent.
    pub fn try_get<T: Clone + 'static>(&self) -> Option<T> {
        self.entries
            .get(&TypeId::of::<T>())
            .and_then(|v| v.downcast_ref::<T>())
            .cloned()
    }

    /// Every registered bean, in the order it was provided.
    pub fn inventory(&self) -> &[BeanInfo] {
        &self.inventory
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ── BeanRegistry ────────────────────────────────────────────────────────────

/// Collects instances built by explicit bootstrap code and freezes them
/// into a [`BeanContext`].
///
/// Construction order is the caller's: build a dependency first, hand it to
/// the constructor of whatever needs it, then `provide` both.
///
/// ```ignore
/// let mapper = StudentMapper::new();
/// let service = StudentServiceImpl::new(pool.clone(), mapper.clone());
///
/// let mut registry = BeanRegistry::new();
/// registry.provide(mapper).provide(service);
/// let ctx = registry.resolve()?;
/// let service: StudentServiceImpl = ctx.get()?;
/// ```
pub struct BeanRegistry {
    entries: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
    inventory: Vec<BeanInfo>,
    duplicates: Vec<&'static str>,
}

/// Errors raised while assembling or reading a [`BeanContext`].
#[derive(Debug)]
pub enum BeanError {
    /// The same type was provided more than once.
    DuplicateBean { type_name: String },
    /// No bean of the requested type exists.
    NotFound { type_name: String },
}

impl fmt::Display for BeanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeanError::DuplicateBean { type_name } => {
                write!(f, "Bean of type '{}' registered twice", type_name)
            }
            BeanError::NotFound { type_name } => {
                write!(f, "Bean of type '{}' not found in context", type_name)
            }
        }
    }
}

impl std::error::Error for BeanError {}

impl BeanRegistry {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            inventory: Vec::new(),
            duplicates: Vec::new(),
        }
    }

    /// Provide a pre-built instance under its own type, named after the
    /// last path segment of the type.
    pub fn provide<T: Clone + Send + Sync + 'static>(&mut self, value: T) -> &mut Self {
        self.provide_named(short_type_name::<T>(), value)
    }

    /// Provide a pre-built instance with an explicit bean name.
    pub fn provide_named<T: Clone + Send + Sync + 'static>(
        &mut self,
        name: impl Into<String>,
        value: T,
    ) -> &mut Self {
        let type_id = TypeId::of::<T>();
        if self.entries.insert(type_id, Box::new(value)).is_some() {
            self.duplicates.push(type_name::<T>());
            return self;
        }
        self.inventory.push(BeanInfo {
            name: name.into(),
            type_name: type_name::<T>(),
        });
        self
    }

    /// Freeze the registry into a [`BeanContext`].
    ///
    /// Fails if any type was provided twice.
    pub fn resolve(self) -> Result<BeanContext, BeanError> {
        if let Some(type_name) = self.duplicates.first() {
            return Err(BeanError::DuplicateBean {
                type_name: type_name.to_string(),
            });
        }
        Ok(BeanContext {
            entries: self.entries,
            inventory: self.inventory,
        })
    }
}

impl Default for BeanRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// `my_crate::service::StudentServiceImpl` -> `studentServiceImpl`.
fn short_type_name<T: ?Sized>() -> String {
    let full = type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    let last = base.rsplit("::").next().unwrap_or(base);
    let mut chars = last.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
