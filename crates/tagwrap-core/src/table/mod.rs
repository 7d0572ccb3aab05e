//! Explicit registry of a type's methods.
//!
//! The table maps method identity to an optional [`Marker`] and, for tagged
//! methods, to an invocation capability. Entries keep the order they were
//! declared or registered in; the scanner walks them in that order.
mod error;
pub use error::TableError;

use std::{error::Error, fmt, io::Write, sync::Arc};

use tagwrap_model::Marker;
use tracing::trace;

/// Error raised by a tagged method body.
pub type MethodError = Box<dyn Error + Send + Sync + 'static>;

/// Invocation capability for a tagged method.
///
/// Receives the target and the shared output stream; takes no other arguments.
pub type InvokeFn<T> = Arc<dyn Fn(&T, &mut dyn Write) -> Result<(), MethodError> + Send + Sync>;

/// Whether a method carries the marker.
pub enum MethodKind<T> {
    /// Method without a marker. Never invoked by the scanner.
    Plain,
    /// Method carrying a marker together with the way to call it.
    Tagged { marker: Marker, invoke: InvokeFn<T> },
}

impl<T> Clone for MethodKind<T> {
    fn clone(&self) -> Self {
        match self {
            MethodKind::Plain => MethodKind::Plain,
            MethodKind::Tagged { marker, invoke } => MethodKind::Tagged {
                marker: marker.clone(),
                invoke: Arc::clone(invoke),
            },
        }
    }
}

/// Single method known to the table.
pub struct MethodEntry<T> {
    name: &'static str,
    kind: MethodKind<T>,
}

impl<T> MethodEntry<T> {
    /// Entry for a method without a marker.
    pub fn plain(name: &'static str) -> Self {
        Self {
            name,
            kind: MethodKind::Plain,
        }
    }

    /// Entry for a tagged method.
    pub fn tagged<F>(name: &'static str, marker: Marker, invoke: F) -> Self
    where
        F: Fn(&T, &mut dyn Write) -> Result<(), MethodError> + Send + Sync + 'static,
    {
        Self {
            name,
            kind: MethodKind::Tagged {
                marker,
                invoke: Arc::new(invoke),
            },
        }
    }

    /// Method identity.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn kind(&self) -> &MethodKind<T> {
        &self.kind
    }

    /// Marker carried by this method, if any.
    pub fn marker(&self) -> Option<&Marker> {
        match &self.kind {
            MethodKind::Plain => None,
            MethodKind::Tagged { marker, .. } => Some(marker),
        }
    }

    #[inline]
    pub fn is_tagged(&self) -> bool {
        self.marker().is_some()
    }
}

impl<T> Clone for MethodEntry<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            kind: self.kind.clone(),
        }
    }
}

impl<T> fmt::Debug for MethodEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodEntry")
            .field("name", &self.name)
            .field("marker", &self.marker().map(Marker::label))
            .finish()
    }
}

/// Ordered set of methods exposed by `T`.
pub struct MethodTable<T> {
    entries: Vec<MethodEntry<T>>,
}

impl<T> MethodTable<T> {
    /// Create an empty table.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Table built from entries whose names are known to be unique.
    ///
    /// Used by `#[annotated]`; the compiler already rejects duplicate method
    /// names inside one `impl` block.
    #[doc(hidden)]
    pub fn declared(entries: Vec<MethodEntry<T>>) -> Self {
        Self { entries }
    }

    /// Register an entry at the end of the table.
    ///
    /// Fails if a method with the same name is already present.
    pub fn register(&mut self, entry: MethodEntry<T>) -> Result<&mut Self, TableError> {
        if self.get(entry.name).is_some() {
            return Err(TableError::DuplicateMethod(entry.name));
        }
        trace!(method = entry.name, tagged = entry.is_tagged(), "method registered");
        self.entries.push(entry);
        Ok(self)
    }

    /// Register a method without a marker.
    pub fn register_plain(&mut self, name: &'static str) -> Result<&mut Self, TableError> {
        self.register(MethodEntry::plain(name))
    }

    /// Register a tagged method, validating the label.
    ///
    /// # Examples
    /// ```
    /// use std::io::Write;
    /// use tagwrap_core::MethodTable;
    ///
    /// struct Greeter;
    ///
    /// let mut table = MethodTable::<Greeter>::new();
    /// table
    ///     .register_tagged("greet", "Greeting", |_g: &Greeter, out: &mut dyn Write| {
    ///         writeln!(out, "hello")?;
    ///         Ok(())
    ///     })
    ///     .unwrap();
    /// assert_eq!(table.tagged().count(), 1);
    /// ```
    pub fn register_tagged<F>(
        &mut self,
        name: &'static str,
        label: impl Into<std::borrow::Cow<'static, str>>,
        invoke: F,
    ) -> Result<&mut Self, TableError>
    where
        F: Fn(&T, &mut dyn Write) -> Result<(), MethodError> + Send + Sync + 'static,
    {
        let marker = Marker::new(label)?;
        self.register(MethodEntry::tagged(name, marker, invoke))
    }

    /// Look up an entry by method name.
    pub fn get(&self, name: &str) -> Option<&MethodEntry<T>> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// All entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = &MethodEntry<T>> {
        self.entries.iter()
    }

    /// Tagged entries in table order.
    pub fn tagged(&self) -> impl Iterator<Item = &MethodEntry<T>> {
        self.entries.iter().filter(|e| e.is_tagged())
    }

    /// Names and markers of tagged entries, in table order.
    pub fn markers(&self) -> impl Iterator<Item = (&'static str, &Marker)> {
        self.entries
            .iter()
            .filter_map(|e| e.marker().map(|m| (e.name, m)))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for MethodTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MethodTable<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T> fmt::Debug for MethodTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}
