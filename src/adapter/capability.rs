//! Builder capabilities
//!
//! Each capability is a narrow contract around a single terminal action. The
//! wrapped API implements whichever ones its request builders support; setters
//! stay inherent methods on the builder.

use super::resource_set::ResourceSet;

/// Marker for domain objects that can be listed by a [`Reader`]
pub trait Resource {}

/// Builder that creates a new resource
pub trait Creator<T> {
    /// Error produced by the wrapped API
    type Error;

    /// Consume the configured builder and create the resource
    fn create(self) -> Result<T, Self::Error>;
}

/// Builder that retrieves a single resource
pub trait Fetcher<T> {
    /// Error produced by the wrapped API
    type Error;

    /// Consume the configured builder and fetch the resource
    fn fetch(self) -> Result<T, Self::Error>;
}

/// Builder that lists or queries resources
pub trait Reader<T: Resource> {
    /// Error produced by the wrapped API
    type Error;

    /// Consume the configured builder and read the matching resources
    fn read(self) -> Result<ResourceSet<T>, Self::Error>;
}

/// Builder that mutates an existing resource
pub trait Updater<T> {
    /// Error produced by the wrapped API
    type Error;

    /// Consume the configured builder and apply the update
    fn update(self) -> Result<T, Self::Error>;
}

/// Builder that deletes a resource
pub trait Deleter {
    /// Error produced by the wrapped API
    type Error;

    /// Consume the configured builder and delete the resource
    fn delete(self) -> Result<(), Self::Error>;
}

/// Builder that assembles a value without fallible I/O
///
/// Markup builders implement this; `build` borrows so it can close a chain of
/// `&mut self` setters on a temporary.
pub trait Build {
    /// Value produced by the builder
    type Target;

    /// Assemble the value from the current builder state
    fn build(&self) -> Self::Target;
}
