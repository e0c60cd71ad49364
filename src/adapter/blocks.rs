//! Configure-then-execute helpers
//!
//! Every helper runs the configuration block to completion against the builder
//! and only then invokes the terminal action, exactly once. Errors from either
//! step are returned unchanged.
//!
//! The block fails with the builder's own `Error` type, the same type the
//! terminal action returns. A block that produces some other error must convert
//! it first, usually through `?` and a `From` impl on the builder's error:
//!
//! ```ignore
//! impl From<LookupError> for ApiError { /* ... */ }
//!
//! creator.create_with(|c| {
//!     c.set_name(lookup_name()?);
//!     Ok(())
//! })?;
//! ```

use std::any::type_name;

use tracing::trace;

use super::capability::{Build, Creator, Deleter, Fetcher, Reader, Resource, Updater};
use super::resource_set::ResourceSet;

/// Run `configure` against `builder` and hand the configured builder back
pub fn apply<B, E, F>(mut builder: B, configure: F) -> Result<B, E>
where
    F: FnOnce(&mut B) -> Result<(), E>,
{
    trace!(builder = type_name::<B>(), "applying configuration block");
    configure(&mut builder)?;
    Ok(builder)
}

/// Configure a [`Creator`] and create the resource
pub fn create_with<T, B, F>(builder: B, configure: F) -> Result<T, B::Error>
where
    B: Creator<T>,
    F: FnOnce(&mut B) -> Result<(), B::Error>,
{
    let builder = apply(builder, configure)?;
    trace!(builder = type_name::<B>(), action = "create", "invoking terminal action");
    builder.create()
}

/// Configure a [`Fetcher`] and fetch the resource
pub fn fetch_with<T, B, F>(builder: B, configure: F) -> Result<T, B::Error>
where
    B: Fetcher<T>,
    F: FnOnce(&mut B) -> Result<(), B::Error>,
{
    let builder = apply(builder, configure)?;
    trace!(builder = type_name::<B>(), action = "fetch", "invoking terminal action");
    builder.fetch()
}

/// Configure a [`Reader`] and read the matching resources
pub fn read_with<T, B, F>(builder: B, configure: F) -> Result<ResourceSet<T>, B::Error>
where
    T: Resource,
    B: Reader<T>,
    F: FnOnce(&mut B) -> Result<(), B::Error>,
{
    let builder = apply(builder, configure)?;
    trace!(builder = type_name::<B>(), action = "read", "invoking terminal action");
    builder.read()
}

/// Configure an [`Updater`] and apply the update
pub fn update_with<T, B, F>(builder: B, configure: F) -> Result<T, B::Error>
where
    B: Updater<T>,
    F: FnOnce(&mut B) -> Result<(), B::Error>,
{
    let builder = apply(builder, configure)?;
    trace!(builder = type_name::<B>(), action = "update", "invoking terminal action");
    builder.update()
}

/// Configure a [`Deleter`] and delete the resource
pub fn delete_with<B, F>(builder: B, configure: F) -> Result<(), B::Error>
where
    B: Deleter,
    F: FnOnce(&mut B) -> Result<(), B::Error>,
{
    let builder = apply(builder, configure)?;
    trace!(builder = type_name::<B>(), action = "delete", "invoking terminal action");
    builder.delete()
}

/// Configure a [`Build`] implementor and build its target
pub fn build_with<B, F>(mut builder: B, configure: F) -> B::Target
where
    B: Build,
    F: FnOnce(&mut B),
{
    configure(&mut builder);
    builder.build()
}

/// Method form of [`create_with`], available on every [`Creator`]
///
/// The block's error type is `Self::Error`; see the module docs for lifting
/// other error types into it.
pub trait CreateWith<T>: Creator<T> + Sized {
    fn create_with<F>(self, configure: F) -> Result<T, Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        create_with(self, configure)
    }
}

impl<T, B: Creator<T>> CreateWith<T> for B {}

/// Method form of [`fetch_with`], available on every [`Fetcher`]
pub trait FetchWith<T>: Fetcher<T> + Sized {
    fn fetch_with<F>(self, configure: F) -> Result<T, Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        fetch_with(self, configure)
    }
}

impl<T, B: Fetcher<T>> FetchWith<T> for B {}

/// Method form of [`read_with`], available on every [`Reader`]
pub trait ReadWith<T: Resource>: Reader<T> + Sized {
    fn read_with<F>(self, configure: F) -> Result<ResourceSet<T>, Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        read_with(self, configure)
    }
}

impl<T: Resource, B: Reader<T>> ReadWith<T> for B {}

/// Method form of [`update_with`], available on every [`Updater`]
pub trait UpdateWith<T>: Updater<T> + Sized {
    fn update_with<F>(self, configure: F) -> Result<T, Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        update_with(self, configure)
    }
}

impl<T, B: Updater<T>> UpdateWith<T> for B {}

/// Method form of [`delete_with`], available on every [`Deleter`]
pub trait DeleteWith: Deleter + Sized {
    fn delete_with<F>(self, configure: F) -> Result<(), Self::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), Self::Error>,
    {
        delete_with(self, configure)
    }
}

impl<B: Deleter> DeleteWith for B {}

/// Method form of [`build_with`], available on every [`Build`] implementor
pub trait BuildWith: Build + Sized {
    fn build_with<F>(self, configure: F) -> Self::Target
    where
        F: FnOnce(&mut Self),
    {
        build_with(self, configure)
    }
}

impl<B: Build> BuildWith for B {}
