//! A minimal compile-time dependency injection container.
//!
//! A [`Provider`] owns the "leaf" dependencies (configuration values,
//! connections) and a cache of everything built from them. Types implementing
//! [`Build`] describe how they are assembled from a provider; for structs this
//! is usually derived via `#[derive(Build)]`, which builds every field from the
//! provider and caches the result so that each type is only built once.

pub use contactform_di_derive::Build;
pub use typemap::TypeMap;

mod macros;
mod typemap;

pub trait Provider: Sized {
    fn cache(&mut self) -> &mut TypeMap;
}

#[diagnostic::on_unimplemented(
    message = "The type `{Self}` cannot be built using the provider `{P}`",
    note = "Add `{Self}` to the provider `{P}` or implement `Build` for `{Self}` and make sure \
            all dependencies are satisfied"
)]
pub trait Build<P: Provider>: Clone + 'static {
    fn build(provider: &mut P) -> Self;
}

pub trait Provides: Provider {
    fn provide<T: Build<Self>>(&mut self) -> T {
        T::build(self)
    }
}

impl<P: Provider> Provides for P {}
