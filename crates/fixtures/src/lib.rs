//! Sample entities and view-models.
//!
//! Every entity except [`Unbound`] is bound to a view-model by [`registries`]. `Person` and
//! `Company` are bound by registered name, the rest through their view-model type.

mod catalog;
mod company;
mod person;
mod team;

pub use crate::catalog::{Product, ProductViewModel, Unbound, User, UserViewModel};
pub use crate::company::{Company, CompanyViewModel};
pub use crate::person::{Person, PersonViewModel};
pub use crate::team::{Team, TeamViewModel};

use vista_model::TypeRegistry;
use vista_projection::{Metadata, ProjectionError};

/// Type registry holding every fixture type.
#[must_use]
pub fn types() -> TypeRegistry {
    TypeRegistry::builder()
        .register::<Person>()
        .register::<PersonViewModel>()
        .register::<Company>()
        .register::<CompanyViewModel>()
        .register::<Team>()
        .register::<TeamViewModel>()
        .register::<Product>()
        .register::<ProductViewModel>()
        .register::<User>()
        .register::<UserViewModel>()
        .register::<Unbound>()
        .build()
}

/// Type registry plus the bindings of every fixture entity except [`Unbound`].
///
/// # Errors
/// Returns a [`ProjectionError`] if a binding fails validation.
pub fn registries() -> Result<(TypeRegistry, Metadata), ProjectionError> {
    let types = types();
    let metadata = Metadata::builder(&types)
        .bind::<Person>("PersonViewModel")?
        .bind::<Company>("CompanyViewModel")?
        .bind_type::<TeamViewModel>()?
        .bind_type::<ProductViewModel>()?
        .bind_type::<UserViewModel>()?
        .build();

    Ok((types, metadata))
}
