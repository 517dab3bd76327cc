//! Facets - capabilities attached to a feature
//!
//! A facet is a small object describing one aspect of a feature (its
//! display name, its validation rules, how it is persisted). Holders index
//! facets by *capability*: either a concrete facet type or a capability
//! trait object such as `dyn PropertySetterFacet`. A facet that serves
//! several capabilities is installed once per capability.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::domain::services::FacetInstaller;
use crate::domain::value_objects::Identifier;

mod must_satisfy;
mod named;
mod property;
mod property_changed_event;
mod value_semantics;

pub use must_satisfy::{MustSatisfySpecificationFacet, Rejection, RuleSource};
pub use named::{NameSource, NamedFacet};
pub use property::{PropertyAccessorFacet, PropertyClearFacet, PropertySetterFacet};
pub use property_changed_event::{
    PostsPropertyChangedEventFacet, PostsPropertyChangedEventFacetWrapping,
};
pub use value_semantics::{SemanticsSource, ValueSemanticsFacet};

/// Common behavior of every facet
pub trait Facet: AsFacet + fmt::Debug + Send + Sync + 'static {
    /// The feature this facet belongs to
    fn feature(&self) -> &Arc<Identifier>;

    /// One-line summary for reports
    fn describe(&self) -> String;
}

/// View any facet, including a capability trait object, as `&dyn Facet`
pub trait AsFacet {
    fn as_facet(&self) -> &dyn Facet;
}

impl<T: Facet> AsFacet for T {
    fn as_facet(&self) -> &dyn Facet {
        self
    }
}

/// A facet whose whole content is a single value
pub trait SingleValueFacet<T>: Facet {
    fn value(&self) -> &T;
}

/// A facet that serves more than one capability
///
/// Install through [`FacetInstaller::install_multi`], which checks that
/// `install_into` covered every entry of `facet_types`.
pub trait MultiTypedFacet: Facet {
    /// Every capability this facet is installed under
    fn facet_types(&self) -> Vec<FacetType>;

    /// Install `self` once per capability in `facet_types`
    fn install_into(self: Arc<Self>, installer: &mut FacetInstaller<'_>)
    where
        Self: Sized;
}

/// Capability key of a facet
///
/// Compares by type identity only; the name is kept for reports.
#[derive(Clone, Copy)]
pub struct FacetType {
    id: TypeId,
    name: &'static str,
}

impl FacetType {
    pub fn of<C: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<C>(),
            name: type_name::<C>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Short capability name without module path (`PropertySetterFacet`)
    pub fn name(&self) -> String {
        short_type_name(self.name)
    }
}

impl PartialEq for FacetType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for FacetType {}

impl Hash for FacetType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for FacetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FacetType({})", self.name())
    }
}

impl fmt::Display for FacetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

fn short_type_name(full: &str) -> String {
    let full = full.trim_start_matches("dyn ");
    match full.find('<') {
        Some(open) => {
            let head = &full[..open];
            let inner = full[open + 1..].trim_end_matches('>');
            format!("{}<{}>", last_segment(head), short_type_name(inner))
        }
        None => last_segment(full).to_string(),
    }
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}
