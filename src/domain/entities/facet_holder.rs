//! FacetHolder entity - the per-feature capability registry
//!
//! Maps a capability key to at most one facet. Installation overwrites
//! unconditionally; combining with an earlier facet is up to the factory
//! doing the install.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use tracing::trace;

use crate::domain::facets::{Facet, FacetType};
use crate::domain::value_objects::Identifier;

type ErasedFacet = Arc<dyn Any + Send + Sync>;
type FacetView = for<'a> fn(&'a (dyn Any + Send + Sync + 'static)) -> Option<&'a dyn Facet>;

#[derive(Clone)]
struct Slot {
    facet_type: FacetType,
    /// Holds an `Arc<C>` for the slot's capability `C`
    erased: ErasedFacet,
    view: FacetView,
}

fn view_as_facet<'a, C: ?Sized + Facet>(
    erased: &'a (dyn Any + Send + Sync + 'static),
) -> Option<&'a dyn Facet> {
    erased
        .downcast_ref::<Arc<C>>()
        .map(|facet| facet.as_ref().as_facet())
}

/// Capability registry of one feature
#[derive(Clone)]
pub struct FacetHolder {
    feature: Arc<Identifier>,
    slots: HashMap<TypeId, Slot>,
}

impl FacetHolder {
    pub fn new(feature: Arc<Identifier>) -> Self {
        Self {
            feature,
            slots: HashMap::new(),
        }
    }

    pub fn feature(&self) -> &Arc<Identifier> {
        &self.feature
    }

    /// Install `facet` as the answer for capability `C`
    ///
    /// Returns `true` when a previously installed facet was replaced.
    pub fn install<C: ?Sized + Facet>(&mut self, facet: Arc<C>) -> bool {
        let facet_type = FacetType::of::<C>();
        let slot = Slot {
            facet_type,
            erased: Arc::new(facet),
            view: view_as_facet::<C>,
        };
        let replaced = self.slots.insert(facet_type.id(), slot).is_some();
        if replaced {
            trace!(feature = %self.feature, facet_type = %facet_type, "facet replaced");
        }
        replaced
    }

    /// The facet answering for capability `C`, if any
    pub fn lookup<C: ?Sized + Facet>(&self) -> Option<Arc<C>> {
        self.slots
            .get(&TypeId::of::<C>())
            .and_then(|slot| slot.erased.downcast_ref::<Arc<C>>())
            .cloned()
    }

    pub fn contains<C: ?Sized + Facet>(&self) -> bool {
        self.slots.contains_key(&TypeId::of::<C>())
    }

    pub fn contains_type(&self, facet_type: FacetType) -> bool {
        self.slots.contains_key(&facet_type.id())
    }

    /// Installed capabilities with their facets, sorted by capability name
    pub fn facets(&self) -> Vec<(FacetType, &dyn Facet)> {
        let mut facets: Vec<(FacetType, &dyn Facet)> = self
            .slots
            .values()
            .filter_map(|slot| Some((slot.facet_type, (slot.view)(slot.erased.as_ref())?)))
            .collect();
        facets.sort_by_key(|(facet_type, _)| facet_type.name());
        facets
    }

    pub fn facet_types(&self) -> Vec<FacetType> {
        self.facets().into_iter().map(|(t, _)| t).collect()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl fmt::Debug for FacetHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacetHolder")
            .field("feature", &self.feature)
            .field("facet_types", &self.facet_types())
            .finish()
    }
}

/// What happened to a capability slot during one installation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstallOutcome {
    Installed,
    Replaced,
}

/// One audit entry: which factory put which capability into the holder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Installation {
    pub factory: &'static str,
    #[serde(serialize_with = "serialize_facet_type")]
    pub facet_type: FacetType,
    pub outcome: InstallOutcome,
}

fn serialize_facet_type<S: Serializer>(
    facet_type: &FacetType,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&facet_type.name())
}
