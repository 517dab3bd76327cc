//! Identifier value object
//!
//! The identity of a feature: a class, a property/collection, or an action
//! together with its parameter types. Identifiers are created once while the
//! metamodel is built and then shared read-only by every holder and consumer.
//!
//! ## Renderings
//!
//! | Depth | Example |
//! |-------|---------|
//! | `Class` | `com.acme.Order` |
//! | `ClassMemberName` | `com.acme.Order#ship` |
//! | `ClassMemberNameParms` | `com.acme.Order#ship(java.lang.String,int)` |
//! | `MemberNameOnly` | `ship` |
//! | `ParmsOnly` | `(java.lang.String,int)` (actions only, empty otherwise) |
//!
//! ## Equality, hashing and ordering
//!
//! Equality compares class name, member name and parameter names; the
//! feature type is ignored. Hashing and ordering use the canonical string
//! (`Class#member(params)`, parentheses always present), which does not
//! depend on the feature type either. Ordering can therefore report `Equal`
//! for identifiers whose tokens themselves contain `#`, `(` or `,` even
//! though `==` says they differ.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::natural_name::natural_name;

/// What type of feature an identifier names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureType {
    Class,
    PropertyOrCollection,
    Action,
}

impl FeatureType {
    pub const ALL: [FeatureType; 3] = [
        FeatureType::Class,
        FeatureType::PropertyOrCollection,
        FeatureType::Action,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            FeatureType::Class => "class",
            FeatureType::PropertyOrCollection => "property",
            FeatureType::Action => "action",
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How much of an identifier to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    Class,
    ClassMemberName,
    ClassMemberNameParms,
    MemberNameOnly,
    ParmsOnly,
}

impl Depth {
    pub const ALL: [Depth; 5] = [
        Depth::Class,
        Depth::ClassMemberName,
        Depth::ClassMemberNameParms,
        Depth::MemberNameOnly,
        Depth::ParmsOnly,
    ];

    /// Render `identifier` at this depth
    pub fn to_identity_string(&self, identifier: &Identifier) -> String {
        match self {
            Depth::Class => identifier.class_identity_string(),
            Depth::ClassMemberName => identifier.class_and_name_identity_string(),
            Depth::ClassMemberNameParms => identifier.full_identity_string().to_string(),
            Depth::MemberNameOnly => identifier.name_identity_string(),
            Depth::ParmsOnly => identifier.parms_identity_string(),
        }
    }
}

/// Immutable feature identity
///
/// Both cached renderings are write-once cells; concurrent first calls may
/// compute the same string twice but only one value is ever stored.
#[derive(Clone)]
pub struct Identifier {
    class_name: String,
    member_name: String,
    parameter_names: Vec<String>,
    feature_type: FeatureType,
    full_identity: OnceLock<String>,
    canonical: OnceLock<String>,
}

impl Identifier {
    fn new(
        class_name: String,
        member_name: String,
        parameter_names: Vec<String>,
        feature_type: FeatureType,
    ) -> Self {
        Self {
            class_name,
            member_name,
            parameter_names,
            feature_type,
            full_identity: OnceLock::new(),
            canonical: OnceLock::new(),
        }
    }

    /// Identity of a class
    pub fn class_identifier(class_name: impl Into<String>) -> Self {
        Self::new(
            class_name.into(),
            String::new(),
            Vec::new(),
            FeatureType::Class,
        )
    }

    /// Identity of a property or collection
    pub fn property_or_collection_identifier(
        class_name: impl Into<String>,
        member_name: impl Into<String>,
    ) -> Self {
        Self::new(
            class_name.into(),
            member_name.into(),
            Vec::new(),
            FeatureType::PropertyOrCollection,
        )
    }

    /// Identity of an action; parameter order is significant
    pub fn action_identifier<I, S>(
        class_name: impl Into<String>,
        action_name: impl Into<String>,
        parameter_names: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            class_name.into(),
            action_name.into(),
            parameter_names.into_iter().map(Into::into).collect(),
            FeatureType::Action,
        )
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn member_name(&self) -> &str {
        &self.member_name
    }

    pub fn member_parameter_names(&self) -> &[String] {
        &self.parameter_names
    }

    pub fn feature_type(&self) -> FeatureType {
        self.feature_type
    }

    /// "firstName" becomes "First Name"
    pub fn member_natural_name(&self) -> String {
        natural_name(&self.member_name)
    }

    pub fn member_parameter_natural_names(&self) -> Vec<String> {
        self.parameter_names
            .iter()
            .map(|name| natural_name(name))
            .collect()
    }

    pub fn is_class(&self) -> bool {
        self.feature_type == FeatureType::Class
    }

    pub fn is_property_or_collection(&self) -> bool {
        self.feature_type == FeatureType::PropertyOrCollection
    }

    pub fn is_action(&self) -> bool {
        self.feature_type == FeatureType::Action
    }

    pub fn to_identity_string(&self, depth: Depth) -> String {
        depth.to_identity_string(self)
    }

    pub fn class_identity_string(&self) -> String {
        self.class_name.clone()
    }

    pub fn name_identity_string(&self) -> String {
        self.member_name.clone()
    }

    pub fn class_and_name_identity_string(&self) -> String {
        let mut buf = String::with_capacity(self.class_name.len() + self.member_name.len() + 1);
        self.write_class_and_name(&mut buf);
        buf
    }

    /// `(p1,p2)` for actions, empty for everything else
    pub fn parms_identity_string(&self) -> String {
        let mut buf = String::new();
        if self.is_action() {
            self.write_parameter_names(&mut buf);
        }
        buf
    }

    pub fn name_parms_identity_string(&self) -> String {
        let mut buf = self.member_name.clone();
        buf.push_str(&self.parms_identity_string());
        buf
    }

    /// Class only for class identities, otherwise `Class#member` plus the
    /// parameter list for actions. Computed once.
    pub fn full_identity_string(&self) -> &str {
        self.full_identity.get_or_init(|| {
            if self.member_name.is_empty() {
                self.class_identity_string()
            } else {
                let mut buf = self.class_and_name_identity_string();
                buf.push_str(&self.parms_identity_string());
                buf
            }
        })
    }

    /// `Class#member(params)` regardless of feature type. Computed once.
    pub fn canonical_string(&self) -> &str {
        self.canonical.get_or_init(|| {
            let mut buf = String::new();
            self.write_class_and_name(&mut buf);
            self.write_parameter_names(&mut buf);
            buf
        })
    }

    fn write_class_and_name(&self, buf: &mut String) {
        buf.push_str(&self.class_name);
        buf.push('#');
        buf.push_str(&self.member_name);
    }

    fn write_parameter_names(&self, buf: &mut String) {
        buf.push('(');
        buf.push_str(&self.parameter_names.join(","));
        buf.push(')');
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.class_name == other.class_name
            && self.member_name == other.member_name
            && self.parameter_names == other.parameter_names
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_string().hash(state);
    }
}

impl PartialOrd for Identifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Identifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.canonical_string().cmp(other.canonical_string())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_string())
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identifier")
            .field("class_name", &self.class_name)
            .field("member_name", &self.member_name)
            .field("parameter_names", &self.parameter_names)
            .field("feature_type", &self.feature_type)
            .finish()
    }
}
