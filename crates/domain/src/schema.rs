//! Trait schemas.
//!
//! Every character type declares its traits once, at startup. The schema
//! owns the trait definitions in a flat arena; everything else refers to a
//! trait by its [`TraitId`] (its index in that arena). Looking a trait up by
//! name goes through a single `name -> TraitId` index built here.
//!
//! Schemas are built through [`TraitSchemaBuilder`], which rejects malformed
//! declarations up front so that the ledger never has to second-guess one.

use std::collections::HashMap;

use crate::error::DomainError;
use crate::ids::TraitId;
use crate::progression::TraitCategory;
use crate::value_objects::{LinkedStatDef, RaisePolicy, TraitRange, TraitValues};

/// One declared trait.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitDef {
    id: TraitId,
    name: &'static str,
    display_name: String,
    category: TraitCategory,
    range: TraitRange,
    default: i32,
    capped_by: Option<TraitId>,
}

impl TraitDef {
    pub fn id(&self) -> TraitId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn category(&self) -> TraitCategory {
        self.category
    }

    pub fn range(&self) -> TraitRange {
        self.range
    }

    pub fn default_value(&self) -> i32 {
        self.default
    }

    /// Trait whose current value this one may never exceed when bought.
    pub fn capped_by(&self) -> Option<TraitId> {
        self.capped_by
    }
}

/// The full trait layout of one character type.
#[derive(Debug, Clone)]
pub struct TraitSchema {
    traits: Vec<TraitDef>,
    index: HashMap<&'static str, TraitId>,
    linked: Vec<LinkedStatDef>,
}

impl TraitSchema {
    pub fn builder() -> TraitSchemaBuilder {
        TraitSchemaBuilder::default()
    }

    /// Resolve a trait name. Names are matched exactly.
    pub fn id(&self, name: &str) -> Option<TraitId> {
        self.index.get(name).copied()
    }

    pub fn def(&self, id: TraitId) -> Option<&TraitDef> {
        self.traits.get(id.index())
    }

    pub fn def_by_name(&self, name: &str) -> Option<&TraitDef> {
        self.id(name).and_then(|id| self.def(id))
    }

    pub fn traits(&self) -> impl Iterator<Item = &TraitDef> {
        self.traits.iter()
    }

    pub fn traits_in(&self, category: TraitCategory) -> impl Iterator<Item = &TraitDef> {
        self.traits.iter().filter(move |t| t.category == category)
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    pub fn linked_stats(&self) -> &[LinkedStatDef] {
        &self.linked
    }

    /// Linked pair by its own name (`"willpower"`, `"blood_pool"`, ...).
    pub fn linked(&self, name: &str) -> Option<&LinkedStatDef> {
        self.linked.iter().find(|l| l.name() == name)
    }

    /// Linked pair whose permanent half is `id`, if any.
    pub fn linked_for_permanent(&self, id: TraitId) -> Option<&LinkedStatDef> {
        self.linked.iter().find(|l| l.permanent_id() == id)
    }

    /// Fresh value storage holding every trait's default.
    pub fn defaults(&self) -> TraitValues {
        TraitValues::from_defaults(self.traits.iter().map(|t| t.default))
    }

    /// Whether `other` stores values in the same slots with the same rules:
    /// identical trait names, categories and ranges in the same order, and
    /// identical linked pairs.
    pub fn same_layout(&self, other: &TraitSchema) -> bool {
        self.traits.len() == other.traits.len()
            && self.traits.iter().zip(&other.traits).all(|(a, b)| {
                a.name == b.name && a.category == b.category && a.range == b.range
            })
            && self.linked == other.linked
    }

    /// Whether `values` belongs to this schema and respects every range and cap.
    pub fn validate(&self, values: &TraitValues) -> bool {
        values.len() == self.traits.len()
            && self
                .traits
                .iter()
                .all(|t| t.range.contains(values.get(t.id)))
            && self.linked.iter().all(|l| l.holds_for(values))
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Declaration of a single trait, consumed by [`TraitSchemaBuilder`].
#[derive(Debug, Clone)]
pub struct TraitSpec {
    name: &'static str,
    category: TraitCategory,
    range: Option<(i32, i32)>,
    default: Option<i32>,
    capped_by: Option<&'static str>,
}

impl TraitSpec {
    pub fn new(name: &'static str, category: TraitCategory) -> Self {
        Self {
            name,
            category,
            range: None,
            default: None,
            capped_by: None,
        }
    }

    /// Override the category's default range.
    pub fn range(mut self, min: i32, max: i32) -> Self {
        self.range = Some((min, max));
        self
    }

    /// Starting value (defaults to the range minimum).
    pub fn default_value(mut self, value: i32) -> Self {
        self.default = Some(value);
        self
    }

    /// Purchases may not raise this trait above `other`'s current value.
    pub fn capped_by(mut self, other: &'static str) -> Self {
        self.capped_by = Some(other);
        self
    }
}

/// Declaration of a permanent/temporary pair.
#[derive(Debug, Clone)]
pub struct PairSpec {
    name: &'static str,
    permanent: &'static str,
    temporary: &'static str,
    cap_temporary: bool,
    min_temporary: i32,
    max_temporary: Option<i32>,
    raise_policy: RaisePolicy,
}

impl PairSpec {
    /// A capped pair with a temporary floor of 0 whose temporary half gains a
    /// point with every purchased dot.
    pub fn new(name: &'static str, permanent: &'static str, temporary: &'static str) -> Self {
        Self {
            name,
            permanent,
            temporary,
            cap_temporary: true,
            min_temporary: 0,
            max_temporary: None,
            raise_policy: RaisePolicy::RaiseBoth,
        }
    }

    /// Allow temporary to exceed permanent (up to the temporary trait's max).
    pub fn uncapped(mut self) -> Self {
        self.cap_temporary = false;
        self
    }

    pub fn min_temporary(mut self, min: i32) -> Self {
        self.min_temporary = min;
        self
    }

    pub fn max_temporary(mut self, max: i32) -> Self {
        self.max_temporary = Some(max);
        self
    }

    pub fn raise_policy(mut self, policy: RaisePolicy) -> Self {
        self.raise_policy = policy;
        self
    }
}

#[derive(Debug, Default)]
pub struct TraitSchemaBuilder {
    traits: Vec<TraitSpec>,
    pairs: Vec<PairSpec>,
}

impl TraitSchemaBuilder {
    /// Declare several traits of one category with default range and value.
    pub fn traits(mut self, category: TraitCategory, names: &[&'static str]) -> Self {
        self.traits
            .extend(names.iter().map(|&name| TraitSpec::new(name, category)));
        self
    }

    pub fn trait_spec(mut self, spec: TraitSpec) -> Self {
        self.traits.push(spec);
        self
    }

    pub fn pair(mut self, spec: PairSpec) -> Self {
        self.pairs.push(spec);
        self
    }

    pub fn build(self) -> Result<TraitSchema, DomainError> {
        if self.traits.len() > usize::from(u16::MAX) {
            return Err(DomainError::validation(format!(
                "Schema declares {} traits, more than a schema can index",
                self.traits.len()
            )));
        }

        let mut index = HashMap::with_capacity(self.traits.len());
        for (i, spec) in self.traits.iter().enumerate() {
            if spec.name.is_empty() {
                return Err(DomainError::validation("Trait name cannot be empty"));
            }
            if index.insert(spec.name, TraitId::from_index(i)).is_some() {
                return Err(DomainError::validation(format!(
                    "Duplicate trait name: {}",
                    spec.name
                )));
            }
        }

        let resolve = |name: &str, context: &str| {
            index.get(name).copied().ok_or_else(|| {
                DomainError::validation(format!("{} references unknown trait: {}", context, name))
            })
        };

        let mut traits = Vec::with_capacity(self.traits.len());
        for (i, spec) in self.traits.iter().enumerate() {
            let range = match spec.range {
                Some((min, max)) => TraitRange::new(min, max)?,
                None => spec.category.default_range(),
            };
            let default = spec.default.unwrap_or(range.min());
            if !range.contains(default) {
                return Err(DomainError::validation(format!(
                    "Default {} for {} is outside its range {}",
                    default, spec.name, range
                )));
            }
            let capped_by = match spec.capped_by {
                Some(other) if other == spec.name => {
                    return Err(DomainError::validation(format!(
                        "{} cannot be capped by itself",
                        spec.name
                    )))
                }
                Some(other) => Some(resolve(other, spec.name)?),
                None => None,
            };
            traits.push(TraitDef {
                id: TraitId::from_index(i),
                name: spec.name,
                display_name: display_name(spec.name),
                category: spec.category,
                range,
                default,
                capped_by,
            });
        }

        let mut linked: Vec<LinkedStatDef> = Vec::with_capacity(self.pairs.len());
        for pair in &self.pairs {
            if linked.iter().any(|l| l.name() == pair.name) {
                return Err(DomainError::validation(format!(
                    "Duplicate linked stat: {}",
                    pair.name
                )));
            }
            let permanent = resolve(pair.permanent, pair.name)?;
            let temporary = resolve(pair.temporary, pair.name)?;
            let perm_def = &traits[permanent.index()];
            let temp_def = &traits[temporary.index()];

            if perm_def.category.is_reserve() {
                return Err(DomainError::validation(format!(
                    "Permanent half of {} cannot be a reserve trait",
                    pair.name
                )));
            }
            if !temp_def.category.is_reserve() {
                return Err(DomainError::validation(format!(
                    "Temporary half of {} must be a reserve trait, found {}",
                    pair.name, temp_def.category
                )));
            }
            if linked
                .iter()
                .any(|l| l.permanent_id() == permanent || l.temporary_id() == temporary)
            {
                return Err(DomainError::validation(format!(
                    "{} reuses a trait already bound to another linked stat",
                    pair.name
                )));
            }

            let max_temporary = pair.max_temporary.unwrap_or(temp_def.range.max());
            let temp_range = TraitRange::new(pair.min_temporary, max_temporary)?;
            if temp_range.min() < temp_def.range.min() || temp_range.max() > temp_def.range.max()
            {
                return Err(DomainError::validation(format!(
                    "Temporary bounds {} of {} exceed {}'s range {}",
                    temp_range, pair.name, temp_def.name, temp_def.range
                )));
            }

            let def = LinkedStatDef::new(
                pair.name,
                permanent,
                temporary,
                perm_def.range,
                pair.cap_temporary,
                temp_range.min(),
                temp_range.max(),
                pair.raise_policy,
            );
            let defaults = TraitValues::from_defaults(traits.iter().map(|t| t.default));
            if !def.holds_for(&defaults) {
                return Err(DomainError::validation(format!(
                    "Defaults of {} violate its own bounds",
                    pair.name
                )));
            }
            linked.push(def);
        }

        Ok(TraitSchema {
            traits,
            index,
            linked,
        })
    }
}

/// `"animal_ken"` -> `"Animal Ken"`.
fn display_name(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn willpower_schema() -> TraitSchemaBuilder {
        TraitSchema::builder()
            .traits(TraitCategory::Attribute, &["strength", "wits"])
            .trait_spec(TraitSpec::new("willpower", TraitCategory::Willpower).default_value(3))
            .trait_spec(
                TraitSpec::new("temporary_willpower", TraitCategory::Reserve)
                    .range(0, 10)
                    .default_value(3),
            )
            .pair(PairSpec::new(
                "willpower",
                "willpower",
                "temporary_willpower",
            ))
    }

    #[test]
    fn builds_index_and_defaults() {
        let schema = willpower_schema().build().unwrap();

        assert_eq!(schema.len(), 4);
        let strength = schema.id("strength").unwrap();
        let def = schema.def(strength).unwrap();
        assert_eq!(def.category(), TraitCategory::Attribute);
        assert_eq!(def.default_value(), 1);
        assert_eq!(def.range().max(), 5);
        assert!(schema.id("Strength").is_none());

        let defaults = schema.defaults();
        assert_eq!(defaults.get(schema.id("willpower").unwrap()), 3);
        assert!(schema.validate(&defaults));
    }

    #[test]
    fn linked_pair_lookup() {
        let schema = willpower_schema().build().unwrap();
        let willpower = schema.id("willpower").unwrap();

        let pair = schema.linked("willpower").unwrap();
        assert_eq!(pair.permanent_id(), willpower);
        assert_eq!(schema.linked_for_permanent(willpower), Some(pair));
        assert!(schema.linked("blood_pool").is_none());
    }

    #[test]
    fn pairs_raise_both_halves_by_default() {
        let schema = willpower_schema().build().unwrap();
        assert_eq!(
            schema.linked("willpower").unwrap().raise_policy(),
            RaisePolicy::RaiseBoth
        );
    }

    #[test]
    fn same_layout_compares_slots_and_pairs() {
        let schema = willpower_schema().build().unwrap();
        assert!(schema.same_layout(&willpower_schema().build().unwrap()));

        let extended = willpower_schema()
            .traits(TraitCategory::Ability, &["occult"])
            .build()
            .unwrap();
        assert!(!schema.same_layout(&extended));

        let keep = TraitSchema::builder()
            .traits(TraitCategory::Attribute, &["strength", "wits"])
            .trait_spec(TraitSpec::new("willpower", TraitCategory::Willpower).default_value(3))
            .trait_spec(
                TraitSpec::new("temporary_willpower", TraitCategory::Reserve)
                    .range(0, 10)
                    .default_value(3),
            )
            .pair(
                PairSpec::new("willpower", "willpower", "temporary_willpower")
                    .raise_policy(RaisePolicy::Keep),
            )
            .build()
            .unwrap();
        assert!(!schema.same_layout(&keep));
    }

    #[test]
    fn rejects_duplicate_names() {
        let result = TraitSchema::builder()
            .traits(TraitCategory::Ability, &["alertness", "alertness"])
            .build();
        assert!(matches!(result, Err(DomainError::Validation(msg)) if msg.contains("Duplicate")));
    }

    #[test]
    fn rejects_default_outside_range() {
        let result = TraitSchema::builder()
            .trait_spec(TraitSpec::new("arete", TraitCategory::Arete).default_value(0))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn rejects_dangling_references() {
        let capped = TraitSchema::builder()
            .trait_spec(TraitSpec::new("forces", TraitCategory::Sphere).capped_by("arete"))
            .build();
        assert!(capped.is_err());

        let pair = TraitSchema::builder()
            .traits(TraitCategory::Willpower, &["willpower"])
            .pair(PairSpec::new("willpower", "willpower", "temporary_willpower"))
            .build();
        assert!(pair.is_err());
    }

    #[test]
    fn temporary_half_must_be_reserve() {
        let result = TraitSchema::builder()
            .traits(TraitCategory::Willpower, &["willpower"])
            .traits(TraitCategory::Ability, &["spare"])
            .pair(PairSpec::new("willpower", "willpower", "spare"))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn rejects_defaults_breaking_the_cap() {
        let result = TraitSchema::builder()
            .trait_spec(TraitSpec::new("willpower", TraitCategory::Willpower).default_value(2))
            .trait_spec(
                TraitSpec::new("temporary_willpower", TraitCategory::Reserve)
                    .range(0, 10)
                    .default_value(5),
            )
            .pair(PairSpec::new(
                "willpower",
                "willpower",
                "temporary_willpower",
            ))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn display_names_are_title_cased() {
        assert_eq!(display_name("animal_ken"), "Animal Ken");
        assert_eq!(display_name("strength"), "Strength");
    }
}
