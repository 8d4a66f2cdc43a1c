//! Typed predicate descriptions and the builder that composes them from
//! [`FilterCriteria`].
//!
//! A [`PredicateSet`] is a conjunction. Each [`Predicate`] names the listing
//! [`Field`] it constrains and carries a typed [`Value`], so a storage
//! adapter can translate it into its own query language without reflective
//! attribute lookup. [`Predicate::matches`] is the reference evaluation used
//! by the in-memory adapter.

use crate::compute::geo_math;
use crate::error::{NearbyError, Result};
use crate::query::criteria::FilterCriteria;
use chrono::{DateTime, FixedOffset};
use nearby_types::{BoundingBox, Category, Item, ItemType};
use smallvec::{SmallVec, smallvec};
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

/// Listing attribute a predicate can constrain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Category,
    Type,
    Title,
    Description,
    StartDate,
    Owner,
    Latitude,
    Longitude,
}

impl Field {
    /// Column name of the field in the listing table.
    pub fn column(&self) -> &'static str {
        match self {
            Field::Category => "category",
            Field::Type => "type",
            Field::Title => "title",
            Field::Description => "description",
            Field::StartDate => "start_date",
            Field::Owner => "user_id",
            Field::Latitude => "latitude",
            Field::Longitude => "longitude",
        }
    }

    /// Read this field from an item.
    pub fn read(&self, item: &Item) -> Value {
        match self {
            Field::Category => Value::Category(item.category),
            Field::Type => Value::Type(item.item_type),
            Field::Title => Value::Text(item.title.clone()),
            Field::Description => Value::Text(item.description.clone()),
            Field::StartDate => Value::Timestamp(item.start_date),
            Field::Owner => Value::Uuid(item.owner),
            Field::Latitude => Value::Number(item.location.lat()),
            Field::Longitude => Value::Number(item.location.lng()),
        }
    }

    fn text<'a>(&self, item: &'a Item) -> Option<&'a str> {
        match self {
            Field::Title => Some(&item.title),
            Field::Description => Some(&item.description),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Typed operand of a predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Category(Category),
    Type(ItemType),
    Uuid(Uuid),
    Timestamp(DateTime<FixedOffset>),
    Number(f64),
}

impl Value {
    /// Order two values of the same kind. Mismatched kinds, and the
    /// unordered enumerations, return `None`.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Uuid(a), Value::Uuid(b)) => Some(a.cmp(b)),
            (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => write!(f, "'{}'", s),
            Value::Category(c) => write!(f, "'{}'", c),
            Value::Type(t) => write!(f, "'{}'", t),
            Value::Uuid(u) => write!(f, "'{}'", u),
            Value::Timestamp(ts) => write!(f, "'{}'", ts.to_rfc3339()),
            Value::Number(n) => write!(f, "{}", n),
        }
    }
}

/// One constraint over a listing row.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `field == value`
    Equals { field: Field, value: Value },
    /// `min <= field <= max`; a missing side is unbounded.
    Range {
        field: Field,
        min: Option<Value>,
        max: Option<Value>,
    },
    /// Case-insensitive substring match, ORed across `fields`.
    Contains {
        fields: SmallVec<[Field; 2]>,
        term: String,
    },
    /// Latitude and longitude inside the box, edges included.
    WithinBounds(BoundingBox),
}

impl Predicate {
    pub fn equals(field: Field, value: Value) -> Self {
        Predicate::Equals { field, value }
    }

    pub fn at_least(field: Field, min: Value) -> Self {
        Predicate::Range {
            field,
            min: Some(min),
            max: None,
        }
    }

    pub fn at_most(field: Field, max: Value) -> Self {
        Predicate::Range {
            field,
            min: None,
            max: Some(max),
        }
    }

    /// Evaluate this predicate against an item.
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Predicate::Equals { field, value } => field.read(item) == *value,
            Predicate::Range { field, min, max } => {
                let actual = field.read(item);
                let above = min.as_ref().is_none_or(|min| {
                    matches!(
                        actual.compare(min),
                        Some(Ordering::Greater | Ordering::Equal)
                    )
                });
                let below = max.as_ref().is_none_or(|max| {
                    matches!(actual.compare(max), Some(Ordering::Less | Ordering::Equal))
                });
                above && below
            }
            Predicate::Contains { fields, term } => {
                let needle = term.to_lowercase();
                fields.iter().any(|field| {
                    field
                        .text(item)
                        .is_some_and(|haystack| haystack.to_lowercase().contains(&needle))
                })
            }
            Predicate::WithinBounds(bbox) => bbox.contains(&item.location),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Equals { field, value } => write!(f, "{} = {}", field, value),
            Predicate::Range { field, min, max } => match (min, max) {
                (Some(min), Some(max)) => write!(f, "{} BETWEEN {} AND {}", field, min, max),
                (Some(min), None) => write!(f, "{} >= {}", field, min),
                (None, Some(max)) => write!(f, "{} <= {}", field, max),
                (None, None) => f.write_str("TRUE"),
            },
            Predicate::Contains { fields, term } => {
                f.write_str("(")?;
                for (idx, field) in fields.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(" OR ")?;
                    }
                    write!(f, "{} ILIKE '%{}%'", field, term)?;
                }
                f.write_str(")")
            }
            Predicate::WithinBounds(bbox) => write!(
                f,
                "{} BETWEEN {} AND {} AND {} BETWEEN {} AND {}",
                Field::Latitude,
                bbox.min_lat(),
                bbox.max_lat(),
                Field::Longitude,
                bbox.min_lng(),
                bbox.max_lng()
            ),
        }
    }
}

/// Conjunction of predicates. Empty means "every row".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredicateSet {
    predicates: SmallVec<[Predicate; 8]>,
}

impl PredicateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, predicate: Predicate) {
        self.predicates.push(predicate);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Predicate> {
        self.predicates.iter()
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// True when every predicate matches the item.
    pub fn matches(&self, item: &Item) -> bool {
        self.predicates.iter().all(|p| p.matches(item))
    }

    /// The spatial prefilter, if one was composed.
    pub fn bounds(&self) -> Option<&BoundingBox> {
        self.predicates.iter().find_map(|p| match p {
            Predicate::WithinBounds(bbox) => Some(bbox),
            _ => None,
        })
    }
}

impl fmt::Display for PredicateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.predicates.is_empty() {
            return f.write_str("TRUE");
        }
        for (idx, predicate) in self.predicates.iter().enumerate() {
            if idx > 0 {
                f.write_str(" AND ")?;
            }
            write!(f, "{}", predicate)?;
        }
        Ok(())
    }
}

impl FromIterator<Predicate> for PredicateSet {
    fn from_iter<I: IntoIterator<Item = Predicate>>(iter: I) -> Self {
        Self {
            predicates: iter.into_iter().collect(),
        }
    }
}

/// Translates [`FilterCriteria`] into a [`PredicateSet`].
pub struct PredicateBuilder;

impl PredicateBuilder {
    /// Compose the predicates for a request.
    ///
    /// Absent criteria add nothing. An unparseable `created_by` identity is
    /// reported as [`NearbyError::InvalidFilter`] so the caller can answer
    /// with an empty result instead of querying. When no bounding box can be
    /// derived around the center, the spatial predicate is left out and the
    /// exact distance filter alone decides.
    pub fn build(criteria: &FilterCriteria) -> Result<PredicateSet> {
        let mut set = PredicateSet::new();

        if let Some(category) = criteria.category {
            set.push(Predicate::equals(Field::Category, Value::Category(category)));
        }

        if let Some(item_type) = criteria.item_type {
            set.push(Predicate::equals(Field::Type, Value::Type(item_type)));
        }

        if let Some(term) = criteria.search.as_deref().map(str::trim)
            && !term.is_empty()
        {
            set.push(Predicate::Contains {
                fields: smallvec![Field::Title, Field::Description],
                term: term.to_string(),
            });
        }

        if let Some(start) = criteria.start_date {
            set.push(Predicate::at_least(Field::StartDate, Value::Timestamp(start)));
        }

        if let Some(end) = criteria.end_date {
            set.push(Predicate::at_most(Field::StartDate, Value::Timestamp(end)));
        }

        if let Some(raw) = criteria.created_by.as_deref() {
            let owner = Uuid::parse_str(raw.trim()).map_err(|e| {
                NearbyError::InvalidFilter(format!("created_by {:?} is not a valid id: {}", raw, e))
            })?;
            set.push(Predicate::equals(Field::Owner, Value::Uuid(owner)));
        }

        if let Some(proximity) = criteria.proximity {
            match geo_math::bounding_box(&proximity.center, proximity.radius_km) {
                Ok(bbox) => {
                    log::debug!("Bounding box around {}: {}", proximity.center, bbox);
                    set.push(Predicate::WithinBounds(bbox));
                }
                Err(e) => {
                    log::warn!(
                        "Skipping spatial prefilter around {}: {}",
                        proximity.center,
                        e
                    );
                }
            }
        }

        Ok(set)
    }
}
