//! Request-scoped query stages: criteria → predicates → candidates →
//! proximity filter → response.

pub mod assemble;
pub mod criteria;
pub mod fetch;
pub mod predicate;
pub mod proximity;

pub use assemble::{ItemResponse, assemble};
pub use criteria::{FilterCriteria, Proximity, SearchParams, parse_date_bound};
pub use fetch::CandidateFetcher;
pub use predicate::{Field, Predicate, PredicateBuilder, PredicateSet, Value};
pub use proximity::{CandidateItem, Distance, ProximityFilter};
