//! Domain types for the type chart

mod pokemon_type;

pub use pokemon_type::{Type, TypeChartEntry, TypeSet, TYPE_CHART};
