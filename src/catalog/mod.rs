//! Fixed tables that drive generation
//!
//! Both tables are literal and immutable for a run. Their order is
//! significant: drugs are emitted in table order and combinations are
//! numbered by their 1-based position.

pub mod combinations;
pub mod drugs;

pub use combinations::{
    combination, AmbiguityMode, ParameterCombination, PhenoCategory, Tier, COMBINATIONS,
    PARAMETER_KEYS,
};
pub use drugs::{find_drug, resolve_drugs, Drug, DRUGS};
