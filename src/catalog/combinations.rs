//! Parameter combinations applied to the base config

use serde::Serialize;
use std::fmt;

/// Config keys overwritten from each combination, in serialization order
pub const PARAMETER_KEYS: [&str; 5] = [
    "pheno_category_lst",
    "tiers_lst",
    "unpooled",
    "synonymous",
    "amb_mode",
];

/// Which phenotype categories feed the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PhenoCategory {
    #[serde(rename = "WHO")]
    Who,
    #[serde(rename = "ALL")]
    All,
}

/// Mutation catalogue tier. Serialized as a string, not an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
}

/// How ambiguous allele calls are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AmbiguityMode {
    #[serde(rename = "DROP")]
    Drop,
    #[serde(rename = "AF")]
    Af,
}

/// One row of the combination table.
///
/// Field order matches [`PARAMETER_KEYS`]; serializing a combination yields
/// exactly those five keys in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParameterCombination {
    #[serde(rename = "pheno_category_lst")]
    pub pheno_categories: &'static [PhenoCategory],
    #[serde(rename = "tiers_lst")]
    pub tiers: &'static [Tier],
    pub unpooled: bool,
    pub synonymous: bool,
    pub amb_mode: AmbiguityMode,
}

impl ParameterCombination {
    const fn new(
        pheno_categories: &'static [PhenoCategory],
        tiers: &'static [Tier],
        unpooled: bool,
        synonymous: bool,
        amb_mode: AmbiguityMode,
    ) -> Self {
        Self {
            pheno_categories,
            tiers,
            unpooled,
            synonymous,
            amb_mode,
        }
    }
}

impl fmt::Display for PhenoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Who => f.write_str("WHO"),
            Self::All => f.write_str("ALL"),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("1"),
            Self::Two => f.write_str("2"),
        }
    }
}

impl fmt::Display for AmbiguityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drop => f.write_str("DROP"),
            Self::Af => f.write_str("AF"),
        }
    }
}

use AmbiguityMode::{Af, Drop};

const WHO: &[PhenoCategory] = &[PhenoCategory::Who];
const ALL: &[PhenoCategory] = &[PhenoCategory::All];
const T1: &[Tier] = &[Tier::One];
const T12: &[Tier] = &[Tier::One, Tier::Two];

pub const COMBINATIONS: [ParameterCombination; 16] = [
    ParameterCombination::new(WHO, T1, false, false, Drop),
    ParameterCombination::new(WHO, T1, true, false, Drop),
    ParameterCombination::new(WHO, T1, false, true, Drop),
    ParameterCombination::new(WHO, T12, false, false, Drop),
    ParameterCombination::new(WHO, T12, true, false, Drop),
    ParameterCombination::new(WHO, T12, false, true, Drop),
    ParameterCombination::new(ALL, T1, false, false, Drop),
    ParameterCombination::new(ALL, T1, true, false, Drop),
    ParameterCombination::new(ALL, T1, false, true, Drop),
    ParameterCombination::new(ALL, T12, false, false, Drop),
    ParameterCombination::new(ALL, T12, true, false, Drop),
    ParameterCombination::new(ALL, T12, false, true, Drop),
    ParameterCombination::new(WHO, T1, false, false, Af),
    ParameterCombination::new(WHO, T12, false, false, Af),
    ParameterCombination::new(ALL, T1, false, false, Af),
    ParameterCombination::new(ALL, T12, false, false, Af),
];

/// Returns the combination at a 1-based index
pub fn combination(index: usize) -> Option<&'static ParameterCombination> {
    index.checked_sub(1).and_then(|i| COMBINATIONS.get(i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    #[test]
    fn test_table_size() {
        assert_eq!(COMBINATIONS.len(), 16);
    }

    #[test]
    fn test_combination_is_one_based() {
        assert!(combination(0).is_none());
        assert_eq!(combination(1), Some(&COMBINATIONS[0]));
        assert_eq!(combination(16), Some(&COMBINATIONS[15]));
        assert!(combination(17).is_none());
    }

    #[test]
    fn test_combinations_are_distinct() {
        for (i, a) in COMBINATIONS.iter().enumerate() {
            for b in COMBINATIONS.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_af_rows_never_pool_or_add_synonymous() {
        for combo in COMBINATIONS.iter().filter(|c| c.amb_mode == AmbiguityMode::Af) {
            assert!(!combo.unpooled);
            assert!(!combo.synonymous);
        }
    }

    #[test]
    fn test_serialized_keys_follow_parameter_keys() {
        let value = serde_yaml::to_value(COMBINATIONS[0]).unwrap();
        let mapping = value.as_mapping().unwrap();
        let keys: Vec<_> = mapping.keys().filter_map(Value::as_str).collect();
        assert_eq!(keys, PARAMETER_KEYS.to_vec());
    }

    #[test]
    fn test_fourth_combination_serializes_as_strings() {
        let value = serde_yaml::to_value(combination(4).unwrap()).unwrap();
        assert_eq!(value["pheno_category_lst"], serde_yaml::from_str::<Value>("[WHO]").unwrap());
        assert_eq!(value["tiers_lst"], serde_yaml::from_str::<Value>("['1', '2']").unwrap());
        assert_eq!(value["unpooled"], Value::Bool(false));
        assert_eq!(value["synonymous"], Value::Bool(false));
        assert_eq!(value["amb_mode"], Value::String("DROP".to_string()));
    }
}
