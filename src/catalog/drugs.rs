//! Drug name to abbreviation table

use crate::error::GenerateError;
use serde::Serialize;

/// A drug and its three-letter abbreviation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Drug {
    pub name: &'static str,
    pub abbreviation: &'static str,
}

impl Drug {
    const fn new(name: &'static str, abbreviation: &'static str) -> Self {
        Self { name, abbreviation }
    }
}

pub const DRUGS: [Drug; 15] = [
    Drug::new("Delamanid", "DLM"),
    Drug::new("Bedaquiline", "BDQ"),
    Drug::new("Clofazimine", "CFZ"),
    Drug::new("Ethionamide", "ETH"),
    Drug::new("Linezolid", "LZD"),
    Drug::new("Moxifloxacin", "MXF"),
    Drug::new("Capreomycin", "CAP"),
    Drug::new("Amikacin", "AMI"),
    Drug::new("Pyrazinamide", "PZA"),
    Drug::new("Kanamycin", "KAN"),
    Drug::new("Levofloxacin", "LEV"),
    Drug::new("Streptomycin", "STM"),
    Drug::new("Ethambutol", "EMB"),
    Drug::new("Isoniazid", "INH"),
    Drug::new("Rifampicin", "RIF"),
];

/// Looks up a drug by full name or abbreviation, ignoring case.
pub fn find_drug(query: &str) -> Option<&'static Drug> {
    let query = query.trim();
    DRUGS.iter().find(|d| {
        d.name.eq_ignore_ascii_case(query) || d.abbreviation.eq_ignore_ascii_case(query)
    })
}

/// Resolves a list of queries into drugs, keeping table order.
///
/// An empty query list selects every drug. Duplicate queries collapse to a
/// single entry.
pub fn resolve_drugs(queries: &[String]) -> Result<Vec<Drug>, GenerateError> {
    if queries.is_empty() {
        return Ok(DRUGS.to_vec());
    }

    let mut selected = Vec::with_capacity(queries.len());
    for query in queries {
        let drug = find_drug(query).ok_or_else(|| GenerateError::UnknownDrug(query.clone()))?;
        if !selected.contains(drug) {
            selected.push(*drug);
        }
    }

    selected.sort_by_key(|d| DRUGS.iter().position(|x| x == d));
    Ok(selected)
}
