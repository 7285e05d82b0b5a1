//! File naming rules shared by both emitters

use crate::error::GenerateError;
use crate::prefix::AnalysisPrefix;

/// Largest index that still gets a two-digit label
pub const MAX_INDEXED_FILES: usize = 99;

/// Zero-pads a 1-based index to two digits so files sort lexically.
pub fn index_label(index: usize) -> String {
    format!("{:02}", index)
}

pub fn config_file_name(prefix: AnalysisPrefix, index: usize) -> String {
    format!("{}_{}.yaml", prefix, index_label(index))
}

pub fn script_file_name(drug_abbr: &str) -> String {
    format!("run_{}.sh", drug_abbr)
}

/// Rejects counts whose labels would no longer be two digits wide
pub fn check_count(count: usize) -> Result<(), GenerateError> {
    if count > MAX_INDEXED_FILES {
        return Err(GenerateError::CountOutOfRange {
            count,
            max: MAX_INDEXED_FILES,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        one = { 1, "01" },
        five = { 5, "05" },
        nine = { 9, "09" },
        ten = { 10, "10" },
        sixteen = { 16, "16" },
        ninety_nine = { 99, "99" },
    )]
    fn test_index_label(index: usize, expected: &str) {
        assert_eq!(index_label(index), expected);
    }

    #[test]
    fn test_single_digit_labels_are_zero_prefixed() {
        for i in 1..=9 {
            let label = index_label(i);
            assert_eq!(label.len(), 2);
            assert_eq!(label, format!("0{}", i));
        }
        for i in 10..=16 {
            assert_eq!(index_label(i), i.to_string());
        }
    }

    #[test]
    fn test_config_file_name() {
        assert_eq!(config_file_name(AnalysisPrefix::Binary, 4), "binary_04.yaml");
        assert_eq!(config_file_name(AnalysisPrefix::Mic, 12), "mic_12.yaml");
    }

    #[test]
    fn test_script_file_name() {
        assert_eq!(script_file_name("INH"), "run_INH.sh");
    }

    #[test]
    fn test_check_count() {
        assert!(check_count(0).is_ok());
        assert!(check_count(99).is_ok());
        assert_eq!(
            check_count(100),
            Err(GenerateError::CountOutOfRange { count: 100, max: 99 })
        );
    }
}
