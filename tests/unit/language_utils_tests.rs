/*!
 * Tests for language utility functions
 */

use lengua_validator::language_utils::{get_language_name, language_codes_match, normalize_to_part2t};

/// Test normalization of language codes to ISO 639-2/T format
#[test]
fn test_normalize_to_part2t_withValidCodes_shouldNormalizeCorrectly() {
    assert_eq!(normalize_to_part2t("es").unwrap(), "spa");
    assert_eq!(normalize_to_part2t("spa").unwrap(), "spa");
    assert_eq!(normalize_to_part2t("qu").unwrap(), "que");
    assert_eq!(normalize_to_part2t(" QU ").unwrap(), "que");

    // ISO 639-2/B inputs
    assert_eq!(normalize_to_part2t("fre").unwrap(), "fra");
    assert_eq!(normalize_to_part2t("ger").unwrap(), "deu");

    assert!(normalize_to_part2t("e").is_err());
    assert!(normalize_to_part2t("123").is_err());
}

/// Test language code matching across formats
#[test]
fn test_language_codes_match_withVariousCodes_shouldMatchCorrectly() {
    assert!(language_codes_match("es", "spa"));
    assert!(language_codes_match("qu", "que"));
    assert!(language_codes_match("fr", "fre"));

    assert!(!language_codes_match("es", "qu"));
    assert!(!language_codes_match("es", "invalid"));
}

/// Test retrieving language names
#[test]
fn test_get_language_name_withValidCodes_shouldReturnName() {
    assert_eq!(get_language_name("es").unwrap(), "Spanish");
    assert_eq!(get_language_name("spa").unwrap(), "Spanish");
    assert!(get_language_name("qu").unwrap().contains("Quechua"));
    assert!(get_language_name("zz").is_err());
}
