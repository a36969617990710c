use keycase::{detect_case, CaseStyle};

#[test]
fn test_detection_table() {
    let cases = [
        ("userProfileId", CaseStyle::Camel),
        ("UserProfileId", CaseStyle::Pascal),
        ("user_profile_id", CaseStyle::Snake),
        ("USER_PROFILE_ID", CaseStyle::UpperSnake),
        ("user-profile-id", CaseStyle::Kebab),
        ("user.profile.id", CaseStyle::Dot),
        ("User-Profile-Id", CaseStyle::Train),
        ("USER-PROFILE-ID", CaseStyle::Cobol),
        ("unidentifiedStringStyle", CaseStyle::Camel),
        ("id", CaseStyle::Unknown),
    ];

    for (input, expected) in cases {
        assert_eq!(detect_case(input), expected, "input {input:?}");
    }
}

#[test]
fn test_bare_lowercase_word_is_not_camel() {
    // Camel requires at least one internal hump.
    assert_eq!(detect_case("user"), CaseStyle::Unknown);
    assert_eq!(detect_case("user42"), CaseStyle::Unknown);
}

#[test]
fn test_single_capitalized_word_is_pascal() {
    assert_eq!(detect_case("User"), CaseStyle::Pascal);
    // An unbroken all-caps word satisfies the pascal pattern too.
    assert_eq!(detect_case("USER"), CaseStyle::Pascal);
    assert_eq!(detect_case("ID"), CaseStyle::Pascal);
}

#[test]
fn test_single_letter_train_tokens_fall_through_to_cobol() {
    // Train tokens need a capital plus at least one more character.
    assert_eq!(detect_case("A-B-C"), CaseStyle::Cobol);
    assert_eq!(detect_case("Ab-Cd"), CaseStyle::Train);
}

#[test]
fn test_digit_tokens() {
    assert_eq!(detect_case("v2_user_4"), CaseStyle::Snake);
    assert_eq!(detect_case("V2-USER-4"), CaseStyle::Cobol);
}

#[test]
fn test_mixed_or_malformed_inputs_are_unknown() {
    assert_eq!(detect_case(""), CaseStyle::Unknown);
    assert_eq!(detect_case("user profile"), CaseStyle::Unknown);
    assert_eq!(detect_case("user_profile-id"), CaseStyle::Unknown);
    assert_eq!(detect_case("_leading"), CaseStyle::Unknown);
    assert_eq!(detect_case("trailing_"), CaseStyle::Unknown);
    assert_eq!(detect_case("mixed_Case_tokens"), CaseStyle::Unknown);
}

#[test]
fn test_detection_respects_priority_order() {
    // All-digit tokens satisfy both snake and upper_snake token classes;
    // snake is tried first.
    assert_eq!(detect_case("4_2"), CaseStyle::Snake);
    // Likewise kebab before cobol for all-digit hyphened tokens.
    assert_eq!(detect_case("4-2"), CaseStyle::Kebab);
}
