use super::*;

#[test]
fn test_color_choice_from_str() {
    assert_eq!(ColorChoice::from("always"), ColorChoice::Always);
    assert_eq!(ColorChoice::from("never"), ColorChoice::Never);
    assert_eq!(ColorChoice::from("auto"), ColorChoice::Auto);
    assert_eq!(ColorChoice::from("ALWAYS"), ColorChoice::Always);
    // Unknown values fall back to auto.
    assert_eq!(ColorChoice::from("rainbow"), ColorChoice::Auto);
}

#[test]
fn test_color_choice_never_disables_color() {
    assert!(!ColorChoice::Never.enabled());
}

#[test]
fn test_color_choice_always_enables_color() {
    assert!(ColorChoice::Always.enabled());
}
