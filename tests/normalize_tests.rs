use wordlist_query::{to_upper, to_upper_in_place, upper_byte};

fn ascii_samples() -> Vec<String> {
    vec![
        String::new(),
        "cat".to_string(),
        "Hello, World!".to_string(),
        "ALREADY UPPER".to_string(),
        "mIxEd123_case".to_string(),
        "`az{AZ@[".to_string(),
        (0u8..128).map(char::from).collect(),
    ]
}

#[test]
fn test_lowercase_becomes_uppercase() {
    assert_eq!(to_upper("abcxyz"), "ABCXYZ");
    assert_eq!(upper_byte(b'q'), b'Q');
}

#[test]
fn test_boundaries_of_lowercase_range() {
    // '`' sits just before 'a' and '{' just after 'z'
    assert_eq!(upper_byte(b'`'), b'`');
    assert_eq!(upper_byte(b'{'), b'{');
    assert_eq!(upper_byte(b'a'), b'A');
    assert_eq!(upper_byte(b'z'), b'Z');
}

#[test]
fn test_normalize_is_idempotent() {
    for s in ascii_samples() {
        let once = to_upper(&s);
        assert_eq!(to_upper(&once), once, "input {:?}", s);
    }
}

#[test]
fn test_no_lowercase_is_identity() {
    for s in ascii_samples() {
        let without_lower: String = s.chars().filter(|c| !c.is_ascii_lowercase()).collect();
        assert_eq!(to_upper(&without_lower), without_lower);
    }
}

#[test]
fn test_in_place_matches_copy() {
    for s in ascii_samples() {
        let mut bytes = s.clone().into_bytes();
        to_upper_in_place(&mut bytes);
        assert_eq!(bytes, to_upper(&s).into_bytes());
    }
}

#[test]
fn test_copy_leaves_input_alone() {
    let word = String::from("fish");
    let upper = to_upper(&word);
    assert_eq!(word, "fish");
    assert_eq!(upper, "FISH");
}

#[test]
fn test_non_ascii_untouched() {
    assert_eq!(to_upper("café"), "CAFé");
    let mut bytes = vec![0xC3, 0xA9, b'a'];
    assert_eq!(to_upper_in_place(&mut bytes), &[0xC3, 0xA9, b'A']);
}
