use monocrack::alphabet;
use monocrack::error::CipherError;
use monocrack::keyed::{build_keyed_alphabet, preprocess, validate_key, KeyedCipher, Mode};
use rstest::rstest;

#[rstest]
#[case("zebra", "zebracdfghijklmnopqstuvwxy")]
#[case("ZEBRA", "zebracdfghijklmnopqstuvwxy")]
#[case("hello world", "helowrdabcfgijkmnpqstuvxyz")]
#[case("z-e-b-r-a 123", "zebracdfghijklmnopqstuvwxy")]
#[case("", "abcdefghijklmnopqrstuvwxyz")]
#[case("1234 !!", "abcdefghijklmnopqrstuvwxyz")]
#[case("qwertyuiopasdfghjklzxcvbnm", "qwertyuiopasdfghjklzxcvbnm")]
fn test_keyed_alphabet(#[case] keyword: &str, #[case] expected: &str) {
    let keyed = build_keyed_alphabet(keyword).unwrap();
    assert_eq!(std::str::from_utf8(&keyed).unwrap(), expected);
    assert!(alphabet::is_permutation(&keyed));
}

#[test]
fn test_zebra_maps_a_to_z() {
    let cipher = KeyedCipher::new("zebra").unwrap();
    assert_eq!(cipher.encrypt("a"), "z");
    assert_eq!(cipher.encrypt("abc"), "zeb");
    assert_eq!(cipher.decrypt("zeb"), "abc");
    assert_eq!(cipher.keyed_alphabet(), "zebracdfghijklmnopqstuvwxy");
}

#[test]
fn test_encrypt_preprocesses_text() {
    let cipher = KeyedCipher::new("zebra").unwrap();
    // punctuation dropped, case folded, whitespace and digits kept
    assert_eq!(cipher.encrypt("A, b!\n9"), "z e\n9");
}

#[test]
fn test_decrypt_keeps_non_letters() {
    let cipher = KeyedCipher::new("secret").unwrap();
    let plain = "meet me at noon 42";
    let enc = cipher.encrypt(plain);
    assert_eq!(cipher.decrypt(&enc), plain);
    assert!(enc.ends_with(" 42"));
}

#[test]
fn test_preprocess() {
    assert_eq!(preprocess("Hello, World!"), "hello world");
    assert_eq!(preprocess("tab\there's"), "tab\theres");
    assert_eq!(preprocess("ÉCOLE"), "école");
}

#[rstest]
#[case("1", Mode::Encrypt)]
#[case("encrypt", Mode::Encrypt)]
#[case(" Decrypt ", Mode::Decrypt)]
#[case("2", Mode::Decrypt)]
fn test_mode_parse(#[case] input: &str, #[case] expected: Mode) {
    assert_eq!(input.parse::<Mode>().unwrap(), expected);
}

#[test]
fn test_mode_parse_rejects_unknown() {
    let err = "3".parse::<Mode>().unwrap_err();
    assert!(matches!(err, CipherError::InvalidChoice(_)));
    assert!(err.to_string().contains("encrypt"));
}

#[test]
fn test_transform_dispatches_on_mode() {
    let cipher = KeyedCipher::new("zebra").unwrap();
    assert_eq!(cipher.transform(Mode::Encrypt, "abc"), "zeb");
    assert_eq!(cipher.transform(Mode::Decrypt, "zeb"), "abc");
}

#[rstest]
#[case("")]
#[case("   \n")]
#[case("1234")]
fn test_validate_key_rejects_empty(#[case] raw: &str) {
    assert!(matches!(validate_key(raw), Err(CipherError::EmptyKey)));
}

#[test]
fn test_validate_key_trims() {
    assert_eq!(validate_key("  zebra\n").unwrap(), "zebra");
}
