//! Tests for `sealconf encrypt`.

use crate::support::*;

#[test]
fn test_encrypt_roundtrip() {
    let t = Test::new();
    assert_cli_roundtrip(&t, "ABC123");
}

#[test]
fn test_encrypt_unicode_roundtrip() {
    let t = Test::new();
    assert_cli_roundtrip(&t, "Hello 世界 🌍");
}

#[test]
fn test_encrypt_output_is_not_plaintext() {
    let t = Test::new();
    let output = t.encrypt("super-secret", GOOD_KEY);
    assert_success(&output);
    assert_stdout_excludes(&output, "super-secret");
}

#[test]
fn test_encrypt_twice_differs() {
    let t = Test::new();
    let a = stdout(&t.encrypt("same", GOOD_KEY));
    let b = stdout(&t.encrypt("same", GOOD_KEY));
    assert_ne!(a, b);
}

#[test]
fn test_encrypt_key_from_env() {
    let t = Test::new();
    let output = t
        .cmd()
        .env("SEALCONF_KEY", GOOD_KEY)
        .args(["encrypt", "from-env"])
        .output()
        .unwrap();
    assert_success(&output);
    let token = stdout(&output).trim().to_string();

    let output = t.decrypt(&token, GOOD_KEY);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "from-env");
}

#[test]
fn test_encrypt_custom_key_env() {
    let t = Test::new();
    let output = t
        .cmd()
        .env(KEY_VAR, GOOD_KEY)
        .args(["encrypt", "--key-env", KEY_VAR, "value"])
        .output()
        .unwrap();
    assert_success(&output);
}

#[test]
fn test_encrypt_generate_key() {
    let t = Test::new();
    let output = t
        .cmd()
        .args(["encrypt", "--generate-key", "fresh"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "key:");

    let err = stderr(&output);
    let key = err
        .lines()
        .find_map(|line| line.trim().strip_prefix("key:"))
        .map(|k| k.trim().to_string())
        .expect("generated key on stderr");
    let token = stdout(&output).trim().to_string();

    let output = t.decrypt(&token, &key);
    assert_success(&output);
    assert_eq!(stdout(&output).trim(), "fresh");
}

#[test]
fn test_encrypt_json() {
    let t = Test::new();
    let output = t
        .cmd()
        .args(["encrypt", "--json", "--key", GOOD_KEY, "payload"])
        .output()
        .unwrap();
    assert_success(&output);

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let token = json["token"].as_str().unwrap();
    assert!(json.get("key").is_none());

    let output = t.decrypt(token, GOOD_KEY);
    assert_stdout_contains(&output, "payload");
}

#[test]
fn test_encrypt_generate_key_conflicts_with_key() {
    let t = Test::new();
    let output = t
        .cmd()
        .args(["encrypt", "--generate-key", "--key", GOOD_KEY, "x"])
        .output()
        .unwrap();
    assert_failure(&output);
}
