#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case(r#"{"log_level": "info"}"#, LogLevel::Info)]
#[test_case(r#"{"log_level": "debug"}"#, LogLevel::Debug)]
#[test_case(r#"{"log_level": "WARN"}"#, LogLevel::Warn)]
#[test_case(r#"{"log_level": "error"}"#, LogLevel::Error)]
#[test_case(r#"{"log_level": "trace"}"#, LogLevel::Trace)]
#[test_case(r#"{"log_level": "off"}"#, LogLevel::Off)]
#[test_case(r#"{}"#, LogLevel::Info)]
fn ChatLogConfig___log_level_json___parses_correctly(json: &str, expected: LogLevel) {
    let config = ChatLogConfig::from_json(json.as_bytes()).unwrap();

    assert_eq!(config.log_level().unwrap(), expected);
}

#[test_case(r#"{"max_text_depth": 1}"#, 1)]
#[test_case(r#"{"max_text_depth": 64}"#, 64)]
#[test_case(r#"{}"#, DEFAULT_MAX_TEXT_DEPTH)]
fn ChatLogConfig___max_text_depth_json___parses_correctly(json: &str, expected: usize) {
    let config = ChatLogConfig::from_json(json.as_bytes()).unwrap();

    assert_eq!(config.max_text_depth, expected);
}

#[test_case(r#"{"pretty_json": true}"#, true)]
#[test_case(r#"{"pretty_json": false}"#, false)]
#[test_case(r#"{}"#, false)]
fn ChatLogConfig___pretty_json___parses_correctly(json: &str, expected: bool) {
    let config = ChatLogConfig::from_json(json.as_bytes()).unwrap();

    assert_eq!(config.pretty_json, expected);
}

#[test_case(r#"{"data": {"cleanSave": true}}"#, true)]
#[test_case(r#"{"data": {"cleanSave": false}}"#, false)]
#[test_case(r#"{"data": {}}"#, false)]
#[test_case(r#"{"data": {"cleanSave": 1}}"#, false)]
#[test_case(r#"{}"#, false)]
fn CodecOptions___from_config_json___reads_clean_save(json: &str, expected: bool) {
    let config = ChatLogConfig::from_json(json.as_bytes()).unwrap();

    assert_eq!(config.codec_options().clean_save, expected);
}
