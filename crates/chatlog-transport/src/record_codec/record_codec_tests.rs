#![allow(non_snake_case)]

use super::*;
use chatlog_core::{
    ClickAction, ClickEvent, HoverEvent, NamedColor, Style, TextCodecError, TextColor,
};
use chrono::{NaiveDate, NaiveTime};
use serde_json::json;
use test_case::test_case;

fn hello_record() -> ChatRecord {
    ChatRecord::builder()
        .date(NaiveDate::from_ymd_opt(2021, 5, 1).unwrap())
        .time(NaiveTime::from_hms_opt(13, 45, 2).unwrap())
        .display_text(TextComponent::empty().append(
            TextComponent::literal("Hello").with_style(
                Style::default()
                    .with_color(NamedColor::Red.into())
                    .with_hover_event(HoverEvent::show_text("said by Steve")),
            ),
        ))
        .original_text("hello")
        .stacks(3)
        .build()
        .unwrap()
}

fn record_json() -> Value {
    json!({
        "time": "2021-05-01T13:45:02",
        "stacks": 1,
        "display": {"text": "", "extra": [{"text": "Hi", "color": "gold"}]},
        "original": {"text": "Hi"}
    })
}

fn default_codec() -> MessageRecordCodec {
    MessageRecordCodec::default()
}

/// Text codec that rejects everything, for error propagation tests
struct RejectingCodec;

impl RichTextCodec for RejectingCodec {
    fn encode(&self, _text: &TextComponent) -> Result<Value, TextCodecError> {
        Err(TextCodecError::TooDeep {
            path: "$".into(),
            max_depth: 0,
        })
    }

    fn decode(&self, _json: &Value) -> Result<TextComponent, TextCodecError> {
        Err(TextCodecError::InvalidShape {
            path: "$".into(),
            expected: "anything else",
        })
    }
}

// Encoding

#[test]
fn MessageRecordCodec___encode_clean_save___strips_hover_keeps_color() {
    let codec = MessageRecordCodec::new(CodecOptions::new(true));

    let json = codec.encode(&hello_record()).unwrap();

    assert_eq!(json["time"], "2021-05-01T13:45:02");
    assert_eq!(json["stacks"], 3);
    let segment = &json["display"]["extra"][0];
    assert_eq!(segment["text"], "Hello");
    assert_eq!(segment["color"], "red");
    assert!(segment.get("hoverEvent").is_none());
}

#[test]
fn MessageRecordCodec___encode___writes_exactly_four_keys() {
    let codec = default_codec();

    let json = codec.encode(&hello_record()).unwrap();

    let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["display", "original", "stacks", "time"]);
}

#[test]
fn MessageRecordCodec___encode_without_clean_save___keeps_interactions() {
    let codec = MessageRecordCodec::new(CodecOptions::new(false));

    let json = codec.encode(&hello_record()).unwrap();

    assert_eq!(
        json["display"]["extra"][0]["hoverEvent"]["action"],
        "show_text"
    );
}

#[test]
fn MessageRecordCodec___encode_clean_save___sanitizes_original_too() {
    let codec = MessageRecordCodec::new(CodecOptions::new(true));
    let mut record = hello_record();
    record.original_text = TextComponent::empty().append(
        TextComponent::literal("hello").with_style(
            Style::default()
                .with_click_event(ClickEvent::new(ClickAction::RunCommand, "/kill"))
                .with_insertion("hello"),
        ),
    );

    let json = codec.encode(&record).unwrap();

    assert_eq!(json["original"], json!({"text": "", "extra": [{"text": "hello"}]}));
}

#[test]
fn MessageRecordCodec___encode_text_codec_failure___returns_text_encode() {
    let codec = MessageRecordCodec::with_text_codec(RejectingCodec, CodecOptions::default());

    let err = codec.encode(&hello_record()).unwrap_err();

    assert!(matches!(
        err,
        ChatLogError::TextEncode {
            field: "display",
            ..
        }
    ));
}

#[test]
fn MessageRecordCodec___encode_too_deep___returns_text_encode() {
    let codec = MessageRecordCodec::with_text_codec(
        JsonTextCodec::with_max_depth(1),
        CodecOptions::default(),
    );

    let err = codec.encode(&hello_record()).unwrap_err();

    assert!(matches!(
        err,
        ChatLogError::TextEncode {
            source: TextCodecError::TooDeep { .. },
            ..
        }
    ));
}

#[test]
fn MessageRecordCodec___encode_color_beyond_24_bits___returns_text_encode() {
    let mut record = hello_record();
    record.display_text = TextComponent::literal("x")
        .with_style(Style::default().with_color(TextColor::Rgb(0x0100_0000)));

    let err = default_codec().encode(&record).unwrap_err();

    assert!(matches!(
        err,
        ChatLogError::TextEncode {
            field: "display",
            source: TextCodecError::InvalidShape { .. },
        }
    ));
}

// Decoding

#[test]
fn MessageRecordCodec___decode___splits_date_and_time() {
    let codec = default_codec();

    let record = codec.decode(&record_json()).unwrap();

    assert_eq!(record.date, NaiveDate::from_ymd_opt(2021, 5, 1).unwrap());
    assert_eq!(record.time, NaiveTime::from_hms_opt(13, 45, 2).unwrap());
    assert_eq!(record.stacks, 1);
    assert_eq!(record.display_text.to_plain_string(), "Hi");
    assert_eq!(
        record.display_text.siblings[0].style.color,
        Some(TextColor::Named(NamedColor::Gold))
    );
    assert_eq!(record.original_text, TextComponent::literal("Hi"));
}

#[test]
fn MessageRecordCodec___decode_missing_time___returns_date_time_parse() {
    let codec = default_codec();
    let mut json = record_json();
    json.as_object_mut().unwrap().remove("time");

    let err = codec.decode(&json).unwrap_err();

    assert!(matches!(err, ChatLogError::DateTimeParse { .. }));
}

#[test_case(json!("yesterday") ; "free text")]
#[test_case(json!("2021-05-01") ; "date only")]
#[test_case(json!("2021-02-30T10:00:00") ; "impossible date")]
#[test_case(json!("2021-05-01T25:00:00") ; "impossible hour")]
#[test_case(json!(1619876702) ; "epoch number")]
#[test_case(json!(null) ; "null")]
fn MessageRecordCodec___decode_bad_time___returns_date_time_parse(time: Value) {
    let codec = default_codec();
    let mut json = record_json();
    json["time"] = time;

    let err = codec.decode(&json).unwrap_err();

    assert!(matches!(err, ChatLogError::DateTimeParse { .. }));
}

#[test]
fn MessageRecordCodec___decode_missing_stacks___returns_missing_field() {
    let codec = default_codec();
    let mut json = record_json();
    json.as_object_mut().unwrap().remove("stacks");

    let err = codec.decode(&json).unwrap_err();

    assert!(matches!(err, ChatLogError::MissingField("stacks")));
}

#[test_case(json!("3") ; "string")]
#[test_case(json!(-1) ; "negative")]
#[test_case(json!(2.5) ; "fractional")]
#[test_case(json!(4_294_967_296_u64) ; "overflows u32")]
#[test_case(json!(null) ; "null")]
fn MessageRecordCodec___decode_bad_stacks___returns_invalid_field(stacks: Value) {
    let codec = default_codec();
    let mut json = record_json();
    json["stacks"] = stacks;

    let err = codec.decode(&json).unwrap_err();

    assert!(matches!(
        err,
        ChatLogError::InvalidField {
            field: "stacks",
            ..
        }
    ));
}

#[test_case("display")]
#[test_case("original")]
fn MessageRecordCodec___decode_missing_text___returns_missing_field(key: &'static str) {
    let codec = default_codec();
    let mut json = record_json();
    json.as_object_mut().unwrap().remove(key);

    let err = codec.decode(&json).unwrap_err();

    assert!(matches!(err, ChatLogError::MissingField(field) if field == key));
}

#[test]
fn MessageRecordCodec___decode_invalid_text___wraps_codec_error_with_fragment() {
    let codec = default_codec();
    let mut json = record_json();
    json["original"] = json!({"text": "Hi", "color": "rred"});

    let err = codec.decode(&json).unwrap_err();

    match err {
        ChatLogError::TextDecode {
            field,
            fragment,
            source,
        } => {
            assert_eq!(field, "original");
            assert!(fragment.contains("rred"));
            assert_eq!(
                source,
                TextCodecError::UnknownColor {
                    path: "$.color".into(),
                    value: "rred".into(),
                }
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn MessageRecordCodec___decode_host_codec_failure___propagates_verbatim() {
    let codec = MessageRecordCodec::with_text_codec(RejectingCodec, CodecOptions::default());

    let err = codec.decode(&record_json()).unwrap_err();

    let ChatLogError::TextDecode { field, source, .. } = err else {
        panic!("expected TextDecode");
    };
    assert_eq!(field, "display");
    assert_eq!(
        source,
        TextCodecError::InvalidShape {
            path: "$".into(),
            expected: "anything else",
        }
    );
}

#[test]
fn MessageRecordCodec___decode_non_object___returns_invalid_field() {
    let codec = default_codec();

    let err = codec.decode(&json!([1, 2, 3])).unwrap_err();

    assert!(matches!(
        err,
        ChatLogError::InvalidField {
            field: "record",
            ..
        }
    ));
}

#[test]
fn MessageRecordCodec___decode_extra_keys___are_ignored() {
    let codec = default_codec();
    let mut json = record_json();
    json["version"] = json!(2);

    let record = codec.decode(&json).unwrap();

    assert_eq!(record.stacks, 1);
}

// Round trips through strings, bytes and JsonSave

#[test]
fn MessageRecordCodec___string_roundtrip___preserves_record() {
    let codec = default_codec();
    let record = hello_record();

    let encoded = codec.encode_string(&record).unwrap();
    let decoded = codec.decode_str(&encoded).unwrap();

    assert_eq!(decoded, record);
    assert!(!encoded.contains('\n'));
}

#[test]
fn MessageRecordCodec___bytes_roundtrip___preserves_record() {
    let codec = default_codec();
    let record = hello_record();

    let decoded = codec.decode_bytes(&codec.encode_bytes(&record).unwrap()).unwrap();

    assert_eq!(decoded, record);
}

#[test]
fn MessageRecordCodec___decode_str_malformed___returns_serialization_error() {
    let codec = default_codec();

    let err = codec.decode_str("{\"time\": ").unwrap_err();

    assert!(matches!(err, ChatLogError::SerializationError(_)));
}

#[test]
fn MessageRecordCodec___json_save___delegates_to_encode_and_decode() {
    let codec = default_codec();
    let record = hello_record();

    let saved = JsonSave::save(&codec, &record).unwrap();
    let loaded = JsonSave::load(&codec, &saved).unwrap();

    assert_eq!(saved, codec.encode(&record).unwrap());
    assert_eq!(loaded, record);
}

#[test]
fn MessageRecordCodec___from_config___applies_settings() {
    let config = ChatLogConfig::from_json(
        br#"{"data": {"cleanSave": true}, "pretty_json": true, "max_text_depth": 4}"#,
    )
    .unwrap();

    let codec = MessageRecordCodec::from_config(&config);

    assert!(codec.options().clean_save);
    assert_eq!(codec.text_codec().max_depth(), 4);
    assert!(codec.encode_string(&hello_record()).unwrap().contains('\n'));
}

#[test]
fn MessageRecordCodec___sanitize___follows_options() {
    let text = TextComponent::literal("x")
        .with_style(Style::default().with_insertion("x"))
        .append(TextComponent::literal("y"));

    let kept = MessageRecordCodec::new(CodecOptions::new(false)).sanitize(&text);
    let cleaned = MessageRecordCodec::new(CodecOptions::new(true)).sanitize(&text);

    assert_eq!(kept, text);
    assert_eq!(cleaned.siblings.len(), 2);
    assert!(cleaned.siblings.iter().all(|s| !s.style.has_interactions()));
}

// Time formatting

#[test_case(13, 45, 2, 0, "2021-05-01T13:45:02")]
#[test_case(0, 0, 0, 0, "2021-05-01T00:00:00")]
#[test_case(13, 45, 2, 500_000_000, "2021-05-01T13:45:02.5")]
#[test_case(13, 45, 2, 120_000_000, "2021-05-01T13:45:02.12")]
#[test_case(13, 45, 2, 1, "2021-05-01T13:45:02.000000001")]
fn format_time___writes_iso_local_date_time(h: u32, m: u32, s: u32, nanos: u32, expected: &str) {
    let timestamp = NaiveDate::from_ymd_opt(2021, 5, 1)
        .unwrap()
        .and_hms_nano_opt(h, m, s, nanos)
        .unwrap();

    assert_eq!(format_time(&timestamp), expected);
}

#[test_case("2021-05-01T13:45:02", 13, 45, 2, 0)]
#[test_case("2021-05-01T13:45", 13, 45, 0, 0)]
#[test_case("2021-05-01T13:45:02.5", 13, 45, 2, 500_000_000)]
#[test_case("2021-05-01T13:45:02.123456789", 13, 45, 2, 123_456_789)]
fn parse_time_str___reads_iso_local_date_time(input: &str, h: u32, m: u32, s: u32, nanos: u32) {
    let expected = NaiveDate::from_ymd_opt(2021, 5, 1)
        .unwrap()
        .and_hms_nano_opt(h, m, s, nanos)
        .unwrap();

    assert_eq!(parse_time_str(input).unwrap(), expected);
}
