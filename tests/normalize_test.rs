//! 入力ファイルから出力JSONまでの統合テスト

use dmm_enhanced::{run, BatchPolicy, DmmEnhancedError, NormalizeOptions};
use dmm_enhanced_common::{Actress, Item, RawActress, RawItem};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn options(input: &Path, output: PathBuf, policy: BatchPolicy) -> NormalizeOptions {
    NormalizeOptions {
        input: input.to_path_buf(),
        output: Some(output),
        policy,
        quarantine: None,
        pretty: false,
    }
}

const ITEM_ENVELOPE: &str = r#"{
    "request": {"parameters": {"site": "FANZA"}},
    "result": {
        "status": 200,
        "result_count": 1,
        "items": [{
            "content_id": "abc00001",
            "product_id": "abc00001",
            "title": "テスト作品",
            "URL": "https://example.com/abc00001",
            "iteminfo": {
                "genre": [
                    {"id": 6004, "name": "ドラマ"},
                    {"id": "6004_ruby", "name": "どらま"}
                ],
                "actress": [
                    {"id": "1011199_classify", "name": "av"},
                    {"id": 1011199, "name": "テスト女優"},
                    {"id": "1011199_ruby", "name": "てすとじょゆう"}
                ]
            },
            "review": {"count": 12, "average": "4.50"},
            "prices": {
                "price": "300~",
                "list_price": "500",
                "deliveries": {"delivery": [
                    {"type": "stream", "price": "300"},
                    {"type": "download", "price": "980"}
                ]}
            }
        }]
    }
}"#;

#[test]
fn test_item_envelope_end_to_end() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("items.json");
    let output = dir.path().join("out.json");
    std::fs::write(&input, ITEM_ENVELOPE).unwrap();

    let report = run::<RawItem>(&options(&input, output.clone(), BatchPolicy::FailFast))
        .expect("変換に失敗");
    assert_eq!(report.files, 1);
    assert_eq!(report.converted, 1);
    assert_eq!(report.rejected, 0);

    let items: Vec<Item> =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    let item = &items[0];
    assert_eq!(item.review.average, 4.5);
    assert_eq!(item.prices.retail, 500);
    assert_eq!(item.prices.contents["download"], 980);

    let actress = &item.item_info["actress"];
    assert_eq!(actress.len(), 1);
    assert_eq!(actress[0].id, "1011199");
    assert_eq!(actress[0].name, "テスト女優");
    assert_eq!(actress[0].ruby, "てすとじょゆう");
    assert_eq!(actress[0].category, "av");
}

#[test]
fn test_output_field_names_are_stable() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("items.json");
    let output = dir.path().join("out.json");
    std::fs::write(&input, ITEM_ENVELOPE).unwrap();

    run::<RawItem>(&options(&input, output.clone(), BatchPolicy::FailFast)).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    let item = &value[0];
    for key in ["affiliateURL", "URL", "URLsp", "iteminfo", "sampleMovieURL", "content_id"] {
        assert!(item.get(key).is_some(), "{} がない", key);
    }
    assert_eq!(item["prices"]["contents"]["stream"], 300);
    assert_eq!(item["iteminfo"]["genre"][0]["ruby"], "どらま");
    assert!(item["iteminfo"]["genre"][0].get("category").is_none());
}

#[test]
fn test_actress_folder_fail_fast() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("in");
    std::fs::create_dir(&input).unwrap();
    std::fs::write(input.join("01.json"), r#"[{"id": "1", "bust": "85"}]"#).unwrap();
    std::fs::write(input.join("02.json"), r#"[{"id": "2", "bust": ""}, {"id": "3", "bust": "abc"}]"#).unwrap();
    let output = dir.path().join("out.json");

    let err = run::<RawActress>(&options(&input, output.clone(), BatchPolicy::FailFast)).unwrap_err();
    match err {
        DmmEnhancedError::Conversion { path, index, label, source } => {
            assert!(path.ends_with("02.json"));
            assert_eq!(index, 1);
            assert_eq!(label, "3");
            assert!(source.to_string().contains("bust"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    // 失敗時は出力を作らない
    assert!(!output.exists());
}

#[test]
fn test_actress_skip_invalid_with_quarantine() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("actress.json");
    std::fs::write(
        &input,
        r#"{"result": {"actress": [
            {"id": "1", "bust": "85", "waist": "58", "hip": "86", "height": "160", "prefectures": "東京都"},
            {"id": "2", "bust": "abc"},
            {"id": "3", "height": ""}
        ]}}"#,
    )
    .unwrap();
    let output = dir.path().join("out.json");
    let quarantine = dir.path().join("rejected.json");

    let mut opts = options(&input, output.clone(), BatchPolicy::SkipInvalid);
    opts.quarantine = Some(quarantine.clone());
    let report = run::<RawActress>(&opts).unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.converted, 2);
    assert_eq!(report.rejected, 1);

    let actresses: Vec<Actress> =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(actresses[0].height, 160);
    assert_eq!(actresses[0].prefecture, "東京都");
    assert_eq!(actresses[1].id, "3");
    assert_eq!(actresses[1].height, 0);

    let rejected: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&quarantine).unwrap()).unwrap();
    assert_eq!(rejected[0]["index"], 1);
    assert_eq!(rejected[0]["label"], "2");
    assert_eq!(rejected[0]["record"]["bust"], "abc");
}

#[test]
fn test_invalid_input_shape() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("bad.json");
    std::fs::write(&input, r#"{"result": {"items": {"not": "a list"}}}"#).unwrap();

    let err = run::<RawItem>(&options(&input, dir.path().join("out.json"), BatchPolicy::FailFast))
        .unwrap_err();
    assert!(matches!(err, DmmEnhancedError::InvalidInput { .. }));
}

#[test]
fn test_malformed_record_shape_is_quarantined() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("actress.json");
    std::fs::write(&input, r#"[{"id": "1", "bust": "85"}, {"id": "2", "bust": ["85"]}]"#).unwrap();
    let output = dir.path().join("out.json");
    let quarantine = dir.path().join("rejected.json");

    let mut opts = options(&input, output.clone(), BatchPolicy::SkipInvalid);
    opts.quarantine = Some(quarantine.clone());
    let report = run::<RawActress>(&opts).expect("1件の形崩れでファイル全体が失敗した");

    assert_eq!(report.converted, 1);
    assert_eq!(report.rejected, 1);

    let actresses: Vec<Actress> =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(actresses.len(), 1);
    assert_eq!(actresses[0].bust, 85);

    let rejected: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&quarantine).unwrap()).unwrap();
    assert_eq!(rejected[0]["index"], 1);
    assert_eq!(rejected[0]["label"], "2");
    assert_eq!(rejected[0]["record"]["bust"][0], "85");
}

#[test]
fn test_malformed_record_shape_fails_fast() {
    let dir = tempdir().expect("Failed to create temp dir");
    let input = dir.path().join("items.json");
    std::fs::write(
        &input,
        r#"[{"content_id": "ok00001"}, {"content_id": "bad00002", "review": {"count": "many"}}]"#,
    )
    .unwrap();
    let output = dir.path().join("out.json");

    let err = run::<RawItem>(&options(&input, output.clone(), BatchPolicy::FailFast)).unwrap_err();
    match err {
        DmmEnhancedError::Conversion { index, label, source, .. } => {
            assert_eq!(index, 1);
            assert_eq!(label, "bad00002");
            assert!(matches!(source, dmm_enhanced_common::Error::Json(_)));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(!output.exists());
}
