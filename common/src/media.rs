//! 画像・動画・リンク情報
//!
//! 変換せずにそのまま出力へ引き継ぐ入れ子構造。

use crate::raw::de;
use serde::{Deserialize, Serialize};

/// 画像URL
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageUrl {
    #[serde(deserialize_with = "de::loose_string", skip_serializing_if = "String::is_empty")]
    pub list: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub small: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub large: String,
}

/// 女優の作品一覧URL
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListUrl {
    #[serde(deserialize_with = "de::loose_string")]
    pub digital: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub monthly: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub ppm: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub mono: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub rental: String,
}

/// サンプル画像の一覧
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageList {
    pub image: Vec<String>,
}

/// サンプル画像（小・大）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_s: Option<ImageList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_l: Option<ImageList>,
}

/// サンプル動画URL
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleMovie {
    #[serde(deserialize_with = "de::loose_string")]
    pub size_476_306: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub size_560_360: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub size_644_414: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub size_720_480: String,
    pub pc_flag: i64,
    pub sp_flag: i64,
}

/// CD情報
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CdInformation {
    #[serde(deserialize_with = "de::loose_string")]
    pub kind: String,
}

/// バンダイ情報
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandaiInformation {
    #[serde(deserialize_with = "de::loose_string")]
    pub titlecode: String,
}
