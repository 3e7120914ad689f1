//! APIレスポンスの生データ型
//!
//! 数値は文字列、コンポーネントはIDの接尾辞で意味を持つフラットなリスト。
//! APIは同じフィールドを文字列・数値・null のいずれでも返すことがあるため、
//! 文字列フィールドはすべて [`de::loose_string`] で受け取る。

use crate::media::{BandaiInformation, CdInformation, ImageUrl, ListUrl, SampleImage, SampleMovie};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod de {
    //! 緩いデシリアライズ補助

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// 文字列・数値・真偽値・null を文字列として受け取る（null は空文字列）
    pub fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(String::new()),
            Some(Value::String(s)) => Ok(s),
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(Value::Bool(b)) => Ok(b.to_string()),
            Some(other) => Err(D::Error::custom(format!(
                "expected string or number, got {}",
                other
            ))),
        }
    }

    /// 整数・整数文字列・null を受け取る（null と空文字列は 0）
    pub fn loose_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(0),
            Some(Value::Number(n)) => n
                .as_i64()
                .ok_or_else(|| D::Error::custom(format!("expected integer, got {}", n))),
            Some(Value::String(s)) if s.is_empty() => Ok(0),
            Some(Value::String(s)) => s
                .parse()
                .map_err(|_| D::Error::custom(format!("expected integer, got {:?}", s))),
            Some(other) => Err(D::Error::custom(format!("expected integer, got {}", other))),
        }
    }
}

/// 女優情報（API生データ）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawActress {
    #[serde(deserialize_with = "de::loose_string")]
    pub id: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub name: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub ruby: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub bust: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub cup: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub waist: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub hip: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub height: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub birthday: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub blood_type: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub hobby: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub prefectures: String,
    #[serde(rename = "imageURL")]
    pub image_url: ImageUrl,
    #[serde(rename = "listURL")]
    pub list_url: ListUrl,
}

/// 商品詳細の1エントリ（`id` は `基底ID`, `基底ID_ruby`, `基底ID_classify` のいずれか）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawItemComponent {
    #[serde(deserialize_with = "de::loose_string")]
    pub id: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub name: String,
}

impl RawItemComponent {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// レビュー（平均点は文字列）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawReview {
    #[serde(deserialize_with = "de::loose_count")]
    pub count: i64,
    #[serde(deserialize_with = "de::loose_string")]
    pub average: String,
}

/// 配信形態ごとの価格
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDelivery {
    #[serde(rename = "type", deserialize_with = "de::loose_string")]
    pub delivery_type: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub price: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDeliveries {
    pub delivery: Vec<RawDelivery>,
}

/// 価格情報（API生データ）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPrices {
    /// 表示用価格（"300~" のような表記を含む）
    #[serde(deserialize_with = "de::loose_string")]
    pub price: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub list_price: String,
    pub deliveries: RawDeliveries,
}

/// 商品情報（API生データ）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawItem {
    #[serde(rename = "affiliateURL", deserialize_with = "de::loose_string")]
    pub affiliate_url: String,
    #[serde(rename = "affiliateURLsp", deserialize_with = "de::loose_string")]
    pub affiliate_url_mobile: String,
    #[serde(rename = "bandaiinfo")]
    pub bandai_information: BandaiInformation,
    #[serde(deserialize_with = "de::loose_string")]
    pub category_name: String,
    #[serde(rename = "cdinfo")]
    pub cd_information: CdInformation,
    #[serde(deserialize_with = "de::loose_string")]
    pub comment: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub content_id: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub date: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub floor_code: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub floor_name: String,
    #[serde(rename = "imageURL")]
    pub image_url: ImageUrl,
    #[serde(deserialize_with = "de::loose_string")]
    pub isbn: String,
    #[serde(rename = "iteminfo")]
    pub item_info: BTreeMap<String, Vec<RawItemComponent>>,
    #[serde(rename = "jancode", deserialize_with = "de::loose_string")]
    pub jan_code: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub maker_product: String,
    pub prices: RawPrices,
    #[serde(deserialize_with = "de::loose_string")]
    pub product_id: String,
    pub review: RawReview,
    #[serde(rename = "sampleImageURL")]
    pub sample_image_url: SampleImage,
    #[serde(rename = "sampleMovieURL")]
    pub sample_movie_url: SampleMovie,
    #[serde(deserialize_with = "de::loose_string")]
    pub service_code: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub service_name: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub stock: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub title: String,
    #[serde(rename = "URL", deserialize_with = "de::loose_string")]
    pub url: String,
    #[serde(rename = "URLsp", deserialize_with = "de::loose_string")]
    pub url_mobile: String,
    #[serde(deserialize_with = "de::loose_string")]
    pub volume: String,
}
