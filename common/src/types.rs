//! 正規化後の型定義
//!
//! - Actress: 女優情報（スリーサイズ・身長は整数）
//! - Item: 商品情報（商品詳細・レビュー・価格を型付けしたもの）
//!
//! JSONのフィールド名は下流の利用者との互換性のため固定。

use crate::media::{BandaiInformation, CdInformation, ImageUrl, ListUrl, SampleImage, SampleMovie};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 女優情報
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Actress {
    pub id: String,
    pub name: String,
    pub ruby: String,
    pub bust: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cup: String,
    pub waist: i64,
    pub hip: i64,
    pub height: i64,
    pub birthday: String,
    pub blood_type: String,
    pub hobby: String,
    pub prefecture: String,
    #[serde(rename = "imageURL", default)]
    pub image_url: ImageUrl,
    #[serde(rename = "listURL")]
    pub list_url: ListUrl,
}

/// 商品詳細（ジャンル・出演者など）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemComponent {
    pub id: String,
    pub name: String,
    /// 読み仮名（`_ruby`）
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub ruby: String,
    /// 分類（`_classify`）
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
}

/// レビュー
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub count: i64,
    pub average: f64,
}

/// 価格情報
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prices {
    /// 定価
    pub retail: i64,
    /// 表示用価格（APIの表記のまま）
    pub display: String,
    /// 配信形態 → 価格
    pub contents: BTreeMap<String, i64>,
}

/// 商品情報
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "affiliateURL")]
    pub affiliate_url: String,
    #[serde(rename = "affiliateURLsp")]
    pub affiliate_url_mobile: String,
    #[serde(rename = "bandaiinfo")]
    pub bandai_information: BandaiInformation,
    pub category_name: String,
    #[serde(rename = "cdinfo")]
    pub cd_information: CdInformation,
    pub comment: String,
    pub content_id: String,
    pub date: String,
    pub floor_code: String,
    pub floor_name: String,
    #[serde(rename = "imageURL")]
    pub image_url: ImageUrl,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub isbn: String,
    #[serde(rename = "iteminfo")]
    pub item_info: BTreeMap<String, Vec<ItemComponent>>,
    #[serde(rename = "jancode", default, skip_serializing_if = "String::is_empty")]
    pub jan_code: String,
    pub maker_product: String,
    pub prices: Prices,
    pub product_id: String,
    pub review: Review,
    #[serde(rename = "sampleImageURL", default)]
    pub sample_image_url: SampleImage,
    #[serde(rename = "sampleMovieURL")]
    pub sample_movie_url: SampleMovie,
    pub service_code: String,
    pub service_name: String,
    pub stock: String,
    pub title: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "URLsp")]
    pub url_mobile: String,
    pub volume: String,
}
