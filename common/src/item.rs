//! 商品情報の変換
//!
//! 商品詳細の再構成、レビュー平均点と価格の数値変換を行う。
//! どこか1箇所でも失敗すれば商品全体の変換が失敗する。

use crate::coerce::{parse_float, parse_int};
use crate::components::convert_item_components;
use crate::error::{Error, Result};
use crate::raw::{RawItem, RawPrices, RawReview};
use crate::types::{Item, Prices, Review};
use std::collections::BTreeMap;

/// API生データの商品情報を型付きの [`Item`] に変換する
pub fn convert_item(raw: &RawItem) -> Result<Item> {
    let mut item_info = BTreeMap::new();
    for (category, entries) in &raw.item_info {
        let components = convert_item_components(entries).map_err(|e| Error::ItemInfo {
            category: category.clone(),
            source: Box::new(e),
        })?;
        item_info.insert(category.clone(), components);
    }

    let review = convert_review(&raw.review)?;
    let prices = convert_prices(&raw.prices)?;

    Ok(Item {
        affiliate_url: raw.affiliate_url.clone(),
        affiliate_url_mobile: raw.affiliate_url_mobile.clone(),
        bandai_information: raw.bandai_information.clone(),
        category_name: raw.category_name.clone(),
        cd_information: raw.cd_information.clone(),
        comment: raw.comment.clone(),
        content_id: raw.content_id.clone(),
        date: raw.date.clone(),
        floor_code: raw.floor_code.clone(),
        floor_name: raw.floor_name.clone(),
        image_url: raw.image_url.clone(),
        isbn: raw.isbn.clone(),
        item_info,
        jan_code: raw.jan_code.clone(),
        maker_product: raw.maker_product.clone(),
        prices,
        product_id: raw.product_id.clone(),
        review,
        sample_image_url: raw.sample_image_url.clone(),
        sample_movie_url: raw.sample_movie_url.clone(),
        service_code: raw.service_code.clone(),
        service_name: raw.service_name.clone(),
        stock: raw.stock.clone(),
        title: raw.title.clone(),
        url: raw.url.clone(),
        url_mobile: raw.url_mobile.clone(),
        volume: raw.volume.clone(),
    })
}

/// レビュー: 件数はそのまま、平均点は浮動小数点数に変換
pub fn convert_review(raw: &RawReview) -> Result<Review> {
    Ok(Review {
        count: raw.count,
        average: parse_float("review.average", &raw.average)?,
    })
}

/// 価格: 定価と配信形態ごとの価格を整数に変換
///
/// 配信形態のラベルが空のエントリはエラー。同じラベルが複数あれば後勝ち。
pub fn convert_prices(raw: &RawPrices) -> Result<Prices> {
    let retail = parse_int("prices.list_price", &raw.list_price)?;

    let mut contents = BTreeMap::new();
    for (index, delivery) in raw.deliveries.delivery.iter().enumerate() {
        if delivery.delivery_type.is_empty() {
            return Err(Error::MissingDeliveryType {
                index,
                price: delivery.price.clone(),
            });
        }
        let field = format!("prices.deliveries.delivery[{}].price", index);
        let price = parse_int(&field, &delivery.price)?;
        contents.insert(delivery.delivery_type.clone(), price);
    }

    Ok(Prices {
        retail,
        display: raw.price.clone(),
        contents,
    })
}
