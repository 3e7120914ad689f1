//! DMM Enhanced Common Library
//!
//! DMM APIの緩い型のレスポンス（数値は文字列、商品詳細はIDの接尾辞で
//! 意味が分かれるフラットなリスト）を、型付きのレコードに変換する。
//! I/Oを持たない純粋な変換のみを置く。

pub mod actress;
pub mod coerce;
pub mod components;
pub mod error;
pub mod item;
pub mod media;
pub mod raw;
pub mod types;

pub use actress::convert_actress;
pub use components::{convert_item_components, parse_component_id, ComponentKey, ComponentRole};
pub use error::{Error, Result};
pub use item::{convert_item, convert_prices, convert_review};
pub use raw::{RawActress, RawDeliveries, RawDelivery, RawItem, RawItemComponent, RawPrices, RawReview};
pub use types::{Actress, Item, ItemComponent, Prices, Review};
