//! 商品詳細（iteminfo）の再構成
//!
//! APIは1つのコンポーネントを複数のエントリに分けて返す。
//!
//! | id              | name に入っているもの |
//! |-----------------|-----------------------|
//! | `42`            | 名称                  |
//! | `42_ruby`       | 読み仮名              |
//! | `42_classify`   | 分類                  |
//!
//! 同じ基底IDのエントリを到着順に関係なく1件の [`ItemComponent`] にまとめる。

use crate::error::{Error, Result};
use crate::raw::RawItemComponent;
use crate::types::ItemComponent;
use std::collections::HashMap;

/// IDの接尾辞が表す役割
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentRole {
    /// 接尾辞なし: 名称
    Base,
    /// `_ruby`: 読み仮名
    Ruby,
    /// `_classify`: 分類
    Classify,
}

impl ComponentRole {
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "ruby" => Some(ComponentRole::Ruby),
            "classify" => Some(ComponentRole::Classify),
            _ => None,
        }
    }
}

/// 解析済みのコンポーネントID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentKey<'a> {
    pub base: &'a str,
    pub role: ComponentRole,
}

/// エントリのIDを基底IDと役割に分解する
///
/// 空IDは呼び出し側でスキップすること。
pub fn parse_component_id(entry: &RawItemComponent) -> Result<ComponentKey<'_>> {
    let parts: Vec<&str> = entry.id.split('_').collect();

    let (base, role) = match parts.as_slice() {
        [base] => (*base, ComponentRole::Base),
        [base, suffix] => {
            let role = ComponentRole::from_suffix(suffix).ok_or_else(|| {
                Error::UnexpectedComponentSuffix {
                    id: entry.id.clone(),
                    suffix: suffix.to_string(),
                    name: entry.name.clone(),
                }
            })?;
            (*base, role)
        }
        _ => {
            return Err(Error::MalformedComponentId {
                id: entry.id.clone(),
            })
        }
    };

    Ok(ComponentKey { base, role })
}

/// フラットなエントリ列をコンポーネントにまとめる
///
/// 戻り値は基底IDごとに1件で、基底IDが最初に現れた順に並ぶ。
/// 最初に見つかった不正なIDでエラーを返し、途中結果は返さない。
///
/// # Examples
/// ```
/// use dmm_enhanced_common::{convert_item_components, RawItemComponent};
///
/// let entries = vec![
///     RawItemComponent::new("42_ruby", "たいとる"),
///     RawItemComponent::new("42", "title"),
/// ];
/// let components = convert_item_components(&entries).unwrap();
/// assert_eq!(components.len(), 1);
/// assert_eq!(components[0].name, "title");
/// assert_eq!(components[0].ruby, "たいとる");
/// ```
pub fn convert_item_components(entries: &[RawItemComponent]) -> Result<Vec<ItemComponent>> {
    let mut components: Vec<ItemComponent> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        if entry.id.is_empty() {
            tracing::trace!(name = %entry.name, "skipping item component without id");
            continue;
        }

        let key = parse_component_id(entry)?;
        let slot = *index.entry(key.base).or_insert_with(|| {
            components.push(ItemComponent {
                id: key.base.to_string(),
                ..Default::default()
            });
            components.len() - 1
        });

        let component = &mut components[slot];
        match key.role {
            ComponentRole::Base => component.name = entry.name.clone(),
            ComponentRole::Ruby => component.ruby = entry.name.clone(),
            ComponentRole::Classify => component.category = entry.name.clone(),
        }
    }

    Ok(components)
}
