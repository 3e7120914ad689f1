//! 女優情報の変換

use crate::coerce::parse_int;
use crate::error::Result;
use crate::raw::RawActress;
use crate::types::Actress;

/// API生データの女優情報を型付きの [`Actress`] に変換する
///
/// バスト・ウエスト・ヒップ・身長の順に数値変換し、最初の失敗で中断する。
/// 空文字列は 0 になる。それ以外のフィールドはそのまま引き継ぐ。
pub fn convert_actress(raw: &RawActress) -> Result<Actress> {
    let bust = parse_int("bust", &raw.bust)?;
    let waist = parse_int("waist", &raw.waist)?;
    let hip = parse_int("hip", &raw.hip)?;
    let height = parse_int("height", &raw.height)?;

    Ok(Actress {
        id: raw.id.clone(),
        name: raw.name.clone(),
        ruby: raw.ruby.clone(),
        bust,
        cup: raw.cup.clone(),
        waist,
        hip,
        height,
        birthday: raw.birthday.clone(),
        blood_type: raw.blood_type.clone(),
        hobby: raw.hobby.clone(),
        prefecture: raw.prefectures.clone(),
        image_url: raw.image_url.clone(),
        list_url: raw.list_url.clone(),
    })
}
