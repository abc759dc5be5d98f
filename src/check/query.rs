//! Query construction for the MIC license list endpoint.

use crate::domain::model::{Address, RadioStation, Station};
use url::Url;

/// Citation URLs pointing at the MIC radio-station service.
pub const LICENSE_URL_PREFIX: &str = "https://www.tele.soumu.go.jp/musen";

/// Prefectures in JIS X 0401 order; the 1-based position feeds the `HCV`
/// query parameter.
pub const PREFECTURES: [&str; 47] = [
    "北海道",
    "青森県",
    "岩手県",
    "宮城県",
    "秋田県",
    "山形県",
    "福島県",
    "茨城県",
    "栃木県",
    "群馬県",
    "埼玉県",
    "千葉県",
    "東京都",
    "神奈川県",
    "新潟県",
    "富山県",
    "石川県",
    "福井県",
    "山梨県",
    "長野県",
    "岐阜県",
    "静岡県",
    "愛知県",
    "三重県",
    "滋賀県",
    "京都府",
    "大阪府",
    "兵庫県",
    "奈良県",
    "和歌山県",
    "鳥取県",
    "島根県",
    "岡山県",
    "広島県",
    "山口県",
    "徳島県",
    "香川県",
    "愛媛県",
    "高知県",
    "福岡県",
    "佐賀県",
    "長崎県",
    "熊本県",
    "大分県",
    "宮崎県",
    "鹿児島県",
    "沖縄県",
];

/// Region code (`IT`) taken from the station's citation URL.
pub fn region_code(citation: &str) -> Option<String> {
    let url = Url::parse(citation).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "IT")
        .map(|(_, value)| value.into_owned())
}

pub fn prefecture_number(prefecture: &str) -> Option<usize> {
    PREFECTURES.iter().position(|p| *p == prefecture).map(|i| i + 1)
}

/// Query parameters for one station's license lookup. `None` when the
/// prefecture is not a known JIS prefecture name.
pub fn build_query(
    broadcaster: &RadioStation,
    station: &Station,
    address: &Address,
    region: &str,
) -> Option<Vec<(&'static str, String)>> {
    let prefecture = prefecture_number(&address.prefecture)?;
    let mhz = format!("{:.1}", station.frequency / 1e6);
    let khs = if broadcaster.attributes.iter().any(|a| a == "foreignLanguage") {
        "FFM"
    } else {
        "BFM"
    };
    Some(vec![
        ("ST", "1".into()),
        ("DA", "1".into()),
        ("DC", "1".into()),
        ("SC", "1".into()),
        ("OF", "2".into()),
        ("OW", "BC".into()),
        ("MK", "BBC".into()),
        ("KHS", khs.into()),
        ("IT", region.into()),
        ("HZ", "2".into()),
        ("FF", mhz.clone()),
        ("TF", mhz),
        ("HCV", format!("{prefecture:02}000")),
    ])
}
