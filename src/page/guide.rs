//! The embedded tourism data tables.
//!
//! One record per supported prefecture, keyed by the JIS prefecture code
//! carried in the SVG's `data-code` attributes. The records are immutable
//! build-time data; the page script looks them up on click and falls back to
//! `DefaultRecord` for codes without an entry, keeping the clicked region's
//! own name from its `<title>` element.

use serde::Serialize;
use std::collections::BTreeMap;

/// Tourism info for one prefecture.
///
/// Field order here fixes the key order in the generated page.
#[derive(Debug, Clone, Serialize)]
pub struct RegionRecord {
    /// Display name (Japanese).
    pub name: &'static str,
    /// English name.
    pub en: &'static str,
    /// Highlight spot.
    pub spot: &'static str,
    /// Local cuisine.
    pub food: &'static str,
    /// Hidden gem. Kept in the data but not rendered by the page script.
    pub hidden: &'static str,
    /// Concierge-tone description.
    pub desc: &'static str,
}

/// Fallback values for prefectures without a [`RegionRecord`].
#[derive(Debug, Clone, Serialize)]
pub struct DefaultRecord {
    pub spot: &'static str,
    pub food: &'static str,
    pub hidden: &'static str,
    pub desc: &'static str,
}

/// The supported prefectures, keyed by JIS code.
pub fn guide_data() -> BTreeMap<u32, RegionRecord> {
    BTreeMap::from([
        (
            1,
            RegionRecord {
                name: "北海道",
                en: "Hokkaido",
                spot: "四季彩の丘",
                food: "ジンギスカン・海鮮丼",
                hidden: "神の子池（清里町）",
                desc: "雄大な自然と美食の宝庫、北海道へようこそ。広大な大地で深呼吸し、四季折々の絶景をお楽しみください。",
            },
        ),
        (
            13,
            RegionRecord {
                name: "東京都",
                en: "Tokyo",
                spot: "浅草寺・スカイツリー",
                food: "江戸前寿司・もんじゃ焼き",
                hidden: "等々力渓谷（世田谷区）",
                desc: "伝統と最先端が融合する大都市、東京。路地裏の情緒から摩天楼の輝きまで、刺激的な発見があなたを待っています。",
            },
        ),
        (
            26,
            RegionRecord {
                name: "京都府",
                en: "Kyoto",
                spot: "清水寺・金閣寺",
                food: "京懐石・湯豆腐",
                hidden: "貴船神社（夜の灯篭）",
                desc: "千年の都、京都。歴史ある寺社仏閣の静寂と、四季の雅な移ろいに浸る、心安らぐ旅はいかがでしょうか。",
            },
        ),
        (
            27,
            RegionRecord {
                name: "大阪府",
                en: "Osaka",
                spot: "道頓堀・USJ",
                food: "たこ焼き・お好み焼き",
                hidden: "箕面大滝",
                desc: "食い倒れの街、大阪。活気あふれる街並みと人情味、そして絶品グルメが、あなたの旅をエネルギッシュに彩ります。",
            },
        ),
        (
            47,
            RegionRecord {
                name: "沖縄県",
                en: "Okinawa",
                spot: "美ら海水族館",
                food: "沖縄そば・ゴーヤチャンプルー",
                hidden: "果報バンタ（うるま市）",
                desc: "青い海と空、南国の楽園沖縄。ゆったりと流れる島時間の中で、心も体もリフレッシュする極上のひとときを。",
            },
        ),
    ])
}

/// Fallback shown for prefectures without an explicit record.
pub fn default_record() -> DefaultRecord {
    DefaultRecord {
        spot: "情報準備中...",
        food: "情報準備中...",
        hidden: "",
        desc: "現在、この都道府県の特別な観光プランを計画中です。詳細の公開まで今しばらくお待ちください。",
    }
}
