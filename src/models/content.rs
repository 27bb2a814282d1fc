//! Literal copy for the landing page.

pub const SITE_TITLE: &str = "【年収UP支援】20代30代向け転職相談・年収診断 | LINEで相談";

pub const SITE_DESCRIPTION: &str = "年収300-400万円からの年収アップを実現。転職相談無料。あなたの市場価値を診断し、最適な転職先を提案。LINE個別相談対応中。";

pub const SITE_KEYWORDS: &[&str] = &[
    "転職",
    "年収アップ",
    "転職エージェント",
    "20代転職",
    "30代転職",
    "転職相談",
    "年収400万 転職",
    "未経験転職 成功",
    "転職 市場価値",
];

pub fn keywords_meta() -> String {
    SITE_KEYWORDS.join(", ")
}

pub const PROBLEMS: &[&str] = &[
    "準備不足で希望の条件が引き出せない",
    "面接で自己PRができない",
    "市場価値がわからず年収ダウン",
    "入社後のギャップで早期退職",
];

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub title: &'static str,
    pub points: &'static [&'static str],
    pub highlight: Option<&'static str>,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "マンツーマンサポート",
        points: &[
            "専任アドバイザーによる個別カウンセリング",
            "履歴書・職務経歴書の添削",
            "面接対策",
        ],
        highlight: Some("＜これが全部無料！！＞"),
    },
    Feature {
        title: "充実のサポート内容",
        points: &[
            "市場価値診断",
            "スキル棚卸し",
            "転職市場動向の共有",
            "企業研究サポート",
        ],
        highlight: None,
    },
    Feature {
        title: "フレキシブルな対応",
        points: &[
            "オンライン・オフライン選択可",
            "休日・夜間相談可能",
            "地方在住者も対応可",
        ],
        highlight: None,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    pub figure: &'static str,
    pub caption: &'static str,
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        figure: "1000名以上",
        caption: "年間サポート実績",
    },
    Achievement {
        figure: "90%以上",
        caption: "転職成功率",
    },
    Achievement {
        figure: "平均20%増",
        caption: "年収アップ率",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub label: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        label: "30代 男性",
        role: "IT業界からWeb業界へ転職",
    },
    Testimonial {
        label: "40代 女性",
        role: "営業職から人事へキャリアチェンジ",
    },
    Testimonial {
        label: "20代 男性",
        role: "未経験からエンジニアへ転身",
    },
];

pub const TESTIMONIAL_BODY: &str = "専任のアドバイザーさんが親身になって相談に乗ってくださり、希望通りの条件で転職することができました。";
