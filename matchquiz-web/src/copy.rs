//! Fixed Japanese copy shown across the funnel.

pub const LOADING: &str = "読み込み中...";
pub const ANALYZING: &str = "あなたに最適なサイトを分析中...";

pub mod home {
    pub const HEADLINE_LEAD: &str = "あなたにピッタリの";
    pub const HEADLINE_ACCENT: &str = "出会い系サイト";
    pub const HEADLINE_TAIL: &str = "を診断";
    pub const SUBHEAD_LEAD: &str = "たった5つの質問に答えるだけで";
    pub const SUBHEAD_TAIL: &str = "あなたに最適なサービスが見つかります";
    pub const CTA: &str = "無料で診断を始める";
    pub const TRUST: [&str; 3] = ["完全無料", "個人情報不要", "所要時間1分"];
    pub const FEATURES: [(&str, &str); 3] = [
        (
            "簡単5ステップ",
            "年代、求める関係、出会いのスピードなど5つの質問で、あなたにピッタリのサイトが分かります",
        ),
        (
            "人気サイトから厳選",
            "大手出会い系サイトと婚活サービスの中から、あなたに最適なサイトを提案します",
        ),
        (
            "相性度を表示",
            "診断結果では相性度とその理由、サイトの特徴を詳しく解説。納得して選べます",
        ),
    ];
    pub const FOOTER: &str = "© 2025 出会い系サイト診断. All rights reserved.";
}

pub mod quiz {
    pub const BACK: &str = "戻る";
    pub const NEXT: &str = "次へ";
    pub const SHOW_RESULT: &str = "結果を見る";

    #[must_use]
    pub fn counter(current: usize, total: usize) -> String {
        format!("質問 {current} / {total}")
    }
}

pub mod result {
    pub const NOT_FOUND: &str = "結果が見つかりませんでした";
    pub const BACK_TO_TOP: &str = "トップに戻る";
    pub const URGENCY: &str = "🔥 今週限定：新規登録で最大1,200円分のポイントプレゼント中！";
    pub const DONE: &str = "診断完了！";
    pub const DONE_SUB: &str = "あなたにピッタリのサイトが見つかりました";
    pub const DAYS_CAPTION: &str = "あなたのようなタイプが理想の相手と出会えるまでの平均日数";
    pub const COMPATIBILITY: &str = "相性度";
    pub const FREE_NOTE: &str = "※登録無料・3分で完了";
    pub const INSIGHT_TITLE: &str = "脳科学・心理学的分析";
    pub const TESTIMONIAL: &str = "💬 「診断通りのサイトで登録3日目に理想の相手と出会えました！」";
    pub const TESTIMONIAL_BY: &str = "- 42歳男性・東京都";
    pub const FINAL_NOTE: &str = "今すぐ登録して、理想の相手との出会いを始めましょう";
    pub const RETAKE: &str = "もう一度診断する";
    pub const DISCLAIMER: &str = "※ この診断結果は統計データと心理学理論に基づいていますが、個人差があります。";
    pub const DISCLAIMER_SUB: &str = "実際のサービス内容・料金は各サイトでご確認ください。";

    #[must_use]
    pub fn days(value: &str) -> String {
        format!("{value}日")
    }

    #[must_use]
    pub fn days_source(site: &str) -> String {
        format!("※過去6ヶ月の{site}利用者データに基づく統計")
    }

    #[must_use]
    pub fn cta_primary(site: &str) -> String {
        format!("{site}で今すぐ出会う")
    }

    #[must_use]
    pub fn cta_details(site: &str) -> String {
        format!("{site}の詳細を見る")
    }

    #[must_use]
    pub fn why_title(site: &str) -> String {
        format!("{site}があなたにおすすめな理由")
    }
}

pub mod not_found {
    pub const TITLE: &str = "ページが見つかりません";
    pub const MESSAGE: &str = "お探しのページは存在しないか、移動した可能性があります。";
    pub const BACK: &str = "トップに戻る";
}
