//! Translated copy for the three supported languages.

use serde::{Deserialize, Serialize};

/// Display language. Cycles EN → KO → ZH → EN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ko,
    Zh,
}

impl Language {
    /// Two-letter code stored in preferences.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ko => "ko",
            Language::Zh => "zh",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "ko" => Some(Language::Ko),
            "zh" => Some(Language::Zh),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Language::En => Language::Ko,
            Language::Ko => Language::Zh,
            Language::Zh => Language::En,
        }
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Language::En => &EN,
            Language::Ko => &KO,
            Language::Zh => &ZH,
        }
    }
}

/// All user-visible copy for one language.
#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub heading: &'static str,
    pub paragraph: &'static str,
    /// Highlighted words appended to `paragraph` (English only).
    pub highlights: &'static [&'static str],
    pub ending: &'static str,
    pub gamer: &'static str,
    pub ending2: &'static str,
    pub link_copied: &'static str,
    pub language_changed: &'static str,
    pub language_tooltip: &'static str,
    pub welcome_banner: &'static str,
    pub welcome_title: &'static str,
    pub welcome_subtitle: &'static str,
    pub welcome_quote: &'static str,
    pub scroll_to_explore: &'static str,
    pub section_labels: [&'static str; 3],
    pub hello_heading: &'static str,
    pub help_title: &'static str,
    pub help_close: &'static str,
    pub shortcuts: [(&'static str, &'static str); 8],
    /// Key hints in the status bar
    pub status_hints: [(&'static str, &'static str); 3],
}

pub static EN: Strings = Strings {
    title: "About BYEONGUK",
    subtitle: "Unfolding the quiet story of me",
    heading: "Localization Specialists are not merely translators",
    paragraph: "Serve as the final cultural inspectors, maximizing the completeness of the work by leveraging their understanding of",
    highlights: &["language", "culture", "society", "politics", "the arts"],
    ending: "I try to reach users as a",
    gamer: "gamer",
    ending2: "not merely as a job",
    link_copied: "Link copied!",
    language_changed: "Language: English",
    language_tooltip: "Languages rotate in the order EN → KO → ZH",
    welcome_banner: "I LOVE WHAT I DO",
    welcome_title: "GAMER TO GAMER",
    welcome_subtitle: "I love",
    welcome_quote: "By the Gamer, Of the Gamer, For the Gamer...",
    scroll_to_explore: "Scroll to explore",
    section_labels: ["Welcome", "About", "Hello"],
    hello_heading: "Moments",
    help_title: "Keyboard Shortcuts",
    help_close: "Close",
    shortcuts: [
        ("↑ / ↓", "Navigate sections"),
        ("L", "Change language"),
        ("T", "Toggle theme"),
        ("← / →", "Navigate images"),
        ("Enter", "Focus image"),
        ("ESC", "Close focused image"),
        ("S", "Copy link"),
        ("?", "Show/hide this help"),
    ],
    status_hints: [("j/k", "scroll"), ("?", "help"), ("q", "quit")],
};

pub static KO: Strings = Strings {
    title: "About 병욱",
    subtitle: "Unfolding the quiet story of me",
    heading: "현지화 전문가는 번역가가 아닙니다",
    paragraph: "언어의 문화, 사회, 정치, 예술적 지식을 기반으로 하여금 작품의 완성도를 최고로 올리는 최종 문화 검수자입니다.",
    highlights: &[],
    ending: "직업이 아닌, 한 명의 게이머로서",
    gamer: "게이머",
    ending2: "게이머에게 다가가기 위해 노력합니다",
    link_copied: "링크가 복사되었습니다!",
    language_changed: "언어: 한국어",
    language_tooltip: "EN → KO → ZH 순서로 언어가 순환됩니다",
    welcome_banner: "난 내가 하는 일을 사랑해",
    welcome_title: "게이머가 게이머에게",
    welcome_subtitle: "난 좋아해",
    welcome_quote: "게이머의, 게이머에 의한, 게이머를 위한...",
    scroll_to_explore: "스크롤하여 탐색하기",
    section_labels: ["환영", "소개", "안녕하세요"],
    hello_heading: "순간들",
    help_title: "키보드 단축키",
    help_close: "닫기",
    shortcuts: [
        ("↑ / ↓", "섹션 간 이동"),
        ("L", "언어 변경"),
        ("T", "테마 변경"),
        ("← / →", "이미지 넘기기"),
        ("Enter", "이미지 확대"),
        ("ESC", "확대된 이미지 닫기"),
        ("S", "링크 복사"),
        ("?", "도움말 표시/숨기기"),
    ],
    status_hints: [("j/k", "스크롤"), ("?", "도움말"), ("q", "종료")],
};

pub static ZH: Strings = Strings {
    title: "About 权兵昱（小权）",
    subtitle: "Unfolding the quiet story of me",
    heading: "游戏是所有学问和文化相结合的结晶",
    paragraph: "本地化专家不是翻译家。以语言的文化、社会、政治、艺术知识为基础，提高作品完成度的最终文化验收专家。",
    highlights: &[],
    ending: "我试图以",
    gamer: "游戏玩家",
    ending2: "的身份接触用户，而不仅仅是作为一份工作",
    link_copied: "链接已复制！",
    language_changed: "语言：中文",
    language_tooltip: "语言将按照 EN → KO → ZH 的顺序循环切换",
    welcome_banner: "我热爱我所做的一切",
    welcome_title: "玩家给玩家",
    welcome_subtitle: "我喜欢",
    welcome_quote: "玩家的, 源自玩家, 成于玩家...",
    scroll_to_explore: "滚动探索",
    section_labels: ["欢迎", "关于", "你好"],
    hello_heading: "瞬间",
    help_title: "键盘快捷键",
    help_close: "关闭",
    shortcuts: [
        ("↑ / ↓", "切换部分"),
        ("L", "更改语言"),
        ("T", "切换主题"),
        ("← / →", "切换图片"),
        ("Enter", "放大图片"),
        ("ESC", "关闭放大图片"),
        ("S", "复制链接"),
        ("?", "显示/隐藏帮助"),
    ],
    status_hints: [("j/k", "滚动"), ("?", "帮助"), ("q", "退出")],
};
