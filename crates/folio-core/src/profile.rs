//! Biographical content for the home page.

use serde::Serialize;

use crate::model::Link;

/// Owner profile: hero, about, contact, and footer text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// Site title, shown in the hero and navigation.
    pub site_title: &'static str,
    /// Owner's name.
    pub owner: &'static str,
    /// Hero tagline.
    pub tagline: &'static str,
    /// "強み" paragraph, one sentence per entry.
    pub strengths: &'static [&'static str],
    /// Skill list entries.
    pub skills: &'static [Skill],
    /// Invitation shown above the contact link.
    pub contact_message: &'static str,
    /// External profile links.
    pub links: &'static [Link],
    /// Footer line.
    pub copyright: &'static str,
}

/// One labelled skill entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    /// Bold label.
    pub label: &'static str,
    /// Detail text.
    pub detail: &'static str,
}

/// The site owner's profile.
pub const PROFILE: Profile = Profile {
    site_title: "Portfolio",
    owner: "佐藤　怜太",
    tagline: "ユーザー視点を大切にするエンジニア",
    strengths: &[
        "接客経験や講師経験を通して培った「伝える力」と「相手視点で整理する力」が強みです。",
        "技術的な内容を分かりやすく言語化し、チーム内での認識のズレを減らすことを意識しています。",
        "また、実装においてはユーザー視点を持ち、UIの使いやすさにも配慮しています。",
    ],
    skills: &[
        Skill {
            label: "実務経験",
            detail: "SQL（データ抽出・更新・集計）, Oracle, VBA（業務効率化ツール作成）",
        },
        Skill {
            label: "Webアプリ開発（研修・個人制作）",
            detail: "Java, Spring Boot, MySQL, HTML, CSS, JavaScript",
        },
        Skill {
            label: "指導経験",
            detail: "Java, SQL, C など（基礎レベルの指導）",
        },
        Skill {
            label: "フロントエンド",
            detail: "React（学習中）",
        },
        Skill {
            label: "デザイン制作",
            detail: "Adobe Illustrator / Photoshop（ロゴ・ポストカード制作経験）",
        },
        Skill {
            label: "その他",
            detail: "Git / GitHub",
        },
    ],
    contact_message: "お仕事のご相談・ご質問はメールでお気軽にご連絡ください。",
    links: &[Link {
        label: "GitHub",
        href: "https://github.com/ryota-r000",
    }],
    copyright: "© 2024 Web Engineer Portfolio. All rights reserved.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_links_are_absolute() {
        for link in PROFILE.links {
            assert!(link.href.starts_with("https://"), "{}", link.href);
        }
    }

    #[test]
    fn test_skill_order() {
        assert_eq!(PROFILE.skills.first().map(|s| s.label), Some("実務経験"));
        assert_eq!(PROFILE.skills.last().map(|s| s.label), Some("その他"));
    }
}
