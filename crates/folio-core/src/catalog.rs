//! The site's project records.

use crate::model::{Detail, Gallery, LayoutHint, Link, Project, Screenshot, Showcase};

/// Built-in projects, in listing order.
pub const PROJECTS: &[Project] = &[KEN_INTERIOR_SHOP, FLUID_ART_BRAND, COFFEE_SHOP_VISUAL];

const KEN_INTERIOR_SHOP: Project = Project {
    id: "ken-interior-shop",
    title: "KEN Interior Shop",
    subtitle: "チーム開発 / ECサイト",
    description: "家具メーカーの自社ECサイトを想定したWebショッピングシステム（Spring Boot / Thymeleaf / MySQL）。",
    role: "チームリーダー（進行管理・ルール整備） / 担当：認証・ログイン機能／セッション管理基盤／フォームバリデーション",
    summary: "家具メーカーの自社ECサイトを想定したWebショッピングシステム。チームリーダーとして進行管理・ルール整備を行い、認証・ログイン機能とセッション管理基盤を実装。",
    cover: "images/projects/ken-top-loggedin.png",
    tech_stack: &["Java", "Spring Boot", "Thymeleaf", "MySQL", "Git"],
    links: &[Link {
        label: "GitHub",
        href: "https://github.com/ryota-r000/kenfurni",
    }],
    details: &[
        Detail {
            title: "目的",
            content: "会員（購入者）と従業員（管理者）の機能分離を前提に、誤操作と不正アクセスを抑えた認証基盤を構築する。",
        },
        Detail {
            title: "セキュリティ",
            content: "パスワードはハッシュ化して保存（平文保持を回避）。",
        },
        Detail {
            title: "設計",
            content: "セッション管理を共通化し、各画面から一貫した方法で認証状態を参照できる構成にした。",
        },
        Detail {
            title: "判断",
            content: "チームの習熟度・学習コストを踏まえ、Spring Securityは使用せず自前実装（認証の内部構造を理解しながら実装）。",
        },
        Detail {
            title: "運用",
            content: "Git運用ルール／コーディング規約を整備し、コンフリクトや差分事故を抑える開発環境を作った。",
        },
    ],
    showcase: Showcase::Web {
        lede: Some("権限制御 → セッション → ロジック の順で掲載"),
        screenshots: &[
            Screenshot {
                title: "① 未ログイン時：購入制御（権限分離）",
                description: "未ログイン状態では購入手続きに進めないよう制御し、意図しない操作や不正アクセスを防止。",
                image: "images/projects/ken-cart-guest.png",
            },
            Screenshot {
                title: "② ログイン後：セッション情報の表示",
                description: "ログイン後はヘッダーにユーザー名・保有ポイントを表示。セッション管理により状態を一元化。",
                image: "images/projects/ken-top-loggedin.png",
            },
            Screenshot {
                title: "③ ログイン後：ポイント適用・金額再計算",
                description: "保有ポイントと使用ポイントを反映し、合計金額を再計算。入力バリデーションと整合性を意識。",
                image: "images/projects/ken-cart-loggedin.png",
            },
            Screenshot {
                title: "④ ログイン画面（入口）",
                description: "入力フォーム単位でバリデーションを実装。エラー時の案内や再入力のしやすさにも配慮。",
                image: "images/projects/ken-login.png",
            },
        ],
    },
};

const FLUID_ART_BRAND: Project = Project {
    id: "fluid-art-brand",
    title: "Fluid Art Brand Design",
    subtitle: "ブランディング / デザイン",
    description: "フルイドアート作品の制作と販売に伴うビジュアル制作を一貫して担当。ロゴ、ポストカード、名刺、展示用幕などをIllustrator・Photoshopで制作。",
    role: "アート作品制作 / ロゴデザイン・ポストカード・名刺・展示幕制作 / 印刷用データ作成",
    summary: "フルイドアート作品の制作から、ロゴ・ポストカード・名刺・展示幕まで販売ビジュアルを一貫して制作。",
    cover: "images/fluid-art/hero/hero-image-01.png",
    tech_stack: &["Illustrator", "Photoshop", "Branding", "Print Design"],
    links: &[],
    details: &[
        Detail {
            title: "ビジュアル戦略",
            content: "アート作品のコンセプトをロゴ・ポストカード・名刺などの販売ビジュアルに一貫性を持たせて展開。ブランドアイデンティティを統一。",
        },
        Detail {
            title: "デザイン工夫",
            content: "フルイドアートの流動的な美しさを活かしながら、商品カードや展示物では視認性と情報整理を重視。",
        },
        Detail {
            title: "印刷対応",
            content: "CMYK色空間での色調整、トンボ・塗足の設定など、印刷物としての完成度を意識した制作。",
        },
    ],
    showcase: Showcase::Design {
        galleries: &[
            Gallery {
                heading: "Key Visual",
                alt: "Hero Image",
                images: &["images/fluid-art/hero/hero-image-01.png"],
                hint: LayoutHint::Hero,
                narrow: false,
            },
            Gallery {
                heading: "Art Collection",
                alt: "Artworks",
                images: &[
                    "images/fluid-art/artworks/artwork-01.jpg",
                    "images/fluid-art/artworks/artwork-02.jpg",
                    "images/fluid-art/artworks/artwork-03.jpg",
                ],
                hint: LayoutHint::Artworks,
                narrow: false,
            },
            Gallery {
                heading: "Visual Identity",
                alt: "Logo",
                images: &["images/fluid-art/logo/logo-main.jpg"],
                hint: LayoutHint::Default,
                narrow: false,
            },
            Gallery {
                heading: "Postcard Design",
                alt: "Postcards",
                images: &[
                    "images/fluid-art/postcards/postcard-front-01.png",
                    "images/fluid-art/postcards/postcard-back-01.png",
                ],
                hint: LayoutHint::Print,
                narrow: false,
            },
            Gallery {
                heading: "Business Card Design",
                alt: "Business Cards",
                images: &[
                    "images/fluid-art/business-cards/business-card-front.png",
                    "images/fluid-art/business-cards/business-card-back.png",
                ],
                hint: LayoutHint::Print,
                narrow: false,
            },
            Gallery {
                heading: "Exhibition Visual",
                alt: "Exhibition Visual",
                images: &["images/fluid-art/exhibition/exhibition-visual-01.png"],
                hint: LayoutHint::Print,
                narrow: false,
            },
        ],
    },
};

const COFFEE_SHOP_VISUAL: Project = Project {
    id: "coffee-shop-visual",
    title: "Coffee Shop Visual Design",
    subtitle: "デザイン / 印刷物",
    description: "ロゴデザインを含むブランド全体のビジュアル設計を担当。Illustratorを使用してロゴ制作を行い、商品カードおよびショップカードのデザインを制作。各印刷物へ一貫したデザイン展開を行いました。",
    role: "豆カード制作（3種・表裏） / ショップカード制作 / 印刷用データ作成",
    summary: "ロゴを含むブランドのビジュアル設計と、豆カード・ショップカードの印刷物デザインを制作。",
    cover: "images/coffee-shop/hero/hero-01.jpg",
    tech_stack: &["Illustrator", "Print Design", "Layout Design"],
    links: &[],
    details: &[
        Detail {
            title: "ロゴデザイン",
            content: "ブランドイメージを象徴するロゴをIllustratorで制作。印刷物展開を前提に、視認性と汎用性を意識した設計を行いました。",
        },
        Detail {
            title: "情報設計",
            content: "文字情報の優先順位を整理し、視認性と可読性を意識したレイアウト設計を行いました。",
        },
        Detail {
            title: "印刷対応",
            content: "印刷を前提に、色味や余白バランスを調整しています。",
        },
    ],
    showcase: Showcase::Design {
        galleries: &[
            Gallery {
                heading: "Brand Image",
                alt: "Brand Image",
                images: &["images/coffee-shop/hero/hero-01.jpg"],
                hint: LayoutHint::Hero,
                narrow: false,
            },
            Gallery {
                heading: "Bean Card Design",
                alt: "Bean Cards",
                images: &[
                    "images/coffee-shop/bean-cards/bean-card-front-01.png",
                    "images/coffee-shop/bean-cards/bean-card-back-01.png",
                    "images/coffee-shop/bean-cards/bean-card-front-02.png",
                    "images/coffee-shop/bean-cards/bean-card-back-02.png",
                    "images/coffee-shop/bean-cards/bean-card-front-03.png",
                    "images/coffee-shop/bean-cards/bean-card-back-03.png",
                ],
                hint: LayoutHint::Print,
                narrow: false,
            },
            Gallery {
                heading: "Shop Card Design",
                alt: "Shop Card",
                images: &["images/coffee-shop/shop-card/shop-card-01.png"],
                hint: LayoutHint::Print,
                narrow: true,
            },
        ],
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectKind;

    #[test]
    fn test_listing_order() {
        let ids: Vec<&str> = PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            ["ken-interior-shop", "fluid-art-brand", "coffee-shop-visual"]
        );
    }

    #[test]
    fn test_kinds() {
        assert_eq!(KEN_INTERIOR_SHOP.kind(), ProjectKind::Web);
        assert_eq!(FLUID_ART_BRAND.kind(), ProjectKind::Design);
        assert_eq!(COFFEE_SHOP_VISUAL.kind(), ProjectKind::Design);
    }

    #[test]
    fn test_ids_match_titles() {
        // Identifiers are derived from the titles, minus trailing words.
        assert!(crate::ids::normalize_id(KEN_INTERIOR_SHOP.title).starts_with(KEN_INTERIOR_SHOP.id));
        assert!(crate::ids::normalize_id(COFFEE_SHOP_VISUAL.title).starts_with(COFFEE_SHOP_VISUAL.id));
    }

    #[test]
    fn test_image_paths_are_relative() {
        for project in PROJECTS {
            for path in project.image_paths() {
                assert!(path.starts_with("images/"), "{}: {path}", project.id);
            }
        }
    }

    #[test]
    fn test_only_single_print_galleries_are_narrow() {
        for project in PROJECTS {
            if let Showcase::Design { galleries } = project.showcase {
                for gallery in galleries.iter().filter(|g| g.narrow) {
                    assert_eq!(gallery.images.len(), 1);
                    assert_eq!(gallery.hint, LayoutHint::Print);
                }
            }
        }
    }
}
