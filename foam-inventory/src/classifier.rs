//! Name-based classification: category and counting unit.
//!
//! Product names are free text entered by staff, so both classifiers use
//! ordered keyword-substring matching instead of exact lookup. Rule order
//! is part of the contract: the first match wins, so more specific rules
//! must precede broader ones. Both functions are pure and total.

/// A category and the keywords that select it.
///
/// Keywords are stored lowercase; `categorize` lowercases the name before
/// matching so latin fragments like "ml" compare case-insensitively.
pub struct CategoryRule {
    pub category: &'static str,
    pub keywords: &'static [&'static str],
}

/// Ordered category table. Scanned top to bottom, first keyword hit wins.
const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: "コーヒー",
        keywords: &["コーヒー豆", "エスプレッソ"],
    },
    CategoryRule {
        category: "乳製品",
        keywords: &["牛乳", "ホイップクリーム", "ミルク"],
    },
    CategoryRule {
        category: "シロップ・ソース",
        keywords: &[
            "チョコソース",
            "キャラメルソース",
            "バニラシロップ",
            "チャイシロップ",
            "ホワイトチョコソース",
        ],
    },
    CategoryRule {
        category: "パウダー・茶葉",
        keywords: &["抹茶パウダー", "ほうじ茶パウダー", "アールグレイ"],
    },
    CategoryRule {
        category: "消耗品（容器）",
        keywords: &["紙カップ", "フタ", "プラカップ", "プラフタ", "マドラー", "ストロー"],
    },
    CategoryRule {
        category: "消耗品（調味料）",
        keywords: &["シュガー", "ガムシロップ"],
    },
    CategoryRule {
        category: "衛生用品",
        keywords: &["手袋", "消毒液", "アルコール", "ペーパータオル"],
    },
];

/// Category assigned when no rule matches.
pub const FALLBACK_CATEGORY: &str = "その他";

/// Ordered (keyword, unit) rules.
///
/// Order contract: product-type keywords first (シロップ names a bottled
/// product even when the name also mentions packaging), then goods whose
/// names contain a packaging character (手袋 would otherwise hit the 袋
/// rule), then packaging shapes, then material keywords like コーヒー豆.
const UNIT_RULES: &[(&str, &str)] = &[
    // bottled product types
    ("ソース", "本"),
    ("シロップ", "本"),
    ("牛乳", "本"),
    ("消毒液", "本"),
    // goods shadowed by packaging characters below
    ("手袋", "箱"),
    ("ペーパータオル", "パック"),
    // packaging shapes
    ("個入り", "箱"),
    ("本入り", "袋"),
    ("袋", "袋"),
    ("箱", "箱"),
    ("組", "組"),
    // materials
    ("コーヒー豆", "袋"),
    ("パウダー", "袋"),
];

/// Unit assigned when no rule matches.
pub const DEFAULT_UNIT: &str = "個";

/// Owns the ordered rule tables. Rules are plain data passed in at
/// construction, so there is no hidden shared state between invocations.
pub struct Classifier {
    category_rules: &'static [CategoryRule],
    unit_rules: &'static [(&'static str, &'static str)],
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            category_rules: CATEGORY_RULES,
            unit_rules: UNIT_RULES,
        }
    }
}

impl Classifier {
    /// Map a product name to its category. Never fails; unmatched names
    /// fall back to [`FALLBACK_CATEGORY`].
    pub fn categorize(&self, name: &str) -> &'static str {
        let name = name.to_lowercase();
        for rule in self.category_rules {
            for keyword in rule.keywords {
                if name.contains(keyword) {
                    return rule.category;
                }
            }
        }
        // Ice has no keyword of its own but is stocked with the dairy
        // goods; checked after the table so real keywords still win.
        if name.contains("氷") {
            return "乳製品";
        }
        FALLBACK_CATEGORY
    }

    /// Infer the counting unit from a product name. Never fails; unmatched
    /// names fall back to [`DEFAULT_UNIT`].
    pub fn infer_unit(&self, name: &str) -> &'static str {
        let name = name.to_lowercase();
        for (keyword, unit) in self.unit_rules {
            if name.contains(keyword) {
                return unit;
            }
        }
        DEFAULT_UNIT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorize_matches_keyword_substring() {
        let c = Classifier::default();
        assert_eq!(c.categorize("オーガニックコーヒー豆 200g"), "コーヒー");
        assert_eq!(c.categorize("バニラシロップ 500ml"), "シロップ・ソース");
        assert_eq!(c.categorize("紙カップ Mサイズ"), "消耗品（容器）");
    }

    #[test]
    fn categorize_first_match_wins() {
        // ガムシロップ belongs to the condiments category, not the syrup
        // category: no syrup keyword is a substring of the name.
        let c = Classifier::default();
        assert_eq!(c.categorize("ガムシロップ"), "消耗品（調味料）");
    }

    #[test]
    fn categorize_falls_back() {
        let c = Classifier::default();
        assert_eq!(c.categorize("謎の新商品"), FALLBACK_CATEGORY);
    }

    #[test]
    fn categorize_ice_special_case() {
        let c = Classifier::default();
        assert_eq!(c.categorize("ロックアイス（氷）"), "乳製品");
        // A real keyword still beats the ice check.
        assert_eq!(c.categorize("氷入りコーヒー豆"), "コーヒー");
    }

    #[test]
    fn infer_unit_product_type_before_packaging() {
        let c = Classifier::default();
        assert_eq!(c.infer_unit("バニラシロップ 500ml"), "本");
        // 袋入りソース: the product-type rule fires before the bag rule.
        assert_eq!(c.infer_unit("チョコソース 袋入り"), "本");
    }

    #[test]
    fn infer_unit_specific_goods_before_packaging_characters() {
        let c = Classifier::default();
        // 手袋 contains the 袋 character but is counted in boxes.
        assert_eq!(c.infer_unit("手袋 Lサイズ"), "箱");
    }

    #[test]
    fn infer_unit_packaging_and_materials() {
        let c = Classifier::default();
        assert_eq!(c.infer_unit("紙カップ (50個入り)"), "箱");
        assert_eq!(c.infer_unit("ストロー 100本入り"), "袋");
        assert_eq!(c.infer_unit("オーガニックコーヒー豆 200g"), "袋");
    }

    #[test]
    fn infer_unit_default() {
        let c = Classifier::default();
        assert_eq!(c.infer_unit("マドラー"), DEFAULT_UNIT);
    }

    #[test]
    fn classification_is_case_insensitive() {
        let c = Classifier::default();
        assert_eq!(c.categorize("エスプレッソ BLEND"), "コーヒー");
        assert_eq!(c.categorize("エスプレッソ blend"), "コーヒー");
    }
}
