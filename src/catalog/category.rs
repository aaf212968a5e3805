//! カテゴリ名と商品サービスのカテゴリIDの対応表

/// 商品サービスが採番しているカテゴリ一覧
const DEFAULT_CATEGORIES: &[(u64, &str)] = &[
    (1, "Electronics"),
    (2, "Clothing"),
    (3, "Beauty & Health"),
    (4, "Sports"),
    (5, "Furniture"),
    (6, "Accessories"),
];

/// カテゴリディレクトリ
///
/// ローカルデータセットはカテゴリ名、リモートAPIは数値IDを使うため、
/// 両者を相互変換する。
#[derive(Debug, Clone)]
pub struct CategoryDirectory {
    entries: Vec<(u64, String)>,
}

impl CategoryDirectory {
    pub fn new(entries: impl IntoIterator<Item = (u64, String)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// カテゴリ名からIDを取得（大文字小文字を区別しない）
    ///
    /// 数値文字列はそのままIDとして扱う。
    pub fn id_of(&self, name: &str) -> Option<u64> {
        let name = name.trim();
        if let Ok(id) = name.parse::<u64>() {
            return Some(id);
        }
        self.entries
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(id, _)| *id)
    }

    /// IDからカテゴリ名を取得
    pub fn name_of(&self, id: u64) -> Option<&str> {
        self.entries
            .iter()
            .find(|(i, _)| *i == id)
            .map(|(_, n)| n.as_str())
    }

    /// IDからカテゴリ名を解決（未知のIDは数値文字列）
    pub fn resolve_name(&self, id: u64) -> String {
        self.name_of(id)
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string())
    }
}

impl Default for CategoryDirectory {
    fn default() -> Self {
        Self::new(
            DEFAULT_CATEGORIES
                .iter()
                .map(|(id, name)| (*id, name.to_string())),
        )
    }
}
