//! 商品データセット
//!
//! セッション中に一度だけ読み込まれ、以後は読み取り専用で共有される。

mod category;
mod mock;
mod product;

pub use category::CategoryDirectory;
pub use product::{CompanyId, Product, ProductId};

use crate::error::{CatalogError, Result};
use std::collections::HashSet;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

/// 読み込みごとに採番するデータセットのバージョン
static NEXT_VERSION: AtomicU64 = AtomicU64::new(1);

/// 商品データセット
#[derive(Debug)]
pub struct Dataset {
    products: Vec<Product>,
    version: u64,
}

impl Dataset {
    /// 商品一覧からデータセットを作成
    ///
    /// - ID の重複は Err
    /// - 負数・非有限の価格は Err
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::InvalidDataset(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(CatalogError::InvalidDataset(format!(
                    "product {} has invalid price {}",
                    product.id, product.price
                )));
            }
        }

        Ok(Self {
            products,
            version: NEXT_VERSION.fetch_add(1, Ordering::Relaxed),
        })
    }

    /// 組み込みのモックデータ
    pub fn mock() -> Self {
        Self {
            products: mock::products(),
            version: NEXT_VERSION.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// 空のデータセット
    pub fn empty() -> Self {
        Self {
            products: Vec::new(),
            version: NEXT_VERSION.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// JSON配列からデータセットを作成
    pub fn from_json(json: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// JSONファイルからデータセットを読み込む
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let dataset = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            count = dataset.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// 結果キャッシュのキーに使うバージョン
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// IDで商品を取得
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// IDで商品を取得（見つからなければ Err）
    pub fn find(&self, id: ProductId) -> Result<&Product> {
        self.get(id).ok_or(CatalogError::ProductNotFound(id))
    }

    /// カテゴリ一覧と商品数（初出順）
    pub fn categories(&self) -> Vec<(&str, usize)> {
        let mut result: Vec<(&str, usize)> = Vec::new();
        for product in &self.products {
            match result.iter_mut().find(|(c, _)| *c == product.category) {
                Some((_, count)) => *count += 1,
                None => result.push((product.category.as_str(), 1)),
            }
        }
        result
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
