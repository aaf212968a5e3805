//! 商品APIのワイヤーフォーマット

use crate::catalog::{CategoryDirectory, CompanyId, Product, ProductId};
use serde::Deserialize;

/// `GET /api/v1/product/products` のレスポンス
#[derive(Debug, Deserialize)]
pub struct ProductListResponse {
    #[serde(default)]
    pub products: Vec<ProductDto>,
    #[serde(default)]
    pub total_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct ProductDto {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub category_id: u64,
    #[serde(default)]
    pub company_id: Option<u64>,
}

impl ProductDto {
    /// カテゴリIDを名前に解決して Product に変換
    pub fn into_product(self, directory: &CategoryDirectory) -> Product {
        let mut product = Product::new(
            self.id,
            self.name,
            directory.resolve_name(self.category_id),
            self.price,
        )
        .with_description(self.description);
        product.company_id = self.company_id.map(CompanyId);
        product
    }
}

/// エラーレスポンス `{code, type, message}`
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub message: String,
}

impl ApiErrorBody {
    /// 本文から表示用メッセージを取り出す（解析できなければ本文そのもの）
    pub fn message_from(body: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(err) => match err.kind {
                Some(kind) if !kind.is_empty() => format!("{}: {}", kind, err.message),
                _ => err.message,
            },
            Err(_) => body.trim().to_string(),
        }
    }
}
