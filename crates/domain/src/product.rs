//! 商品实体定义

use derive_more::{Display, From};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 商品 ID，由存储层分配
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From)]
#[display("{_0}")]
pub struct ProductId(pub i64);

/// 商品实体
///
/// 尚未持久化时 `id` 为空，插入后由存储层回填。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProductId>,
    pub name: String,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl Product {
    /// 创建尚未持久化的商品
    pub fn new(name: impl Into<String>, quantity: i32, price: Decimal) -> Self {
        Self {
            id: None,
            name: name.into(),
            quantity,
            price,
        }
    }

    /// 覆盖可变字段，已分配的 id 保持不变
    pub fn update_details(&mut self, name: impl Into<String>, quantity: i32, price: Decimal) {
        self.name = name.into();
        self.quantity = quantity;
        self.price = price;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> Product {
        Product::new("Pen", 10, Decimal::new(15, 1))
    }

    /// 新建商品没有 id
    #[test]
    fn test_new_product_has_no_id() {
        let product = pen();

        assert!(product.id.is_none());
        assert_eq!(product.name, "Pen");
        assert_eq!(product.quantity, 10);
        assert_eq!(product.price, Decimal::new(15, 1));
    }

    /// 更新覆盖 name/quantity/price，id 不变
    #[test]
    fn test_update_details_preserves_id() {
        let mut product = pen();
        product.id = Some(ProductId(1));

        product.update_details("Pen", 5, Decimal::new(15, 1));

        assert_eq!(product.id, Some(ProductId(1)));
        assert_eq!(product.name, "Pen");
        assert_eq!(product.quantity, 5);
    }

    /// price 序列化为 JSON 数值；未分配 id 时整个字段省略
    #[test]
    fn test_json_shape() {
        let mut product = pen();

        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["price"], serde_json::json!(1.5));

        product.id = Some(ProductId(7));
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["id"], serde_json::json!(7));
    }

    /// 反序列化时缺失的 id 解析为 None
    #[test]
    fn test_deserialize_without_id() {
        let product: Product =
            serde_json::from_str(r#"{"name":"Pen","quantity":10,"price":1.5}"#).unwrap();

        assert!(product.id.is_none());
        assert_eq!(product.price, Decimal::new(15, 1));
    }
}
