//! 共享应用状态

use std::sync::Arc;

use prodapi_domain::{Product, ProductId};
use prodapi_ports::CrudRepository;

/// 商品 Repository trait 对象
pub type ProductRepo = Arc<dyn CrudRepository<Product, ProductId>>;

/// 应用状态，启动时显式注入，处理器通过 `State` 获取
#[derive(Clone)]
pub struct AppState {
    pub products: ProductRepo,
}

impl AppState {
    pub fn new(products: ProductRepo) -> Self {
        Self { products }
    }
}
