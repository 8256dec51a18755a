//! prodapi-domain - 领域模型
//!
//! 定义 Product 实体及其标识类型

mod product;

pub use product::*;
