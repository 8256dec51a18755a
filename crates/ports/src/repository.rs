//! Repository trait 定义

use async_trait::async_trait;
use prodapi_errors::AppResult;

/// 基础 Repository trait
#[async_trait]
pub trait Repository<T, ID>: Send + Sync {
    /// 根据 ID 查找
    async fn find_by_id(&self, id: &ID) -> AppResult<Option<T>>;

    /// 保存实体：id 未分配时插入并由存储层分配，已分配时整行覆盖。
    /// 返回持久化后的实体（id 已填充）。
    async fn save(&self, entity: &T) -> AppResult<T>;

    /// 检查是否存在
    async fn exists_by_id(&self, id: &ID) -> AppResult<bool>;

    /// 根据 ID 删除，目标不存在时不报错
    async fn delete_by_id(&self, id: &ID) -> AppResult<()>;
}

/// 支持整表操作的 Repository
#[async_trait]
pub trait CrudRepository<T, ID>: Repository<T, ID> {
    /// 查询所有行，顺序不保证
    async fn find_all(&self) -> AppResult<Vec<T>>;

    /// 删除所有行
    async fn delete_all(&self) -> AppResult<()>;
}
