//! 商品 Repository 集成测试
//!
//! 需要可用的 PostgreSQL（`#[sqlx::test]` 按测试应用 migrations），
//! 默认跳过，使用 `cargo test -- --ignored` 运行。

use prodapi_adapter_postgres::PostgresProductRepository;
use prodapi_domain::{Product, ProductId};
use prodapi_ports::{CrudRepository, Repository};
use rust_decimal::Decimal;
use sqlx::PgPool;

fn pen() -> Product {
    Product::new("Pen", 10, Decimal::new(15, 1))
}

#[sqlx::test]
#[ignore]
async fn test_save_assigns_id(pool: PgPool) {
    let repo = PostgresProductRepository::new(pool);

    let saved = repo.save(&pen()).await.unwrap();

    assert!(saved.id.is_some());
    assert_eq!(saved.name, "Pen");
    assert_eq!(saved.quantity, 10);
    assert_eq!(saved.price, Decimal::new(15, 1));
}

#[sqlx::test]
#[ignore]
async fn test_find_by_id_roundtrip(pool: PgPool) {
    let repo = PostgresProductRepository::new(pool);
    let saved = repo.save(&pen()).await.unwrap();
    let id = saved.id.unwrap();

    let found = repo.find_by_id(&id).await.unwrap();

    assert_eq!(found, Some(saved));
}

#[sqlx::test]
#[ignore]
async fn test_find_by_id_missing(pool: PgPool) {
    let repo = PostgresProductRepository::new(pool);

    let found = repo.find_by_id(&ProductId(42)).await.unwrap();

    assert!(found.is_none());
}

#[sqlx::test]
#[ignore]
async fn test_save_with_id_overwrites(pool: PgPool) {
    let repo = PostgresProductRepository::new(pool);
    let mut saved = repo.save(&pen()).await.unwrap();
    let id = saved.id.unwrap();

    saved.update_details("Pen", 5, Decimal::new(15, 1));
    let updated = repo.save(&saved).await.unwrap();

    assert_eq!(updated.id, Some(id));
    assert_eq!(updated.quantity, 5);

    let found = repo.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(found.quantity, 5);
}

#[sqlx::test]
#[ignore]
async fn test_exists_by_id(pool: PgPool) {
    let repo = PostgresProductRepository::new(pool);
    let saved = repo.save(&pen()).await.unwrap();
    let id = saved.id.unwrap();

    assert!(repo.exists_by_id(&id).await.unwrap());
    assert!(!repo.exists_by_id(&ProductId(42)).await.unwrap());
}

#[sqlx::test]
#[ignore]
async fn test_delete_by_id(pool: PgPool) {
    let repo = PostgresProductRepository::new(pool);
    let saved = repo.save(&pen()).await.unwrap();
    let id = saved.id.unwrap();

    repo.delete_by_id(&id).await.unwrap();

    assert!(repo.find_by_id(&id).await.unwrap().is_none());

    // 再次删除同一 id 不报错
    repo.delete_by_id(&id).await.unwrap();
}

#[sqlx::test]
#[ignore]
async fn test_find_all_and_delete_all(pool: PgPool) {
    let repo = PostgresProductRepository::new(pool);
    repo.save(&pen()).await.unwrap();
    repo.save(&Product::new("Pencil", 3, Decimal::new(5, 1)))
        .await
        .unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 2);

    repo.delete_all().await.unwrap();

    assert!(repo.find_all().await.unwrap().is_empty());
}
