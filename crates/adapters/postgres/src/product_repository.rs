//! PostgreSQL 商品 Repository 实现

use async_trait::async_trait;
use prodapi_domain::{Product, ProductId};
use prodapi_errors::{AppError, AppResult};
use prodapi_ports::{CrudRepository, Repository};
use rust_decimal::Decimal;
use sqlx::PgPool;

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Product, ProductId> for PostgresProductRepository {
    async fn find_by_id(&self, id: &ProductId) -> AppResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, quantity, price FROM products WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to find product: {}", e)))?;

        Ok(row.map(|r| r.into_product()))
    }

    async fn save(&self, product: &Product) -> AppResult<Product> {
        let row = match product.id {
            None => sqlx::query_as::<_, ProductRow>(
                r#"
                INSERT INTO products (name, quantity, price)
                VALUES ($1, $2, $3)
                RETURNING id, name, quantity, price
                "#,
            )
            .bind(&product.name)
            .bind(product.quantity)
            .bind(product.price)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to insert product: {}", e)))?,
            Some(id) => sqlx::query_as::<_, ProductRow>(
                r#"
                UPDATE products
                SET name = $2, quantity = $3, price = $4
                WHERE id = $1
                RETURNING id, name, quantity, price
                "#,
            )
            .bind(id.0)
            .bind(&product.name)
            .bind(product.quantity)
            .bind(product.price)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to update product: {}", e)))?
            .ok_or_else(|| AppError::not_found(format!("Product {} does not exist", id)))?,
        };

        Ok(row.into_product())
    }

    async fn exists_by_id(&self, id: &ProductId) -> AppResult<bool> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
            .bind(id.0)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to check product: {}", e)))?;

        Ok(result.0)
    }

    async fn delete_by_id(&self, id: &ProductId) -> AppResult<()> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete product: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl CrudRepository<Product, ProductId> for PostgresProductRepository {
    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let rows =
            sqlx::query_as::<_, ProductRow>("SELECT id, name, quantity, price FROM products")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Failed to list products: {}", e)))?;

        Ok(rows.into_iter().map(|r| r.into_product()).collect())
    }

    async fn delete_all(&self) -> AppResult<()> {
        sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete products: {}", e)))?;

        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    quantity: i32,
    price: Decimal,
}

impl ProductRow {
    fn into_product(self) -> Product {
        Product {
            id: Some(ProductId(self.id)),
            name: self.name,
            quantity: self.quantity,
            price: self.price,
        }
    }
}
