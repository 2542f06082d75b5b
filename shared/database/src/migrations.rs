use anyhow::Result;
use sqlx::PgPool;

pub async fn run_postgres_migrations(pool: &PgPool) -> Result<()> {
    tracing::info!("Running PostgreSQL migrations");

    // Create products table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id BIGSERIAL PRIMARY KEY,
            code VARCHAR NOT NULL UNIQUE,
            name VARCHAR NOT NULL,
            unit VARCHAR NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create bom_header table. No uniqueness on (product_id, is_active):
    // several active headers per product are legal data and resolution
    // breaks the tie.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bom_header (
            id BIGSERIAL PRIMARY KEY,
            product_id BIGINT NOT NULL,
            bom_code VARCHAR NOT NULL,
            bom_name VARCHAR NOT NULL,
            version INTEGER NOT NULL,
            is_active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create bom_materials table. material_id carries no foreign key:
    // a dangling material reference is expected data and must stay
    // readable.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bom_materials (
            id BIGSERIAL PRIMARY KEY,
            bom_id BIGINT NOT NULL REFERENCES bom_header(id),
            material_id BIGINT NOT NULL,
            quantity NUMERIC(19, 4) NOT NULL DEFAULT 0,
            unit_cost NUMERIC(19, 4) NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create bom_operations table. work_center_id is nullable and
    // unconstrained for the same reason as material_id above.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bom_operations (
            id BIGSERIAL PRIMARY KEY,
            bom_id BIGINT NOT NULL REFERENCES bom_header(id),
            work_center_id BIGINT,
            sequence INTEGER NOT NULL DEFAULT 0,
            setup_minutes NUMERIC(10, 2) NOT NULL DEFAULT 0,
            run_minutes NUMERIC(10, 2) NOT NULL DEFAULT 0,
            cost_per_hour NUMERIC(19, 4) NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create work_centers table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS work_centers (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes for better performance
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_bom_header_product_id ON bom_header(product_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_bom_materials_bom_id ON bom_materials(bom_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_bom_operations_bom_id ON bom_operations(bom_id)")
        .execute(pool)
        .await?;

    tracing::info!("PostgreSQL migrations completed successfully");
    Ok(())
}
