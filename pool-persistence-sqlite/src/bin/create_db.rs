use pool_persistence_sqlite::{create_db_pool, create_schema};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("POOL_DATABASE_URL").expect("POOL_DATABASE_URL env var not set");

    let pool = create_db_pool(&db_url)
        .await
        .expect("Failed to create pool");
    create_schema(&pool).await.expect("Failed to create schema");

    println!("Created schema in [{}]", db_url);
}
