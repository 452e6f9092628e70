use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    // The sea-orm-migration CLI reads DATABASE_URL; honour the application variable first.
    if let Ok(url) = std::env::var("TASKFLOW_DATABASE_URL") {
        unsafe {
            std::env::set_var("DATABASE_URL", url);
        }
    }
    cli::run_cli(migration::Migrator).await;
}
