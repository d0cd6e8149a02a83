use env_logger::Env;
use sea_orm_migration::prelude::*;

/// 迁移 CLI，连接串取自 `DATABASE_URL` 或 `-u` 参数，例如 `migration up`
#[async_std::main]
async fn main() {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    cli::run_cli(migration::Migrator).await;
}
