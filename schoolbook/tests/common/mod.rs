#![allow(dead_code)]

use schoolbook::{Application, MIGRATOR};
use schoolbook_core::config::AppConfig;
use schoolbook_data_sqlx::session;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Sqlite, SqlitePool};

pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    MIGRATOR.run(&pool).await.unwrap();
    pool
}

/// A wired application over a fresh schema holding one student (777/zyx)
/// and one teacher (tang, class 4).
pub async fn seeded_app() -> Application {
    let pool = memory_pool().await;
    sqlx::query("INSERT INTO student (sno, name, sex) VALUES ('777', 'zyx', 'm')")
        .execute(&pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO teacher (name, age, toClass) VALUES ('tang', 40, '4')")
        .execute(&pool)
        .await
        .unwrap();
    Application::from_pool(pool, &AppConfig::empty()).unwrap()
}

/// Check out the pool's connection. Test pools hold one, so drop it before
/// calling a service.
pub async fn conn(app: &Application) -> PoolConnection<Sqlite> {
    session::acquire(app.pool()).await.unwrap()
}
