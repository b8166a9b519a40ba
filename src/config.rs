use std::env;
use anyhow::{Context, Result};
use deadpool_postgres::{Config, Pool, PoolConfig, Runtime};
use tokio_postgres::NoTls;

pub fn get_pg_pool() -> Result<Pool> {
    let mut cfg = Config::new();
    cfg.host = Some(env::var("PG_HOST").context("PG_HOST not set")?);
    cfg.port = env::var("PG_PORT").ok().and_then(|p| p.parse().ok());
    cfg.user = Some(env::var("PG_USER").context("PG_USER not set")?);
    cfg.password = env::var("PG_PASS").ok();
    cfg.dbname = Some(env::var("PG_DB").context("PG_DB not set")?);

    if cfg.pool.is_none() {
        cfg.pool = Some(PoolConfig::default());
    }
    if let Some(ref mut pcfg) = cfg.pool {
        pcfg.max_size = 16;
    }

    cfg.create_pool(Some(Runtime::Tokio1), NoTls)
        .context("failed to create postgres pool")
}

/// Posts per listing page.
pub fn page_size() -> i64 {
    env::var("PAGE_SIZE")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|v| *v > 0)
        .unwrap_or(10)
}

/// Expiry of the cached index page, in seconds.
pub fn cache_ttl_secs() -> u64 {
    env::var("CACHE_TTL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(20)
}

/// Where anonymous callers of protected endpoints get bounced to. The login
/// flow itself lives in the external identity service.
pub fn login_url() -> String {
    env::var("LOGIN_URL").unwrap_or_else(|_| "/auth/login/".to_string())
}
