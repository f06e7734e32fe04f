use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub run_migrations: bool,
    pub db_min_conn: u32,
    pub db_max_conn: u32,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;

        let run_migrations = parse_run_migrations(&run_migrations_str)?;

        let db_min_conn = parse_pool_size("DB_MIN_CONN", std::env::var("DB_MIN_CONN").ok(), 1)?;
        let db_max_conn = parse_pool_size("DB_MAX_CONN", std::env::var("DB_MAX_CONN").ok(), 5)?;

        if db_min_conn > db_max_conn {
            return Err(anyhow!(
                "DB_MIN_CONN ({}) must not exceed DB_MAX_CONN ({})",
                db_min_conn,
                db_max_conn
            ));
        }

        Ok(Self {
            database_url,
            run_migrations,
            db_min_conn,
            db_max_conn,
        })
    }
}

fn parse_run_migrations(value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(anyhow!(
            "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
            other
        )),
    }
}

fn parse_pool_size(name: &str, value: Option<String>, default: u32) -> Result<u32> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .parse::<u32>()
            .with_context(|| format!("{name} must be a valid u32 integer")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_migrations_accepts_only_literal_booleans() {
        assert!(parse_run_migrations("true").unwrap());
        assert!(!parse_run_migrations("false").unwrap());

        let err = parse_run_migrations("yes").unwrap_err();
        assert!(err.to_string().contains("got 'yes'"));
    }

    #[test]
    fn test_pool_size_defaults_when_unset() {
        assert_eq!(parse_pool_size("DB_MAX_CONN", None, 5).unwrap(), 5);
        assert_eq!(
            parse_pool_size("DB_MAX_CONN", Some("12".into()), 5).unwrap(),
            12
        );
    }

    #[test]
    fn test_pool_size_rejects_garbage() {
        let err = parse_pool_size("DB_MIN_CONN", Some("many".into()), 1).unwrap_err();
        assert_eq!(err.to_string(), "DB_MIN_CONN must be a valid u32 integer");
    }
}
