use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use infra::db::PoolSettings;

/// Limits and switches for the GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct GraphQLConfig {
    /// Allow `__schema` / `__type` introspection queries.
    pub introspection: bool,
    /// Serve the GraphiQL IDE on `GET /graphql`.
    pub graphiql: bool,
    pub max_depth: usize,
    pub max_complexity: usize,
}

impl Default for GraphQLConfig {
    fn default() -> Self {
        Self {
            introspection: false,
            graphiql: false,
            max_depth: 10,
            max_complexity: 500,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub pool: PoolSettings,
    pub port: u16,
    pub skip_migrations: bool,
    pub allowed_origins: Vec<String>,
    pub request_timeout: Duration,
    pub graphql: GraphQLConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").ok_or_else(|| anyhow!("DATABASE_URL must be set"))?;

        let pool = PoolSettings {
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 30)?,
            ..PoolSettings::default()
        };

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();

        let defaults = GraphQLConfig::default();
        let graphql = GraphQLConfig {
            introspection: parse_or(&lookup, "GQL_INTROSPECTION", defaults.introspection)?,
            graphiql: parse_or(&lookup, "GQL_GRAPHIQL", defaults.graphiql)?,
            max_depth: parse_or(&lookup, "GQL_MAX_DEPTH", defaults.max_depth)?,
            max_complexity: parse_or(&lookup, "GQL_MAX_COMPLEXITY", defaults.max_complexity)?,
        };

        Ok(Self {
            database_url,
            pool,
            port: parse_or(&lookup, "PORT", 8080)?,
            skip_migrations: parse_or(&lookup, "SKIP_MIGRATIONS", false)?,
            allowed_origins,
            request_timeout: Duration::from_secs(parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 30)?),
            graphql,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .to_lowercase()
            .parse()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[(
            "DATABASE_URL",
            "postgres://localhost/olympiads",
        )]))
        .unwrap();

        assert_eq!(config.database_url, "postgres://localhost/olympiads");
        assert_eq!(config.pool.max_connections, 30);
        assert_eq!(config.port, 8080);
        assert!(!config.skip_migrations);
        assert_eq!(config.allowed_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(!config.graphql.introspection);
        assert!(!config.graphql.graphiql);
        assert_eq!(config.graphql.max_depth, 10);
        assert_eq!(config.graphql.max_complexity, 500);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn overrides_are_parsed() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/olympiads"),
            ("DATABASE_MAX_CONNECTIONS", "7"),
            ("PORT", "9000"),
            ("SKIP_MIGRATIONS", "TRUE"),
            ("ALLOWED_ORIGINS", "https://a.example, https://b.example,"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("GQL_INTROSPECTION", "true"),
            ("GQL_GRAPHIQL", "true"),
            ("GQL_MAX_DEPTH", "4"),
            ("GQL_MAX_COMPLEXITY", "50"),
        ]))
        .unwrap();

        assert_eq!(config.pool.max_connections, 7);
        assert_eq!(config.port, 9000);
        assert!(config.skip_migrations);
        assert_eq!(
            config.allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert!(config.graphql.introspection);
        assert!(config.graphql.graphiql);
        assert_eq!(config.graphql.max_depth, 4);
        assert_eq!(config.graphql.max_complexity, 50);
    }

    #[test]
    fn malformed_number_names_the_variable() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/olympiads"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();

        assert!(err.to_string().contains("PORT"), "got: {err}");
    }
}
