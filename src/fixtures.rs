#[cfg(test)]
pub mod test {
    use serde::{Deserialize, Serialize};

    /// A typical application config: scalar fields at the top, then sections.
    ///
    /// Field order matters for serialization: top-level scalars must come
    /// before any section.
    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    pub struct AppConfig {
        pub name: String,
        pub port: u16,
        pub debug: bool,
        pub mode: Mode,
        pub database: DatabaseConfig,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub cache: Option<Box<CacheConfig>>,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    pub struct DatabaseConfig {
        pub url: String,
        pub pool_size: usize,
        pub timeout: f64,
        pub replica: Option<String>,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
    pub struct CacheConfig {
        pub ttl: u32,
        pub label: String,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
    #[serde(rename_all = "lowercase")]
    pub enum Mode {
        Fast,
        Slow,
    }

    pub const SAMPLE_INI: &str = "
; Ignored comment
name=demo
 port = 8080
debug=false
mode=fast

[database]
url=postgres://localhost/app?sslmode=disable
pool_size=5
timeout=1.5

# hash comments too
[cache]
ttl=300
label=
";

    pub fn sample() -> AppConfig {
        AppConfig {
            name: "demo".into(),
            port: 8080,
            debug: false,
            mode: Mode::Fast,
            database: DatabaseConfig {
                url: "postgres://localhost/app?sslmode=disable".into(),
                pool_size: 5,
                timeout: 1.5,
                replica: None,
            },
            cache: Some(Box::new(CacheConfig {
                ttl: 300,
                label: String::new(),
            })),
        }
    }
}
