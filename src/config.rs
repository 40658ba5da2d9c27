use serde::Deserialize;

/// Connection settings consumed by an adapter's constructor.
///
/// Engines ignore the keys they have no use for; the SQLite adapter reads
/// only `database`, treating it as the filesystem path (`:memory:` included).
/// All keys except `port` default to empty so file-based configuration can
/// omit what an engine does not need.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    pub host: String,
    pub port: Option<u16>,
    pub user: String,
    pub pass: String,
    pub database: String,
}

impl DbConfig {
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        pass: impl Into<String>,
        database: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: None,
            user: user.into(),
            pass: pass.into(),
            database: database.into(),
        }
    }

    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Settings for a path-addressed engine such as `SQLite`.
    #[must_use]
    pub fn sqlite_path(path: impl Into<String>) -> Self {
        Self {
            database: path.into(),
            ..Self::default()
        }
    }
}
