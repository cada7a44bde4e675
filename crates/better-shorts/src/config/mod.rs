#[allow(clippy::module_inception)]
mod config;
mod execution_config;
mod server_config;
mod storage_config;

pub(crate) use {
    config::Config, execution_config::ExecutionConfig, server_config::ServerConfig,
    storage_config::StorageConfig,
};

pub(crate) const DEFAULT_PORT: u16 = 7878;
pub(crate) const DATA_DIR_NAME: &str = "BetterShorts";

pub(crate) fn default_port() -> u16 {
    DEFAULT_PORT
}
