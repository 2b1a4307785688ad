use crate::render::RenderMode;
use std::env;
use std::net::SocketAddr;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Process configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub render: RenderMode,
    /// Fault injection for the simulated fetch. Shipped default is a
    /// fetch that always succeeds.
    pub fail_fetch: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.parse().unwrap(),
            render: RenderMode::Plain,
            fail_fetch: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = env::var("STAYLIST_ADDR") {
            match addr.parse() {
                Ok(parsed) => config.addr = parsed,
                Err(_) => eprintln!("Ignoring invalid STAYLIST_ADDR {addr:?}"),
            }
        }

        if let Ok(mode) = env::var("STAYLIST_RENDER") {
            match mode.parse() {
                Ok(parsed) => config.render = parsed,
                Err(_) => eprintln!("Ignoring invalid STAYLIST_RENDER {mode:?}"),
            }
        }

        config.fail_fetch = matches!(
            env::var("STAYLIST_FAIL_FETCH").as_deref(),
            Ok("1") | Ok("true")
        );

        config
    }
}
