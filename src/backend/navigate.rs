use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::config::Config;

/// Moves the browser to another path.
pub trait Navigate {
    fn navigate(&self, path: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Router push, app state survives.
    ClientSide,
    /// Full page load, in-memory state is gone.
    HardReload,
}

impl NavigationMode {
    pub fn from_config(config: &Config) -> Self {
        if config.dev {
            NavigationMode::ClientSide
        } else {
            NavigationMode::HardReload
        }
    }

    /// Builds the navigate capability. Must be called inside the router.
    pub fn navigator(self) -> Box<dyn Navigate> {
        match self {
            NavigationMode::ClientSide => Box::new(RouterNavigate(navigator())),
            NavigationMode::HardReload => Box::new(HardReload),
        }
    }
}

pub struct RouterNavigate(pub Navigator);

impl Navigate for RouterNavigate {
    fn navigate(&self, path: &str) {
        tracing::debug!(%path, "router push");
        let _ = self.0.push(path.to_string());
    }
}

pub struct HardReload;

impl Navigate for HardReload {
    fn navigate(&self, path: &str) {
        tracing::debug!(%path, "reloading page");
        match serde_json::to_string(path) {
            Ok(target) => {
                let _ = document::eval(&format!("window.location.assign({target});"));
            }
            Err(e) => tracing::warn!("cannot encode redirect target: {}", e),
        }
    }
}
