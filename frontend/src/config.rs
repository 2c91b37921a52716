use anyhow::{anyhow, Context};
use common::SessionConfig;
use tracing::{info, warn};

const CONFIG_ELEMENT_ID: &str = "session-config";

// Reads an optional `<script type="application/json" id="session-config">`
fn read_page_config() -> anyhow::Result<Option<SessionConfig>> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| anyhow!("no document"))?;
    let element = match document.get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(element) => element,
        None => return Ok(None),
    };
    let text = element
        .text_content()
        .ok_or_else(|| anyhow!("#{} has no text", CONFIG_ELEMENT_ID))?;
    let config: SessionConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing #{}", CONFIG_ELEMENT_ID))?;
    config.validate()?;
    Ok(Some(config))
}

pub fn load() -> SessionConfig {
    match read_page_config() {
        Ok(Some(config)) => {
            info!("using session config from page: {:?}", config);
            config
        }
        Ok(None) => SessionConfig::default(),
        Err(err) => {
            warn!("ignoring session config: {:#}", err);
            SessionConfig::default()
        }
    }
}
