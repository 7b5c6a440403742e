use anyhow::Context;
use omlox_client::{CancellationToken, Client};
use omlox_config::HubConfig;

/// Per-invocation state shared by command handlers.
pub struct AppContext {
    pub client: Client,
    pub cancel: CancellationToken,
}

impl AppContext {
    pub fn init(hub: &HubConfig) -> anyhow::Result<Self> {
        Ok(Self {
            client: build_client(hub)?,
            cancel: CancellationToken::new(),
        })
    }
}

pub fn build_client(hub: &HubConfig) -> anyhow::Result<Client> {
    let mut builder = Client::builder(&hub.url);
    if hub.has_token() {
        builder = builder.bearer_token(&hub.token);
    }
    if let Some(timeout) = hub.timeout() {
        builder = builder.timeout(timeout);
    }
    for (name, value) in &hub.headers {
        builder = builder.header(name, value);
    }
    builder
        .build()
        .with_context(|| format!("failed to build client for hub '{}'", hub.url))
}

/// Cancel `token` on the first Ctrl-C.
pub fn cancel_on_ctrl_c(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupted; cancelling in-flight request");
            token.cancel();
        }
    });
}
