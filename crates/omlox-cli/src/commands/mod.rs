pub mod create;
pub mod delete;
pub mod dispatch;
pub mod get;
pub mod schema;
pub mod shared;
pub mod update;

#[cfg(test)]
pub mod test_support {
    use omlox_client::{CancellationToken, Client};
    use wiremock::MockServer;

    use crate::cli::{GlobalFlags, OutputFormat};
    use crate::context::AppContext;

    /// Mock hub plus a context pointed at it.
    pub async fn mock_hub() -> (MockServer, AppContext) {
        let server = MockServer::start().await;
        let client = Client::new(&server.uri()).expect("mock hub URL is valid");
        let ctx = AppContext {
            client,
            cancel: CancellationToken::new(),
        };
        (server, ctx)
    }

    pub fn raw_flags() -> GlobalFlags {
        GlobalFlags {
            hub_url: None,
            token: None,
            format: OutputFormat::Raw,
            quiet: false,
            verbose: false,
        }
    }

    pub fn lines(out: &[u8]) -> Vec<String> {
        String::from_utf8_lossy(out)
            .lines()
            .map(str::to_string)
            .collect()
    }
}
