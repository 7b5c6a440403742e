use std::io::Write;

use anyhow::Context;
use uuid::Uuid;

use crate::cli::subcommands::DeleteCommands;
use crate::context::AppContext;

/// Handle `omlox delete`.
pub async fn handle(
    action: &DeleteCommands,
    ctx: &AppContext,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match action {
        DeleteCommands::Trackables { all: true, .. } => {
            ctx.client
                .trackables()
                .delete_all(&ctx.cancel)
                .await
                .context("failed to delete all trackables")?;
            writeln!(out, "deleted: all")?;
            Ok(())
        }
        DeleteCommands::Trackables { ids, .. } => delete_trackables(ids, ctx, out).await,
    }
}

async fn delete_trackables(
    ids: &[Uuid],
    ctx: &AppContext,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let api = ctx.client.trackables();
    for id in ids {
        api.delete(&ctx.cancel, *id)
            .await
            .with_context(|| format!("failed to delete trackable {id}"))?;
        writeln!(out, "deleted: {id}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, ResponseTemplate};

    use super::*;
    use crate::commands::test_support::{lines, mock_hub};

    #[tokio::test]
    async fn deletes_each_id() {
        let (server, ctx) = mock_hub().await;
        let ids = [Uuid::from_u128(1), Uuid::from_u128(2)];
        for id in ids {
            Mock::given(method("DELETE"))
                .and(path(format!("/trackables/{id}")))
                .respond_with(ResponseTemplate::new(200))
                .expect(1)
                .mount(&server)
                .await;
        }

        let mut out = Vec::new();
        let action = DeleteCommands::Trackables {
            ids: ids.to_vec(),
            all: false,
        };
        handle(&action, &ctx, &mut out).await.unwrap();

        assert_eq!(
            lines(&out),
            vec![format!("deleted: {}", ids[0]), format!("deleted: {}", ids[1])]
        );
    }

    #[tokio::test]
    async fn all_deletes_the_collection() {
        let (server, ctx) = mock_hub().await;
        Mock::given(method("DELETE"))
            .and(path("/trackables"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let mut out = Vec::new();
        let action = DeleteCommands::Trackables {
            ids: Vec::new(),
            all: true,
        };
        handle(&action, &ctx, &mut out).await.unwrap();
        assert_eq!(lines(&out), vec!["deleted: all".to_string()]);
    }

    #[tokio::test]
    async fn missing_id_is_reported() {
        let (server, ctx) = mock_hub().await;
        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let id = Uuid::from_u128(9);
        let mut out = Vec::new();
        let err = delete_trackables(&[id], &ctx, &mut out).await.unwrap_err();
        assert!(format!("{err:#}").contains(&format!("failed to delete trackable {id}")));
    }
}
