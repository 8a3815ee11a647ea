use crate::app::{action::Action, command::Command, state::UserFetch};
use crate::domain::crm::CrmFacade;
use crate::domain::search::SearchQuery;
use anyhow::Result;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;

pub fn handle_command(
    command: Command,
    adapter: Arc<dyn CrmFacade>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::Search(text) => {
            tracing::debug!(search = %text, "dispatching section searches");
            let query = SearchQuery::new(text.clone());

            let (a, q) = (adapter.clone(), query.clone());
            spawn_section(
                tx.clone(),
                "people",
                text.clone(),
                move || async move { a.search_people(&q).await },
                Action::PeopleLoaded,
            );

            let (a, q) = (adapter.clone(), query.clone());
            spawn_section(
                tx.clone(),
                "companies",
                text.clone(),
                move || async move { a.search_companies(&q).await },
                Action::CompaniesLoaded,
            );

            spawn_section(
                tx,
                "notes",
                text,
                move || async move { adapter.search_activities(&query).await },
                Action::ActivitiesLoaded,
            );
        }
        Command::FetchCurrentUser(tokens) => {
            tokio::spawn(async move {
                let outcome = match adapter.fetch_current_user(&tokens).await {
                    Ok(Some(user)) => UserFetch::Resolved(user),
                    Ok(None) => UserFetch::NoSession,
                    Err(e) => UserFetch::Failed(e.to_string()),
                };
                let _ = tx.send(Action::CurrentUserFetched(tokens, outcome)).await;
            });
        }
        Command::Reload(search) => {
            tokio::spawn(async move {
                if let Err(e) = adapter.refresh().await {
                    tracing::warn!(error = %e, "reload failed");
                    let _ = tx
                        .send(Action::ErrorOccurred(format!("Reload failed: {e}")))
                        .await;
                    return;
                }
                if let Some(text) = search {
                    if let Err(e) = handle_command(Command::Search(text), adapter, tx) {
                        tracing::warn!(error = %e, "search after reload failed");
                    }
                }
            });
        }
    }
    Ok(())
}

// A failed section search degrades to an empty section.
fn spawn_section<T, F, Fut>(
    tx: mpsc::Sender<Action>,
    section: &'static str,
    text: String,
    fetch: F,
    loaded: fn(String, Vec<T>) -> Action,
) where
    T: Send + 'static,
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<Vec<T>>> + Send + 'static,
{
    tokio::spawn(async move {
        let rows = match fetch().await {
            Ok(rows) => rows,
            Err(e) => {
                tracing::warn!(section, error = %e, "search failed");
                Vec::new()
            }
        };
        let _ = tx.send(loaded(text, rows)).await;
    });
}
