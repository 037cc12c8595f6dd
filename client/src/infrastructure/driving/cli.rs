use clap::{Parser, Subcommand};
use futures_util::future::join_all;

use crate::application::commands::{
    end_session, load_saved_challenges, search_resources, toggle_challenge_save,
};
use crate::application::SaveStateStore;
use crate::domain::ChallengeId;
use crate::infrastructure::AppState;

#[derive(Debug, Parser)]
#[command(name = "challenges")]
#[command(author, version, about = "Browse, save and search learning challenges", long_about = None)]
pub struct Cli {
    /// Use the built-in in-memory catalog instead of the hosted backend
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List challenges and whether each one is saved
    Saved,

    /// Flip the saved state of one or more challenges
    Toggle {
        /// Challenge ids
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Search learning resources by title, description, category or author
    Resources {
        /// Search words (empty lists everything)
        query: Vec<String>,
    },
}

pub async fn run(command: Command, state: &AppState) -> anyhow::Result<()> {
    let result = dispatch(command, state).await;
    end_session::execute(&state.store).await;
    result
}

async fn dispatch(command: Command, state: &AppState) -> anyhow::Result<()> {
    load_saved_challenges::execute(&*state.saved_repo, &*state.catalog, &state.store).await?;

    match command {
        Command::Saved => print_listing(&state.store).await,
        Command::Toggle { ids } => {
            let ids = ids
                .into_iter()
                .map(ChallengeId::new)
                .collect::<Result<Vec<_>, _>>()?;
            join_all(
                ids.iter()
                    .map(|id| toggle_challenge_save::execute(&*state.saved_repo, &state.store, id)),
            )
            .await;
            print_listing(&state.store).await;
        }
        Command::Resources { query } => {
            let query = query.join(" ");
            let found = search_resources::execute(&*state.catalog, &query).await?;
            if found.is_empty() {
                println!("No resources match {:?}", query);
            }
            for resource in found {
                let author = resource.author_text();
                println!(
                    "{}  {}{}",
                    resource.id,
                    resource.title,
                    if author.is_empty() { String::new() } else { format!(" by {}", author) }
                );
            }
        }
    }

    Ok(())
}

async fn print_listing(store: &SaveStateStore) {
    for summary in store.summaries().await {
        let marker = if summary.is_saved() { "[x]" } else { "[ ]" };
        if summary.category.is_empty() {
            println!("{} {}  {}", marker, summary.id, summary.title);
        } else {
            println!("{} {}  {} ({})", marker, summary.id, summary.title, summary.category);
        }
    }
}
