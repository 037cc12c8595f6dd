use std::time::Duration;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared::{ChallengeRow, ResourceRow, SavedChallengeId, SavedChallengeRow};
use url::Url;

use crate::application::ports::{ChallengeCatalog, RemoteError, SavedChallengeRepository};
use crate::domain::{ChallengeId, ChallengeSummary, Resource, UserId};
use crate::infrastructure::config::RemoteSettings;

const SAVED_CHALLENGES_TABLE: &str = "saved_challenges";
const CHALLENGES_TABLE: &str = "challenges";
const RESOURCES_TABLE: &str = "resources";

/// Client for the hosted database's PostgREST endpoint (`/rest/v1/<table>`)
pub struct PostgrestClient {
    http: reqwest::Client,
    rest_url: Url,
    api_key: String,
    access_token: Option<String>,
    user_id: UserId,
}

impl PostgrestClient {
    pub fn new(settings: &RemoteSettings) -> Result<Self, RemoteError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;
        let rest_url = settings
            .base_url
            .join("rest/v1/")
            .map_err(|e| RemoteError::Transport(format!("Invalid REST URL: {}", e)))?;

        Ok(Self {
            http,
            rest_url,
            api_key: settings.api_key.clone(),
            access_token: settings.access_token.clone(),
            user_id: settings.user_id.clone(),
        })
    }

    fn table_url(&self, table: &str) -> Result<Url, RemoteError> {
        self.rest_url
            .join(table)
            .map_err(|e| RemoteError::Transport(format!("Invalid table URL: {}", e)))
    }

    /// Attach the project key and the user's bearer token. Without a user
    /// token the project key doubles as bearer, as the hosted service expects.
    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.api_key);
        request.header("apikey", self.api_key.as_str()).bearer_auth(bearer)
    }

    fn user_filter(&self) -> (&'static str, String) {
        ("user_id", eq(self.user_id.as_str()))
    }

    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> Result<Vec<T>, RemoteError> {
        let request = self.http.get(self.table_url(table)?).query(query);
        let response = ensure_success(self.authorized(request).send().await?).await?;
        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))
    }
}

fn eq(value: &str) -> String {
    format!("eq.{}", value)
}

async fn ensure_success(response: Response) -> Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(RemoteError::Status {
        status: status.as_u16(),
        body,
    })
}

impl From<reqwest::Error> for RemoteError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            RemoteError::Decode(e.to_string())
        } else {
            RemoteError::Transport(e.to_string())
        }
    }
}

fn to_challenge_ids(rows: Vec<SavedChallengeId>) -> Result<Vec<ChallengeId>, RemoteError> {
    rows.into_iter()
        .map(|row| ChallengeId::new(row.challenge_id).map_err(|e| RemoteError::Decode(e.to_string())))
        .collect()
}

#[async_trait]
impl SavedChallengeRepository for PostgrestClient {
    async fn toggle_challenge_save(
        &self,
        challenge_id: &ChallengeId,
        currently_saved: bool,
    ) -> Result<Option<Vec<ChallengeId>>, RemoteError> {
        let url = self.table_url(SAVED_CHALLENGES_TABLE)?;
        let request = if currently_saved {
            self.http.delete(url).query(&[
                self.user_filter(),
                ("challenge_id", eq(challenge_id.as_str())),
            ])
        } else {
            self.http
                .post(url)
                .header("Prefer", "resolution=ignore-duplicates,return=minimal")
                .json(&SavedChallengeRow {
                    user_id: self.user_id.to_string(),
                    challenge_id: challenge_id.to_string(),
                })
        };

        let response = self.authorized(request).send().await?;
        let status = response.status();
        // duplicate key: the row already exists, so the save is in place
        let already_saved = !currently_saved && status == StatusCode::CONFLICT;
        if !status.is_success() && !already_saved {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                "[challenge {}] backend refused save toggle: {} {}",
                challenge_id,
                status,
                body
            );
            return Ok(None);
        }
        if already_saved {
            tracing::debug!("[challenge {}] already saved remotely", challenge_id);
        }

        self.list_saved_challenge_ids().await.map(Some)
    }

    async fn list_saved_challenge_ids(&self) -> Result<Vec<ChallengeId>, RemoteError> {
        let rows: Vec<SavedChallengeId> = self
            .fetch_rows(
                SAVED_CHALLENGES_TABLE,
                &[("select", "challenge_id".to_string()), self.user_filter()],
            )
            .await?;
        to_challenge_ids(rows)
    }
}

#[async_trait]
impl ChallengeCatalog for PostgrestClient {
    async fn list_challenges(&self) -> Result<Vec<ChallengeSummary>, RemoteError> {
        let rows: Vec<ChallengeRow> = self
            .fetch_rows(
                CHALLENGES_TABLE,
                &[
                    ("select", "*".to_string()),
                    ("order", "created_at.desc".to_string()),
                ],
            )
            .await?;
        rows.into_iter()
            .map(|row| ChallengeSummary::from_row(row).map_err(|e| RemoteError::Decode(e.to_string())))
            .collect()
    }

    async fn list_resources(&self) -> Result<Vec<Resource>, RemoteError> {
        let rows: Vec<ResourceRow> = self
            .fetch_rows(RESOURCES_TABLE, &[("select", "*".to_string())])
            .await?;
        Ok(rows.into_iter().map(Resource::from).collect())
    }
}
