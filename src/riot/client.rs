use std::time::Duration;

use async_trait::async_trait;
use futures::{stream, StreamExt, TryStreamExt};
use reqwest::{header::RETRY_AFTER, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use super::{
    types::{Account, MatchDto, MatchWindow, RiotId, Summoner, SummonerLocation},
    MatchDataSource, Region, RiotApiError,
};
use crate::config::AppConfig;
use crate::stats::MasteryRecord;

/// Largest page the match-id endpoint returns
pub const MATCH_PAGE_SIZE: usize = 100;

const DEFAULT_RETRY_AFTER_SECS: u64 = 1;

/// Riot Games web API client.
///
/// Every request is retried on HTTP 429, sleeping for the `Retry-After`
/// header (1s when absent), up to `max_retries` attempts in total.
pub struct RiotClient {
    client: reqwest::Client,
    api_key: String,
    base_url: Option<String>,
    max_retries: u32,
    fetch_concurrency: usize,
}

impl RiotClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        let defaults = AppConfig::default();
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: None,
            max_retries: defaults.riot_max_retries,
            fetch_concurrency: defaults.riot_fetch_concurrency,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.riot_api_key.clone())
            .with_max_retries(config.riot_max_retries)
            .with_fetch_concurrency(config.riot_fetch_concurrency)
    }

    /// Sends every request to `base_url` instead of the per-cluster hosts
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_fetch_concurrency(mut self, fetch_concurrency: usize) -> Self {
        self.fetch_concurrency = fetch_concurrency;
        self
    }

    fn endpoint(&self, host: &str, segments: &[&str]) -> Result<Url, RiotApiError> {
        let base = match &self.base_url {
            Some(base) => base.clone(),
            None => format!("https://{host}.api.riotgames.com"),
        };

        let mut url = Url::parse(&base).map_err(|e| RiotApiError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| RiotApiError::InvalidUrl(base.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    #[instrument(skip(self, url, query), fields(path = %url.path()))]
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, RiotApiError> {
        let max_attempts = self.max_retries.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            let response = self
                .client
                .get(url.clone())
                .header("X-Riot-Token", &self.api_key)
                .query(query)
                .send()
                .await?;

            let status = response.status();
            if status == StatusCode::TOO_MANY_REQUESTS {
                let retry_after_secs = response
                    .headers()
                    .get(RETRY_AFTER)
                    .and_then(|value| value.to_str().ok())
                    .and_then(|value| value.trim().parse::<u64>().ok())
                    .unwrap_or(DEFAULT_RETRY_AFTER_SECS);

                if attempt >= max_attempts {
                    warn!(attempt, retry_after_secs, "Rate limit retries exhausted");
                    return Err(RiotApiError::RateLimited { retry_after_secs });
                }

                warn!(attempt, retry_after_secs, "Rate limited, waiting before retry");
                tokio::time::sleep(Duration::from_secs(retry_after_secs)).await;
                continue;
            }

            if status == StatusCode::NOT_FOUND {
                return Err(RiotApiError::NotFound(url.path().to_string()));
            }

            if !status.is_success() {
                return Err(RiotApiError::Status {
                    status: status.as_u16(),
                    url: url.path().to_string(),
                });
            }

            return Ok(response.json::<T>().await?);
        }
    }

    /// Match ids newest first, paged until a short page or the window cap
    async fn match_ids(
        &self,
        puuid: &str,
        region: Region,
        window: &MatchWindow,
    ) -> Result<Vec<String>, RiotApiError> {
        let url = self.endpoint(
            region.routing_host(),
            &["lol", "match", "v5", "matches", "by-puuid", puuid, "ids"],
        )?;

        let mut ids: Vec<String> = Vec::new();
        while ids.len() < window.max_matches {
            let count = (window.max_matches - ids.len()).min(MATCH_PAGE_SIZE);
            let mut query = vec![
                ("startTime", window.start_time.to_string()),
                ("start", ids.len().to_string()),
                ("count", count.to_string()),
            ];
            if let Some(queue_type) = &window.queue_type {
                query.push(("type", queue_type.clone()));
            }

            let page: Vec<String> = self.get_json(url.clone(), &query).await?;
            let page_len = page.len();
            ids.extend(page);

            if page_len < count {
                break;
            }
        }

        ids.truncate(window.max_matches);
        Ok(ids)
    }

    async fn match_detail(&self, region: Region, match_id: &str) -> Result<MatchDto, RiotApiError> {
        let url = self.endpoint(
            region.routing_host(),
            &["lol", "match", "v5", "matches", match_id],
        )?;
        self.get_json(url, &[]).await
    }
}

#[async_trait]
impl MatchDataSource for RiotClient {
    #[instrument(skip(self))]
    async fn resolve_account(&self, riot_id: &RiotId) -> Result<Account, RiotApiError> {
        let region = Region::parse(&riot_id.region)?;
        let url = self.endpoint(
            region.account_host(),
            &[
                "riot",
                "account",
                "v1",
                "accounts",
                "by-riot-id",
                &riot_id.game_name,
                &riot_id.tag_line,
            ],
        )?;

        let account: Account = self.get_json(url, &[]).await?;
        debug!(puuid = %account.puuid, "Resolved account");
        Ok(account)
    }

    #[instrument(skip(self))]
    async fn locate_summoner(
        &self,
        puuid: &str,
        region: Region,
    ) -> Result<Option<SummonerLocation>, RiotApiError> {
        for platform in region.platforms() {
            let url = self.endpoint(
                platform,
                &["lol", "summoner", "v4", "summoners", "by-puuid", puuid],
            )?;

            match self.get_json::<Summoner>(url, &[]).await {
                Ok(summoner) => {
                    debug!(platform, "Found summoner on platform");
                    return Ok(Some(SummonerLocation {
                        platform: platform.to_string(),
                        summoner,
                    }));
                }
                Err(RiotApiError::NotFound(_)) => {
                    debug!(platform, "Summoner not on platform");
                }
                Err(err) => return Err(err),
            }
        }

        Ok(None)
    }

    #[instrument(skip(self, window))]
    async fn matches(
        &self,
        puuid: &str,
        region: Region,
        window: &MatchWindow,
    ) -> Result<Vec<MatchDto>, RiotApiError> {
        let ids = self.match_ids(puuid, region, window).await?;
        info!(match_count = ids.len(), "Fetching match details");

        let details: Vec<Option<MatchDto>> = stream::iter(ids.into_iter().map(|id| async move {
            match self.match_detail(region, &id).await {
                Ok(detail) => Ok(Some(detail)),
                Err(RiotApiError::NotFound(_)) => {
                    warn!(match_id = %id, "Match not found, skipping");
                    Ok(None)
                }
                Err(err) => Err(err),
            }
        }))
        .buffered(self.fetch_concurrency.max(1))
        .try_collect()
        .await?;

        Ok(details.into_iter().flatten().collect())
    }

    #[instrument(skip(self))]
    async fn top_masteries(
        &self,
        puuid: &str,
        platform: &str,
        count: usize,
    ) -> Result<Vec<MasteryRecord>, RiotApiError> {
        let url = self.endpoint(
            platform,
            &[
                "lol",
                "champion-mastery",
                "v4",
                "champion-masteries",
                "by-puuid",
                puuid,
                "top",
            ],
        )?;
        match self.get_json(url, &[("count", count.to_string())]).await {
            Err(RiotApiError::NotFound(_)) => {
                warn!(platform, "No mastery data, continuing without it");
                Ok(Vec::new())
            }
            other => other,
        }
    }
}
