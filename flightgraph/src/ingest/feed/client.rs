use std::time::Duration;

use chrono::NaiveDate;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;

use flightgraph_core::model::{FlightStatus, RouteRecord};

use crate::ingest::feed::wire;
use crate::ingest::{FetchError, IngestSettings};

/// blocking client for the schedule and live-status feeds. every request
/// carries a bearer token obtained via the client-credentials exchange; any
/// failure here is fatal to the ingestion run that issued it.
pub struct FeedClient {
    http: reqwest::blocking::Client,
    settings: IngestSettings,
}

/// renders a date the way the feed's query parameters expect it, e.g. `24APR23`.
pub fn feed_date(date: NaiveDate) -> String {
    date.format(wire::FEED_DATE_FORMAT).to_string().to_uppercase()
}

impl FeedClient {
    pub fn new(settings: IngestSettings) -> Result<FeedClient, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(FetchError::ClientBuild)?;
        Ok(FeedClient { http, settings })
    }

    fn bearer_token(&self) -> Result<String, FetchError> {
        let url = &self.settings.token_url;
        let params = [
            ("client_id", self.settings.client_id.as_str()),
            ("client_secret", self.settings.client_secret.as_str()),
            ("grant_type", "client_credentials"),
        ];
        let response = self
            .http
            .post(url)
            .form(&params)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| FetchError::TokenRequest {
                url: url.clone(),
                source: e,
            })?;
        let token: wire::TokenResponse = response.json().map_err(FetchError::TokenDecode)?;
        Ok(format!("Bearer {}", token.access_token))
    }

    /// fetches the schedule feed for [start, end] and converts it into domain
    /// route records, dropping incomplete legs along the way.
    pub fn fetch_schedules(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RouteRecord>, FetchError> {
        let token = self.bearer_token()?;
        let url = &self.settings.schedules_url;
        let query = [
            ("airlines", self.settings.airline.clone()),
            ("startDate", feed_date(start)),
            ("endDate", feed_date(end)),
            ("daysOfOperation", self.settings.days_of_operation.clone()),
            ("timeMode", self.settings.time_mode.clone()),
        ];
        log::debug!("requesting schedules from {url} for [{start}, {end}]");
        let response = self
            .http
            .get(url)
            .query(&query)
            .header(AUTHORIZATION, token)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| FetchError::FeedRequest {
                url: url.clone(),
                source: e,
            })?;
        let routes: Vec<wire::RouteResponse> =
            response.json().map_err(|e| FetchError::FeedDecode {
                url: url.clone(),
                source: e,
            })?;
        Ok(routes.into_iter().map(|r| r.into_route()).collect())
    }

    /// fetches the live status of one flight (designator like `LH400`) on the
    /// given day.
    pub fn fetch_status(
        &self,
        flight: &str,
        date: NaiveDate,
    ) -> Result<FlightStatus, FetchError> {
        let token = self.bearer_token()?;
        let url = format!(
            "{}/{}/{}",
            self.settings.status_url.trim_end_matches('/'),
            flight,
            date.format("%Y-%m-%d")
        );
        let response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, token)
            .send()
            .map_err(|e| FetchError::FeedRequest {
                url: url.clone(),
                source: e,
            })?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(FetchError::StatusNotFound {
                flight: flight.to_string(),
            });
        }
        let response = response
            .error_for_status()
            .map_err(|e| FetchError::FeedRequest {
                url: url.clone(),
                source: e,
            })?;
        let document: wire::FlightStatusDocument =
            response.json().map_err(|e| FetchError::FeedDecode {
                url: url.clone(),
                source: e,
            })?;
        document.into_status().ok_or(FetchError::StatusNotFound {
            flight: flight.to_string(),
        })
    }
}
