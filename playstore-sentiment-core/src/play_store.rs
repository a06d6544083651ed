use {
    anyhow::{anyhow, Context, Result},
    reqwest::StatusCode,
    serde_json::{json, Value},
    tracing::{info, warn},
    crate::{
        config::PlayStoreConfig,
        entity::{AppDetails, Review},
        source::{AppMetadataSource, ReviewSource},
    },
};

const REVIEWS_RPC_ID: &str = "UsvDTd";
const SORT_NEWEST: u8 = 2;
const RESPONSE_PREFIX: &str = ")]}'";
const DETAILS_DATASET_KEY: &str = "'ds:5'";

// reviews and metadata are always requested from the Indonesian store
const LOCALE_QUERY: [(&str, &str); 2] = [("hl", "id"), ("gl", "id")];

/// Client for the public Google Play web endpoints.
pub struct PlayStore {
    client: reqwest::Client,
    config: PlayStoreConfig,
}

/// Review record as the store returns it. Both fields are required for the
/// record to be usable.
#[derive(Debug, Clone, PartialEq)]
pub struct RawReviewRecord {
    pub content: Option<String>,
    pub score: Option<i64>,
}

impl PlayStore {
    pub fn new(config: PlayStoreConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn request_reviews(&self, app_id: &str, count: usize) -> Result<String> {
        let url = format!("{}/_/PlayStoreUi/data/batchexecute", self.config.base_url());

        let res = self.client.post(&url)
            .query(&LOCALE_QUERY)
            .form(&[("f.req", reviews_request_payload(app_id, count))])
            .send()
            .await
            .with_context(|| format!("failed to request reviews for {}", app_id))?;

        if res.status() != StatusCode::OK {
            return Err(anyhow!("review service returned status: {}", res.status().as_u16()));
        }

        res.text().await.context("failed to read review service response")
    }

    async fn request_details_page(&self, app_id: &str) -> Result<String> {
        let url = format!("{}/store/apps/details", self.config.base_url());

        let res = self.client.get(&url)
            .query(&[("id", app_id)])
            .query(&LOCALE_QUERY)
            .send()
            .await
            .with_context(|| format!("failed to request details for {}", app_id))?;

        if res.status() != StatusCode::OK {
            return Err(anyhow!("app metadata service returned status: {}", res.status().as_u16()));
        }

        res.text().await.context("failed to read app metadata response")
    }
}

impl ReviewSource for PlayStore {
    async fn fetch_reviews(&self, app_id: &str, count: usize) -> Result<Vec<Review>> {
        info!("fetching {} newest reviews for {}", count, app_id);

        let body = self.request_reviews(app_id, count).await?;
        let records = parse_reviews_response(&body)?;
        let reviews = project_reviews(records);

        info!("received {} usable reviews for {}", reviews.len(), app_id);
        Ok(reviews)
    }
}

impl AppMetadataSource for PlayStore {
    async fn app_details(&self, app_id: &str) -> Result<AppDetails> {
        info!("fetching details for {}", app_id);

        let page = self.request_details_page(app_id).await?;
        parse_details_page(app_id, &page)
    }
}

pub fn reviews_request_payload(app_id: &str, count: usize) -> String {
    let inner = json!([
        null,
        null,
        [2, SORT_NEWEST, [count, null, null], null, [null, null]],
        [app_id, 7],
    ]);

    json!([[[REVIEWS_RPC_ID, inner.to_string(), null, "generic"]]]).to_string()
}

/// Parses a `batchexecute` review response.
///
/// A body without the envelope prefix (a consent or rate limit page) or an
/// envelope whose review list is missing yields no records. Malformed json
/// after the prefix is an error.
pub fn parse_reviews_response(body: &str) -> Result<Vec<RawReviewRecord>> {
    let envelope = match body.trim_start().strip_prefix(RESPONSE_PREFIX) {
        Some(v) => v,
        None => {
            warn!("review service response is not a batchexecute envelope");
            return Ok(Vec::new());
        }
    };

    let envelope: Value = serde_json::from_str(envelope.trim_start())
        .context("review service response is not valid json")?;

    let payload = match envelope.get(0).and_then(|v| v.get(2)).and_then(Value::as_str) {
        Some(v) => v,
        None => {
            warn!("review service response has no payload");
            return Ok(Vec::new());
        }
    };

    let payload: Value = serde_json::from_str(payload)
        .context("review payload is not valid json")?;

    let items = match payload.get(0).and_then(Value::as_array) {
        Some(v) => v,
        None => return Ok(Vec::new()),
    };

    Ok(items.iter()
        .map(|item| RawReviewRecord {
            content: item.get(4).and_then(Value::as_str).map(|v| v.to_owned()),
            score: item.get(2).and_then(Value::as_i64),
        })
        .collect())
}

/// Keeps only text and rating. If any record lacks either of them the whole
/// batch is treated as unusable.
pub fn project_reviews(records: Vec<RawReviewRecord>) -> Vec<Review> {
    let reviews: Option<Vec<Review>> = records.into_iter()
        .map(|record| match (record.content, record.score) {
            (Some(content), Some(score)) => i32::try_from(score).ok().map(|rating| Review::new(content, rating)),
            _ => None,
        })
        .collect();

    match reviews {
        Some(v) => v,
        None => {
            warn!("review records are missing content or score fields");
            Vec::new()
        }
    }
}

pub fn parse_details_page(app_id: &str, page: &str) -> Result<AppDetails> {
    let data = details_dataset(page)
        .ok_or_else(|| anyhow!("details page for {} has no app dataset", app_id))?;

    let data: Value = serde_json::from_str(data)
        .with_context(|| format!("app dataset for {} is not valid json", app_id))?;

    let title = at(&data, &[1, 2, 0, 0])
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow!("app dataset for {} has no title", app_id))?;

    Ok(AppDetails::builder()
        .app_id(app_id)
        .title(title)
        .icon(str_at(&data, &[1, 2, 95, 0, 3, 2]))
        .description(str_at(&data, &[1, 2, 72, 0, 1]).unwrap_or_default())
        .genre(str_at(&data, &[1, 2, 79, 0, 0, 0]))
        .score(at(&data, &[1, 2, 51, 0, 1]).and_then(Value::as_f64))
        .installs(str_at(&data, &[1, 2, 13, 0]))
        .build())
}

fn details_dataset(page: &str) -> Option<&str> {
    let start = page.find(DETAILS_DATASET_KEY)?;
    let block = &page[start..];
    let data_start = block.find("data:")? + "data:".len();
    let data_end = block.find(", sideChannel:")?;

    if data_end <= data_start {
        return None;
    }

    Some(&block[data_start..data_end])
}

fn str_at(value: &Value, path: &[usize]) -> Option<String> {
    at(value, path).and_then(Value::as_str).map(|v| v.to_owned())
}

fn at<'a>(value: &'a Value, path: &[usize]) -> Option<&'a Value> {
    path.iter().try_fold(value, |value, index| value.get(*index))
}
