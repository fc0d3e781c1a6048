use log::debug;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use url::Url;

use crate::errors::FirestoreError;
use crate::values::{Document, Value};

const BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Connection settings for a Firestore project.
#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    pub project_id: String,
    /// Optional API key appended to every request.
    pub api_key: Option<String>,
    /// Database id; "(default)" unless the project uses named databases.
    pub database_id: String,
}

impl FirestoreConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            api_key: None,
            database_id: "(default)".to_string(),
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// Thin client over the Firestore REST document surface: list, get, write,
/// and run structured queries. All calls are sequential; retry and timeout
/// policy beyond the plain request timeout live with the caller.
pub struct FirestoreClient {
    client: Client,
    config: FirestoreConfig,
}

impl FirestoreClient {
    pub fn new(config: FirestoreConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        FirestoreClient { client, config }
    }

    fn documents_root(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents",
            BASE_URL, self.config.project_id, self.config.database_id
        )
    }

    /// Builds an endpoint URL; `suffix` is appended verbatim to the
    /// documents root (a "/collection" path or the ":runQuery" verb).
    fn endpoint(&self, suffix: &str) -> Result<Url, FirestoreError> {
        let mut url = Url::parse(&format!("{}{}", self.documents_root(), suffix))
            .map_err(|e| FirestoreError::Endpoint(e.to_string()))?;
        if let Some(key) = &self.config.api_key {
            url.query_pairs_mut().append_pair("key", key);
        }
        Ok(url)
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, FirestoreError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(FirestoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response.json::<T>().await.map_err(FirestoreError::Request)
    }

    /// Fetches every document in a collection, following pagination.
    pub async fn list_documents(&self, collection: &str) -> Result<Vec<Document>, FirestoreError> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut url = self.endpoint(&format!("/{}", collection))?;
            url.query_pairs_mut().append_pair("pageSize", "300");
            if let Some(token) = &page_token {
                url.query_pairs_mut().append_pair("pageToken", token);
            }

            let response = self.client.get(url).send().await?;
            let page: ListDocumentsResponse = Self::decode(response).await?;
            documents.extend(page.documents);

            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        debug!("Listed {} documents from '{}'", documents.len(), collection);
        Ok(documents)
    }

    /// Fetches a single document by id; `None` when it does not exist.
    pub async fn get_document(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<Document>, FirestoreError> {
        let url = self.endpoint(&format!("/{}/{}", collection, id))?;
        let response = self.client.get(url).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let document = Self::decode(response).await?;
        Ok(Some(document))
    }

    /// Creates a document with a store-assigned id.
    pub async fn add_document(
        &self,
        collection: &str,
        document: &Document,
    ) -> Result<Document, FirestoreError> {
        let url = self.endpoint(&format!("/{}", collection))?;
        let response = self.client.post(url).json(document).send().await?;
        Self::decode(response).await
    }

    /// Creates or replaces a document under a caller-chosen id.
    pub async fn set_document(
        &self,
        collection: &str,
        id: &str,
        document: &Document,
    ) -> Result<Document, FirestoreError> {
        let url = self.endpoint(&format!("/{}/{}", collection, id))?;
        let response = self.client.patch(url).json(document).send().await?;
        Self::decode(response).await
    }

    /// Runs a structured query rooted at the documents root.
    pub async fn run_query(
        &self,
        query: StructuredQuery,
    ) -> Result<Vec<Document>, FirestoreError> {
        let url = self.endpoint(":runQuery")?;
        let body = json!({ "structuredQuery": query });
        let response = self.client.post(url).json(&body).send().await?;

        let rows: Vec<RunQueryRow> = Self::decode(response).await?;
        Ok(rows.into_iter().filter_map(|row| row.document).collect())
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ListDocumentsResponse {
    documents: Vec<Document>,
    next_page_token: Option<String>,
}

/// One streamed result row; rows without a document carry read metadata
/// only and are skipped.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RunQueryRow {
    document: Option<Document>,
}

// ---------------------------------------------------------------------------
// Structured queries
// ---------------------------------------------------------------------------

/// The subset of the Firestore structured-query surface the repositories
/// use: equality and range filters ANDed together, descending order, and a
/// result cap.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredQuery {
    from: Vec<CollectionSelector>,
    #[serde(rename = "where", skip_serializing_if = "Option::is_none")]
    filter: Option<Filter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    order_by: Vec<Order>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
}

impl StructuredQuery {
    pub fn collection(collection_id: &str) -> Self {
        StructuredQuery {
            from: vec![CollectionSelector {
                collection_id: collection_id.to_string(),
            }],
            filter: None,
            order_by: Vec::new(),
            limit: None,
        }
    }

    pub fn filter_eq(self, field: &str, value: Value) -> Self {
        self.push_filter(Filter::field(field, FieldOperator::Equal, value))
    }

    pub fn filter_gte(self, field: &str, value: Value) -> Self {
        self.push_filter(Filter::field(field, FieldOperator::GreaterThanOrEqual, value))
    }

    pub fn order_by_desc(mut self, field: &str) -> Self {
        self.order_by.push(Order {
            field: FieldReference::new(field),
            direction: Direction::Descending,
        });
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    fn push_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(match self.filter.take() {
            None => filter,
            Some(Filter::CompositeFilter { op, mut filters }) => {
                filters.push(filter);
                Filter::CompositeFilter { op, filters }
            }
            Some(existing) => Filter::CompositeFilter {
                op: CompositeOperator::And,
                filters: vec![existing, filter],
            },
        });
        self
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct CollectionSelector {
    collection_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldReference {
    field_path: String,
}

impl FieldReference {
    fn new(field: &str) -> Self {
        FieldReference {
            field_path: field.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
enum Filter {
    FieldFilter {
        field: FieldReference,
        op: FieldOperator,
        value: Value,
    },
    CompositeFilter {
        op: CompositeOperator,
        filters: Vec<Filter>,
    },
}

impl Filter {
    fn field(field: &str, op: FieldOperator, value: Value) -> Self {
        Filter::FieldFilter {
            field: FieldReference::new(field),
            op,
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum FieldOperator {
    Equal,
    GreaterThanOrEqual,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum CompositeOperator {
    And,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Order {
    field: FieldReference,
    direction: Direction,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum Direction {
    Descending,
}
