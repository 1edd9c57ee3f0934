use crate::{
    endpoints::{self, ParamLocation, ResponseKind},
    files::FileUpload,
    schema, ApiResponseOrError, Credentials, ErrorResponse, OpenAiError,
};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION},
    multipart::Form,
    Client, Method, RequestBuilder, Response,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

#[derive(Clone)]
pub struct OpenAiClient {
    credentials: Credentials,
    client: Client,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OpenAiClient({})", self.credentials.base_url)
    }
}

/// Untyped parameters of [`OpenAiClient::call`].
#[derive(Debug, Clone, Default)]
pub struct ApiParams {
    pub path: Map<String, Value>,
    pub query: Map<String, Value>,
    /// JSON body, or the text fields of a multipart body.
    pub body: Option<Value>,
    /// File parts of a multipart body, keyed by field name.
    pub files: Vec<(String, FileUpload)>,
}

impl ApiParams {
    pub fn path(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.path.insert(name.into(), value.into());
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.insert(name.into(), value.into());
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn file(mut self, name: impl Into<String>, file: FileUpload) -> Self {
        self.files.push((name.into(), file));
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiPayload {
    Json(Value),
    Text(String),
    Binary(Vec<u8>),
}

impl OpenAiClient {
    pub fn from_env() -> ApiResponseOrError<Self> {
        Self::new(Credentials::from_env()?)
    }

    pub fn new(credentials: Credentials) -> ApiResponseOrError<Self> {
        let mut headers: HeaderMap = [
            (
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", credentials.api_key))?,
            ),
            (
                HeaderName::from_static("openai-beta"),
                HeaderValue::from_str("assistants=v2")?,
            ),
        ]
        .into_iter()
        .collect();

        if let Some(organization) = &credentials.organization {
            headers.insert(
                HeaderName::from_static("openai-organization"),
                HeaderValue::from_str(organization)?,
            );
        }
        if let Some(project) = &credentials.project {
            headers.insert(
                HeaderName::from_static("openai-project"),
                HeaderValue::from_str(project)?,
            );
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            credentials,
            client,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    async fn request_inner<R, F>(
        &self,
        method: Method,
        route: R,
        build: F,
    ) -> ApiResponseOrError<Response>
    where
        R: Into<String>,
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = format!("{}{}", self.credentials.base_url, route.into());
        log::debug!("OpenAI Request[{method}] {url}");

        let request = build(self.client.request(method.clone(), url.as_str()));
        let response = request.send().await?;

        log::debug!(
            "OpenAI Response[{method}] {} {url}",
            response.status().as_str()
        );
        Self::check_status(response).await
    }

    /// Turns a non-2xx response into an [`OpenAiError`] carrying its status.
    async fn check_status(response: Response) -> ApiResponseOrError<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await?;
        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(error_response) => Err(error_response.error.with_status(status.as_u16())),
            Err(_) => {
                log::warn!("OpenAI error response {status} is not an error envelope");
                Err(OpenAiError::new(body, "unknown".to_string()).with_status(status.as_u16()))
            }
        }
    }

    pub async fn request<S, R, T>(
        &self,
        method: Method,
        route: R,
        body: Option<S>,
    ) -> ApiResponseOrError<T>
    where
        R: Into<String>,
        S: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .request_inner(method, route, |request| match body {
                Some(body) => request.json(&body),
                None => request,
            })
            .await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn get<R, T>(&self, route: R) -> ApiResponseOrError<T>
    where
        R: Into<String>,
        T: DeserializeOwned,
    {
        self.request::<(), R, T>(Method::GET, route, None).await
    }

    pub async fn get_with_query<R, Q, T>(&self, route: R, query: &Q) -> ApiResponseOrError<T>
    where
        R: Into<String>,
        Q: Serialize,
        T: DeserializeOwned,
    {
        let pairs = match serde_json::to_value(query)? {
            Value::Object(map) => query_pairs(&map),
            Value::Null => Vec::new(),
            other => {
                return Err(OpenAiError::new(
                    format!("query must serialize to an object, got {other}"),
                    "serde".to_string(),
                ))
            }
        };
        let response = self
            .request_inner(Method::GET, route, |request| request.query(&pairs))
            .await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn get_text<R>(&self, route: R) -> ApiResponseOrError<String>
    where
        R: Into<String>,
    {
        let response = self.request_inner(Method::GET, route, |r| r).await?;
        Ok(response.text().await?)
    }

    /// GET returning the raw response bytes, e.g. a file written by a container.
    pub async fn get_bytes<R>(&self, route: R) -> ApiResponseOrError<Vec<u8>>
    where
        R: Into<String>,
    {
        let response = self.request_inner(Method::GET, route, |r| r).await?;
        Ok(response.bytes().await?.to_vec())
    }

    pub async fn post<S, R, T>(&self, route: R, body: S) -> ApiResponseOrError<T>
    where
        R: Into<String>,
        S: Serialize,
        T: DeserializeOwned,
    {
        self.request(Method::POST, route, Some(body)).await
    }

    /// POST without a body, e.g. `/batches/{batch_id}/cancel`.
    pub async fn post_empty<R, T>(&self, route: R) -> ApiResponseOrError<T>
    where
        R: Into<String>,
        T: DeserializeOwned,
    {
        self.request::<(), R, T>(Method::POST, route, None).await
    }

    /// POST a JSON body and return the raw response bytes, e.g. generated speech.
    pub async fn post_bytes<S, R>(&self, route: R, body: S) -> ApiResponseOrError<Vec<u8>>
    where
        R: Into<String>,
        S: Serialize,
    {
        let response = self
            .request_inner(Method::POST, route, |request| request.json(&body))
            .await?;
        Ok(response.bytes().await?.to_vec())
    }

    pub async fn post_multipart<S, R, T>(
        &self,
        route: R,
        fields: &S,
        files: Vec<(String, FileUpload)>,
    ) -> ApiResponseOrError<T>
    where
        R: Into<String>,
        S: Serialize,
        T: DeserializeOwned,
    {
        let form = multipart_form(&serde_json::to_value(fields)?, files)?;
        let response = self
            .request_inner(Method::POST, route, |request| request.multipart(form))
            .await?;
        Ok(response.json::<T>().await?)
    }

    pub async fn delete<R, T>(&self, route: R) -> ApiResponseOrError<T>
    where
        R: Into<String>,
        T: DeserializeOwned,
    {
        self.request::<(), R, T>(Method::DELETE, route, None).await
    }

    /// Calls an endpoint by alias with untyped parameters.
    ///
    /// The request body is validated against the endpoint's request schema
    /// before dispatch, and a JSON response against its response schema.
    pub async fn call(&self, alias: &str, params: ApiParams) -> ApiResponseOrError<ApiPayload> {
        let endpoint = endpoints::find(alias).ok_or_else(|| {
            OpenAiError::new(format!("unknown endpoint `{alias}`"), "endpoint".to_string())
        })?;

        let route = endpoint.render_named(&params.path)?;
        endpoint.check_query(&params.query)?;
        let pairs = query_pairs(&params.query);

        let body_parameter = endpoint.body_parameter();
        match (body_parameter, &params.body) {
            (Some(_), Some(body)) => {
                if let Some(schema_name) = endpoint.body_schema() {
                    schema::validate(schema_name, body)?;
                }
            }
            (Some(parameter), None) if parameter.required => {
                return Err(OpenAiError::new(
                    format!("`{alias}` requires a request body"),
                    "endpoint".to_string(),
                ))
            }
            (None, Some(_)) => {
                return Err(OpenAiError::new(
                    format!("`{alias}` does not take a request body"),
                    "endpoint".to_string(),
                ))
            }
            _ => {}
        }

        let form = match body_parameter.map(|p| p.location) {
            Some(ParamLocation::Form) => Some(multipart_form(
                params.body.as_ref().unwrap_or(&Value::Null),
                params.files,
            )?),
            _ if !params.files.is_empty() => {
                return Err(OpenAiError::new(
                    format!("`{alias}` does not take file parts"),
                    "endpoint".to_string(),
                ))
            }
            _ => None,
        };
        let json = params.body.filter(|_| form.is_none());

        let response = self
            .request_inner(endpoint.method.as_reqwest(), route, |mut request| {
                if !pairs.is_empty() {
                    request = request.query(&pairs);
                }
                if let Some(form) = form {
                    request = request.multipart(form);
                } else if let Some(json) = json {
                    request = request.json(&json);
                }
                request
            })
            .await?;

        match endpoint.response {
            ResponseKind::Json(schema_name) => {
                let value = response.json::<Value>().await?;
                schema::validate(schema_name, &value)?;
                Ok(ApiPayload::Json(value))
            }
            ResponseKind::Text => Ok(ApiPayload::Text(response.text().await?)),
            ResponseKind::Binary => Ok(ApiPayload::Binary(response.bytes().await?.to_vec())),
        }
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Flattens query parameters into `key=value` pairs.
///
/// Nulls are skipped, arrays repeat their key and objects become `key[sub]=value`.
pub fn query_pairs(query: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in query {
        match value {
            Value::Array(items) => {
                pairs.extend(
                    items
                        .iter()
                        .filter_map(scalar_string)
                        .map(|item| (key.clone(), item)),
                );
            }
            Value::Object(map) => {
                pairs.extend(map.iter().filter_map(|(sub, item)| {
                    scalar_string(item).map(|item| (format!("{key}[{sub}]"), item))
                }));
            }
            other => {
                if let Some(item) = scalar_string(other) {
                    pairs.push((key.clone(), item));
                }
            }
        }
    }
    pairs
}

/// Builds a multipart body from the text fields of `fields` plus file parts.
///
/// Arrays are sent as repeated `key[]` fields, nested objects as JSON text.
pub(crate) fn multipart_form(
    fields: &Value,
    files: Vec<(String, FileUpload)>,
) -> ApiResponseOrError<Form> {
    let mut form = Form::new();

    match fields {
        Value::Null => {}
        Value::Object(map) => {
            for (key, value) in map {
                match value {
                    Value::Null => {}
                    Value::Array(items) => {
                        for item in items.iter().filter_map(scalar_string) {
                            form = form.text(format!("{key}[]"), item);
                        }
                    }
                    other => {
                        if let Some(text) = scalar_string(other) {
                            form = form.text(key.clone(), text);
                        }
                    }
                }
            }
        }
        other => {
            return Err(OpenAiError::new(
                format!("multipart fields must be an object, got {other}"),
                "serde".to_string(),
            ))
        }
    }

    for (name, file) in files {
        form = form.part(name, file.into_part()?);
    }
    Ok(form)
}
