use crate::config::Config;
use crate::error::ApiError;
use crate::models::*;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

/// Thin client for the paper assistant service. One call is one HTTP round trip.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: Config,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub async fn upload_pdf(&self, filename: &str, bytes: Vec<u8>) -> Result<DocumentInfo, ApiError> {
        let url = self.config.endpoint("upload_pdf");
        log::info!("Uploading {} ({} bytes) to {}", filename, bytes.len(), url);

        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("application/pdf")?;
        let form = Form::new().part("file", part);

        let response = self.client
            .post(&url)
            .multipart(form)
            .send()
            .await?;

        decode(response).await
    }

    pub async fn ask(&self, document_id: &str, question: &str) -> Result<String, ApiError> {
        let url = self.config.endpoint("ask");
        log::info!("Asking about document {}", document_id);

        let request = AskRequest {
            document_id: document_id.to_string(),
            question: question.to_string(),
        };

        let response = self.client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let body: AskResponse = decode(response).await?;
        Ok(body.answer)
    }

    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        let response = self.client
            .get(self.config.endpoint(""))
            .send()
            .await?;

        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|e| e.detail_message());
        log::warn!("Service returned {}: {}", status, body);
        return Err(ApiError::Status { status, detail });
    }

    Ok(response.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(Config::new(server.uri(), None))
    }

    #[tokio::test]
    async fn upload_sends_multipart_file_field() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/upload_pdf"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "document_id": "d7f1c0aa-0000-4000-8000-000000000001",
                "filename": "paper.pdf",
                "char_count": 5000
            })))
            .expect(1)
            .mount(&server)
            .await;

        let doc = client_for(&server)
            .upload_pdf("paper.pdf", b"%PDF-1.4 fake".to_vec())
            .await
            .unwrap();
        assert_eq!(doc.filename, "paper.pdf");
        assert_eq!(doc.char_count, 5000);

        let requests = server.received_requests().await.unwrap();
        let content_type = requests[0].headers.get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.starts_with("multipart/form-data"));
        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(body.contains("name=\"file\""));
        assert!(body.contains("filename=\"paper.pdf\""));
        assert!(body.contains("%PDF-1.4 fake"));
    }

    #[tokio::test]
    async fn ask_posts_json_payload() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ask"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"document_id": "abc", "question": "Why?"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "Because."})))
            .expect(1)
            .mount(&server)
            .await;

        let answer = client_for(&server).ask("abc", "Why?").await.unwrap();
        assert_eq!(answer, "Because.");
    }

    #[tokio::test]
    async fn error_status_carries_detail() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ask"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "detail": "Unknown or missing document_id. Upload a PDF first."
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).ask("missing", "Why?").await.unwrap_err();
        match err {
            ApiError::Status { status, detail } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(
                    detail.as_deref(),
                    Some("Unknown or missing document_id. Upload a PDF first.")
                );
            }
            other => panic!("expected Status, got: {other:?}"),
        }
    }

    #[tokio::test]
    async fn error_status_without_json_has_no_detail() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/upload_pdf"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .upload_pdf("paper.pdf", vec![1, 2, 3])
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { detail: None, .. }));
    }

    #[tokio::test]
    async fn malformed_success_body_is_a_request_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ask"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server).ask("abc", "Why?").await.unwrap_err();
        assert!(matches!(err, ApiError::Request(_)));
    }

    #[tokio::test]
    async fn health_reads_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "ok",
                "message": "AI Research Paper Assistant API is running."
            })))
            .mount(&server)
            .await;

        let health = client_for(&server).health().await.unwrap();
        assert_eq!(health.status, "ok");
    }
}
