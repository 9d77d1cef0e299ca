//! Menu form body extraction
//!
//! Browsers post the form either urlencoded or, when the page script sends a
//! `FormData` object as is, as `multipart/form-data`. Both decode into the
//! same [`MenuForm`]. A repeated field keeps its last value in either
//! encoding; multipart file parts are not form fields and are skipped.

use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::FormRejection;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Form;

use crate::application::dto::MenuForm;

/// Extractor for a submitted menu form
#[derive(Debug)]
pub struct MenuFormBody(pub MenuForm);

#[derive(Debug, thiserror::Error)]
pub enum FormBodyRejection {
    #[error("failed to decode form body: {0}")]
    Form(#[from] FormRejection),
    #[error("invalid multipart request: {0}")]
    MultipartRequest(#[from] MultipartRejection),
    #[error("failed to read multipart body: {0}")]
    Multipart(#[from] MultipartError),
}

impl IntoResponse for FormBodyRejection {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

impl<S> FromRequest<S> for MenuFormBody
where
    S: Send + Sync,
{
    type Rejection = FormBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut form = MenuForm::default();

        if !is_multipart(req.headers()) {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state).await?;
            for (name, value) in pairs {
                form.set(&name, value);
            }
            return Ok(Self(form));
        }

        let mut multipart = Multipart::from_request(req, state).await?;
        while let Some(field) = multipart.next_field().await? {
            if field.file_name().is_some() {
                continue;
            }
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            let value = field.text().await?;
            form.set(&name, value);
        }

        Ok(Self(form))
    }
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim_start().starts_with("multipart/form-data"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request(content_type: &str, body: impl Into<Body>) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, content_type)
            .body(body.into())
            .unwrap()
    }

    #[tokio::test]
    async fn test_urlencoded_body() {
        let req = request(
            "application/x-www-form-urlencoded",
            "item_name=Greek+Salad&category=Starters&description=Feta%20and%20olives&price=9",
        );

        let MenuFormBody(form) = MenuFormBody::from_request(req, &()).await.unwrap();

        assert_eq!(form.item_name.as_deref(), Some("Greek Salad"));
        assert_eq!(form.category.as_deref(), Some("Starters"));
        assert_eq!(form.description.as_deref(), Some("Feta and olives"));
    }

    #[tokio::test]
    async fn test_urlencoded_missing_field_is_none() {
        let req = request("application/x-www-form-urlencoded", "item_name=Pasta");

        let MenuFormBody(form) = MenuFormBody::from_request(req, &()).await.unwrap();

        assert_eq!(form.item_name.as_deref(), Some("Pasta"));
        assert_eq!(form.category, None);
        assert_eq!(form.description, None);
    }

    #[tokio::test]
    async fn test_multipart_body() {
        let body = "--XYZ\r\n\
            Content-Disposition: form-data; name=\"item_name\"\r\n\r\n\
            Bruschetta\r\n\
            --XYZ\r\n\
            Content-Disposition: form-data; name=\"category\"\r\n\r\n\
            Starters\r\n\
            --XYZ--\r\n";
        let req = request("multipart/form-data; boundary=XYZ", body);

        let MenuFormBody(form) = MenuFormBody::from_request(req, &()).await.unwrap();

        assert_eq!(form.item_name.as_deref(), Some("Bruschetta"));
        assert_eq!(form.category.as_deref(), Some("Starters"));
        assert_eq!(form.description, None);
    }

    #[tokio::test]
    async fn test_urlencoded_repeated_field_keeps_last_value() {
        let req = request(
            "application/x-www-form-urlencoded",
            "item_name=A&item_name=Pasta&category=Mains&description=Nice",
        );

        let MenuFormBody(form) = MenuFormBody::from_request(req, &()).await.unwrap();

        assert_eq!(form.item_name.as_deref(), Some("Pasta"));
        assert_eq!(form.category.as_deref(), Some("Mains"));
    }

    #[tokio::test]
    async fn test_multipart_file_part_is_skipped() {
        let body = "--XYZ\r\n\
            Content-Disposition: form-data; name=\"item_name\"; filename=\"menu.txt\"\r\n\
            Content-Type: text/plain\r\n\r\n\
            Bruschetta\r\n\
            --XYZ\r\n\
            Content-Disposition: form-data; name=\"category\"\r\n\r\n\
            Starters\r\n\
            --XYZ--\r\n";
        let req = request("multipart/form-data; boundary=XYZ", body);

        let MenuFormBody(form) = MenuFormBody::from_request(req, &()).await.unwrap();

        assert_eq!(form.item_name, None);
        assert_eq!(form.category.as_deref(), Some("Starters"));
    }

    #[tokio::test]
    async fn test_unsupported_content_type_is_rejected() {
        let req = request("application/json", r#"{"item_name":"Pasta"}"#);

        let result = MenuFormBody::from_request(req, &()).await;

        assert!(matches!(result, Err(FormBodyRejection::Form(_))));
    }
}
