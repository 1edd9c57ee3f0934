//! Client certificates for mutual TLS, uploaded to the organization and
//! activated for the whole organization or for single projects.

use serde::{Deserialize, Serialize};

use crate::{client::OpenAiClient, endpoints, ApiResponseOrError, ListQuery, ListResponse};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CertificateDetails {
    pub valid_at: u64,
    pub expires_at: u64,
    /// PEM text, only returned when requested with `include[]=content`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// `object` is `certificate` for single reads and `organization.certificate`
/// or `organization.project.certificate` in lists.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub object: String,
    pub id: String,
    pub name: String,
    pub created_at: u64,
    pub certificate_details: CertificateDetails,
    /// Absent on single reads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UploadCertificateRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ModifyCertificateRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ToggleCertificatesRequest {
    pub certificate_ids: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct DeleteCertificateResponse {
    pub object: String,
    pub id: String,
}

impl ToggleCertificatesRequest {
    fn new<I, S>(certificate_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ToggleCertificatesRequest {
            certificate_ids: certificate_ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl OpenAiClient {
    pub async fn list_organization_certificates(
        &self,
        query: &ListQuery,
    ) -> ApiResponseOrError<ListResponse<Certificate>> {
        self.get_with_query(endpoints::LIST_ORGANIZATION_CERTIFICATES.render(&[])?, query)
            .await
    }

    pub async fn upload_certificate(
        &self,
        request: UploadCertificateRequest,
    ) -> ApiResponseOrError<Certificate> {
        self.post(endpoints::UPLOAD_CERTIFICATE.render(&[])?, request)
            .await
    }

    pub async fn activate_organization_certificates<I, S>(
        &self,
        certificate_ids: I,
    ) -> ApiResponseOrError<ListResponse<Certificate>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.post(
            endpoints::ACTIVATE_ORGANIZATION_CERTIFICATES.render(&[])?,
            ToggleCertificatesRequest::new(certificate_ids),
        )
        .await
    }

    pub async fn deactivate_organization_certificates<I, S>(
        &self,
        certificate_ids: I,
    ) -> ApiResponseOrError<ListResponse<Certificate>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.post(
            endpoints::DEACTIVATE_ORGANIZATION_CERTIFICATES.render(&[])?,
            ToggleCertificatesRequest::new(certificate_ids),
        )
        .await
    }

    pub async fn get_certificate(
        &self,
        certificate_id: &str,
        include_content: bool,
    ) -> ApiResponseOrError<Certificate> {
        let route = endpoints::GET_CERTIFICATE.render(&[certificate_id])?;
        if include_content {
            self.get_with_query(route, &serde_json::json!({ "include[]": ["content"] }))
                .await
        } else {
            self.get(route).await
        }
    }

    pub async fn modify_certificate(
        &self,
        certificate_id: &str,
        name: &str,
    ) -> ApiResponseOrError<Certificate> {
        let request = ModifyCertificateRequest {
            name: name.to_string(),
        };
        self.post(endpoints::MODIFY_CERTIFICATE.render(&[certificate_id])?, request)
            .await
    }

    /// Only inactive certificates can be deleted.
    pub async fn delete_certificate(
        &self,
        certificate_id: &str,
    ) -> ApiResponseOrError<DeleteCertificateResponse> {
        self.delete(endpoints::DELETE_CERTIFICATE.render(&[certificate_id])?)
            .await
    }

    pub async fn list_project_certificates(
        &self,
        project_id: &str,
        query: &ListQuery,
    ) -> ApiResponseOrError<ListResponse<Certificate>> {
        self.get_with_query(
            endpoints::LIST_PROJECT_CERTIFICATES.render(&[project_id])?,
            query,
        )
        .await
    }

    pub async fn activate_project_certificates<I, S>(
        &self,
        project_id: &str,
        certificate_ids: I,
    ) -> ApiResponseOrError<ListResponse<Certificate>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.post(
            endpoints::ACTIVATE_PROJECT_CERTIFICATES.render(&[project_id])?,
            ToggleCertificatesRequest::new(certificate_ids),
        )
        .await
    }

    pub async fn deactivate_project_certificates<I, S>(
        &self,
        project_id: &str,
        certificate_ids: I,
    ) -> ApiResponseOrError<ListResponse<Certificate>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.post(
            endpoints::DEACTIVATE_PROJECT_CERTIFICATES.render(&[project_id])?,
            ToggleCertificatesRequest::new(certificate_ids),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn listed_certificate() {
        let list: ListResponse<Certificate> = serde_json::from_value(json!({
            "object": "organization.certificate.activation",
            "data": [{
                "object": "organization.certificate",
                "id": "cert_abc",
                "name": "My Example Certificate",
                "active": true,
                "created_at": 1234567,
                "certificate_details": { "valid_at": 12345667, "expires_at": 12345678 }
            }]
        }))
        .unwrap();
        assert_eq!(list.data[0].active, Some(true));
        assert_eq!(list.data[0].certificate_details.content, None);
    }

    #[test]
    fn toggle_request() {
        assert_eq!(
            serde_json::to_value(ToggleCertificatesRequest::new(["cert_abc", "cert_def"])).unwrap(),
            json!({ "certificate_ids": ["cert_abc", "cert_def"] })
        );
    }
}
