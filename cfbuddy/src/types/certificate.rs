//! Custom SSL certificates and universal SSL verification entries.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::WireEntity;

/// Details of a zone's custom certificate, plus the zone's SSL mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificateInfo {
    /// Zone SSL/TLS mode (`off`, `flexible`, `full`, `strict`); not part of the
    /// certificate object itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_mode: Option<String>,
    pub issuer: String,
    pub uploaded_on: DateTime<Utc>,
    pub modified_on: DateTime<Utc>,
    pub expires_on: DateTime<Utc>,
    pub hosts: Vec<String>,
}

impl WireEntity for CertificateInfo {
    const KIND: &'static str = "custom certificate";
}

/// Only the id of a custom certificate; used for the "current certificate" lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CertificateRef {
    pub id: String,
}

impl WireEntity for CertificateRef {
    const KIND: &'static str = "custom certificate";
}

/// Chain-building strategy for an uploaded certificate.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BundleMethod {
    #[default]
    Ubiquitous,
    Optimal,
    Force,
}

/// Request body for uploading or replacing a custom certificate.
#[derive(Clone, Serialize)]
pub struct CertificateUpload {
    pub certificate: String,
    pub private_key: String,
    pub bundle_method: BundleMethod,
}

impl CertificateUpload {
    pub fn new(certificate: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            certificate: certificate.into(),
            private_key: private_key.into(),
            bundle_method: BundleMethod::default(),
        }
    }
}

impl fmt::Debug for CertificateUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CertificateUpload")
            .field("certificate", &format_args!("<{} bytes>", self.certificate.len()))
            .field("private_key", &"***")
            .field("bundle_method", &self.bundle_method)
            .finish()
    }
}

/// Universal SSL verification state of one hostname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslVerification {
    pub hostname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cert_pack_uuid: Option<String>,
}

impl WireEntity for SslVerification {
    const KIND: &'static str = "ssl verification";
}
