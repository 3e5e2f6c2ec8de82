//! Custom SSL certificates and custom hostnames.

use super::{MAX_PAGE_SIZE_CUSTOM_HOSTNAMES, ZoneService, require_id};
use crate::api::ApiClient;
use crate::error::{CfError, Result};
use crate::lookup::Lookup;
use crate::pagination::{PageSpec, collect_pages, page_window};
use crate::query::QueryString;
use crate::transport::HttpMethod;
use crate::types::certificate::{CertificateInfo, CertificateRef, CertificateUpload};
use crate::types::hostname::CustomHostname;

#[derive(Clone)]
pub struct SslService {
    api: ApiClient,
    zones: ZoneService,
}

impl SslService {
    pub fn new(api: ApiClient) -> Self {
        let zones = ZoneService::new(api.clone());
        Self { api, zones }
    }

    /// Id of the zone's active custom certificate.
    pub async fn current_custom_cert_id(&self, zone_id: &str) -> Result<Lookup<String>> {
        let zone_id = require_id("zone_id", zone_id)?;
        let path = QueryString::new()
            .push("status", "active")
            .finish(&format!("zones/{zone_id}/custom_certificates"));
        let certs: Vec<CertificateRef> = self.api.get_entities(&path).await?;

        let lookup = Lookup::from_matches(certs).map(|cert| cert.id);
        if let Lookup::Ambiguous { matches } = lookup {
            log::warn!("Zone {zone_id} has {matches} active custom certificates");
        }
        Ok(lookup)
    }

    /// Upload a new custom certificate (`bundle_method` = `ubiquitous`).
    pub async fn upload_custom_cert(
        &self,
        zone_id: &str,
        certificate: &str,
        private_key: &str,
    ) -> Result<()> {
        let zone_id = require_id("zone_id", zone_id)?;
        let upload = pem_upload(certificate, private_key)?;
        self.api
            .send_json(
                HttpMethod::Post,
                &format!("zones/{zone_id}/custom_certificates"),
                &upload,
            )
            .await
            .map(drop)
    }

    /// Replace the certificate and key of an existing custom certificate.
    pub async fn update_custom_cert(
        &self,
        zone_id: &str,
        cert_id: &str,
        certificate: &str,
        private_key: &str,
    ) -> Result<()> {
        let zone_id = require_id("zone_id", zone_id)?;
        let cert_id = require_id("cert_id", cert_id)?;
        let upload = pem_upload(certificate, private_key)?;
        self.api
            .send_json(
                HttpMethod::Patch,
                &format!("zones/{zone_id}/custom_certificates/{cert_id}"),
                &upload,
            )
            .await
            .map(drop)
    }

    pub async fn remove_custom_cert(&self, zone_id: &str, cert_id: &str) -> Result<()> {
        let zone_id = require_id("zone_id", zone_id)?;
        let cert_id = require_id("cert_id", cert_id)?;
        self.api
            .delete(&format!("zones/{zone_id}/custom_certificates/{cert_id}"))
            .await
    }

    /// Certificate details plus the zone's SSL mode.
    ///
    /// A failing SSL-mode lookup only leaves `tls_mode` empty; a failing
    /// certificate fetch fails the call.
    pub async fn fetch_cert_data(&self, zone_id: &str, cert_id: &str) -> Result<CertificateInfo> {
        let zone_id = require_id("zone_id", zone_id)?;
        let cert_id = require_id("cert_id", cert_id)?;

        let tls_mode = match self.zones.zone_ssl_mode(zone_id).await {
            Ok(mode) => mode,
            Err(e) => {
                log::warn!("SSL mode of zone {zone_id} unavailable: {e}");
                None
            }
        };

        let mut info: CertificateInfo = self
            .api
            .get_entity(&format!("zones/{zone_id}/custom_certificates/{cert_id}"))
            .await?;
        info.tls_mode = tls_mode;
        Ok(info)
    }

    /// One page of the zone's custom hostnames.
    pub async fn custom_hostnames_page(
        &self,
        zone_id: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<CustomHostname>> {
        let zone_id = require_id("zone_id", zone_id)?;
        let (page, per_page) = page_window(page, per_page, MAX_PAGE_SIZE_CUSTOM_HOSTNAMES)?;
        let path = QueryString::new()
            .push("per_page", per_page)
            .push("page", page)
            .finish(&format!("zones/{zone_id}/custom_hostnames"));
        self.api.get_entities(&path).await
    }

    pub async fn all_custom_hostnames(
        &self,
        zone_id: &str,
        spec: PageSpec,
    ) -> Result<Vec<CustomHostname>> {
        collect_pages(spec, |page, per_page| {
            self.custom_hostnames_page(zone_id, page, per_page)
        })
        .await
    }
}

fn pem_upload(certificate: &str, private_key: &str) -> Result<CertificateUpload> {
    if certificate.trim().is_empty() {
        return Err(CfError::invalid_parameter("certificate", "must not be empty"));
    }
    if private_key.trim().is_empty() {
        return Err(CfError::invalid_parameter("private_key", "must not be empty"));
    }
    Ok(CertificateUpload::new(certificate, private_key))
}
