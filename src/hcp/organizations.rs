//! Organization API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::hcp::TfeClient;

impl TfeClient {
    /// Check that the token can read the given organization.
    ///
    /// Only the status code matters; the response body is never read.
    pub async fn validate_organization(&self, org: &str) -> Result<()> {
        let url = format!(
            "{}/{}/{}",
            self.base_url(),
            api::ORGANIZATIONS,
            urlencoding::encode(org)
        );
        debug!("Validating token against: {}", url);

        let response = self.get(&url).send().await?;
        let status = response.status().as_u16();
        debug!("Organization lookup returned status {}", status);

        match status {
            200 => Ok(()),
            401 | 403 => Err(TfeError::InvalidToken {
                org: org.to_string(),
                status,
            }),
            404 => Err(TfeError::OrganizationNotFound {
                org: org.to_string(),
            }),
            status => Err(TfeError::Api { status }),
        }
    }
}
