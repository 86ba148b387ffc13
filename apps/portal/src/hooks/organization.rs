use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::api::{ApiEnvelope, ClientResult, MemberApiClient};
use crate::config::DataSource;
use crate::fixtures::organization::sample_organization;
use crate::models::Organization;
use crate::state::{use_app_actions, use_app_state};
use crate::{API_CLIENT, APP_CONFIG};

const MAX_FETCH_ATTEMPTS: u32 = 3;
const RETRY_BASE_DELAY_MS: u32 = 300;

/// Loads the Organization once per session. Fixture mode resolves
/// immediately; remote mode goes through the API client with retries for
/// transient failures. Terminal failures land in the hierarchy error slot
/// and render as a dismissible banner, never a crash.
pub fn use_organization() {
    let actions = use_app_actions();
    let state = use_app_state();

    use_future(move || async move {
        if state.read().hierarchy.organization.is_some() {
            return;
        }

        TimeoutFuture::new(0).await;

        actions.set_hierarchy_loading(true);
        actions.set_hierarchy_error(None);

        let source = APP_CONFIG
            .get()
            .map(|cfg| cfg.data_source)
            .unwrap_or(DataSource::Fixture);

        match source {
            DataSource::Fixture => {
                tracing::info!("loading sample organization fixture");
                actions.set_organization(sample_organization());
            }
            DataSource::Remote => {
                let Some(client) = API_CLIENT.get().cloned() else {
                    actions.set_hierarchy_error(Some(
                        "API client is not initialized; check FITLINK_API_BASE_URL".into(),
                    ));
                    return;
                };

                let Some(company_id) = client.config().company_id.clone() else {
                    actions.set_hierarchy_error(Some(
                        "No company configured; set FITLINK_COMPANY_ID".into(),
                    ));
                    return;
                };

                match fetch_with_retry(&client, &company_id).await {
                    Ok(envelope) => {
                        // A successful response with no payload is an empty
                        // organization, not an error.
                        let organization = envelope.data.unwrap_or_default();
                        actions.set_organization(organization);
                    }
                    Err(err) => {
                        tracing::error!("organization fetch failed: {err}");
                        actions.set_hierarchy_error(Some(format!(
                            "Could not load your teams: {err}"
                        )));
                    }
                }
            }
        }
    });
}

async fn fetch_with_retry(
    client: &MemberApiClient,
    company_id: &str,
) -> ClientResult<ApiEnvelope<Organization>> {
    let mut attempt = 1;
    loop {
        match client.get_organization(company_id).await {
            Ok(envelope) => return Ok(envelope),
            Err(err) if err.is_transient() && attempt < MAX_FETCH_ATTEMPTS => {
                tracing::warn!("organization fetch attempt {attempt} failed: {err}");
                TimeoutFuture::new(RETRY_BASE_DELAY_MS * attempt).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
