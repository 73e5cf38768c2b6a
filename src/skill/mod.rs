//! Voice-skill adapter: request envelope in, spoken response out.

pub mod envelope;
pub mod router;
pub mod speech;

use crate::config::index_source::index_source_for;
use crate::core::inflation::InflationAdjuster;
use crate::domain::ports::{ConfigProvider, SystemClock, YearProvider};
use crate::utils::error::{Result, SkillError};
use envelope::{RequestBody, SkillRequest, SkillResponse};
use router::IntentRouter;

pub struct Skill<C: YearProvider = SystemClock> {
    adjuster: InflationAdjuster<C>,
    router: IntentRouter<C>,
    application_id: Option<String>,
}

impl<C: YearProvider> Skill<C> {
    pub fn new(adjuster: InflationAdjuster<C>, application_id: Option<String>) -> Self {
        Self {
            adjuster,
            router: IntentRouter::new(),
            application_id,
        }
    }

    /// Loads the CPI table named by `config` and warns when it does not
    /// reach the current year.
    pub fn from_config<P: ConfigProvider>(config: &P, clock: C) -> Result<Self> {
        let source = index_source_for(config.cpi_data_path());
        let table = source.load()?;
        tracing::info!(
            "📈 Loaded {} CPI rows ({}-{}) from {}",
            table.len(),
            table.first_year(),
            table.last_year(),
            source.describe()
        );

        let adjuster = InflationAdjuster::new(table, clock)?;
        if let Some(gap) = adjuster.coverage_gap() {
            tracing::warn!(
                "⚠️ CPI data ends at {}; conversions for {}-{} will fail until the dataset is refreshed",
                adjuster.table().last_year(),
                gap.start(),
                gap.end()
            );
        }

        Ok(Self::new(
            adjuster,
            config.application_id().map(str::to_string),
        ))
    }

    pub fn adjuster(&self) -> &InflationAdjuster<C> {
        &self.adjuster
    }

    pub fn handle(&self, request: &SkillRequest) -> Result<SkillResponse> {
        self.verify_application(request)?;

        let response = match &request.request {
            RequestBody::LaunchRequest { .. } => SkillResponse::ask(speech::welcome()),
            RequestBody::IntentRequest { request_id, intent } => {
                tracing::info!(intent = %intent.name, request_id = ?request_id, "handling intent");
                self.router.route(&self.adjuster, intent)
            }
            RequestBody::SessionEndedRequest { reason, .. } => {
                tracing::info!(reason = ?reason, "session ended");
                SkillResponse::empty()
            }
            RequestBody::Unsupported => {
                tracing::warn!("ignoring unsupported request type");
                SkillResponse::empty()
            }
        };

        Ok(response)
    }

    fn verify_application(&self, request: &SkillRequest) -> Result<()> {
        let Some(expected) = &self.application_id else {
            return Ok(());
        };

        match request.application_id() {
            Some(received) if received == expected.as_str() => Ok(()),
            received => {
                let received = received.unwrap_or("<none>").to_string();
                tracing::warn!(%received, "rejecting request from unknown application");
                Err(SkillError::ApplicationIdMismatch { received })
            }
        }
    }
}
