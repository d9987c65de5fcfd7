use std::sync::Arc;

use crate::config::Settings;
use crate::error::AppError;
use crate::infra::vision::VisionClient;
use crate::infra::vision_http::HttpVisionClient;
use crate::services::scorecard_import::ScorecardImportService;

/// Application state shared by all workers
#[derive(Clone)]
pub struct AppState {
    /// Settings loaded once at startup
    pub settings: Arc<Settings>,
    /// Vision model client; `None` when scorecard import is not configured
    pub vision: Option<Arc<dyn VisionClient>>,
}

impl AppState {
    pub fn new(settings: Settings, vision: Option<Arc<dyn VisionClient>>) -> Self {
        Self {
            settings: Arc::new(settings),
            vision,
        }
    }

    /// Build state from settings, wiring the HTTP vision client when an API key is set.
    pub fn from_settings(settings: Settings) -> Result<Self, AppError> {
        let vision = match settings.vision.clone() {
            Some(vision_settings) => {
                let client = HttpVisionClient::new(vision_settings).map_err(AppError::from)?;
                Some(Arc::new(client) as Arc<dyn VisionClient>)
            }
            None => None,
        };
        Ok(Self::new(settings, vision))
    }

    pub fn scorecard_import(&self) -> ScorecardImportService {
        ScorecardImportService::new(self.vision.clone())
    }

    /// Test state with default settings and no vision model
    pub fn for_tests() -> Self {
        Self::new(Settings::for_tests(), None)
    }
}
