// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::session::DashboardSession;
use tokio::sync::Mutex;

pub struct AppState {
    pub dashboard_service: DashboardService,
    pub session: Mutex<DashboardSession>,
}

impl AppState {
    pub fn new(dashboard_service: DashboardService, session: DashboardSession) -> Self {
        Self {
            dashboard_service,
            session: Mutex::new(session),
        }
    }
}
