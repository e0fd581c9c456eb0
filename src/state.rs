use std::sync::Arc;

use crate::services::ScheduleViews;

#[derive(Clone)]
pub struct AppState {
    pub views: Arc<ScheduleViews>,
}
