use crate::config::AppConfig;
use crate::services::calendar::GoogleCalendar;
use crate::services::storage::ObjectStorage;
use crate::services::store::RecordStore;

pub struct AppState {
    pub store: Box<dyn RecordStore>,
    pub storage: Box<dyn ObjectStorage>,
    pub calendar: GoogleCalendar,
    pub config: AppConfig,
}
