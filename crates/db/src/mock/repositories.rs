use async_trait::async_trait;
use chairside_core::models::{
    appointment::Appointment, blocked_time::BlockedTime, technician::Technician,
};
use chrono::NaiveDate;
use mockall::mock;
use uuid::Uuid;

// Mock store for testing
mock! {
    pub SalonStore {}

    #[async_trait]
    impl crate::store::SalonStore for SalonStore {
        async fn list_technicians(&self) -> eyre::Result<Vec<Technician>>;

        async fn get_technician(&self, id: Uuid) -> eyre::Result<Option<Technician>>;

        async fn list_appointments_on(&self, date: NaiveDate) -> eyre::Result<Vec<Appointment>>;

        async fn list_blocked_times_on(&self, date: NaiveDate) -> eyre::Result<Vec<BlockedTime>>;
    }
}
