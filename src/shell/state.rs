use crate::modules::employees::adapters::outbound::employee_store_in_memory::InMemoryEmployeeStore;
use crate::modules::employees::core::policy::StatusPolicy;
use crate::modules::employees::use_cases::list_employees::handler::ListEmployeesHandler;
use crate::modules::employees::use_cases::list_status_log::handler::ListStatusLogHandler;
use crate::modules::employees::use_cases::register_employee::handler::RegisterEmployeeHandler;
use crate::modules::employees::use_cases::update_status::handler::UpdateStatusHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_handler: Arc<ListEmployeesHandler<InMemoryEmployeeStore>>,
    pub update_handler: Arc<UpdateStatusHandler<InMemoryEmployeeStore>>,
    pub register_handler: Arc<RegisterEmployeeHandler<InMemoryEmployeeStore>>,
    pub status_log_handler: Arc<ListStatusLogHandler<InMemoryEmployeeStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryEmployeeStore>, policy: StatusPolicy) -> Self {
        let policy = Arc::new(policy);
        let update_handler = Arc::new(UpdateStatusHandler::new(store.clone(), policy.clone()));
        let list_handler = Arc::new(ListEmployeesHandler::new(
            store.clone(),
            update_handler.clone(),
            policy,
        ));
        AppState {
            list_handler,
            update_handler,
            register_handler: Arc::new(RegisterEmployeeHandler::new(store.clone())),
            status_log_handler: Arc::new(ListStatusLogHandler::new(store)),
        }
    }
}
