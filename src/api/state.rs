//! Application state for the roster API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::service::RosterService;
use crate::storage::EmployeeRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The roster service backing every endpoint.
    service: Arc<RosterService>,
}

impl AppState {
    /// Creates a new application state over the given service.
    pub fn new(service: RosterService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Creates a new application state over a fresh service for `repository`.
    pub fn with_repository(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self::new(RosterService::new(repository))
    }

    /// Returns the roster service.
    pub fn service(&self) -> &RosterService {
        &self.service
    }

    /// Returns a shared handle to the roster service.
    pub fn service_handle(&self) -> Arc<RosterService> {
        Arc::clone(&self.service)
    }
}
