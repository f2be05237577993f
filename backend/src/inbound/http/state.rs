//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the [`TaskService`] port and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::TaskService;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub tasks: Arc<dyn TaskService>,
}

impl HttpState {
    /// Construct state from the task use-case port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::TaskServiceImpl;
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::in_memory::InMemoryTaskRepository;
    ///
    /// let service = TaskServiceImpl::new(Arc::new(InMemoryTaskRepository::new()));
    /// let _state = HttpState::new(Arc::new(service));
    /// ```
    pub fn new(tasks: Arc<dyn TaskService>) -> Self {
        Self { tasks }
    }
}
