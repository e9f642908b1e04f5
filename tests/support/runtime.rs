//! Tokio runtime and mock server slots for behavioural tests.

use std::cell::RefCell;
use std::rc::Rc;

use autopr::ActionError;
use rstest_bdd::Slot;
use tokio::runtime::Runtime;
use wiremock::{Mock, MockServer};

/// Runtime wrapper that can be stored in an `rstest-bdd` Slot.
#[derive(Clone)]
pub struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Ensures a Tokio runtime and Wiremock server are initialised.
///
/// # Errors
///
/// Returns [`ActionError::Io`] when the Tokio runtime cannot be created.
pub fn ensure_runtime_and_server(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
) -> Result<SharedRuntime, ActionError> {
    if runtime.with_ref(|_| ()).is_none() {
        let created = Runtime::new().map_err(|error| ActionError::Io {
            message: format!("failed to create Tokio runtime: {error}"),
        })?;
        runtime.set(SharedRuntime::new(created));
    }

    let shared_runtime = runtime.get().ok_or_else(|| ActionError::Io {
        message: "runtime not initialised after set".to_owned(),
    })?;

    if server.with_ref(|_| ()).is_none() {
        server.set(shared_runtime.block_on(MockServer::start()));
    }

    Ok(shared_runtime)
}

/// Mounts `mocks` on the server held in `server`.
///
/// # Errors
///
/// Returns [`ActionError::Io`] when the server slot is empty.
pub fn mount_all(
    runtime: &SharedRuntime,
    server: &Slot<MockServer>,
    mocks: Vec<Mock>,
) -> Result<(), ActionError> {
    server
        .with_ref(|mock_server| {
            for mock in mocks {
                runtime.block_on(mock.mount(mock_server));
            }
        })
        .ok_or_else(|| ActionError::Io {
            message: "mock server not initialised".to_owned(),
        })
}
