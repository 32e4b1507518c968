//! Shared fakes for native tests: a recording transport and navigator.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use super::error::ApiError;
use super::gateway::ApiGateway;
use super::transport::{ApiRequest, ApiResponse, Transport};
use crate::util::navigate::Navigate;
use crate::util::storage::MemoryStorage;

/// Transport that records every dispatched request and answers from a queue
/// of stubbed responses, in FIFO order.
#[derive(Default)]
pub struct FakeTransport {
    responses: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_status(&self, status: u16, body: serde_json::Value) {
        self.responses
            .borrow_mut()
            .push_back(Ok(ApiResponse { status, body: Some(body) }));
    }

    pub fn push_empty(&self, status: u16) {
        self.responses.borrow_mut().push_back(Ok(ApiResponse { status, body: None }));
    }

    pub fn push_error(&self, error: ApiError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests.borrow().last().cloned().expect("no request was dispatched")
    }
}

impl Transport for FakeTransport {
    fn dispatch(&self, request: ApiRequest) -> LocalBoxFuture<'_, Result<ApiResponse, ApiError>> {
        self.requests.borrow_mut().push(request);
        let response = self
            .responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no stubbed response".to_owned())));
        Box::pin(async move { response })
    }
}

/// Navigator that records every redirect target.
#[derive(Default)]
pub struct RecordingNavigate {
    paths: RefCell<Vec<String>>,
}

impl RecordingNavigate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.borrow().clone()
    }
}

impl Navigate for RecordingNavigate {
    fn to(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_owned());
    }
}

/// A gateway wired to fresh fakes, returned alongside them for assertions.
pub struct Harness {
    pub gateway: Rc<ApiGateway>,
    pub transport: Rc<FakeTransport>,
    pub storage: Rc<MemoryStorage>,
    pub navigate: Rc<RecordingNavigate>,
}

pub fn harness() -> Harness {
    let transport = Rc::new(FakeTransport::new());
    let storage = Rc::new(MemoryStorage::new());
    let navigate = Rc::new(RecordingNavigate::new());
    let gateway = Rc::new(ApiGateway::new(
        transport.clone(),
        storage.clone(),
        navigate.clone(),
    ));
    Harness { gateway, transport, storage, navigate }
}
