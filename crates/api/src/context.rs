use books_core::RequestId;

/// Per-request context inserted by the logging middleware.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RequestContext {
    request_id: RequestId,
}

impl RequestContext {
    pub fn new(request_id: RequestId) -> Self {
        Self { request_id }
    }

    pub fn request_id(&self) -> RequestId {
        self.request_id
    }
}
