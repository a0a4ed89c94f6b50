use crate::{
    Error,
    model::{Route, RouteRequest},
    strategy::RouteStrategy,
};

/// Rejects malformed requests before the wrapped strategy runs
#[derive(Debug, Clone)]
pub struct ValidatingStrategy<S> {
    inner: S,
}

impl<S> ValidatingStrategy<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }
}

/// # Errors
///
/// Returns `Error::InvalidRequest` when origin and destination coincide or
/// the package weight is not positive
pub fn validate_request(request: &RouteRequest) -> Result<(), Error> {
    if request.origin == request.destination {
        return Err(Error::InvalidRequest(format!(
            "origin and destination are identical: {}",
            request.origin
        )));
    }
    request
        .weight
        .ensure_positive()
        .map_err(|e| Error::InvalidRequest(e.to_string()))
}

impl<S: RouteStrategy> RouteStrategy for ValidatingStrategy<S> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn calculate(&self, request: &RouteRequest) -> Result<Route, Error> {
        validate_request(request)?;
        self.inner.calculate(request)
    }
}
