//! # Mock Framework
//!
//! Utilities for testing typed clients in isolation.
//!
//! [`MockClient`] hands out a real [`ResourceClient`] whose requests are answered from a
//! queue of expectations instead of by a [`ResourceActor`](super::ResourceActor).
//! Queue responses with the `expect_*` builders, run the code under test, then call
//! [`MockClient::verify`].
//!
//! # Example
//! ```ignore
//! let mut mock = MockClient::<Product>::new();
//! mock.expect_find_by_id("p-1").return_ok(Some(product));
//! let client = ProductClient::new(mock.client());
//! // ...
//! mock.verify();
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use super::client::ResourceClient;
use super::entity::Entity;
use super::error::FrameworkError;
use super::message::ResourceRequest;

enum Expectation<T: Entity> {
    Create {
        response: Result<T, FrameworkError>,
    },
    FindAll {
        response: Result<Vec<T>, FrameworkError>,
    },
    FindById {
        id: String,
        response: Result<Option<T>, FrameworkError>,
    },
    Update {
        response: Result<Option<T>, FrameworkError>,
    },
    Delete {
        id: String,
        response: Result<(), FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are matched against expectations strictly in order. A request that does not
/// match the next expectation (wrong kind or wrong id) panics inside the mock task, which
/// surfaces in the test as [`FrameworkError::ActorDropped`].
pub struct MockClient<T: Entity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Entity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .expect("mock expectation queue poisoned")
                    .pop_front();

                match (request, expectation) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::FindAll { respond_to }, Some(Expectation::FindAll { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::FindById { id, respond_to },
                        Some(Expectation::FindById { id: expected, response }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Update { respond_to, .. }, Some(Expectation::Update { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { id, respond_to },
                        Some(Expectation::Delete { id: expected, response }),
                    ) if id == expected => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {request:?}");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Create { response })
    }

    pub fn expect_find_all(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::FindAll { response })
    }

    pub fn expect_find_by_id(&mut self, id: impl Into<String>) -> ExpectationBuilder<T, Option<T>> {
        let id = id.into();
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::FindById { id, response }
        })
    }

    pub fn expect_update(&mut self) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Update { response })
    }

    pub fn expect_delete(&mut self, id: impl Into<String>) -> ExpectationBuilder<T, ()> {
        let id = id.into();
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Delete { id, response }
        })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("mock expectation queue poisoned")
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

impl<T: Entity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder that queues the response for one expected request.
pub struct ExpectationBuilder<T: Entity, V> {
    expectations: Queue<T>,
    make: Box<dyn FnOnce(Result<V, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: Entity, V> ExpectationBuilder<T, V> {
    fn new(
        expectations: Queue<T>,
        make: impl FnOnce(Result<V, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            make: Box::new(make),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: V) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<V, FrameworkError>) {
        let expectation = (self.make)(response);
        self.expectations
            .lock()
            .expect("mock expectation queue poisoned")
            .push_back(expectation);
    }
}
