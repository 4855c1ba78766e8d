//! # Mock Resource & Testing Guide
//!
//! `MockResource<T>` implements the same [`Resource<T>`] capability as [`HttpResource`](crate::HttpResource)
//! but answers from scripted replies held in memory. It records every call so tests can
//! assert how many lookups an orchestration issued, and in which shape.
//!
//! ## When to use Mocks vs a Fake Server
//!
//! | Feature | MockResource | In-process axum server |
//! |---------|--------------|------------------------|
//! | **Speed** | Instant (in-memory) | Fast (loopback socket) |
//! | **Call counting** | Built in (`calls`) | Manual |
//! | **Status-code handling** | Not exercised | Exercised |
//! | **Use Case** | Orchestration logic *above* the client | The HTTP client itself |
//! | **Error Injection** | Easy (`return_err`) | Route returns a status |
//!
//! ## Replies are standing, not queued
//!
//! Fan-out issues lookups concurrently and in no particular order, so a scripted reply is
//! keyed (by id, by action, by `scope/key`) and answers every matching call. Anything not
//! scripted answers like an empty downstream: `Ok(None)` for reads and creates, `Ok(false)`
//! for updates and deletes.
//!
//! ```rust
//! use resource_framework::mock::{MockResource, Operation};
//! use resource_framework::{RemoteEntity, Resource};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
//! struct Widget { id: u32 }
//!
//! impl RemoteEntity for Widget {
//!     type Id = u32;
//!     type Create = Widget;
//!     type Update = Widget;
//!     const RESOURCE: &'static str = "widget";
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockResource::<Widget>::new();
//!     mock.expect_get(1).return_ok(Some(Widget { id: 1 }));
//!     mock.expect_get(2).return_err(500, "boom");
//!
//!     let resource = mock.client();
//!     assert_eq!(resource.get(&1).await.unwrap(), Some(Widget { id: 1 }));
//!     assert!(resource.get(&2).await.is_err());
//!     assert_eq!(resource.get(&3).await.unwrap(), None);
//!
//!     assert_eq!(mock.calls(Operation::Get), 3);
//! }
//! ```

use crate::entity::RemoteEntity;
use crate::error::{ClientError, ClientResult};
use crate::resource::Resource;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// The kind of call a [`MockResource`] received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Get,
    List,
    ListBy,
    Create,
    Invoke,
    Update,
    Delete,
}

#[derive(Clone)]
enum Reply<V> {
    Value(V),
    Fail { status: u16, body: String },
}

#[derive(Clone)]
struct Scripted<V> {
    reply: Reply<V>,
    delay: Option<Duration>,
}

impl<V> Scripted<V> {
    async fn resolve(self) -> ClientResult<V> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match self.reply {
            Reply::Value(value) => Ok(value),
            Reply::Fail { status, body } => Err(ClientError::Status { status, body }),
        }
    }
}

struct MockState<T> {
    gets: HashMap<String, Scripted<Option<T>>>,
    lists: HashMap<String, Scripted<Option<Vec<T>>>>,
    invokes: HashMap<String, Scripted<Option<T>>>,
    create: Option<Scripted<Option<T>>>,
    update: Option<Scripted<bool>>,
    delete: Option<Scripted<bool>>,
    calls: Vec<(Operation, String)>,
    bodies: Vec<(Operation, Value)>,
}

impl<T> Default for MockState<T> {
    fn default() -> Self {
        Self {
            gets: HashMap::new(),
            lists: HashMap::new(),
            invokes: HashMap::new(),
            create: None,
            update: None,
            delete: None,
            calls: Vec::new(),
            bodies: Vec::new(),
        }
    }
}

type Installer<T, V> = Box<dyn FnOnce(&mut MockState<T>, Scripted<V>) + Send>;

/// An in-memory [`Resource`] with scripted replies and call recording.
pub struct MockResource<T: RemoteEntity> {
    state: Arc<Mutex<MockState<T>>>,
}

impl<T: RemoteEntity> Clone for MockResource<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<T: RemoteEntity> Default for MockResource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RemoteEntity> MockResource<T> {
    /// Creates a mock with no scripted replies.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Returns the mock as a shareable resource handle. Calls through the handle are
    /// recorded on this mock.
    pub fn client(&self) -> Arc<dyn Resource<T>> {
        Arc::new(self.clone())
    }

    /// Scripts the reply for `get(id)`.
    pub fn expect_get(&self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        let key = id.to_string();
        self.builder(move |state, scripted| {
            state.gets.insert(key, scripted);
        })
    }

    /// Scripts the reply for `list()`.
    pub fn expect_list(&self) -> ExpectationBuilder<T, Option<Vec<T>>> {
        self.builder(|state, scripted| {
            state.lists.insert(String::new(), scripted);
        })
    }

    /// Scripts the reply for `list_by(scope, key)`.
    pub fn expect_list_by(&self, scope: &str, key: &str) -> ExpectationBuilder<T, Option<Vec<T>>> {
        let key = format!("{scope}/{key}");
        self.builder(move |state, scripted| {
            state.lists.insert(key, scripted);
        })
    }

    /// Scripts the reply for every `create`.
    pub fn expect_create(&self) -> ExpectationBuilder<T, Option<T>> {
        self.builder(|state, scripted| state.create = Some(scripted))
    }

    /// Scripts the reply for `invoke(action, ..)`.
    pub fn expect_invoke(&self, action: &str) -> ExpectationBuilder<T, Option<T>> {
        let action = action.to_string();
        self.builder(move |state, scripted| {
            state.invokes.insert(action, scripted);
        })
    }

    /// Scripts the reply for every `update`.
    pub fn expect_update(&self) -> ExpectationBuilder<T, bool> {
        self.builder(|state, scripted| state.update = Some(scripted))
    }

    /// Scripts the reply for every `delete`.
    pub fn expect_delete(&self) -> ExpectationBuilder<T, bool> {
        self.builder(|state, scripted| state.delete = Some(scripted))
    }

    /// Number of calls of the given kind received so far.
    pub fn calls(&self, operation: Operation) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|(op, _)| *op == operation)
            .count()
    }

    /// Number of calls of the given kind addressed to `key` (an id, an action or `scope/key`).
    pub fn calls_to(&self, operation: Operation, key: &str) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|(op, k)| *op == operation && k == key)
            .count()
    }

    /// JSON bodies sent with calls of the given kind, in arrival order.
    pub fn bodies(&self, operation: Operation) -> Vec<Value> {
        self.lock()
            .bodies
            .iter()
            .filter(|(op, _)| *op == operation)
            .map(|(_, body)| body.clone())
            .collect()
    }

    fn builder<V>(
        &self,
        install: impl FnOnce(&mut MockState<T>, Scripted<V>) + Send + 'static,
    ) -> ExpectationBuilder<T, V> {
        ExpectationBuilder {
            state: self.state.clone(),
            install: Box::new(install),
            delay: None,
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, operation: Operation, key: String, body: Option<Value>) -> MutexGuard<'_, MockState<T>> {
        let mut state = self.lock();
        state.calls.push((operation, key));
        if let Some(body) = body {
            state.bodies.push((operation, body));
        }
        state
    }
}

/// Builder returned by the `expect_*` methods.
pub struct ExpectationBuilder<T: RemoteEntity, V> {
    state: Arc<Mutex<MockState<T>>>,
    install: Installer<T, V>,
    delay: Option<Duration>,
}

impl<T: RemoteEntity, V> ExpectationBuilder<T, V> {
    /// Delays the reply, e.g. to make completion order differ from issue order.
    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: V) {
        self.finish(Reply::Value(value));
    }

    /// Sets the expectation to fail as if the downstream answered `status` with `body`.
    pub fn return_err(self, status: u16, body: impl Into<String>) {
        self.finish(Reply::Fail {
            status,
            body: body.into(),
        });
    }

    fn finish(self, reply: Reply<V>) {
        let Self {
            state,
            install,
            delay,
        } = self;
        let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
        install(&mut state, Scripted { reply, delay });
    }
}

fn to_body<B: serde::Serialize + ?Sized>(body: &B) -> Value {
    serde_json::to_value(body).unwrap_or(Value::Null)
}

async fn answer<V>(scripted: Option<Scripted<V>>, default: V) -> ClientResult<V> {
    match scripted {
        Some(scripted) => scripted.resolve().await,
        None => Ok(default),
    }
}

#[async_trait]
impl<T: RemoteEntity> Resource<T> for MockResource<T> {
    async fn get(&self, id: &T::Id) -> ClientResult<Option<T>> {
        let key = id.to_string();
        let scripted = self.record(Operation::Get, key.clone(), None).gets.get(&key).cloned();
        answer(scripted, None).await
    }

    async fn list(&self) -> ClientResult<Option<Vec<T>>> {
        let scripted = self.record(Operation::List, String::new(), None).lists.get("").cloned();
        answer(scripted, None).await
    }

    async fn list_by(&self, scope: &str, key: &str) -> ClientResult<Option<Vec<T>>> {
        let key = format!("{scope}/{key}");
        let scripted = self.record(Operation::ListBy, key.clone(), None).lists.get(&key).cloned();
        answer(scripted, None).await
    }

    async fn create(&self, params: &T::Create) -> ClientResult<Option<T>> {
        let scripted = self
            .record(Operation::Create, String::new(), Some(to_body(params)))
            .create
            .clone();
        answer(scripted, None).await
    }

    async fn invoke(&self, action: &str, body: Value) -> ClientResult<Option<T>> {
        let scripted = self
            .record(Operation::Invoke, action.to_string(), Some(body))
            .invokes
            .get(action)
            .cloned();
        answer(scripted, None).await
    }

    async fn update(&self, id: &T::Id, update: &T::Update) -> ClientResult<bool> {
        let scripted = self
            .record(Operation::Update, id.to_string(), Some(to_body(update)))
            .update
            .clone();
        answer(scripted, false).await
    }

    async fn delete(&self, id: &T::Id) -> ClientResult<bool> {
        let scripted = self.record(Operation::Delete, id.to_string(), None).delete.clone();
        answer(scripted, false).await
    }
}
