//! Hand-written fakes shared by unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::config::settings::SettingsProvider;
use crate::error::{ConfigurationError, ProxyResult};
use crate::http::executor::RestExecutor;
use crate::http::transport::{HttpCall, HttpOutcome, Transport};
use crate::routing::descriptor::{HttpVerb, ResponseType};

/// Transport that records calls and replays queued outcomes.
#[derive(Default)]
pub struct FakeTransport {
    outcomes: Mutex<VecDeque<HttpOutcome>>,
    calls: Mutex<Vec<HttpCall>>,
}

impl FakeTransport {
    pub fn returning(outcome: HttpOutcome) -> Arc<Self> {
        Self::returning_many(vec![outcome])
    }

    pub fn returning_many(outcomes: Vec<HttpOutcome>) -> Arc<Self> {
        Arc::new(Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<HttpCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn execute(&self, call: HttpCall) -> HttpOutcome {
        self.calls.lock().unwrap().push(call);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| HttpOutcome::failed("no outcome queued"))
    }
}

/// Settings backed by a plain map.
#[derive(Default)]
pub struct FakeSettings {
    values: HashMap<String, String>,
}

impl FakeSettings {
    pub fn with(key: &str, value: &str) -> Arc<Self> {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Arc::new(Self { values })
    }
}

impl SettingsProvider for FakeSettings {
    fn get_base_url(&self, key: &str) -> Result<String, ConfigurationError> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigurationError::MissingSetting {
                setting: key.to_string(),
            })
    }
}

/// One call seen by [`RecordingExecutor`].
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorCall {
    pub verb: HttpVerb,
    pub base_url: String,
    pub resource_url: String,
    pub request: Option<Value>,
    pub response_type: Option<ResponseType>,
}

/// Executor that records its calls and answers with a fixed value.
#[derive(Default)]
pub struct RecordingExecutor {
    response: Option<Value>,
    calls: Mutex<Vec<ExecutorCall>>,
}

impl RecordingExecutor {
    pub fn answering(response: Option<Value>) -> Arc<Self> {
        Arc::new(Self {
            response,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<ExecutorCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(
        &self,
        verb: HttpVerb,
        base_url: &str,
        resource_url: &str,
        request: Option<&Value>,
        response_type: Option<ResponseType>,
    ) {
        self.calls.lock().unwrap().push(ExecutorCall {
            verb,
            base_url: base_url.to_string(),
            resource_url: resource_url.to_string(),
            request: request.cloned(),
            response_type,
        });
    }
}

#[async_trait]
impl RestExecutor for RecordingExecutor {
    async fn get(
        &self,
        base_url: &str,
        resource_url: &str,
        request: Option<&Value>,
        response_type: Option<ResponseType>,
    ) -> ProxyResult<Option<Value>> {
        self.record(HttpVerb::Get, base_url, resource_url, request, response_type);
        Ok(self.response.clone())
    }

    async fn post(
        &self,
        base_url: &str,
        resource_url: &str,
        request: Option<&Value>,
        response_type: Option<ResponseType>,
    ) -> ProxyResult<Option<Value>> {
        self.record(HttpVerb::Post, base_url, resource_url, request, response_type);
        Ok(self.response.clone())
    }

    async fn put(
        &self,
        base_url: &str,
        resource_url: &str,
        request: Option<&Value>,
        response_type: Option<ResponseType>,
    ) -> ProxyResult<Option<Value>> {
        self.record(HttpVerb::Put, base_url, resource_url, request, response_type);
        Ok(self.response.clone())
    }

    async fn delete(
        &self,
        base_url: &str,
        resource_url: &str,
        request: Option<&Value>,
    ) -> ProxyResult<()> {
        self.record(HttpVerb::Delete, base_url, resource_url, request, None);
        Ok(())
    }
}
