#![allow(dead_code)]

use anyhow::Result;
use join::api::{Gateway, JoinClient};
use join::libs::contact::Contact;
use join::libs::task::Task;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

/// One request the code under test sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Default)]
struct State {
    calls: Vec<Call>,
    loads: HashMap<String, Value>,
    answers: HashMap<(&'static str, String), VecDeque<Value>>,
    refused_deletes: HashSet<String>,
    unreachable: HashSet<String>,
    token: Option<String>,
    next_id: u64,
}

/// In-memory backend.
///
/// `load` answers from [`MockGateway::on_load`] and refuses unknown paths.
/// Writing verbs answer from [`MockGateway::answer`] queues; without one,
/// `create` echoes the body with a fresh `id`, `replace` echoes it with the
/// id from the path and `patch` echoes it as is. Clones share the same state.
#[derive(Clone, Default)]
pub struct MockGateway {
    state: Arc<Mutex<State>>,
}

impl MockGateway {
    pub fn new() -> Self {
        let gateway = MockGateway::default();
        gateway.state.lock().next_id = 100;
        gateway
    }

    pub fn on_load(&self, path: &str, value: Value) -> &Self {
        self.state.lock().loads.insert(path.to_string(), value);
        self
    }

    pub fn answer(&self, method: &'static str, path: &str, value: Value) -> &Self {
        self.state
            .lock()
            .answers
            .entry((method, path.to_string()))
            .or_default()
            .push_back(value);
        self
    }

    pub fn refuse_delete(&self, path: &str) -> &Self {
        self.state.lock().refused_deletes.insert(path.to_string());
        self
    }

    /// Writes to `path` fail as if the connection dropped.
    pub fn unreachable(&self, path: &str) -> &Self {
        self.state.lock().unreachable.insert(path.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    /// Calls other than `GET`.
    pub fn writes(&self) -> Vec<Call> {
        self.calls().into_iter().filter(|c| c.method != "GET").collect()
    }

    pub fn calls_with(&self, method: &str) -> Vec<Call> {
        self.calls().into_iter().filter(|c| c.method == method).collect()
    }

    pub fn token(&self) -> Option<String> {
        self.state.lock().token.clone()
    }

    fn record(&self, method: &'static str, path: &str, body: Option<&Value>) {
        self.state.lock().calls.push(Call {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });
    }

    fn reach(&self, path: &str) -> Result<()> {
        if self.state.lock().unreachable.contains(path) {
            anyhow::bail!("connection refused: {}", path);
        }
        Ok(())
    }

    fn queued(&self, method: &'static str, path: &str) -> Option<Value> {
        self.state
            .lock()
            .answers
            .get_mut(&(method, path.to_string()))
            .and_then(VecDeque::pop_front)
    }
}

impl Gateway for MockGateway {
    async fn load(&self, path: &str) -> Result<Option<Value>> {
        self.record("GET", path, None);
        Ok(self.state.lock().loads.get(path).cloned())
    }

    async fn create(&self, path: &str, body: &Value) -> Result<Value> {
        self.record("POST", path, Some(body));
        self.reach(path)?;
        if let Some(answer) = self.queued("POST", path) {
            return Ok(answer);
        }
        let mut state = self.state.lock();
        state.next_id += 1;
        let mut echo = body.clone();
        if let Value::Object(map) = &mut echo {
            map.insert("id".to_string(), json!(state.next_id));
        }
        Ok(echo)
    }

    async fn replace(&self, path: &str, body: &Value) -> Result<Value> {
        self.record("PUT", path, Some(body));
        self.reach(path)?;
        if let Some(answer) = self.queued("PUT", path) {
            return Ok(answer);
        }
        let mut echo = body.clone();
        let id = path.rsplit('/').next().and_then(|segment| segment.parse::<u64>().ok());
        if let (Value::Object(map), Some(id)) = (&mut echo, id) {
            map.entry("id").or_insert(json!(id));
        }
        Ok(echo)
    }

    async fn patch(&self, path: &str, body: &Value) -> Result<Value> {
        self.record("PATCH", path, Some(body));
        Ok(self.queued("PATCH", path).unwrap_or_else(|| body.clone()))
    }

    async fn delete(&self, path: &str) -> Result<bool> {
        self.record("DELETE", path, None);
        Ok(!self.state.lock().refused_deletes.contains(path))
    }

    fn set_token(&self, token: Option<String>) {
        self.state.lock().token = token;
    }
}

pub fn client(gateway: &MockGateway) -> JoinClient<MockGateway> {
    JoinClient::new(gateway.clone())
}

pub fn contact(id: u64, name: &str, email: &str) -> Contact {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "email": email,
        "phone": "+49 170 1234567",
        "initials": join::libs::contact::initials(name),
        "color": "#ff7a00"
    }))
    .unwrap()
}

pub fn task(id: u64, title: &str, progress: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("{} description", title),
        "dueDate": "2030-05-01",
        "priority": "medium",
        "category": "Technical Task",
        "progress": progress,
        "assignedTo": [],
        "subtasks": []
    })
}

pub fn decode_task(value: &Value) -> Task {
    serde_json::from_value(value.clone()).unwrap()
}
