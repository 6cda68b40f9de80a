//! Task, subtask and summary endpoints.

use super::{decode_list, paths, Gateway, JoinClient};
use crate::libs::messages::Message;
use crate::libs::summary::Summary;
use crate::libs::task::{Subtask, Task, TaskData};
use crate::msg_error_anyhow;
use anyhow::Result;
use serde_json::{json, Value};

impl<G: Gateway> JoinClient<G> {
    /// Every task on the board. A refused load yields an empty board.
    pub async fn tasks(&self) -> Result<Vec<Task>> {
        decode_list(paths::TASKS, self.gateway.load(paths::TASKS).await?)
    }

    /// Creates a task and returns it with its backend id.
    pub async fn create_task(&self, data: &TaskData) -> Result<Task> {
        let answer = self.gateway.create(paths::TASKS, &serde_json::to_value(data)?).await?;
        Ok(serde_json::from_value(answer)?)
    }

    /// Stores the whole task under its id.
    pub async fn replace_task(&self, task: &Task) -> Result<Value> {
        self.gateway.replace(&paths::task(task.id), &serde_json::to_value(task)?).await
    }

    /// Rewrites only the assignee list of a task.
    pub async fn patch_task_assignees(&self, task_id: u64, assigned_to: &[u64]) -> Result<Value> {
        let body = json!({ "assignedTo": assigned_to });
        self.gateway.patch(&paths::task(task_id), &body).await
    }

    pub async fn delete_task(&self, task_id: u64) -> Result<bool> {
        self.gateway.delete(&paths::task(task_id)).await
    }

    pub async fn subtasks(&self) -> Result<Vec<Subtask>> {
        decode_list(paths::SUBTASKS, self.gateway.load(paths::SUBTASKS).await?)
    }

    /// Posts a subtask. Its `task` field must name the owning task.
    pub async fn create_subtask(&self, subtask: &Subtask) -> Result<Value> {
        self.gateway.create(paths::SUBTASKS, &serde_json::to_value(subtask)?).await
    }

    pub async fn replace_subtask(&self, subtask: &Subtask) -> Result<Value> {
        let id = subtask
            .id
            .ok_or_else(|| msg_error_anyhow!(Message::SubtaskWithoutId(subtask.title.clone())))?;
        self.gateway.replace(&paths::subtask(id), &serde_json::to_value(subtask)?).await
    }

    pub async fn delete_subtask(&self, subtask_id: u64) -> Result<bool> {
        self.gateway.delete(&paths::subtask(subtask_id)).await
    }

    /// Board counters, `None` when the backend refused.
    pub async fn summary(&self) -> Result<Option<Summary>> {
        match self.gateway.load(paths::SUMMARY).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }
}
