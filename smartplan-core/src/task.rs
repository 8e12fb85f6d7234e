//! Personal task list.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PlanError, PlanResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Priority {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(PlanError::Validation(format!(
                "Invalid priority '{other}'. Expected high, medium or low"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub deadline: NaiveDate,
    pub status: TaskStatus,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    #[serde(default)]
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        TaskList { tasks }
    }

    pub fn add(&mut self, title: &str, priority: Priority, deadline: NaiveDate) -> PlanResult<&Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(PlanError::Validation("Task title cannot be empty".into()));
        }

        self.tasks.push(Task {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            priority,
            deadline,
            status: TaskStatus::Pending,
        });
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Flip completion: a completed task goes back to pending, anything else
    /// becomes completed.
    pub fn toggle(&mut self, id: &str) -> PlanResult<&Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| PlanError::TaskNotFound(id.to_string()))?;

        task.status = match task.status {
            TaskStatus::Completed => TaskStatus::Pending,
            TaskStatus::Pending | TaskStatus::InProgress => TaskStatus::Completed,
        };

        tracing::debug!(id, status = ?task.status, "toggled task");
        Ok(&*task)
    }

    /// Move a task's deadline. The status is left as it is.
    pub fn reschedule(&mut self, id: &str, deadline: NaiveDate) -> PlanResult<&Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| PlanError::TaskNotFound(id.to_string()))?;

        tracing::debug!(id, from = %task.deadline, to = %deadline, "rescheduled task");
        task.deadline = deadline;
        Ok(&*task)
    }

    pub fn get(&self, id: &str) -> PlanResult<&Task> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| PlanError::TaskNotFound(id.to_string()))
    }

    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Open tasks, most urgent deadline first.
    pub fn pending(&self) -> Vec<&Task> {
        let mut open: Vec<&Task> = self.tasks.iter().filter(|t| !t.is_completed()).collect();
        open.sort_by_key(|t| (t.deadline, t.priority));
        open
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed()).count()
    }

    pub fn seed() -> Self {
        let date = |d: u32| NaiveDate::from_ymd_opt(2026, 1, d).unwrap_or_default();
        TaskList::new(vec![
            Task {
                id: "1".into(),
                title: "Подготовить презентацию для клиента".into(),
                priority: Priority::High,
                deadline: date(18),
                status: TaskStatus::InProgress,
            },
            Task {
                id: "2".into(),
                title: "Проверить код новой фичи".into(),
                priority: Priority::Medium,
                deadline: date(20),
                status: TaskStatus::Pending,
            },
            Task {
                id: "3".into(),
                title: "Обновить документацию API".into(),
                priority: Priority::Low,
                deadline: date(25),
                status: TaskStatus::Pending,
            },
        ])
    }
}
