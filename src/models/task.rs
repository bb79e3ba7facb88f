use serde::{Deserialize, Serialize};

/// 任务 ID（毫秒时间戳，同一会话内唯一）
pub type TaskId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub pinned: bool,
}

impl Task {
    pub fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            pinned: false,
        }
    }
}

/// 任务 ID 生成器
///
/// 以当前毫秒时间戳为 ID，同一毫秒内连续创建时顺延，保证严格递增
#[derive(Debug, Default, Clone)]
pub struct TaskIdGenerator {
    last: Option<TaskId>,
}

impl TaskIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用系统时间生成下一个 ID
    pub fn next_id(&mut self) -> TaskId {
        let now_ms = chrono::Utc::now().timestamp_millis().max(0) as u64;
        self.next_at(now_ms)
    }

    /// 根据给定的毫秒时间戳生成下一个 ID
    pub fn next_at(&mut self, now_ms: u64) -> TaskId {
        let id = match self.last {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        };
        self.last = Some(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_unpinned() {
        let task = Task::new(1, "Test task".to_string());
        assert_eq!(task.text, "Test task");
        assert!(!task.pinned);
    }

    #[test]
    fn test_ids_follow_timestamps() {
        let mut ids = TaskIdGenerator::new();
        assert_eq!(ids.next_at(123), 123);
        assert_eq!(ids.next_at(456), 456);
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut ids = TaskIdGenerator::new();
        let a = ids.next_at(1000);
        let b = ids.next_at(1000);
        // 时钟回拨也不能产生重复 ID
        let c = ids.next_at(999);
        assert_eq!(a, 1000);
        assert_eq!(b, 1001);
        assert_eq!(c, 1002);
    }

    #[test]
    fn test_task_json_shape() {
        let task = Task::new(7, "Buy milk".to_string());
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(json, r#"{"id":7,"text":"Buy milk","pinned":false}"#);
    }
}
