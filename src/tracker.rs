/// 任务列表控制器
///
/// 持有全部任务，把输入框与两个列表容器的事件转换为状态变更，
/// 每次变更后重新渲染列表。
use crate::clock::{Clock, SystemClock};
use crate::markup::{ClickTarget, Fragment, PIN_BUTTON_CLASS};
use crate::models::{Task, TaskId, TaskIdGenerator};
use crate::view::{Region, View};
use std::time::{Duration, Instant};

/// 回车键名
pub const ENTER_KEY: &str = "Enter";

/// 错误提示默认显示时长
pub const DEFAULT_ERROR_TIMEOUT: Duration = Duration::from_millis(2000);

/// 界面事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// 按键（key 为按键名，如 "Enter"、"a"）
    KeyPress { region: Region, key: String },
    /// 输入框内容变化
    Input { region: Region },
    /// 点击，target 为实际被点中的元素
    Click { region: Region, target: ClickTarget },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerOptions {
    pub error_timeout: Duration,
    /// 是否转义任务文本
    pub escape_html: bool,
}

impl Default for TrackerOptions {
    fn default() -> Self {
        Self {
            error_timeout: DEFAULT_ERROR_TIMEOUT,
            escape_html: false,
        }
    }
}

pub struct TaskTracker<V: View, C: Clock = SystemClock> {
    tasks: Vec<Task>,
    view: V,
    clock: C,
    ids: TaskIdGenerator,
    options: TrackerOptions,
    /// 错误提示的隐藏时间，新的错误会替换旧的
    error_hide_at: Option<Instant>,
}

impl<V: View> TaskTracker<V> {
    pub fn new(view: V, options: TrackerOptions) -> Self {
        Self::with_clock(view, SystemClock, options)
    }
}

impl<V: View, C: Clock> TaskTracker<V, C> {
    /// 创建控制器并完成首次渲染
    pub fn with_clock(view: V, clock: C, options: TrackerOptions) -> Self {
        let mut tracker = Self {
            tasks: Vec::new(),
            view,
            clock,
            ids: TaskIdGenerator::new(),
            options,
            error_hide_at: None,
        };
        tracker.filter_tasks();
        tracker
    }

    /// 事件分发，未绑定的 (区域, 事件) 组合直接忽略
    pub fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::KeyPress {
                region: Region::Search,
                key,
            } => self.handle_add_task(&key),
            UiEvent::Input {
                region: Region::Search,
            } => self.filter_tasks(),
            UiEvent::Click {
                region: Region::PinnedTasks | Region::AllTasks,
                target,
            } => self.handle_pin(&target),
            other => tracing::trace!(?other, "未绑定的事件"),
        }
    }

    /// 输入框按键：回车添加任务
    pub fn handle_add_task(&mut self, key: &str) {
        if key != ENTER_KEY {
            return;
        }

        let text = self.view.input_value().trim().to_string();
        if text.is_empty() {
            self.show_error();
            return;
        }

        let id = self.add_task(text);
        tracing::info!(id, "添加任务");
        self.view.set_input_value("");
        self.hide_error();
        self.filter_tasks();
    }

    /// 追加任务，不校验也不渲染
    pub fn add_task(&mut self, text: impl Into<String>) -> TaskId {
        let id = self.ids.next_id();
        self.tasks.push(Task::new(id, text.into()));
        id
    }

    /// 显示错误提示，超时后由 `tick` 隐藏
    pub fn show_error(&mut self) {
        self.view.set_visible(Region::Error, true);
        self.error_hide_at = Some(self.clock.now() + self.options.error_timeout);
        tracing::debug!("任务内容为空");
    }

    fn hide_error(&mut self) {
        self.view.set_visible(Region::Error, false);
        self.error_hide_at = None;
    }

    /// 处理到期的定时隐藏
    pub fn tick(&mut self) {
        if let Some(hide_at) = self.error_hide_at {
            if self.clock.now() >= hide_at {
                self.hide_error();
            }
        }
    }

    pub fn error_visible(&self) -> bool {
        self.view.is_visible(Region::Error)
    }

    /// 按输入框内容过滤并渲染
    pub fn filter_tasks(&mut self) {
        let filter = self.view.input_value().to_lowercase();
        let (pinned, matching) = partition_tasks(&self.tasks, &filter);
        render_tasks(&mut self.view, &pinned, &matching, self.options.escape_html);
    }

    /// 列表点击：切换置顶
    pub fn handle_pin(&mut self, target: &ClickTarget) {
        if !target.has_class(PIN_BUTTON_CLASS) {
            return;
        }

        let Some(id) = target
            .data_id
            .as_deref()
            .and_then(|raw| raw.trim().parse::<TaskId>().ok())
        else {
            tracing::warn!(data_id = ?target.data_id, "置顶按钮缺少有效的任务 ID");
            return;
        };

        match self.toggle_pin(id) {
            Some(pinned) => {
                tracing::info!(id, pinned, "切换置顶");
                self.filter_tasks();
            }
            None => tracing::warn!(id, "任务未找到"),
        }
    }

    fn toggle_pin(&mut self, id: TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        task.pinned = !task.pinned;
        Some(task.pinned)
    }

    /// 写入输入框并触发 input 事件
    pub fn set_input(&mut self, value: &str) {
        self.view.set_input_value(value);
        self.dispatch(UiEvent::Input {
            region: Region::Search,
        });
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find_task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    #[cfg(test)]
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

/// 拆分为 (置顶, 未置顶且匹配)，过滤串需已转小写；置顶任务不参与过滤
pub fn partition_tasks<'a>(tasks: &'a [Task], filter: &str) -> (Vec<&'a Task>, Vec<&'a Task>) {
    let pinned: Vec<&Task> = tasks.iter().filter(|t| t.pinned).collect();
    let matching: Vec<&Task> = tasks
        .iter()
        .filter(|t| !t.pinned && t.text.to_lowercase().contains(filter))
        .collect();
    (pinned, matching)
}

/// 重新生成两个容器的内容并切换占位提示
pub fn render_tasks<V: View>(view: &mut V, pinned: &[&Task], matching: &[&Task], escape: bool) {
    let to_fragments = |tasks: &[&Task]| -> Vec<Fragment> {
        tasks.iter().map(|t| Fragment::from_task(t, escape)).collect()
    };

    view.set_content(Region::PinnedTasks, to_fragments(pinned));
    view.set_content(Region::AllTasks, to_fragments(matching));

    view.set_visible(Region::NoPinned, pinned.is_empty());
    view.set_visible(Region::NoTasks, matching.is_empty());
}
