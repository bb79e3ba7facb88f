use crate::config::Config;
use crate::markup::Fragment;
use crate::tracker::{TaskTracker, UiEvent, ENTER_KEY};
use crate::ui::text_input::{InputAction, SearchInput};
use crate::view::{Document, DocumentView, Region, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// 当前聚焦的区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Pinned,
    All,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Pinned,
            Focus::Pinned => Focus::All,
            Focus::All => Focus::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Search => Focus::All,
            Focus::Pinned => Focus::Search,
            Focus::All => Focus::Pinned,
        }
    }

    /// 对应的列表容器
    pub fn list_region(self) -> Option<Region> {
        match self {
            Focus::Search => None,
            Focus::Pinned => Some(Region::PinnedTasks),
            Focus::All => Some(Region::AllTasks),
        }
    }
}

/// 应用模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// 正常模式
    Normal,
    /// 帮助模式 - 显示快捷键
    Help,
}

/// 应用状态
pub struct App {
    pub tracker: TaskTracker<DocumentView>,
    /// 搜索输入框（编辑状态）
    pub search: SearchInput,
    pub focus: Focus,
    pub mode: Mode,
    /// 置顶列表中选中的索引
    pub selected_pinned: usize,
    /// 任务列表中选中的索引
    pub selected_all: usize,
    pub config: Config,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: Config) -> Result<Self> {
        let document = Document::new(&config.regions);
        // 页面由同一组 id 生成，这里的绑定只对其他宿主构造的页面起作用
        let view = DocumentView::bind(document, &config.regions)?;
        let tracker = TaskTracker::new(view, config.tracker_options());

        tracing::info!(regions = ?config.regions, "界面区域绑定完成");

        Ok(Self {
            tracker,
            search: SearchInput::new(),
            focus: Focus::Search,
            mode: Mode::Normal,
            selected_pinned: 0,
            selected_all: 0,
            config,
        })
    }

    /// 处理键盘输入，返回 false 表示退出
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        crate::input::handle_key_input(self, key)
    }

    /// 定时任务（错误提示自动隐藏）
    pub fn tick(&mut self) {
        self.tracker.tick();
    }

    /// 搜索框按键：先发 keypress，内容变化再发 input
    pub fn search_key(&mut self, key: KeyEvent) {
        let key_name = match key.code {
            KeyCode::Enter => Some(ENTER_KEY.to_string()),
            KeyCode::Char(c) => Some(c.to_string()),
            _ => None,
        };
        if let Some(key_name) = key_name {
            self.tracker.dispatch(UiEvent::KeyPress {
                region: Region::Search,
                key: key_name,
            });
        }

        match self.search.handle_key(key) {
            InputAction::Edited => {
                let value = self.search.value();
                self.tracker.set_input(&value);
            }
            InputAction::Submit | InputAction::Continue => {}
        }

        // 添加成功后控制器会清空输入框
        let value = self.tracker.view().input_value();
        if value != self.search.value() {
            self.search.set_value(&value);
        }
        self.clamp_selection();
    }

    /// 聚焦列表中的片段
    pub fn fragments(&self, region: Region) -> &[Fragment] {
        self.tracker.view().fragments(region)
    }

    pub fn selected_index(&self, region: Region) -> usize {
        match region {
            Region::PinnedTasks => self.selected_pinned,
            _ => self.selected_all,
        }
    }

    fn selected_mut(&mut self, region: Region) -> &mut usize {
        match region {
            Region::PinnedTasks => &mut self.selected_pinned,
            _ => &mut self.selected_all,
        }
    }

    pub fn select_next(&mut self) {
        if let Some(region) = self.focus.list_region() {
            let len = self.fragments(region).len();
            let selected = self.selected_mut(region);
            *selected = (*selected + 1).min(len.saturating_sub(1));
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(region) = self.focus.list_region() {
            let selected = self.selected_mut(region);
            *selected = selected.saturating_sub(1);
        }
    }

    /// 点击选中任务的置顶按钮
    pub fn click_selected_pin(&mut self) {
        let Some(region) = self.focus.list_region() else {
            return;
        };
        let index = self.selected_index(region);
        let Some(target) = self.fragments(region).get(index).map(|f| f.button.clone()) else {
            return;
        };

        self.tracker.dispatch(UiEvent::Click { region, target });
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        for region in [Region::PinnedTasks, Region::AllTasks] {
            let len = self.fragments(region).len();
            let selected = self.selected_mut(region);
            *selected = (*selected).min(len.saturating_sub(1));
        }
    }
}
