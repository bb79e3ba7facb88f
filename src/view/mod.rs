/// 界面区域抽象
///
/// 控制器只通过 `View` 操作界面，具体宿主（内存文档、终端界面）各自实现
pub mod document;

use crate::markup::Fragment;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use document::{Display, Document, DocumentView, Element};

/// 六个界面区域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// 输入框（添加与过滤共用）
    Search,
    /// 错误提示条
    Error,
    /// 置顶任务容器
    PinnedTasks,
    /// 未置顶任务容器
    AllTasks,
    /// 无置顶任务占位
    NoPinned,
    /// 无匹配任务占位
    NoTasks,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Search,
        Region::Error,
        Region::PinnedTasks,
        Region::AllTasks,
        Region::NoPinned,
        Region::NoTasks,
    ];
}

/// 各区域的标识符
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionIds {
    pub search: String,
    pub error: String,
    pub pinned_tasks: String,
    pub all_tasks: String,
    pub no_pinned: String,
    pub no_tasks: String,
}

impl Default for RegionIds {
    fn default() -> Self {
        Self {
            search: "search".to_string(),
            error: "error".to_string(),
            pinned_tasks: "pinned-tasks".to_string(),
            all_tasks: "all-tasks".to_string(),
            no_pinned: "no-pinned".to_string(),
            no_tasks: "no-tasks".to_string(),
        }
    }
}

impl RegionIds {
    pub fn get(&self, region: Region) -> &str {
        match region {
            Region::Search => &self.search,
            Region::Error => &self.error,
            Region::PinnedTasks => &self.pinned_tasks,
            Region::AllTasks => &self.all_tasks,
            Region::NoPinned => &self.no_pinned,
            Region::NoTasks => &self.no_tasks,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    #[error("界面区域 {region:?} 未找到（id = \"{id}\"）")]
    MissingRegion { region: Region, id: String },
}

/// 控制器所需的界面能力
pub trait View {
    /// 输入框当前内容
    fn input_value(&self) -> String;
    fn set_input_value(&mut self, value: &str);
    /// 显示或隐藏某个区域
    fn set_visible(&mut self, region: Region, visible: bool);
    fn is_visible(&self, region: Region) -> bool;
    /// 替换容器内容
    fn set_content(&mut self, region: Region, fragments: Vec<Fragment>);
}
