/// 应用命令枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    // ===== 退出 =====
    Quit,

    // ===== 焦点 =====
    /// 切换到下一个区域
    FocusNext,
    /// 切换到上一个区域
    FocusPrev,
    /// 回到输入框
    FocusSearch,

    // ===== 任务操作 =====
    /// 选择上一个任务
    TaskUp,
    /// 选择下一个任务
    TaskDown,
    /// 切换选中任务的置顶状态
    TogglePin,

    // ===== 其他 =====
    /// 显示/关闭帮助
    ToggleHelp,
}

/// 帮助面板中展示的按键说明：(分组, [(按键, 说明)])
pub const KEY_HELP: &[(&str, &[(&str, &str)])] = &[
    (
        "输入框",
        &[
            ("Enter", "添加任务"),
            ("字符键", "输入并实时过滤"),
            ("←/→ Home End", "移动光标"),
        ],
    ),
    (
        "任务列表",
        &[
            ("j, ↓", "下一个任务"),
            ("k, ↑", "上一个任务"),
            ("Enter, Space, p", "置顶/取消置顶"),
            ("/, i", "回到输入框"),
            ("q", "退出程序"),
        ],
    ),
    (
        "通用",
        &[
            ("Tab / Shift+Tab", "切换区域"),
            ("?, F1", "显示帮助"),
            ("Esc, Ctrl+C", "退出程序"),
        ],
    ),
];
