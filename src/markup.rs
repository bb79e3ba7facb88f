/// 任务片段的标记生成
use crate::models::Task;

/// 置顶按钮的 class
pub const PIN_BUTTON_CLASS: &str = "pin-btn";
/// 已置顶状态的 class
pub const PINNED_CLASS: &str = "pinned";

/// 点击目标（相当于 DOM 事件的 target）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub classes: Vec<String>,
    /// `data-id` 属性的原始值
    pub data_id: Option<String>,
}

impl ClickTarget {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// 某个任务的置顶按钮
    pub fn pin_button(task: &Task) -> Self {
        let mut classes = vec![PIN_BUTTON_CLASS.to_string()];
        if task.pinned {
            classes.push(PINNED_CLASS.to_string());
        }
        Self {
            classes,
            data_id: Some(task.id.to_string()),
        }
    }
}

/// 容器中的一个任务片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// 显示文本
    pub text: String,
    /// 置顶按钮
    pub button: ClickTarget,
    /// 片段标记
    pub html: String,
}

impl Fragment {
    pub fn from_task(task: &Task, escape: bool) -> Self {
        Self {
            text: task.text.clone(),
            button: ClickTarget::pin_button(task),
            html: create_task_html(task, escape),
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.button.has_class(PINNED_CLASS)
    }
}

/// 生成单个任务的标记
///
/// 默认原样插入任务文本，`escape` 为 true 时做实体转义
pub fn create_task_html(task: &Task, escape: bool) -> String {
    let text = if escape {
        escape_html(&task.text)
    } else {
        task.text.clone()
    };
    let class = if task.pinned {
        format!("{} {}", PIN_BUTTON_CLASS, PINNED_CLASS)
    } else {
        PIN_BUTTON_CLASS.to_string()
    };

    format!(
        r#"<div class="task-item">{}<button class="{}" data-id="{}"></button></div>"#,
        text, class, task.id
    )
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, text: &str, pinned: bool) -> Task {
        Task {
            id,
            text: text.to_string(),
            pinned,
        }
    }

    #[test]
    fn test_html_for_unpinned_task() {
        let html = create_task_html(&task(1, "Test task", false), false);
        assert!(html.contains("Test task"));
        assert!(html.contains(r#"data-id="1""#));
        assert!(html.contains(r#"class="pin-btn""#));
        assert!(!html.contains(r#"class="pin-btn pinned""#));
    }

    #[test]
    fn test_html_for_pinned_task() {
        let html = create_task_html(&task(1, "Test task", true), false);
        assert!(html.contains("Test task"));
        assert!(html.contains(r#"data-id="1""#));
        assert!(html.contains(r#"class="pin-btn pinned""#));
    }

    #[test]
    fn test_text_is_raw_unless_escaping() {
        let t = task(2, "<b>bold</b> & co", false);
        assert!(create_task_html(&t, false).contains("<b>bold</b> & co"));

        let escaped = create_task_html(&t, true);
        assert!(escaped.contains("&lt;b&gt;bold&lt;/b&gt; &amp; co"));
        assert!(!escaped.contains("<b>"));
    }

    #[test]
    fn test_fragment_pin_button() {
        let frag = Fragment::from_task(&task(42, "A", true), false);
        assert_eq!(frag.text, "A");
        assert!(frag.is_pinned());
        assert!(frag.button.has_class(PIN_BUTTON_CLASS));
        assert_eq!(frag.button.data_id.as_deref(), Some("42"));

        let frag = Fragment::from_task(&task(43, "B", false), false);
        assert!(!frag.is_pinned());
    }
}
