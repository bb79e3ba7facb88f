/// 内存文档：不依赖浏览器的界面区域实现
use super::{BindError, Region, RegionIds, View};
use crate::markup::{escape_html, Fragment};

/// 元素显示状态（对应 `style.display`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    None,
}

impl Display {
    pub fn from_visible(visible: bool) -> Self {
        if visible { Display::Block } else { Display::None }
    }

    pub fn as_css(&self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Input,
    Div,
}

#[derive(Debug, Clone)]
pub struct Element {
    pub id: String,
    pub tag: Tag,
    /// 输入框的值（仅 Input 使用）
    pub value: String,
    pub display: Display,
    pub children: Vec<Fragment>,
}

impl Element {
    fn new(id: &str, tag: Tag, display: Display) -> Self {
        Self {
            id: id.to_string(),
            tag,
            value: String::new(),
            display,
            children: Vec::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.display == Display::Block
    }

    /// 子片段标记拼接
    pub fn inner_html(&self) -> String {
        self.children.iter().map(|f| f.html.as_str()).collect()
    }

    fn to_html(&self) -> String {
        match self.tag {
            Tag::Input => format!(
                r#"<input id="{}" value="{}" style="display: {}">"#,
                self.id,
                escape_html(&self.value),
                self.display.as_css()
            ),
            Tag::Div => format!(
                r#"<div id="{}" style="display: {}">{}</div>"#,
                self.id,
                self.display.as_css(),
                self.inner_html()
            ),
        }
    }
}

/// 宿主页面
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    /// 按区域标识创建完整页面，错误提示默认隐藏
    pub fn new(ids: &RegionIds) -> Self {
        let mut doc = Self::default();
        for region in Region::ALL {
            let (tag, display) = match region {
                Region::Search => (Tag::Input, Display::Block),
                Region::Error => (Tag::Div, Display::None),
                _ => (Tag::Div, Display::Block),
            };
            doc.insert(Element::new(ids.get(region), tag, display));
        }
        doc
    }

    /// 插入元素，同 id 的元素会被替换
    pub fn insert(&mut self, element: Element) {
        self.remove(&element.id);
        self.elements.push(element);
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        let pos = self.elements.iter().position(|e| e.id == id)?;
        Some(self.elements.remove(pos))
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn get_element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// 序列化整个页面
    pub fn to_html(&self) -> String {
        let body: Vec<String> = self
            .elements
            .iter()
            .map(|e| format!("  {}", e.to_html()))
            .collect();
        format!("<body>\n{}\n</body>\n", body.join("\n"))
    }
}

/// 已绑定六个区域的文档视图
#[derive(Debug, Clone)]
pub struct DocumentView {
    doc: Document,
    ids: RegionIds,
}

impl DocumentView {
    /// 解析全部区域，缺任何一个都返回错误
    pub fn bind(doc: Document, ids: &RegionIds) -> Result<Self, BindError> {
        for region in Region::ALL {
            let id = ids.get(region);
            if doc.get_element_by_id(id).is_none() {
                return Err(BindError::MissingRegion {
                    region,
                    id: id.to_string(),
                });
            }
        }
        Ok(Self {
            doc,
            ids: ids.clone(),
        })
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn element(&self, region: Region) -> Option<&Element> {
        self.doc.get_element_by_id(self.ids.get(region))
    }

    fn element_mut(&mut self, region: Region) -> Option<&mut Element> {
        self.doc.get_element_by_id_mut(self.ids.get(region))
    }

    /// 容器中的片段
    pub fn fragments(&self, region: Region) -> &[Fragment] {
        self.element(region).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    #[cfg(test)]
    pub fn inner_html(&self, region: Region) -> String {
        self.element(region).map(|e| e.inner_html()).unwrap_or_default()
    }
}

impl View for DocumentView {
    fn input_value(&self) -> String {
        self.element(Region::Search)
            .map(|e| e.value.clone())
            .unwrap_or_default()
    }

    fn set_input_value(&mut self, value: &str) {
        if let Some(e) = self.element_mut(Region::Search) {
            e.value = value.to_string();
        }
    }

    fn set_visible(&mut self, region: Region, visible: bool) {
        if let Some(e) = self.element_mut(region) {
            e.display = Display::from_visible(visible);
        }
    }

    fn is_visible(&self, region: Region) -> bool {
        self.element(region).is_some_and(|e| e.is_visible())
    }

    fn set_content(&mut self, region: Region, fragments: Vec<Fragment>) {
        if let Some(e) = self.element_mut(region) {
            e.children = fragments;
        }
    }
}
