//! # Preview Registry
//!
//! Maps a component id to the strategy used to sketch its live preview.
//! Ids without an entry fall back to the showcase strategy, which shows a
//! mix of common controls.
//!
//! A sketch is a list of [`PreviewBlock`]s: mock widgets with localized
//! labels. The TUI decides how to draw them.

use std::collections::HashMap;

use crate::Lang;
use crate::catalog::ComponentRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    Buttons,
    Inputs,
    Grid,
    Menu,
    Form,
    Table,
    Modal,
    Showcase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Default,
    Dashed,
    Text,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Loading,
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockButton {
    pub label: String,
    pub variant: ButtonVariant,
    pub state: ButtonState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Search,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockField {
    pub label: Option<String>,
    pub placeholder: String,
    pub kind: FieldKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockControl {
    Switch { on: String, off: String, checked: bool },
    Select { options: Vec<String>, selected: usize },
    Checkboxes { options: Vec<String>, checked: Vec<usize> },
    DatePicker { placeholder: String },
    Slider { label: String, value: u8 },
    Progress(u8),
    Badge(u32),
    Avatar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewBlock {
    Buttons(Vec<MockButton>),
    Fields(Vec<MockField>),
    /// Each row lists column spans out of 24.
    Grid(Vec<Vec<u8>>),
    Menu {
        items: Vec<String>,
        selected: usize,
        horizontal: bool,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        page_size: usize,
    },
    Dialog {
        title: String,
        body: String,
        ok: String,
        cancel: String,
    },
    Alert {
        title: String,
        body: String,
    },
    Controls {
        title: String,
        controls: Vec<MockControl>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewSketch {
    pub kind: PreviewKind,
    pub blocks: Vec<PreviewBlock>,
}

pub struct PreviewRegistry {
    entries: HashMap<String, PreviewKind>,
    fallback: PreviewKind,
}

impl Default for PreviewRegistry {
    fn default() -> Self {
        let mut registry = Self::empty(PreviewKind::Showcase);
        registry.register("button", PreviewKind::Buttons);
        registry.register("input", PreviewKind::Inputs);
        registry.register("grid", PreviewKind::Grid);
        registry.register("menu", PreviewKind::Menu);
        registry.register("form", PreviewKind::Form);
        registry.register("table", PreviewKind::Table);
        registry.register("modal", PreviewKind::Modal);
        registry
    }
}

impl PreviewRegistry {
    pub fn empty(fallback: PreviewKind) -> Self {
        Self {
            entries: HashMap::new(),
            fallback,
        }
    }

    pub fn register(&mut self, id: impl Into<String>, kind: PreviewKind) {
        self.entries.insert(id.into(), kind);
    }

    pub fn fallback(&self) -> PreviewKind {
        self.fallback
    }

    pub fn kind_for(&self, id: &str) -> PreviewKind {
        self.entries.get(id).copied().unwrap_or(self.fallback)
    }

    /// Registered ids, sorted.
    pub fn registered_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn sketch(&self, component: &ComponentRecord, lang: Lang) -> PreviewSketch {
        let kind = self.kind_for(&component.id);
        let blocks = match kind {
            PreviewKind::Buttons => buttons(lang),
            PreviewKind::Inputs => inputs(lang),
            PreviewKind::Grid => vec![PreviewBlock::Grid(vec![vec![12, 12], vec![8, 8, 8]])],
            PreviewKind::Menu => menu(lang),
            PreviewKind::Form => form(lang),
            PreviewKind::Table => table(lang),
            PreviewKind::Modal => modal(lang),
            PreviewKind::Showcase => showcase(component, lang),
        };
        PreviewSketch { kind, blocks }
    }
}

fn button(label: &str, variant: ButtonVariant, state: ButtonState) -> MockButton {
    MockButton {
        label: label.to_string(),
        variant,
        state,
    }
}

fn field(label: Option<&str>, placeholder: &str, kind: FieldKind) -> MockField {
    MockField {
        label: label.map(str::to_string),
        placeholder: placeholder.to_string(),
        kind,
    }
}

fn buttons(lang: Lang) -> Vec<PreviewBlock> {
    use ButtonState::*;
    use ButtonVariant::*;
    vec![PreviewBlock::Buttons(vec![
        button(lang.pick("主要按钮", "Primary Button"), Primary, Normal),
        button(lang.pick("默认按钮", "Default Button"), Default, Normal),
        button(lang.pick("虚线按钮", "Dashed Button"), Dashed, Normal),
        button(lang.pick("文字按钮", "Text Button"), Text, Normal),
        button(lang.pick("链接按钮", "Link Button"), Link, Normal),
        button(lang.pick("加载中", "Loading"), Primary, Loading),
        button(lang.pick("禁用按钮", "Disabled Button"), Primary, Disabled),
    ])]
}

fn inputs(lang: Lang) -> Vec<PreviewBlock> {
    vec![PreviewBlock::Fields(vec![
        field(None, lang.pick("请输入内容", "Please input"), FieldKind::Text),
        field(
            None,
            lang.pick("请输入多行文本", "Please input multiple lines"),
            FieldKind::TextArea,
        ),
        field(None, lang.pick("搜索", "Search"), FieldKind::Search),
        field(
            None,
            lang.pick("请输入密码", "Please input password"),
            FieldKind::Password,
        ),
    ])]
}

fn menu(lang: Lang) -> Vec<PreviewBlock> {
    let items: Vec<String> = (1..=3)
        .map(|n| match lang {
            Lang::Zh => format!("菜单项 {n}"),
            Lang::En => format!("Menu Item {n}"),
        })
        .collect();
    vec![
        PreviewBlock::Menu {
            items: items.clone(),
            selected: 0,
            horizontal: true,
        },
        PreviewBlock::Menu {
            items,
            selected: 0,
            horizontal: false,
        },
    ]
}

fn form(lang: Lang) -> Vec<PreviewBlock> {
    vec![
        PreviewBlock::Fields(vec![
            field(
                Some(lang.pick("用户名", "Username")),
                lang.pick("请输入用户名", "Please input username"),
                FieldKind::Text,
            ),
            field(
                Some(lang.pick("密码", "Password")),
                lang.pick("请输入密码", "Please input password"),
                FieldKind::Password,
            ),
        ]),
        PreviewBlock::Buttons(vec![button(
            lang.pick("提交", "Submit"),
            ButtonVariant::Primary,
            ButtonState::Normal,
        )]),
    ]
}

fn table(lang: Lang) -> Vec<PreviewBlock> {
    let headers = vec![
        lang.pick("姓名", "Name").to_string(),
        lang.pick("年龄", "Age").to_string(),
        lang.pick("地址", "Address").to_string(),
    ];
    let rows = [
        ("John Brown", "32", "New York No. 1 Lake Park"),
        ("Jim Green", "42", "London No. 1 Lake Park"),
        ("Joe Black", "32", "Sidney No. 1 Lake Park"),
    ]
    .iter()
    .map(|(name, age, address)| vec![name.to_string(), age.to_string(), address.to_string()])
    .collect();
    vec![PreviewBlock::Table {
        headers,
        rows,
        page_size: 2,
    }]
}

fn modal(lang: Lang) -> Vec<PreviewBlock> {
    vec![
        PreviewBlock::Buttons(vec![button(
            lang.pick("显示对话框", "Show Modal"),
            ButtonVariant::Primary,
            ButtonState::Normal,
        )]),
        PreviewBlock::Dialog {
            title: lang.pick("对话框标题", "Modal Title").to_string(),
            body: lang.pick("这是一个对话框的内容", "This is modal content").to_string(),
            ok: lang.pick("确定", "OK").to_string(),
            cancel: lang.pick("取消", "Cancel").to_string(),
        },
    ]
}

fn showcase(component: &ComponentRecord, lang: Lang) -> Vec<PreviewBlock> {
    let body = match lang {
        Lang::Zh => format!("这是 {} 组件的交互式预览", component.name.zh),
        Lang::En => format!(
            "This is an interactive preview of {} component",
            component.name.en
        ),
    };
    let options = |zh: [&str; 3], en: [&str; 3]| -> Vec<String> {
        match lang {
            Lang::Zh => zh.iter().map(|s| s.to_string()).collect(),
            Lang::En => en.iter().map(|s| s.to_string()).collect(),
        }
    };
    vec![
        PreviewBlock::Alert {
            title: lang.pick("组件预览", "Component Preview").to_string(),
            body,
        },
        PreviewBlock::Controls {
            title: lang.pick("基础控件展示", "Basic Controls Display").to_string(),
            controls: vec![
                MockControl::Switch {
                    on: lang.pick("开", "On").to_string(),
                    off: lang.pick("关", "Off").to_string(),
                    checked: false,
                },
                MockControl::Select {
                    options: options(
                        ["选项1", "选项2", "选项3"],
                        ["Option 1", "Option 2", "Option 3"],
                    ),
                    selected: 0,
                },
                MockControl::Checkboxes {
                    options: options(
                        ["选项A", "选项B", "选项C"],
                        ["Option A", "Option B", "Option C"],
                    ),
                    checked: vec![0],
                },
                MockControl::DatePicker {
                    placeholder: lang.pick("选择日期", "Select date").to_string(),
                },
                MockControl::Slider {
                    label: lang.pick("滑块值: ", "Slider value: ").to_string(),
                    value: 30,
                },
                MockControl::Progress(30),
                MockControl::Badge(5),
                MockControl::Avatar,
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{component, sample_catalog};

    #[test]
    fn test_registered_kinds() {
        let registry = PreviewRegistry::default();
        assert_eq!(registry.kind_for("button"), PreviewKind::Buttons);
        assert_eq!(registry.kind_for("modal"), PreviewKind::Modal);
        assert_eq!(
            registry.registered_ids(),
            vec!["button", "form", "grid", "input", "menu", "modal", "table"]
        );
    }

    #[test]
    fn test_unregistered_falls_back_to_showcase() {
        let registry = PreviewRegistry::default();
        assert_eq!(registry.fallback(), PreviewKind::Showcase);
        assert_eq!(registry.kind_for("calendar"), PreviewKind::Showcase);
    }

    #[test]
    fn test_register_overrides() {
        let mut registry = PreviewRegistry::empty(PreviewKind::Showcase);
        registry.register("calendar", PreviewKind::Table);
        assert_eq!(registry.kind_for("calendar"), PreviewKind::Table);
        assert_eq!(registry.kind_for("button"), PreviewKind::Showcase);
    }

    #[test]
    fn test_button_sketch_localized() {
        let registry = PreviewRegistry::default();
        let catalog = sample_catalog();
        let button = catalog.find_component("button").unwrap();

        let zh = registry.sketch(button, Lang::Zh);
        let en = registry.sketch(button, Lang::En);
        let (PreviewBlock::Buttons(zh_buttons), PreviewBlock::Buttons(en_buttons)) =
            (&zh.blocks[0], &en.blocks[0])
        else {
            panic!("expected button blocks");
        };
        assert_eq!(zh_buttons[0].label, "主要按钮");
        assert_eq!(en_buttons[0].label, "Primary Button");
        assert_eq!(en_buttons[6].state, ButtonState::Disabled);
    }

    #[test]
    fn test_showcase_mentions_component_name() {
        let registry = PreviewRegistry::default();
        let mut record = component("slider", "entry");
        record.name.zh = "滑动输入条".to_string();
        record.name.en = "Slider".to_string();

        let sketch = registry.sketch(&record, Lang::En);
        assert_eq!(sketch.kind, PreviewKind::Showcase);
        match &sketch.blocks[0] {
            PreviewBlock::Alert { body, .. } => {
                assert_eq!(body, "This is an interactive preview of Slider component")
            }
            other => panic!("unexpected block: {other:?}"),
        }

        let sketch = registry.sketch(&record, Lang::Zh);
        match &sketch.blocks[0] {
            PreviewBlock::Alert { body, .. } => assert!(body.contains("滑动输入条")),
            other => panic!("unexpected block: {other:?}"),
        }
    }

    #[test]
    fn test_table_sketch_pages_by_two() {
        let registry = PreviewRegistry::default();
        let sketch = registry.sketch(&component("table", "display"), Lang::En);
        match &sketch.blocks[0] {
            PreviewBlock::Table {
                headers,
                rows,
                page_size,
            } => {
                assert_eq!(headers, &vec!["Name", "Age", "Address"]);
                assert_eq!(rows.len(), 3);
                assert_eq!(*page_size, 2);
            }
            other => panic!("unexpected block: {other:?}"),
        }
    }
}
