//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::catalog::{
    Bilingual, Catalog, CatalogError, CatalogSource, ComponentRecord, PropertyRecord,
};
use crate::core::state::App;

/// A small catalog in the `GET /components` envelope format.
///
/// `basic` holds button then input, `layout` holds grid, `empty` has no
/// components.
pub fn sample_catalog_json() -> &'static str {
    r#"{
  "categories": {
    "basic": {
      "title": "基础组件 Basic Components",
      "components": [
        {
          "id": "button",
          "name": {"zh": "按钮", "en": "Button"},
          "description": {"zh": "用于触发操作的基础组件", "en": "Basic component for triggering actions"},
          "category": "basic",
          "props": [
            {"name": "type", "type": "string", "default": "default", "description": {"zh": "按钮类型", "en": "Button type"}, "options": ["primary", "default", "dashed"]},
            {"name": "href", "type": "string", "default": "", "description": {"zh": "跳转地址", "en": "Link target"}, "options": []},
            {"name": "onClick", "type": "function", "default": "-", "description": {"zh": "点击事件", "en": "Click event handler"}}
          ],
          "codeExample": "<Button type=\"primary\">主要按钮</Button>"
        },
        {
          "id": "input",
          "name": {"zh": "输入框", "en": "Input"},
          "description": {"zh": "基础的输入框组件", "en": "Basic input component"},
          "category": "basic",
          "props": [
            {"name": "placeholder", "type": "string", "default": "-", "description": {"zh": "占位符", "en": "Placeholder text"}}
          ],
          "codeExample": "<Input placeholder=\"请输入\" />"
        }
      ]
    },
    "layout": {
      "title": "布局组件 Layout Components",
      "components": [
        {
          "id": "grid",
          "name": {"zh": "栅格", "en": "Grid"},
          "description": {"zh": "24 栅格系统", "en": "24-column grid system"},
          "category": "layout",
          "props": [],
          "codeExample": "<Row><Col span={12}>col-12</Col></Row>"
        }
      ]
    },
    "empty": {
      "title": "空分类 Empty",
      "components": []
    }
  },
  "allComponents": []
}"#
}

pub fn sample_catalog() -> Catalog {
    Catalog::from_json(sample_catalog_json()).expect("sample catalog is valid")
}

/// Builds a minimal component filed under `category`.
pub fn component(id: &str, category: &str) -> ComponentRecord {
    ComponentRecord {
        id: id.to_string(),
        name: Bilingual::new(id, id),
        description: Bilingual::default(),
        category: category.to_string(),
        props: vec![],
        code_example: String::new(),
    }
}

pub fn property(name: &str, default_label: &str, options: Option<Vec<&str>>) -> PropertyRecord {
    PropertyRecord {
        name: name.to_string(),
        type_label: "string".to_string(),
        default_label: default_label.to_string(),
        description: Bilingual::new(format!("{name} 说明"), format!("{name} description")),
        options: options.map(|o| o.into_iter().map(str::to_string).collect()),
    }
}

/// Creates an App with the sample catalog already loaded.
pub fn loaded_app() -> App {
    let mut app = App::default();
    crate::core::action::update(
        &mut app,
        crate::core::action::Action::CatalogLoaded(sample_catalog()),
    );
    app
}

/// Serves a fixed result without any I/O.
pub struct StaticSource(pub Result<Catalog, CatalogError>);

#[async_trait]
impl CatalogSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn load_catalog(&self) -> Result<Catalog, CatalogError> {
        self.0.clone()
    }

    async fn get_component(&self, id: &str) -> Result<ComponentRecord, CatalogError> {
        self.0
            .clone()?
            .find_component(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    async fn list_categories(&self) -> Result<Vec<String>, CatalogError> {
        Ok(self.0.clone()?.category_keys().map(str::to_string).collect())
    }
}
