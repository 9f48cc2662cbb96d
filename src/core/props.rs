//! Property table projection: one display row per documented property.

use crate::Lang;
use crate::catalog::{NO_DEFAULT, PropertyRecord};

/// Default value column. The `"-"` sentinel becomes `NoDefault`; every
/// other label, including the empty string, is a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    NoDefault,
    Literal(String),
}

/// Allowed values column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choices {
    Unspecified,
    Values(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyRow {
    pub name: String,
    pub description: String,
    pub type_label: String,
    pub default: DefaultValue,
    pub choices: Choices,
}

/// Projects properties into rows in stored order.
pub fn project(props: &[PropertyRecord], lang: Lang) -> Vec<PropertyRow> {
    props
        .iter()
        .map(|prop| PropertyRow {
            name: prop.name.clone(),
            description: prop.description.get(lang).to_string(),
            type_label: prop.type_label.clone(),
            default: if prop.default_label == NO_DEFAULT {
                DefaultValue::NoDefault
            } else {
                DefaultValue::Literal(prop.default_label.clone())
            },
            choices: match &prop.options {
                Some(values) if !values.is_empty() => Choices::Values(values.clone()),
                _ => Choices::Unspecified,
            },
        })
        .collect()
}

/// Localized column headers: name, description, type, default, options.
pub fn headers(lang: Lang) -> [&'static str; 5] {
    match lang {
        Lang::Zh => ["属性名", "说明", "类型", "默认值", "可选值"],
        Lang::En => ["Property Name", "Description", "Type", "Default Value", "Options"],
    }
}
