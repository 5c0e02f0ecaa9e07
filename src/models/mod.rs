use serde::{Deserialize, Serialize};

/// Identity assigned by the real-time backend's storage layer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub String);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    pub author: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldDef {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: FieldType,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableDef {
    pub name: &'static str,
    pub fields: Vec<FieldDef>,
}

/// Schema handed to the real-time backend at startup
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    pub tables: Vec<TableDef>,
}

impl Schema {
    pub fn table(&self, name: &str) -> Option<&TableDef> {
        self.tables.iter().find(|t| t.name == name)
    }
}

pub fn schema() -> Schema {
    Schema {
        tables: vec![TableDef {
            name: "messages",
            fields: vec![FieldDef {
                name: "author",
                kind: FieldType::String,
            }],
        }],
    }
}
