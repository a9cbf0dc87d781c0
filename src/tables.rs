// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Nexus Contributors

//! # Table Catalog
//!
//! Key schema and index layout for every DynamoDB table the backend uses.
//! Table names are resolved through [`Settings`] so the catalog follows the
//! deployment's naming pattern (and any per-table override) automatically.
//!
//! Key and index names are wire-level identifiers and stay camelCase.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// A secondary index on a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSpec {
    /// Index name as provisioned.
    pub name: String,
    /// Partition key attribute.
    pub partition_key: String,
    /// Sort key attribute, if the index has one.
    pub sort_key: Option<String>,
}

/// Key schema for a single table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    /// Resolved physical table name.
    pub name: String,
    /// Partition key attribute.
    pub partition_key: String,
    /// Sort key attribute, if the table has one.
    pub sort_key: Option<String>,
    /// Secondary indexes.
    pub indexes: Vec<IndexSpec>,
}

/// Catalog of all known tables for one deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCatalog {
    entries: Vec<(String, TableSpec)>,
}

impl TableCatalog {
    /// Build the catalog for the given settings.
    pub fn new(settings: &Settings) -> Self {
        let spec = |table_type: &str, pk: &str, sk: Option<&str>, indexes: Vec<IndexSpec>| {
            (
                table_type.to_string(),
                TableSpec {
                    name: settings.table_name(table_type),
                    partition_key: pk.to_string(),
                    sort_key: sk.map(str::to_string),
                    indexes,
                },
            )
        };
        let index = |name: &str, pk: &str, sk: Option<&str>| IndexSpec {
            name: name.to_string(),
            partition_key: pk.to_string(),
            sort_key: sk.map(str::to_string),
        };

        Self {
            entries: vec![
                spec(
                    "conversations",
                    "conversationId",
                    None,
                    vec![index("userId-createdAt-index", "userId", Some("createdAt"))],
                ),
                spec(
                    "prompts",
                    "promptId",
                    None,
                    vec![index("userId-index", "userId", Some("updatedAt"))],
                ),
                spec(
                    "usage",
                    "userId",
                    Some("usageDate#engineType"),
                    vec![index("date-index", "usageDate", Some("userId"))],
                ),
                spec("websocket_connections", "connectionId", None, vec![]),
                spec("files", "promptId", Some("fileId"), vec![]),
                spec("messages", "messageId", Some("conversationId"), vec![]),
            ],
        }
    }

    /// Look up the spec for a catalogued table type.
    pub fn get(&self, table_type: &str) -> Option<&TableSpec> {
        self.entries
            .iter()
            .find(|(kind, _)| kind == table_type)
            .map(|(_, spec)| spec)
    }

    /// Spec for any table type; uncatalogued types get a pattern-derived name
    /// and a plain `id` partition key.
    pub fn get_or_default(&self, table_type: &str, settings: &Settings) -> TableSpec {
        self.get(table_type).cloned().unwrap_or_else(|| TableSpec {
            name: settings.table_name(table_type),
            partition_key: "id".to_string(),
            sort_key: None,
            indexes: vec![],
        })
    }

    /// All catalogued `(table_type, physical_name)` pairs.
    pub fn all_names(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|(kind, spec)| (kind.as_str(), spec.name.as_str()))
            .collect()
    }
}
