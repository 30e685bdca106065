//! Dashboard collections and their table presets.
//!
//! Each collection has a record type read from JSON exports, a default set
//! of omitted columns, a link namespace and the renderers its dashboard
//! page uses.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Deserialize;
use wartaboard::{DataTable, DataTableBuilder, FieldEnum, Record, RowLink, TableConfig, Value};

use crate::dates::long_date;

/// Shown for members without a profile picture.
pub const DEFAULT_PROFILE_IMAGE: &str = "/default-profile.png";

/// A dashboard collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Collection {
    /// Weekly announcements (warta jemaat).
    Warta,
    /// Special church events.
    Event,
    /// Registered users.
    Member,
}

impl Collection {
    /// Returns the table settings of the collection's dashboard page.
    pub fn defaults(self) -> TableConfig {
        let (omit, target): (&[&str], &str) = match self {
            Collection::Warta => (&["id", "content"], "/dashboard/warta"),
            Collection::Event => (&["id"], "/dashboard/event"),
            Collection::Member => (
                &["banned", "banReason", "banExpiresAt", "id"],
                "/dashboard/member",
            ),
        };
        TableConfig {
            omit: omit.iter().map(|k| k.to_string()).collect(),
            target: Some(target.to_string()),
            ..TableConfig::default()
        }
    }
}

/// An announcement document.
#[derive(Debug, Clone, Deserialize, Record)]
#[serde(rename_all = "camelCase")]
#[record(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub title: String,
    pub hero_image: Option<String>,
    #[field(Display)]
    pub content: Option<serde_json::Value>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub meta_image: Option<String>,
    pub publish_date: Option<DateTime<Utc>>,
    pub author_id: Option<String>,
    pub slug: Option<String>,
    #[serde(default)]
    pub is_published: bool,
}

/// A special event.
#[derive(Debug, Clone, Deserialize, Record)]
#[serde(rename_all = "camelCase")]
#[record(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub event_name: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub poster_image: Option<String>,
}

/// Access level of a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Role {
    #[default]
    Member,
    Servant,
    Pastor,
    Admin,
}

impl FieldEnum for Role {
    fn field_label(&self) -> &'static str {
        match self {
            Role::Member => "Member",
            Role::Servant => "Servant",
            Role::Pastor => "Pastor",
            Role::Admin => "Admin",
        }
    }
}

/// A registered user.
#[derive(Debug, Clone, Deserialize, Record)]
#[serde(rename_all = "camelCase")]
#[record(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    #[field(Enum)]
    pub role: Role,
    pub banned: Option<bool>,
    pub ban_reason: Option<String>,
    pub ban_expires_at: Option<DateTime<Utc>>,
}

fn profile_image(value: &Value<'_>, _row: &Member) -> String {
    match value.as_str() {
        Some(src) if !src.is_empty() => src.to_string(),
        _ => DEFAULT_PROFILE_IMAGE.to_string(),
    }
}

/// Links rows to `{target}/{id}` when the configuration names a target.
/// A blank target means no links.
fn with_link<R: Record>(builder: DataTableBuilder<R>, config: &TableConfig) -> DataTableBuilder<R> {
    match config.target.as_deref().map(str::trim) {
        Some(target) if !target.is_empty() => builder.link(RowLink::field(target, "id")),
        _ => builder,
    }
}

/// Builds the announcement table.
pub fn document_table(data: Arc<Vec<Document>>, config: &TableConfig) -> DataTable<Document> {
    let builder = DataTable::builder(data)
        .config(config)
        .render_with("publishDate", long_date);
    with_link(builder, config).build()
}

/// Builds the event table.
pub fn event_table(data: Arc<Vec<Event>>, config: &TableConfig) -> DataTable<Event> {
    let builder = DataTable::builder(data)
        .config(config)
        .render_with("startDate", long_date)
        .render_with("endDate", long_date);
    with_link(builder, config).build()
}

/// Builds the member table.
pub fn member_table(data: Arc<Vec<Member>>, config: &TableConfig) -> DataTable<Member> {
    let builder = DataTable::builder(data)
        .config(config)
        .render_with("image", profile_image)
        .render_with("createdAt", long_date)
        .render_with("updatedAt", long_date);
    with_link(builder, config).build()
}
