//! End-to-end behavior of tables over derived records.

use std::sync::Arc;

use chrono::NaiveDate;
use wartaboard::seeker::FieldEnum;
use wartaboard::{
    BorderStyle, DataTable, FilterField, Record, RowLink, TableStatus, TextTable, Value,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Member,
    Admin,
}

impl FieldEnum for Role {
    fn field_label(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, Record)]
#[record(rename_all = "camelCase")]
struct Member {
    id: String,
    name: String,
    email: String,
    image: Option<String>,
    #[field(Enum)]
    role: Role,
    banned: bool,
    #[field(skip)]
    password_hash: String,
}

fn member(id: &str, name: &str, role: Role) -> Member {
    Member {
        id: id.into(),
        name: name.into(),
        email: format!("{}@gkj.or.id", name.to_lowercase()),
        image: None,
        role,
        banned: false,
        password_hash: "x".into(),
    }
}

fn members() -> Arc<Vec<Member>> {
    Arc::new(vec![
        member("u1", "Alice", Role::Admin),
        member("u2", "Bob", Role::Member),
        member("u3", "Bartholomew", Role::Member),
    ])
}

fn names(table: &DataTable<Member>) -> Vec<&str> {
    table
        .visible_rows()
        .into_iter()
        .map(|m| m.name.as_str())
        .collect()
}

#[test]
fn derived_columns_follow_declaration_order() {
    let table = DataTable::new(members());
    let keys: Vec<_> = table.columns().iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["id", "name", "email", "image", "role", "banned"]);
    assert_eq!(table.columns()[2].label, "Email");
    assert_eq!(Member::RECORD_FIELDS.len(), 6);
}

#[test]
fn search_matches_enum_labels() {
    let mut table = DataTable::builder(members()).omit(["id"]).build();
    table.set_search("ADMIN");
    assert_eq!(names(&table), vec!["Alice"]);
}

#[test]
fn filters_combine_with_search() {
    let mut table = DataTable::builder(members()).omit(["id", "banned"]).build();
    table.set_search("b");
    assert_eq!(names(&table), vec!["Bob", "Bartholomew"]);

    let id = table.add_filter();
    table.update_filter(id, FilterField::Column, "name");
    table.update_filter(id, FilterField::Rule, "endsWith");
    table.update_filter(id, FilterField::Value, "MEW");
    assert_eq!(names(&table), vec!["Bartholomew"]);

    table.update_filter(id, FilterField::Rule, "isNot");
    table.update_filter(id, FilterField::Value, "bob");
    assert_eq!(names(&table), vec!["Bartholomew"]);

    table.remove_filter(id);
    assert_eq!(names(&table), vec!["Bob", "Bartholomew"]);
}

#[test]
fn filter_on_missing_field_compares_blank() {
    let mut table = DataTable::new(members());
    table.add_filter_str("nickname:equals:").unwrap();
    assert_eq!(table.visible_rows().len(), 3);
    table.add_filter_str("nickname:contains:a").unwrap();
    assert!(table.visible_rows().is_empty());
}

#[test]
fn unknown_rule_keeps_every_row() {
    let mut table = DataTable::new(members());
    table.add_filter_str("name:fuzzy:zzz").unwrap();
    assert_eq!(table.visible_rows().len(), 3);
}

#[test]
fn renderers_and_links() {
    let table = DataTable::builder(members())
        .include(["name", "image", "role"])
        .label("image", "Photo")
        .render_with("image", |value: &Value<'_>, _: &Member| {
            if value.is_none() {
                "/default-profile.png".to_string()
            } else {
                value.to_text().into_owned()
            }
        })
        .link(RowLink::new("/dashboard/member", |m: &Member| m.id.clone()))
        .build();

    let rendered = table.render();
    assert_eq!(rendered.headers[1].label, "Photo");
    assert_eq!(rendered.rows[0].cells[1].text, "/default-profile.png");
    assert_eq!(rendered.rows[0].cells[2].text, "admin");
    assert_eq!(
        rendered.rows[2].cells[0].href.as_deref(),
        Some("/dashboard/member/u3")
    );
}

#[test]
fn link_moves_with_first_visible_column() {
    let mut table = DataTable::builder(members())
        .include(["name", "email"])
        .link(RowLink::field("/dashboard/member", "id"))
        .build();
    table.toggle_column("name", false);
    let rendered = table.render();
    assert_eq!(rendered.headers.len(), 1);
    assert_eq!(rendered.rows[1].cells[0].key, "email");
    assert_eq!(
        rendered.rows[1].cells[0].href.as_deref(),
        Some("/dashboard/member/u2")
    );
}

#[test]
fn link_uses_the_rendered_row() {
    let mut table = DataTable::builder(members())
        .link(RowLink::field("/dashboard/member", "id"))
        .build();
    table.set_search("bart");
    let rendered = table.render();
    assert_eq!(rendered.rows[0].index, 2);
    assert_eq!(
        rendered.rows[0].cells[0].href.as_deref(),
        Some("/dashboard/member/u3")
    );
}

#[test]
fn empty_collection_message() {
    let table = DataTable::<Member>::new(Arc::new(Vec::new()));
    assert!(table.columns().is_empty());
    let rendered = table.render();
    assert_eq!(rendered.status, TableStatus::Empty);
    assert_eq!(rendered.message(), Some("Collection is empty"));
}

#[test]
fn no_matches_message_in_text_layout() {
    let mut table = DataTable::builder(members()).include(["name"]).build();
    table.set_search("nobody");
    let text = TextTable::new()
        .border(BorderStyle::Light)
        .render(&table.render());
    assert!(text.contains("No matching results"));
    assert!(text.contains("Name"));
}

#[test]
fn set_data_shows_new_columns() {
    #[derive(Record)]
    struct Bulletin {
        title: String,
        #[field(rename = "publishDate")]
        published: Option<NaiveDate>,
    }

    let mut table = DataTable::new(Arc::new(Vec::<Bulletin>::new()));
    assert!(table.columns().is_empty());
    table.add_filter();

    table.set_data(Arc::new(vec![Bulletin {
        title: "Warta Minggu".into(),
        published: NaiveDate::from_ymd_opt(2025, 1, 5),
    }]));

    let keys: Vec<_> = table.visible_columns().iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["title", "publishDate"]);
    assert_eq!(table.columns()[1].label, "Publish Date");
    // a filter added before any columns existed reads a blank cell
    assert_eq!(table.filters()[0].column, "");
    assert_eq!(table.visible_rows().len(), 1);
}

#[test]
fn text_layout_truncates_cells() {
    let table = DataTable::builder(members()).include(["email"]).build();
    let text = TextTable::new().max_width(Some(8)).render(&table.render());
    assert!(text.contains('…'));
    assert!(!text.contains("alice@gkj.or.id"));
}
