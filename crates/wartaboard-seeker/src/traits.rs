//! Traits for record access and derive macro support.
//!
//! [`Record`] is the schema descriptor a table reads columns and cell values
//! through. It is typically derived with `#[derive(Record)]` from the
//! `wartaboard-macros` crate, but can also be implemented manually.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::value::{Timestamp, Value};

/// A row of table data with a known set of fields.
///
/// # Derive Usage
///
/// ```ignore
/// use wartaboard_macros::Record;
/// use wartaboard_seeker::{Query, Record as _};
///
/// #[derive(Record)]
/// struct Event {
///     id: String,
///     event_name: String,
///     location: Option<String>,
/// }
///
/// assert_eq!(Event::RECORD_FIELDS, &["id", "event_name", "location"]);
/// let query = Query::new().search("hall", [Event::LOCATION]).build();
/// let results = query.filter(&events, Event::accessor);
/// ```
///
/// # Manual Implementation
///
/// ```
/// use wartaboard_seeker::{Number, Record, Value};
///
/// struct Event {
///     name: String,
///     seats: u32,
/// }
///
/// impl Record for Event {
///     fn field_names(&self) -> Vec<&str> {
///         vec!["name", "seats"]
///     }
///
///     fn field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "name" => Value::from(self.name.as_str()),
///             "seats" => Value::Number(Number::from(self.seats)),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Returns the field names of this record in their natural order.
    ///
    /// Tables call this on the first row only, so every row of one
    /// collection is expected to report the same names.
    fn field_names(&self) -> Vec<&str>;

    /// Returns the value of a field.
    ///
    /// Unknown fields yield [`Value::None`].
    fn field_value(&self, field: &str) -> Value<'_>;

    /// Returns a static accessor function suitable for use with [`Query::filter`].
    ///
    /// [`Query::filter`]: crate::Query::filter
    fn accessor<'a>(item: &'a Self, field: &str) -> Value<'a>
    where
        Self: Sized,
    {
        item.field_value(field)
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field_names(&self) -> Vec<&str> {
        (**self).field_names()
    }

    fn field_value(&self, field: &str) -> Value<'_> {
        (**self).field_value(field)
    }
}

/// Converts an enum variant into the label it displays and filters as.
///
/// Used by `#[derive(Record)]` for fields marked `#[field(Enum)]`.
///
/// ```
/// use wartaboard_seeker::FieldEnum;
///
/// enum Role {
///     Member,
///     Pastor,
/// }
///
/// impl FieldEnum for Role {
///     fn field_label(&self) -> &'static str {
///         match self {
///             Role::Member => "Member",
///             Role::Pastor => "Pastor",
///         }
///     }
/// }
/// ```
pub trait FieldEnum {
    /// Returns the label for this variant.
    fn field_label(&self) -> &'static str;
}

/// Converts a date or time type into a [`Timestamp`].
///
/// Used by `#[derive(Record)]` for timestamp fields.
pub trait FieldTimestamp {
    /// Converts this value to a [`Timestamp`].
    fn field_timestamp(&self) -> Timestamp;
}

impl FieldTimestamp for i64 {
    fn field_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(*self)
    }
}

impl FieldTimestamp for Timestamp {
    fn field_timestamp(&self) -> Timestamp {
        *self
    }
}

impl<Tz: TimeZone> FieldTimestamp for DateTime<Tz> {
    fn field_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(self.timestamp_millis())
    }
}

impl FieldTimestamp for NaiveDateTime {
    fn field_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(self.and_utc().timestamp_millis())
    }
}

impl FieldTimestamp for NaiveDate {
    fn field_timestamp(&self) -> Timestamp {
        Timestamp::from_millis(
            self.and_time(NaiveTime::default())
                .and_utc()
                .timestamp_millis(),
        )
    }
}
