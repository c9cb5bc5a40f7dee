//! Form types

use serde::Deserialize;
use serde::Deserializer;
use uuid::Uuid;

/// Change to a single field of an existing record
///
/// Deserializes from an optional field: a missing field is [`Patch::Unchanged`] (requires
/// `#[serde(default)]` on the field), `null` is [`Patch::Clear`] and any other value is
/// [`Patch::Set`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Patch<T> {
    /// Leave the stored value as is
    Unchanged,

    /// An explicit `null`
    Clear,

    /// Overwrite the stored value
    Set(T),
}

impl<T> Patch<T> {
    /// The new value, only when one is set
    pub fn as_set(&self) -> Option<&T> {
        match self {
            Self::Set(value) => Some(value),
            Self::Unchanged | Self::Clear => None,
        }
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Self::Unchanged
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| value.map_or(Self::Clear, Self::Set))
    }
}

/// Values to create a Note
pub struct CreateNoteValues<'a> {
    /// Title of the note
    pub title: &'a str,

    /// Body of the note
    pub body: &'a str,

    /// Optional parent, not verified
    pub parent_id: Option<&'a Uuid>,

    /// Author of the note
    pub created_by_user_id: &'a str,

    /// Display color, the default color is used when missing
    pub color: Option<&'a str>,

    /// Optional label
    pub tag: Option<&'a str>,
}

/// Values to update a Note
///
/// Only [`Patch::Set`] changes a field, a [`Patch::Clear`] leaves the stored value as is,
/// just like [`Patch::Unchanged`]
pub struct UpdateNoteValues<'a> {
    /// New title
    pub title: &'a Patch<String>,

    /// New body
    pub body: &'a Patch<String>,

    /// New color
    pub color: &'a Patch<String>,

    /// New parent
    pub parent_id: &'a Patch<Uuid>,

    /// New label
    pub tag: &'a Patch<String>,
}
