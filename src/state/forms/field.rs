//! Form field value objects

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// The fixed set of registration fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    BirthDate,
    Address,
    Password,
}

impl FieldName {
    /// Number of fields in a registration record
    pub const COUNT: usize = 6;

    /// All fields in display order
    pub const ALL: [FieldName; FieldName::COUNT] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::BirthDate,
        FieldName::Address,
        FieldName::Password,
    ];

    /// Position of the field in display order
    pub fn index(self) -> usize {
        match self {
            Self::FirstName => 0,
            Self::LastName => 1,
            Self::Email => 2,
            Self::BirthDate => 3,
            Self::Address => 4,
            Self::Password => 5,
        }
    }

    /// Field at a display position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// snake_case key used in logs and configuration
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::BirthDate => "birth_date",
            Self::Address => "address",
            Self::Password => "password",
        }
    }

    /// Key the registration endpoint expects in the JSON body and reports in error paths
    pub fn wire_key(self) -> &'static str {
        match self {
            Self::FirstName => "nombre",
            Self::LastName => "apellido",
            Self::Email => "email",
            Self::BirthDate => "fechaNacimiento",
            Self::Address => "direccion",
            Self::Password => "password",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
            Self::BirthDate => "Birth date (YYYY-MM-DD)",
            Self::Address => "Address",
            Self::Password => "Password",
        }
    }

    /// Resolve an error path reported by the endpoint.
    /// Accepts either the wire key or the snake_case key.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.wire_key() == path || f.key() == path)
    }

    /// Whether the value should be masked when rendered
    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Current text of every registration field.
///
/// All six fields are always present; a fresh set holds empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    values: [String; FieldName::COUNT],
}

impl FieldSet {
    /// Get the value of a field
    pub fn get(&self, field: FieldName) -> &str {
        &self.values[field.index()]
    }

    /// Replace the value of exactly one field. No validation happens here.
    pub fn on_field_change(&mut self, field: FieldName, new_value: impl Into<String>) {
        self.values[field.index()] = new_value.into();
    }

    /// Builder-style helper for fixtures
    #[cfg(test)]
    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.on_field_change(field, value);
        self
    }

    /// Iterate over (field, value) pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        FieldName::ALL
            .into_iter()
            .map(move |f| (f, self.values[f.index()].as_str()))
    }
}

impl Serialize for FieldSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FieldName::COUNT))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.wire_key(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_field_set_is_empty() {
        let fields = FieldSet::default();
        for (_, value) in fields.iter() {
            assert!(value.is_empty());
        }
    }

    #[test]
    fn test_on_field_change_touches_only_named_field() {
        let mut fields = FieldSet::default().with(FieldName::Email, "a@b.co");
        fields.on_field_change(FieldName::FirstName, "Ana");

        assert_eq!(fields.get(FieldName::FirstName), "Ana");
        assert_eq!(fields.get(FieldName::Email), "a@b.co");
        assert_eq!(fields.get(FieldName::LastName), "");
        assert_eq!(fields.get(FieldName::Password), "");
    }

    #[test]
    fn test_index_round_trips_through_from_index() {
        for field in FieldName::ALL {
            assert_eq!(FieldName::from_index(field.index()), Some(field));
        }
        assert_eq!(FieldName::from_index(FieldName::COUNT), None);
    }

    #[test]
    fn test_from_path_accepts_wire_and_snake_keys() {
        assert_eq!(FieldName::from_path("nombre"), Some(FieldName::FirstName));
        assert_eq!(FieldName::from_path("first_name"), Some(FieldName::FirstName));
        assert_eq!(
            FieldName::from_path("fechaNacimiento"),
            Some(FieldName::BirthDate)
        );
        assert_eq!(FieldName::from_path("email"), Some(FieldName::Email));
        assert_eq!(FieldName::from_path("username"), None);
    }

    #[test]
    fn test_serializes_with_wire_keys() {
        let fields = FieldSet::default()
            .with(FieldName::FirstName, "Ana")
            .with(FieldName::BirthDate, "2000-01-01");
        let json = serde_json::to_value(&fields).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "nombre": "Ana",
                "apellido": "",
                "email": "",
                "fechaNacimiento": "2000-01-01",
                "direccion": "",
                "password": "",
            })
        );
    }

    #[test]
    fn test_only_password_is_secret() {
        let secret: Vec<_> = FieldName::ALL.into_iter().filter(|f| f.is_secret()).collect();
        assert_eq!(secret, vec![FieldName::Password]);
    }
}
