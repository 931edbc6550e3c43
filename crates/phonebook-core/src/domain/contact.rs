use serde::{Deserialize, Serialize};

/// Column names of the phonebook file, in output order.
pub const COLUMNS: [&str; 7] = [
    "lastname",
    "firstname",
    "surname",
    "organization",
    "position",
    "phone",
    "email",
];

/// A row as it was read from the input file. Missing columns are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub last_name: String,
    pub first_name: String,
    pub patronymic: String,
    pub organization: String,
    pub position: String,
    pub phone: String,
    pub email: String,
}

/// A normalized contact. An empty string means the field is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "lastname", default)]
    pub last_name: String,
    #[serde(rename = "firstname", default)]
    pub first_name: String,
    #[serde(rename = "surname", default)]
    pub patronymic: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl RawRecord {
    /// Builds a record from a lookup by column name; unknown columns become empty.
    pub fn from_columns<'a, F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<&'a str>,
    {
        let mut field = |name: &str| lookup(name).unwrap_or_default().to_string();
        Self {
            last_name: field(COLUMNS[0]),
            first_name: field(COLUMNS[1]),
            patronymic: field(COLUMNS[2]),
            organization: field(COLUMNS[3]),
            position: field(COLUMNS[4]),
            phone: field(COLUMNS[5]),
            email: field(COLUMNS[6]),
        }
    }

    pub fn fields(&self) -> [&str; 7] {
        [
            &self.last_name,
            &self.first_name,
            &self.patronymic,
            &self.organization,
            &self.position,
            &self.phone,
            &self.email,
        ]
    }
}

impl Contact {
    /// Field values in [`COLUMNS`] order.
    pub fn fields(&self) -> [&str; 7] {
        [
            &self.last_name,
            &self.first_name,
            &self.patronymic,
            &self.organization,
            &self.position,
            &self.phone,
            &self.email,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{Contact, RawRecord, COLUMNS};
    use std::collections::HashMap;

    #[test]
    fn from_columns_defaults_missing_columns() {
        let row: HashMap<&str, &str> = [("lastname", "Иванов"), ("phone", "8 916 123 45 67")]
            .into_iter()
            .collect();
        let record = RawRecord::from_columns(|name| row.get(name).copied());
        assert_eq!(record.last_name, "Иванов");
        assert_eq!(record.phone, "8 916 123 45 67");
        assert!(record.first_name.is_empty());
        assert!(record.email.is_empty());
    }

    #[test]
    fn fields_follow_column_order() {
        let contact = Contact {
            last_name: "a".to_string(),
            first_name: "b".to_string(),
            patronymic: "c".to_string(),
            organization: "d".to_string(),
            position: "e".to_string(),
            phone: "f".to_string(),
            email: "g".to_string(),
        };
        assert_eq!(contact.fields(), ["a", "b", "c", "d", "e", "f", "g"]);
        assert_eq!(COLUMNS[2], "surname");
    }

    #[test]
    fn json_uses_column_names() {
        let contact = Contact {
            last_name: "Иванов".to_string(),
            patronymic: "Иванович".to_string(),
            ..Contact::default()
        };
        let value = serde_json::to_value(&contact).expect("serialize");
        assert_eq!(value["lastname"], "Иванов");
        assert_eq!(value["surname"], "Иванович");
        assert_eq!(value["email"], "");
    }
}
