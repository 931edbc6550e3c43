use serde::Serialize;

/// Name parts split out of a full-name string by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedName {
    #[serde(rename = "lastname")]
    pub last_name: String,
    #[serde(rename = "firstname")]
    pub first_name: String,
    #[serde(rename = "surname")]
    pub patronymic: String,
}

/// Splits "Last First Patronymic" on spaces. Tokens after the third are
/// dropped; missing parts stay empty.
pub fn parse_full_name(full: &str) -> ParsedName {
    let mut tokens = full.trim().split(' ').filter(|token| !token.is_empty());
    let mut next = || tokens.next().unwrap_or_default().to_string();

    ParsedName {
        last_name: next(),
        first_name: next(),
        patronymic: next(),
    }
}

pub fn join_full_name(last_name: &str, first_name: &str, patronymic: &str) -> String {
    [last_name, first_name, patronymic]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::{join_full_name, parse_full_name, ParsedName};

    fn parsed(last: &str, first: &str, patronymic: &str) -> ParsedName {
        ParsedName {
            last_name: last.to_string(),
            first_name: first.to_string(),
            patronymic: patronymic.to_string(),
        }
    }

    #[test]
    fn parse_full_name_by_token_count() {
        assert_eq!(
            parse_full_name("Иванов Иван Иванович"),
            parsed("Иванов", "Иван", "Иванович")
        );
        assert_eq!(parse_full_name("Иванов Иван"), parsed("Иванов", "Иван", ""));
        assert_eq!(parse_full_name("Иванов"), parsed("Иванов", "", ""));
        assert_eq!(parse_full_name(""), parsed("", "", ""));
        assert_eq!(parse_full_name("   "), parsed("", "", ""));
    }

    #[test]
    fn parse_full_name_drops_extra_tokens() {
        assert_eq!(
            parse_full_name("Иванов Иван Иванович Младший"),
            parsed("Иванов", "Иван", "Иванович")
        );
    }

    #[test]
    fn parse_full_name_ignores_repeated_spaces() {
        assert_eq!(
            parse_full_name("  Петров   Пётр  "),
            parsed("Петров", "Пётр", "")
        );
    }

    #[test]
    fn parse_full_name_splits_on_spaces_only() {
        assert_eq!(
            parse_full_name("Петров\tПётр"),
            parsed("Петров\tПётр", "", "")
        );
    }

    #[test]
    fn join_full_name_skips_empty_parts() {
        assert_eq!(join_full_name("Иванов", "", "Иванович"), "Иванов Иванович");
        assert_eq!(join_full_name("", "", ""), "");
        assert_eq!(
            join_full_name("Иванов Иван", "Иванович", ""),
            "Иванов Иван Иванович"
        );
    }
}
