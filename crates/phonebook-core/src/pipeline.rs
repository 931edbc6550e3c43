use crate::domain::contact::{Contact, RawRecord};
use crate::domain::name::{join_full_name, parse_full_name};
use crate::domain::phone::normalize_phone_with_extension;

/// Normalizes one input row.
///
/// The three name columns are joined back into a single string and parsed
/// again by position, so a name squeezed into `lastname` is redistributed
/// and the column boundaries of the input are not kept.
pub fn normalize_record(record: &RawRecord) -> Contact {
    let full_name = join_full_name(&record.last_name, &record.first_name, &record.patronymic);
    let name = parse_full_name(&full_name);

    Contact {
        last_name: name.last_name,
        first_name: name.first_name,
        patronymic: name.patronymic,
        organization: record.organization.clone(),
        position: record.position.clone(),
        phone: normalize_phone_with_extension(&record.phone),
        email: record.email.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_record;
    use crate::domain::contact::RawRecord;
    use crate::domain::merge::merge_contacts;

    fn record(fields: [&str; 7]) -> RawRecord {
        let [last, first, patronymic, organization, position, phone, email] = fields;
        RawRecord {
            last_name: last.to_string(),
            first_name: first.to_string(),
            patronymic: patronymic.to_string(),
            organization: organization.to_string(),
            position: position.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn normalize_record_redistributes_name_columns() {
        let contact = normalize_record(&record([
            "Лагунцов Иван Алексеевич",
            "",
            "",
            "Минфин",
            "",
            "+7 (495) 913-11-11 доб. 0792",
            "ivan@minfin.ru",
        ]));
        assert_eq!(contact.last_name, "Лагунцов");
        assert_eq!(contact.first_name, "Иван");
        assert_eq!(contact.patronymic, "Алексеевич");
        assert_eq!(contact.organization, "Минфин");
        assert_eq!(contact.phone, "+7(495)913-11-11 доб.0792");
        assert_eq!(contact.email, "ivan@minfin.ru");
    }

    #[test]
    fn normalize_record_reparses_already_split_names() {
        let contact = normalize_record(&record(["Усольцев", "Олег Валентинович", "", "", "", "", ""]));
        assert_eq!(contact.last_name, "Усольцев");
        assert_eq!(contact.first_name, "Олег");
        assert_eq!(contact.patronymic, "Валентинович");
    }

    #[test]
    fn normalize_record_keeps_malformed_phone() {
        let contact = normalize_record(&record(["Иванов", "", "", "", "", "12-34", ""]));
        assert_eq!(contact.phone, "12-34");
    }

    #[test]
    fn normalized_duplicates_merge_into_one_row() {
        let rows = [
            record(["Иванов", "Иван", "", "", "", "89161234567", "a@x.com"]),
            record(["Иванов", "Иван", "Иванович", "Firm", "Mgr", "", ""]),
        ];
        let merged = merge_contacts(rows.iter().map(normalize_record));
        assert_eq!(merged.len(), 1);
        assert_eq!(
            merged[0].fields(),
            [
                "Иванов",
                "Иван",
                "Иванович",
                "Firm",
                "Mgr",
                "+7(916)123-45-67",
                "a@x.com"
            ]
        );
    }
}
