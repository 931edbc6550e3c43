use crate::domain::contact::Contact;
use std::collections::HashMap;

/// Identity of a person for duplicate detection: exact, case-sensitive
/// (last name, first name).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactKey {
    pub last_name: String,
    pub first_name: String,
}

impl ContactKey {
    pub fn of(contact: &Contact) -> Self {
        Self {
            last_name: contact.last_name.clone(),
            first_name: contact.first_name.clone(),
        }
    }
}

#[derive(Debug, Default)]
struct ContactBuilder {
    contact: Contact,
}

impl ContactBuilder {
    fn absorb(&mut self, incoming: &Contact) {
        let target = &mut self.contact;
        fill(&mut target.last_name, &incoming.last_name);
        fill(&mut target.first_name, &incoming.first_name);
        fill(&mut target.patronymic, &incoming.patronymic);
        fill(&mut target.organization, &incoming.organization);
        fill(&mut target.position, &incoming.position);
        // One phone and one email per person: later values are dropped.
        fill(&mut target.phone, &incoming.phone);
        fill(&mut target.email, &incoming.email);
    }

    fn build(self) -> Contact {
        self.contact
    }
}

fn fill(slot: &mut String, value: &str) {
    if slot.is_empty() && !value.is_empty() {
        value.clone_into(slot);
    }
}

/// Collapses contacts sharing a [`ContactKey`] into one, taking the first
/// non-empty value of every field in input order.
///
/// Groups come out in the order their key was first seen.
pub fn merge_contacts<I>(contacts: I) -> Vec<Contact>
where
    I: IntoIterator<Item = Contact>,
{
    let mut slots: HashMap<ContactKey, usize> = HashMap::new();
    let mut builders: Vec<ContactBuilder> = Vec::new();

    for contact in contacts {
        let index = *slots.entry(ContactKey::of(&contact)).or_insert_with(|| {
            builders.push(ContactBuilder::default());
            builders.len() - 1
        });
        builders[index].absorb(&contact);
    }

    builders.into_iter().map(ContactBuilder::build).collect()
}
