mod create_contact;
mod get_contacts;

pub use create_contact::{create_contact_handler, __path_create_contact_handler, CreateContactRequest};
pub use get_contacts::{get_contacts_handler, __path_get_contacts_handler};
