mod create_contact_service;
mod get_contacts_service;

pub use create_contact_service::CreateContactService;
pub use get_contacts_service::GetContactsService;
