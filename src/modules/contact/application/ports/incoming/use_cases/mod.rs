mod create_contact;
mod get_contacts;

pub use create_contact::{
    ContactCommandError, CreateContactCommand, CreateContactError, CreateContactUseCase,
};
pub use get_contacts::{GetContactsError, GetContactsUseCase};
