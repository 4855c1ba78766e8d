use crate::model::AddressBookEntry;
use resource_framework::{EntityClient, Resource};
use std::sync::Arc;

/// Address lookup against the address-books service.
#[derive(Clone)]
pub struct AddressClient {
    inner: Arc<dyn Resource<AddressBookEntry>>,
}

impl AddressClient {
    pub fn new(inner: Arc<dyn Resource<AddressBookEntry>>) -> Self {
        Self { inner }
    }
}

impl EntityClient for AddressClient {
    type Entity = AddressBookEntry;

    fn inner(&self) -> &dyn Resource<AddressBookEntry> {
        self.inner.as_ref()
    }
}
