use crate::model::AddressId;
use resource_framework::RemoteEntity;
use serde::{Deserialize, Serialize};

/// An address-book entry as held by the address-books service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressBookEntry {
    #[serde(default)]
    pub id: AddressId,
    pub address_name: String,
    pub address_number: String,
    pub cap: String,
    pub city_name: String,
    pub country_name: String,
}

impl RemoteEntity for AddressBookEntry {
    type Id = AddressId;
    type Create = AddressBookEntry;
    type Update = AddressBookEntry;
    const RESOURCE: &'static str = "address-book";
}
