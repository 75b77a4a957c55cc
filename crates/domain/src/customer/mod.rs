//! Customer aggregate and related types.

mod address;
mod entity;
mod factory;
mod handlers;

pub use address::Address;
pub use entity::Customer;
pub use factory::CustomerFactory;
pub use handlers::{LogAddressChanged, LogCustomerCreatedFirst, LogCustomerCreatedSecond};

use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CustomerError {
    /// Customer ID is required.
    #[error("Id is required")]
    IdRequired,

    /// Customer name is required.
    #[error("Name is required")]
    NameRequired,

    /// Activation needs an address on file.
    #[error("Address is mandatory to activate a customer")]
    AddressRequired,
}

/// Errors that can occur when building an address.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("Street is required")]
    StreetRequired,

    #[error("Number is required")]
    NumberRequired,

    #[error("Zip is required")]
    ZipRequired,

    #[error("City is required")]
    CityRequired,
}
