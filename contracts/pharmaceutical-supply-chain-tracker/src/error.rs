use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization errors
    Unauthorized = 3,

    // Lifecycle errors
    InvalidState = 4,
    InvalidQuantity = 5,
    NotFound = 6,
    OutOfStock = 7,

    // Validation errors
    InvalidIngredient = 8,
    InvalidName = 9,
    InvalidInput = 10,
}
