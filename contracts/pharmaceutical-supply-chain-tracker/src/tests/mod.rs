// Contract-level scenarios, one file per concern.
mod utils;
mod registry;
