pub mod csv_store;

pub use csv_store::{
    read_cleaned, read_policy_events, read_raw, write_cleaned, write_raw,
};
