//! Serde adapters for byte lists, matching the hex strings used by the engine and beacon APIs.

pub mod hex_fixed_vec;
pub mod hex_var_list;
pub mod list_of_hex_var_list;
