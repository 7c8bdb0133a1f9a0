//! Chilean RUT check-digit validation, formatting, and input-field models.

mod checksum;
mod field;
mod format;
mod name;
mod rut;

pub use checksum::{CheckDigit, MIN_BODY_LEN, compute_check_digit, is_computable_body, verify};
pub use field::{
    DEFAULT_MAX_BODY_LEN, FieldPolicy, FieldStatus, NameField, RutField, RutFieldState,
};
pub use format::{clean, format, format_table, group_thousands, split, strip_to_readonly_display};
pub use name::is_valid_name;
pub use rut::{Rut, RutError};
