//! Error handling and exit codes.

use fibprint_core::bound::InputError;
use fibprint_core::constants::exit_codes;

/// Map an input error to the process exit code.
pub fn handle_error(err: &InputError) -> i32 {
    match err {
        InputError::Parse { .. } => exit_codes::ERROR_GENERIC,
    }
}
