//! Error macros for nodeplan

/// Macro for creating network definition errors
#[macro_export]
macro_rules! bail_network {
    ($($arg:tt)*) => {
        return Err($crate::error::NodeplanError::invalid_network(format!($($arg)*)))
    };
}

/// Macro for creating table format errors
#[macro_export]
macro_rules! bail_table {
    ($($arg:tt)*) => {
        return Err($crate::error::NodeplanError::invalid_table(format!($($arg)*)))
    };
}
