//! Error macros for graphq

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::UsageError($msg.to_string()))
    };
}

/// Macro for creating unsupported errors
#[macro_export]
macro_rules! bail_unsupported {
    ($context:expr, $value:expr, $supported:expr) => {
        return Err($crate::error::GraphError::unsupported(
            $context, $value, $supported,
        ))
    };
}

/// Macro for failing on a parameter the caller did not supply
#[macro_export]
macro_rules! require_param {
    ($value:expr, $name:expr) => {
        match $value {
            Some(value) => value,
            None => return Err($crate::error::GraphError::missing($name)),
        }
    };
}
