/// Environment coercion errors

use std::{fmt, num::ParseIntError};
use thiserror::Error;

/// How a raw environment string is turned into a typed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    Raw,
    Bool,
    Integer,
    List,
    Scalar,
}

impl fmt::Display for Coercion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Coercion::Raw => "string",
            Coercion::Bool => "boolean",
            Coercion::Integer => "integer",
            Coercion::List => "comma-separated list",
            Coercion::Scalar => "integer or string",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("environment variable {key}={value:?} is not a valid base-10 integer")]
    InvalidInteger {
        key: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}
