//! Serde support: a [`BigInt`] serializes as its decimal string and
//! deserializes from a decimal string or any integer.

use crate::bigint::BigInt;
use crate::lib::fmt;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BigIntVisitor;

        impl<'de> Visitor<'de> for BigIntVisitor {
            type Value = BigInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal string or an integer")
            }

            fn visit_str<E>(self, value: &str) -> Result<BigInt, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(E::custom)
            }

            fn visit_i64<E>(self, value: i64) -> Result<BigInt, E>
            where
                E: serde::de::Error,
            {
                Ok(BigInt::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<BigInt, E>
            where
                E: serde::de::Error,
            {
                Ok(BigInt::from(value))
            }

            fn visit_i128<E>(self, value: i128) -> Result<BigInt, E>
            where
                E: serde::de::Error,
            {
                Ok(BigInt::from(value))
            }

            fn visit_u128<E>(self, value: u128) -> Result<BigInt, E>
            where
                E: serde::de::Error,
            {
                Ok(BigInt::from(value))
            }
        }

        deserializer.deserialize_str(BigIntVisitor)
    }
}
