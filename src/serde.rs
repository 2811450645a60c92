use std::fmt;

use serde::{
    Deserialize, Serialize, Serializer,
    de::{self, Deserializer, Visitor},
};

use crate::{Sguid, base58};

impl Serialize for Sguid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut buffer = [0; base58::MAX_U128_LEN];
        serializer.serialize_str(base58::encode_u128(self.to_u128(), &mut buffer))
    }
}

impl<'de> Deserialize<'de> for Sguid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SguidVisitor;

        impl Visitor<'_> for SguidVisitor {
            type Value = Sguid;
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a Base58 S-GUID string")
            }
            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(SguidVisitor)
    }
}
