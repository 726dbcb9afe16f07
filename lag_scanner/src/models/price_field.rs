use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// One of the per-day price/volume fields a panel can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceField {
    Open,
    Close,
    High,
    Low,
    Transactions,
    Volume,
}

impl PriceField {
    pub const ALL: [PriceField; 6] = [
        PriceField::Open,
        PriceField::Close,
        PriceField::High,
        PriceField::Low,
        PriceField::Transactions,
        PriceField::Volume,
    ];

    /// File stem used when persisting this field (`close` -> `close.parquet`).
    pub const fn stem(self) -> &'static str {
        match self {
            PriceField::Open => "open",
            PriceField::Close => "close",
            PriceField::High => "high",
            PriceField::Low => "low",
            PriceField::Transactions => "transactions",
            PriceField::Volume => "volume",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PriceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

impl FromStr for PriceField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriceField::ALL
            .into_iter()
            .find(|field| field.stem().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Config(format!("unknown price field: {s}")))
    }
}
