use crate::AsymError;

/// Modulus size selectors registered in the algorithm table of the
/// enclosing key library. Fixed at generation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Algo {
    Rsa2048 = 1,
    Rsa3072 = 2,
    Rsa4096 = 3,
}

impl Algo {
    pub const fn bits(self) -> usize {
        match self {
            Self::Rsa2048 => 2048,
            Self::Rsa3072 => 3072,
            Self::Rsa4096 => 4096,
        }
    }

    /// Numeric id in the algorithm table.
    pub const fn id(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for Algo {
    type Error = AsymError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Self::Rsa2048),
            2 => Ok(Self::Rsa3072),
            3 => Ok(Self::Rsa4096),
            _ => Err(AsymError::InvalidParameter(format!(
                "unknown algorithm selector `{id}`"
            ))),
        }
    }
}

/// Key encoding selector passed to [`FromBytes`](crate::FromBytes).
///
/// Reserved for alternate encodings; PKCS#1 is the only registered one
/// today, so decoding does not branch on it yet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyCodec {
    #[default]
    Pkcs1,
}
