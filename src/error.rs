use std::{error::Error, fmt::Display};

#[derive(Clone, Debug)]
pub enum AsymError {
    /// 不合法的算法选择子或哈希标识
    InvalidParameter(String),

    /// 不合法的DER/ASN.1密钥编码
    Decode(String),

    /// 签名/验签原语拒绝了输入
    Crypto(String),
}

impl Display for AsymError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter(s) => {
                f.write_fmt(format_args!("Invalid parameter: {s}"))
            }
            Self::Decode(s) => f.write_fmt(format_args!("Decode failed: {s}")),
            Self::Crypto(s) => f.write_fmt(format_args!("Crypto primitive failed: {s}")),
        }
    }
}

impl Error for AsymError {}

impl From<rsa::Error> for AsymError {
    fn from(value: rsa::Error) -> Self {
        Self::Crypto(value.to_string())
    }
}

impl From<rsa::pkcs1::Error> for AsymError {
    fn from(value: rsa::pkcs1::Error) -> Self {
        Self::Decode(value.to_string())
    }
}
