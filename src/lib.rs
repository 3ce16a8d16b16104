//! ハードウェア署名デバイスとやり取りするプロトコルメッセージを、
//! ログ出力用の決定的な複数行テキストに変換する。

pub mod config;
pub mod error;
pub mod formatter;
pub mod style;
pub mod transaction;
pub mod types;

pub use config::StyleConfig;
pub use formatter::{render_field_value, to_debug_string, to_debug_string_with, TrezorMessageStyle};
pub use style::ToStringStyle;
pub use types::{
    ByteString, Field, FieldValue, Message, Scalar, TransactionType, TxInputType, TxOutputBinType, TxOutputType,
    TxRequestDetailsType, Value,
};
