use std::fmt;
use serde::{Deserialize, Deserializer};

/// JSONダンプ中のバイト列は16進数文字列で表現する
fn hex_bytes<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    hex::decode(&s).map_err(serde::de::Error::custom)
}

/// プロトコル層の長さ区切りバイナリ型 (protobuf の bytes フィールドに相当)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteString(Vec<u8>);

impl ByteString {
    pub fn copy_from(bytes: &[u8]) -> Self {
        ByteString(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(bytes: Vec<u8>) -> Self {
        ByteString(bytes)
    }
}

impl<'de> Deserialize<'de> for ByteString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        hex_bytes(deserializer).map(ByteString)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Scalar {
    Int(i64),
    #[serde(rename = "uint")]
    UInt(u64),
    Bool(bool),
    /// 列挙値。名前で表示する
    Enum(String),
    Str(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::UInt(v) => write!(f, "{}", v),
            Scalar::Bool(v) => write!(f, "{}", v),
            Scalar::Enum(name) => f.write_str(name),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

/// フィールド描画フックに渡される値の種類 (閉じた集合)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Bytes(#[serde(deserialize_with = "hex_bytes")] Vec<u8>),
    Wrapped(ByteString),
    TxRequestDetails(TxRequestDetailsType),
    Transaction(TransactionType),
    Scalar(Scalar),
}

impl From<Scalar> for FieldValue {
    fn from(scalar: Scalar) -> Self {
        FieldValue::Scalar(scalar)
    }
}

impl From<TransactionType> for FieldValue {
    fn from(tx: TransactionType) -> Self {
        FieldValue::Transaction(tx)
    }
}

impl From<TxRequestDetailsType> for FieldValue {
    fn from(details: TxRequestDetailsType) -> Self {
        FieldValue::TxRequestDetails(details)
    }
}

/// 汎用メッセージのフィールドが保持する値
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Repeated(Vec<Value>),
    Message(Message),
    Leaf(FieldValue),
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        Value::Leaf(value)
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Leaf(FieldValue::Scalar(scalar))
    }
}

impl From<ByteString> for Value {
    fn from(bytes: ByteString) -> Self {
        Value::Leaf(FieldValue::Wrapped(bytes))
    }
}

impl From<TransactionType> for Value {
    fn from(tx: TransactionType) -> Self {
        Value::Leaf(FieldValue::Transaction(tx))
    }
}

impl From<TxRequestDetailsType> for Value {
    fn from(details: TxRequestDetailsType) -> Self {
        Value::Leaf(FieldValue::TxRequestDetails(details))
    }
}

impl From<Message> for Value {
    fn from(message: Message) -> Self {
        Value::Message(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub value: Option<Value>,
}

/// 宣言順に並んだ名前付きフィールドを持つレコード
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Message {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Message {
    pub fn new(name: impl Into<String>) -> Self {
        Message { name: name.into(), fields: Vec::new() }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push(Field { name: name.into(), value: Some(value.into()) });
        self
    }

    pub fn with_absent(mut self, name: impl Into<String>) -> Self {
        self.fields.push(Field { name: name.into(), value: None });
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TxRequestDetailsType {
    pub request_index: u32,
    #[serde(deserialize_with = "hex_bytes")]
    pub tx_hash: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TxInputType {
    pub address_n: Vec<u32>,
    #[serde(deserialize_with = "hex_bytes")]
    pub prev_hash: Vec<u8>,
    pub prev_index: u32,
    pub script_type: u32,
    #[serde(deserialize_with = "hex_bytes")]
    pub script_sig: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TxOutputType {
    #[serde(deserialize_with = "hex_bytes")]
    pub address_bytes: Vec<u8>,
    pub address: String,
    pub address_n: Vec<u32>,
    pub amount: u64,
    pub script_type: u32,
}

impl TxOutputType {
    pub fn address_n_count(&self) -> usize {
        self.address_n.len()
    }
}

/// 前トランザクションの出力をバイナリ形式で渡すときの型
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TxOutputBinType {
    pub amount: u64,
    #[serde(deserialize_with = "hex_bytes")]
    pub script_pubkey: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransactionType {
    pub bin_outputs: Vec<TxOutputBinType>,
    // inputs_cnt と inputs_count は上流スキーマの名残で両方存在する。統合しないこと
    pub inputs_cnt: u32,
    pub inputs_count: u32,
    pub inputs: Vec<TxInputType>,
    pub outputs_cnt: u32,
    pub outputs_count: u32,
    pub outputs: Vec<TxOutputType>,
    pub lock_time: u32,
    pub version: u32,
}

impl TransactionType {
    pub fn bin_outputs_count(&self) -> usize {
        self.bin_outputs.len()
    }
}
