//! ハードウェアウォレットとやり取りするメッセージのデバッグ用文字列化。
//!
//! バイト列は16進数で表示し、`TransactionType` と `TxRequestDetailsType` は
//! 汎用トラバーサルを使わず固定のフィールド順で描画する。

use crate::config::StyleConfig;
use crate::style::{self, ToStringStyle};
use crate::types::{FieldValue, Message, TransactionType, TxInputType, TxOutputType, TxRequestDetailsType};

// 入れ子レコードの各行の接頭辞
const NESTED_LINE: &str = "\n    ";

#[derive(Debug, Default, Clone, Copy)]
pub struct TrezorMessageStyle;

impl ToStringStyle for TrezorMessageStyle {
    fn append_detail(&self, buffer: &mut String, field_name: &str, value: &FieldValue) {
        render_field_value(buffer, field_name, value);
    }
}

/// デフォルトの複数行スタイルで文字列化する
pub fn to_debug_string(message: &Message) -> String {
    to_debug_string_with(message, &StyleConfig::default())
}

pub fn to_debug_string_with(message: &Message, config: &StyleConfig) -> String {
    style::reflection_to_string(message, config, &TrezorMessageStyle)
}

pub fn render_field_value(buffer: &mut String, _field_name: &str, value: &FieldValue) {
    match value {
        FieldValue::Bytes(bytes) => append_hex_bytes(buffer, bytes),
        FieldValue::Wrapped(bytes) => append_hex_bytes(buffer, bytes.as_bytes()),
        FieldValue::TxRequestDetails(detail) => append_tx_request_details(buffer, detail),
        FieldValue::Transaction(tx) => append_transaction(buffer, tx),
        FieldValue::Scalar(scalar) => buffer.push_str(&scalar.to_string()),
    }
}

/// 1バイトごとに " xx" を追加する。空なら何も追加しない
pub fn append_hex_bytes(buffer: &mut String, bytes: &[u8]) {
    for b in bytes {
        buffer.push_str(&format!(" {:02x}", b));
    }
}

fn append_line(buffer: &mut String, label: &str, value: impl std::fmt::Display) {
    buffer.push_str(NESTED_LINE);
    buffer.push_str(label);
    buffer.push_str(": ");
    buffer.push_str(&value.to_string());
}

fn append_transaction(buffer: &mut String, tx: &TransactionType) {
    append_line(buffer, "bin_outputs_count", tx.bin_outputs_count());

    append_line(buffer, "inputs_cnt", tx.inputs_cnt);
    append_line(buffer, "inputs_count", tx.inputs_count);
    for input in &tx.inputs {
        append_tx_input(buffer, input);
    }

    append_line(buffer, "outputs_cnt", tx.outputs_cnt);
    append_line(buffer, "outputs_count", tx.outputs_count);
    for output in &tx.outputs {
        append_tx_output(buffer, output);
    }

    append_line(buffer, "lock_time", tx.lock_time);
    append_line(buffer, "version", tx.version);
}

fn append_tx_request_details(buffer: &mut String, detail: &TxRequestDetailsType) {
    append_line(buffer, "request_index", detail.request_index);

    // tx_hash は空でもラベルだけは出す
    buffer.push_str(NESTED_LINE);
    buffer.push_str("tx_hash: ");
    if !detail.tx_hash.is_empty() {
        buffer.push_str(&hex::encode(&detail.tx_hash));
    }
}

fn append_tx_input(buffer: &mut String, input: &TxInputType) {
    for address_n in &input.address_n {
        append_line(buffer, "address_n", address_n);
    }
    if !input.prev_hash.is_empty() {
        append_line(buffer, "prev_hash", hex::encode(&input.prev_hash));
    }
    append_line(buffer, "prev_index", input.prev_index);
    append_line(buffer, "script_type", input.script_type);
    if !input.script_sig.is_empty() {
        append_line(buffer, "script_sig", hex::encode(&input.script_sig));
    }
}

fn append_tx_output(buffer: &mut String, output: &TxOutputType) {
    if !output.address_bytes.is_empty() {
        append_line(buffer, "address_bytes", hex::encode(&output.address_bytes));
    }
    append_line(buffer, "address", &output.address);
    append_line(buffer, "address_n_count", output.address_n_count());
    for address_n in &output.address_n {
        append_line(buffer, "address_n", address_n);
    }
    append_line(buffer, "amount", output.amount);
    append_line(buffer, "script_type", output.script_type);
}
