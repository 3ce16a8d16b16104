use bitcoin::{hashes::Hash, network::Network as BitcoinNetwork, Address, Transaction};

use crate::types::{TransactionType, TxInputType, TxOutputBinType, TxOutputType};

// デバイスプロトコルのスクリプトタイプ番号
pub const SPENDADDRESS: u32 = 0;
pub const PAYTOADDRESS: u32 = 0;
pub const PAYTOSCRIPTHASH: u32 = 1;

impl TransactionType {
    /// bitcoin::Transaction からデバイスに渡すトランザクション骨格を組み立てる。
    /// 導出パス (address_n) はウォレット側の情報なので空のまま
    pub fn from_bitcoin(tx: &Transaction, network: BitcoinNetwork) -> Self {
        let inputs: Vec<TxInputType> = tx
            .input
            .iter()
            .map(|tx_in| {
                // デバイスは表示順 (ビッグエンディアン) のハッシュを期待する
                let mut prev_hash = tx_in.previous_output.txid.to_byte_array().to_vec();
                prev_hash.reverse();
                TxInputType {
                    address_n: Vec::new(),
                    prev_hash,
                    prev_index: tx_in.previous_output.vout,
                    script_type: SPENDADDRESS,
                    script_sig: tx_in.script_sig.as_bytes().to_vec(),
                }
            })
            .collect();

        let outputs: Vec<TxOutputType> = tx
            .output
            .iter()
            .enumerate()
            .map(|(index, tx_out)| {
                let address = match Address::from_script(&tx_out.script_pubkey, network) {
                    Ok(addr) => addr.to_string(),
                    Err(e) => {
                        log::debug!("出力 {} のアドレス導出に失敗したため空文字列とします: {}", index, e);
                        String::new()
                    }
                };
                let script_type = if tx_out.script_pubkey.is_p2sh() { PAYTOSCRIPTHASH } else { PAYTOADDRESS };
                TxOutputType {
                    address_bytes: Vec::new(),
                    address,
                    address_n: Vec::new(),
                    amount: tx_out.value.to_sat(),
                    script_type,
                }
            })
            .collect();

        let bin_outputs = tx
            .output
            .iter()
            .map(|tx_out| TxOutputBinType {
                amount: tx_out.value.to_sat(),
                script_pubkey: tx_out.script_pubkey.as_bytes().to_vec(),
            })
            .collect();

        let inputs_cnt = inputs.len() as u32;
        let outputs_cnt = outputs.len() as u32;
        log::debug!("トランザクション骨格を生成: 入力 {} 件, 出力 {} 件", inputs_cnt, outputs_cnt);

        TransactionType {
            bin_outputs,
            inputs_cnt,
            inputs_count: inputs_cnt,
            inputs,
            outputs_cnt,
            outputs_count: outputs_cnt,
            outputs,
            lock_time: tx.lock_time.to_consensus_u32(),
            version: tx.version.0 as u32,
        }
    }
}
