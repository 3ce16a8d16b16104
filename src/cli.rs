use clap::Parser;
use std::path::PathBuf;
use bitcoin::Network as BitcoinNetwork;
use trezor_msg_fmt::error::AppError;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct CliArgs {
    /// 文字列化するメッセージを記述したJSONファイルへのパス
    #[clap(short, long, value_parser, conflicts_with = "raw_tx", required_unless_present = "raw_tx")]
    pub input_file: Option<PathBuf>,

    /// TxAck として文字列化する raw transaction hex
    #[clap(short, long, value_parser)]
    pub raw_tx: Option<String>,

    /// raw transaction のアドレス導出に使用するネットワーク ("bitcoin", "testnet", "regtest")
    #[clap(short, long, value_parser, default_value = "testnet")]
    pub network: String,

    /// 区切り文字などを上書きするスタイル設定JSONファイルへのパス
    #[clap(short, long, value_parser)]
    pub style_file: Option<PathBuf>,

    /// 文字列化の結果を保存するファイルへのパス
    #[clap(short, long, value_parser)]
    pub output_file: Option<PathBuf>,
}

pub fn parse_network(network_str: &str) -> Result<BitcoinNetwork, AppError> {
    match network_str.to_lowercase().as_str() {
        "bitcoin" | "mainnet" => Ok(BitcoinNetwork::Bitcoin),
        "testnet" => Ok(BitcoinNetwork::Testnet),
        "regtest" => Ok(BitcoinNetwork::Regtest),
        s => Err(AppError::InputValidation(format!("無効なネットワークが指定されました: {}", s))),
    }
}
