use std::fs::{self, File};
use std::io::Write;
use bitcoin::Transaction;
use clap::Parser;

mod cli;

use cli::{CliArgs, parse_network};
use trezor_msg_fmt::error::AppError;
use trezor_msg_fmt::{Message, StyleConfig, TransactionType, formatter};

fn main() -> Result<(), AppError> {
    env_logger::init();

    let args = CliArgs::parse();
    log::info!("アプリケーションを開始します。引数: {:?}", args);

    let style = match &args.style_file {
        Some(path) => StyleConfig::load(path)?,
        None => StyleConfig::default(),
    };

    let message = match (&args.input_file, &args.raw_tx) {
        (Some(input_file), _) => {
            let content = fs::read_to_string(input_file).map_err(|e| {
                log::error!("入力ファイルの読み込みに失敗しました: {:?}", input_file);
                AppError::Io(e)
            })?;
            let message: Message = serde_json::from_str(&content).map_err(|e| {
                log::error!("入力JSONのパースに失敗しました。");
                AppError::JsonParse {
                    file_path: input_file.clone(),
                    source: e,
                }
            })?;
            message
        }
        (None, Some(raw_tx)) => {
            let network = parse_network(&args.network)?;
            log::info!("指定されたネットワーク: {:?}", network);
            let bytes = hex::decode(raw_tx.trim())?;
            let tx: Transaction = bitcoin::consensus::deserialize(&bytes)?;
            log::debug!("raw transaction のデコード成功: txid={}", tx.compute_txid());
            Message::new("TxAck").with_field("tx", TransactionType::from_bitcoin(&tx, network))
        }
        (None, None) => {
            return Err(AppError::InputValidation("--input-file か --raw-tx のどちらかを指定してください".to_string()));
        }
    };
    log::debug!("メッセージ {} ({} フィールド) を文字列化します。", message.name, message.fields.len());

    let rendered = formatter::to_debug_string_with(&message, &style);
    println!("{}", rendered);

    if let Some(output_path) = &args.output_file {
        let mut output_file = File::create(output_path).map_err(|e| {
            log::error!("出力ファイルの作成に失敗しました: {:?}", output_path);
            AppError::Io(e)
        })?;
        output_file.write_all(rendered.as_bytes()).map_err(|e| {
            log::error!("出力ファイルへの書き込みに失敗しました。");
            AppError::Io(e)
        })?;
        log::info!("文字列化の結果を {:?} に保存しました。", output_path);
    }

    log::info!("処理が正常に完了しました。");
    Ok(())
}
