use std::path::PathBuf;
use bitcoin::consensus::encode::Error as BitcoinEncodeError;
use thiserror::Error;

// 描画処理そのものは失敗しない。ここにあるのは設定読み込みとバイナリ側のエラーのみ。
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/Oエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSONパースエラー ファイル: {file_path:?}, 詳細: {source}")]
    JsonParse {
        file_path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("16進数デコードエラー: {0}")]
    HexDecode(#[from] hex::FromHexError),

    #[error("Bitcoinコンセンサスエンコードエラー: {0}")]
    BitcoinConsensus(#[from] BitcoinEncodeError),

    #[error("入力検証エラー: {0}")]
    InputValidation(String),
}
