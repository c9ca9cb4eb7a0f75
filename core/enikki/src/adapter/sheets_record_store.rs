//! Google スプレッドシート（Sheets API v4 REST）を記録先にする RecordStore
//!
//! 1 行目を見出しとして読み、以降の行を見出し → セルの対応にする。
//! 追記は `values/{range}:append`。認証は外部で取得したアクセストークン（Bearer）のみ。

use crate::adapter::config::SheetsSettings;
use crate::domain::{DiaryRow, StoredRecord};
use crate::ports::outbound::RecordStore;
use common::error::Error;
use common::http::HttpTransport;
use serde::Deserialize;
use serde_json::Value;

const LABEL: &str = "Sheets API";

/// `values.get` のレスポンス（空のシートでは values が省略される）
#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<Value>>,
}

pub struct SheetsRecordStore {
    transport: HttpTransport,
    settings: SheetsSettings,
    token: Option<String>,
}

impl SheetsRecordStore {
    pub fn new(settings: SheetsSettings, token: Option<String>, transport: HttpTransport) -> Self {
        Self {
            transport,
            settings,
            token,
        }
    }

    fn spreadsheet_id(&self) -> Result<&str, Error> {
        self.settings
            .spreadsheet_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::store_unavailable("sheets.spreadsheet_id is not configured"))
    }

    fn token(&self) -> Result<&str, Error> {
        self.token.as_deref().filter(|t| !t.is_empty()).ok_or_else(|| {
            Error::store_unavailable(format!("{} is not set", self.settings.token_env))
        })
    }

    /// `{base}/spreadsheets/{id}` に続くパスを組み立てる（範囲はパス要素としてエスケープ）
    fn url(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<String, Error> {
        let id = self.spreadsheet_id()?;
        let mut url = reqwest::Url::parse(&self.settings.base_url).map_err(|e| {
            Error::store_unavailable(format!("invalid sheets base_url: {}", e))
        })?;
        url.path_segments_mut()
            .map_err(|_| Error::store_unavailable("sheets base_url cannot have a path"))?
            .pop_if_empty()
            .push("spreadsheets")
            .push(id)
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url.to_string())
    }
}

fn unavailable(e: Error) -> Error {
    match e {
        Error::StoreUnavailable(_) => e,
        other => Error::store_unavailable(other.to_string()),
    }
}

/// セルの値を文字列にする（FORMATTED_VALUE では通常すべて文字列）
fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// 1 行目を見出しとして行を変換する。短い行は空文字で埋め、見出しが空の列は捨てる
pub fn records_from_values(values: &[Vec<Value>]) -> Vec<StoredRecord> {
    let Some((header_row, data_rows)) = values.split_first() else {
        return Vec::new();
    };
    let headers: Vec<String> = header_row.iter().map(cell_text).collect();
    data_rows
        .iter()
        .map(|row| {
            StoredRecord::from_pairs(headers.iter().enumerate().filter(|(_, h)| !h.is_empty()).map(
                |(i, header)| {
                    let cell = row.get(i).map(cell_text).unwrap_or_default();
                    (header.clone(), cell)
                },
            ))
        })
        .collect()
}

impl RecordStore for SheetsRecordStore {
    fn check_connection(&self) -> Result<(), Error> {
        let token = self.token()?;
        let url = self.url(&[], &[("fields", "spreadsheetId")])?;
        self.transport
            .get(&url, Some(token), LABEL)
            .map(|_| ())
            .map_err(unavailable)
    }

    fn append_row(&self, row: &DiaryRow) -> Result<(), Error> {
        let token = self.token()?;
        let target = format!("{}:append", self.settings.range);
        let url = self.url(
            &["values", target.as_str()],
            &[("valueInputOption", "RAW"), ("insertDataOption", "INSERT_ROWS")],
        )?;
        let body = serde_json::json!({ "values": [row.to_fields()] });
        self.transport
            .post_json(&url, Some(token), body.to_string(), LABEL)
            .map(|_| ())
            .map_err(unavailable)
    }

    fn read_all_rows(&self) -> Result<Vec<StoredRecord>, Error> {
        let token = self.token()?;
        let url = self.url(&["values", self.settings.range.as_str()], &[])?;
        let text = self
            .transport
            .get(&url, Some(token), LABEL)
            .map_err(unavailable)?;
        let range: ValueRange = serde_json::from_str(&text)
            .map_err(|e| Error::json(format!("Failed to parse Sheets response: {}", e)))?;
        Ok(records_from_values(&range.values))
    }
}
