//! CSV export of flat tabular records.
//!
//! The column set is taken from the first record. Later records are not
//! validated against it: missing fields become empty cells and extra fields
//! are dropped. Every cell is quoted.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::format::{NumberLocale, format_number};

pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8";

/// A single cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum CsvValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Date(DateTime<Utc>),
    Json(Value),
}

impl From<Value> for CsvValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => CsvValue::Null,
            Value::Bool(b) => CsvValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => CsvValue::Integer(i),
                None => n.as_f64().map(CsvValue::Float).unwrap_or(CsvValue::Json(Value::Number(n))),
            },
            Value::String(s) => CsvValue::Text(s),
            other => CsvValue::Json(other),
        }
    }
}

impl From<&str> for CsvValue {
    fn from(value: &str) -> Self {
        CsvValue::Text(value.to_string())
    }
}

impl From<String> for CsvValue {
    fn from(value: String) -> Self {
        CsvValue::Text(value)
    }
}

impl From<i64> for CsvValue {
    fn from(value: i64) -> Self {
        CsvValue::Integer(value)
    }
}

impl From<i32> for CsvValue {
    fn from(value: i32) -> Self {
        CsvValue::Integer(value.into())
    }
}

impl From<u32> for CsvValue {
    fn from(value: u32) -> Self {
        CsvValue::Integer(value.into())
    }
}

impl From<u64> for CsvValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map(CsvValue::Integer).unwrap_or(CsvValue::Float(value as f64))
    }
}

impl From<f64> for CsvValue {
    fn from(value: f64) -> Self {
        CsvValue::Float(value)
    }
}

impl From<bool> for CsvValue {
    fn from(value: bool) -> Self {
        CsvValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for CsvValue {
    fn from(value: DateTime<Utc>) -> Self {
        CsvValue::Date(value)
    }
}

impl<T: Into<CsvValue>> From<Option<T>> for CsvValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CsvValue::Null)
    }
}

/// Field name to value mapping that keeps insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CsvRecord {
    fields: Vec<(String, CsvValue)>,
}

impl CsvRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field. Re-setting a field keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<CsvValue>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<CsvValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&CsvValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build a record from any value that serializes to a map, keeping the
    /// field declaration order.
    pub fn from_serialize<T: Serialize>(row: &T) -> serde_json::Result<Self> {
        match serde_json::to_value(row)? {
            Value::Object(map) => Ok(map.into()),
            other => Err(<serde_json::Error as serde::ser::Error>::custom(format!(
                "csv record must serialize to a map, got {other}"
            ))),
        }
    }
}

impl From<serde_json::Map<String, Value>> for CsvRecord {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        let fields = map.into_iter().map(|(k, v)| (k, CsvValue::from(v))).collect();
        Self { fields }
    }
}

pub fn records_from_serialize<T: Serialize>(rows: &[T]) -> serde_json::Result<Vec<CsvRecord>> {
    rows.iter().map(CsvRecord::from_serialize).collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CsvExportOptions {
    /// Locale used for numeric cells. Defaults to `tr-TR`.
    pub number_locale: NumberLocale,
    /// Defaults to `,`.
    pub delimiter: char,
    /// Defaults to `\n`.
    pub line_terminator: String,
    /// Defaults to [`CSV_MIME_TYPE`].
    pub mime_type: String,
}

impl Default for CsvExportOptions {
    fn default() -> Self {
        Self {
            number_locale: NumberLocale::turkish(),
            delimiter: ',',
            line_terminator: "\n".to_string(),
            mime_type: CSV_MIME_TYPE.to_string(),
        }
    }
}

/// A rendered CSV file ready to be handed to a download mechanism.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvDocument {
    pub filename: String,
    pub mime_type: String,
    pub content: String,
}

impl CsvDocument {
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }
}

/// Platform mechanism that hands a document to the user.
pub trait CsvDownloadSink {
    type Error;

    fn deliver(&mut self, document: &CsvDocument) -> Result<(), Self::Error>;
}

fn double_quotes(text: &str) -> String {
    text.replace('"', "\"\"")
}

/// Cell text before quoting.
pub fn escape_value(value: &CsvValue, options: &CsvExportOptions) -> String {
    match value {
        CsvValue::Null => String::new(),
        CsvValue::Date(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        CsvValue::Integer(i) => format_number(*i as f64, &options.number_locale),
        CsvValue::Float(f) => format_number(*f, &options.number_locale),
        CsvValue::Text(s) => double_quotes(s),
        CsvValue::Bool(b) => b.to_string(),
        CsvValue::Json(v) => double_quotes(&v.to_string()),
    }
}

fn quoted(cell: &str) -> String {
    format!("\"{cell}\"")
}

/// Serialize `rows` to CSV text. `None` when there is nothing to export.
pub fn render_csv(rows: &[CsvRecord], options: &CsvExportOptions) -> Option<String> {
    let headers: Vec<&str> = rows.first()?.keys().collect();
    if headers.is_empty() {
        return None;
    }
    let delimiter = options.delimiter.to_string();

    let header_line = headers
        .iter()
        .map(|h| quoted(&double_quotes(h)))
        .collect::<Vec<_>>()
        .join(&delimiter);

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header_line);
    for row in rows {
        let line = headers
            .iter()
            .map(|h| {
                let cell = row.get(h).map(|v| escape_value(v, options)).unwrap_or_default();
                quoted(&cell)
            })
            .collect::<Vec<_>>()
            .join(&delimiter);
        lines.push(line);
    }
    Some(lines.join(&options.line_terminator))
}

pub fn build_csv_document(
    filename: &str,
    rows: &[CsvRecord],
    options: &CsvExportOptions,
) -> Option<CsvDocument> {
    let content = render_csv(rows, options)?;
    Some(CsvDocument {
        filename: filename.to_string(),
        mime_type: options.mime_type.clone(),
        content,
    })
}

/// Render `rows` and hand the file to `sink`.
///
/// Returns `Ok(false)` without touching the sink when there is nothing to
/// export.
pub fn export_csv<S: CsvDownloadSink>(
    filename: &str,
    rows: &[CsvRecord],
    options: &CsvExportOptions,
    sink: &mut S,
) -> Result<bool, S::Error> {
    let Some(document) = build_csv_document(filename, rows, options) else {
        return Ok(false);
    };
    sink.deliver(&document)?;
    Ok(true)
}


#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde::Serialize;

    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        delivered: Vec<CsvDocument>,
    }

    impl CsvDownloadSink for RecordingSink {
        type Error = std::convert::Infallible;

        fn deliver(&mut self, document: &CsvDocument) -> Result<(), Self::Error> {
            self.delivered.push(document.clone());
            Ok(())
        }
    }

    fn options() -> CsvExportOptions {
        CsvExportOptions::default()
    }

    #[test]
    fn empty_rows_produce_no_download() {
        let mut sink = RecordingSink::default();
        let exported = export_csv("f.csv", &[], &options(), &mut sink).unwrap();
        assert!(!exported);
        assert!(sink.delivered.is_empty());
    }

    #[test]
    fn first_record_without_fields_produces_no_download() {
        let mut sink = RecordingSink::default();
        let rows = vec![CsvRecord::new(), CsvRecord::new().with("a", 1)];
        let exported = export_csv("f.csv", &rows, &options(), &mut sink).unwrap();
        assert!(!exported);
        assert!(sink.delivered.is_empty());
    }

    #[test]
    fn embedded_comma_stays_in_one_cell() {
        let rows = vec![CsvRecord::new().with("a", 1).with("b", "x,y")];
        let csv = render_csv(&rows, &options()).unwrap();
        assert_eq!(csv, "\"a\",\"b\"\n\"1\",\"x,y\"");
    }

    #[test]
    fn embedded_quote_is_doubled() {
        let rows = vec![CsvRecord::new().with("a", r#"he said "hi""#)];
        let csv = render_csv(&rows, &options()).unwrap();
        assert_eq!(csv, "\"a\"\n\"he said \"\"hi\"\"\"");
    }

    #[test]
    fn export_delivers_document_with_mime_type() {
        let mut sink = RecordingSink::default();
        let rows = vec![CsvRecord::new().with("period", "2024/12").with("equity", 1_234_567.5)];
        let exported = export_csv("tsgyo-kpi.csv", &rows, &options(), &mut sink).unwrap();
        assert!(exported);
        assert_eq!(sink.delivered.len(), 1);
        let doc = &sink.delivered[0];
        assert_eq!(doc.filename, "tsgyo-kpi.csv");
        assert_eq!(doc.mime_type, "text/csv;charset=utf-8");
        assert_eq!(doc.content, "\"period\",\"equity\"\n\"2024/12\",\"1.234.567,5\"");
        assert_eq!(doc.as_bytes(), doc.content.as_bytes());
    }

    #[test]
    fn heterogeneous_records_follow_first_header() {
        let rows = vec![
            CsvRecord::new().with("a", 1).with("b", 2),
            CsvRecord::new().with("b", 3).with("c", 4),
        ];
        let csv = render_csv(&rows, &options()).unwrap();
        assert_eq!(csv, "\"a\",\"b\"\n\"1\",\"2\"\n\"\",\"3\"");
    }

    #[test]
    fn value_escaping() {
        let opts = options();
        let date = Utc.with_ymd_and_hms(2024, 10, 27, 10, 45, 0).unwrap();
        assert_eq!(escape_value(&CsvValue::Null, &opts), "");
        assert_eq!(escape_value(&CsvValue::Date(date), &opts), "2024-10-27T10:45:00.000Z");
        assert_eq!(escape_value(&CsvValue::Integer(1_500_000), &opts), "1.500.000");
        assert_eq!(escape_value(&CsvValue::Float(0.25), &opts), "0,25");
        assert_eq!(escape_value(&CsvValue::Bool(true), &opts), "true");
        assert_eq!(
            escape_value(&CsvValue::Json(serde_json::json!({"k": "v"})), &opts),
            "{\"\"k\"\":\"\"v\"\"}"
        );
    }

    #[derive(Serialize)]
    struct Property {
        name: String,
        city: Option<String>,
        rooms: Option<i64>,
        valuation_value_tl: f64,
    }

    #[test]
    fn records_from_structs_keep_field_order() {
        let rows = vec![
            Property { name: "Pendorya AVM".into(), city: Some("İstanbul".into()), rooms: None, valuation_value_tl: 2_050_000_000.0 },
            Property { name: "Divan Adana".into(), city: None, rooms: Some(155), valuation_value_tl: 700_000_000.0 },
        ];
        let records = records_from_serialize(&rows).unwrap();
        let csv = render_csv(&records, &options()).unwrap();
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines[0], "\"name\",\"city\",\"rooms\",\"valuation_value_tl\"");
        assert_eq!(lines[1], "\"Pendorya AVM\",\"İstanbul\",\"\",\"2.050.000.000\"");
        assert_eq!(lines[2], "\"Divan Adana\",\"\",\"155\",\"700.000.000\"");
    }

    #[test]
    fn non_map_rows_are_rejected() {
        assert!(CsvRecord::from_serialize(&42).is_err());
    }

    #[test]
    fn reinserting_a_field_keeps_position() {
        let record = CsvRecord::new().with("a", 1).with("b", 2).with("a", 3);
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(record.get("a"), Some(&CsvValue::Integer(3)));
    }

    #[test]
    fn custom_delimiter_and_terminator() {
        let opts = CsvExportOptions { delimiter: ';', line_terminator: "\r\n".into(), ..options() };
        let rows = vec![CsvRecord::new().with("a", "x").with("b", "y")];
        assert_eq!(render_csv(&rows, &opts).unwrap(), "\"a\";\"b\"\r\n\"x\";\"y\"");
    }
}
