//! JSON-Codec für das Firestore-REST-Format (typisierte Feldwerte).

use crate::core::{LatLng, MarkerDocument};
use crate::store::StoreError;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Map, Value};

/// Kodiert eine Position als `mapValue` mit `lat`/`lng` als `doubleValue`.
pub fn location_value(location: LatLng) -> Value {
    json!({
        "mapValue": {
            "fields": {
                "lat": { "doubleValue": location.lat },
                "lng": { "doubleValue": location.lng },
            }
        }
    })
}

/// Request-Body für das Anlegen eines Marker-Dokuments.
pub fn encode_document(document: &MarkerDocument) -> Value {
    json!({
        "fields": {
            "id": { "integerValue": document.id.to_string() },
            "location": location_value(document.location),
            "timestamp": {
                "timestampValue": document.timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
            },
        }
    })
}

/// Request-Body für ein Update, das nur `location` setzt.
pub fn encode_location_patch(location: LatLng) -> Value {
    json!({
        "fields": {
            "location": location_value(location),
        }
    })
}

/// Request-Body für einen atomaren Commit mit Delete-Writes.
pub fn encode_batch_delete(document_names: &[String]) -> Value {
    let writes: Vec<Value> = document_names
        .iter()
        .map(|name| json!({ "delete": name }))
        .collect();
    json!({ "writes": writes })
}

/// Extrahiert die Dokument-ID (letztes Pfadsegment) aus einem Ressourcennamen.
pub fn document_id_from_name(name: &str) -> Result<String, StoreError> {
    match name.rsplit_once('/') {
        Some((_, id)) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(StoreError::Decode(format!(
            "document name without id: {name:?}"
        ))),
    }
}

/// Liest die Dokument-ID aus der Antwort eines Creates (Feld `name`).
pub fn created_document_id(value: &Value) -> Result<String, StoreError> {
    let name = value
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| StoreError::Decode("missing document name".to_string()))?;
    document_id_from_name(name)
}

/// Dekodiert ein Firestore-Dokument in Dokument-ID und Marker-Payload.
pub fn decode_document(value: &Value) -> Result<(String, MarkerDocument), StoreError> {
    let doc_id = created_document_id(value)?;

    let fields = value
        .get("fields")
        .and_then(Value::as_object)
        .ok_or_else(|| StoreError::Decode("missing document fields".to_string()))?;

    let id = integer_field(fields, "id")?;
    let location = fields
        .get("location")
        .and_then(|v| v.get("mapValue"))
        .and_then(|v| v.get("fields"))
        .and_then(Value::as_object)
        .ok_or_else(|| StoreError::Decode("missing location map".to_string()))?;
    let location = LatLng::new(
        number_field(location, "lat")?,
        number_field(location, "lng")?,
    );

    let timestamp = fields
        .get("timestamp")
        .and_then(|v| v.get("timestampValue"))
        .and_then(Value::as_str)
        .ok_or_else(|| StoreError::Decode("missing timestamp".to_string()))?;
    let timestamp = DateTime::parse_from_rfc3339(timestamp)
        .map_err(|e| StoreError::Decode(format!("invalid timestamp: {e}")))?
        .with_timezone(&Utc);

    Ok((
        doc_id,
        MarkerDocument {
            id,
            location,
            timestamp,
        },
    ))
}

/// Übersetzt eine Fehlerantwort (`{"error": {"code", "message", "status"}}`).
pub fn decode_error(status: u16, body: &str) -> StoreError {
    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().chars().take(200).collect());

    if status == 404 {
        StoreError::NotFound(message)
    } else {
        StoreError::Http { status, message }
    }
}

fn integer_field(fields: &Map<String, Value>, key: &str) -> Result<u64, StoreError> {
    let value = fields
        .get(key)
        .and_then(|v| v.get("integerValue"))
        .ok_or_else(|| StoreError::Decode(format!("missing integer field {key}")))?;

    // Firestore liefert int64 als String, akzeptiert aber auch Zahlen
    match value {
        Value::String(s) => s
            .parse()
            .map_err(|_| StoreError::Decode(format!("invalid integer in {key}: {s:?}"))),
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| StoreError::Decode(format!("invalid integer in {key}: {n}"))),
        _ => Err(StoreError::Decode(format!("invalid integer in {key}"))),
    }
}

fn number_field(fields: &Map<String, Value>, key: &str) -> Result<f64, StoreError> {
    let field = fields
        .get(key)
        .ok_or_else(|| StoreError::Decode(format!("missing number field {key}")))?;

    if let Some(v) = field.get("doubleValue").and_then(Value::as_f64) {
        return Ok(v);
    }
    // Ganze Zahlen kommen als integerValue-String zurück
    field
        .get("integerValue")
        .and_then(|v| match v {
            Value::String(s) => s.parse::<f64>().ok(),
            other => other.as_f64(),
        })
        .ok_or_else(|| StoreError::Decode(format!("invalid number field {key}")))
}
