//! Flat tabular export
//!
//! Serializes a record set as CSV with the fixed column order
//! `actor_id,actor_role,action,target_user_id,target_role,description,created_at`.
//! Only the admin export endpoint uses this; filtering and ordering happen
//! upstream in the store query.

use crate::record::AuditRecord;
use time::format_description::well_known::Rfc3339;

const HEADER: &str = "actor_id,actor_role,action,target_user_id,target_role,description,created_at";

/// Render records as CSV, header first
pub fn export_csv(records: &[AuditRecord]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for record in records {
        let created_at = record
            .created_at
            .format(&Rfc3339)
            .unwrap_or_default();
        let row = [
            record.actor_id.uuid().to_string(),
            record.actor_role.to_string(),
            record.action.to_string(),
            record
                .target_user_id
                .map(|id| id.uuid().to_string())
                .unwrap_or_default(),
            record
                .target_role
                .map(|role| role.to_string())
                .unwrap_or_default(),
            record.description.clone(),
            created_at,
        ];
        let mut first = true;
        for field in row {
            if !first {
                out.push(',');
            }
            first = false;
            out.push_str(&quote(&field));
        }
        out.push('\n');
    }
    out
}

fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
