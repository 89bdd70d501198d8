//! Challenge record identity

use crate::types::DnsRecord;

/// Whether `record` is the challenge record for `(record_name, zone, content)`.
///
/// The listed name must equal `record_name + "." + zone` byte for byte and the
/// content must be present and identical. No case folding and no trailing-dot
/// tolerance; the record type is not checked.
pub fn record_matches(record: &DnsRecord, record_name: &str, zone: &str, content: &str) -> bool {
    let name_matches = record
        .name
        .strip_prefix(record_name)
        .and_then(|rest| rest.strip_prefix('.'))
        .is_some_and(|rest| rest == zone);

    name_matches && record.content.as_deref() == Some(content)
}
