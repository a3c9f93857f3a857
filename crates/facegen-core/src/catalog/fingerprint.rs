// crates/facegen-core/src/catalog/fingerprint.rs
//
// Stable catalog id: blake3 over the canonical JSON encoding, truncated to 16 bytes.
// Maps are BTreeMaps, so the encoding is order-stable.

use crate::catalog::Catalog;
use crate::error::Result;

pub fn blake3_16(bytes: &[u8]) -> [u8; 16] {
    let hash = blake3::hash(bytes);
    let mut out = [0u8; 16];
    out.copy_from_slice(&hash.as_bytes()[0..16]);
    out
}

pub fn catalog_id_16(catalog: &Catalog) -> Result<[u8; 16]> {
    let canonical = serde_json::to_vec(catalog)?;
    Ok(blake3_16(&canonical))
}

pub fn catalog_id_hex(catalog: &Catalog) -> Result<String> {
    let id = catalog_id_16(catalog)?;
    Ok(id.iter().map(|b| format!("{b:02x}")).collect())
}
