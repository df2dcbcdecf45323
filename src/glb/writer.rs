//! GLB container assembly.

use super::format::*;

/// Assemble a GLB container from a JSON payload and an optional buffer.
///
/// Chunk payloads are padded to the 4-byte boundary (spaces for JSON, zeros
/// for the buffer) and the padding is counted in the chunk length, matching
/// what common exporters emit.
pub fn assemble(json: &[u8], bin: Option<&[u8]>) -> Vec<u8> {
    let json_chunk_len = padded_len(json.len());
    let bin_chunk_len = bin.map_or(0, |b| padded_len(b.len()));

    let mut total = HEADER_SIZE + CHUNK_HEADER_SIZE + json_chunk_len;
    if bin.is_some() {
        total += CHUNK_HEADER_SIZE + bin_chunk_len;
    }

    let mut out = Vec::with_capacity(total);

    // Header
    out.extend_from_slice(GLB_MAGIC);
    out.extend_from_slice(&SUPPORTED_VERSION.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());

    // JSON chunk
    out.extend_from_slice(&(json_chunk_len as u32).to_le_bytes());
    out.extend_from_slice(&CHUNK_JSON.to_le_bytes());
    out.extend_from_slice(json);
    out.resize(out.len() + pad_for(json.len()), JSON_PAD_BYTE);

    // BIN chunk
    if let Some(bin) = bin {
        out.extend_from_slice(&(bin_chunk_len as u32).to_le_bytes());
        out.extend_from_slice(&CHUNK_BIN.to_le_bytes());
        out.extend_from_slice(bin);
        out.resize(out.len() + pad_for(bin.len()), BIN_PAD_BYTE);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_length_matches() {
        let data = assemble(b"{\"a\":1}", Some(&[9, 9, 9]));
        let declared = u32::from_le_bytes(data[8..12].try_into().unwrap());
        assert_eq!(declared as usize, data.len());
        assert_eq!(data.len() % CHUNK_ALIGN, 0);
    }

    #[test]
    fn test_json_padded_with_spaces() {
        let data = assemble(b"{}", None);
        assert_eq!(&data[HEADER_SIZE + CHUNK_HEADER_SIZE..], b"{}  ");
    }

    #[test]
    fn test_bin_padded_with_zeros() {
        let data = assemble(b"{}", Some(&[0xFF; 5]));
        assert_eq!(&data[data.len() - 8..], &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0]);
    }
}
