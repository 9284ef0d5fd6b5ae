/*!
    PNG signature normalization.
*/

use ffmpeg_types::Result;

/// The 8-byte signature every PNG file starts with.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/**
    Returns true if `data` starts with [`PNG_SIGNATURE`].
*/
pub fn has_png_signature(data: &[u8]) -> bool {
    data.starts_with(&PNG_SIGNATURE)
}

/**
    Copy an encoded packet into an owned buffer that starts with the PNG signature.

    Some encoder builds emit the signature and some don't; the signature is
    prepended only when it is missing.
*/
pub fn normalize_png(packet: &[u8]) -> Result<Vec<u8>> {
    let prefix: &[u8] = if has_png_signature(packet) {
        &[]
    } else {
        log::debug!("encoder omitted the png signature, prepending it");
        &PNG_SIGNATURE
    };

    let output = copy_bytes_with_prefix(prefix, packet)?;
    log::trace!(
        "png output is {} bytes, starting {:02x?}",
        output.len(),
        &output[..output.len().min(16)]
    );
    Ok(output)
}

/**
    Copy `prefix` followed by `data` into a freshly allocated buffer.

    Allocation failure is reported instead of aborting.
*/
pub(crate) fn copy_bytes_with_prefix(prefix: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let mut output = Vec::new();
    output.try_reserve_exact(prefix.len() + data.len())?;
    output.extend_from_slice(prefix);
    output.extend_from_slice(data);
    Ok(output)
}
