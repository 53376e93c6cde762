//! Content-Format codes carried by the Content-Type and Accept options.

/// text/plain; charset=utf-8
pub const TEXT_PLAIN: u16 = 0;
/// text/xml
pub const TEXT_XML: u16 = 1;
/// text/csv
pub const TEXT_CSV: u16 = 2;
/// text/html
pub const TEXT_HTML: u16 = 3;
/// image/gif
pub const IMAGE_GIF: u16 = 21;
/// image/jpeg
pub const IMAGE_JPEG: u16 = 22;
/// image/png
pub const IMAGE_PNG: u16 = 23;
/// image/tiff
pub const IMAGE_TIFF: u16 = 24;
/// audio/raw
pub const AUDIO_RAW: u16 = 25;
/// video/raw
pub const VIDEO_RAW: u16 = 26;
/// application/link-format
pub const APPLICATION_LINK_FORMAT: u16 = 40;
/// application/xml
pub const APPLICATION_XML: u16 = 41;
/// application/octet-stream
pub const APPLICATION_OCTET_STREAM: u16 = 42;
/// application/rdf+xml
pub const APPLICATION_RDF_XML: u16 = 43;
/// application/soap+xml
pub const APPLICATION_SOAP_XML: u16 = 44;
/// application/atom+xml
pub const APPLICATION_ATOM_XML: u16 = 45;
/// application/xmpp+xml
pub const APPLICATION_XMPP_XML: u16 = 46;
/// application/exi
pub const APPLICATION_EXI: u16 = 47;
/// application/x-bxml
pub const APPLICATION_X_BXML: u16 = 48;
/// application/fastinfoset
pub const APPLICATION_FASTINFOSET: u16 = 49;
/// application/soap+fastinfoset
pub const APPLICATION_SOAP_FASTINFOSET: u16 = 50;
/// application/json
pub const APPLICATION_JSON: u16 = 51;

/// Look up the media type name for a content-format code.
///
/// # Parameters
/// * `code` - The decoded Content-Type or Accept value
///
/// # Returns
/// * `Some(name)` for a registered code
/// * `None` otherwise
///
/// # Example
/// ```
/// use coap_option_wire::media_type;
///
/// assert_eq!(media_type::name(51), Some("application/json"));
/// assert_eq!(media_type::name(9999), None);
/// ```
pub fn name(code: u64) -> Option<&'static str> {
    let code = u16::try_from(code).ok()?;
    let name = match code {
        TEXT_PLAIN => "text/plain",
        TEXT_XML => "text/xml",
        TEXT_CSV => "text/csv",
        TEXT_HTML => "text/html",
        IMAGE_GIF => "image/gif",
        IMAGE_JPEG => "image/jpeg",
        IMAGE_PNG => "image/png",
        IMAGE_TIFF => "image/tiff",
        AUDIO_RAW => "audio/raw",
        VIDEO_RAW => "video/raw",
        APPLICATION_LINK_FORMAT => "application/link-format",
        APPLICATION_XML => "application/xml",
        APPLICATION_OCTET_STREAM => "application/octet-stream",
        APPLICATION_RDF_XML => "application/rdf+xml",
        APPLICATION_SOAP_XML => "application/soap+xml",
        APPLICATION_ATOM_XML => "application/atom+xml",
        APPLICATION_XMPP_XML => "application/xmpp+xml",
        APPLICATION_EXI => "application/exi",
        APPLICATION_X_BXML => "application/x-bxml",
        APPLICATION_FASTINFOSET => "application/fastinfoset",
        APPLICATION_SOAP_FASTINFOSET => "application/soap+fastinfoset",
        APPLICATION_JSON => "application/json",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(name(TEXT_PLAIN as u64), Some("text/plain"));
        assert_eq!(name(APPLICATION_LINK_FORMAT as u64), Some("application/link-format"));
        assert_eq!(name(APPLICATION_XML as u64), Some("application/xml"));
        assert_eq!(name(IMAGE_PNG as u64), Some("image/png"));
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(name(4), None);
        assert_eq!(name(52), None);
        // Does not wrap into the u16 range
        assert_eq!(name(0x1_0000 + APPLICATION_JSON as u64), None);
    }
}
