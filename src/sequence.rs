//! Helpers over ordered sequences of options.
//!
//! Multi-valued options such as Uri-Path or Location-Query carry one segment
//! per option; [`split`] and [`join`] convert between the segments and a
//! delimited string. The fencepost functions support serializers that write
//! options as number deltas with a bounded delta field.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::Result;
use crate::field::sequence::{FENCEPOST_DIVISOR, MAX_OPTION_DELTA};
use crate::options::CoapOption;

/// Split delimited text into one text option per non-empty segment.
///
/// # Parameters
/// * `number` - The option number of every created option
/// * `text` - The delimited text
/// * `delimiter` - The segment separator
///
/// # Returns
/// * `Ok(options)` in segment order; empty text yields no options
/// * `Err(Error::UnsupportedConversion)` if the option does not carry text
///
/// # Example
/// ```
/// use coap_option_wire::registry::OptionNumber;
/// use coap_option_wire::sequence;
///
/// let options = sequence::split(OptionNumber::UriPath, "/sensors//temp", "/").unwrap();
/// assert_eq!(options.len(), 2);
/// assert_eq!(sequence::join(&options, "/").unwrap(), "/sensors/temp");
/// ```
pub fn split(number: impl Into<u16>, text: &str, delimiter: &str) -> Result<Vec<CoapOption>> {
    let number = number.into();
    text.split(delimiter)
        .filter(|segment| !segment.is_empty())
        .map(|segment| CoapOption::from_text(number, segment))
        .collect()
}

/// Join the text values of options, each preceded by the delimiter.
///
/// The result starts with the delimiter unless `options` is empty. Options
/// with an absent value contribute an empty segment.
///
/// # Errors
/// * `Error::UnsupportedConversion` if an option does not carry text
/// * `Error::InvalidUtf8` if an option value is not valid UTF-8
pub fn join(options: &[CoapOption], delimiter: &str) -> Result<String> {
    let mut out = String::new();
    for option in options {
        out.push_str(delimiter);
        if let Some(text) = option.text()? {
            out.push_str(&text);
        }
    }
    Ok(out)
}

/// Whether `number` is a fencepost option number.
pub fn is_fencepost(number: u16) -> bool {
    number % FENCEPOST_DIVISOR == 0
}

/// Smallest fencepost number strictly greater than `number`.
///
/// # Returns
/// * `Some(fencepost)`
/// * `None` if it would exceed `u16::MAX`
pub fn next_fencepost(number: u16) -> Option<u16> {
    (number / FENCEPOST_DIVISOR + 1).checked_mul(FENCEPOST_DIVISOR)
}

/// Fencepost numbers to insert between two consecutive options.
///
/// A serializer writing option `next` after option `last` must first write
/// a valueless option for each returned number, in order, so that no option
/// delta exceeds the header's delta field.
///
/// # Parameters
/// * `last` - Number of the previously written option (0 before the first)
/// * `next` - Number of the option about to be written, not below `last`
///
/// # Example
/// ```
/// use coap_option_wire::sequence::fencepost_fillers;
///
/// assert!(fencepost_fillers(0, 15).is_empty());
/// assert_eq!(fencepost_fillers(5, 40), [14, 28]);
/// ```
pub fn fencepost_fillers(last: u16, next: u16) -> Vec<u16> {
    let mut fillers = Vec::new();
    let mut current = last;
    while next.saturating_sub(current) > MAX_OPTION_DELTA {
        match next_fencepost(current) {
            Some(fencepost) => {
                fillers.push(fencepost);
                current = fencepost;
            }
            None => break,
        }
    }
    if !fillers.is_empty() {
        log::debug!("inserting {} fencepost(s) between options {} and {}", fillers.len(), last, next);
    }
    fillers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::ValueKind;
    use crate::error::Error;
    use crate::registry::OptionNumber;

    fn texts(options: &[CoapOption]) -> Vec<String> {
        options
            .iter()
            .map(|option| option.text().unwrap().unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_split() {
        let options = split(OptionNumber::UriPath, "a/b/c", "/").unwrap();
        assert_eq!(texts(&options), ["a", "b", "c"]);
        assert!(options.iter().all(|option| option.number() == 9));
    }

    #[test]
    fn test_split_drops_empty_segments() {
        let options = split(OptionNumber::UriPath, "/a//b/", "/").unwrap();
        assert_eq!(texts(&options), ["a", "b"]);

        assert!(split(OptionNumber::UriPath, "", "/").unwrap().is_empty());
        assert!(split(OptionNumber::UriPath, "///", "/").unwrap().is_empty());
    }

    #[test]
    fn test_split_query() {
        let options = split(OptionNumber::UriQuery, "a=1&b=2", "&").unwrap();
        assert_eq!(texts(&options), ["a=1", "b=2"]);
    }

    #[test]
    fn test_split_non_text_option() {
        assert_eq!(
            split(OptionNumber::UriPort, "1/2", "/"),
            Err(Error::UnsupportedConversion {
                kind: ValueKind::Integer,
                requested: ValueKind::Text
            })
        );
        // Nothing to convert, nothing to reject
        assert_eq!(split(OptionNumber::UriPort, "", "/"), Ok(Vec::new()));
    }

    #[test]
    fn test_join() {
        let options = [
            CoapOption::from_text(OptionNumber::UriQuery, "a").unwrap(),
            CoapOption::from_text(OptionNumber::UriQuery, "b").unwrap(),
        ];
        assert_eq!(join(&options, ",").unwrap(), ",a,b");
        assert_eq!(join(&[], ",").unwrap(), "");
    }

    #[test]
    fn test_join_absent_value() {
        let options = [
            CoapOption::new(OptionNumber::LocationPath),
            CoapOption::from_text(OptionNumber::LocationPath, "x").unwrap(),
        ];
        assert_eq!(join(&options, "/").unwrap(), "//x");
    }

    #[test]
    fn test_join_non_text_option() {
        let options = [CoapOption::from_integer(OptionNumber::MaxAge, 1).unwrap()];
        assert!(join(&options, "/").is_err());
    }

    #[test]
    fn test_is_fencepost() {
        assert!(is_fencepost(14));
        assert!(is_fencepost(28));
        assert!(is_fencepost(0));
        assert!(!is_fencepost(15));
        assert!(!is_fencepost(13));
    }

    #[test]
    fn test_next_fencepost() {
        assert_eq!(next_fencepost(0), Some(14));
        assert_eq!(next_fencepost(9), Some(14));
        assert_eq!(next_fencepost(13), Some(14));
        assert_eq!(next_fencepost(14), Some(28));
        assert_eq!(next_fencepost(27), Some(28));
        assert_eq!(next_fencepost(65_533), Some(65_534));
        assert_eq!(next_fencepost(65_534), None);
        assert_eq!(next_fencepost(u16::MAX), None);
    }

    #[test]
    fn test_fencepost_fillers() {
        assert!(fencepost_fillers(0, 0).is_empty());
        assert!(fencepost_fillers(9, 21).is_empty());
        assert_eq!(fencepost_fillers(0, 16), [14]);
        assert_eq!(fencepost_fillers(14, 30), [28]);
        assert_eq!(fencepost_fillers(1, 60), [14, 28, 42, 56]);

        let fillers = fencepost_fillers(3, 200);
        let mut previous = 3;
        for &fencepost in fillers.iter().chain(&[200]) {
            assert!(fencepost - previous <= MAX_OPTION_DELTA);
            previous = fencepost;
        }
    }
}
