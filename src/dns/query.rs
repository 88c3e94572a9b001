//! DNS wire-format query builder.
//!
//! Builds the minimal query message both transports send: a fixed header
//! followed by a single type A, class IN question (RFC 1035 §4.1).

use crate::error::{Error, Result};

/// Maximum length of a single label; the top two bits of the length
/// octet are reserved for compression pointers (RFC 1035 §4.1.4).
const MAX_LABEL_LEN: usize = 63;

/// QTYPE for a host address record.
const QTYPE_A: u16 = 1;

/// QCLASS for the Internet.
const QCLASS_IN: u16 = 1;

/// Flags word for a standard query with recursion desired.
const FLAGS_RD: u16 = 0x0100;

/// Build a minimal DNS query message for `domain` (type A, class IN).
///
/// The transaction ID is fixed at 0: every probe is a single synchronous
/// round-trip over its own connection, so responses never need to be
/// correlated. The output is deterministic for a given domain.
///
/// # Errors
///
/// Returns `Error::Parse` if any label is empty or longer than 63 bytes.
pub fn build_query(domain: &str) -> Result<Vec<u8>> {
    let mut msg = Vec::with_capacity(16 + domain.len() + 2);
    msg.extend_from_slice(&0u16.to_be_bytes()); // ID
    msg.extend_from_slice(&FLAGS_RD.to_be_bytes());
    msg.extend_from_slice(&1u16.to_be_bytes()); // QDCOUNT
    msg.extend_from_slice(&0u16.to_be_bytes()); // ANCOUNT
    msg.extend_from_slice(&0u16.to_be_bytes()); // NSCOUNT
    msg.extend_from_slice(&0u16.to_be_bytes()); // ARCOUNT

    for label in domain.split('.') {
        if label.is_empty() {
            return Err(Error::parse(format!("empty label in domain: {domain}")));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(Error::parse(format!(
                "label '{label}' exceeds {MAX_LABEL_LEN} bytes"
            )));
        }
        msg.push(label.len() as u8);
        msg.extend_from_slice(label.as_bytes());
    }
    msg.push(0); // root label

    msg.extend_from_slice(&QTYPE_A.to_be_bytes());
    msg.extend_from_slice(&QCLASS_IN.to_be_bytes());
    Ok(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_com_wire_format() {
        let msg = build_query("example.com").unwrap();

        // Header: ID=0, flags=RD, QDCOUNT=1, other counts zero.
        assert_eq!(
            &msg[..12],
            &[0, 0, 0x01, 0x00, 0, 1, 0, 0, 0, 0, 0, 0]
        );
        // Question: 7"example" 3"com" 0, QTYPE=A, QCLASS=IN.
        let mut question = vec![7];
        question.extend_from_slice(b"example");
        question.push(3);
        question.extend_from_slice(b"com");
        question.extend_from_slice(&[0, 0, 1, 0, 1]);
        assert_eq!(&msg[12..], question.as_slice());
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            build_query("github.com").unwrap(),
            build_query("github.com").unwrap()
        );
    }

    #[test]
    fn test_single_label() {
        let msg = build_query("localhost").unwrap();
        assert_eq!(&msg[12..14], &[9, b'l']);
        assert_eq!(msg.len(), 12 + 1 + 9 + 1 + 4);
    }

    #[test]
    fn test_oversized_label_rejected() {
        let long = "a".repeat(64);
        let result = build_query(&format!("{long}.com"));
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_empty_label_rejected() {
        assert!(build_query("example..com").is_err());
        assert!(build_query("").is_err());
    }
}
