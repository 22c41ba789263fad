//! Typed ASN.1 nodes over raw TLV spans.
//!
//! [`deserialize`] walks a buffer and produces one [`Node`] per encoded
//! element. Nodes keep a reference into the input buffer (header plus
//! content) next to the decoded value; constructed nodes decode their
//! children lazily on first access. Elements that cannot be decoded are
//! reported to a [`diag::DiagnosticSink`] and dropped, never aborting the
//! scan.

use std::fmt::Display;
use std::sync::OnceLock;

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use kigumi::decoder::{DecodableFrom, Decoder};
use tlv::{Class, Encoded, Mode, Reader, Tag};

pub mod diag;
pub mod error;
pub mod oid;

pub use diag::{CollectSink, Diagnostic, DiagnosticSink, LogSink};
pub use error::Error;
pub use oid::Oid;

use error::unsupported;

/// One decoded element: its tag, the rule set it was read under, the raw
/// encoded span and the typed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<'a> {
    tag: Tag,
    mode: Mode,
    raw: &'a [u8],
    header_len: usize,
    value: Value<'a>,
}

/// The decoded payload of a node, one variant per semantic class.
///
/// Unrecognized primitive tags land in `Bytes`; any constructed tag,
/// whatever its number, lands in `Constructed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<'a> {
    Boolean(bool),
    /// INTEGER, BIT STRING, OCTET STRING and any unrecognized primitive.
    /// For BIT STRING the unused-bits count octet is already skipped.
    Bytes(&'a [u8]),
    Null,
    ObjectIdentifier(Oid),
    /// UTF8String, PrintableString or IA5String content.
    String(String),
    /// UTCTime or GeneralizedTime, normalized to UTC.
    Time(NaiveDateTime),
    Constructed(Constructed<'a>),
}

/// The child sequence of a constructed node, decoded on first access.
#[derive(Debug, Clone)]
pub struct Constructed<'a> {
    mode: Mode,
    contents: &'a [u8],
    children: OnceLock<Vec<Node<'a>>>,
}

impl<'a> Constructed<'a> {
    fn new(mode: Mode, contents: &'a [u8]) -> Self {
        Constructed {
            mode,
            contents,
            children: OnceLock::new(),
        }
    }

    /// The content span the children are decoded from.
    pub fn contents(&self) -> &'a [u8] {
        self.contents
    }

    /// Decodes the child sequence on first access and memoizes it.
    ///
    /// Decoding is a pure function of the content span, so concurrent
    /// first reads settle on one published result and every later call
    /// returns the same slice.
    pub fn children(&self) -> &[Node<'a>] {
        self.children
            .get_or_init(|| deserialize(self.contents, self.mode))
    }
}

// The memoization cell only caches what `children()` would recompute, so
// two values are equal once they decode the same span under the same rules.
impl PartialEq for Constructed<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.mode == other.mode && self.contents == other.contents
    }
}

impl Eq for Constructed<'_> {}

impl<'a> Node<'a> {
    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The full header+content span, a sub-slice of the input buffer.
    pub fn raw(&self) -> &'a [u8] {
        self.raw
    }

    pub fn header_len(&self) -> usize {
        self.header_len
    }

    pub fn contents_len(&self) -> usize {
        self.raw.len() - self.header_len
    }

    /// The content octets only.
    pub fn contents(&self) -> &'a [u8] {
        &self.raw[self.header_len..]
    }

    pub fn value(&self) -> &Value<'a> {
        &self.value
    }

    /// The lazily decoded children, for constructed nodes.
    pub fn children(&self) -> Option<&[Node<'a>]> {
        match &self.value {
            Value::Constructed(constructed) => Some(constructed.children()),
            _ => None,
        }
    }

    pub fn as_constructed(&self) -> Option<&Constructed<'a>> {
        match &self.value {
            Value::Constructed(constructed) => Some(constructed),
            _ => None,
        }
    }

    /// Decodes the binary payload of a primitive node as a nested ASN.1
    /// stream. OCTET STRING and BIT STRING values frequently wrap further
    /// DER; returns an empty sequence for every other variant.
    pub fn inspect(&self, mode: Mode) -> Vec<Node<'a>> {
        match &self.value {
            Value::Bytes(data) => deserialize(data, mode),
            _ => Vec::new(),
        }
    }

    /// A one-line rendering of the decoded value.
    ///
    /// Binary payloads render as uppercase hex without separators, times
    /// as ISO 8601, object identifiers as `"name (oid)"` when registered.
    pub fn describe(&self) -> String {
        match &self.value {
            Value::Boolean(b) => b.to_string(),
            Value::Bytes(data) => data.iter().map(|b| format!("{:02X}", b)).collect(),
            Value::Null => String::new(),
            Value::ObjectIdentifier(oid) => oid.describe(),
            Value::String(s) => s.clone(),
            Value::Time(time) => time.format("%Y-%m-%dT%H:%M:%S").to_string(),
            Value::Constructed(_) => String::new(),
        }
    }

    /// The content octets as standard-alphabet base64.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.contents())
    }
}

impl Display for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Value::Null | Value::Constructed(_) => write!(f, "{}", self.tag),
            _ => write!(f, "{}: {}", self.tag, self.describe()),
        }
    }
}

impl<'a> DecodableFrom<Encoded<'a>> for Node<'a> {}

impl<'a> Decoder<Encoded<'a>, Node<'a>> for Encoded<'a> {
    type Error = Error;

    fn decode(&self) -> Result<Node<'a>, Error> {
        let value = decode_value(self.tag(), self.mode(), self.contents())?;
        Ok(Node {
            tag: self.tag(),
            mode: self.mode(),
            raw: self.raw(),
            header_len: self.header_len(),
            value,
        })
    }
}

/// Reads every element in `buf`, dropping the ones that fail to decode.
///
/// Diagnostics for dropped elements go to the `log` facade; use
/// [`deserialize_with`] to receive them directly.
pub fn deserialize(buf: &[u8], mode: Mode) -> Vec<Node<'_>> {
    deserialize_with(buf, mode, &LogSink)
}

/// Like [`deserialize`], reporting dropped elements to `sink`.
///
/// An element whose content fails to decode is skipped and the scan
/// continues behind it. A broken tag or length header stops the scan,
/// since the cursor cannot advance past it; everything decoded up to that
/// point is still returned. This function itself never fails.
pub fn deserialize_with<'a>(buf: &'a [u8], mode: Mode, sink: &dyn DiagnosticSink) -> Vec<Node<'a>> {
    let mut reader = Reader::new(buf, mode);
    let mut nodes = Vec::new();
    while reader.has_more_data() {
        let offset = reader.position();
        let encoded = match reader.read_encoded_value() {
            Ok(encoded) => encoded,
            Err(err) => {
                sink.report(Diagnostic {
                    offset,
                    tag: reader.peek_tag().ok(),
                    error: err.into(),
                });
                break;
            }
        };
        match encoded.decode() {
            Ok(node) => nodes.push(node),
            Err(err) => sink.report(Diagnostic {
                offset,
                tag: Some(encoded.tag()),
                error: err,
            }),
        }
    }
    nodes
}

fn decode_value<'a>(tag: Tag, mode: Mode, contents: &'a [u8]) -> Result<Value<'a>, Error> {
    if tag.is_constructed() {
        return Ok(Value::Constructed(Constructed::new(mode, contents)));
    }
    if tag.class() != Class::Universal {
        // primitive application/context/private content is opaque here;
        // keep the octets and let the caller interpret them
        return Ok(Value::Bytes(contents));
    }
    match tag.number() {
        1 => decode_boolean(tag, mode, contents).map(Value::Boolean),
        2 | 4 => Ok(Value::Bytes(contents)),
        3 => decode_bit_string(tag, mode, contents).map(Value::Bytes),
        5 => {
            if contents.is_empty() {
                Ok(Value::Null)
            } else {
                Err(unsupported(tag, "NULL content must be empty"))
            }
        }
        6 => Oid::from_der(contents).map(Value::ObjectIdentifier),
        12 | 19 | 22 => decode_string(tag, contents).map(Value::String),
        23 => parse_utc_time(tag, contents).map(Value::Time),
        24 => parse_generalized_time(tag, contents).map(Value::Time),
        _ => Ok(Value::Bytes(contents)),
    }
}

fn decode_boolean(tag: Tag, mode: Mode, contents: &[u8]) -> Result<bool, Error> {
    let [b] = contents else {
        return Err(unsupported(tag, "BOOLEAN content must be a single octet"));
    };
    match (*b, mode.is_restricted()) {
        (0x00, _) => Ok(false),
        (0xff, _) => Ok(true),
        // BER: any nonzero octet is TRUE
        (_, false) => Ok(true),
        (_, true) => Err(unsupported(tag, "BOOLEAN must encode as 0x00 or 0xFF")),
    }
}

fn decode_bit_string<'a>(tag: Tag, mode: Mode, contents: &'a [u8]) -> Result<&'a [u8], Error> {
    let Some((&unused, data)) = contents.split_first() else {
        return Err(unsupported(tag, "BIT STRING needs an unused-bits octet"));
    };
    if unused > 7 || (data.is_empty() && unused != 0) {
        return Err(unsupported(tag, "invalid unused-bits count"));
    }
    if mode.is_restricted() && unused > 0 {
        let last = data[data.len() - 1];
        if last & ((1 << unused) - 1) != 0 {
            return Err(unsupported(tag, "unused bits must be zero"));
        }
    }
    Ok(data)
}

fn decode_string(tag: Tag, contents: &[u8]) -> Result<String, Error> {
    match tag.number() {
        19 => {
            if !contents.iter().all(|&b| is_printable(b)) {
                return Err(unsupported(tag, "not in the PrintableString alphabet"));
            }
        }
        22 => {
            if !contents.is_ascii() {
                return Err(unsupported(tag, "IA5String must be ASCII"));
            }
        }
        _ => {}
    }
    let text = std::str::from_utf8(contents).map_err(|_| unsupported(tag, "invalid UTF-8"))?;
    Ok(text.to_string())
}

fn is_printable(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b' ' | b'\'' | b'(' | b')' | b'+' | b',' | b'-' | b'.' | b'/' | b':' | b'=' | b'?'
        )
}

fn parse_utc_time(tag: Tag, contents: &[u8]) -> Result<NaiveDateTime, Error> {
    // YYMMDDHHMM[SS](Z|±HHMM); two-digit years pivot per RFC 5280
    let s = time_str(tag, contents)?;
    digits(s, 0, 2)
        .map(|yy| {
            if yy >= 50 {
                1900 + yy as i32
            } else {
                2000 + yy as i32
            }
        })
        .and_then(|year| parse_time_tail(year, &s[2..]))
        .ok_or_else(|| unsupported(tag, format!("invalid UTCTime '{}'", s)))
}

fn parse_generalized_time(tag: Tag, contents: &[u8]) -> Result<NaiveDateTime, Error> {
    // YYYYMMDDHHMM[SS](Z|±HHMM)
    let s = time_str(tag, contents)?;
    digits(s, 0, 4)
        .and_then(|year| parse_time_tail(year as i32, &s[4..]))
        .ok_or_else(|| unsupported(tag, format!("invalid GeneralizedTime '{}'", s)))
}

fn time_str(tag: Tag, contents: &[u8]) -> Result<&str, Error> {
    std::str::from_utf8(contents).map_err(|_| unsupported(tag, "time content is not ASCII"))
}

fn parse_time_tail(year: i32, s: &str) -> Option<NaiveDateTime> {
    let month = digits(s, 0, 2)?;
    let day = digits(s, 2, 2)?;
    let hour = digits(s, 4, 2)?;
    let minute = digits(s, 6, 2)?;
    let (second, rest) = match digits(s, 8, 2) {
        Some(second) => (second, &s[10..]),
        None => (0, s.get(8..)?),
    };
    let offset_minutes = match rest {
        // BER permits a bare local time with no suffix
        "" | "Z" => 0i64,
        _ => {
            let sign = match rest.as_bytes().first()? {
                b'+' => 1i64,
                b'-' => -1i64,
                _ => return None,
            };
            if rest.len() != 5 {
                return None;
            }
            let hours = digits(rest, 1, 2)?;
            let minutes = digits(rest, 3, 2)?;
            if minutes >= 60 {
                return None;
            }
            sign * (i64::from(hours) * 60 + i64::from(minutes))
        }
    };
    let time = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;
    // the recorded offset is local-minus-UTC, so subtract it to normalize
    time.checked_sub_signed(Duration::minutes(offset_minutes))
}

fn digits(s: &str, start: usize, len: usize) -> Option<u32> {
    let part = s.get(start..start + len)?;
    if part.len() != len || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use rstest::rstest;

    use kigumi::decoder::Decoder;
    use tlv::{Class, Mode, Tag};

    use crate::{CollectSink, Node, Value, deserialize_with};

    fn decode_one(input: &[u8], mode: Mode) -> Node<'_> {
        let sink = CollectSink::new();
        let mut nodes = deserialize_with(input, mode, &sink);
        assert!(sink.is_empty(), "unexpected diagnostics: {:?}", sink.take());
        assert_eq!(1, nodes.len());
        nodes.swap_remove(0)
    }

    #[rstest(input, expected_tag, expected_description,
        case(vec![0x01, 0x01, 0xff], Tag::BOOLEAN, "true"),
        case(vec![0x01, 0x01, 0x00], Tag::BOOLEAN, "false"),
        case(vec![0x02, 0x01, 0x07], Tag::INTEGER, "07"),
        case(vec![0x02, 0x09, 0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01], Tag::INTEGER, "008000000000000001"),
        case(vec![0x03, 0x04, 0x06, 0x6e, 0x5d, 0xc0], Tag::BIT_STRING, "6E5DC0"),
        case(vec![0x04, 0x04, 0x03, 0x02, 0x06, 0xa0], Tag::OCTET_STRING, "030206A0"),
        case(vec![0x06, 0x09, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x01, 0x0b],
             Tag::OID, "sha256WithRSAEncryption (1.2.840.113549.1.1.11)"),
        case(vec![0x0c, 0x04, 0xf0, 0x9f, 0x98, 0x8e], Tag::UTF8_STRING, "😎"),
        case(vec![0x13, 0x02, 0x68, 0x69], Tag::PRINTABLE_STRING, "hi"),
        case(vec![0x16, 0x02, 0x68, 0x69], Tag::IA5_STRING, "hi"),
        case(vec![0x17, 0x0d, 0x31, 0x39, 0x31, 0x32, 0x31, 0x36, 0x30, 0x33, 0x30, 0x32, 0x31, 0x30, 0x5a],
             Tag::UTC_TIME, "2019-12-16T03:02:10"),
        case(vec![0x18, 0x0f, 0x32, 0x30, 0x31, 0x39, 0x31, 0x32, 0x31, 0x36, 0x30, 0x33, 0x30, 0x32, 0x31, 0x30, 0x5a],
             Tag::GENERALIZED_TIME, "2019-12-16T03:02:10"),
        // ENUMERATED has no dedicated variant and falls back to raw bytes
        case(vec![0x0a, 0x01, 0x02], Tag::universal(10), "02"),
    )]
    fn test_decode_primitive(input: Vec<u8>, expected_tag: Tag, expected_description: &str) {
        let node = decode_one(&input, Mode::Der);
        assert_eq!(expected_tag, node.tag());
        assert_eq!(expected_description, node.describe());
        assert_eq!(input.len(), node.header_len() + node.contents_len());
        assert_eq!(&input[..], node.raw());
    }

    #[test]
    fn test_decode_null() {
        let input = [0x05, 0x00];
        let node = decode_one(&input, Mode::Der);
        assert_eq!(Value::Null, *node.value());
        assert_eq!("NULL", node.to_string());
    }

    #[rstest(input,
        // NULL with content
        case(vec![0x05, 0x01, 0x00]),
        // BOOLEAN with two octets
        case(vec![0x01, 0x02, 0xff, 0xff]),
        // DER BOOLEAN other than 0x00/0xFF
        case(vec![0x01, 0x01, 0x01]),
        // empty BIT STRING content
        case(vec![0x03, 0x00]),
        // DER BIT STRING with a set unused bit
        case(vec![0x03, 0x02, 0x01, 0x01]),
        // PrintableString outside its alphabet
        case(vec![0x13, 0x01, 0x40]),
        // IA5String beyond ASCII
        case(vec![0x16, 0x01, 0x80]),
        // UTCTime with a month that does not exist
        case(vec![0x17, 0x0d, 0x39, 0x39, 0x31, 0x33, 0x33, 0x32, 0x30, 0x33, 0x30, 0x32, 0x31, 0x30, 0x5a]),
    )]
    fn test_decode_rejects_bad_content(input: Vec<u8>) {
        let sink = CollectSink::new();
        let nodes = deserialize_with(&input, Mode::Der, &sink);
        assert!(nodes.is_empty());
        let diagnostics = sink.take();
        assert_eq!(1, diagnostics.len());
        assert_eq!(0, diagnostics[0].offset);
    }

    #[test]
    fn test_ber_accepts_lenient_boolean() {
        let input = [0x01, 0x01, 0x01];
        let node = decode_one(&input, Mode::Ber);
        assert_eq!(Value::Boolean(true), *node.value());
    }

    #[rstest(input, expected,
        // pivot: 50 and above belongs to the 1900s
        case(vec![0x17, 0x0d, 0x35, 0x30, 0x30, 0x31, 0x30, 0x31, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x5a], "1950-01-01 00:00:00"),
        // without seconds
        case(vec![0x17, 0x0b, 0x31, 0x39, 0x31, 0x32, 0x31, 0x36, 0x30, 0x33, 0x30, 0x32, 0x5a], "2019-12-16 03:02:00"),
        // 19:02:10 at -0800 is 03:02:10 UTC the next day
        case(vec![0x17, 0x11, 0x31, 0x39, 0x31, 0x32, 0x31, 0x35, 0x31, 0x39, 0x30, 0x32, 0x31, 0x30, 0x2d, 0x30, 0x38, 0x30, 0x30], "2019-12-16 03:02:10"),
    )]
    fn test_utc_time_variants(input: Vec<u8>, expected: &str) {
        let node = decode_one(&input, Mode::Der);
        let expected = NaiveDateTime::parse_from_str(expected, "%Y-%m-%d %H:%M:%S").unwrap();
        assert_eq!(Value::Time(expected), *node.value());
    }

    const SEQ_THREE_INTS: &[u8] = &[
        0x30, 0x09, 0x02, 0x01, 0x07, 0x02, 0x01, 0x08, 0x02, 0x01, 0x09,
    ];

    #[test]
    fn test_constructed_children() {
        let node = decode_one(SEQ_THREE_INTS, Mode::Der);
        assert!(node.tag().is_constructed());
        let children = node.children().unwrap();
        assert_eq!(3, children.len());
        for (i, child) in children.iter().enumerate() {
            assert_eq!(Tag::INTEGER, child.tag());
            assert_eq!(&[0x07 + i as u8][..], child.contents());
        }
    }

    #[test]
    fn test_children_cover_contents_without_gaps() {
        let node = decode_one(SEQ_THREE_INTS, Mode::Der);
        let children = node.children().unwrap();
        let rebuilt: Vec<u8> = children.iter().flat_map(|c| c.raw().to_vec()).collect();
        assert_eq!(node.contents(), &rebuilt[..]);
    }

    #[test]
    fn test_children_access_is_idempotent() {
        let node = decode_one(SEQ_THREE_INTS, Mode::Der);
        let first = node.children().unwrap().to_vec();
        let second = node.children().unwrap();
        assert_eq!(&first[..], second);
        // memoized: both calls return the same slice
        assert!(std::ptr::eq(node.children().unwrap(), node.children().unwrap()));
    }

    #[test]
    fn test_children_concurrent_first_access() {
        let node = decode_one(SEQ_THREE_INTS, Mode::Der);
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| node.children().unwrap().to_vec()))
                .collect();
            let mut results = handles.into_iter().map(|h| h.join().unwrap());
            let first = results.next().unwrap();
            for result in results {
                assert_eq!(first, result);
            }
        });
    }

    #[test]
    fn test_truncated_input_keeps_prefix() {
        // a complete INTEGER followed by one whose length overruns the buffer
        let input = [0x02, 0x01, 0x01, 0x02, 0x05, 0x01];
        let sink = CollectSink::new();
        let nodes = deserialize_with(&input, Mode::Der, &sink);
        assert_eq!(1, nodes.len());
        assert_eq!(Value::Bytes(&[0x01]), *nodes[0].value());
        let diagnostics = sink.take();
        assert_eq!(1, diagnostics.len());
        assert_eq!(3, diagnostics[0].offset);
    }

    #[test]
    fn test_bad_element_is_skipped_not_fatal() {
        // INTEGER, an undecodable two-octet BOOLEAN, then NULL
        let input = [0x02, 0x01, 0x05, 0x01, 0x02, 0xff, 0xff, 0x05, 0x00];
        let sink = CollectSink::new();
        let nodes = deserialize_with(&input, Mode::Der, &sink);
        assert_eq!(2, nodes.len());
        assert_eq!(Tag::INTEGER, nodes[0].tag());
        assert_eq!(Tag::NULL, nodes[1].tag());
        let diagnostics = sink.take();
        assert_eq!(1, diagnostics.len());
        assert_eq!(3, diagnostics[0].offset);
        assert_eq!(Some(Tag::BOOLEAN), diagnostics[0].tag);
    }

    #[test]
    fn test_context_specific_primitive_keeps_octets() {
        let input = [0x80, 0x02, 0xca, 0xfe];
        let node = decode_one(&input, Mode::Der);
        assert!(node.tag().is_context_specific(0));
        assert_eq!(Value::Bytes(&[0xca, 0xfe]), *node.value());
    }

    #[test]
    fn test_inspect_nested_payload() {
        // OCTET STRING wrapping the DER of INTEGER 7
        let input = [0x04, 0x03, 0x02, 0x01, 0x07];
        let node = decode_one(&input, Mode::Der);
        let nested = node.inspect(Mode::Der);
        assert_eq!(1, nested.len());
        assert_eq!(Tag::INTEGER, nested[0].tag());
    }

    #[test]
    fn test_to_base64() {
        let input = [0x04, 0x03, 0x01, 0x02, 0x03];
        let node = decode_one(&input, Mode::Der);
        assert_eq!("AQID", node.to_base64());
    }

    #[test]
    fn test_display() {
        let input = [0x02, 0x01, 0x2a];
        let node = decode_one(&input, Mode::Der);
        assert_eq!("INTEGER: 2A", node.to_string());

        let node = decode_one(SEQ_THREE_INTS, Mode::Der);
        assert_eq!("SEQUENCE", node.to_string());
    }

    #[test]
    fn test_decoder_trait_round() {
        let input = [0x13, 0x02, 0x68, 0x69];
        let mut reader = tlv::Reader::new(&input, Mode::Der);
        let encoded = reader.read_encoded_value().unwrap();
        let node: Node<'_> = encoded.decode().unwrap();
        assert_eq!(Value::String("hi".to_string()), *node.value());
    }

    #[test]
    fn test_unknown_application_tag_falls_back_to_bytes() {
        let input = [0x42, 0x02, 0x01, 0x02];
        let node = decode_one(&input, Mode::Der);
        assert_eq!(Class::Application, node.tag().class());
        assert_eq!(Value::Bytes(&[0x01, 0x02]), *node.value());
    }

    const TEST_PEM_CERT: &str = r"-----BEGIN CERTIFICATE-----
MIICLDCCAdKgAwIBAgIBADAKBggqhkjOPQQDAjB9MQswCQYDVQQGEwJCRTEPMA0G
A1UEChMGR251VExTMSUwIwYDVQQLExxHbnVUTFMgY2VydGlmaWNhdGUgYXV0aG9y
aXR5MQ8wDQYDVQQIEwZMZXV2ZW4xJTAjBgNVBAMTHEdudVRMUyBjZXJ0aWZpY2F0
ZSBhdXRob3JpdHkwHhcNMTEwNTIzMjAzODIxWhcNMTIxMjIyMDc0MTUxWjB9MQsw
CQYDVQQGEwJCRTEPMA0GA1UEChMGR251VExTMSUwIwYDVQQLExxHbnVUTFMgY2Vy
dGlmaWNhdGUgYXV0aG9yaXR5MQ8wDQYDVQQIEwZMZXV2ZW4xJTAjBgNVBAMTHEdu
dVRMUyBjZXJ0aWZpY2F0ZSBhdXRob3JpdHkwWTATBgcqhkjOPQIBBggqhkjOPQMB
BwNCAARS2I0jiuNn14Y2sSALCX3IybqiIJUvxUpj+oNfzngvj/Niyv2394BWnW4X
uQ4RTEiywK87WRcWMGgJB5kX/t2no0MwQTAPBgNVHRMBAf8EBTADAQH/MA8GA1Ud
DwEB/wQFAwMHBgAwHQYDVR0OBBYEFPC0gf6YEr+1KLlkQAPLzB9mTigDMAoGCCqG
SM49BAMCA0gAMEUCIDGuwD1KPyG+hRf88MeyMQcqOFZD0TbVleF+UsAGQ4enAiEA
l4wOuDwKQa+upc8GftXE2C//4mKANBC6It01gUaTIpo=
-----END CERTIFICATE-----";

    #[test]
    fn test_decode_real_certificate() {
        let blocks = pem::parse(TEST_PEM_CERT).unwrap();
        let der: Vec<u8> = blocks[0].decode().unwrap();

        let sink = CollectSink::new();
        let nodes = deserialize_with(&der, Mode::Der, &sink);
        assert!(sink.is_empty());
        assert_eq!(1, nodes.len());

        // Certificate ::= SEQUENCE { tbsCertificate, signatureAlgorithm, signature }
        let root = &nodes[0];
        assert_eq!(Tag::SEQUENCE, root.tag());
        let children = root.children().unwrap();
        assert_eq!(3, children.len());
        assert!(children[0].tag().is_constructed());
        assert!(children[1].tag().is_constructed());
        assert_eq!(Tag::BIT_STRING, children[2].tag());

        // the signature algorithm resolves through the name table
        let algorithm = &children[1].children().unwrap()[0];
        assert_eq!(
            "ecdsa-with-SHA256 (1.2.840.10045.4.3.2)",
            algorithm.describe()
        );
    }
}
