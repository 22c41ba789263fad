use std::fmt;

use nom::Parser;

pub mod error;

pub use error::Error;

/// Encoding rule set applied when reading a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Basic Encoding Rules. The sender may pick among alternative
    /// encodings for the same value.
    Ber,
    /// Canonical Encoding Rules, a restricted form of BER.
    Cer,
    /// Distinguished Encoding Rules. Exactly one valid encoding per value.
    #[default]
    Der,
}

impl Mode {
    /// CER and DER restrict the encodings a sender may choose.
    pub fn is_restricted(&self) -> bool {
        matches!(self, Mode::Cer | Mode::Der)
    }
}

/// Tag class, from the top two bits of the identifier octet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Universal,
    Application,
    ContextSpecific,
    Private,
}

/// An ASN.1 tag: class, number and the constructed flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    class: Class,
    number: u32,
    constructed: bool,
}

impl Tag {
    pub const BOOLEAN: Tag = Tag::universal(1);
    pub const INTEGER: Tag = Tag::universal(2);
    pub const BIT_STRING: Tag = Tag::universal(3);
    pub const OCTET_STRING: Tag = Tag::universal(4);
    pub const NULL: Tag = Tag::universal(5);
    pub const OID: Tag = Tag::universal(6);
    pub const UTF8_STRING: Tag = Tag::universal(12);
    pub const PRINTABLE_STRING: Tag = Tag::universal(19);
    pub const IA5_STRING: Tag = Tag::universal(22);
    pub const UTC_TIME: Tag = Tag::universal(23);
    pub const GENERALIZED_TIME: Tag = Tag::universal(24);
    pub const SEQUENCE: Tag = Tag::new(Class::Universal, 16, true);
    pub const SET: Tag = Tag::new(Class::Universal, 17, true);

    pub const fn new(class: Class, number: u32, constructed: bool) -> Self {
        Tag {
            class,
            number,
            constructed,
        }
    }

    /// A primitive tag in the universal class.
    pub const fn universal(number: u32) -> Self {
        Tag::new(Class::Universal, number, false)
    }

    pub fn class(&self) -> Class {
        self.class
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn is_constructed(&self) -> bool {
        self.constructed
    }

    /// Same class and number, ignoring the constructed flag.
    pub fn has_same_class_and_number(&self, other: Tag) -> bool {
        self.class == other.class && self.number == other.number
    }

    pub fn is_context_specific(&self, number: u32) -> bool {
        self.class == Class::ContextSpecific && self.number == number
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.class == Class::Universal {
            let name = match self.number {
                1 => Some("BOOLEAN"),
                2 => Some("INTEGER"),
                3 => Some("BIT STRING"),
                4 => Some("OCTET STRING"),
                5 => Some("NULL"),
                6 => Some("OBJECT IDENTIFIER"),
                12 => Some("UTF8String"),
                16 => Some("SEQUENCE"),
                17 => Some("SET"),
                19 => Some("PrintableString"),
                22 => Some("IA5String"),
                23 => Some("UTCTime"),
                24 => Some("GeneralizedTime"),
                _ => None,
            };
            if let Some(name) = name {
                return write!(f, "{}", name);
            }
        }
        match self.class {
            Class::Universal => write!(f, "[UNIVERSAL {}]", self.number),
            Class::Application => write!(f, "[APPLICATION {}]", self.number),
            Class::ContextSpecific => write!(f, "[{}]", self.number),
            Class::Private => write!(f, "[PRIVATE {}]", self.number),
        }
    }
}

/// One encoded element: the full header+content span, where the content
/// starts, and the rule set it was read under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded<'a> {
    tag: Tag,
    mode: Mode,
    raw: &'a [u8],
    header_len: usize,
}

impl<'a> Encoded<'a> {
    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The header and content octets, a sub-slice of the input buffer.
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
}

/// Walks a buffer one encoded element at a time.
///
/// The reader holds the buffer and a cursor; it interprets tag and length
/// octets only and never looks at content. Every returned span is a
/// sub-slice of the input buffer.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
    mode: Mode,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8], mode: Mode) -> Self {
        Reader { buf, pos: 0, mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Byte offset of the next unread element.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn has_more_data(&self) -> bool {
        self.pos < self.buf.len()
    }

    /// Reads the tag of the next element without consuming it.
    pub fn peek_tag(&self) -> Result<Tag, Error> {
        let (_, tag) = parse_tag(&self.buf[self.pos..])?;
        Ok(tag)
    }

    /// Consumes one element and returns its full encoded span.
    ///
    /// Fails with [`Error::TruncatedInput`] when the declared length runs
    /// past the end of the buffer; the cursor does not move on failure.
    pub fn read_encoded_value(&mut self) -> Result<Encoded<'a>, Error> {
        let input = &self.buf[self.pos..];
        let (rest, tag) = parse_tag(input)?;
        let (rest, length) = parse_length(rest, self.mode)?;
        if rest.len() < length {
            return Err(Error::TruncatedInput);
        }
        let header_len = input.len() - rest.len();
        let raw = &input[..header_len + length];
        self.pos += raw.len();
        Ok(Encoded {
            tag,
            mode: self.mode,
            raw,
            header_len,
        })
    }
}

fn take_u8(input: &[u8], error: Error) -> Result<(&[u8], u8), Error> {
    nom::number::be_u8::<_, nom::error::Error<&[u8]>>()
        .parse(input)
        .map_err(|_| error)
}

fn parse_tag(input: &[u8]) -> Result<(&[u8], Tag), Error> {
    let (mut rest, first) = take_u8(input, Error::TruncatedInput)?;
    let class = match first >> 6 {
        0 => Class::Universal,
        1 => Class::Application,
        2 => Class::ContextSpecific,
        _ => Class::Private,
    };
    let constructed = first & 0x20 != 0;
    let mut number = u32::from(first & 0x1f);
    if number == 0x1f {
        // High tag number form: base-128 octets, continuation bit 0x80.
        // A leading 0x80 octet would be a non-minimal encoding.
        let mut value = 0u32;
        let mut continued = true;
        let mut start = true;
        while continued {
            let (r, b) = take_u8(rest, Error::InvalidTag)?;
            rest = r;
            if start && b == 0x80 {
                return Err(Error::InvalidTag);
            }
            start = false;
            if value > u32::MAX >> 7 {
                return Err(Error::InvalidTag);
            }
            value = (value << 7) | u32::from(b & 0x7f);
            continued = b & 0x80 != 0;
        }
        number = value;
    }
    Ok((rest, Tag::new(class, number, constructed)))
}

fn parse_length(input: &[u8], mode: Mode) -> Result<(&[u8], usize), Error> {
    let (rest, first) = take_u8(input, Error::TruncatedInput)?;
    if first & 0x80 == 0 {
        // short form: 0-127
        return Ok((rest, usize::from(first)));
    }
    let count = usize::from(first & 0x7f);
    if count == 0 {
        // Indefinite length. DER forbids it outright; this reader does not
        // walk end-of-contents markers for the other rule sets either.
        return Err(match mode {
            Mode::Der => Error::InvalidLength,
            _ => Error::Unsupported("indefinite length"),
        });
    }
    if count == 0x7f || count > size_of::<usize>() {
        return Err(Error::InvalidLength);
    }
    let (rest, bytes) = nom::bytes::complete::take::<_, _, nom::error::Error<&[u8]>>(count)
        .parse(rest)
        .map_err(|_| Error::TruncatedInput)?;
    let value = bytes.iter().fold(0usize, |n, &b| (n << 8) | usize::from(b));
    if mode.is_restricted() && (bytes[0] == 0 || value < 0x80) {
        // the long form must be minimal under CER/DER
        return Err(Error::InvalidLength);
    }
    Ok((rest, value))
}
