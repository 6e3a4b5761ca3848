use crate::domain::ports::SerializationMethod;
use crate::utils::error::Result;
use quick_xml::escape::partial_escape;
use serde::Serialize;
use serde_json::ser::Formatter;
use std::io;

#[derive(Serialize)]
struct BookRecord<'a> {
    title: &'a str,
    content: &'a str,
}

/// Compact JSON with a space after `:` and `,`, i.e. `{"title": "T", "content": "C"}`.
/// Output is ASCII-only: other characters become `\uXXXX` escapes, with
/// surrogate pairs above U+FFFF.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..index].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerialization;

impl SerializationMethod for JsonSerialization {
    fn serialize(&self, title: &str, content: &str) -> Result<String> {
        let record = BookRecord { title, content };

        let mut buf = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
        record.serialize(&mut serializer)?;

        let json = String::from_utf8(buf)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(json)
    }
}

/// `<book><title>..</title><content>..</content></book>` with `&`, `<` and `>`
/// escaped in text. No declaration, no namespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlSerialization;

impl SerializationMethod for XmlSerialization {
    fn serialize(&self, title: &str, content: &str) -> Result<String> {
        Ok(format!(
            "<book><title>{}</title><content>{}</content></book>",
            partial_escape(title),
            partial_escape(content)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_layout() {
        let json = JsonSerialization.serialize("T", "C").unwrap();
        assert_eq!(json, r#"{"title": "T", "content": "C"}"#);
    }

    #[test]
    fn test_json_escaping() {
        let json = JsonSerialization
            .serialize("Say \"hi\"", "line1\nline2\t\\end")
            .unwrap();
        assert_eq!(
            json,
            r#"{"title": "Say \"hi\"", "content": "line1\nline2\t\\end"}"#
        );
    }

    #[test]
    fn test_json_escapes_non_ascii() {
        let json = JsonSerialization.serialize("é 📚", "x").unwrap();
        assert_eq!(json, r#"{"title": "\u00e9 \ud83d\udcda", "content": "x"}"#);
    }

    #[test]
    fn test_json_non_ascii_between_escapes() {
        let json = JsonSerialization.serialize("ü\"ß", "日\n").unwrap();
        assert_eq!(
            json,
            r#"{"title": "\u00fc\"\u00df", "content": "\u65e5\n"}"#
        );
    }

    #[test]
    fn test_json_control_characters_are_escaped() {
        let json = JsonSerialization.serialize("", "\u{1}").unwrap();
        assert_eq!(json, r#"{"title": "", "content": "\u0001"}"#);
    }

    #[test]
    fn test_xml_layout() {
        let xml = XmlSerialization.serialize("T", "C").unwrap();
        assert_eq!(xml, "<book><title>T</title><content>C</content></book>");
    }

    #[test]
    fn test_xml_escaping() {
        let xml = XmlSerialization
            .serialize("Tom & Jerry", "1 < 2 > 0")
            .unwrap();
        assert_eq!(
            xml,
            "<book><title>Tom &amp; Jerry</title><content>1 &lt; 2 &gt; 0</content></book>"
        );
    }

    #[test]
    fn test_xml_empty_fields_keep_both_tags() {
        let xml = XmlSerialization.serialize("", "").unwrap();
        assert_eq!(xml, "<book><title></title><content></content></book>");
    }
}
