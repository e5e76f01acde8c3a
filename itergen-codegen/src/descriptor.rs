//! Type descriptor parsing.
//!
//! A raw type token has the shape `[package:]type`, where `type` is a Go type
//! spelling such as `float64`, `*os.File` or `chan float64`.

use itergen_core::{is_identifier, title_case};
use serde::Serialize;

use crate::{Error, Kind, Result};

/// Go keyword that marks a channel type.
const CHAN_KEYWORD: &str = "chan";
/// Marker of receive-only and send-only channel types.
const DIRECTED_CHAN_MARKER: &str = "<-";

/// Structured form of a raw type token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDescriptor {
    /// Identifier fragment prefixing every generated symbol (e.g., "OsFile").
    pub name: String,
    /// Import path the type lives in, empty for builtin or local types.
    pub package: String,
    /// Element type spelling (e.g., "*os.File", "float64" for `chan float64`).
    #[serde(rename = "ty")]
    pub type_text: String,
    pub is_channel: bool,
}

impl TypeDescriptor {
    /// Parse a raw type token.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidChannelSyntax`] if the type is a directed channel
    /// - [`Error::MalformedType`] if the token has more than one `:`, an empty
    ///   package or no type at all
    /// - [`Error::InvalidTypeName`] if no identifier can be derived from it
    pub fn parse(raw: &str) -> Result<Self> {
        let (package, spelling) = split_package(raw)?;

        if spelling.contains(DIRECTED_CHAN_MARKER) {
            return Err(Box::new(Error::InvalidChannelSyntax {
                raw: raw.to_string(),
            }));
        }

        let tokens: Vec<&str> = spelling.split_whitespace().collect();
        let (first, last) = match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(Error::malformed(raw, "empty type")),
        };

        let is_channel = first == CHAN_KEYWORD;
        if is_channel && tokens.len() == 1 {
            return Err(Error::malformed(raw, "channel without an element type"));
        }

        let type_text = last.to_string();
        let name = derive_name(&type_text);
        if !is_identifier(&name) {
            return Err(Box::new(Error::InvalidTypeName {
                raw: raw.to_string(),
                name,
            }));
        }

        Ok(Self {
            name,
            package: package.to_string(),
            type_text,
            is_channel,
        })
    }

    /// The iterable kind this descriptor generates.
    pub fn kind(&self) -> Kind {
        if self.is_channel {
            Kind::Channel
        } else {
            Kind::Plain
        }
    }

    /// Whether the type needs an import.
    pub fn has_package(&self) -> bool {
        !self.package.is_empty()
    }
}

fn split_package(raw: &str) -> Result<(&str, &str)> {
    let mut parts = raw.split(':');
    let (first, second) = (parts.next().unwrap_or_default(), parts.next());
    if parts.next().is_some() {
        return Err(Error::malformed(raw, "more than one ':' separator"));
    }

    match second {
        None => Ok(("", first)),
        Some(_) if first.trim().is_empty() => {
            Err(Error::malformed(raw, "empty package before ':'"))
        }
        Some(spelling) => Ok((first.trim(), spelling)),
    }
}

/// Derive the identifier fragment for a type spelling.
///
/// A single leading `*` is dropped; a package-qualified reference has both of
/// its segments title-cased and joined (`os.File` -> `OsFile`).
pub fn derive_name(type_text: &str) -> String {
    let unpointed = type_text.strip_prefix('*').unwrap_or(type_text);
    match unpointed.split_once('.') {
        Some((pkg, ident)) => title_case(pkg) + &title_case(ident),
        None => title_case(unpointed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_builtin() {
        let td = TypeDescriptor::parse("int64").unwrap();
        assert_eq!(td.name, "Int64");
        assert_eq!(td.package, "");
        assert_eq!(td.type_text, "int64");
        assert!(!td.is_channel);
        assert_eq!(td.kind(), Kind::Plain);
    }

    #[test]
    fn test_parse_package_qualified() {
        let td = TypeDescriptor::parse("os:*os.File").unwrap();
        assert_eq!(
            td,
            TypeDescriptor {
                name: "OsFile".to_string(),
                package: "os".to_string(),
                type_text: "*os.File".to_string(),
                is_channel: false,
            }
        );
    }

    #[test]
    fn test_parse_import_path() {
        let td =
            TypeDescriptor::parse("github.com/mvader/go-itergen/generator:generator.Generator")
                .unwrap();
        assert_eq!(td.package, "github.com/mvader/go-itergen/generator");
        assert_eq!(td.type_text, "generator.Generator");
        assert_eq!(td.name, "GeneratorGenerator");
    }

    #[test]
    fn test_parse_channel() {
        let td = TypeDescriptor::parse("chan float64").unwrap();
        assert!(td.is_channel);
        assert_eq!(td.type_text, "float64");
        assert_eq!(td.name, "Float64");
        assert_eq!(td.kind(), Kind::Channel);
    }

    #[test]
    fn test_parse_channel_with_package() {
        let td = TypeDescriptor::parse("os:chan *os.File").unwrap();
        assert!(td.is_channel);
        assert_eq!(td.package, "os");
        assert_eq!(td.type_text, "*os.File");
        assert_eq!(td.name, "OsFile");
    }

    #[test]
    fn test_parse_no_package_for_plain_tokens() {
        for raw in ["int", "string", "*Foo", "bytes.Buffer", "chan bool"] {
            assert_eq!(TypeDescriptor::parse(raw).unwrap().package, "", "{raw}");
        }
    }

    #[test]
    fn test_parse_directed_channel_rejected() {
        for raw in ["<-chan int", "chan<- int", "foo:<-chan foo.Bar"] {
            let err = TypeDescriptor::parse(raw).unwrap_err();
            assert!(
                matches!(*err, Error::InvalidChannelSyntax { .. }),
                "{raw}: {err}"
            );
        }
    }

    #[test]
    fn test_parse_malformed() {
        for raw in ["", "   ", "a:b:c", ":int", "chan"] {
            let err = TypeDescriptor::parse(raw).unwrap_err();
            assert!(matches!(*err, Error::MalformedType { .. }), "{raw:?}: {err}");
        }
    }

    #[test]
    fn test_parse_invalid_name() {
        let err = TypeDescriptor::parse("interface{}").unwrap_err();
        assert!(matches!(*err, Error::InvalidTypeName { ref name, .. } if name == "Interface{}"));

        let err = TypeDescriptor::parse("[]byte").unwrap_err();
        assert!(matches!(*err, Error::InvalidTypeName { .. }));
    }

    #[test]
    fn test_derive_name() {
        assert_eq!(derive_name("float64"), "Float64");
        assert_eq!(derive_name("*os.File"), "OsFile");
        assert_eq!(derive_name("os.File"), "OsFile");
        assert_eq!(derive_name("*int"), "Int");
        assert_eq!(derive_name("myType"), "MyType");
    }
}
