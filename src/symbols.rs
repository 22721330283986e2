//! The fixed table of cross-module symbols and the reference entries built from them.

use serde::Serialize;

/// Value of both `kind` and `role` on every synthesized entry.
const SYMBOL_KIND: &str = "symbol";

/// Value of `type` on every synthesized entry.
const TOPIC_TYPE: &str = "topic";

/// Cross-module symbols whose references DocC leaves out of the `Joyfill` pages.
/// Checked in this order, so entries are appended to `references` in this order too.
pub static KNOWN_SYMBOLS: [SymbolDescriptor; 4] = [
    SymbolDescriptor {
        identifier: "s:12JoyfillModel6JoyDocV",
        keyword: "struct",
        module: "JoyfillModel",
        summary: "The main document model for Joyfill forms.",
        type_name: "JoyDoc",
        url: "/documentation/joyfillmodel/joydoc",
    },
    SymbolDescriptor {
        identifier: "s:12JoyfillModel11JoyDocFieldC",
        keyword: "class",
        module: "JoyfillModel",
        summary: "Represents a field in a Joyfill document.",
        type_name: "JoyDocField",
        url: "/documentation/joyfillmodel/joydocfield",
    },
    SymbolDescriptor {
        identifier: "s:12JoyfillModel10ValueUnionO",
        keyword: "enum",
        module: "JoyfillModel",
        summary: "A union type representing different value types in Joyfill fields.",
        type_name: "ValueUnion",
        url: "/documentation/joyfillmodel/valueunion",
    },
    SymbolDescriptor {
        identifier: "s:12JoyfillModel11ChangeEventV",
        keyword: "struct",
        module: "JoyfillModel",
        summary: "Represents a change event in the document.",
        type_name: "ChangeEvent",
        url: "/documentation/joyfillmodel/changeevent",
    },
];

/// One `{kind, text}` piece of a declaration as DocC renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    /// `keyword`, `text` or `identifier`.
    pub kind: &'static str,
    /// Literal text of the fragment.
    pub text: &'static str,
}

/// A plain-text inline node, as used in a DocC abstract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineText {
    /// Inline node type; always `text`.
    #[serde(rename = "type")]
    pub node_type: &'static str,
    /// The text content.
    pub text: &'static str,
}

/// A `references` table entry. Field order is the serialized key order
/// DocC itself writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceEntry {
    /// Same string as the key the entry is stored under.
    pub identifier: String,
    /// Site-relative documentation URL.
    pub url: &'static str,
    /// Always `symbol`.
    pub kind: &'static str,
    /// Always `symbol`.
    pub role: &'static str,
    /// Display title, the bare type name.
    pub title: &'static str,
    /// Declaration fragments such as `struct JoyDoc`.
    pub fragments: [Fragment; 3],
    /// One-sentence description.
    #[serde(rename = "abstract")]
    pub summary: [InlineText; 1],
    /// Always `topic`.
    #[serde(rename = "type")]
    pub entry_type: &'static str,
}

/// Static metadata for one symbol that lives in another module.
#[derive(Debug)]
pub struct SymbolDescriptor {
    /// Precise (mangled) symbol identifier searched for in page content.
    pub identifier: &'static str,
    /// Declaration keyword: `struct`, `class` or `enum`.
    pub keyword: &'static str,
    /// Owning module name.
    pub module: &'static str,
    /// Abstract text.
    pub summary: &'static str,
    /// Short type name; also the title.
    pub type_name: &'static str,
    /// Site-relative documentation URL.
    pub url: &'static str,
}

impl SymbolDescriptor {
    /// Build the entry stored under `key`.
    pub fn reference_entry(&self, key: &str) -> ReferenceEntry {
        return ReferenceEntry {
            identifier: key.to_string(),
            url: self.url,
            kind: SYMBOL_KIND,
            role: SYMBOL_KIND,
            title: self.type_name,
            fragments: [
                Fragment { kind: "keyword", text: self.keyword },
                Fragment { kind: "text", text: " " },
                Fragment { kind: "identifier", text: self.type_name },
            ],
            summary: [InlineText { node_type: "text", text: self.summary }],
            entry_type: TOPIC_TYPE,
        };
    }

    /// `doc://<source>.<module>/documentation/<module>/<type-name>`
    pub fn reference_key(&self, source: &str) -> String {
        return format!(
            "doc://{source}.{module}/documentation/{module}/{name}",
            module = self.module,
            name = self.type_name,
        );
    }
}
