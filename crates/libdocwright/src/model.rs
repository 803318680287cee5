//! The resolved symbol model consumed by the generator.
//!
//! A front end (compiler, indexer, or hand-written fixture) resolves
//! declarations and doc comments and serializes them in this shape. The
//! generator only reads it.

use std::{fs, path::Path};

use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};

use crate::error::{DocletError, Result};

/// Range of model format versions this crate understands.
pub const SUPPORTED_FORMAT: &str = "^1";

/// A complete documentation model: every module, package, type and tag
/// the front end decided to document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Semver version of the model format.
    pub format_version: String,
    /// Declared modules, in declaration order.
    #[serde(default)]
    pub modules: Vec<Module>,
    /// Declared packages, in declaration order.
    #[serde(default)]
    pub packages: Vec<Package>,
    /// Declared types, in declaration order.
    #[serde(default)]
    pub types: Vec<TypeElement>,
    /// Index terms and system property references found in doc comments.
    #[serde(default)]
    pub tags: Vec<SearchTag>,
}

impl Model {
    /// Parse a model from its JSON form and check the format version.
    pub fn from_json(json: &str) -> Result<Self> {
        let model: Self = serde_json::from_str(json)?;
        model.check_format()?;
        Ok(model)
    }

    /// Read and parse a model file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Accepts format versions matching `SUPPORTED_FORMAT`.
    fn check_format(&self) -> Result<()> {
        let unsupported = || DocletError::UnsupportedFormat {
            found: self.format_version.clone(),
            expected: SUPPORTED_FORMAT.to_string(),
        };
        let req = VersionReq::parse(SUPPORTED_FORMAT).map_err(|_| unsupported())?;
        let version = Version::parse(&self.format_version).map_err(|_| unsupported())?;
        if req.matches(&version) {
            Ok(())
        } else {
            Err(unsupported())
        }
    }
}

/// Status flags shared by every kind of element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Present when the element is deprecated.
    #[serde(default)]
    pub deprecated: Option<Deprecation>,
    /// Present when the element belongs to a preview feature.
    #[serde(default)]
    pub preview: Option<Preview>,
    /// Whether the element is a restricted API.
    #[serde(default)]
    pub restricted: bool,
    /// Whether the element carries an explicit hidden marker.
    #[serde(default)]
    pub hidden: bool,
    /// Release in which the element was introduced.
    #[serde(default)]
    pub since: Option<String>,
}

impl Status {
    /// Whether the element is deprecated.
    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_some()
    }

    /// Whether the element belongs to a preview feature.
    pub fn is_preview(&self) -> bool {
        self.preview.is_some()
    }
}

/// Deprecation details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deprecation {
    /// Whether the element is slated for removal.
    #[serde(default)]
    pub for_removal: bool,
    /// Release in which the element was deprecated.
    #[serde(default)]
    pub since: Option<String>,
    /// Body of the deprecation comment (HTML).
    #[serde(default)]
    pub comment: Option<String>,
}

/// Preview feature membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    /// Name of the preview feature.
    #[serde(default)]
    pub feature: String,
    /// Enhancement proposal number, when known.
    #[serde(default)]
    pub jep: Option<u32>,
}

/// A module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    /// Module name.
    pub name: String,
    /// First-sentence summary of the module comment (HTML).
    #[serde(default)]
    pub summary: Option<String>,
    /// Status flags.
    #[serde(default)]
    pub status: Status,
}

/// Serde default for `included`.
fn included_by_default() -> bool {
    true
}

/// A package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Fully qualified package name; empty for the unnamed package.
    pub name: String,
    /// Enclosing module, if any.
    #[serde(default)]
    pub module: Option<String>,
    /// First-sentence summary of the package comment (HTML).
    #[serde(default)]
    pub summary: Option<String>,
    /// Status flags.
    #[serde(default)]
    pub status: Status,
    /// Whether the package was selected for documentation.
    #[serde(default = "included_by_default")]
    pub included: bool,
}

/// Declared kind of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// A class.
    Class,
    /// An interface.
    Interface,
    /// An enum class.
    Enum,
    /// A record class.
    Record,
    /// An annotation interface.
    Annotation,
    /// A kind this version does not know about.
    #[serde(other)]
    Unknown,
}

impl TypeKind {
    /// Keyword that declares a type of this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Class | Self::Unknown => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Record => "record",
            Self::Annotation => "@interface",
        }
    }
}

/// Access level of a declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// `public`.
    #[default]
    Public,
    /// `protected`.
    Protected,
    /// Package private.
    Package,
    /// `private`.
    Private,
}

impl Visibility {
    /// Modifier keyword followed by a space; package access has none.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public ",
            Self::Protected => "protected ",
            Self::Package => "",
            Self::Private => "private ",
        }
    }
}

/// A class, interface, enum, record or annotation interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeElement {
    /// Simple name; nested types use dotted names such as `Map.Entry`.
    pub name: String,
    /// Name of the containing package.
    #[serde(default)]
    pub package: String,
    /// Declared kind.
    pub kind: TypeKind,
    /// Type parameter names, in declaration order.
    #[serde(default)]
    pub type_params: Vec<String>,
    /// Qualified name of the direct superclass.
    #[serde(default)]
    pub superclass: Option<String>,
    /// Superclasses above `superclass` that are not part of the model, nearest
    /// first, as far as the front end resolved them.
    #[serde(default)]
    pub ancestors: Vec<String>,
    /// Qualified names of directly implemented or extended interfaces, in
    /// declaration order.
    #[serde(default)]
    pub interfaces: Vec<String>,
    /// Access level.
    #[serde(default)]
    pub visibility: Visibility,
    /// First-sentence summary of the type comment (HTML).
    #[serde(default)]
    pub summary: Option<String>,
    /// Status flags.
    #[serde(default)]
    pub status: Status,
    /// Documented members.
    #[serde(default)]
    pub members: Vec<Member>,
}

impl TypeElement {
    /// The fully qualified name.
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }

    /// Whether this is a plain interface (annotation interfaces excluded).
    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }
}

/// Declared kind of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberKind {
    /// A field.
    Field,
    /// A method.
    Method,
    /// A constructor.
    Constructor,
    /// An enum constant.
    EnumConstant,
    /// An annotation interface element.
    AnnotationElement,
    /// A kind this version does not know about.
    #[serde(other)]
    Unknown,
}

/// A field, method, constructor, enum constant or annotation element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Simple member name.
    pub name: String,
    /// Declared kind.
    pub kind: MemberKind,
    /// Parameter list for executables, such as `(int, java.lang.String)`.
    #[serde(default)]
    pub signature: Option<String>,
    /// First-sentence summary of the member comment (HTML).
    #[serde(default)]
    pub summary: Option<String>,
    /// Status flags.
    #[serde(default)]
    pub status: Status,
}

impl Member {
    /// Name plus signature, used both as display label and as page anchor.
    pub fn label(&self) -> String {
        match &self.signature {
            Some(signature) => format!("{}{}", self.name, signature),
            None => self.name.clone(),
        }
    }
}

/// Kind of a search tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    /// An explicit index term.
    #[default]
    Index,
    /// A reference to a system property.
    SystemProperty,
}

/// A term recorded from a doc comment for the index and search pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTag {
    /// The indexed term.
    pub term: String,
    /// Qualified name of the element whose comment holds the tag: a type, a
    /// package, a module, `Type#member`, or empty for the overview.
    #[serde(default)]
    pub holder: String,
    /// Optional short description.
    #[serde(default)]
    pub description: Option<String>,
    /// Tag kind.
    #[serde(default)]
    pub kind: TagKind,
}

impl SearchTag {
    /// Anchor id of the tag on its holder page.
    pub fn anchor(&self) -> String {
        let mut anchor: String = self
            .term
            .chars()
            .map(|c| if c.is_whitespace() { '-' } else { c })
            .collect();
        if self.kind == TagKind::SystemProperty {
            anchor.insert_str(0, "sysprop-");
        }
        anchor
    }
}
