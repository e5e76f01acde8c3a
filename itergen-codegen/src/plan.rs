//! Capability matrix and generation plans.

use std::fmt;

use serde::Serialize;

use crate::{Error, GenerationRequest, Result, TypeDescriptor};

/// The two flavours of generated iterable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Slice backed, finite and in memory.
    Plain,
    /// Channel backed, streaming.
    Channel,
}

impl Kind {
    /// Whether iterables of this kind can offer `capability`.
    pub fn supports(self, capability: Capability) -> bool {
        match self {
            Kind::Plain => capability != Capability::Array,
            Kind::Channel => !matches!(
                capability,
                Capability::All
                    | Capability::Some
                    | Capability::Find
                    | Capability::Reverse
                    | Capability::Splice
            ),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Plain => write!(f, "plain"),
            Kind::Channel => write!(f, "chan"),
        }
    }
}

/// A user-selectable capability of the generated iterable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Map,
    Filter,
    All,
    Some,
    #[serde(rename = "foreach")]
    ForEach,
    Concat,
    Find,
    Reverse,
    Splice,
    Reduce,
    Array,
}

impl Capability {
    /// Every capability, in emission order.
    pub const ALL: [Capability; 11] = [
        Capability::Map,
        Capability::Filter,
        Capability::All,
        Capability::Some,
        Capability::ForEach,
        Capability::Concat,
        Capability::Find,
        Capability::Reverse,
        Capability::Splice,
        Capability::Reduce,
        Capability::Array,
    ];

    /// The command-line flag enabling this capability.
    pub fn flag(self) -> &'static str {
        match self {
            Capability::Map => "map",
            Capability::Filter => "filter",
            Capability::All => "all",
            Capability::Some => "some",
            Capability::ForEach => "foreach",
            Capability::Concat => "concat",
            Capability::Find => "find",
            Capability::Reverse => "reverse",
            Capability::Splice => "splice",
            Capability::Reduce => "reduce",
            Capability::Array => "array",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

/// One independently rendered part of the output file.
///
/// The declaration order is the emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Package,
    Imports,
    Type,
    Map,
    MapResults,
    Filter,
    All,
    Some,
    ForEach,
    Concat,
    Find,
    Reverse,
    Splice,
    Reduce,
    Array,
}

impl Section {
    /// Every section, in emission order.
    pub const ALL: [Section; 15] = [
        Section::Package,
        Section::Imports,
        Section::Type,
        Section::Map,
        Section::MapResults,
        Section::Filter,
        Section::All,
        Section::Some,
        Section::ForEach,
        Section::Concat,
        Section::Find,
        Section::Reverse,
        Section::Splice,
        Section::Reduce,
        Section::Array,
    ];

    /// Template key for this section, without the kind prefix.
    ///
    /// The package clause is not templated.
    pub fn template_key(self) -> Option<&'static str> {
        Some(match self {
            Section::Package => return None,
            Section::Imports => "imports",
            Section::Type => "type",
            Section::Map => "map",
            Section::MapResults => "map_results",
            Section::Filter => "filter",
            Section::All => "all",
            Section::Some => "some",
            Section::ForEach => "foreach",
            Section::Concat => "concat",
            Section::Find => "find",
            Section::Reverse => "reverse",
            Section::Splice => "splice",
            Section::Reduce => "reduce",
            Section::Array => "array",
        })
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Package => f.write_str("package"),
            other => f.write_str(other.template_key().unwrap_or_default()),
        }
    }
}

/// Capabilities a plain (slice backed) iterable can carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainPlan {
    pub map: bool,
    pub filter: bool,
    pub all: bool,
    pub some: bool,
    pub for_each: bool,
    pub concat: bool,
    pub find: bool,
    pub reverse: bool,
    pub splice: bool,
    pub reduce: bool,
}

/// Capabilities a channel backed iterable can carry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelPlan {
    pub map: bool,
    pub filter: bool,
    pub for_each: bool,
    pub concat: bool,
    pub reduce: bool,
    pub array: bool,
}

/// The validated set of sections to render for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationPlan {
    Plain(PlainPlan),
    Channel(ChannelPlan),
}

impl GenerationPlan {
    /// Check the request against the capability matrix of the descriptor's kind.
    ///
    /// Capabilities are checked in emission order and the first one the kind
    /// cannot offer aborts resolution with [`Error::Capability`].
    pub fn resolve(descriptor: &TypeDescriptor, request: &GenerationRequest) -> Result<Self> {
        let kind = descriptor.kind();
        if let Some(capability) = Capability::ALL
            .into_iter()
            .find(|c| request.requests(*c) && !kind.supports(*c))
        {
            return Err(Error::capability(capability, kind));
        }

        let wants = |c| request.requests(c);
        Ok(match kind {
            Kind::Plain => GenerationPlan::Plain(PlainPlan {
                map: wants(Capability::Map),
                filter: wants(Capability::Filter),
                all: wants(Capability::All),
                some: wants(Capability::Some),
                for_each: wants(Capability::ForEach),
                concat: wants(Capability::Concat),
                find: wants(Capability::Find),
                reverse: wants(Capability::Reverse),
                splice: wants(Capability::Splice),
                reduce: wants(Capability::Reduce),
            }),
            Kind::Channel => GenerationPlan::Channel(ChannelPlan {
                map: wants(Capability::Map),
                filter: wants(Capability::Filter),
                for_each: wants(Capability::ForEach),
                concat: wants(Capability::Concat),
                reduce: wants(Capability::Reduce),
                array: wants(Capability::Array),
            }),
        })
    }

    pub fn kind(&self) -> Kind {
        match self {
            GenerationPlan::Plain(_) => Kind::Plain,
            GenerationPlan::Channel(_) => Kind::Channel,
        }
    }

    /// Whether `section` is part of this plan.
    pub fn contains(&self, section: Section) -> bool {
        match section {
            Section::Package | Section::Imports | Section::Type => true,
            Section::Map | Section::MapResults => self.has(Capability::Map),
            Section::Filter => self.has(Capability::Filter),
            Section::All => self.has(Capability::All),
            Section::Some => self.has(Capability::Some),
            Section::ForEach => self.has(Capability::ForEach),
            Section::Concat => self.has(Capability::Concat),
            Section::Find => self.has(Capability::Find),
            Section::Reverse => self.has(Capability::Reverse),
            Section::Splice => self.has(Capability::Splice),
            Section::Reduce => self.has(Capability::Reduce),
            Section::Array => self.has(Capability::Array),
        }
    }

    /// Whether the plan carries `capability`.
    pub fn has(&self, capability: Capability) -> bool {
        match self {
            GenerationPlan::Plain(p) => match capability {
                Capability::Map => p.map,
                Capability::Filter => p.filter,
                Capability::All => p.all,
                Capability::Some => p.some,
                Capability::ForEach => p.for_each,
                Capability::Concat => p.concat,
                Capability::Find => p.find,
                Capability::Reverse => p.reverse,
                Capability::Splice => p.splice,
                Capability::Reduce => p.reduce,
                Capability::Array => false,
            },
            GenerationPlan::Channel(p) => match capability {
                Capability::Map => p.map,
                Capability::Filter => p.filter,
                Capability::ForEach => p.for_each,
                Capability::Concat => p.concat,
                Capability::Reduce => p.reduce,
                Capability::Array => p.array,
                Capability::All
                | Capability::Some
                | Capability::Find
                | Capability::Reverse
                | Capability::Splice => false,
            },
        }
    }

    /// Sections to render, in emission order.
    pub fn sections(&self) -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|s| self.contains(*s))
            .collect()
    }

    /// Channel concatenation fans in with a `sync.WaitGroup`.
    pub fn needs_sync(&self) -> bool {
        matches!(self, GenerationPlan::Channel(p) if p.concat)
    }
}
