//! TwiML DSL code generator
//!
//! Reads a datafile describing every markup class, its builder constructors
//! and the children it accepts, and writes the Rust source of the nested-block
//! layer (`src/twiml/dsl.rs` is produced this way from `data/twiml.json`).
//!
//! Datafile layout:
//!
//! ```json
//! {
//!     "<package>": {
//!         "<Class>": {
//!             "constructors": [["<arg>:<Type>", ...], ...],
//!             "children": ["<Class>", ...]
//!         }
//!     }
//! }
//! ```

mod naming;


use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::{BlocksError, Result};

pub use naming::{function_name, snake_case};

/// One class entry of the datafile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSpec {
    /// Argument lists of the builder's constructors, each argument `name:Type`
    #[serde(default)]
    pub constructors: Vec<Vec<String>>,
    /// Classes accepted as children
    #[serde(default)]
    pub children: Vec<String>,
}

/// Package name -> class name -> class entry
pub type DataFile = BTreeMap<String, BTreeMap<String, ClassSpec>>;

/// Output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenOptions {
    /// Module the verb and builder types are imported from
    pub verbs_path: String,
    /// Datafile name mentioned in the generated header
    pub source_name: Option<String>,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            verbs_path: "super::verbs".to_string(),
            source_name: None,
        }
    }
}

/// Generated source plus the children that could not be wired up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub source: String,
    /// Classes listed as children that have no constructors
    pub missing: Vec<String>,
}

/// Name of the block parameter every generated constructor takes last
const BLOCK_PARAMETER: &str = "configure";

/// A constructor argument parsed from `name:Type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub ty: String,
}

impl Argument {
    pub fn parse(spec: &str) -> Result<Self> {
        let (name, ty) = spec
            .split_once(':')
            .ok_or_else(|| BlocksError::InvalidArgument(format!("{:?} is not name:Type", spec)))?;
        let name = name.trim();
        let ty = ty.trim();

        if !naming::is_identifier(name) {
            return Err(BlocksError::InvalidArgument(format!(
                "{:?} is not a valid argument name",
                name
            )));
        }
        if name == BLOCK_PARAMETER {
            return Err(BlocksError::InvalidArgument(format!(
                "{:?} is reserved for the configuration block",
                name
            )));
        }
        if ty.is_empty() {
            return Err(BlocksError::InvalidArgument(format!(
                "argument {:?} has no type",
                name
            )));
        }

        Ok(Self {
            name: name.to_string(),
            ty: ty.to_string(),
        })
    }

    /// Parameter declaration; `String` is accepted as `impl Into<String>`
    pub fn declare(&self) -> String {
        if self.ty == "String" {
            format!("{}: impl Into<String>", self.name)
        } else {
            format!("{}: {}", self.name, self.ty)
        }
    }
}

/// One builder constructor of a class
#[derive(Debug, Clone, PartialEq, Eq)]
struct Constructor {
    class: String,
    index: usize,
    args: Vec<Argument>,
}

impl Constructor {
    fn suffix(&self) -> String {
        if self.args.is_empty() {
            self.index.to_string()
        } else {
            self.args
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join("_")
        }
    }

    /// Free function and nested method name
    fn function(&self) -> String {
        let base = function_name(&self.class);
        if self.index == 0 {
            base
        } else {
            format!("{}_with_{}", base.trim_end_matches('_'), self.suffix())
        }
    }

    /// Associated function on the builder
    fn builder_constructor(&self) -> String {
        if self.index == 0 {
            "new".to_string()
        } else {
            format!("with_{}", self.suffix())
        }
    }

    fn declarations(&self) -> Vec<String> {
        self.args.iter().map(Argument::declare).collect()
    }

    fn arg_names(&self) -> Vec<&str> {
        self.args.iter().map(|a| a.name.as_str()).collect()
    }
}

/// Parse datafile JSON
pub fn parse_datafile(json: &str) -> Result<DataFile> {
    Ok(serde_json::from_str(json)?)
}

/// Generate DSL source for a parsed datafile
pub fn generate(data: &DataFile, options: &CodegenOptions) -> Result<Generated> {
    let mut classes: BTreeMap<&str, &ClassSpec> = BTreeMap::new();
    for (package, types) in data {
        for (class, spec) in types {
            if !naming::is_identifier(class) {
                return Err(BlocksError::Codegen(format!(
                    "{:?} in package {:?} is not a valid type name",
                    class, package
                )));
            }
            if classes.insert(class.as_str(), spec).is_some() {
                return Err(BlocksError::Codegen(format!(
                    "{} is declared in more than one package",
                    class
                )));
            }
        }
    }

    let mut constructors: BTreeMap<&str, Vec<Constructor>> = BTreeMap::new();
    let mut functions: BTreeMap<String, &str> = BTreeMap::new();
    for (&class, &spec) in &classes {
        let mut parsed = Vec::with_capacity(spec.constructors.len());
        for (index, args) in spec.constructors.iter().enumerate() {
            let args = args
                .iter()
                .map(|a| Argument::parse(a))
                .collect::<Result<Vec<_>>>()?;
            let mut names = BTreeSet::new();
            if let Some(dup) = args.iter().find(|a| !names.insert(a.name.as_str())) {
                return Err(BlocksError::InvalidArgument(format!(
                    "{} constructor {} repeats argument {:?}",
                    class, index, dup.name
                )));
            }

            let ctor = Constructor {
                class: class.to_string(),
                index,
                args,
            };
            if let Some(other) = functions.insert(ctor.function(), class) {
                return Err(BlocksError::Codegen(format!(
                    "{} and {} both generate `{}`",
                    other,
                    class,
                    ctor.function()
                )));
            }
            parsed.push(ctor);
        }
        if !parsed.is_empty() {
            constructors.insert(class, parsed);
        }
    }

    let mut parents: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    let mut missing: BTreeSet<String> = BTreeSet::new();
    for (&class, &spec) in &classes {
        for child in &spec.children {
            if constructors.contains_key(child.as_str()) {
                parents.entry(class).or_default().insert(child.as_str());
            } else {
                missing.insert(child.clone());
            }
        }
    }
    let missing: Vec<String> = missing.into_iter().collect();

    let mut source = String::new();
    write_header(&mut source, options)?;

    for ctors in constructors.values() {
        for ctor in ctors {
            write_constructor(&mut source, ctor)?;
        }
    }

    for (parent, children) in &parents {
        write_children(&mut source, parent, children, &constructors)?;
    }

    writeln!(source, "// MISSING: {:?}", missing).map_err(codegen_error)?;

    if !missing.is_empty() {
        warn!(?missing, "children declared without constructors");
    }
    debug!(
        classes = classes.len(),
        parents = parents.len(),
        "generated DSL source"
    );

    Ok(Generated { source, missing })
}

/// Read a datafile, generate, and write the result (stdout when `output` is `None`)
pub fn generate_file(
    input: &Path,
    output: Option<&Path>,
    options: &CodegenOptions,
) -> Result<Generated> {
    info!("Generating DSL from: {:?}", input);

    let content = std::fs::read_to_string(input)?;
    let data = parse_datafile(&content)?;
    let generated = generate(&data, options)?;

    match output {
        Some(path) => {
            std::fs::write(path, &generated.source)?;
            info!("Wrote {} bytes to {:?}", generated.source.len(), path);
        }
        None => print!("{}", generated.source),
    }

    Ok(generated)
}

fn write_header(out: &mut String, options: &CodegenOptions) -> Result<()> {
    writeln!(out, "//! Nested-block constructors for TwiML verbs").map_err(codegen_error)?;
    writeln!(out, "//!").map_err(codegen_error)?;
    let origin = match &options.source_name {
        Some(name) => writeln!(out, "//! Generated by `twiml-codegen` from `{}`.", name),
        None => writeln!(out, "//! Generated by `twiml-codegen`."),
    };
    origin.map_err(codegen_error)?;
    writeln!(out, "//! Edit the datafile and regenerate instead of changing this file.")
        .map_err(codegen_error)?;
    writeln!(out).map_err(codegen_error)?;
    writeln!(out, "use {}::*;", options.verbs_path).map_err(codegen_error)?;
    writeln!(out, "use crate::adapter::build_with;").map_err(codegen_error)?;
    writeln!(out).map_err(codegen_error)?;
    Ok(())
}

fn write_constructor(out: &mut String, ctor: &Constructor) -> Result<()> {
    let class = &ctor.class;
    let mut params = ctor.declarations();
    params.push(format!(
        "{}: impl FnOnce(&mut {}Builder)",
        BLOCK_PARAMETER, class
    ));

    let call_args = ctor.arg_names().join(", ");

    writeln!(out, "/// Configure a `{}` in a block", class).map_err(codegen_error)?;
    writeln!(out, "pub fn {}(", ctor.function()).map_err(codegen_error)?;
    for param in &params {
        writeln!(out, "    {},", param).map_err(codegen_error)?;
    }
    writeln!(out, ") -> {} {{", class).map_err(codegen_error)?;
    writeln!(
        out,
        "    build_with({}Builder::{}({}), {})",
        class,
        ctor.builder_constructor(),
        call_args,
        BLOCK_PARAMETER
    )
    .map_err(codegen_error)?;
    writeln!(out, "}}").map_err(codegen_error)?;
    writeln!(out).map_err(codegen_error)?;
    Ok(())
}

fn write_children(
    out: &mut String,
    parent: &str,
    children: &BTreeSet<&str>,
    constructors: &BTreeMap<&str, Vec<Constructor>>,
) -> Result<()> {
    writeln!(out, "twiml_children! {{").map_err(codegen_error)?;
    writeln!(out, "    {}Builder {{", parent).map_err(codegen_error)?;
    for child in children {
        let Some(ctors) = constructors.get(child) else {
            continue;
        };
        writeln!(
            out,
            "        add_{}: {} as {}Builder {{",
            snake_case(child),
            child,
            child
        )
        .map_err(codegen_error)?;
        for ctor in ctors {
            writeln!(
                out,
                "            {}({});",
                ctor.function(),
                ctor.declarations().join(", ")
            )
            .map_err(codegen_error)?;
        }
        writeln!(out, "        }}").map_err(codegen_error)?;
    }
    writeln!(out, "    }}").map_err(codegen_error)?;
    writeln!(out, "}}").map_err(codegen_error)?;
    writeln!(out).map_err(codegen_error)?;
    Ok(())
}

fn codegen_error(err: std::fmt::Error) -> BlocksError {
    BlocksError::Codegen(err.to_string())
}
