//! # Pagecraft React Compiler
//!
//! Turns a page [`Document`](pagecraft_model::Document) into JSX source.
//!
//! ```text
//! <div className="min-h-screen …">        root (main in semantic mode)
//!   <div style={{marginTop:'16px'}}>      leaf wrapper: margins + alignment
//!     <button style={{…}}>Click</button>  fragment: colors, sizes, paddings
//!   </div>
//!
//!   <section className="w-full flex …">   container: layout classes
//!     …
//!   </section>
//! </div>
//! ```

mod classes;
mod compiler;
mod context;
mod splice;
mod style_object;
mod tags;

pub use classes::{alignment_class, container_classes, PAGE_SURFACE};
pub use compiler::{compile_to_react, EMPTY_DOCUMENT_PLACEHOLDER};
pub use context::{CompileOptions, CompilerContext};
pub use splice::{find_opening_tag, inject_style, Attribute, AttributeValue, OpeningTag};
pub use style_object::{StyleEntry, StyleObject, StyleValue};
pub use tags::{root_tag, wrapper_tag, GENERIC_TAG, MAIN_TAG};

#[cfg(test)]
mod tests;
