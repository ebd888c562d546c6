/*!
An owned tree representation of SVG documents.

Documents are parsed with [`parse::roxmltree`], transformed through a [`visitor::Visitor`]
and written back out with [`serialize`].

# Example

```
use svg2jsx_ast::{parse::roxmltree::parse, xmlwriter::{Indent, Options}};

let document = parse(r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0"/></svg>"#)
    .expect("valid svg");
assert_eq!(document.root.name.local, "svg");

let markup = document
    .serialize_with_options(Options {
        indent: Indent::None,
    })
    .expect("serializable document");
assert_eq!(markup, r#"<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0"/></svg>"#);
```
*/
pub mod document;
pub mod element;
pub mod name;
pub mod node;
pub mod visitor;
pub mod xmlwriter;

#[cfg(feature = "roxmltree")]
pub mod parse;

#[cfg(feature = "serialize")]
pub mod serialize;
