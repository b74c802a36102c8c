//! Page import module.
//!
//! Each stage mutates the shared tree in place and hands it to the next one.
//!
//! # Module Structure
//!
//! - `chrome`: Site header/footer/navigation removal
//! - `hero`: Primary heading promotion and hero media pairing
//! - `widgets`: Experience fragment and form extraction
//! - `videos`: Video-to-link normalization
//! - `icons`: Icon image to `:symbol:` substitution
//! - `tabs`: Tab list to `Tabs` block and sections
//! - `columns`: Grouping container classification into `Columns` blocks
//! - `blocks`: Block table construction shared by the stages above
//! - `metadata_block`: Trailing `Metadata` block
//! - `pipeline`: Stage orchestration
//!
//! # Usage
//!
//! ```rust
//! use rs_block_importer::{dom, importer::pipeline, Options, PageMetadata};
//!
//! let doc = dom::parse(r#"<div class="dexter-FlexContainer-Items"><p>a</p><p>b</p></div>"#);
//! let outcome = pipeline::transform(&doc, None, &PageMetadata::default(), &Options::default())?;
//! assert!(outcome.warnings.is_empty());
//! assert_eq!(doc.select("table").length(), 1);
//! # Ok::<(), rs_block_importer::Error>(())
//! ```

pub mod blocks;
pub mod chrome;
pub mod columns;
pub mod hero;
pub mod icons;
pub mod metadata_block;
pub mod pipeline;
pub mod tabs;
pub mod videos;
pub mod widgets;

pub use blocks::{BlockTable, Cell, ClassifiedBlock, Shape};
pub use pipeline::{transform, TransformOutcome};
